//! Draft infrastructure

mod service;

pub use service::DraftService;
