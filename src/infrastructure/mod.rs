//! Infrastructure layer - Service implementations, logging and metrics

pub mod draft;
pub mod logging;
pub mod observability;
