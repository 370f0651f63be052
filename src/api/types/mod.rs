//! API request/response types

pub mod draft;
pub mod error;
pub mod query;

pub use draft::{
    DraftStartedResponse, EnterDraftResponse, MessageResponse, RegisteredTeamsResponse,
    TeamNameParams, TeamStatusResponse,
};
pub use error::{ApiError, ApiErrorResponse};
pub use query::Query;
