//! API types - request/response payloads and errors

mod error;
mod reading;

pub use error::{ApiError, ApiErrorDetail, ApiErrorResponse, ApiErrorType};
pub use reading::{CardSummary, CardsResponse, ReadingCardResponse, ReadingResponse};
