// Request-scoped failures surfaced to the caller.
//
// Both variants are terminal: the message is the whole response body and a
// failed request never leaves anything behind in the store.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApplicationError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),
}

impl ApplicationError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}
