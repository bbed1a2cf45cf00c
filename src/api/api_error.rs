// src/api/api_error.rs

use std::error::Error;
use std::fmt;

/// Failures talking to the marketplace REST API.
#[derive(Debug)]
pub enum ApiError {
    Network(String),
    /// Non-success HTTP status, with whatever body the server sent.
    Status(u16, String),
    JsonParse(String),
    UnexpectedShape(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "Network error: {msg}"),
            ApiError::Status(code, body) => write!(f, "API returned {code}: {body}"),
            ApiError::JsonParse(msg) => write!(f, "JSON parse error: {msg}"),
            ApiError::UnexpectedShape(msg) => write!(f, "Unexpected data shape: {msg}"),
        }
    }
}

impl Error for ApiError {}
