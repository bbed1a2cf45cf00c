// src/errors.rs

use crate::api::ApiError;
use crate::convert::ConvertError;
use crate::loan::LoanError;
use std::error::Error;
use std::fmt;

/// Crate-level error for callers that drive several layers at once (the
/// browse session, embedding applications). Each layer keeps its own enum;
/// this only aggregates them.
#[derive(Debug)]
pub enum MarketError {
    Api(ApiError),
    Convert(ConvertError),
    Loan(LoanError),
}

impl fmt::Display for MarketError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarketError::Api(e) => write!(f, "{e}"),
            MarketError::Convert(e) => write!(f, "{e}"),
            MarketError::Loan(e) => write!(f, "{e}"),
        }
    }
}

impl Error for MarketError {}

impl From<ApiError> for MarketError {
    fn from(e: ApiError) -> Self {
        MarketError::Api(e)
    }
}

impl From<ConvertError> for MarketError {
    fn from(e: ConvertError) -> Self {
        MarketError::Convert(e)
    }
}

impl From<LoanError> for MarketError {
    fn from(e: LoanError) -> Self {
        MarketError::Loan(e)
    }
}
