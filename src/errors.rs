use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Failures while building a drink order or converting its units.
/// All of them are reported to the caller instead of dispensing with a
/// wrong factor.
#[derive(Error, Debug, PartialEq)]
pub enum DrinkOrderError {
    #[error("add-on level {0} is outside the dispensable range")]
    InvalidAddOnLevel(u8),

    #[error("drink kind code {0} is not stocked on this unit")]
    UnknownDrinkKind(u8),

    #[error("flavor add-on code {0} does not exist")]
    UnknownFlavorAddOn(u8),

    #[error("health additive code {0} does not exist")]
    UnknownHealthAdditive(u8),

    #[error("pump part number {0} is not installed on this unit")]
    UnknownPumpPartNumber(String),

    #[error("pump registry could not be read: {0}")]
    PumpRegistryError(String),
}

/// Failures surfaced to the kiosk browser
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Screen template {0} is missing")]
    MissingTemplate(String),

    #[error("Internal error: {0}")]
    InternalError(#[from] std::io::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::MissingTemplate { .. } => StatusCode::NOT_FOUND,
            AppError::InternalError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, self.to_string()).into_response()
    }
}
