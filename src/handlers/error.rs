use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::libraries::{gpx_decoder::DecodeError, stats::AggregationInputError};

/// Failures of the map upload, each mapped to a client-facing response
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("bad form: {0}")]
    BadForm(String),

    #[error("upload exceeds the size limit")]
    TooLarge,

    #[error("missing gpx file")]
    MissingFile,

    #[error("bad gpx: {0}")]
    BadGpx(#[from] DecodeError),

    #[error("gpx has no track points")]
    EmptyTrack(#[from] AggregationInputError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::TooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::BadForm(_)
            | ApiError::MissingFile
            | ApiError::BadGpx(_)
            | ApiError::EmptyTrack(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// Short body text; details stay in the logs
    fn public_message(&self) -> &'static str {
        match self {
            ApiError::BadForm(_) => "bad form",
            ApiError::TooLarge => "file too large",
            ApiError::MissingFile => "missing gpx file",
            ApiError::BadGpx(_) => "bad gpx",
            ApiError::EmptyTrack(_) => "gpx has no track points",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), self.public_message()).into_response()
    }
}
