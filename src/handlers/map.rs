use axum::{
    extract::{multipart::MultipartRejection, ConnectInfo, Multipart, State},
    http::StatusCode,
    response::Html,
};
use std::net::SocketAddr;
use tracing::{error, info};

use super::{error::ApiError, AppState};
use crate::{libraries::gpx_decoder::decode, models::MapView};

/// Name of the form field carrying the GPX file
pub const GPX_FIELD: &str = "gpx";

/// Accept a GPX upload and render it as a map page
pub async fn map(
    State(state): State<AppState>,
    remote: Option<ConnectInfo<SocketAddr>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Html<String>, ApiError> {
    match remote {
        Some(ConnectInfo(addr)) => info!("Map requested by {}", addr),
        None => info!("Map requested"),
    }

    let upload = read_gpx_field(multipart).await.inspect_err(|e| {
        error!("Rejected upload: {}", e);
    })?;

    let track = decode(upload.as_slice()).inspect_err(|e| {
        error!("Bad gpx: {}", e);
    })?;
    info!(
        "GPX parsed - name: {:?}, points: {}",
        track.name,
        track.points.len()
    );

    let view = MapView::from_track(&track).inspect_err(|e| {
        error!("Cannot build map for {:?}: {}", track.name, e);
    })?;
    info!("Minute aggregation - points: {}", view.points.len());

    Ok(Html(state.template.render(&view)))
}

async fn read_gpx_field(
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Vec<u8>, ApiError> {
    let mut multipart = multipart.map_err(|e| ApiError::BadForm(e.body_text()))?;

    loop {
        let field = multipart.next_field().await.map_err(|e| {
            if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
                ApiError::TooLarge
            } else {
                ApiError::BadForm(e.body_text())
            }
        })?;

        let Some(field) = field else {
            return Err(ApiError::MissingFile);
        };

        if field.name() != Some(GPX_FIELD) {
            continue;
        }

        let bytes = field.bytes().await.map_err(|e| {
            if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
                ApiError::TooLarge
            } else {
                ApiError::BadForm(e.body_text())
            }
        })?;
        return Ok(bytes.to_vec());
    }
}
