use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use mongodb::bson::Document;
use rand::Rng;

use crate::app::AppState;
use crate::error::AppError;

/// Pick one advertisement uniformly at random.
///
/// Separated from the HTTP layer so selection can be tested with a seeded
/// generator. An empty slice yields `None` instead of indexing past the end.
pub fn pick_random<'a, R>(ads: &'a [Document], rng: &mut R) -> Option<&'a Document>
where
    R: Rng + ?Sized,
{
    if ads.is_empty() {
        return None;
    }
    let idx = rng.random_range(0..ads.len());
    ads.get(idx)
}

/// Axum handler for `GET /advertising`.
///
/// Scans the whole `advertise` collection on every call and returns one
/// random document as JSON. Request parameters are ignored. An empty
/// collection yields `204 No Content`.
pub async fn get_advertising_handler(State(state): State<AppState>) -> Result<Response, AppError> {
    let ads = state.ads.find_all().await?;

    match pick_random(&ads, &mut rand::rng()) {
        Some(ad) => Ok((StatusCode::OK, Json(ad)).into_response()),
        None => Ok(StatusCode::NO_CONTENT.into_response()),
    }
}
