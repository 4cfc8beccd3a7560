use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::routing::post;
use axum::{Json, Router};
use data_display_engine::generate_with_summary;
use serde::{Deserialize, Serialize};

use crate::AppState;
use crate::error::ApiError;

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/generate", post(generate))
}

/// Body of `POST /api/generate`. Every field is optional; missing ones fall
/// back to the server's display defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct GenerateRequest {
    pub data: String,
    pub title: Option<String>,
    pub theme_color: Option<String>,
    pub auto_parse: Option<bool>,
    pub collapsed: Option<bool>,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub html: String,
    pub success: bool,
}

async fn generate(
    State(state): State<AppState>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<GenerateResponse>, ApiError> {
    let Json(req) = payload.map_err(|rejection| ApiError::InvalidRequest(rejection.body_text()))?;

    let defaults = state.defaults.as_ref();
    let options = defaults
        .clone()
        .with_title(req.title.as_deref())
        .with_theme_color(req.theme_color.as_deref())
        .with_auto_parse(req.auto_parse.unwrap_or(defaults.auto_parse_structured))
        .with_collapsed(req.collapsed.unwrap_or(defaults.collapsed_by_default));

    let page = generate_with_summary(&req.data, &options);
    log::info!(
        "POST /api/generate: {} byte input, {} section(s)",
        req.data.len(),
        page.section_count
    );

    Ok(Json(GenerateResponse {
        html: page.html,
        success: true,
    }))
}
