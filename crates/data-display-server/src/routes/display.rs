use axum::extract::State;
use axum::response::Html;
use axum::routing::{get, post};
use axum::{Form, Router};
use data_display_engine::generate_with_summary;
use serde::Deserialize;

use crate::AppState;
use crate::error::ApiError;
use crate::form_page::render_form_page;

/// Where the generated page's back link points.
pub const FORM_PATH: &str = "/";

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(FORM_PATH, get(form))
        .route("/display", post(display))
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DisplayForm {
    data: String,
    title: Option<String>,
    theme_color: Option<String>,
    /// Browsers send `on` for a ticked checkbox and nothing otherwise
    collapsed: Option<String>,
}

async fn form(State(state): State<AppState>) -> Html<String> {
    Html(render_form_page(&state.defaults))
}

async fn display(
    State(state): State<AppState>,
    Form(form): Form<DisplayForm>,
) -> Result<Html<String>, ApiError> {
    if form.data.is_empty() {
        return Err(ApiError::MissingData);
    }

    let options = state
        .defaults
        .as_ref()
        .clone()
        .with_title(form.title.as_deref())
        .with_theme_color(form.theme_color.as_deref())
        .with_collapsed(form.collapsed.as_deref() == Some("on"))
        .with_back_link(FORM_PATH);

    let page = generate_with_summary(&form.data, &options);
    log::info!(
        "POST /display: {} byte input, {} section(s)",
        form.data.len(),
        page.section_count
    );
    Ok(Html(page.html))
}
