pub mod api;
pub mod display;

use axum::Router;

use crate::AppState;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(display::routes())
        .merge(api::routes())
        .with_state(state)
}
