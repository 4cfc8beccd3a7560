pub mod error;
pub mod form_page;
pub mod routes;

use data_display_engine::DisplayOptions;
use std::sync::Arc;

pub use error::ApiError;
pub use routes::create_router;

/// Shared handler state: the display defaults used when a request leaves a
/// field out.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub defaults: Arc<DisplayOptions>,
}

impl AppState {
    pub fn new(defaults: DisplayOptions) -> Self {
        Self {
            defaults: Arc::new(defaults),
        }
    }
}
