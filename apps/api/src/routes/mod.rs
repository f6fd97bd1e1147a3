pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/resumes", get(handlers::handle_list_resumes))
        .route("/api/upload-resume", post(handlers::handle_upload_resume))
        .with_state(state)
}
