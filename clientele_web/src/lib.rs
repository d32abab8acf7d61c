pub mod error;
pub mod handler;

use std::sync::Arc;

use axum::{routing::get, Router};
use clientele::domain::customer::CustomerRepository;

pub const CUSTOMER_PATH: &str = "/Customer";

/// ハンドラ間で共有する状態
#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<dyn CustomerRepository>,
}

impl AppState {
    pub fn new(repository: Arc<dyn CustomerRepository>) -> Self {
        Self { repository }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            CUSTOMER_PATH,
            get(handler::list_customers).post(handler::add_customer),
        )
        .with_state(state)
}
