//! HTTP API layer

mod routes;
mod handlers;

pub use handlers::NO_SUCH_TOUR;
pub use routes::{create_router, ApiDoc, AppState};
