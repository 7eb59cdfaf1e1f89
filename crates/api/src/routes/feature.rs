use axum::routing::get;
use axum::Router;

use crate::handlers::feature;
use crate::state::AppState;

/// Routes mounted at `/features`.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(feature::list))
}
