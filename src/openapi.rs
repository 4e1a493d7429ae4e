use axum::Json;
use utoipa::OpenApi;

use crate::{handlers, models};

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::health,
        handlers::create_stock,
        handlers::get_stock,
        handlers::get_all_stocks,
        handlers::update_stock,
        handlers::delete_stock,
    ),
    components(schemas(
        models::Stock,
        models::StockPayload,
        models::MutationResponse,
        handlers::HealthResponse,
    )),
    tags((name = "stock", description = "CRUD over the stocks table"))
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
