use axum::{extract::State, http::StatusCode, Json};

use crate::{
    db::stocks,
    error::AppError,
    extractors::{JsonBody, StockId},
    models::{MutationResponse, Stock, StockPayload},
    state::AppState,
};

#[utoipa::path(
    post,
    path = "/stock",
    request_body = StockPayload,
    responses(
        (status = 201, description = "Stock created", body = MutationResponse),
        (status = 400, description = "Malformed JSON body"),
    )
)]
pub async fn create_stock(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<StockPayload>,
) -> Result<(StatusCode, Json<MutationResponse>), AppError> {
    let id = stocks::insert_stock(&state.pool, &req).await?;
    Ok((StatusCode::CREATED, Json(MutationResponse::created(id))))
}

#[utoipa::path(
    get,
    path = "/stock/{id}",
    params(("id" = i32, Path, description = "Stock id")),
    responses(
        (status = 200, description = "Stock found", body = Stock),
        (status = 400, description = "Id is not an integer"),
        (status = 404, description = "No stock with this id"),
    )
)]
pub async fn get_stock(
    State(state): State<AppState>,
    StockId(id): StockId,
) -> Result<Json<Stock>, AppError> {
    let stock = stocks::get_stock(&state.pool, id)
        .await?
        .ok_or(AppError::StockNotFound)?;
    Ok(Json(stock))
}

#[utoipa::path(
    get,
    path = "/stock",
    responses((status = 200, description = "All stocks", body = [Stock]))
)]
pub async fn get_all_stocks(State(state): State<AppState>) -> Result<Json<Vec<Stock>>, AppError> {
    let all = stocks::list_stocks(&state.pool).await?;
    Ok(Json(all))
}

#[utoipa::path(
    put,
    path = "/stock/{id}",
    params(("id" = i32, Path, description = "Stock id")),
    request_body = StockPayload,
    responses(
        (status = 200, description = "Rows affected, 0 if the id does not exist", body = MutationResponse),
        (status = 400, description = "Bad id or malformed JSON body"),
    )
)]
pub async fn update_stock(
    State(state): State<AppState>,
    StockId(id): StockId,
    JsonBody(req): JsonBody<StockPayload>,
) -> Result<Json<MutationResponse>, AppError> {
    let rows = stocks::update_stock(&state.pool, id, &req).await?;
    Ok(Json(MutationResponse::updated(id, rows)))
}

#[utoipa::path(
    delete,
    path = "/stock/{id}",
    params(("id" = i32, Path, description = "Stock id")),
    responses(
        (status = 200, description = "Rows affected, 0 if the id does not exist", body = MutationResponse),
        (status = 400, description = "Id is not an integer"),
    )
)]
pub async fn delete_stock(
    State(state): State<AppState>,
    StockId(id): StockId,
) -> Result<Json<MutationResponse>, AppError> {
    let rows = stocks::delete_stock(&state.pool, id).await?;
    Ok(Json(MutationResponse::deleted(id, rows)))
}
