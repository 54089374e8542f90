use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};

use crate::{
    dto::catalog::{CanteenList, CanteenMenu, FoodItemList},
    error::AppResult,
    models::Canteen,
    response::ApiResponse,
    routes::params::{MenuQuery, Pagination, SearchQuery},
    services::catalog_service,
    state::AppState,
};

pub fn canteen_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_canteens))
        .route("/{id}", get(get_canteen))
        .route("/{id}/menu", get(canteen_menu))
}

pub fn search_router() -> Router<AppState> {
    Router::new().route("/", get(search_items))
}

#[utoipa::path(
    get,
    path = "/api/canteens",
    params(Pagination),
    responses(
        (status = 200, description = "List canteens", body = ApiResponse<CanteenList>)
    ),
    tag = "Catalog"
)]
pub async fn list_canteens(
    State(state): State<AppState>,
    Query(pagination): Query<Pagination>,
) -> AppResult<Json<ApiResponse<CanteenList>>> {
    let resp = catalog_service::list_canteens(&state, pagination).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/canteens/{id}",
    params(
        ("id" = String, Path, description = "Canteen ID")
    ),
    responses(
        (status = 200, description = "Canteen details", body = ApiResponse<Canteen>),
        (status = 404, description = "Canteen not found"),
    ),
    tag = "Catalog"
)]
pub async fn get_canteen(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<Canteen>>> {
    let resp = catalog_service::get_canteen(&state, &id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/canteens/{id}/menu",
    params(
        ("id" = String, Path, description = "Canteen ID"),
        MenuQuery
    ),
    responses(
        (status = 200, description = "Menu filtered by category and search text", body = ApiResponse<CanteenMenu>),
        (status = 404, description = "Canteen not found"),
    ),
    tag = "Catalog"
)]
pub async fn canteen_menu(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<MenuQuery>,
) -> AppResult<Json<ApiResponse<CanteenMenu>>> {
    let resp = catalog_service::canteen_menu(&state, &id, query).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/search",
    params(SearchQuery),
    responses(
        (status = 200, description = "Food items matching name, description or canteen", body = ApiResponse<FoodItemList>)
    ),
    tag = "Catalog"
)]
pub async fn search_items(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> AppResult<Json<ApiResponse<FoodItemList>>> {
    let resp = catalog_service::search_items(&state, query).await?;
    Ok(Json(resp))
}
