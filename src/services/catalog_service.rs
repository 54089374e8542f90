use crate::{
    catalog::MenuFilter,
    dto::catalog::{CanteenList, CanteenMenu, FoodItemList},
    error::{AppError, AppResult},
    models::Canteen,
    response::{ApiResponse, Meta},
    routes::params::{MenuQuery, Pagination, SearchQuery},
    state::AppState,
};

pub async fn list_canteens(
    state: &AppState,
    pagination: Pagination,
) -> AppResult<ApiResponse<CanteenList>> {
    let (items, meta) = pagination.apply(state.catalog.canteens().to_vec());
    Ok(ApiResponse::success("OK", CanteenList { items }, Some(meta)))
}

pub async fn get_canteen(state: &AppState, id: &str) -> AppResult<ApiResponse<Canteen>> {
    let canteen = state.catalog.canteen(id).cloned().ok_or(AppError::NotFound)?;
    Ok(ApiResponse::success("OK", canteen, Some(Meta::empty())))
}

pub async fn canteen_menu(
    state: &AppState,
    id: &str,
    query: MenuQuery,
) -> AppResult<ApiResponse<CanteenMenu>> {
    let canteen = state.catalog.canteen(id).cloned().ok_or(AppError::NotFound)?;
    let filter = MenuFilter {
        category: query.category,
        query: query.q,
    };
    let items = state
        .catalog
        .menu(&canteen.id, &filter)
        .into_iter()
        .cloned()
        .collect();

    Ok(ApiResponse::success(
        "OK",
        CanteenMenu { canteen, items },
        Some(Meta::empty()),
    ))
}

pub async fn search_items(
    state: &AppState,
    query: SearchQuery,
) -> AppResult<ApiResponse<FoodItemList>> {
    let found = state
        .catalog
        .search(query.q.as_deref().unwrap_or_default())
        .into_iter()
        .cloned()
        .collect();
    let (items, meta) = query.pagination().apply(found);
    Ok(ApiResponse::success("OK", FoodItemList { items }, Some(meta)))
}
