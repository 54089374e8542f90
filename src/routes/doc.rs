use utoipa::OpenApi;
use utoipa::openapi::OpenApi as OpenApiSpec;
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        auth::{LoginRequest, LoginResponse, RegisterRequest, SessionStatus},
        cart::{AddToCartRequest, CartView, UpdateQuantityRequest},
        catalog::{CanteenList, CanteenMenu, FoodItemList},
        checkout::CheckoutRequest,
        profile::UpdateProfileRequest,
    },
    models::{Canteen, CartLine, Category, FoodItem, OrderDraft, PaymentMethod, Role, UserIdentity},
    response::{ApiResponse, Meta},
    routes::{auth, cart, catalog, checkout, health, params, profile},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        catalog::list_canteens,
        catalog::get_canteen,
        catalog::canteen_menu,
        catalog::search_items,
        cart::cart_view,
        cart::add_to_cart,
        cart::update_quantity,
        cart::remove_from_cart,
        cart::clear_cart,
        auth::login,
        auth::register,
        auth::logout,
        profile::get_profile,
        profile::update_profile,
        profile::owner_canteen,
        checkout::checkout,
        checkout::confirmation
    ),
    components(
        schemas(
            Canteen,
            FoodItem,
            Category,
            CartLine,
            Role,
            UserIdentity,
            PaymentMethod,
            OrderDraft,
            CanteenList,
            CanteenMenu,
            FoodItemList,
            CartView,
            AddToCartRequest,
            UpdateQuantityRequest,
            LoginRequest,
            LoginResponse,
            RegisterRequest,
            SessionStatus,
            UpdateProfileRequest,
            CheckoutRequest,
            params::Pagination,
            params::MenuQuery,
            params::SearchQuery,
            health::HealthData,
            Meta,
            ApiResponse<CartView>,
            ApiResponse<CanteenList>,
            ApiResponse<CanteenMenu>,
            ApiResponse<FoodItemList>,
            ApiResponse<OrderDraft>,
            ApiResponse<LoginResponse>,
            ApiResponse<UserIdentity>
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Catalog", description = "Canteens, menus and search"),
        (name = "Cart", description = "Cart endpoints"),
        (name = "Auth", description = "Login, registration and logout"),
        (name = "Profile", description = "Logged-in identity"),
        (name = "Checkout", description = "Order drafts and confirmation"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
