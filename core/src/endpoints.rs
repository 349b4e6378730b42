//! Endpoint path registry for the storefront API.
//!
//! # Design
//! Every path is assembled by `api_path!` from the single `/api` base
//! segment, so the full set is deterministic given the base. Collection
//! resources keep their trailing slash. There is no validation, escaping,
//! or parameterization here — callers append dynamic segments (such as a
//! resource id) to the relevant constant before use.

/// Prepend the shared API base to a sequence of path segments.
macro_rules! api_path {
    ($($segment:literal),* $(,)?) => {
        concat!("/api" $(, $segment)*)
    };
}

/// Shared base path of every API endpoint.
pub const API_BASE: &str = api_path!();

// --- Store ---

/// Sub-base for the store catalog domain.
pub const STORE: &str = api_path!("/store");

pub const PRODUCTS: &str = api_path!("/store", "/products/");
pub const CATEGORIES: &str = api_path!("/store", "/categories/");
pub const SIZES: &str = api_path!("/store", "/sizes/");
pub const PRODUCT_IMAGES: &str = api_path!("/store", "/product-images/");
pub const COUPONS: &str = api_path!("/store", "/coupons/");
pub const REVIEWS: &str = api_path!("/store", "/reviews/");

// --- Users ---

/// Sub-base for the users/auth domain.
pub const USERS: &str = api_path!("/users");

pub const REGISTER: &str = api_path!("/users", "/register/");
pub const LOGIN: &str = api_path!("/users", "/login/");
pub const LOGOUT: &str = api_path!("/users", "/logout/");
pub const PROFILE: &str = api_path!("/users", "/profile/");
pub const PROFILE_DETAILS: &str = api_path!("/users", "/profile/details/");
pub const PROFILE_UPDATE: &str = api_path!("/users", "/profile/update/");

// JWT pair endpoints live directly under the base, not under /users.
pub const TOKEN: &str = api_path!("/token/");
pub const TOKEN_REFRESH: &str = api_path!("/token/refresh/");

// --- Orders ---

/// Sub-base for the orders/cart/checkout domain.
pub const ORDERS_BASE: &str = api_path!("/orders");

pub const ORDERS: &str = api_path!("/orders", "/orders/");
pub const ORDER_ITEMS: &str = api_path!("/orders", "/order-items/");
pub const CARTS: &str = api_path!("/orders", "/carts/");
pub const CART_ITEMS: &str = api_path!("/orders", "/cart-items/");
pub const CHECKOUT: &str = api_path!("/orders", "/checkout/");
pub const STRIPE_WEBHOOK: &str = api_path!("/orders", "/webhook/stripe/");
pub const APPLY_COUPON: &str = api_path!("/orders", "/apply-coupon/");
