//! Request payload DTOs for the storefront API.
//!
//! # Design
//! These mirror the backend's write-side serializers but are defined
//! independently; the recording mock server keeps integration tests honest
//! about what actually goes over the wire. Optional fields are skipped
//! when absent so partial updates only touch the fields present in the
//! JSON. Response shapes are deliberately not modeled — the fetch wrapper
//! hands back raw responses and parsing is up to the caller.

use serde::{Deserialize, Serialize};

/// Payload for `POST /api/users/register/`. The backend rejects the
/// request when `password` and `password2` differ.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub password2: String,
}

/// Payload for `POST /api/users/login/` and `POST /api/token/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Payload for `POST /api/token/refresh/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenRefreshRequest {
    pub refresh: String,
}

/// Payload for `POST /api/users/profile/update/`. Omitted fields remain
/// unchanged on the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Payload for `POST /api/orders/cart-items/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartItemInput {
    pub product_id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_id: Option<u64>,
    pub quantity: u32,
}

/// Payload for `POST /api/orders/apply-coupon/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplyCouponRequest {
    pub code: String,
}

/// Payload for `POST /api/store/reviews/`. The backend fills in the
/// reviewing user from the auth token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewInput {
    pub rating: u8,
    pub review: String,
}
