use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::CartItem;

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateQuantityRequest {
    /// Stored exactly as given; clamping to a sensible minimum is the
    /// caller's responsibility, not the store's.
    pub quantity: i32,
}

/// Derived cart totals, one field per summary line. Shipping is free and
/// no tax is charged, so the total equals the subtotal.
#[derive(Debug, Serialize, ToSchema)]
pub struct CartSummary {
    pub subtotal: Decimal,
    pub shipping: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CartView {
    pub items: Vec<CartItem>,
    pub summary: CartSummary,
}
