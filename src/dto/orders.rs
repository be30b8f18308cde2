use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Order;

/// Shipping and payment form submitted at checkout. Field names follow
/// the storefront form. Must pass [`crate::validate::validate_checkout`]
/// before an order is created; the order manager does not re-validate.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub card_number: String,
    pub expiry_date: String,
    pub cvv: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderList {
    pub items: Vec<Order>,
}
