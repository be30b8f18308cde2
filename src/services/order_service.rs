use chrono::Utc;

use crate::{
    dto::orders::CheckoutRequest,
    error::{AppError, AppResult},
    models::{CartItem, Order, OrderStatus, ShippingInfo},
    response::{ApiResponse, Meta},
    services::cart_service,
    store::{CART_KEY, ORDERS_KEY, Store},
    validate::{normalize_card_number, validate_checkout},
};

/// Turn the current cart plus the checkout form into a recorded order.
///
/// The form is validated first and an empty cart is rejected before any
/// state changes. The order snapshots the cart (it is a pure value,
/// unaffected by later cart edits), is appended to the order list, and
/// the cart is cleared afterwards. The two writes land on independent
/// keys; an interruption between them leaves the order recorded with the
/// cart intact, which callers must tolerate.
pub fn checkout(store: &Store, payload: CheckoutRequest) -> AppResult<ApiResponse<Order>> {
    validate_checkout(&payload)?;

    let items: Vec<CartItem> = store.get(CART_KEY);
    if items.is_empty() {
        return Err(AppError::BadRequest("Cart is empty".into()));
    }

    let total_amount = cart_service::subtotal(&items);
    let now = Utc::now();

    let order = Order {
        id: now.timestamp_millis().to_string(),
        shipping_info: ShippingInfo {
            name: payload.name,
            email: payload.email,
            phone: payload.phone,
            address: payload.address,
            city: payload.city,
            state: payload.state,
            zip_code: payload.zip_code,
        },
        masked_card_number: mask_card_number(&payload.card_number),
        items,
        total_amount,
        status: OrderStatus::Pending,
        order_date: now,
    };

    let mut orders: Vec<Order> = store.get(ORDERS_KEY);
    orders.push(order.clone());
    store.set(ORDERS_KEY, &orders)?;

    store.remove(CART_KEY)?;

    tracing::info!(order_id = %order.id, total = %order.total_amount, "order created");
    Ok(ApiResponse::success(
        "Order confirmed",
        order,
        Some(Meta::empty()),
    ))
}

pub fn get_order(store: &Store, id: &str) -> AppResult<ApiResponse<Order>> {
    let orders: Vec<Order> = store.get(ORDERS_KEY);
    let order = orders
        .into_iter()
        .find(|order| order.id == id)
        .ok_or(AppError::NotFound)?;

    Ok(ApiResponse::success("OK", order, Some(Meta::empty())))
}

/// Keep only the last four digits; the rest of the card number never
/// reaches the store.
fn mask_card_number(card_number: &str) -> String {
    let digits = normalize_card_number(card_number);
    let last_four = &digits[digits.len().saturating_sub(4)..];
    format!("****-****-****-{last_four}")
}
