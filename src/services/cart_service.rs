use rust_decimal::Decimal;

use crate::{
    dto::cart::{CartSummary, CartView},
    error::{AppError, AppResult},
    models::{CartItem, Product},
    response::{ApiResponse, Meta},
    store::{CART_KEY, Store},
};

pub fn list_cart(store: &Store) -> AppResult<ApiResponse<CartView>> {
    let items: Vec<CartItem> = store.get(CART_KEY);
    let summary = summarize(&items);
    Ok(ApiResponse::success(
        "OK",
        CartView { items, summary },
        Some(Meta::empty()),
    ))
}

/// Add one unit of a product. A product already in the cart gets its
/// quantity bumped instead of a second line; first-add order is kept.
/// The response message is the one-per-call confirmation notification.
pub fn add_to_cart(store: &Store, product: Product) -> AppResult<ApiResponse<CartItem>> {
    let mut items: Vec<CartItem> = store.get(CART_KEY);

    let item = match items.iter().position(|item| item.product.id == product.id) {
        Some(index) => {
            let existing = &mut items[index];
            existing.quantity += 1;
            existing.clone()
        }
        None => {
            let item = CartItem {
                product,
                quantity: 1,
            };
            items.push(item.clone());
            item
        }
    };

    store.set(CART_KEY, &items)?;

    tracing::info!(product_id = %item.product.id, quantity = item.quantity, "added to cart");
    Ok(ApiResponse::success(
        format!("{} added to cart!", item.product.name),
        item,
        None,
    ))
}

/// Replace an item's quantity in place, storing the integer exactly as
/// given. Presentation layers clamp to >= 1 before calling; the store
/// itself enforces no lower bound.
pub fn update_quantity(store: &Store, item_id: &str, quantity: i32) -> AppResult<ApiResponse<CartItem>> {
    let mut items: Vec<CartItem> = store.get(CART_KEY);

    let item = match items.iter_mut().find(|item| item.product.id.matches(item_id)) {
        Some(item) => {
            item.quantity = quantity;
            item.clone()
        }
        None => return Err(AppError::NotFound),
    };

    store.set(CART_KEY, &items)?;
    Ok(ApiResponse::success("OK", item, None))
}

/// Unconditional filter-and-persist; removing an id that is not in the
/// cart leaves it unchanged and still succeeds.
pub fn remove_from_cart(store: &Store, item_id: &str) -> AppResult<ApiResponse<serde_json::Value>> {
    let mut items: Vec<CartItem> = store.get(CART_KEY);
    items.retain(|item| !item.product.id.matches(item_id));
    store.set(CART_KEY, &items)?;

    tracing::info!(item_id, "removed from cart");
    Ok(ApiResponse::success(
        "Removed from cart",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

pub fn clear_cart(store: &Store) -> AppResult<ApiResponse<serde_json::Value>> {
    store.remove(CART_KEY)?;
    Ok(ApiResponse::success(
        "Cart cleared",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

pub fn subtotal(items: &[CartItem]) -> Decimal {
    items.iter().map(CartItem::line_total).sum()
}

/// Shipping is free and tax is zero, so the total equals the subtotal.
pub fn summarize(items: &[CartItem]) -> CartSummary {
    let subtotal = subtotal(items);
    let shipping = Decimal::ZERO;
    let tax = Decimal::ZERO;
    CartSummary {
        subtotal,
        shipping,
        tax,
        total: subtotal + shipping + tax,
    }
}
