use crate::{
    dto::orders::OrderList,
    error::{AppError, AppResult},
    models::{Order, OrderStatus},
    response::{ApiResponse, Meta},
    routes::admin::{OrderStats, UpdateOrderStatusRequest},
    routes::params::{OrderListQuery, SortOrder},
    store::{ORDERS_KEY, Store},
};

pub fn list_all_orders(store: &Store, query: OrderListQuery) -> AppResult<ApiResponse<OrderList>> {
    let (page, limit, offset) = query.pagination.normalize();

    let mut orders: Vec<Order> = store.get(ORDERS_KEY);
    if let Some(status) = query.status {
        orders.retain(|order| order.status == status);
    }

    let sort_order = query.sort_order.unwrap_or(SortOrder::Desc);
    match sort_order {
        SortOrder::Asc => orders.sort_by(|a, b| a.order_date.cmp(&b.order_date)),
        SortOrder::Desc => orders.sort_by(|a, b| b.order_date.cmp(&a.order_date)),
    }

    let total = orders.len() as i64;
    let items: Vec<Order> = orders
        .into_iter()
        .skip(offset as usize)
        .take(limit as usize)
        .collect();

    let meta = Meta::new(page, limit, total);
    Ok(ApiResponse::success("Orders", OrderList { items }, Some(meta)))
}

pub fn get_order_admin(store: &Store, id: &str) -> AppResult<ApiResponse<Order>> {
    let orders: Vec<Order> = store.get(ORDERS_KEY);
    let order = orders
        .into_iter()
        .find(|order| order.id == id)
        .ok_or(AppError::NotFound)?;

    Ok(ApiResponse::success("Order found", order, Some(Meta::empty())))
}

/// Replace the status of the matching order; every other field is left
/// untouched. Any status may follow any other; there is no enforced
/// transition table.
pub fn update_order_status(
    store: &Store,
    id: &str,
    payload: UpdateOrderStatusRequest,
) -> AppResult<ApiResponse<Order>> {
    let mut orders: Vec<Order> = store.get(ORDERS_KEY);

    let order = match orders.iter_mut().find(|order| order.id == id) {
        Some(order) => {
            order.status = payload.status;
            order.clone()
        }
        None => return Err(AppError::NotFound),
    };

    store.set(ORDERS_KEY, &orders)?;

    tracing::info!(order_id = %order.id, status = %order.status, "order status updated");
    Ok(ApiResponse::success("Order updated", order, Some(Meta::empty())))
}

/// Unconditional filter-and-persist. The confirmation prompt lives in the
/// presentation layer, not here.
pub fn remove_order(store: &Store, id: &str) -> AppResult<ApiResponse<serde_json::Value>> {
    let mut orders: Vec<Order> = store.get(ORDERS_KEY);
    orders.retain(|order| order.id != id);
    store.set(ORDERS_KEY, &orders)?;

    tracing::info!(order_id = id, "order removed");
    Ok(ApiResponse::success(
        "Order removed",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

/// Render every order as CSV for download. Totals use two decimal
/// places and dates the `M/D/YYYY` form the admin table shows. Fields
/// containing commas, quotes or newlines are quoted.
pub fn export_csv(store: &Store) -> AppResult<String> {
    let orders: Vec<Order> = store.get(ORDERS_KEY);

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record([
        "Order ID", "Customer", "Date", "Total", "Status", "Email", "Phone", "Address", "City",
        "State", "Zip Code",
    ])?;

    for order in &orders {
        let date = order.order_date.format("%-m/%-d/%Y").to_string();
        let total = format!("{:.2}", order.total_amount);
        writer.write_record([
            order.id.as_str(),
            order.shipping_info.name.as_str(),
            date.as_str(),
            total.as_str(),
            order.status.as_str(),
            order.shipping_info.email.as_str(),
            order.shipping_info.phone.as_str(),
            order.shipping_info.address.as_str(),
            order.shipping_info.city.as_str(),
            order.shipping_info.state.as_str(),
            order.shipping_info.zip_code.as_str(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|err| AppError::Internal(anyhow::anyhow!(err.to_string())))?;
    String::from_utf8(bytes).map_err(|err| AppError::Internal(anyhow::anyhow!(err)))
}

pub fn stats(store: &Store) -> AppResult<ApiResponse<OrderStats>> {
    let orders: Vec<Order> = store.get(ORDERS_KEY);

    let data = OrderStats {
        total_orders: orders.len() as i64,
        total_revenue: orders.iter().map(|order| order.total_amount).sum(),
        pending_orders: orders
            .iter()
            .filter(|order| order.status == OrderStatus::Pending)
            .count() as i64,
    };

    Ok(ApiResponse::success("Stats", data, Some(Meta::empty())))
}
