use std::sync::Arc;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use storefront_api::{
    config::AppConfig,
    dto::auth::LoginRequest,
    models::{Order, OrderStatus, ShippingInfo},
    routes::admin::UpdateOrderStatusRequest,
    routes::params::{OrderListQuery, Pagination, SortOrder},
    services::{admin_service, auth_service},
    store::{ADMIN_AUTH_KEY, MemoryStore, ORDERS_KEY, StorageBackend, Store},
};

fn test_config() -> AppConfig {
    AppConfig {
        host: "127.0.0.1".into(),
        port: 0,
        data_dir: "./data".into(),
        admin_username: "admin".into(),
        admin_password: "admin123".into(),
    }
}

fn order(id: &str, status: OrderStatus, total: &str, date: &str) -> Order {
    Order {
        id: id.to_string(),
        shipping_info: ShippingInfo {
            name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            phone: "1234567890".into(),
            address: "1 Main St".into(),
            city: "Springfield".into(),
            state: "IL".into(),
            zip_code: "62704".into(),
        },
        masked_card_number: "****-****-****-1111".into(),
        items: Vec::new(),
        total_amount: total.parse().expect("total"),
        status,
        order_date: date
            .parse::<DateTime<Utc>>()
            .expect("date"),
    }
}

fn seed(store: &Store, orders: &[Order]) {
    store.set(ORDERS_KEY, &orders.to_vec()).expect("seed orders");
}

// Changing the status must leave every other field exactly as it was.
#[test]
fn status_update_changes_only_the_status_field() -> anyhow::Result<()> {
    let store = Store::in_memory();
    let before = order("1736935200000", OrderStatus::Pending, "80", "2026-01-15T10:00:00Z");
    seed(&store, std::slice::from_ref(&before));

    let updated = admin_service::update_order_status(
        &store,
        "1736935200000",
        UpdateOrderStatusRequest {
            status: OrderStatus::Shipped,
        },
    )?
    .data
    .expect("order");

    assert_eq!(updated.status, OrderStatus::Shipped);
    assert_eq!(updated.id, before.id);
    assert_eq!(updated.items, before.items);
    assert_eq!(updated.total_amount, before.total_amount);
    assert_eq!(updated.order_date, before.order_date);
    assert_eq!(updated.shipping_info, before.shipping_info);
    assert_eq!(updated.masked_card_number, before.masked_card_number);

    // No transition table: any status may follow any other.
    let reverted = admin_service::update_order_status(
        &store,
        "1736935200000",
        UpdateOrderStatusRequest {
            status: OrderStatus::Pending,
        },
    )?
    .data
    .expect("order");
    assert_eq!(reverted.status, OrderStatus::Pending);

    Ok(())
}

#[test]
fn remove_order_is_unconditional() -> anyhow::Result<()> {
    let store = Store::in_memory();
    seed(
        &store,
        &[
            order("1", OrderStatus::Pending, "10", "2026-01-15T10:00:00Z"),
            order("2", OrderStatus::Shipped, "20", "2026-01-16T10:00:00Z"),
        ],
    );

    admin_service::remove_order(&store, "1")?;
    let orders: Vec<Order> = store.get(ORDERS_KEY);
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].id, "2");

    // Unknown ids fall through silently.
    admin_service::remove_order(&store, "999")?;
    let orders: Vec<Order> = store.get(ORDERS_KEY);
    assert_eq!(orders.len(), 1);

    Ok(())
}

#[test]
fn list_filters_by_status_and_sorts_by_date() -> anyhow::Result<()> {
    let store = Store::in_memory();
    seed(
        &store,
        &[
            order("1", OrderStatus::Pending, "10", "2026-01-15T10:00:00Z"),
            order("2", OrderStatus::Shipped, "20", "2026-01-16T10:00:00Z"),
            order("3", OrderStatus::Pending, "30", "2026-01-17T10:00:00Z"),
        ],
    );

    let all = admin_service::list_all_orders(&store, OrderListQuery::default())?
        .data
        .expect("orders");
    // Default sort is newest first.
    assert_eq!(all.items[0].id, "3");
    assert_eq!(all.items[2].id, "1");

    let pending = admin_service::list_all_orders(
        &store,
        OrderListQuery {
            pagination: Pagination::default(),
            status: Some(OrderStatus::Pending),
            sort_order: Some(SortOrder::Asc),
        },
    )?
    .data
    .expect("orders");
    assert_eq!(pending.items.len(), 2);
    assert_eq!(pending.items[0].id, "1");
    assert_eq!(pending.items[1].id, "3");

    Ok(())
}

#[test]
fn pagination_clamps_and_windows_the_list() -> anyhow::Result<()> {
    let store = Store::in_memory();
    let orders: Vec<Order> = (1..=5)
        .map(|n| {
            order(
                &n.to_string(),
                OrderStatus::Pending,
                "10",
                &format!("2026-01-1{n}T10:00:00Z"),
            )
        })
        .collect();
    seed(&store, &orders);

    let page = admin_service::list_all_orders(
        &store,
        OrderListQuery {
            pagination: Pagination {
                page: Some(2),
                per_page: Some(2),
            },
            status: None,
            sort_order: Some(SortOrder::Asc),
        },
    )?;
    let meta = page.meta.expect("meta");
    assert_eq!(meta.total, Some(5));
    let items = page.data.expect("orders").items;
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].id, "3");
    assert_eq!(items[1].id, "4");

    Ok(())
}

#[test]
fn stats_count_orders_revenue_and_pending() -> anyhow::Result<()> {
    let store = Store::in_memory();
    seed(
        &store,
        &[
            order("1", OrderStatus::Pending, "19.99", "2026-01-15T10:00:00Z"),
            order("2", OrderStatus::Delivered, "20.01", "2026-01-16T10:00:00Z"),
            order("3", OrderStatus::Pending, "40", "2026-01-17T10:00:00Z"),
        ],
    );

    let stats = admin_service::stats(&store)?.data.expect("stats");
    assert_eq!(stats.total_orders, 3);
    assert_eq!(stats.total_revenue, Decimal::from(80));
    assert_eq!(stats.pending_orders, 2);

    Ok(())
}

#[test]
fn csv_export_matches_the_admin_table_layout() -> anyhow::Result<()> {
    let store = Store::in_memory();
    let mut exported = order("1736935200000", OrderStatus::Pending, "80", "2026-01-15T10:00:00Z");
    exported.shipping_info.address = "123 Main St, Apt 4".into();
    seed(&store, &[exported]);

    let csv_text = admin_service::export_csv(&store)?;
    let mut lines = csv_text.lines();

    assert_eq!(
        lines.next(),
        Some("Order ID,Customer,Date,Total,Status,Email,Phone,Address,City,State,Zip Code")
    );
    // Comma-bearing fields are quoted so the row still has eleven columns.
    assert_eq!(
        lines.next(),
        Some(
            "1736935200000,Jane Doe,1/15/2026,80.00,pending,jane@example.com,1234567890,\"123 Main St, Apt 4\",Springfield,IL,62704"
        )
    );
    assert_eq!(lines.next(), None);

    Ok(())
}

#[test]
fn admin_gate_follows_the_persisted_flag() -> anyhow::Result<()> {
    let backend = Arc::new(MemoryStore::default());
    let store = Store::new(backend.clone());
    let config = test_config();

    assert!(!auth_service::is_authenticated(&store));

    let err = auth_service::login(
        &store,
        &config,
        LoginRequest {
            username: "admin".into(),
            password: "wrong".into(),
        },
    )
    .unwrap_err();
    assert!(matches!(
        err,
        storefront_api::error::AppError::BadRequest(ref msg) if msg == "Invalid credentials"
    ));
    assert!(!auth_service::is_authenticated(&store));

    auth_service::login(
        &store,
        &config,
        LoginRequest {
            username: "admin".into(),
            password: "admin123".into(),
        },
    )?;
    assert!(auth_service::is_authenticated(&store));

    // The persisted layout is the JSON string "true" under the auth key.
    assert_eq!(backend.read(ADMIN_AUTH_KEY)?, Some("\"true\"".to_string()));

    auth_service::logout(&store)?;
    assert!(!auth_service::is_authenticated(&store));
    assert_eq!(backend.read(ADMIN_AUTH_KEY)?, None);

    Ok(())
}
