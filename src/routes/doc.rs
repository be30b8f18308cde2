use utoipa::OpenApi;
use utoipa::openapi::OpenApi as OpenApiSpec;
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        auth::LoginRequest,
        cart::{CartSummary, CartView, UpdateQuantityRequest},
        orders::{CheckoutRequest, OrderList},
    },
    models::{CartItem, Order, OrderStatus, Product, ProductId, ShippingInfo},
    response::{ApiResponse, Meta},
    routes::{admin, auth, cart, health, orders, params},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        cart::cart_view,
        cart::add_to_cart,
        cart::update_quantity,
        cart::remove_from_cart,
        cart::clear_cart,
        orders::checkout,
        orders::get_order,
        auth::login,
        auth::logout,
        admin::list_all_orders,
        admin::get_order_admin,
        admin::update_order_status,
        admin::remove_order,
        admin::export_orders,
        admin::order_stats
    ),
    components(
        schemas(
            ProductId,
            Product,
            CartItem,
            ShippingInfo,
            OrderStatus,
            Order,
            CartSummary,
            CartView,
            UpdateQuantityRequest,
            CheckoutRequest,
            OrderList,
            LoginRequest,
            admin::UpdateOrderStatusRequest,
            admin::OrderStats,
            params::Pagination,
            params::OrderListQuery,
            Meta,
            ApiResponse<Order>,
            ApiResponse<OrderList>,
            ApiResponse<CartView>,
            ApiResponse<CartItem>,
            ApiResponse<admin::OrderStats>
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Cart", description = "Cart endpoints"),
        (name = "Orders", description = "Checkout and order lookup"),
        (name = "Auth", description = "Admin session demo gate"),
        (name = "Admin", description = "Order administration endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
