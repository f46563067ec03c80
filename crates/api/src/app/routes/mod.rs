use axum::{
    Router,
    routing::{get, post},
};

pub mod sales;
pub mod system;

/// Router for the sale endpoints.
///
/// `/users` and `/sales` are two mounts of the same record type.
pub fn router() -> Router {
    Router::new()
        .nest("/users", users_router())
        .nest("/sales", sales_router())
}

fn users_router() -> Router {
    Router::new().route("/", post(sales::create_sale)).route(
        "/:id",
        get(sales::get_sale)
            .patch(sales::update_sale)
            .delete(sales::delete_sale),
    )
}

fn sales_router() -> Router {
    Router::new()
        .route("/", post(sales::create_sale).get(sales::get_sale_by_query))
        .route("/report", get(sales::sales_report))
        .route(
            "/:id",
            get(sales::get_sale)
                .patch(sales::update_sale)
                .delete(sales::delete_sale),
        )
}
