use std::sync::Arc;

use axum::{
    Json,
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
};

use salebook_core::SaleId;

use crate::app::{dto, errors, services::AppServices};

pub async fn create_sale(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::CreateSaleRequest>,
) -> axum::response::Response {
    match services.sales().create(&body.into()) {
        Ok(sale) => (StatusCode::CREATED, Json(sale)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn get_sale(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    match services.sales().get(&id, "") {
        Ok(sale) => (StatusCode::OK, Json(sale)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

/// `GET /sales?user_id=&status=`: `user_id` is looked up as a record id and
/// `status` is passed through unused.
pub async fn get_sale_by_query(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<dto::SalesQuery>,
) -> axum::response::Response {
    let Some(user_id) = query.user_id else {
        return errors::json_error(
            StatusCode::BAD_REQUEST,
            "missing_fields",
            "user_id query parameter is required",
        );
    };

    match services
        .sales()
        .get(&user_id, query.status.as_deref().unwrap_or_default())
    {
        Ok(sale) => (StatusCode::OK, Json(sale)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

/// `GET /sales/report?user_id=&status=`: a user's sales, optionally filtered, with totals.
pub async fn sales_report(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<dto::SalesQuery>,
) -> axum::response::Response {
    let Some(user_id) = query.user_id else {
        return errors::json_error(
            StatusCode::BAD_REQUEST,
            "missing_fields",
            "user_id query parameter is required",
        );
    };

    match services.sales().list_by_user(&user_id, query.status.as_deref()) {
        Ok(report) => (StatusCode::OK, Json(report)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn update_sale(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(body): Json<dto::UpdateSaleRequest>,
) -> axum::response::Response {
    match services.sales().update(&SaleId::new(id), &body.into()) {
        Ok(sale) => (StatusCode::OK, Json(sale)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn delete_sale(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    match services.sales().delete(&SaleId::new(id)) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
