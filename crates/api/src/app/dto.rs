use serde::Deserialize;

use salebook_sales::{CreateFields, UpdateFields};

// -------------------------
// Request DTOs
// -------------------------

/// Body of `POST /sales` and `POST /users`. Absent fields stay `None` so the
/// service can report them.
#[derive(Debug, Default, Deserialize)]
pub struct CreateSaleRequest {
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub amount: Option<f64>,
}

impl From<CreateSaleRequest> for CreateFields {
    fn from(req: CreateSaleRequest) -> Self {
        CreateFields {
            user_id: req.user_id,
            amount: req.amount,
        }
    }
}

/// Body of `PATCH /sales/:id` and `PATCH /users/:id`.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateSaleRequest {
    #[serde(default)]
    pub status: Option<String>,
}

impl From<UpdateSaleRequest> for UpdateFields {
    fn from(req: UpdateSaleRequest) -> Self {
        UpdateFields { status: req.status }
    }
}

/// Query string of `GET /sales` and `GET /sales/report`.
#[derive(Debug, Default, Deserialize)]
pub struct SalesQuery {
    pub user_id: Option<String>,
    pub status: Option<String>,
}
