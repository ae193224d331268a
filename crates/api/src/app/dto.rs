use serde::Deserialize;
use serde_json::{Map, Value};

use milldesk_core::LineItem;

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct AddMasterRequest {
    pub table: String,
    #[serde(default)]
    pub data: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
pub struct DeleteMasterRequest {
    pub table: String,
    pub id: i64,
}

#[derive(Debug, Deserialize)]
pub struct SaveProductionRequest {
    pub number: String,
    pub date: String,
    pub shift: String,
    pub operator_id: i64,
    #[serde(default)]
    pub items: Vec<LineItem>,
}

#[derive(Debug, Deserialize)]
pub struct SaveSaleRequest {
    pub order_no: String,
    pub date: String,
    pub party_id: i64,
    #[serde(default)]
    pub items: Vec<LineItem>,
}

#[derive(Debug, Deserialize)]
pub struct AddUserRequest {
    pub username: String,
    pub password: String,
    pub role: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DeleteUserRequest {
    pub id: i64,
}

/// Notice carried across redirects for the rendering layer to surface.
#[derive(Debug, Deserialize)]
pub struct NoticeParams {
    pub notice: Option<String>,
}
