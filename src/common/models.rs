use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Catalogue body served at the API root
#[derive(ToSchema, Serialize, Deserialize)]
pub struct ApiInfo {
    pub message: String,
    pub version: String,
    pub status: String,
    pub endpoints: ApiEndpoints,
}

#[derive(ToSchema, Serialize, Deserialize)]
pub struct ApiEndpoints {
    pub tables: String,
    #[serde(rename = "tableInfo")]
    pub table_info: String,
    pub dashboard: String,
}

impl ApiInfo {
    pub fn new() -> Self {
        Self {
            message: "🌱 Agrotico Smart Dashboard API".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            status: "Activo".to_string(),
            endpoints: ApiEndpoints {
                tables: "/api/tables".to_string(),
                table_info: "/api/tables/:tableName".to_string(),
                dashboard: "/api/dashboard".to_string(),
            },
        }
    }
}

impl Default for ApiInfo {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(ToSchema, Serialize, Deserialize)]
pub struct HealthResponse {
    pub success: bool,
    pub message: String,
    pub database: String,
    pub timestamp: String,
}
