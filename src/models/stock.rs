use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, ToSchema)]
pub struct Stock {
    #[sqlx(rename = "stockid")]
    pub id: i32,
    pub name: String,
    pub price: i32,
    pub company: String,
}

/// Body accepted by create and update. Any `id` sent by the client is
/// dropped; the row id comes from the database or the path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(default)]
pub struct StockPayload {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub price: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub company: String,
}

/// `null` decodes like an absent field: the zero value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MutationResponse {
    pub id: i32,
    pub message: String,
}

impl MutationResponse {
    pub fn created(id: i32) -> Self {
        Self {
            id,
            message: "stock created successfully".into(),
        }
    }

    pub fn updated(id: i32, rows: u64) -> Self {
        Self {
            id,
            message: format!("Stock updated successfully. Total rows/records affected {}", rows),
        }
    }

    pub fn deleted(id: i32, rows: u64) -> Self {
        Self {
            id,
            message: format!("Stock deleted successfully. Total rows/records affected {}", rows),
        }
    }
}
