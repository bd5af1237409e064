use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

/// Product record as stored. Every field except the id is optional; there
/// is no uniqueness constraint, so identical products may coexist.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: Uuid,
    pub name: Option<String>,
    pub price: Option<f64>,
    pub img: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_camel_case_timestamps() {
        let product = Product {
            id: Uuid::new_v4(),
            name: Some("Pen".into()),
            price: Some(1.5),
            img: None,
            created_at: OffsetDateTime::UNIX_EPOCH,
            updated_at: OffsetDateTime::UNIX_EPOCH,
        };
        let json = serde_json::to_string(&product).unwrap();
        assert!(json.contains("\"createdAt\":\"1970-01-01T00:00:00Z\""));
        assert!(json.contains("\"price\":1.5"));
        assert!(json.contains("\"img\":null"));
    }
}
