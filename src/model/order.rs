use crate::model::{generate_id, Id, DEFAULT_STATUS};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: Id,
    pub make: String,
    pub model: String,
    pub color: String,
    pub order_date: DateTime<Utc>,
    pub expected_delivery_date: DateTime<Utc>,
    pub status: String,
}

impl Order {
    pub fn new(
        make: String,
        model: String,
        color: String,
        order_date: DateTime<Utc>,
        expected_delivery_date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: generate_id(),
            make,
            model,
            color,
            order_date,
            expected_delivery_date,
            status: DEFAULT_STATUS.to_string(),
        }
    }

    /// Build the replacement value for an update. Identity and dates are carried over.
    pub fn merged_with(&self, update: OrderUpdate) -> Self {
        Self {
            id: self.id.clone(),
            make: update.make.unwrap_or_else(|| self.make.clone()),
            model: update.model.unwrap_or_else(|| self.model.clone()),
            color: update.color.unwrap_or_else(|| self.color.clone()),
            order_date: self.order_date,
            expected_delivery_date: self.expected_delivery_date,
            status: update.status.unwrap_or_else(|| self.status.clone()),
        }
    }

    pub fn location(&self) -> String {
        format!("/api/cars/{}", self.id)
    }
}

/// Input model for placing a new order.
///
/// Fields are optional at the serde level so a missing field surfaces as a
/// validation failure rather than a body rejection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    pub make: Option<String>,
    pub model: Option<String>,
    pub color: Option<String>,
}

impl CreateOrderRequest {
    pub fn new(make: &str, model: &str, color: &str) -> Self {
        Self {
            make: Some(make.to_string()),
            model: Some(model.to_string()),
            color: Some(color.to_string()),
        }
    }
}

/// Partial update. `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderUpdate {
    pub make: Option<String>,
    pub model: Option<String>,
    pub color: Option<String>,
    pub status: Option<String>,
}

impl OrderUpdate {
    pub fn status(status: &str) -> Self {
        Self {
            status: Some(status.to_string()),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn sample_order() -> Order {
        let now = Utc::now();
        Order::new(
            "Toyota".to_string(),
            "Camry".to_string(),
            "Black".to_string(),
            now,
            now + Duration::days(180),
        )
    }

    #[test]
    fn test_new_order_is_pending() {
        let order = sample_order();
        assert_eq!(order.status, "Pending");
        assert_eq!(order.location(), format!("/api/cars/{}", order.id));
    }

    #[test]
    fn test_merged_with_keeps_identity_and_dates() {
        let order = sample_order();
        let merged = order.merged_with(OrderUpdate {
            color: Some("Red".to_string()),
            status: Some("Shipped".to_string()),
            ..OrderUpdate::default()
        });

        assert_eq!(merged.id, order.id);
        assert_eq!(merged.order_date, order.order_date);
        assert_eq!(merged.expected_delivery_date, order.expected_delivery_date);
        assert_eq!(merged.make, "Toyota");
        assert_eq!(merged.model, "Camry");
        assert_eq!(merged.color, "Red");
        assert_eq!(merged.status, "Shipped");
    }

    #[test]
    fn test_order_serializes_with_camel_case_fields() {
        let json = serde_json::to_value(sample_order()).unwrap();
        assert!(json.get("orderDate").is_some());
        assert!(json.get("expectedDeliveryDate").is_some());
        assert_eq!(json["status"], "Pending");
        assert!(json.get("order_date").is_none());
    }

    #[test]
    fn test_update_deserializes_partial_body() {
        let update: OrderUpdate = serde_json::from_str(r#"{"status": "Shipped"}"#).unwrap();
        assert_eq!(update, OrderUpdate::status("Shipped"));
    }
}
