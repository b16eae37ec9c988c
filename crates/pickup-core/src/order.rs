//! Order payload model.
//!
//! Orders are opaque records; the client never interprets their fields beyond
//! counting them for pagination. The two order endpoints answer with
//! differently shaped success envelopes (the pending feed sometimes nests the
//! array one level deeper), so extraction is modeled as an explicit
//! classification with a documented empty-sequence fallback instead of ad hoc
//! shape probing.

use serde::Deserialize;
use serde_json::Value;

/// Opaque order record as returned by the backend.
pub type Order = Value;

/// Fixed page size used by both order feeds.
pub const PAGE_SIZE: usize = 10;

/// Which of the two independently paginated collections a fetch targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderFeed {
    Pending,
    Completed,
}

/// Success envelope of the order endpoints.
///
/// `data` is kept as a raw value and classified afterwards because the two
/// endpoints do not agree on its shape.
#[derive(Debug, Clone, Deserialize)]
pub struct OrdersEnvelope {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: Value,
}

/// The known shapes of an order-endpoint `data` field.
#[derive(Debug, Clone, PartialEq)]
pub enum OrdersPayload {
    /// `data: [..]`
    Flat(Vec<Order>),
    /// `data: { data: [..] }`
    Nested(Vec<Order>),
    /// Anything else. Callers fall back to an empty sequence.
    Unrecognized,
}

impl OrdersPayload {
    /// Classifies a raw `data` value into one of the known shapes.
    pub fn classify(data: &Value) -> Self {
        if let Some(items) = data.as_array() {
            return Self::Flat(items.clone());
        }
        if let Some(inner) = data.get("data").and_then(Value::as_array) {
            return Self::Nested(inner.clone());
        }
        Self::Unrecognized
    }
}

impl OrdersEnvelope {
    /// Extracts the orders accepting only the flat shape (completed feed).
    pub fn orders_flat(&self) -> Vec<Order> {
        match OrdersPayload::classify(&self.data) {
            OrdersPayload::Flat(orders) => orders,
            OrdersPayload::Nested(_) | OrdersPayload::Unrecognized => Vec::new(),
        }
    }

    /// Extracts the orders tolerating both shapes (pending feed).
    ///
    /// The nested shape wins when both could apply, matching the backend's
    /// documented envelope for the pending feed.
    pub fn orders_tolerant(&self) -> Vec<Order> {
        match OrdersPayload::classify(&self.data) {
            OrdersPayload::Flat(orders) | OrdersPayload::Nested(orders) => orders,
            OrdersPayload::Unrecognized => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn envelope(value: Value) -> OrdersEnvelope {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_flat_shape() {
        let env = envelope(json!({"success": true, "data": [{"id": 1}, {"id": 2}]}));
        assert_eq!(env.orders_flat().len(), 2);
        assert_eq!(env.orders_tolerant().len(), 2);
    }

    #[test]
    fn test_nested_shape() {
        let env = envelope(json!({"success": true, "data": {"data": [{"id": 1}]}}));
        assert_eq!(env.orders_tolerant().len(), 1);
        // The completed feed only accepts the flat shape.
        assert!(env.orders_flat().is_empty());
    }

    #[test]
    fn test_unrecognized_shape_falls_back_to_empty() {
        let env = envelope(json!({"success": true, "data": "oops"}));
        assert!(env.orders_flat().is_empty());
        assert!(env.orders_tolerant().is_empty());

        let env = envelope(json!({"success": true, "data": {"count": 3}}));
        assert!(env.orders_tolerant().is_empty());
    }

    #[test]
    fn test_missing_data_defaults_to_null() {
        let env = envelope(json!({"success": true}));
        assert_eq!(OrdersPayload::classify(&env.data), OrdersPayload::Unrecognized);
        assert!(env.orders_tolerant().is_empty());
    }
}
