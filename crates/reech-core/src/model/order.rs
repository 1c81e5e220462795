use serde::{Deserialize, Serialize};

use super::Record;
use crate::keyspace::EntityKind;

/// Order lifecycle state
///
/// Orders are only ever created as `Placed` here; later states are written
/// by downstream fulfilment and must still decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OrderStatus {
    Placed,
    Shipped,
}

/// A buyer's order against a batch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub order_id: String,
    pub batch_id: String,
    pub buyer_id: String,
    pub status: OrderStatus,
    pub date: String,
}

impl Record for Order {
    const KIND: EntityKind = EntityKind::Order;

    fn record_id(&self) -> &str {
        &self.order_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_values() {
        assert_eq!(serde_json::to_string(&OrderStatus::Placed).unwrap(), "\"placed\"");
        let shipped: OrderStatus = serde_json::from_str("\"shipped\"").unwrap();
        assert_eq!(shipped, OrderStatus::Shipped);
    }
}
