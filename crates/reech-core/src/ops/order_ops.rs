use tracing::debug;

use super::records;
use crate::contract::{Contract, TxContext};
use crate::errors::Result;
use crate::model::{Order, OrderStatus};
use crate::policy::{require_role, Role};
use crate::rules::validation::{require_id, require_iso_date};

/// Place an order against a batch
///
/// Orders are always created `placed`. The batch is not looked up.
///
/// # Errors
/// * `AuthorizationDenied` - Caller does not hold `buyer`
/// * `Validation` - Bad identifier or date
/// * `AlreadyExists` - An order with `order_id` already exists
pub fn place_order(
    contract: &Contract,
    ctx: &mut TxContext<'_>,
    order_id: &str,
    batch_id: &str,
    buyer_id: &str,
    date: &str,
) -> Result<()> {
    require_role(contract.policy(), ctx.identity, Role::Buyer, "place orders")?;

    require_id("orderId", order_id)?;
    require_id("batchId", batch_id)?;
    require_id("buyerId", buyer_id)?;
    require_iso_date("date", date)?;

    let order = Order {
        order_id: order_id.to_string(),
        batch_id: batch_id.to_string(),
        buyer_id: buyer_id.to_string(),
        status: OrderStatus::Placed,
        date: date.to_string(),
    };
    records::create(contract.keyspace(), ctx.stub, &order)?;

    debug!(entity_id = order_id, batch_id, "order placed");
    Ok(())
}

/// # Errors
/// * `NotFound` - No order with `order_id`
/// * `Serialization` - Stored record does not decode
pub fn get_order(contract: &Contract, ctx: &TxContext<'_>, order_id: &str) -> Result<Order> {
    records::fetch(contract.keyspace(), &*ctx.stub, order_id)
}
