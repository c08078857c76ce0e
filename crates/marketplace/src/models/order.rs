//! Historical order records for the admin oversight view.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use lumina_core::{Money, OrderId};

/// Fulfillment status of a historical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OrderStatus {
    #[default]
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

/// A past order as surfaced in the admin dashboard.
///
/// These are seed-time records only; checkout in this scope emits
/// notifications rather than appending to the order ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Order reference (e.g., `#ORD-7721`).
    pub id: OrderId,
    /// Name of the purchasing customer.
    pub customer_name: String,
    /// Date the order was placed.
    pub date: NaiveDate,
    /// Order total.
    pub total: Money,
    /// Current fulfillment status.
    pub status: OrderStatus,
    /// Number of line items.
    pub items: u32,
}
