//! Simulated checkout: phase machine and per-seller notification fan-out.
//!
//! Placing an order is an explicit asynchronous task. It moves through
//! `Processing` (a fixed simulated payment delay), emits notifications,
//! shows `Completed` for a second fixed delay, then resets to `Idle`. A
//! [`CancellationToken`] is honored while processing; once the fan-out has
//! run the order is committed and the task runs to completion. The current
//! flows never cancel - the token anticipates a real payment integration.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use serde::Serialize;
use tokio::sync::watch;

use lumina_core::UserId;

use crate::cart::{CartItem, CartTotals};
use crate::models::{Notification, NotificationKind};

/// Where the checkout task currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutPhase {
    /// No order in flight.
    #[default]
    Idle,
    /// Simulated payment processing.
    Processing,
    /// Order placed; confirmation showing.
    Completed,
    /// Cancelled while processing. Nothing was mutated.
    Failed,
}

/// Cooperative cancellation flag, checked at the task's suspension points.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    /// A token that has not been cancelled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. Idempotent.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    /// Whether cancellation has been requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

/// What the buyer gets back from a completed checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OrderReceipt {
    /// The figures the order was confirmed with.
    pub totals: CartTotals,
    /// How many distinct sellers were notified.
    pub sellers_notified: usize,
}

/// Publishes the checkout phase to any observing views.
#[derive(Debug)]
pub struct Checkout {
    phase: watch::Sender<CheckoutPhase>,
}

impl Default for Checkout {
    fn default() -> Self {
        Self::new()
    }
}

impl Checkout {
    /// A checkout in the idle phase.
    #[must_use]
    pub fn new() -> Self {
        Self {
            phase: watch::Sender::new(CheckoutPhase::Idle),
        }
    }

    /// The current phase.
    #[must_use]
    pub fn phase(&self) -> CheckoutPhase {
        *self.phase.borrow()
    }

    /// Subscribe to phase changes (e.g., to drive a progress view).
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<CheckoutPhase> {
        self.phase.subscribe()
    }

    pub(crate) fn set_phase(&self, phase: CheckoutPhase) {
        tracing::info!(?phase, "checkout phase");
        self.phase.send_replace(phase);
    }
}

/// Build the notifications a placed order produces: one `Order` notification
/// per distinct seller in the cart (first-seen order preserved) listing that
/// seller's lines, plus one `System` confirmation to the buyer.
#[must_use]
pub fn fan_out(buyer_id: &UserId, items: &[CartItem], totals: &CartTotals) -> Vec<Notification> {
    // Association list keeps sellers in first-seen order.
    let mut sellers: Vec<(UserId, Vec<String>)> = Vec::new();
    for item in items {
        let line = format!("{}x {}", item.quantity, item.product.name);
        if let Some((_, lines)) = sellers
            .iter_mut()
            .find(|(id, _)| id == &item.product.seller_id)
        {
            lines.push(line);
            continue;
        }
        sellers.push((item.product.seller_id.clone(), vec![line]));
    }

    let mut notifications: Vec<Notification> = sellers
        .into_iter()
        .map(|(seller_id, lines)| {
            Notification::new(
                seller_id,
                format!("New Order Received: {}", lines.join(", ")),
                NotificationKind::Order,
            )
        })
        .collect();

    notifications.push(Notification::new(
        buyer_id.clone(),
        format!("Order successfully placed! Total: {}", totals.total),
        NotificationKind::System,
    ));

    notifications
}
