//! Domain types for the marketplace.
//!
//! These are validated domain objects; all construction that generates ids or
//! timestamps lives here so the engine modules stay declarative.

pub mod notification;
pub mod order;
pub mod product;
pub mod user;

pub use notification::{Notification, NotificationKind};
pub use order::{Order, OrderStatus};
pub use product::Product;
pub use user::User;
