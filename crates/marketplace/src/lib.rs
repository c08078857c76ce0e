//! Lumina Marketplace - Session, cart, and notification engine.
//!
//! A purely in-memory model of a multi-role marketplace: buyers shop and check
//! out, sellers list products and receive order notifications, admins get the
//! full oversight menu. There is no persistence and no network; state lives in
//! a [`store::MarketplaceStore`] owned by the [`app::Marketplace`] controller.
//!
//! # Architecture
//!
//! - [`session`] - Who is signed in and which view is active; role-driven
//!   navigation resets.
//! - [`nav`] - The closed set of session roles and their menu descriptors.
//! - [`cart`] - Quantity bookkeeping and decimal totals.
//! - [`checkout`] - The simulated async order placement: phase machine,
//!   cancellation token, per-seller notification fan-out.
//! - [`store`] - The shared user/product/notification collections behind
//!   explicit read/write operations.
//! - [`app`] - The facade presentation code talks to.
//!
//! Exactly one session is active at a time, so nothing here locks; see the
//! notes on [`store::MarketplaceStore`] for what would have to change first.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod app;
pub mod cart;
pub mod checkout;
pub mod config;
pub mod error;
pub mod models;
pub mod nav;
pub mod seed;
pub mod session;
pub mod store;

pub use app::Marketplace;
pub use cart::{Cart, CartItem, CartTotals};
pub use checkout::{CancellationToken, CheckoutPhase, OrderReceipt};
pub use config::MarketplaceConfig;
pub use error::MarketplaceError;
pub use nav::{NavIcon, NavItem, SessionRole, View};
pub use store::MarketplaceStore;
