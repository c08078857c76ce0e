//! The shared marketplace state behind explicit read/write operations.
//!
//! Replaces what the presentational layer would otherwise keep as loose
//! mutable arrays at the application root. Exactly one session runs at a time,
//! so the store is a plain owned struct; a multi-session deployment would need
//! per-user cart isolation and an atomic notification append before any of
//! this could be shared.

use lumina_core::{ProductId, UserId};

use crate::models::{Notification, Order, Product, User};

/// Users, catalog, notifications, and the historical order ledger.
#[derive(Debug, Default)]
pub struct MarketplaceStore {
    users: Vec<User>,
    products: Vec<Product>,
    notifications: Vec<Notification>,
    orders: Vec<Order>,
}

impl MarketplaceStore {
    /// An empty store. Seed data comes from [`crate::seed`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from pre-assembled collections.
    #[must_use]
    pub const fn with_data(users: Vec<User>, products: Vec<Product>, orders: Vec<Order>) -> Self {
        Self {
            users,
            products,
            notifications: Vec::new(),
            orders,
        }
    }

    // =========================================================================
    // Users
    // =========================================================================

    /// All user records, registration order.
    #[must_use]
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Look up a user by id.
    #[must_use]
    pub fn user(&self, id: &UserId) -> Option<&User> {
        self.users.iter().find(|u| &u.id == id)
    }

    /// Case-insensitive email lookup, used by login.
    #[must_use]
    pub fn find_user_by_email_ci(&self, email: &str) -> Option<&User> {
        self.users.iter().find(|u| u.email.eq_ignore_case(email))
    }

    /// Exact-match email check, used by signup duplicate detection.
    ///
    /// Deliberately case-sensitive where login is not; both behaviors are
    /// preserved as observed upstream.
    #[must_use]
    pub fn has_user_with_email(&self, email: &str) -> bool {
        self.users.iter().any(|u| u.email.as_str() == email)
    }

    /// The first user holding the admin role, if any.
    #[must_use]
    pub fn first_admin(&self) -> Option<&User> {
        self.users
            .iter()
            .find(|u| u.role == lumina_core::Role::Admin)
    }

    /// Append a new user record.
    pub fn add_user(&mut self, user: User) {
        tracing::debug!(user = %user.id, role = %user.role, "user record added");
        self.users.push(user);
    }

    // =========================================================================
    // Products
    // =========================================================================

    /// The catalog, newest listing first.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    #[must_use]
    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Prepend a new listing so it shows first in the catalog.
    pub fn add_product(&mut self, product: Product) {
        tracing::debug!(product = %product.id, seller = %product.seller_id, "product listed");
        self.products.insert(0, product);
    }

    /// A seller's own listings, catalog order.
    pub fn products_by_seller<'a>(
        &'a self,
        seller_id: &'a UserId,
    ) -> impl Iterator<Item = &'a Product> {
        self.products.iter().filter(move |p| &p.seller_id == seller_id)
    }

    // =========================================================================
    // Notifications
    // =========================================================================

    /// Every notification, newest first.
    #[must_use]
    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    /// Prepend a notification so consumers see newest-first.
    pub fn push_notification(&mut self, notification: Notification) {
        tracing::debug!(
            user = %notification.user_id,
            kind = ?notification.kind,
            "notification delivered"
        );
        self.notifications.insert(0, notification);
    }

    /// Notifications addressed to one user, newest first.
    pub fn notifications_for<'a>(
        &'a self,
        user_id: &'a UserId,
    ) -> impl Iterator<Item = &'a Notification> {
        self.notifications
            .iter()
            .filter(move |n| &n.user_id == user_id)
    }

    /// Unread badge count for one user.
    #[must_use]
    pub fn unread_count(&self, user_id: &UserId) -> usize {
        self.notifications_for(user_id).filter(|n| !n.read).count()
    }

    // =========================================================================
    // Orders
    // =========================================================================

    /// The historical order ledger for the admin view.
    #[must_use]
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }
}
