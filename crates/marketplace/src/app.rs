//! The application controller presentation code talks to.
//!
//! Owns the store, the session, the cart, and the checkout phase machine, and
//! exposes the full action surface: auth, navigation, cart mutation, product
//! listing, and order placement. The session gates the cart - anonymous
//! callers get [`MarketplaceError::AuthRequired`] back instead of a mutation,
//! which the presentation layer turns into the login prompt.

use lumina_core::{Money, ProductId, Role};

use crate::cart::{Cart, CartItem, CartTotals};
use crate::checkout::{self, CancellationToken, Checkout, CheckoutPhase, OrderReceipt};
use crate::config::MarketplaceConfig;
use crate::error::MarketplaceError;
use crate::models::{Notification, Product, User};
use crate::nav::{NavItem, SessionRole, View};
use crate::seed;
use crate::session::Session;
use crate::store::MarketplaceStore;

/// One running marketplace: shared state plus the single active session.
#[derive(Debug)]
pub struct Marketplace {
    config: MarketplaceConfig,
    store: MarketplaceStore,
    session: Session,
    cart: Cart,
    checkout: Checkout,
}

impl Marketplace {
    /// A marketplace over an empty store.
    #[must_use]
    pub fn new(config: MarketplaceConfig) -> Self {
        Self::with_store(config, MarketplaceStore::new())
    }

    /// A marketplace over the demo seed data.
    #[must_use]
    pub fn with_demo_data(config: MarketplaceConfig) -> Self {
        Self::with_store(config, seed::demo_store())
    }

    /// A marketplace over a caller-assembled store.
    #[must_use]
    pub fn with_store(config: MarketplaceConfig, store: MarketplaceStore) -> Self {
        Self {
            config,
            store,
            session: Session::new(),
            cart: Cart::new(),
            checkout: Checkout::new(),
        }
    }

    // =========================================================================
    // Reads (core -> presentation)
    // =========================================================================

    /// The engine configuration.
    #[must_use]
    pub const fn config(&self) -> &MarketplaceConfig {
        &self.config
    }

    /// The shared store (users, catalog, notifications, order ledger).
    #[must_use]
    pub const fn store(&self) -> &MarketplaceStore {
        &self.store
    }

    /// The signed-in user, if any.
    #[must_use]
    pub const fn current_user(&self) -> Option<&User> {
        self.session.current_user()
    }

    /// The active view.
    #[must_use]
    pub const fn current_view(&self) -> View {
        self.session.current_view()
    }

    /// The current session role.
    #[must_use]
    pub fn role(&self) -> SessionRole {
        self.session.role()
    }

    /// The navigation menu for the current role.
    #[must_use]
    pub fn nav_items(&self) -> &'static [NavItem] {
        self.session.nav_items()
    }

    /// Cart entries, insertion order.
    #[must_use]
    pub fn cart(&self) -> &[CartItem] {
        self.cart.items()
    }

    /// Cart badge count (total units).
    #[must_use]
    pub fn cart_count(&self) -> u32 {
        self.cart.count()
    }

    /// Subtotal, tax, and total for the current cart.
    #[must_use]
    pub fn totals(&self) -> CartTotals {
        self.cart.totals(self.config.tax_rate)
    }

    /// Notifications addressed to the signed-in user, newest first. Empty for
    /// guests.
    #[must_use]
    pub fn notifications(&self) -> Vec<&Notification> {
        self.session
            .current_user_id()
            .map(|id| self.store.notifications_for(id).collect())
            .unwrap_or_default()
    }

    /// Unread badge count for the signed-in user.
    #[must_use]
    pub fn unread_count(&self) -> usize {
        self.session
            .current_user_id()
            .map_or(0, |id| self.store.unread_count(id))
    }

    /// The checkout task's current phase.
    #[must_use]
    pub fn checkout_phase(&self) -> CheckoutPhase {
        self.checkout.phase()
    }

    /// Subscribe to checkout phase changes.
    #[must_use]
    pub fn subscribe_checkout(&self) -> tokio::sync::watch::Receiver<CheckoutPhase> {
        self.checkout.subscribe()
    }

    // =========================================================================
    // Auth & navigation (presentation -> core)
    // =========================================================================

    /// Sign in by email. See [`Session::login`].
    ///
    /// # Errors
    ///
    /// Returns [`MarketplaceError::UserNotFound`] or
    /// [`MarketplaceError::InvalidEmail`]; state is unchanged on failure.
    pub fn login(&mut self, email: &str) -> Result<User, MarketplaceError> {
        self.session.login(&self.store, &self.config, email)
    }

    /// Create an account and sign it in. See [`Session::signup`].
    ///
    /// # Errors
    ///
    /// Returns [`MarketplaceError::EmailInUse`] or
    /// [`MarketplaceError::InvalidEmail`]; state is unchanged on failure.
    pub fn signup(
        &mut self,
        name: &str,
        email: &str,
        role: Role,
    ) -> Result<User, MarketplaceError> {
        self.session.signup(&mut self.store, name, email, role)
    }

    /// Sign out. The cart is session-scoped and empties with it.
    pub fn logout(&mut self) {
        self.session.logout();
        self.cart.clear();
    }

    /// Navigate to a view.
    pub fn change_view(&mut self, view: View) {
        self.session.change_view(view);
    }

    // =========================================================================
    // Cart (presentation -> core)
    // =========================================================================

    /// Add one unit of a catalog product to the cart.
    ///
    /// An unknown product id is a silent no-op, like the other absent-id cart
    /// operations.
    ///
    /// # Errors
    ///
    /// Returns [`MarketplaceError::AuthRequired`] (and mutates nothing) when
    /// no user is signed in; the caller opens the login prompt.
    pub fn add_to_cart(&mut self, id: &ProductId) -> Result<(), MarketplaceError> {
        if self.session.current_user().is_none() {
            return Err(MarketplaceError::AuthRequired);
        }
        if let Some(product) = self.store.product(id) {
            self.cart.add(product.clone());
        }
        Ok(())
    }

    /// Remove a cart entry. Silent no-op when absent.
    pub fn remove_from_cart(&mut self, id: &ProductId) {
        self.cart.remove(id);
    }

    /// Adjust a cart entry's quantity by `delta`, clamped at 1. Silent no-op
    /// when absent.
    pub fn update_quantity(&mut self, id: &ProductId, delta: i64) {
        self.cart.update_quantity(id, delta);
    }

    /// Empty the cart unconditionally.
    pub fn clear_cart(&mut self) {
        self.cart.clear();
    }

    // =========================================================================
    // Selling
    // =========================================================================

    /// List a new product under the signed-in seller.
    ///
    /// # Errors
    ///
    /// Returns [`MarketplaceError::AuthRequired`] unless a seller or admin is
    /// signed in.
    pub fn add_product(
        &mut self,
        name: &str,
        price: Money,
        category: &str,
        image: &str,
        stock: u32,
        description: &str,
    ) -> Result<Product, MarketplaceError> {
        let seller = match self.session.current_user() {
            Some(user) if matches!(user.role, Role::Seller | Role::Admin) => user.id.clone(),
            _ => return Err(MarketplaceError::AuthRequired),
        };

        let product = Product::listed_by(seller, name, price, category, image, stock, description);
        self.store.add_product(product.clone());
        Ok(product)
    }

    // =========================================================================
    // Checkout
    // =========================================================================

    /// Place the order in the cart.
    ///
    /// Runs the simulated checkout: `Processing` for the configured delay,
    /// then the per-seller notification fan-out plus the buyer confirmation,
    /// then `Completed` for the second delay, after which the cart is cleared,
    /// the view returns home, and the phase resets to `Idle`.
    ///
    /// # Errors
    ///
    /// Returns [`MarketplaceError::AuthRequired`] when no user is signed in,
    /// and [`MarketplaceError::CheckoutCancelled`] if `cancel` fires while
    /// still processing - in that case the phase parks at `Failed` and no
    /// notification or cart state changes.
    pub async fn place_order(
        &mut self,
        cancel: &CancellationToken,
    ) -> Result<OrderReceipt, MarketplaceError> {
        let buyer = self
            .session
            .current_user()
            .cloned()
            .ok_or(MarketplaceError::AuthRequired)?;
        let totals = self.totals();

        self.checkout.set_phase(CheckoutPhase::Processing);
        tokio::time::sleep(self.config.processing_delay).await;

        if cancel.is_cancelled() {
            self.checkout.set_phase(CheckoutPhase::Failed);
            return Err(MarketplaceError::CheckoutCancelled);
        }

        let notifications = checkout::fan_out(&buyer.id, self.cart.items(), &totals);
        let sellers_notified = notifications.len().saturating_sub(1);
        for notification in notifications {
            self.store.push_notification(notification);
        }
        tracing::info!(
            buyer = %buyer.id,
            sellers = sellers_notified,
            total = %totals.total,
            "order placed"
        );
        self.checkout.set_phase(CheckoutPhase::Completed);

        tokio::time::sleep(self.config.completion_delay).await;

        self.cart.clear();
        self.session.change_view(View::Home);
        self.checkout.set_phase(CheckoutPhase::Idle);

        Ok(OrderReceipt {
            totals,
            sellers_notified,
        })
    }
}
