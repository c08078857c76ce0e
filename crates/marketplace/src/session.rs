//! Session and navigation state machine.
//!
//! States are Guest, Buyer, Seller, and Admin; the only transitions are
//! `login`, `signup`, and `logout`. Every successful transition
//! unconditionally resets the current view to the new role's landing view,
//! whatever was active before.

use lumina_core::{Email, Role, UserId};

use crate::config::MarketplaceConfig;
use crate::error::MarketplaceError;
use crate::models::User;
use crate::nav::{NavItem, SessionRole, View};
use crate::store::MarketplaceStore;

/// The authenticated user (if any) and the active view.
#[derive(Debug, Default)]
pub struct Session {
    current_user: Option<User>,
    current_view: View,
}

impl Session {
    /// A fresh anonymous session on the guest landing view.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The signed-in user, if any.
    #[must_use]
    pub const fn current_user(&self) -> Option<&User> {
        self.current_user.as_ref()
    }

    /// Id of the signed-in user, if any.
    #[must_use]
    pub fn current_user_id(&self) -> Option<&UserId> {
        self.current_user.as_ref().map(|u| &u.id)
    }

    /// The active view.
    #[must_use]
    pub const fn current_view(&self) -> View {
        self.current_view
    }

    /// The session role derived from the signed-in user.
    #[must_use]
    pub fn role(&self) -> SessionRole {
        SessionRole::of(self.current_user.as_ref())
    }

    /// The navigation menu for the current role.
    #[must_use]
    pub fn nav_items(&self) -> &'static [NavItem] {
        self.role().nav_items()
    }

    /// Navigate to a view. Not validated against the role's menu; the menu
    /// only controls what is offered, not what is reachable.
    pub fn change_view(&mut self, view: View) {
        self.current_view = view;
    }

    /// Sign in by email against the known user records.
    ///
    /// The reserved administrator address (compared case-insensitively)
    /// resolves straight to the first admin user when one exists, bypassing
    /// the normal lookup. Otherwise the lookup itself is case-insensitive.
    ///
    /// # Errors
    ///
    /// Returns [`MarketplaceError::InvalidEmail`] for an empty or malformed
    /// address and [`MarketplaceError::UserNotFound`] on a miss; state is
    /// unchanged in both cases.
    pub fn login(
        &mut self,
        store: &MarketplaceStore,
        config: &MarketplaceConfig,
        email: &str,
    ) -> Result<User, MarketplaceError> {
        let email = email.trim();
        Email::parse(email)?;

        // Admin back-door convenience path.
        if config.admin_email.eq_ignore_ascii_case(email) {
            if let Some(admin) = store.first_admin() {
                let admin = admin.clone();
                self.enter(admin.clone());
                return Ok(admin);
            }
            // No admin seeded: fall through to the normal lookup.
        }

        match store.find_user_by_email_ci(email) {
            Some(user) => {
                let user = user.clone();
                self.enter(user.clone());
                Ok(user)
            }
            None => Err(MarketplaceError::UserNotFound),
        }
    }

    /// Create a user record and sign it in immediately.
    ///
    /// The duplicate-email check is an exact, case-sensitive match - observed
    /// upstream behavior, preserved even though login matches loosely.
    ///
    /// # Errors
    ///
    /// Returns [`MarketplaceError::InvalidEmail`] for a malformed address and
    /// [`MarketplaceError::EmailInUse`] on a collision; the user set is
    /// unaltered on failure.
    pub fn signup(
        &mut self,
        store: &mut MarketplaceStore,
        name: &str,
        email: &str,
        role: Role,
    ) -> Result<User, MarketplaceError> {
        let email = Email::parse(email.trim())?;

        if store.has_user_with_email(email.as_str()) {
            return Err(MarketplaceError::EmailInUse);
        }

        let user = User::signed_up(name, email, role);
        store.add_user(user.clone());
        self.enter(user.clone());
        Ok(user)
    }

    /// Sign out, returning to the guest landing view.
    pub fn logout(&mut self) {
        if let Some(user) = self.current_user.take() {
            tracing::info!(user = %user.id, "session ended");
        }
        self.current_view = SessionRole::Guest.default_view();
    }

    /// Install a user and apply the role-based view reset.
    fn enter(&mut self, user: User) {
        let view = SessionRole::of(Some(&user)).default_view();
        tracing::info!(user = %user.id, role = %user.role, view = %view, "session started");
        self.current_user = Some(user);
        self.current_view = view;
    }
}
