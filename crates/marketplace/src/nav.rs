//! Role-driven navigation.
//!
//! Each session role maps to a fixed, ordered menu descriptor. The mapping is
//! selected once per state transition (login, signup, logout) instead of being
//! re-derived with ad-hoc branching at render time.

use serde::{Deserialize, Serialize};

use lumina_core::Role;

use crate::models::User;

/// Identifier for the screen currently rendered. Independent of any routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum View {
    #[default]
    Home,
    Lookbook,
    Profile,
    Dashboard,
    Products,
    Users,
    Orders,
    Finance,
    Disputes,
    Security,
}

impl View {
    /// Stable string id, matching the view keys the presentation layer uses.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Lookbook => "lookbook",
            Self::Profile => "profile",
            Self::Dashboard => "dashboard",
            Self::Products => "products",
            Self::Users => "users",
            Self::Orders => "orders",
            Self::Finance => "finance",
            Self::Disputes => "disputes",
            Self::Security => "security",
        }
    }
}

impl std::fmt::Display for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reference into the presentation layer's icon set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NavIcon {
    Home,
    Eye,
    User,
    LayoutDashboard,
    Package,
    Users,
    ShoppingCart,
    DollarSign,
    AlertTriangle,
    ShieldCheck,
}

/// One entry in the navigation menu. Derived, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavItem {
    /// Menu label.
    pub label: &'static str,
    /// Icon reference.
    pub icon: NavIcon,
    /// View the entry navigates to.
    pub view: View,
}

const fn item(label: &'static str, icon: NavIcon, view: View) -> NavItem {
    NavItem { label, icon, view }
}

const GUEST_NAV: &[NavItem] = &[
    item("Shop", NavIcon::Home, View::Home),
    item("Lookbook", NavIcon::Eye, View::Lookbook),
];

const BUYER_NAV: &[NavItem] = &[
    item("Shop", NavIcon::Home, View::Home),
    item("Lookbook", NavIcon::Eye, View::Lookbook),
    item("Profile", NavIcon::User, View::Profile),
];

const SELLER_NAV: &[NavItem] = &[
    item("Dashboard", NavIcon::LayoutDashboard, View::Dashboard),
    item("Products", NavIcon::Package, View::Products),
];

const ADMIN_NAV: &[NavItem] = &[
    item("Overview", NavIcon::LayoutDashboard, View::Dashboard),
    item("Users", NavIcon::Users, View::Users),
    item("Products", NavIcon::Package, View::Products),
    item("Orders", NavIcon::ShoppingCart, View::Orders),
    item("Finance", NavIcon::DollarSign, View::Finance),
    item("Disputes", NavIcon::AlertTriangle, View::Disputes),
    item("Security", NavIcon::ShieldCheck, View::Security),
];

/// The closed set of roles a session can be in.
///
/// Distinct from [`Role`]: a session with no user at all is `Guest`, and a
/// signed-in user whose record carries the guest role behaves like a buyer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SessionRole {
    #[default]
    Guest,
    Buyer,
    Seller,
    Admin,
}

impl SessionRole {
    /// Derive the session role from the (possibly absent) signed-in user.
    #[must_use]
    pub fn of(user: Option<&User>) -> Self {
        user.map_or(Self::Guest, |u| match u.role {
            Role::Seller => Self::Seller,
            Role::Admin => Self::Admin,
            Role::Guest | Role::Buyer => Self::Buyer,
        })
    }

    /// The fixed, ordered menu for this role.
    #[must_use]
    pub const fn nav_items(self) -> &'static [NavItem] {
        match self {
            Self::Guest => GUEST_NAV,
            Self::Buyer => BUYER_NAV,
            Self::Seller => SELLER_NAV,
            Self::Admin => ADMIN_NAV,
        }
    }

    /// The landing view entered on every transition into this role.
    #[must_use]
    pub const fn default_view(self) -> View {
        match self {
            Self::Guest | Self::Buyer => View::Home,
            Self::Seller | Self::Admin => View::Dashboard,
        }
    }
}
