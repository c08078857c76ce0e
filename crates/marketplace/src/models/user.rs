//! User domain type.

use serde::{Deserialize, Serialize};

use lumina_core::{Email, Money, Role, UserId};

/// A marketplace user record.
///
/// Records are only ever created (at seed time or signup) and looked up -
/// nothing in scope deletes or edits one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Address used for login lookup (case-insensitive) and signup
    /// duplicate detection (exact).
    pub email: Email,
    /// Role driving navigation and permitted actions.
    pub role: Role,
    /// Avatar image URL.
    pub avatar: String,
    /// Accumulated payout balance, present for sellers.
    pub balance: Option<Money>,
}

impl User {
    /// Create a signed-up user with a generated id and default avatar.
    #[must_use]
    pub fn signed_up(name: impl Into<String>, email: Email, role: Role) -> Self {
        let name = name.into();
        let avatar = default_avatar(&name);
        Self {
            id: UserId::generate(),
            name,
            email,
            role,
            avatar,
            balance: None,
        }
    }
}

/// Generated placeholder avatar for users without an uploaded one.
fn default_avatar(name: &str) -> String {
    format!("https://ui-avatars.com/api/?name={name}&background=random")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_signed_up_generates_id_and_avatar() {
        let email = Email::parse("dana@lumina.com").unwrap();
        let user = User::signed_up("Dana", email.clone(), Role::Buyer);

        assert_eq!(user.email, email);
        assert_eq!(user.role, Role::Buyer);
        assert!(user.avatar.contains("name=Dana"));
        assert!(user.balance.is_none());

        let again = User::signed_up("Dana", email, Role::Buyer);
        assert_ne!(user.id, again.id);
    }
}
