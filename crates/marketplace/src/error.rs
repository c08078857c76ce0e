//! Marketplace error taxonomy.
//!
//! Every variant is non-fatal and user-facing: an operation either succeeds or
//! leaves state unchanged while telling the user what happened. There is no
//! retry policy and no fatal class.

use thiserror::Error;

use lumina_core::{EmailError, MoneyError};

/// Errors surfaced by marketplace operations.
#[derive(Debug, Error)]
pub enum MarketplaceError {
    /// Login attempted with an email no user record matches.
    #[error("user not found")]
    UserNotFound,

    /// Signup attempted with an email that already belongs to a user.
    #[error("email already in use")]
    EmailInUse,

    /// A gated action (cart mutation, product listing) was attempted without
    /// a sufficient session. The caller routes this into the auth prompt
    /// rather than reporting it as a failure.
    #[error("sign in required")]
    AuthRequired,

    /// Checkout was cancelled while still processing. Nothing was mutated.
    #[error("checkout was cancelled")]
    CheckoutCancelled,

    /// The supplied email is structurally invalid.
    #[error(transparent)]
    InvalidEmail(#[from] EmailError),

    /// The supplied price is invalid (negative).
    #[error(transparent)]
    InvalidPrice(#[from] MoneyError),
}

impl MarketplaceError {
    /// The message shown to the user, matching the storefront's copy.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::UserNotFound => "User not found. Try the demo credentials.".to_owned(),
            Self::EmailInUse => "Email already in use.".to_owned(),
            Self::AuthRequired => "Please sign in to continue.".to_owned(),
            Self::CheckoutCancelled => "Checkout was cancelled.".to_owned(),
            Self::InvalidEmail(e) => e.to_string(),
            Self::InvalidPrice(e) => e.to_string(),
        }
    }
}

/// Result type alias for `MarketplaceError`.
pub type Result<T> = std::result::Result<T, MarketplaceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_messages() {
        assert_eq!(
            MarketplaceError::UserNotFound.user_message(),
            "User not found. Try the demo credentials."
        );
        assert_eq!(
            MarketplaceError::EmailInUse.user_message(),
            "Email already in use."
        );
    }

    #[test]
    fn test_email_error_converts() {
        let err: MarketplaceError = EmailError::Empty.into();
        assert!(matches!(err, MarketplaceError::InvalidEmail(_)));
    }
}
