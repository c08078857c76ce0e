//! Product domain type.

use serde::{Deserialize, Serialize};

use lumina_core::{Money, ProductId, UserId};

/// A catalog entry, owned by the seller whose id equals `seller_id`.
///
/// Immutable once created; there is no edit or delete flow in scope. Price is
/// non-negative by construction ([`Money`]) and stock is unsigned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product ID.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: Money,
    /// Catalog category (e.g., "Electronics").
    pub category: String,
    /// Product image URL.
    pub image: String,
    /// Average review rating, 0.0 to 5.0.
    pub rating: f32,
    /// Number of reviews behind the rating.
    pub reviews: u32,
    /// Units available.
    pub stock: u32,
    /// Owning seller.
    pub seller_id: UserId,
    /// Long-form description shown on the product page.
    pub description: String,
}

impl Product {
    /// Create a fresh listing for a seller, with a generated id and no
    /// reviews yet.
    #[must_use]
    pub fn listed_by(
        seller_id: UserId,
        name: impl Into<String>,
        price: Money,
        category: impl Into<String>,
        image: impl Into<String>,
        stock: u32,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: ProductId::generate(),
            name: name.into(),
            price,
            category: category.into(),
            image: image.into(),
            rating: 0.0,
            reviews: 0,
            stock,
            seller_id,
            description: description.into(),
        }
    }
}
