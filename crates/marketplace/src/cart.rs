//! Cart bookkeeping.
//!
//! One entry per product id; adding an already-carted product increments its
//! quantity. Quantities never drop below 1 - removal is its own operation.

use rust_decimal::Decimal;
use serde::Serialize;

use lumina_core::{Money, ProductId};

use crate::models::Product;

/// A product plus how many of it the buyer is purchasing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartItem {
    /// The carted product.
    pub product: Product,
    /// Always at least 1.
    pub quantity: u32,
}

impl CartItem {
    /// Price × quantity for this line.
    #[must_use]
    pub fn line_total(&self) -> Money {
        self.product.price * self.quantity
    }
}

/// Derived checkout figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CartTotals {
    /// Sum of line totals.
    pub subtotal: Money,
    /// Tax on the subtotal.
    pub tax: Money,
    /// Subtotal plus tax.
    pub total: Money,
}

/// The buyer's in-progress selection. Exists only while a session is active.
#[derive(Debug, Default)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// An empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Current entries, insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// True when nothing is carted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Badge count: total units across all entries.
    #[must_use]
    pub fn count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Add one unit of a product: increments the existing entry or appends a
    /// new one with quantity 1.
    pub fn add(&mut self, product: Product) {
        if let Some(item) = self.items.iter_mut().find(|i| i.product.id == product.id) {
            item.quantity += 1;
            return;
        }
        self.items.push(CartItem {
            product,
            quantity: 1,
        });
    }

    /// Drop the entry for a product. Silent no-op when absent.
    pub fn remove(&mut self, id: &ProductId) {
        self.items.retain(|i| &i.product.id != id);
    }

    /// Adjust an entry's quantity by `delta`, clamped so it never falls below
    /// 1. Silent no-op when the id is absent.
    pub fn update_quantity(&mut self, id: &ProductId, delta: i64) {
        if let Some(item) = self.items.iter_mut().find(|i| &i.product.id == id) {
            let adjusted = i64::from(item.quantity).saturating_add(delta).max(1);
            item.quantity = u32::try_from(adjusted).unwrap_or(u32::MAX);
        }
    }

    /// Empty the cart unconditionally.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Subtotal, tax at the given fractional rate, and grand total.
    #[must_use]
    pub fn totals(&self, tax_rate: Decimal) -> CartTotals {
        let subtotal: Money = self.items.iter().map(CartItem::line_total).sum();
        let tax = subtotal.tax(tax_rate);
        CartTotals {
            subtotal,
            tax,
            total: subtotal + tax,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use lumina_core::UserId;

    fn product(id: &str, price: u32) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            price: Money::from_major(price),
            category: "Test".to_owned(),
            image: String::new(),
            rating: 4.5,
            reviews: 10,
            stock: 99,
            seller_id: UserId::new("u2"),
            description: String::new(),
        }
    }

    #[test]
    fn test_repeated_add_increments_instead_of_duplicating() {
        let mut cart = Cart::new();
        cart.add(product("1", 100));
        cart.add(product("1", 100));

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].quantity, 2);
        assert_eq!(cart.count(), 2);
    }

    #[test]
    fn test_update_quantity_clamps_at_one() {
        let mut cart = Cart::new();
        cart.add(product("1", 100));
        cart.update_quantity(&ProductId::new("1"), -100);
        assert_eq!(cart.items()[0].quantity, 1);

        cart.update_quantity(&ProductId::new("1"), 3);
        assert_eq!(cart.items()[0].quantity, 4);
    }

    #[test]
    fn test_absent_id_operations_are_noops() {
        let mut cart = Cart::new();
        cart.add(product("1", 100));

        cart.remove(&ProductId::new("missing"));
        cart.update_quantity(&ProductId::new("missing"), 5);

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].quantity, 1);
    }

    #[test]
    fn test_remove_and_clear() {
        let mut cart = Cart::new();
        cart.add(product("1", 100));
        cart.add(product("2", 50));

        cart.remove(&ProductId::new("1"));
        assert_eq!(cart.items().len(), 1);

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.count(), 0);
    }

    #[test]
    fn test_totals_at_eight_percent() {
        let mut cart = Cart::new();
        cart.add(product("1", 100));
        cart.add(product("2", 50));
        cart.update_quantity(&ProductId::new("2"), 1); // 2 × $50

        let totals = cart.totals(Decimal::new(8, 2));
        assert_eq!(totals.subtotal, Money::from_major(200));
        assert_eq!(totals.tax, Money::from_major(16));
        assert_eq!(totals.total.to_string(), "$216.00");
    }
}
