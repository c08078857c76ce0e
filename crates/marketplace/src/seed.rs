//! Demo seed data.
//!
//! Supplied at process start as an opaque input; the engine's contract does
//! not depend on any of it. Two catalog sellers (`s2`, `s3`) intentionally
//! have no user record - their notifications accumulate unseen.

use chrono::NaiveDate;

use lumina_core::{Email, Money, OrderId, ProductId, Role, UserId};

use crate::models::{Order, OrderStatus, Product, User};
use crate::store::MarketplaceStore;

/// A store populated with the demo users, catalog, and order ledger.
#[must_use]
pub fn demo_store() -> MarketplaceStore {
    MarketplaceStore::with_data(users(), products(), orders())
}

fn email(s: &str) -> Email {
    Email::parse(s).expect("seed email is valid")
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("seed date is valid")
}

fn users() -> Vec<User> {
    vec![
        User {
            id: UserId::new("u1"),
            name: "Alex Buyer".to_owned(),
            email: email("alex@lumina.com"),
            role: Role::Buyer,
            avatar: "https://picsum.photos/100/100?random=10".to_owned(),
            balance: None,
        },
        User {
            id: UserId::new("u2"),
            name: "Sarah Seller".to_owned(),
            email: email("sarah@lumina.com"),
            role: Role::Seller,
            avatar: "https://picsum.photos/100/100?random=11".to_owned(),
            balance: Some(Money::from_cents(1_254_050)),
        },
        User {
            id: UserId::new("u3"),
            name: "Max Admin".to_owned(),
            email: email("admin@lumina.com"),
            role: Role::Admin,
            avatar: "https://picsum.photos/100/100?random=12".to_owned(),
            balance: None,
        },
    ]
}

#[allow(clippy::too_many_arguments)]
fn product(
    id: &str,
    name: &str,
    price: u32,
    category: &str,
    image: &str,
    rating: f32,
    reviews: u32,
    stock: u32,
    seller: &str,
    description: &str,
) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_owned(),
        price: Money::from_major(price),
        category: category.to_owned(),
        image: image.to_owned(),
        rating,
        reviews,
        stock,
        seller_id: UserId::new(seller),
        description: description.to_owned(),
    }
}

fn products() -> Vec<Product> {
    vec![
        product(
            "1",
            "Neon Cyber Headset",
            299,
            "Electronics",
            "https://picsum.photos/400/400?random=1",
            4.8,
            124,
            15,
            "u2",
            "High-fidelity audio with active noise cancellation and RGB neon accents.",
        ),
        product(
            "2",
            "Glass Mechanical Keyboard",
            189,
            "Electronics",
            "https://picsum.photos/400/400?random=2",
            4.9,
            89,
            42,
            "u2",
            "Transparent chassis mechanical keyboard with custom linear switches.",
        ),
        product(
            "3",
            "Minimalist Smart Watch",
            450,
            "Wearables",
            "https://picsum.photos/400/400?random=3",
            4.5,
            210,
            8,
            "s2",
            "Sleek design, 7-day battery life, and comprehensive health tracking.",
        ),
        product(
            "4",
            "Holographic Backpack",
            120,
            "Fashion",
            "https://picsum.photos/400/400?random=4",
            4.2,
            56,
            100,
            "s2",
            "Reflective material that changes color based on viewing angle.",
        ),
        product(
            "5",
            "Levitating Plant Pot",
            85,
            "Home",
            "https://picsum.photos/400/400?random=5",
            4.7,
            340,
            5,
            "u2",
            "Magnetic levitation technology for a futuristic home garden.",
        ),
        product(
            "6",
            "Ergonomic Mesh Chair",
            599,
            "Furniture",
            "https://picsum.photos/400/400?random=6",
            4.6,
            112,
            12,
            "s3",
            "Breathable mesh with 4D armrests and lumbar support.",
        ),
        product(
            "7",
            "Organic Quantum Berries",
            15,
            "Food & Groceries",
            "https://images.unsplash.com/photo-1615485925694-a6dd90a1d785?auto=format&fit=crop&q=80&w=400",
            4.9,
            42,
            50,
            "u2",
            "Genetically enhanced berries that glow in the dark and provide 100% daily vitamins.",
        ),
        product(
            "8",
            "Synthetic Wagyu Steak",
            85,
            "Food & Groceries",
            "https://images.unsplash.com/photo-1600891964092-4316c288032e?auto=format&fit=crop&q=80&w=400",
            4.7,
            18,
            20,
            "s2",
            "Lab-grown premium wagyu beef, identical molecular structure, zero suffering.",
        ),
        product(
            "9",
            "Neon Energy Drink",
            5,
            "Food & Groceries",
            "https://images.unsplash.com/photo-1622483767028-3f66f32aef97?auto=format&fit=crop&q=80&w=400",
            4.5,
            156,
            200,
            "s3",
            "Electrolyte-infused sparkling water with bioluminescent properties.",
        ),
    ]
}

fn orders() -> Vec<Order> {
    vec![
        Order {
            id: OrderId::new("#ORD-7721"),
            customer_name: "Alice Freeman".to_owned(),
            date: date(2023, 10, 24),
            total: Money::from_major(450),
            status: OrderStatus::Delivered,
            items: 2,
        },
        Order {
            id: OrderId::new("#ORD-7722"),
            customer_name: "Bob Smith".to_owned(),
            date: date(2023, 10, 25),
            total: Money::from_major(120),
            status: OrderStatus::Shipped,
            items: 1,
        },
        Order {
            id: OrderId::new("#ORD-7723"),
            customer_name: "Charlie Davis".to_owned(),
            date: date(2023, 10, 25),
            total: Money::from_major(1_200),
            status: OrderStatus::Pending,
            items: 4,
        },
        Order {
            id: OrderId::new("#ORD-7724"),
            customer_name: "Diana Prince".to_owned(),
            date: date(2023, 10, 26),
            total: Money::from_major(299),
            status: OrderStatus::Processing,
            items: 1,
        },
    ]
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_store_shape() {
        let store = demo_store();
        assert_eq!(store.users().len(), 3);
        assert_eq!(store.products().len(), 9);
        assert_eq!(store.orders().len(), 4);
        assert!(store.notifications().is_empty());
    }

    #[test]
    fn test_seeded_admin_and_seller() {
        let store = demo_store();
        assert_eq!(store.first_admin().unwrap().name, "Max Admin");

        let sarah = store.find_user_by_email_ci("sarah@lumina.com").unwrap();
        assert_eq!(sarah.balance.unwrap().to_string(), "$12540.50");
    }

    #[test]
    fn test_catalog_attribution() {
        let store = demo_store();
        let sarah = UserId::new("u2");
        assert_eq!(store.products_by_seller(&sarah).count(), 4);
        // Sellers s2/s3 exist only as catalog attributions, not user records.
        assert!(store.user(&UserId::new("s2")).is_none());
    }
}
