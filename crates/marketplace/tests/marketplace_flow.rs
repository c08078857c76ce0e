//! End-to-end flows through the `Marketplace` controller.

use lumina_core::{Email, Money, ProductId, Role, UserId};
use lumina_marketplace::models::{Product, User};
use lumina_marketplace::{
    CancellationToken, CheckoutPhase, Marketplace, MarketplaceConfig, MarketplaceError,
    MarketplaceStore, View,
};

fn user(id: &str, name: &str, email: &str, role: Role) -> User {
    User {
        id: UserId::new(id),
        name: name.to_owned(),
        email: Email::parse(email).expect("valid email"),
        role,
        avatar: String::new(),
        balance: None,
    }
}

fn product(id: &str, seller: &str, price: u32) -> Product {
    Product {
        id: ProductId::new(id),
        name: format!("Item {id}"),
        price: Money::from_major(price),
        category: "Test".to_owned(),
        image: String::new(),
        rating: 4.0,
        reviews: 1,
        stock: 10,
        seller_id: UserId::new(seller),
        description: String::new(),
    }
}

/// Two sellers and one buyer. $100×1 + $50×2 at 8% tax comes to $216.00 and
/// produces exactly three notifications.
fn two_seller_market() -> Marketplace {
    let store = MarketplaceStore::with_data(
        vec![
            user("u1", "Buyer", "buyer@lumina.com", Role::Buyer),
            user("s1", "Seller One", "one@lumina.com", Role::Seller),
            user("s2", "Seller Two", "two@lumina.com", Role::Seller),
        ],
        vec![product("1", "s1", 100), product("2", "s2", 50)],
        Vec::new(),
    );
    Marketplace::with_store(MarketplaceConfig::default(), store)
}

#[tokio::test(start_paused = true)]
async fn checkout_fans_out_per_seller_and_resets_to_home() {
    let mut app = two_seller_market();
    app.login("buyer@lumina.com").expect("login");
    app.add_to_cart(&ProductId::new("1")).expect("add");
    app.add_to_cart(&ProductId::new("2")).expect("add");
    app.update_quantity(&ProductId::new("2"), 1);
    app.change_view(View::Lookbook);

    let totals = app.totals();
    assert_eq!(totals.subtotal, Money::from_major(200));
    assert_eq!(totals.tax, Money::from_major(16));
    assert_eq!(totals.total.to_string(), "$216.00");

    let mut phases = app.subscribe_checkout();
    let cancel = CancellationToken::new();
    let receipt = app.place_order(&cancel).await.expect("checkout succeeds");

    assert_eq!(receipt.sellers_notified, 2);
    assert_eq!(receipt.totals.total.to_string(), "$216.00");

    // The simulation ran to completion: cart empty, back home, idle again.
    assert!(app.cart().is_empty());
    assert_eq!(app.current_view(), View::Home);
    assert_eq!(app.checkout_phase(), CheckoutPhase::Idle);
    assert!(phases.has_changed().expect("phase channel alive"));

    // Exactly one notification per distinct seller plus the buyer's receipt.
    assert_eq!(app.store().notifications().len(), 3);
    let s1 = UserId::new("s1");
    let for_s1: Vec<_> = app.store().notifications_for(&s1).collect();
    assert_eq!(for_s1.len(), 1);
    assert_eq!(for_s1[0].message, "New Order Received: 1x Item 1");

    let s2 = UserId::new("s2");
    let for_s2: Vec<_> = app.store().notifications_for(&s2).collect();
    assert_eq!(for_s2.len(), 1);
    assert_eq!(for_s2[0].message, "New Order Received: 2x Item 2");

    let u1 = UserId::new("u1");
    let for_buyer: Vec<_> = app.store().notifications_for(&u1).collect();
    assert_eq!(for_buyer.len(), 1);
    assert_eq!(
        for_buyer[0].message,
        "Order successfully placed! Total: $216.00"
    );
}

#[tokio::test(start_paused = true)]
async fn cancelled_checkout_mutates_nothing() {
    let mut app = two_seller_market();
    app.login("buyer@lumina.com").expect("login");
    app.add_to_cart(&ProductId::new("1")).expect("add");

    let cancel = CancellationToken::new();
    cancel.cancel();

    let err = app.place_order(&cancel).await.expect_err("cancelled");
    assert!(matches!(err, MarketplaceError::CheckoutCancelled));
    assert_eq!(app.checkout_phase(), CheckoutPhase::Failed);
    assert_eq!(app.cart_count(), 1);
    assert!(app.store().notifications().is_empty());
}

#[tokio::test(start_paused = true)]
async fn place_order_requires_a_session() {
    let mut app = two_seller_market();
    let cancel = CancellationToken::new();
    let err = app.place_order(&cancel).await.expect_err("guest");
    assert!(matches!(err, MarketplaceError::AuthRequired));
    assert_eq!(app.checkout_phase(), CheckoutPhase::Idle);
}

#[tokio::test(start_paused = true)]
async fn seller_sees_order_notification_after_buyer_checks_out() {
    let mut app = Marketplace::with_demo_data(MarketplaceConfig::default());

    // Guest taps "add to cart" and is bounced to the login prompt.
    let err = app.add_to_cart(&ProductId::new("1")).expect_err("guest");
    assert!(matches!(err, MarketplaceError::AuthRequired));

    app.login("alex@lumina.com").expect("buyer login");
    app.add_to_cart(&ProductId::new("1")).expect("add"); // Sarah's headset
    app.place_order(&CancellationToken::new())
        .await
        .expect("checkout");

    // Buyer sees the confirmation.
    assert_eq!(app.unread_count(), 1);

    // Sarah signs in and finds the order waiting.
    app.logout();
    app.login("sarah@lumina.com").expect("seller login");
    assert_eq!(app.current_view(), View::Dashboard);
    assert_eq!(app.unread_count(), 1);
    let inbox = app.notifications();
    assert!(inbox[0].message.starts_with("New Order Received:"));
}

#[tokio::test(start_paused = true)]
async fn checkout_on_empty_cart_still_confirms_to_buyer_only() {
    let mut app = two_seller_market();
    app.login("buyer@lumina.com").expect("login");

    let receipt = app
        .place_order(&CancellationToken::new())
        .await
        .expect("checkout");
    assert_eq!(receipt.sellers_notified, 0);
    assert_eq!(receipt.totals.total, Money::ZERO);
    assert_eq!(app.store().notifications().len(), 1);
}
