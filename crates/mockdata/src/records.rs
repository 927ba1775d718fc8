//! Synthetic domain record generators.
//!
//! Each generator produces a freshly randomized record. Overrides, when given,
//! are taken verbatim, including values outside the nominal enums; the suite
//! relies on being able to push invalid data through a form.

use chrono::Utc;
use rand::distributions::Alphanumeric;
use rand::{thread_rng, Rng};
use serde::{Deserialize, Serialize};

/// Round to 2 decimal places (currency convention).
pub(crate) fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Round to 1 decimal place (rating convention).
fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

/// `<prefix>_<n>` with `n` uniform in `lo..=hi`. Collisions are accepted; this
/// is a formatting convention, not a uniqueness guarantee.
fn numeric_id(prefix: &str, lo: u32, hi: u32) -> String {
    format!("{}_{}", prefix, thread_rng().gen_range(lo..=hi))
}

/// Random token of `len` mixed-case alphanumerics.
pub(crate) fn alnum_token(len: usize) -> String {
    thread_rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

/// Random token of `len` uppercase letters and digits (transaction ids).
fn upper_token(len: usize) -> String {
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
    let mut rng = thread_rng();
    (0..len)
        .map(|_| CHARSET[rng.gen_range(0..CHARSET.len())] as char)
        .collect()
}

fn now() -> String {
    Utc::now().to_rfc3339()
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub phone: String,
    pub address: String,
    pub city: String,
    pub country: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub username: String,
    /// Nominally one of `customer`, `vendor`, `admin`; not validated.
    pub role: String,
    pub first_name: String,
    pub last_name: String,
    pub created_at: String,
    pub is_active: bool,
    pub profile: Profile,
}

#[derive(Debug, Clone, Default)]
pub struct UserOverrides {
    pub id: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
}

pub fn mock_user(overrides: UserOverrides) -> User {
    let id = overrides.id.unwrap_or_else(|| numeric_id("user", 1000, 9999));
    User {
        email: overrides
            .email
            .unwrap_or_else(|| format!("test_{}@example.com", id)),
        username: format!("user_{}", id),
        role: overrides.role.unwrap_or_else(|| "customer".to_string()),
        first_name: "Test".to_string(),
        last_name: "User".to_string(),
        created_at: now(),
        is_active: true,
        profile: Profile {
            phone: "+1234567890".to_string(),
            address: "123 Test Street".to_string(),
            city: "Test City".to_string(),
            country: "Test Country".to_string(),
        },
        id,
    }
}

// ---------------------------------------------------------------------------
// Products
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock: u32,
    pub category: String,
    pub vendor_id: String,
    pub images: Vec<String>,
    pub rating: f64,
    pub reviews_count: u32,
    pub created_at: String,
    pub is_active: bool,
}

#[derive(Debug, Clone)]
pub struct ProductOverrides {
    pub id: Option<String>,
    pub vendor_id: Option<String>,
    pub name: Option<String>,
    pub stock: u32,
}

impl Default for ProductOverrides {
    fn default() -> Self {
        Self {
            id: None,
            vendor_id: None,
            name: None,
            stock: 100,
        }
    }
}

const CATEGORIES: [&str; 4] = ["Electronics", "Clothing", "Home", "Books"];

pub fn mock_product(overrides: ProductOverrides) -> Product {
    let mut rng = thread_rng();
    let id = overrides.id.unwrap_or_else(|| numeric_id("prod", 1000, 9999));
    let vendor_id = overrides
        .vendor_id
        .unwrap_or_else(|| numeric_id("vendor", 100, 999));
    Product {
        name: overrides
            .name
            .unwrap_or_else(|| format!("Test Product {}", id)),
        description: "This is a test product description".to_string(),
        price: round2(rng.gen_range(10.0..500.0)),
        stock: overrides.stock,
        category: CATEGORIES[rng.gen_range(0..CATEGORIES.len())].to_string(),
        images: vec![
            format!("https://example.com/images/{}_1.jpg", id),
            format!("https://example.com/images/{}_2.jpg", id),
        ],
        rating: round1(rng.gen_range(3.0..5.0)),
        reviews_count: rng.gen_range(0..=500),
        created_at: now(),
        is_active: true,
        id,
        vendor_id,
    }
}

// ---------------------------------------------------------------------------
// Orders
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub product_id: String,
    pub quantity: u32,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub user_id: String,
    /// Nominally `pending`/`processing`/`shipped`/`delivered`/`cancelled`.
    pub status: String,
    /// Totals are randomized independently of `items`; callers must not assume
    /// `subtotal + tax + shipping == total_amount`.
    pub total_amount: f64,
    pub subtotal: f64,
    pub tax: f64,
    pub shipping: f64,
    pub items: Vec<OrderItem>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Default)]
pub struct OrderOverrides {
    pub id: Option<String>,
    pub user_id: Option<String>,
    pub status: Option<String>,
}

pub fn mock_order(overrides: OrderOverrides) -> Order {
    let mut rng = thread_rng();
    Order {
        id: overrides
            .id
            .unwrap_or_else(|| numeric_id("order", 10000, 99999)),
        user_id: overrides
            .user_id
            .unwrap_or_else(|| numeric_id("user", 1000, 9999)),
        status: overrides.status.unwrap_or_else(|| "pending".to_string()),
        total_amount: round2(rng.gen_range(50.0..1000.0)),
        subtotal: round2(rng.gen_range(40.0..900.0)),
        tax: round2(rng.gen_range(5.0..100.0)),
        shipping: round2(rng.gen_range(5.0..20.0)),
        items: vec![OrderItem {
            product_id: numeric_id("prod", 1000, 9999),
            quantity: rng.gen_range(1..=5),
            price: round2(rng.gen_range(10.0..200.0)),
        }],
        created_at: now(),
        updated_at: now(),
    }
}

// ---------------------------------------------------------------------------
// Payments
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub id: String,
    pub order_id: String,
    pub amount: f64,
    pub commission: f64,
    /// Nominally `pending`/`completed`/`failed`/`refunded`.
    pub status: String,
    pub payment_method: String,
    pub transaction_id: String,
    pub processed_at: String,
}

#[derive(Debug, Clone, Default)]
pub struct PaymentOverrides {
    pub id: Option<String>,
    pub order_id: Option<String>,
    pub status: Option<String>,
}

pub fn mock_payment(overrides: PaymentOverrides) -> Payment {
    let mut rng = thread_rng();
    const METHODS: [&str; 3] = ["credit_card", "paypal", "stripe"];
    Payment {
        id: overrides
            .id
            .unwrap_or_else(|| numeric_id("pay", 10000, 99999)),
        order_id: overrides
            .order_id
            .unwrap_or_else(|| numeric_id("order", 10000, 99999)),
        amount: round2(rng.gen_range(50.0..1000.0)),
        commission: round2(rng.gen_range(5.0..100.0)),
        status: overrides.status.unwrap_or_else(|| "completed".to_string()),
        payment_method: METHODS[rng.gen_range(0..METHODS.len())].to_string(),
        transaction_id: format!("txn_{}", upper_token(16)),
        processed_at: now(),
    }
}

// ---------------------------------------------------------------------------
// Reviews
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: String,
    pub product_id: String,
    pub user_id: String,
    /// Nominally 1..=5; not validated.
    pub rating: i32,
    pub title: String,
    pub comment: String,
    pub created_at: String,
    pub helpful_count: u32,
}

#[derive(Debug, Clone, Default)]
pub struct ReviewOverrides {
    pub id: Option<String>,
    pub product_id: Option<String>,
    pub user_id: Option<String>,
    pub rating: Option<i32>,
}

pub fn mock_review(overrides: ReviewOverrides) -> Review {
    Review {
        id: overrides
            .id
            .unwrap_or_else(|| numeric_id("review", 1000, 9999)),
        product_id: overrides
            .product_id
            .unwrap_or_else(|| numeric_id("prod", 1000, 9999)),
        user_id: overrides
            .user_id
            .unwrap_or_else(|| numeric_id("user", 1000, 9999)),
        rating: overrides.rating.unwrap_or(5),
        title: "Great product!".to_string(),
        comment: "This is a test review comment.".to_string(),
        created_at: now(),
        helpful_count: thread_rng().gen_range(0..=50),
    }
}

// ---------------------------------------------------------------------------
// Notifications
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub user_id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub message: String,
    pub read: bool,
    pub created_at: String,
}

#[derive(Debug, Clone, Default)]
pub struct NotificationOverrides {
    pub id: Option<String>,
    pub user_id: Option<String>,
    pub kind: Option<String>,
}

pub fn mock_notification(overrides: NotificationOverrides) -> Notification {
    Notification {
        id: overrides
            .id
            .unwrap_or_else(|| numeric_id("notif", 1000, 9999)),
        user_id: overrides
            .user_id
            .unwrap_or_else(|| numeric_id("user", 1000, 9999)),
        kind: overrides.kind.unwrap_or_else(|| "order_update".to_string()),
        title: "Test Notification".to_string(),
        message: "This is a test notification message.".to_string(),
        read: false,
        created_at: now(),
    }
}

// ---------------------------------------------------------------------------
// Carts
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub product_id: String,
    pub product_name: String,
    pub price: f64,
    pub quantity: u32,
    pub subtotal: f64,
    pub vendor_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    pub id: String,
    pub user_id: String,
    pub items: Vec<CartItem>,
    /// Unlike order totals, this one is derived: Σ(price × quantity), 2dp.
    pub total: f64,
    pub item_count: usize,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone)]
pub struct CartOverrides {
    pub id: Option<String>,
    pub user_id: Option<String>,
    pub items_count: usize,
}

impl Default for CartOverrides {
    fn default() -> Self {
        Self {
            id: None,
            user_id: None,
            items_count: 3,
        }
    }
}

pub fn mock_cart(overrides: CartOverrides) -> Cart {
    let mut rng = thread_rng();
    let mut items = Vec::with_capacity(overrides.items_count);
    let mut total = 0.0;

    for _ in 0..overrides.items_count {
        let price = round2(rng.gen_range(10.0..200.0));
        let quantity = rng.gen_range(1..=5);
        items.push(CartItem {
            product_id: numeric_id("prod", 1000, 9999),
            product_name: format!("Test Product {}", rng.gen_range(1..=100)),
            price,
            quantity,
            subtotal: round2(price * f64::from(quantity)),
            vendor_id: numeric_id("vendor", 100, 999),
        });
        total += price * f64::from(quantity);
    }

    Cart {
        id: overrides.id.unwrap_or_else(|| numeric_id("cart", 1000, 9999)),
        user_id: overrides
            .user_id
            .unwrap_or_else(|| numeric_id("user", 1000, 9999)),
        item_count: overrides.items_count,
        items,
        total: round2(total),
        created_at: now(),
        updated_at: now(),
    }
}

// ---------------------------------------------------------------------------
// Search and metrics
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchFacets {
    pub categories: Vec<String>,
    pub price_ranges: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResults {
    pub query: String,
    pub total_results: usize,
    pub results: Vec<Product>,
    pub facets: SearchFacets,
}

pub fn mock_search_results(query: &str, count: usize) -> SearchResults {
    SearchResults {
        query: query.to_string(),
        total_results: count,
        results: (0..count)
            .map(|_| mock_product(ProductOverrides::default()))
            .collect(),
        facets: SearchFacets {
            categories: CATEGORIES.iter().map(|c| c.to_string()).collect(),
            price_ranges: ["0-50", "50-100", "100-500", "500+"]
                .iter()
                .map(|r| r.to_string())
                .collect(),
        },
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceMetrics {
    pub response_time: f64,
    pub throughput: u32,
    pub error_rate: f64,
    pub cpu_usage: f64,
    pub memory_usage: f64,
    pub timestamp: String,
}

pub fn mock_performance_metrics() -> PerformanceMetrics {
    let mut rng = thread_rng();
    PerformanceMetrics {
        response_time: round2(rng.gen_range(50.0..500.0)),
        throughput: rng.gen_range(100..=1000),
        error_rate: round2(rng.gen_range(0.0..5.0)),
        cpu_usage: round2(rng.gen_range(10.0..80.0)),
        memory_usage: round2(rng.gen_range(20.0..90.0)),
        timestamp: now(),
    }
}
