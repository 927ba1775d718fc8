//! Canned test data: role-specific records, login credentials, and the
//! timeout tiers scenarios reference by name.

use std::time::Duration;

use marketplace_browser::{DEFAULT_ASSERTION_TIMEOUT, DEFAULT_NAVIGATION_TIMEOUT};
use marketplace_mockdata::{
    mock_auth_success, mock_cart, mock_order, mock_product, mock_user, AuthSuccess, Cart, Order,
    OrderOverrides, Product, ProductOverrides, User, UserOverrides,
};

/// Factory for the records scenarios feed into the frontend.
///
/// Each call synthesizes a fresh record; nothing is cached between tests.
pub struct TestData;

impl TestData {
    /// A user with the default `customer` role.
    pub fn user() -> User {
        mock_user(UserOverrides::default())
    }

    pub fn customer() -> User {
        mock_user(UserOverrides {
            role: Some("customer".to_string()),
            ..Default::default()
        })
    }

    pub fn vendor() -> User {
        mock_user(UserOverrides {
            role: Some("vendor".to_string()),
            ..Default::default()
        })
    }

    pub fn admin() -> User {
        mock_user(UserOverrides {
            role: Some("admin".to_string()),
            ..Default::default()
        })
    }

    pub fn product() -> Product {
        mock_product(ProductOverrides::default())
    }

    /// `count` independent products (distinct ids are likely, not guaranteed).
    pub fn products(count: usize) -> Vec<Product> {
        (0..count)
            .map(|_| mock_product(ProductOverrides::default()))
            .collect()
    }

    pub fn order() -> Order {
        mock_order(OrderOverrides::default())
    }

    pub fn cart(items_count: usize) -> Cart {
        mock_cart(marketplace_mockdata::CartOverrides {
            items_count,
            ..Default::default()
        })
    }

    /// A successful login envelope, token included.
    pub fn auth() -> AuthSuccess {
        mock_auth_success()
    }
}

/// One login the frontend's seeded accounts accept.
#[derive(Debug, Clone, PartialEq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    fn new(email: &str, password: &str) -> Self {
        Self {
            email: email.to_string(),
            password: password.to_string(),
        }
    }
}

/// The three seeded accounts, one per role.
#[derive(Debug, Clone)]
pub struct TestCredentials {
    pub customer: Credentials,
    pub vendor: Credentials,
    pub admin: Credentials,
}

impl Default for TestCredentials {
    fn default() -> Self {
        Self {
            customer: Credentials::new("customer@test.com", "Test123456!"),
            vendor: Credentials::new("vendor@test.com", "Test123456!"),
            admin: Credentials::new("admin@test.com", "Admin123456!"),
        }
    }
}

/// The suite's timeout tiers. Scenarios pick a tier instead of inventing
/// per-call durations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    /// Quick interactions: clicks, fills (3 s).
    pub short: Duration,
    /// Page transitions and slower widgets (10 s).
    pub medium: Duration,
    /// Whole-flow settles (30 s).
    pub long: Duration,
    /// Navigation budget (10 s).
    pub navigation: Duration,
    /// Final visible-text assertions (30 s).
    pub assertion: Duration,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            short: Duration::from_millis(3_000),
            medium: Duration::from_millis(10_000),
            long: Duration::from_millis(30_000),
            navigation: DEFAULT_NAVIGATION_TIMEOUT,
            assertion: DEFAULT_ASSERTION_TIMEOUT,
        }
    }
}
