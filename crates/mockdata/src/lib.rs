//! Marketplace Mock Data
//!
//! Synthetic domain records (users, products, orders, payments, carts, ...) and
//! canned service doubles used by the E2E suite in place of real backends.
//!
//! Generators are deliberately permissive: every identifying or enum-like field
//! accepts an optional override that is round-tripped verbatim into the record,
//! with no validation. These are test fixtures, not domain objects. Records are
//! immutable values synthesized per call; ids follow a formatting convention
//! (`prod_<4-digit>`, `vendor_<3-digit>`, ...) with no uniqueness guarantee.

pub mod envelope;
pub mod records;
pub mod services;

pub use envelope::{mock_auth_failure, mock_auth_success, ApiEnvelope, AuthFailure, AuthSuccess};
pub use records::{
    mock_cart, mock_notification, mock_order, mock_payment, mock_performance_metrics,
    mock_product, mock_review, mock_search_results, mock_user, Cart, CartItem, CartOverrides,
    Notification, NotificationOverrides, Order, OrderItem, OrderOverrides, Payment,
    PaymentOverrides, PerformanceMetrics, Product, ProductOverrides, Profile, Review,
    ReviewOverrides, SearchFacets, SearchResults, User, UserOverrides,
};
pub use services::{
    MockDatabase, MockEmailService, MockPaymentGateway, MockStorageService, OpStatus,
};
