//! Account and access-control journeys: registration, login, role gates.
//!
//! Ignored by default; they need a headless Chromium and the marketplace
//! frontend on http://localhost:3000. Run with:
//! cargo test -p marketplace-harness --test account_access -- --ignored

use std::time::Duration;

use marketplace_browser::{
    cleanup, full_page_setup, intercept_route, sleep, SetupOptions,
};
use marketplace_harness::{
    expect_visible_text, fulfill_with, init_tracing, screenshot_on_failure, TestData, Timeouts,
};
use marketplace_mockdata::{mock_auth_failure, mock_auth_success, mock_user, ApiEnvelope, UserOverrides};

/// TC001: a new customer registers with valid data and lands in the
/// customer role.
#[tokio::test]
#[ignore = "requires Chromium and the marketplace frontend on localhost:3000"]
async fn tc001_user_registration_with_valid_data() -> anyhow::Result<()> {
    init_tracing();
    let timeouts = Timeouts::default();
    let (session, browser, context, page) = full_page_setup(&SetupOptions::default()).await?;

    let _new_user = mock_user(UserOverrides {
        email: Some("newuser@test.com".to_string()),
        role: Some("customer".to_string()),
        ..Default::default()
    });

    // TODO: drive the registration form once its selectors are final:
    //   page.fill_input("#email", &_new_user.email, timeouts.short).await?;
    //   page.fill_input("#password", "Test123456!", timeouts.short).await?;
    //   page.click_element("button[type='submit']", timeouts.short).await?;

    let outcome = expect_visible_text(
        &page,
        "Registration Completed Successfully",
        timeouts.assertion,
        "the registration success message was not displayed and the new user \
         was not assigned the customer role",
    )
    .await;

    if outcome.is_err() {
        screenshot_on_failure(&page, "tc001_user_registration_with_valid_data").await;
    }
    sleep(Duration::from_secs(5)).await;
    cleanup(Some(context), Some(browser), Some(session)).await;
    outcome
}

/// TC002: registration with a malformed email must be rejected.
#[tokio::test]
#[ignore = "requires Chromium and the marketplace frontend on localhost:3000"]
async fn tc002_user_registration_with_invalid_email_format() -> anyhow::Result<()> {
    init_tracing();
    let timeouts = Timeouts::default();
    let (session, browser, context, page) = full_page_setup(&SetupOptions::default()).await?;

    let outcome = async {
        // Serve the backend's rejection locally so the check covers frontend
        // validation regardless of backend state.
        let invalid_email_error = ApiEnvelope::error("Invalid email format", 400);
        let interceptor = intercept_route(
            &page,
            "**/api/auth/register",
            fulfill_with(&invalid_email_error),
        )
        .await?;

        // TODO: fill the registration form with the malformed address:
        //   page.fill_input("#email", "invalid-email-format", timeouts.short).await?;

        let result = expect_visible_text(
            &page,
            "Registration Successful",
            timeouts.assertion,
            "the registration with an invalid email format was not rejected; \
             no validation outcome was displayed",
        )
        .await;
        interceptor.detach().await;
        result
    }
    .await;

    if outcome.is_err() {
        screenshot_on_failure(&page, "tc002_user_registration_with_invalid_email_format").await;
    }
    sleep(Duration::from_secs(5)).await;
    cleanup(Some(context), Some(browser), Some(session)).await;
    outcome
}

/// TC003: login with correct credentials signs the customer in.
#[tokio::test]
#[ignore = "requires Chromium and the marketplace frontend on localhost:3000"]
async fn tc003_user_login_with_correct_credentials() -> anyhow::Result<()> {
    init_tracing();
    let timeouts = Timeouts::default();
    let (session, browser, context, page) = full_page_setup(&SetupOptions::default()).await?;

    let _known_user = mock_user(UserOverrides {
        email: Some("test@example.com".to_string()),
        role: Some("customer".to_string()),
        ..Default::default()
    });
    let _auth = mock_auth_success();

    // TODO: drive the login form:
    //   page.fill_input("#email", &_known_user.email, timeouts.short).await?;
    //   page.fill_input("#password", "Test123456!", timeouts.short).await?;
    //   page.click_element("button[type='submit']", timeouts.short).await?;

    let outcome = expect_visible_text(
        &page,
        "Authentication Successful",
        timeouts.assertion,
        "the user could not sign in with correct credentials",
    )
    .await;

    if outcome.is_err() {
        screenshot_on_failure(&page, "tc003_user_login_with_correct_credentials").await;
    }
    sleep(Duration::from_secs(5)).await;
    cleanup(Some(context), Some(browser), Some(session)).await;
    outcome
}

/// TC004: login with a wrong password or unknown email must be refused.
#[tokio::test]
#[ignore = "requires Chromium and the marketplace frontend on localhost:3000"]
async fn tc004_user_login_with_incorrect_credentials() -> anyhow::Result<()> {
    init_tracing();
    let timeouts = Timeouts::default();
    let (session, browser, context, page) = full_page_setup(&SetupOptions::default()).await?;

    let outcome = async {
        let auth_failure = mock_auth_failure();
        let envelope = ApiEnvelope::json(401, serde_json::to_value(&auth_failure)?);
        let interceptor =
            intercept_route(&page, "**/api/auth/login", fulfill_with(&envelope)).await?;

        // TODO: submit the login form with a wrong password:
        //   page.fill_input("#email", "test@example.com", timeouts.short).await?;
        //   page.fill_input("#password", "WrongPassword!", timeouts.short).await?;

        let result = expect_visible_text(
            &page,
            "Welcome back, test@example.com!",
            timeouts.assertion,
            "the login attempt with incorrect credentials was not rejected; the \
             invalid-login error was never displayed or the user was incorrectly \
             authenticated",
        )
        .await;
        interceptor.detach().await;
        result
    }
    .await;

    if outcome.is_err() {
        screenshot_on_failure(&page, "tc004_user_login_with_incorrect_credentials").await;
    }
    sleep(Duration::from_secs(5)).await;
    cleanup(Some(context), Some(browser), Some(session)).await;
    outcome
}

/// TC005: customer, vendor, and admin each see exactly the areas their
/// role allows.
#[tokio::test]
#[ignore = "requires Chromium and the marketplace frontend on localhost:3000"]
async fn tc005_role_based_access_control_verification() -> anyhow::Result<()> {
    init_tracing();
    let timeouts = Timeouts::default();
    let (session, browser, context, page) = full_page_setup(&SetupOptions::default()).await?;

    let _customer = TestData::customer();
    let _vendor = TestData::vendor();
    let _admin = TestData::admin();

    // TODO: role-gate checks:
    //   vendor reaches the vendor dashboard,
    //   customer is turned away from it,
    //   admin reaches every area.

    let outcome = expect_visible_text(
        &page,
        "Exclusive Vendor Dashboard Access",
        timeouts.assertion,
        "access restrictions and navigation did not behave as expected for \
         the customer, vendor, and admin roles",
    )
    .await;

    if outcome.is_err() {
        screenshot_on_failure(&page, "tc005_role_based_access_control_verification").await;
    }
    sleep(Duration::from_secs(5)).await;
    cleanup(Some(context), Some(browser), Some(session)).await;
    outcome
}

/// TC018: pages outside a user's role must stay unreachable.
#[tokio::test]
#[ignore = "requires Chromium and the marketplace frontend on localhost:3000"]
async fn tc018_security_access_unauthorized_pages() -> anyhow::Result<()> {
    init_tracing();
    let (session, browser, context, page) = full_page_setup(&SetupOptions::default()).await?;

    let _customer = TestData::customer();

    // TODO: as a customer, request /admin directly and via navigation.

    // Short wait on purpose; the admin banner either renders immediately
    // or not at all.
    let outcome = expect_visible_text(
        &page,
        "Access Granted to Admin Dashboard",
        Duration::from_millis(1_000),
        "users were able to access pages or features outside their roles, \
         violating the access control rules",
    )
    .await;

    if outcome.is_err() {
        screenshot_on_failure(&page, "tc018_security_access_unauthorized_pages").await;
    }
    sleep(Duration::from_secs(5)).await;
    cleanup(Some(context), Some(browser), Some(session)).await;
    outcome
}
