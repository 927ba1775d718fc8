//! Catalog and vendor journeys: product CRUD, search, detail page.
//!
//! Ignored by default; they need a headless Chromium and the marketplace
//! frontend on http://localhost:3000. Run with:
//! cargo test -p marketplace-harness --test catalog_vendor -- --ignored

use std::time::Duration;

use marketplace_browser::{cleanup, full_page_setup, sleep, SetupOptions};
use marketplace_harness::{expect_visible_text, init_tracing, screenshot_on_failure, Timeouts};
use marketplace_mockdata::{
    mock_product, mock_review, mock_search_results, mock_user, ProductOverrides, ReviewOverrides,
    UserOverrides,
};

/// TC007: a vendor edits one of their products and then deletes it.
#[tokio::test]
#[ignore = "requires Chromium and the marketplace frontend on localhost:3000"]
async fn tc007_vendor_product_update_and_delete() -> anyhow::Result<()> {
    init_tracing();
    let timeouts = Timeouts::default();
    let (session, browser, context, page) = full_page_setup(&SetupOptions::default()).await?;

    let vendor = mock_user(UserOverrides {
        role: Some("vendor".to_string()),
        ..Default::default()
    });
    let product = mock_product(ProductOverrides {
        vendor_id: Some(vendor.id.clone()),
        stock: 50,
        ..Default::default()
    });

    // TODO: drive the edit and delete flows:
    //   page.click_element(&format!("button#edit-product-{}", product.id), timeouts.short).await?;
    //   page.fill_input("#product-price", &format!("{}", product.price + 10.0), timeouts.short).await?;
    //   page.click_element(&format!("button#delete-product-{}", product.id), timeouts.short).await?;
    let _ = &product;

    let outcome = expect_visible_text(
        &page,
        "Product update successful!",
        timeouts.assertion,
        "the product details were not updated correctly or the product was \
         not deleted",
    )
    .await;

    if outcome.is_err() {
        screenshot_on_failure(&page, "tc007_vendor_product_update_and_delete").await;
    }
    sleep(Duration::from_secs(5)).await;
    cleanup(Some(context), Some(browser), Some(session)).await;
    outcome
}

/// TC008: product search with category filters and live suggestions.
#[tokio::test]
#[ignore = "requires Chromium and the marketplace frontend on localhost:3000"]
async fn tc008_product_search_and_category_filtering() -> anyhow::Result<()> {
    init_tracing();
    let (session, browser, context, page) = full_page_setup(&SetupOptions::default()).await?;

    let search_query = "laptop";
    let _results = mock_search_results(search_query, 10);
    let _featured = mock_product(ProductOverrides {
        name: Some("Exclusive Limited Edition Product".to_string()),
        ..Default::default()
    });

    // TODO: type the query, pick a category filter, and check suggestions.

    // Short wait on purpose; the result card either renders with the list
    // or not at all.
    let outcome = expect_visible_text(
        &page,
        "Exclusive Limited Edition Product",
        Duration::from_millis(500),
        "browsing, category filtering, and real-time search suggestions did \
         not behave as expected",
    )
    .await;

    if outcome.is_err() {
        screenshot_on_failure(&page, "tc008_product_search_and_category_filtering").await;
    }
    sleep(Duration::from_secs(5)).await;
    cleanup(Some(context), Some(browser), Some(session)).await;
    outcome
}

/// TC009: product detail page shows name, price, stock, and reviews, and
/// the item can be added to the cart.
#[tokio::test]
#[ignore = "requires Chromium and the marketplace frontend on localhost:3000"]
async fn tc009_product_detail_display_and_add_to_cart() -> anyhow::Result<()> {
    init_tracing();
    let timeouts = Timeouts::default();
    let (session, browser, context, page) = full_page_setup(&SetupOptions::default()).await?;

    let product = mock_product(ProductOverrides {
        name: Some("Exclusive Limited Edition Product".to_string()),
        stock: 50,
        ..Default::default()
    });
    let _review = mock_review(ReviewOverrides {
        product_id: Some(product.id.clone()),
        rating: Some(5),
        ..Default::default()
    });

    let outcome = async {
        // Walk the listing first, then return home; both settle before the
        // detail interactions.
        page.navigate("http://localhost:3000/products", timeouts.navigation)
            .await?;
        sleep(Duration::from_secs(3)).await;
        page.navigate("http://localhost:3000", timeouts.navigation)
            .await?;
        sleep(Duration::from_secs(3)).await;

        // TODO: open the detail page and add to cart:
        //   page.click_element(&format!("a[href='/products/{}']", product.id), timeouts.short).await?;
        //   page.click_element("button#add-to-cart", timeouts.short).await?;

        expect_visible_text(
            &page,
            "Exclusive Limited Edition Product",
            timeouts.assertion,
            "the product detail page did not display the product name, \
             description, price, stock availability, and reviews, or the item \
             was not added to the cart",
        )
        .await
    }
    .await;

    if outcome.is_err() {
        screenshot_on_failure(&page, "tc009_product_detail_display_and_add_to_cart").await;
    }
    sleep(Duration::from_secs(5)).await;
    cleanup(Some(context), Some(browser), Some(session)).await;
    outcome
}
