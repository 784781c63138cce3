//! Integration tests for cart/wishlist durability.
//!
//! These exercise the whole persistence path: session -> store container ->
//! JSON file storage -> fresh session, including the silent-fallback
//! behavior for corrupted files.

#![allow(clippy::unwrap_used)]

use std::fs;

use techpulse_core::ProductId;
use techpulse_integration_tests::TestContext;
use techpulse_storefront::store::{CART_STORAGE_KEY, WISHLIST_STORAGE_KEY};

#[test]
fn cart_survives_session_reopen() {
    let ctx = TestContext::new();

    let first_id;
    {
        let mut session = ctx.open_session();
        let product = session.catalog().products().first().unwrap().clone();
        first_id = product.id.clone();
        session.store_mut().add_to_cart(product, 2);

        let second = session.catalog().products().get(1).unwrap().clone();
        session.store_mut().add_to_cart(second, 1);
    }

    let session = ctx.open_session();
    assert_eq!(session.store().cart().len(), 2);
    assert_eq!(session.store().cart_count(), 3);
    assert!(session.store().is_in_cart(&first_id));
}

#[test]
fn wishlist_survives_session_reopen_and_toggle_back_out() {
    let ctx = TestContext::new();
    let product = {
        let mut session = ctx.open_session();
        let product = session.catalog().products().first().unwrap().clone();
        session.store_mut().toggle_wishlist(product.clone());
        product
    };

    {
        let session = ctx.open_session();
        assert!(session.store().is_in_wishlist(&product.id));
    }

    // toggling again in a later session removes it durably
    {
        let mut session = ctx.open_session();
        session.store_mut().toggle_wishlist(product.clone());
    }
    let session = ctx.open_session();
    assert!(!session.store().is_in_wishlist(&product.id));
    assert_eq!(session.store().wishlist_count(), 0);
}

#[test]
fn cart_and_wishlist_are_stored_under_separate_keys() {
    let ctx = TestContext::new();
    let storage_dir = {
        let mut session = ctx.open_session();
        let product = session.catalog().products().first().unwrap().clone();
        session.store_mut().add_to_cart(product.clone(), 1);
        session.store_mut().toggle_wishlist(product);
        session.context().config().storage_dir.clone()
    };

    let cart_file = storage_dir.join(format!("{CART_STORAGE_KEY}.json"));
    let wishlist_file = storage_dir.join(format!("{WISHLIST_STORAGE_KEY}.json"));
    assert!(cart_file.exists());
    assert!(wishlist_file.exists());

    // plain JSON arrays, no schema envelope
    let cart_json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&cart_file).unwrap()).unwrap();
    assert!(cart_json.is_array());
    let line = cart_json.get(0).unwrap();
    assert!(line.get("product").is_some());
    assert!(line.get("quantity").is_some());

    let wishlist_json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&wishlist_file).unwrap()).unwrap();
    assert!(wishlist_json.is_array());
    assert!(wishlist_json.get(0).unwrap().get("id").is_some());
}

#[test]
fn corrupted_storage_falls_back_to_empty_without_error() {
    let ctx = TestContext::new();
    let storage_dir = {
        let mut session = ctx.open_session();
        let product = session.catalog().products().first().unwrap().clone();
        session.store_mut().add_to_cart(product, 1);
        session.context().config().storage_dir.clone()
    };

    fs::write(storage_dir.join(format!("{CART_STORAGE_KEY}.json")), "{{{ not json").unwrap();

    let session = ctx.open_session();
    assert!(session.store().cart().is_empty());
    assert_eq!(session.store().cart_total(), rust_decimal::Decimal::ZERO);
}

#[test]
fn mutations_after_corruption_rewrite_the_file() {
    let ctx = TestContext::new();
    let storage_dir = ctx.context().config().storage_dir.clone();

    fs::create_dir_all(&storage_dir).unwrap();
    fs::write(storage_dir.join(format!("{CART_STORAGE_KEY}.json")), "junk").unwrap();

    {
        let mut session = ctx.open_session();
        let product = session.catalog().product(&ProductId::new("p01")).unwrap().clone();
        session.store_mut().add_to_cart(product, 4);
    }

    let session = ctx.open_session();
    assert_eq!(session.store().cart_count(), 4);
}
