//! End-to-end checkout scenarios: cart -> wizard -> confirmed order.

#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;
use techpulse_integration_tests::TestContext;
use techpulse_storefront::checkout::{CheckoutEntry, CheckoutStage, PaymentMethod, Step};
use techpulse_storefront::pricing::ShippingMethod;
use techpulse_storefront::{CheckoutFlow, ValidationError};

fn proceed(entry: CheckoutEntry) -> CheckoutFlow {
    match entry {
        CheckoutEntry::Proceed(flow) => *flow,
        CheckoutEntry::RedirectToCart => panic!("expected checkout to proceed"),
    }
}

#[tokio::test]
async fn full_checkout_clears_cart_and_persists_the_empty_cart() {
    let ctx = TestContext::new();
    let mut session = ctx.open_session();

    let product = session.catalog().products().first().unwrap().clone();
    let price = product.price;
    session.store_mut().add_to_cart(product, 2);

    let mut flow = proceed(session.begin_checkout());

    // Step 1: address via CEP lookup
    assert_eq!(flow.step(), Some(Step::Address));
    flow.address.cep = "01310-100".to_string();
    flow.address.number = "1500".to_string();
    flow.lookup_address().unwrap();
    flow.advance();

    // Step 2: payment
    assert_eq!(flow.step(), Some(Step::Payment));
    flow.payment.method = PaymentMethod::Pix;
    flow.set_shipping(ShippingMethod::Economy);
    flow.advance();

    // Step 3: review and confirm
    assert_eq!(flow.step(), Some(Step::Review));
    flow.set_agreement(true);
    let confirmation = flow.place_order(session.store_mut()).await.unwrap();

    assert_eq!(flow.stage(), CheckoutStage::Confirmed);
    assert!(confirmation.order_number.as_str().starts_with("TP-"));
    assert_eq!(confirmation.summary.subtotal, price * Decimal::from(2u32));
    assert_eq!(confirmation.summary.shipping, Decimal::ZERO);
    assert!(session.store().cart().is_empty());

    // the cleared cart is what a new session sees
    let reopened = ctx.open_session();
    assert_eq!(reopened.store().cart_count(), 0);
}

#[tokio::test]
async fn confirming_without_agreement_never_clears_the_cart() {
    let ctx = TestContext::new();
    let mut session = ctx.open_session();
    let product = session.catalog().products().first().unwrap().clone();
    session.store_mut().add_to_cart(product, 1);

    let mut flow = proceed(session.begin_checkout());
    flow.advance();
    flow.advance();

    let err = flow.place_order(session.store_mut()).await.unwrap_err();
    assert_eq!(err, ValidationError::TermsNotAccepted);
    assert_eq!(flow.stage(), CheckoutStage::Step(Step::Review));
    assert_eq!(session.store().cart_count(), 1);

    // a second attempt after checking the box succeeds
    flow.set_agreement(true);
    flow.place_order(session.store_mut()).await.unwrap();
    assert!(session.store().cart().is_empty());
}

#[test]
fn entering_checkout_with_empty_cart_redirects() {
    let ctx = TestContext::new();
    let session = ctx.open_session();
    assert!(matches!(session.begin_checkout(), CheckoutEntry::RedirectToCart));
}

#[tokio::test]
async fn coupon_and_shipping_feed_the_order_totals() {
    let ctx = TestContext::new();
    let mut session = ctx.open_session();
    let product = session.catalog().products().first().unwrap().clone();
    session.store_mut().add_to_cart(product, 1);
    let subtotal = session.store().cart_total();

    let mut flow = proceed(session.begin_checkout());
    flow.advance();
    flow.set_shipping(ShippingMethod::Express);
    flow.advance();
    flow.apply_coupon("TECHPULSE10").unwrap();
    flow.set_agreement(true);

    let confirmation = flow.place_order(session.store_mut()).await.unwrap();
    let summary = &confirmation.summary;

    let expected_discount = (subtotal * Decimal::new(10, 2)).round_dp(2);
    assert_eq!(summary.discount, expected_discount);
    assert_eq!(
        summary.total,
        subtotal + ShippingMethod::Express.price() - expected_discount
    );
}

#[tokio::test]
async fn invalid_cep_blocks_lookup_but_not_the_wizard() {
    let ctx = TestContext::new();
    let mut session = ctx.open_session();
    let product = session.catalog().products().first().unwrap().clone();
    session.store_mut().add_to_cart(product, 1);

    let mut flow = proceed(session.begin_checkout());
    flow.address.cep = "0131".to_string();
    assert_eq!(flow.lookup_address().unwrap_err(), ValidationError::InvalidCep);
    assert!(flow.address.street.is_empty());

    // forward transitions stay unconditional
    flow.advance();
    assert_eq!(flow.step(), Some(Step::Payment));
}
