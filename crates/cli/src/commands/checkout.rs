//! Checkout simulation command.
//!
//! Walks the three-step wizard for the current cart: fills the address via
//! the CEP lookup, picks the payment method and shipping, applies an
//! optional coupon, then confirms. Confirmation runs the simulated
//! processing delay and clears the cart exactly like the storefront UI.

use clap::Args;
use tracing::info;

use techpulse_storefront::Session;
use techpulse_storefront::checkout::{CheckoutEntry, PaymentMethod};
use techpulse_storefront::pricing::{ShippingMethod, format_brl};

/// Arguments for the checkout command.
#[derive(Args)]
pub struct CheckoutArgs {
    /// Delivery CEP (8 digits, e.g. 01310-100)
    #[arg(long)]
    pub cep: String,

    /// Street number
    #[arg(long, default_value = "1500")]
    pub number: String,

    /// Payment method: credit, debit, pix, boleto
    #[arg(long, default_value = "credit")]
    pub method: String,

    /// Shipping: express, standard, economy
    #[arg(long, default_value = "standard")]
    pub shipping: String,

    /// Coupon code to apply
    #[arg(long)]
    pub coupon: Option<String>,

    /// Accept the terms of use (required to confirm)
    #[arg(long)]
    pub agree: bool,
}

/// Run the checkout wizard end to end.
pub async fn run(
    session: &mut Session,
    args: CheckoutArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut flow = match session.begin_checkout() {
        CheckoutEntry::Proceed(flow) => *flow,
        CheckoutEntry::RedirectToCart => {
            info!("Cart is empty - add something before checking out");
            return Ok(());
        }
    };

    // Step 1: address
    flow.address.cep = args.cep.clone();
    flow.address.number = args.number.clone();
    flow.lookup_address()?;
    info!(
        "Delivering to {} {}, {} - {}/{}",
        flow.address.street,
        flow.address.number,
        flow.address.district,
        flow.address.city,
        flow.address.state
    );
    flow.advance();

    // Step 2: payment and shipping
    flow.payment.method = PaymentMethod::parse(&args.method);
    flow.set_shipping(ShippingMethod::parse(&args.shipping));
    info!(
        "Paying with {} - {} shipping ({})",
        flow.payment.method.label(),
        flow.shipping().label(),
        flow.shipping().delivery_estimate()
    );
    flow.advance();

    // Step 3: review
    if let Some(code) = &args.coupon {
        match flow.apply_coupon(code) {
            Ok(Some(coupon)) => info!("Coupon {} applied (-{}%)", coupon.code, coupon.percent_off),
            Ok(None) => {}
            Err(e) => info!("{e}"),
        }
    }

    let summary = flow.summary(session.store());
    info!("Subtotal: {}", format_brl(summary.subtotal));
    info!("Shipping: {}", format_brl(summary.shipping));
    if !summary.discount.is_zero() {
        info!("Discount: -{}", format_brl(summary.discount));
    }
    info!("Total:    {}", format_brl(summary.total));

    flow.set_agreement(args.agree);
    let confirmation = flow.place_order(session.store_mut()).await?;

    info!(
        "Order {} confirmed at {} - total {}",
        confirmation.order_number,
        confirmation.placed_at.format("%Y-%m-%d %H:%M:%S UTC"),
        format_brl(confirmation.summary.total)
    );
    Ok(())
}
