//! The checkout wizard: a three-step linear flow ending in a simulated
//! order submission.
//!
//! Steps run Address -> Payment -> Review. Forward transitions are
//! unconditional ("continue"), backward transitions are always permitted
//! and keep field values. The only hard gate sits on the terminal action:
//! confirming the order requires the terms agreement, then a simulated
//! processing delay runs before the cart is cleared and the flow reaches
//! `Confirmed`.
//!
//! Cancellation: `place_order` is a plain future. Dropping it mid-delay
//! (session teardown, navigation away) abandons the submission without
//! clearing the cart - the simulated processor is the only pending work, so
//! drop-based cancellation is the whole teardown story.

mod cep;
mod forms;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use techpulse_core::OrderNumber;

use crate::config::StorefrontConfig;
use crate::error::ValidationError;
use crate::pricing::{Coupon, OrderSummary, ShippingMethod, validate_coupon};
use crate::store::StoreState;

pub use cep::{CepLookup, lookup_cep};
pub use forms::{
    AddressForm, BR_STATES, PaymentForm, PaymentMethod, format_card_number, format_cep,
    format_expiry,
};

/// One stage of the linear purchase-confirmation wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Step {
    Address,
    Payment,
    Review,
}

impl Step {
    /// 1-based position for the progress indicator.
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::Address => 1,
            Self::Payment => 2,
            Self::Review => 3,
        }
    }

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Address => "Address",
            Self::Payment => "Payment",
            Self::Review => "Review",
        }
    }

    const fn next(self) -> Option<Self> {
        match self {
            Self::Address => Some(Self::Payment),
            Self::Payment => Some(Self::Review),
            Self::Review => None,
        }
    }

    const fn prev(self) -> Option<Self> {
        match self {
            Self::Address => None,
            Self::Payment => Some(Self::Address),
            Self::Review => Some(Self::Payment),
        }
    }
}

/// Where the flow currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutStage {
    /// On one of the three wizard steps.
    Step(Step),
    /// Order submission in flight (simulated processing delay).
    Submitting,
    /// Terminal: order placed, cart cleared.
    Confirmed,
}

/// Outcome of trying to enter checkout.
#[derive(Debug)]
pub enum CheckoutEntry {
    /// Cart has items; proceed with a fresh flow on the address step.
    Proceed(Box<CheckoutFlow>),
    /// Cart is empty; the caller should navigate back to the cart view.
    RedirectToCart,
}

/// The order receipt handed back when submission completes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderConfirmation {
    pub order_number: OrderNumber,
    pub placed_at: DateTime<Utc>,
    pub summary: OrderSummary,
}

/// Checkout wizard state.
///
/// Created on entering checkout, dropped when the session navigates away,
/// conceptually destroyed once the order confirms.
#[derive(Debug)]
pub struct CheckoutFlow {
    stage: CheckoutStage,
    pub address: AddressForm,
    pub payment: PaymentForm,
    billing_same_as_shipping: bool,
    agreed_to_terms: bool,
    shipping: ShippingMethod,
    coupon: Option<Coupon>,
    submit_delay: std::time::Duration,
}

impl CheckoutFlow {
    /// Enter checkout. An empty cart redirects straight back to the cart
    /// view instead of producing a flow.
    #[must_use]
    pub fn enter(store: &StoreState, config: &StorefrontConfig) -> CheckoutEntry {
        if store.cart().is_empty() {
            debug!("checkout entered with empty cart, redirecting");
            return CheckoutEntry::RedirectToCart;
        }
        CheckoutEntry::Proceed(Box::new(Self {
            stage: CheckoutStage::Step(Step::Address),
            address: AddressForm::default(),
            payment: PaymentForm::default(),
            billing_same_as_shipping: true,
            agreed_to_terms: false,
            shipping: ShippingMethod::default(),
            coupon: None,
            submit_delay: config.submit_delay,
        }))
    }

    /// Current stage.
    #[must_use]
    pub const fn stage(&self) -> CheckoutStage {
        self.stage
    }

    /// Current wizard step, if the flow is still on one.
    #[must_use]
    pub const fn step(&self) -> Option<Step> {
        match self.stage {
            CheckoutStage::Step(step) => Some(step),
            CheckoutStage::Submitting | CheckoutStage::Confirmed => None,
        }
    }

    /// Whether the caller should bounce back to the cart view: the cart
    /// emptied out from under the flow and no order is in flight.
    #[must_use]
    pub fn needs_cart_redirect(&self, store: &StoreState) -> bool {
        store.cart().is_empty() && matches!(self.stage, CheckoutStage::Step(_))
    }

    /// Advance to the next step. Forward transitions are unconditional; at
    /// the review step (or past it) this is a no-op - confirmation goes
    /// through [`Self::place_order`].
    pub fn advance(&mut self) {
        if let CheckoutStage::Step(step) = self.stage
            && let Some(next) = step.next()
        {
            debug!(from = step.label(), to = next.label(), "checkout step forward");
            self.stage = CheckoutStage::Step(next);
        }
    }

    /// Go back one step, keeping all field values. Always permitted while
    /// on a step; a no-op on the first step or once submission started.
    pub fn back(&mut self) {
        if let CheckoutStage::Step(step) = self.stage
            && let Some(prev) = step.prev()
        {
            debug!(from = step.label(), to = prev.label(), "checkout step back");
            self.stage = CheckoutStage::Step(prev);
        }
    }

    /// Jump directly to an earlier step (the review screen's "edit" links).
    pub fn edit(&mut self, step: Step) {
        if matches!(self.stage, CheckoutStage::Step(_)) {
            self.stage = CheckoutStage::Step(step);
        }
    }

    /// Run the CEP lookup stub against the address form's CEP and fill the
    /// resolved fields.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidCep` for input under 8 digits; the
    /// form is left untouched.
    pub fn lookup_address(&mut self) -> Result<(), ValidationError> {
        let lookup = lookup_cep(&self.address.cep)?;
        self.address.street = lookup.street;
        self.address.district = lookup.district;
        self.address.city = lookup.city;
        self.address.state = lookup.state;
        Ok(())
    }

    /// Billing-address checkbox on the address step.
    pub const fn set_billing_same_as_shipping(&mut self, same: bool) {
        self.billing_same_as_shipping = same;
    }

    #[must_use]
    pub const fn billing_same_as_shipping(&self) -> bool {
        self.billing_same_as_shipping
    }

    /// Terms agreement checkbox on the review step.
    pub const fn set_agreement(&mut self, agreed: bool) {
        self.agreed_to_terms = agreed;
    }

    #[must_use]
    pub const fn agreed_to_terms(&self) -> bool {
        self.agreed_to_terms
    }

    /// Selected shipping method.
    pub const fn set_shipping(&mut self, method: ShippingMethod) {
        self.shipping = method;
    }

    #[must_use]
    pub const fn shipping(&self) -> ShippingMethod {
        self.shipping
    }

    /// Apply a coupon code to this order.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidCoupon` for an unrecognized code;
    /// any previously applied coupon is kept.
    pub fn apply_coupon(&mut self, code: &str) -> Result<Option<&Coupon>, ValidationError> {
        if let Some(coupon) = validate_coupon(code)? {
            self.coupon = Some(coupon);
        }
        Ok(self.coupon.as_ref())
    }

    #[must_use]
    pub fn coupon(&self) -> Option<&Coupon> {
        self.coupon.as_ref()
    }

    /// Totals for the summary sidebar, derived from the live cart.
    #[must_use]
    pub fn summary(&self, store: &StoreState) -> OrderSummary {
        OrderSummary::compute(store.cart_total(), self.shipping, self.coupon.as_ref())
    }

    /// Confirm the order: the terminal action of the wizard.
    ///
    /// Gated on the terms agreement. On acceptance the flow enters
    /// `Submitting`, a simulated processing delay runs, then the cart is
    /// cleared, the flow reaches `Confirmed`, and the receipt is returned.
    /// Dropping the returned future before completion leaves the cart (and
    /// the user's money) untouched.
    ///
    /// # Errors
    ///
    /// `ValidationError::TermsNotAccepted` when the agreement flag is
    /// unset; `ValidationError::EmptyCart` when there is nothing to order.
    /// Neither clears the cart nor advances the flow.
    #[instrument(skip(self, store), fields(delay_ms = %self.submit_delay.as_millis()))]
    pub async fn place_order(
        &mut self,
        store: &mut StoreState,
    ) -> Result<OrderConfirmation, ValidationError> {
        if !self.agreed_to_terms {
            return Err(ValidationError::TermsNotAccepted);
        }
        if store.cart().is_empty() {
            return Err(ValidationError::EmptyCart);
        }

        let summary = self.summary(store);
        self.stage = CheckoutStage::Submitting;
        info!(total = %summary.total, "order submitted, processing");

        // Simulated payment/fulfillment processing.
        tokio::time::sleep(self.submit_delay).await;

        store.clear_cart();
        self.stage = CheckoutStage::Confirmed;

        let confirmation = OrderConfirmation {
            order_number: OrderNumber::generate(),
            placed_at: Utc::now(),
            summary,
        };
        info!(order = %confirmation.order_number, "order confirmed");
        Ok(confirmation)
    }
}
