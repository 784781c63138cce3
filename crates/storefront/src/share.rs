//! Share-link and coupon-copy helpers.
//!
//! The clipboard device and the toast surface are both external
//! collaborators, modeled as ports. Copy operations are fire-and-forget:
//! a clipboard failure is caught and reported through the notifier as a
//! non-fatal message, never returned to the caller.

use thiserror::Error;
use tracing::warn;
use url::Url;

use crate::catalog::Product;

/// Errors a clipboard backend can report.
#[derive(Debug, Error)]
pub enum ShareError {
    #[error("clipboard write failed: {0}")]
    Clipboard(String),

    #[error("invalid share base URL: {0}")]
    BaseUrl(#[from] url::ParseError),
}

/// Write access to the system clipboard.
pub trait Clipboard {
    /// Put `text` on the clipboard.
    ///
    /// # Errors
    ///
    /// Returns `ShareError::Clipboard` when the device rejects the write.
    fn write_text(&self, text: &str) -> Result<(), ShareError>;
}

/// The toast surface the storefront raises transient messages on.
pub trait Notifier {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

/// Build the public link for a product page.
///
/// # Errors
///
/// Returns `ShareError::BaseUrl` when `base_url` does not parse.
pub fn product_link(base_url: &str, product: &Product) -> Result<Url, ShareError> {
    let mut url = Url::parse(base_url)?;
    url.path_segments_mut()
        .map_err(|()| ShareError::BaseUrl(url::ParseError::SetHostOnCannotBeABaseUrl))?
        .pop_if_empty()
        .extend(["produto", product.id.as_str()]);
    Ok(url)
}

/// Copy a product's share link to the clipboard, fire-and-forget.
pub fn share_product_link(
    clipboard: &dyn Clipboard,
    notifier: &dyn Notifier,
    base_url: &str,
    product: &Product,
) {
    let link = match product_link(base_url, product) {
        Ok(link) => link,
        Err(e) => {
            warn!(error = %e, "could not build share link");
            notifier.error("Could not copy the link");
            return;
        }
    };
    match clipboard.write_text(link.as_str()) {
        Ok(()) => notifier.success("Link copied!"),
        Err(e) => {
            warn!(error = %e, product = %product.id, "share link copy failed");
            notifier.error("Could not copy the link");
        }
    }
}

/// Copy a coupon code to the clipboard, fire-and-forget.
pub fn copy_coupon(clipboard: &dyn Clipboard, notifier: &dyn Notifier, code: &str) {
    match clipboard.write_text(code) {
        Ok(()) => notifier.success("Code copied!"),
        Err(e) => {
            warn!(error = %e, code, "coupon copy failed");
            notifier.error("Could not copy the code");
        }
    }
}
