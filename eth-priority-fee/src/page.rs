//! Host page contract: which explorer pages get a panel, where the transaction
//! hash comes from, and what the panel looks like.

use url::Url;

use crate::{error::ServiceError, models::records::PriorityFee};

/// Explorer domain whose transaction pages are augmented (subdomains included)
pub const EXPLORER_DOMAIN: &str = "etherscan.io";

/// Path prefix of a transaction-detail page
pub const TRANSACTION_PATH_PREFIX: &str = "/tx/";

/// Element id of the inserted panel
pub const PANEL_ID: &str = "priorityFeeContainer";

const PANEL_STYLE: &str = "padding: 10px; margin: 10px 0; background-color: #f8f9fa; \
                           border: 1px solid #dee2e6; border-radius: 4px;";

/// Parse a page address
pub fn parse_page(page_url: &str) -> Result<Url, ServiceError> {
    Url::parse(page_url).map_err(|e| ServiceError::InvalidPage(format!("{page_url}: {e}")))
}

/// Whether the address is an explorer transaction page
///
/// Matches `https://etherscan.io/tx/*` and `https://*.etherscan.io/tx/*`.
pub fn is_transaction_page(page: &Url) -> bool {
    let on_explorer = page.host_str().is_some_and(|host| {
        host == EXPLORER_DOMAIN
            || host
                .strip_suffix(EXPLORER_DOMAIN)
                .is_some_and(|sub| sub.ends_with('.') && sub.len() > 1)
    });

    page.scheme() == "https" && on_explorer && page.path().starts_with(TRANSACTION_PATH_PREFIX)
}

/// Transaction hash from the final path segment of the page address
///
/// `None` when the last segment is empty, e.g. for a trailing slash.
pub fn transaction_hash(page: &Url) -> Option<&str> {
    page.path()
        .rsplit('/')
        .next()
        .filter(|segment| !segment.is_empty())
}

/// Render the result panel as an HTML fragment
///
/// The page script inserts it right after the block that contains the
/// page's `h1` heading.
pub fn render_panel(fee: &PriorityFee) -> String {
    format!(
        r#"<div id="{PANEL_ID}" style="{PANEL_STYLE}">
    <div>{fee}</div>
</div>"#
    )
}
