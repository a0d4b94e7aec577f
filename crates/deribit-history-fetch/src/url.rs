//! Deribit history API URL construction.

use deribit_history_types::Endpoint;

/// Base URL for the public Deribit historical-data API.
pub const BASE_URL: &str = "https://history.deribit.com/api/v2/public";

/// Builds the full URL for an endpoint.
///
/// # Example
///
/// ```
/// use deribit_history_fetch::url::{BASE_URL, endpoint_url};
/// use deribit_history_types::Endpoint;
///
/// let url = endpoint_url(BASE_URL, Endpoint::GetInstrument);
/// assert_eq!(url, "https://history.deribit.com/api/v2/public/get_instrument");
/// ```
#[must_use]
pub fn endpoint_url(base_url: &str, endpoint: Endpoint) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), endpoint.path())
}
