// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Outbound link construction.
//!
//! All outbound navigation targets the booking application; the lock policy
//! rejects any base URL that does not. Navigation itself belongs to the
//! embedding page; this module only builds the strings.

use crate::codec::{DAYS_SELECTED_PARAM, Separator, encode_days};
use thiserror::Error;
use weekstay_domain::DaySelection;

/// The only domain outbound links may target.
pub const AUTHORIZED_DOMAIN: &str = "app.split.lease";

/// The booking application's search page.
pub const SEARCH_BASE_URL: &str = "https://app.split.lease/search-split-lease";

/// The booking application's property-view base path.
pub const PROPERTY_BASE_URL: &str = "https://app.split.lease/view-split-lease";

/// The query parameter naming the rental cadence.
pub const WEEKLY_FREQUENCY_PARAM: &str = "weekly-frequency";

/// The cadence value sent with property links.
pub const DEFAULT_WEEKLY_FREQUENCY: &str = "Every%20week";

/// The cadence value sent with search links.
const SEARCH_WEEKLY_FREQUENCY: &str = "1";

/// Link policy errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LinkError {
    /// The base URL does not target the authorized booking domain.
    #[error("URL '{url}' does not target the authorized domain '{AUTHORIZED_DOMAIN}'")]
    UnauthorizedDomain {
        /// The rejected URL.
        url: String,
    },
}

/// Checks a URL against the authorized-domain lock.
///
/// # Arguments
///
/// * `url` - The URL to check
///
/// # Errors
///
/// Returns `LinkError::UnauthorizedDomain` if the URL does not reference the
/// booking domain.
pub fn ensure_authorized(url: &str) -> Result<(), LinkError> {
    if url.contains(AUTHORIZED_DOMAIN) {
        Ok(())
    } else {
        Err(LinkError::UnauthorizedDomain {
            url: url.to_owned(),
        })
    }
}

/// Builds the search URL for an "Explore rentals" action.
///
/// The day list is joined with bare commas, matching what the search page
/// parses from its address bar.
///
/// # Arguments
///
/// * `selection` - The selection to carry
/// * `base` - The search page base URL (see [`SEARCH_BASE_URL`])
///
/// # Errors
///
/// Returns `LinkError::UnauthorizedDomain` if `base` fails the domain lock.
pub fn build_search_url(selection: &DaySelection, base: &str) -> Result<String, LinkError> {
    ensure_authorized(base)?;
    Ok(format!(
        "{base}?{DAYS_SELECTED_PARAM}={days}&{WEEKLY_FREQUENCY_PARAM}={SEARCH_WEEKLY_FREQUENCY}",
        days = encode_days(selection, Separator::Comma)
    ))
}

/// Builds a property-view URL carrying the selection.
///
/// # Arguments
///
/// * `property_id` - The booking system's property identifier
/// * `selection` - The selection to carry
/// * `weekly_frequency` - The cadence value (see [`DEFAULT_WEEKLY_FREQUENCY`])
#[must_use]
pub fn build_property_url(
    property_id: &str,
    selection: &DaySelection,
    weekly_frequency: &str,
) -> String {
    format!(
        "{PROPERTY_BASE_URL}/{property_id}?{DAYS_SELECTED_PARAM}={days}&{WEEKLY_FREQUENCY_PARAM}={weekly_frequency}",
        days = encode_days(selection, Separator::Comma)
    )
}
