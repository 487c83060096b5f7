// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Query-string editing for address-bar synchronization.
//!
//! On every selection change the embedding page rewrites the current URL
//! without reloading (a history replacement). This module does the pure
//! string work: given the existing query component, produce the new one with
//! the `days-selected` pair replaced, inserted, or removed. Every other pair
//! passes through untouched, in its original position.

use crate::codec::{DAYS_SELECTED_PARAM, Separator, encode_days};
use weekstay_domain::DaySelection;

/// Rewrites the `days-selected` pair in a query string.
///
/// The value is the canonical comma-space encoding, percent-encoded
/// (`", "` becomes `%2C%20`, the form the booking site emits). An empty
/// selection removes the pair entirely.
///
/// # Arguments
///
/// * `query` - The existing query component, without the leading `?`
/// * `selection` - The selection to write
#[must_use]
pub fn set_days_param(query: &str, selection: &DaySelection) -> String {
    let encoded_value: Option<String> = (!selection.is_empty())
        .then(|| percent_encode(&encode_days(selection, Separator::CommaSpace)));

    let mut pairs: Vec<String> = Vec::new();
    let mut replaced: bool = false;

    for pair in query.split('&').filter(|pair| !pair.is_empty()) {
        let key: &str = pair.split_once('=').map_or(pair, |(key, _)| key);
        if key == DAYS_SELECTED_PARAM {
            // First occurrence is rewritten in place; duplicates are dropped.
            if replaced {
                continue;
            }
            replaced = true;
            if let Some(value) = &encoded_value {
                pairs.push(format!("{DAYS_SELECTED_PARAM}={value}"));
            }
        } else {
            pairs.push(pair.to_owned());
        }
    }

    if let (false, Some(value)) = (replaced, &encoded_value) {
        pairs.push(format!("{DAYS_SELECTED_PARAM}={value}"));
    }

    pairs.join("&")
}

/// Percent-encodes a query value.
///
/// Unreserved characters (ASCII alphanumerics and `-._~`) pass through;
/// everything else becomes `%XX`.
fn percent_encode(value: &str) -> String {
    let mut encoded: String = String::with_capacity(value.len());
    for byte in value.bytes() {
        if byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'.' | b'_' | b'~') {
            encoded.push(char::from(byte));
        } else {
            encoded.push_str(&format!("%{byte:02X}"));
        }
    }
    encoded
}
