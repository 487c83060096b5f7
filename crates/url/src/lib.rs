// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod codec;
mod links;
mod query;

pub use codec::{DAYS_SELECTED_PARAM, Separator, decode_days, encode_days};
pub use links::{
    AUTHORIZED_DOMAIN, DEFAULT_WEEKLY_FREQUENCY, LinkError, PROPERTY_BASE_URL, SEARCH_BASE_URL,
    WEEKLY_FREQUENCY_PARAM, build_property_url, build_search_url, ensure_authorized,
};
pub use query::set_days_param;
