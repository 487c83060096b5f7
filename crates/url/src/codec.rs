// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The `days-selected` parameter codec.
//!
//! The booking system consumes 1-based "Bubble" day numbers, so encoding
//! adds 1 to each internal index and decoding subtracts it. Decoding never
//! fails: malformed or out-of-range tokens are dropped silently.
//!
//! ## Invariants
//!
//! - Output is ascending and uses one canonical separator
//! - `decode_days(encode_days(s, sep), d) == s` for every valid selection
//!   and either separator

use weekstay_domain::{DayIndex, DaySelection};

/// The query parameter carrying the selection.
pub const DAYS_SELECTED_PARAM: &str = "days-selected";

/// The separator between Bubble day numbers in the encoded list.
///
/// The booking site historically emitted both forms; comma-space is the
/// canonical output and decoding accepts either.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Separator {
    /// A bare comma, as used inside outbound link query values.
    Comma,
    /// A comma followed by a space, the canonical address-bar form.
    #[default]
    CommaSpace,
}

impl Separator {
    /// Returns the literal separator string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Comma => ",",
            Self::CommaSpace => ", ",
        }
    }
}

/// Encodes a selection as a Bubble day-number list.
///
/// Days are emitted ascending, each mapped to its 1-based number.
///
/// # Arguments
///
/// * `selection` - The selection to encode
/// * `separator` - The separator to join with
#[must_use]
pub fn encode_days(selection: &DaySelection, separator: Separator) -> String {
    let numbers: Vec<String> = selection
        .days()
        .iter()
        .map(|day| day.bubble_number().to_string())
        .collect();
    numbers.join(separator.as_str())
}

/// Decodes a Bubble day-number list into a selection.
///
/// Tokens are split on commas and trimmed, so both separator forms parse.
/// Anything that is not an integer in 1-7 is dropped without complaint.
///
/// A missing or blank input yields the caller-supplied default selection
/// (the default is page policy, not codec policy). A present but
/// fully-invalid input yields the empty selection.
///
/// # Arguments
///
/// * `input` - The raw parameter value, or "" when the parameter is absent
/// * `default` - The selection to fall back to when no value was supplied
#[must_use]
pub fn decode_days(input: &str, default: &DaySelection) -> DaySelection {
    if input.trim().is_empty() {
        return default.clone();
    }

    let days: Vec<DayIndex> = input
        .split(',')
        .filter_map(|token| token.trim().parse::<i16>().ok())
        .filter_map(|number| u8::try_from(number).ok())
        .filter_map(|number| DayIndex::from_bubble(number).ok())
        .collect();
    DaySelection::from_days(&days)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rand::RngExt;

    fn selection(indices: &[u8]) -> DaySelection {
        DaySelection::from_indices(indices).unwrap()
    }

    #[test]
    fn test_encode_weeknight_selection() {
        assert_eq!(
            encode_days(&selection(&[1, 2, 3, 4, 5]), Separator::CommaSpace),
            "2, 3, 4, 5, 6"
        );
    }

    #[test]
    fn test_encode_with_bare_comma() {
        assert_eq!(
            encode_days(&selection(&[1, 2, 3, 4, 5]), Separator::Comma),
            "2,3,4,5,6"
        );
    }

    #[test]
    fn test_encode_empty_selection_is_empty_string() {
        assert_eq!(encode_days(&DaySelection::new(), Separator::CommaSpace), "");
    }

    #[test]
    fn test_decode_comma_space_list() {
        assert_eq!(
            decode_days("2, 3, 4, 5, 6", &DaySelection::new()),
            selection(&[1, 2, 3, 4, 5])
        );
    }

    #[test]
    fn test_decode_bare_comma_list() {
        assert_eq!(
            decode_days("2,3,4,5,6", &DaySelection::new()),
            selection(&[1, 2, 3, 4, 5])
        );
    }

    #[test]
    fn test_decode_blank_input_yields_default() {
        let default: DaySelection = DaySelection::weeknight();
        assert_eq!(decode_days("", &default), default);
        assert_eq!(decode_days("   ", &default), default);
    }

    #[test]
    fn test_decode_drops_out_of_range_tokens() {
        // 9 and -1 are out of range; 3 survives as index 2.
        assert_eq!(
            decode_days("9, -1, 3", &DaySelection::weeknight()),
            selection(&[2])
        );
    }

    #[test]
    fn test_decode_drops_non_numeric_tokens() {
        assert_eq!(
            decode_days("2, x, 4", &DaySelection::new()),
            selection(&[1, 3])
        );
    }

    #[test]
    fn test_decode_fully_invalid_input_yields_empty_selection() {
        // Present-but-garbage is not the same as absent: the default does
        // not apply.
        assert_eq!(
            decode_days("8, 9, 0", &DaySelection::weeknight()),
            DaySelection::new()
        );
    }

    #[test]
    fn test_decode_ignores_input_order() {
        assert_eq!(
            decode_days("6, 2, 4", &DaySelection::new()),
            selection(&[1, 3, 5])
        );
    }

    #[test]
    fn test_round_trip_for_random_subsets() {
        let mut rng = rand::rng();
        for _ in 0..200 {
            let mask: u8 = rng.random_range(0..128);
            let indices: Vec<u8> = (0..7).filter(|index| mask & (1 << index) != 0).collect();
            let original: DaySelection = selection(&indices);

            let encoded: String = encode_days(&original, Separator::CommaSpace);
            let decoded: DaySelection = decode_days(&encoded, &original);
            assert_eq!(decoded, original, "round trip failed for mask {mask:#09b}");
        }
    }

    #[test]
    fn test_round_trip_with_bare_comma_separator() {
        let original: DaySelection = selection(&[5, 6, 0]);
        let encoded: String = encode_days(&original, Separator::Comma);
        assert_eq!(decode_days(&encoded, &DaySelection::new()), original);
    }
}
