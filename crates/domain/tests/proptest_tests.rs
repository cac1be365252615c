//! Property-based tests for domain value objects
//!
//! These tests use proptest to verify invariants across many random inputs.

use domain::{PostalCode, Temperature, is_valid_postal_code, normalize_postal_code};
use proptest::prelude::*;

// ============================================================================
// PostalCode Property Tests
// ============================================================================

mod postal_code_tests {
    use super::*;

    proptest! {
        #[test]
        fn eight_digits_are_valid(code in "[0-9]{8}") {
            prop_assert!(is_valid_postal_code(&code));
            let parsed = PostalCode::parse(&code).unwrap();
            prop_assert_eq!(parsed.as_str(), code.as_str());
        }

        #[test]
        fn hyphenated_form_is_valid(prefix in "[0-9]{5}", suffix in "[0-9]{3}") {
            let raw = format!("{prefix}-{suffix}");
            let parsed = PostalCode::parse(&raw).unwrap();
            prop_assert_eq!(parsed.as_str(), format!("{prefix}{suffix}"));
        }

        #[test]
        fn other_digit_counts_are_invalid(code in "[0-9]{0,7}|[0-9]{9,16}") {
            prop_assert!(!is_valid_postal_code(&code));
        }

        #[test]
        fn validity_matches_definition(raw in "[0-9a-z \\-]{0,12}") {
            let stripped = normalize_postal_code(&raw);
            let expected = stripped.len() == 8 && stripped.bytes().all(|b| b.is_ascii_digit());
            prop_assert_eq!(is_valid_postal_code(&raw), expected);
        }

        #[test]
        fn parsed_code_is_always_eight_ascii_digits(raw in "[0-9\\-]{0,12}") {
            if let Ok(code) = PostalCode::parse(&raw) {
                prop_assert_eq!(code.as_str().len(), 8);
                prop_assert!(code.as_str().bytes().all(|b| b.is_ascii_digit()));
            }
        }
    }
}

// ============================================================================
// Temperature Property Tests
// ============================================================================

mod temperature_tests {
    use super::*;

    proptest! {
        #[test]
        fn kelvin_is_celsius_plus_offset(celsius in -100.0f64..100.0f64) {
            let t = Temperature::from_celsius(celsius);
            prop_assert!((t.kelvin() - (celsius + 273.15)).abs() < 1e-9);
        }

        #[test]
        fn fahrenheit_is_linear(celsius in -100.0f64..100.0f64) {
            let t = Temperature::from_celsius(celsius);
            prop_assert!((t.fahrenheit() - (celsius * 1.8 + 32.0)).abs() < 1e-9);
        }

        #[test]
        fn conversion_preserves_order(a in -100.0f64..100.0f64, b in -100.0f64..100.0f64) {
            let (ta, tb) = (Temperature::from_celsius(a), Temperature::from_celsius(b));
            if a < b {
                prop_assert!(ta.fahrenheit() <= tb.fahrenheit());
                prop_assert!(ta.kelvin() <= tb.kelvin());
            }
        }
    }
}
