//! Input validation, pure and network-free. Every rejection here happens
//! before any request is built.

use crate::errors::BackofficeError;
use rust_decimal::Decimal;
use std::str::FromStr;

/// **Parse the amount argument into a decimal**
///
/// Accepts plain decimal notation (`150`, `9.99`, `-3`) as well as
/// exponent notation (`1e5`); rejects anything that is not a finite
/// decimal number, including `NaN` and infinities.
pub fn parse_amount(input: &str) -> Result<Decimal, BackofficeError> {
    Decimal::from_str(input.trim()).map_err(|_| BackofficeError::invalid_amount(input))
}

/// **Require a bearer token for a mutating call**
///
/// The token is opaque; only presence is checked here. Whether it decodes
/// is the identity resolver's concern.
pub fn require_token(token: &str) -> Result<(), BackofficeError> {
    if token.trim().is_empty() {
        Err(BackofficeError::MissingCredential)
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::integer("10", "10")]
    #[case::fractional("9.99", "9.99")]
    #[case::negative("-3", "-3")]
    #[case::zero("0", "0")]
    #[case::padded(" 150 ", "150")]
    #[case::exponent("1e5", "100000")]
    fn test_parse_amount_accepts_decimals(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(parse_amount(input).unwrap().to_string(), expected);
    }

    #[rstest]
    #[case::words("ten")]
    #[case::empty("")]
    #[case::nan("NaN")]
    #[case::infinity("inf")]
    #[case::trailing_junk("10uy")]
    fn test_parse_amount_rejects_non_numbers(#[case] input: &str) {
        assert_eq!(
            parse_amount(input).unwrap_err(),
            BackofficeError::invalid_amount(input)
        );
    }

    #[rstest]
    #[case::empty("")]
    #[case::blank("   ")]
    fn test_require_token_rejects_absent_credentials(#[case] token: &str) {
        assert_eq!(
            require_token(token).unwrap_err(),
            BackofficeError::MissingCredential
        );
    }

    #[test]
    fn test_require_token_accepts_opaque_strings() {
        assert!(require_token("tok").is_ok());
        assert!(require_token("eyJhbGciOi.eyJzdWIi.sig").is_ok());
    }
}
