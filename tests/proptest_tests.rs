//! Property-based tests for the check-digit and precision validators.

use notafiscal::core::ident::{cnpj_check_digits, cpf_check_digits, is_valid_cnpj, is_valid_cpf};
use notafiscal::core::has_precision;
use proptest::prelude::*;
use rust_decimal::Decimal;

fn cnpj_from_body(body: &[u32; 12]) -> String {
    let (dv1, dv2) = cnpj_check_digits(body);
    body.iter()
        .chain([&dv1, &dv2])
        .map(|d| char::from(b'0' + *d as u8))
        .collect()
}

fn cpf_from_body(body: &[u32; 9]) -> String {
    let (dv1, dv2) = cpf_check_digits(body);
    body.iter()
        .chain([&dv1, &dv2])
        .map(|d| char::from(b'0' + *d as u8))
        .collect()
}

proptest! {
    /// Any identifier built by computing both check digits from an arbitrary
    /// body is accepted.
    #[test]
    fn constructed_cnpj_is_valid(body in prop::array::uniform12(0u32..10)) {
        prop_assert!(is_valid_cnpj(&cnpj_from_body(&body)));
    }

    /// Flipping either check digit invalidates the identifier.
    #[test]
    fn flipped_cnpj_digit_is_rejected(
        body in prop::array::uniform12(0u32..10),
        delta in 1u8..10,
        second in proptest::bool::ANY,
    ) {
        let mut cnpj = cnpj_from_body(&body).into_bytes();
        let pos = if second { 13 } else { 12 };
        cnpj[pos] = b'0' + (cnpj[pos] - b'0' + delta) % 10;
        let cnpj = String::from_utf8(cnpj).unwrap();
        prop_assert!(!is_valid_cnpj(&cnpj));
    }

    #[test]
    fn constructed_cpf_is_valid(body in prop::array::uniform9(0u32..10)) {
        let cpf = cpf_from_body(&body);
        // Degenerate repeated-digit bodies produce the known non-assignable
        // values, rejected by design even with matching digits.
        if body.iter().all(|d| *d == body[0]) && cpf.bytes().all(|b| b == cpf.as_bytes()[0]) {
            prop_assert!(!is_valid_cpf(&cpf));
        } else {
            prop_assert!(is_valid_cpf(&cpf));
        }
    }

    #[test]
    fn flipped_cpf_digit_is_rejected(
        body in prop::array::uniform9(0u32..10),
        delta in 1u8..10,
        second in proptest::bool::ANY,
    ) {
        let mut cpf = cpf_from_body(&body).into_bytes();
        let pos = if second { 10 } else { 9 };
        cpf[pos] = b'0' + (cpf[pos] - b'0' + delta) % 10;
        let cpf = String::from_utf8(cpf).unwrap();
        prop_assert!(!is_valid_cpf(&cpf));
    }

    /// A value with exactly `p` fractional digits passes the `p` budget and
    /// fails the `p - 1` budget.
    #[test]
    fn precision_boundary(mantissa in 1i64..1_000_000_000, p in 0u32..=10) {
        // Keep the last digit non-zero so the fractional part really has
        // `p` significant digits.
        let mantissa = if mantissa % 10 == 0 { mantissa + 1 } else { mantissa };
        let value = Decimal::new(mantissa, p);
        prop_assert!(has_precision(value, p));
        prop_assert!(has_precision(value, p + 1));
        if p > 0 {
            prop_assert!(!has_precision(value, p - 1));
        }
    }

    /// Scaling by one more digit always breaches the original budget.
    #[test]
    fn extra_fractional_digit_is_rejected(mantissa in 1i64..100_000_000, p in 0u32..10) {
        let mantissa = mantissa * 10 + 3;
        let value = Decimal::new(mantissa, p + 1);
        prop_assert!(!has_precision(value, p));
        prop_assert!(has_precision(value, p + 1));
    }
}
