//! Primitive field constraints shared by every document block.
//!
//! Validators push their findings into a shared list instead of returning
//! early, so one pass over the document reports everything at once.

use rust_decimal::Decimal;

use super::error::ValidationError;
use super::ident::{is_valid_cnpj, is_valid_cpf};

/// Validate a normalized free-text field: the value must already be trimmed
/// and accent-stripped (see the normalization pass) and its length must fall
/// in `min..=max`.
pub fn check_text(
    value: &str,
    min: usize,
    max: usize,
    field: &str,
    errors: &mut Vec<ValidationError>,
) {
    let len = value.chars().count();
    if len < min || len > max {
        errors.push(ValidationError::format(
            field,
            format!("o texto deve ter entre {min} e {max} caracteres, possui {len}"),
        ));
    }
}

/// Validate membership in a closed code table.
pub fn check_code(
    value: &str,
    allowed: &[&str],
    field: &str,
    errors: &mut Vec<ValidationError>,
) {
    if !allowed.contains(&value) {
        errors.push(ValidationError::domain(
            field,
            format!("valor '{value}' fora da tabela de códigos admitidos"),
        ));
    }
}

/// Validate an exact-length all-digit code.
pub fn check_digits(value: &str, len: usize, field: &str, errors: &mut Vec<ValidationError>) {
    if value.len() != len || !value.bytes().all(|b| b.is_ascii_digit()) {
        errors.push(ValidationError::format(
            field,
            format!("deve conter exatamente {len} dígitos"),
        ));
    }
}

/// Validate an all-digit code whose length falls in `min..=max`.
pub fn check_digits_range(
    value: &str,
    min: usize,
    max: usize,
    field: &str,
    errors: &mut Vec<ValidationError>,
) {
    let ok = (min..=max).contains(&value.len()) && value.bytes().all(|b| b.is_ascii_digit());
    if !ok {
        errors.push(ValidationError::format(
            field,
            format!("deve conter entre {min} e {max} dígitos"),
        ));
    }
}

/// Whether `value` carries at most `places` significant decimal digits.
///
/// `Decimal` keeps trailing zeros, so the value is normalized before reading
/// its scale: `10.500` has precision 1, not 3.
pub fn has_precision(value: Decimal, places: u32) -> bool {
    value.normalize().scale() <= places
}

/// Validate the decimal-place budget of a monetary or percentage field.
pub fn check_precision(
    value: Decimal,
    places: u32,
    field: &str,
    errors: &mut Vec<ValidationError>,
) {
    if !has_precision(value, places) {
        errors.push(ValidationError::precision(
            field,
            format!("O número deve ter no máximo {places} casas decimais"),
        ));
    }
}

/// Validate a CNPJ identifier (length, digits, check digits).
pub fn check_cnpj(value: &str, field: &str, errors: &mut Vec<ValidationError>) {
    if !is_valid_cnpj(value) {
        errors.push(ValidationError::checksum(
            field,
            "CNPJ inválido: dígito verificador não confere",
        ));
    }
}

/// Validate a CPF identifier (length, digits, check digits, degenerate values).
pub fn check_cpf(value: &str, field: &str, errors: &mut Vec<ValidationError>) {
    if !is_valid_cpf(value) {
        errors.push(ValidationError::checksum(
            field,
            "CPF inválido: dígito verificador não confere",
        ));
    }
}

/// Validate a value that must be either a valid CNPJ or a valid CPF,
/// discriminated by length.
pub fn check_cnpj_or_cpf(value: &str, field: &str, errors: &mut Vec<ValidationError>) {
    match value.len() {
        14 => check_cnpj(value, field, errors),
        11 => check_cpf(value, field, errors),
        _ => errors.push(ValidationError::format(
            field,
            "identificador deve ser um CNPJ (14 dígitos) ou CPF (11 dígitos)",
        )),
    }
}

/// Minimal e-mail shape check: one `@`, non-empty local part, dotted domain.
pub fn check_email(value: &str, field: &str, errors: &mut Vec<ValidationError>) {
    let ok = match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !value.contains(char::is_whitespace)
        }
        None => false,
    };
    if !ok {
        errors.push(ValidationError::format(
            field,
            format!("endereço de e-mail inválido: '{value}'"),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn run(f: impl FnOnce(&mut Vec<ValidationError>)) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        f(&mut errors);
        errors
    }

    #[test]
    fn text_length_bounds() {
        assert!(run(|e| check_text("ab", 2, 60, "x", e)).is_empty());
        assert_eq!(run(|e| check_text("a", 2, 60, "x", e)).len(), 1);
        let long = "a".repeat(61);
        assert_eq!(run(|e| check_text(&long, 2, 60, "x", e)).len(), 1);
    }

    #[test]
    fn text_length_counts_chars_not_bytes() {
        // Normalization never removes base characters, so multibyte input
        // can still reach the length check.
        assert!(run(|e| check_text("ãb", 2, 60, "x", e)).is_empty());
    }

    #[test]
    fn code_membership() {
        assert!(run(|e| check_code("1", &["0", "1"], "x", e)).is_empty());
        let errs = run(|e| check_code("7", &["0", "1"], "x", e));
        assert_eq!(errs.len(), 1);
        assert_eq!(errs[0].kind, crate::core::error::ConstraintKind::DomainEnum);
    }

    #[test]
    fn digit_patterns() {
        assert!(run(|e| check_digits("3550308", 7, "cMun", e)).is_empty());
        assert_eq!(run(|e| check_digits("355030", 7, "cMun", e)).len(), 1);
        assert_eq!(run(|e| check_digits("355030a", 7, "cMun", e)).len(), 1);
        assert!(run(|e| check_digits_range("123", 1, 20, "x", e)).is_empty());
        assert_eq!(run(|e| check_digits_range("", 1, 20, "x", e)).len(), 1);
    }

    #[test]
    fn precision_exact_boundary() {
        for p in 0..=10u32 {
            let v = Decimal::new(12345, p);
            assert!(has_precision(v, p), "p={p}");
            if p < 10 {
                let over = Decimal::new(123451, p + 1);
                assert!(!has_precision(over, p), "p={p}");
            }
        }
    }

    #[test]
    fn precision_ignores_trailing_zeros() {
        assert!(has_precision(dec!(10.500), 1));
        assert!(has_precision(dec!(7.00), 0));
        assert!(!has_precision(dec!(7.01), 1));
    }

    #[test]
    fn cnpj_or_cpf_dispatch() {
        assert!(run(|e| check_cnpj_or_cpf("11222333000181", "x", e)).is_empty());
        assert!(run(|e| check_cnpj_or_cpf("52998224725", "x", e)).is_empty());
        assert_eq!(run(|e| check_cnpj_or_cpf("123", "x", e)).len(), 1);
    }

    #[test]
    fn email_shapes() {
        assert!(run(|e| check_email("fiscal@empresa.com.br", "x", e)).is_empty());
        assert_eq!(run(|e| check_email("sem-arroba", "x", e)).len(), 1);
        assert_eq!(run(|e| check_email("a@b", "x", e)).len(), 1);
        assert_eq!(run(|e| check_email("a@.com", "x", e)).len(), 1);
    }
}
