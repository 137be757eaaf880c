//! CNPJ and CPF check-digit validation.
//!
//! Both identifiers embed two trailing verification digits computed with a
//! weighted sum modulo 11. The predicates here take the raw digit string and
//! return whether the embedded digits match the recomputed ones.

/// Validate a 14-digit CNPJ (legal entity identifier).
///
/// The first check digit weighs the 12-digit body with `5 4 3 2 9 8 7 6 5 4
/// 3 2`; the second weighs body + first digit with `6 5 4 3 2 9 8 7 6 5 4 3
/// 2`. A remainder below 2 maps to digit 0, otherwise `11 - remainder`.
pub fn is_valid_cnpj(cnpj: &str) -> bool {
    if cnpj.len() != 14 || !cnpj.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }

    let digits: Vec<u32> = cnpj.bytes().map(|b| u32::from(b - b'0')).collect();

    const PESOS_1: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
    const PESOS_2: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

    let dv1 = check_digit(&digits[..12], &PESOS_1);

    let mut com_dv1 = digits[..12].to_vec();
    com_dv1.push(dv1);
    let dv2 = check_digit(&com_dv1, &PESOS_2);

    digits[12] == dv1 && digits[13] == dv2
}

/// Validate an 11-digit CPF (individual taxpayer identifier).
///
/// Non-digit characters are stripped before checking, so formatted input
/// ("123.456.789-09") is accepted. Strings made of a single repeated digit
/// are rejected outright: they satisfy the checksum but are never assigned.
pub fn is_valid_cpf(cpf: &str) -> bool {
    let digits: Vec<u32> = cpf
        .chars()
        .filter(|c| c.is_ascii_digit())
        .map(|c| c.to_digit(10).unwrap_or(0))
        .collect();

    if digits.len() != 11 || digits.iter().all(|d| *d == digits[0]) {
        return false;
    }

    let soma1: u32 = digits[..9]
        .iter()
        .enumerate()
        .map(|(i, d)| d * (10 - i as u32))
        .sum();
    let dv1 = dv_from_remainder(soma1 % 11);

    let soma2: u32 = digits[..10]
        .iter()
        .enumerate()
        .map(|(i, d)| d * (11 - i as u32))
        .sum();
    let dv2 = dv_from_remainder(soma2 % 11);

    digits[9] == dv1 && digits[10] == dv2
}

fn check_digit(digits: &[u32], pesos: &[u32]) -> u32 {
    let soma: u32 = digits.iter().zip(pesos).map(|(d, p)| d * p).sum();
    dv_from_remainder(soma % 11)
}

fn dv_from_remainder(resto: u32) -> u32 {
    if resto < 2 { 0 } else { 11 - resto }
}

/// Compute the two CNPJ check digits for a 12-digit body.
///
/// Used by callers that need to build identifiers, and by the test suites to
/// generate valid fixtures.
pub fn cnpj_check_digits(body: &[u32; 12]) -> (u32, u32) {
    const PESOS_1: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
    const PESOS_2: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

    let dv1 = check_digit(body, &PESOS_1);
    let mut com_dv1 = body.to_vec();
    com_dv1.push(dv1);
    let dv2 = check_digit(&com_dv1, &PESOS_2);
    (dv1, dv2)
}

/// Compute the two CPF check digits for a 9-digit body.
pub fn cpf_check_digits(body: &[u32; 9]) -> (u32, u32) {
    let soma1: u32 = body
        .iter()
        .enumerate()
        .map(|(i, d)| d * (10 - i as u32))
        .sum();
    let dv1 = dv_from_remainder(soma1 % 11);

    let soma2: u32 = body
        .iter()
        .chain(std::iter::once(&dv1))
        .enumerate()
        .map(|(i, d)| d * (11 - i as u32))
        .sum();
    let dv2 = dv_from_remainder(soma2 % 11);
    (dv1, dv2)
}
