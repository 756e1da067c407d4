pub const NHS_NUMBER_LEN: usize = 10;

/// Checks the shape of an NHS number: exactly ten ASCII digits.
///
/// The modulus 11 check digit is not verified.
pub fn is_valid_nhs_number(value: &str) -> bool {
    value.len() == NHS_NUMBER_LEN && value.bytes().all(|byte| byte.is_ascii_digit())
}
