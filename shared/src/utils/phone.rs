//! Phone number utilities

use once_cell::sync::Lazy;
use regex::Regex;

/// Sri Lankan mobile/landline number in full international form:
/// `94` followed by exactly 9 national digits.
static LK_INTERNATIONAL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^94\d{9}$").unwrap()
});

/// Sri Lankan number in local trunk form: leading `0` plus 9 digits.
static LK_LOCAL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^0\d{9}$").unwrap()
});

/// Strip common formatting characters, keeping only digits and `+`
pub fn strip_formatting(phone: &str) -> String {
    phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect()
}

/// Reduce a phone string to its digits only
pub fn digits_only(phone: &str) -> String {
    phone.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Check whether the digit string is a valid `94XXXXXXXXX` number
pub fn is_lk_international(digits: &str) -> bool {
    LK_INTERNATIONAL_REGEX.is_match(digits)
}

/// Check whether the digit string is a valid `0XXXXXXXXX` local number
pub fn is_lk_local(digits: &str) -> bool {
    LK_LOCAL_REGEX.is_match(digits)
}

/// Mask a phone number for logging (show only last 4 digits)
pub fn mask_phone(phone: &str) -> String {
    if phone.len() <= 4 {
        return "*".repeat(phone.len());
    }
    format!("***{}", &phone[phone.len() - 4..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_formatting() {
        assert_eq!(strip_formatting("077 123 4567"), "0771234567");
        assert_eq!(strip_formatting("+94 77-123-4567"), "+94771234567");
        assert_eq!(strip_formatting("(077) 123.4567"), "0771234567");
    }

    #[test]
    fn test_digits_only() {
        assert_eq!(digits_only("+94771234567"), "94771234567");
        assert_eq!(digits_only("077 123 4567"), "0771234567");
    }

    #[test]
    fn test_is_lk_international() {
        assert!(is_lk_international("94771234567"));
        assert!(!is_lk_international("9477123456"));   // Too short
        assert!(!is_lk_international("947712345678")); // Too long
        assert!(!is_lk_international("0771234567"));   // Local form
    }

    #[test]
    fn test_is_lk_local() {
        assert!(is_lk_local("0771234567"));
        assert!(!is_lk_local("771234567"));   // Missing trunk zero
        assert!(!is_lk_local("07712345678")); // Too long
    }

    #[test]
    fn test_mask_phone() {
        assert_eq!(mask_phone("+94771234567"), "***4567");
        assert_eq!(mask_phone("123"), "***");
        assert_eq!(mask_phone("1234"), "****");
    }
}
