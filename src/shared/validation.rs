use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for validating phone numbers
    /// Optional leading plus, then 7-15 digits
    /// - Valid: "+905551112233", "5551112233"
    /// - Invalid: "555-111", "phone", "+90 555"
    pub static ref PHONE_REGEX: Regex = Regex::new(r"^\+?[0-9]{7,15}$").unwrap();

    /// Regex for validating postal codes
    /// 4-10 alphanumeric characters, uppercase letters only
    /// - Valid: "34000", "SW1A1AA"
    /// - Invalid: "12", "34 000", "sw1a"
    pub static ref POSTAL_CODE_REGEX: Regex = Regex::new(r"^[A-Z0-9]{4,10}$").unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_regex_valid() {
        assert!(PHONE_REGEX.is_match("+905551112233"));
        assert!(PHONE_REGEX.is_match("5551112233"));
        assert!(PHONE_REGEX.is_match("1234567"));
    }

    #[test]
    fn test_phone_regex_invalid() {
        assert!(!PHONE_REGEX.is_match("555-111")); // separator
        assert!(!PHONE_REGEX.is_match("123456")); // too short
        assert!(!PHONE_REGEX.is_match("+90 555 111 22 33")); // spaces
        assert!(!PHONE_REGEX.is_match("phone")); // letters
        assert!(!PHONE_REGEX.is_match("")); // empty
    }

    #[test]
    fn test_postal_code_regex_valid() {
        assert!(POSTAL_CODE_REGEX.is_match("34000"));
        assert!(POSTAL_CODE_REGEX.is_match("SW1A1AA"));
        assert!(POSTAL_CODE_REGEX.is_match("10115"));
    }

    #[test]
    fn test_postal_code_regex_invalid() {
        assert!(!POSTAL_CODE_REGEX.is_match("12")); // too short
        assert!(!POSTAL_CODE_REGEX.is_match("34 000")); // space
        assert!(!POSTAL_CODE_REGEX.is_match("sw1a1aa")); // lowercase
        assert!(!POSTAL_CODE_REGEX.is_match("")); // empty
    }
}
