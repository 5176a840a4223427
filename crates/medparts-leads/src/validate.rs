//! Field-level validation, run on every input event independently of
//! submission.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::ValidationError;

static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-ZáéíóúÁÉÍÓÚñÑüÜ\s]+$").expect("valid name regex"));

// Practical RFC-shaped local@domain pattern, matching what the browser form
// accepted.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("valid email regex")
});

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9]+$").expect("valid phone regex"));

const MIN_NAME_CHARS: usize = 2;
const MIN_MESSAGE_CHARS: usize = 5;
const MIN_PHONE_DIGITS: usize = 10;

/// Letters and spaces only (accented characters included), minimum 2 characters.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidName`] on failure.
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    let name = name.trim();
    if name.chars().count() < MIN_NAME_CHARS || !NAME_RE.is_match(name) {
        return Err(ValidationError::InvalidName);
    }
    Ok(())
}

/// Standard local@domain shape.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidEmail`] on failure.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if !EMAIL_RE.is_match(email.trim()) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

/// Numeric after stripping separators (spaces, dashes, parentheses), at
/// least 10 digits, with an optional `+` country-code prefix.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidPhone`] on failure.
pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    let cleaned: String = phone
        .trim()
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '(' | ')'))
        .collect();
    let digits = cleaned.chars().filter(char::is_ascii_digit).count();
    if !PHONE_RE.is_match(&cleaned) || digits < MIN_PHONE_DIGITS {
        return Err(ValidationError::InvalidPhone);
    }
    Ok(())
}

/// Free-text message, minimum 5 characters after trimming.
///
/// # Errors
///
/// Returns [`ValidationError::MessageTooShort`] on failure.
pub fn validate_message(message: &str) -> Result<(), ValidationError> {
    if message.trim().chars().count() < MIN_MESSAGE_CHARS {
        return Err(ValidationError::MessageTooShort);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_accepts_accented_letters_and_spaces() {
        assert!(validate_name("José Ángel Muñoz").is_ok());
        assert!(validate_name("María").is_ok());
    }

    #[test]
    fn name_rejects_digits_and_symbols() {
        assert_eq!(validate_name("Juan2"), Err(ValidationError::InvalidName));
        assert_eq!(validate_name("Ana-Luisa"), Err(ValidationError::InvalidName));
    }

    #[test]
    fn name_requires_two_characters() {
        assert_eq!(validate_name("J"), Err(ValidationError::InvalidName));
        assert_eq!(validate_name(" "), Err(ValidationError::InvalidName));
        assert!(validate_name("Jo").is_ok());
    }

    #[test]
    fn email_accepts_standard_shapes() {
        assert!(validate_email("compras@hospital.mx").is_ok());
        assert!(validate_email("dr.garcia+biomedica@clinica.org.mx").is_ok());
    }

    #[test]
    fn email_rejects_malformed_addresses() {
        assert_eq!(validate_email("sin-arroba"), Err(ValidationError::InvalidEmail));
        assert_eq!(validate_email("a@"), Err(ValidationError::InvalidEmail));
        assert_eq!(validate_email("@dominio.mx"), Err(ValidationError::InvalidEmail));
        assert_eq!(
            validate_email("dos espacios@dominio.mx"),
            Err(ValidationError::InvalidEmail)
        );
    }

    #[test]
    fn phone_accepts_formatted_national_numbers() {
        assert!(validate_phone("55 1234 5678").is_ok());
        assert!(validate_phone("(55) 1234-5678").is_ok());
    }

    #[test]
    fn phone_accepts_country_code_prefix() {
        assert!(validate_phone("+52 55 1234 5678").is_ok());
    }

    #[test]
    fn phone_requires_ten_digits() {
        assert_eq!(validate_phone("123456789"), Err(ValidationError::InvalidPhone));
        assert!(validate_phone("1234567890").is_ok());
    }

    #[test]
    fn phone_rejects_letters() {
        assert_eq!(
            validate_phone("55 CALL ME 99"),
            Err(ValidationError::InvalidPhone)
        );
    }

    #[test]
    fn message_requires_five_characters() {
        assert_eq!(validate_message("hola"), Err(ValidationError::MessageTooShort));
        assert_eq!(validate_message("    "), Err(ValidationError::MessageTooShort));
        assert!(validate_message("Necesito una refacción").is_ok());
    }
}
