//! Checkout form validation.
//!
//! Pure and synchronous: the same input always yields the same verdict,
//! and nothing is read or written. Fields are checked in a fixed order
//! (email, phone, card number, expiry, CVV) and the first failure wins;
//! later fields are not inspected in the same pass.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::dto::orders::CheckoutRequest;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern"));
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10}$").expect("phone pattern"));
static CARD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{16}$").expect("card pattern"));
static EXPIRY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(0[1-9]|1[0-2])/[0-9]{2}$").expect("expiry pattern"));
static CVV_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{3,4}$").expect("cvv pattern"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid email address")]
    Email,

    #[error("Invalid phone number")]
    Phone,

    #[error("Invalid card number")]
    CardNumber,

    #[error("Invalid expiry date (MM/YY)")]
    ExpiryDate,

    #[error("Invalid CVV")]
    Cvv,
}

/// Strip internal whitespace from a card number before length checks.
pub fn normalize_card_number(raw: &str) -> String {
    raw.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Gate for order creation. Email must have a `local@domain.tld` shape,
/// phone exactly 10 digits, card exactly 16 digits after whitespace is
/// stripped, expiry `MM/YY` with a real month, CVV 3 or 4 digits.
pub fn validate_checkout(form: &CheckoutRequest) -> Result<(), ValidationError> {
    if !EMAIL_RE.is_match(&form.email) {
        return Err(ValidationError::Email);
    }
    if !PHONE_RE.is_match(&form.phone) {
        return Err(ValidationError::Phone);
    }
    if !CARD_RE.is_match(&normalize_card_number(&form.card_number)) {
        return Err(ValidationError::CardNumber);
    }
    if !EXPIRY_RE.is_match(&form.expiry_date) {
        return Err(ValidationError::ExpiryDate);
    }
    if !CVV_RE.is_match(&form.cvv) {
        return Err(ValidationError::Cvv);
    }
    Ok(())
}
