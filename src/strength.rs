// src/strength.rs
use crate::generator::SYMBOLS;
use crate::models::Strength;

// Classify password strength. Pure function of the password string;
// an empty password always rates as weak.
pub fn classify(password: &str) -> Strength {
    if password.is_empty() {
        return Strength::Weak;
    }

    let has_uppercase = password.chars().any(|c| c.is_ascii_uppercase());
    let has_lowercase = password.chars().any(|c| c.is_ascii_lowercase());
    let has_number = password.chars().any(|c| c.is_ascii_digit());
    let has_symbol = password.chars().any(|c| SYMBOLS.contains(c));

    let score = [has_uppercase, has_lowercase, has_number, has_symbol]
        .iter()
        .filter(|&&present| present)
        .count();

    let length = password.chars().count();

    if length >= 12 && score >= 3 {
        Strength::Strong
    } else if length >= 8 && score >= 2 {
        Strength::Medium
    } else {
        Strength::Weak
    }
}
