// src/models.rs
use serde::{Serialize, Deserialize};

// Options controlling password generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordOptions {
    pub length: usize,
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_numbers: bool,
    pub include_symbols: bool,
}

impl Default for PasswordOptions {
    fn default() -> Self {
        Self {
            length: 12,
            include_uppercase: true,
            include_lowercase: true,
            include_numbers: true,
            include_symbols: false,
        }
    }
}

// Display-only strength rating of a generated password
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strength {
    Weak,
    Medium,
    Strong,
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strength::Weak => write!(f, "weak"),
            Strength::Medium => write!(f, "medium"),
            Strength::Strong => write!(f, "strong"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = PasswordOptions::default();
        assert_eq!(options.length, 12);
        assert!(options.include_uppercase);
        assert!(options.include_lowercase);
        assert!(options.include_numbers);
        assert!(!options.include_symbols);
    }

    #[test]
    fn test_strength_display() {
        assert_eq!(Strength::Weak.to_string(), "weak");
        assert_eq!(Strength::Medium.to_string(), "medium");
        assert_eq!(Strength::Strong.to_string(), "strong");
    }
}
