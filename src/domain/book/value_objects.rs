// src/domain/book/value_objects.rs
use crate::domain::book::catalog;
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

const MAX_TEXT_LENGTH: usize = 255;
const MAX_DESCRIPTION_LENGTH: usize = 4000;
const MAX_PRICE: f64 = 100_000.0;

/// A normalized ISBN-10 or ISBN-13. Hyphens and spaces are stripped on input.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Isbn(String);

impl Isbn {
    pub const INVALID_MESSAGE: &'static str = "Please enter a valid ISBN";

    pub fn new(value: impl AsRef<str>) -> DomainResult<Self> {
        let normalized = Self::normalize(value.as_ref());
        let valid = match normalized.len() {
            10 => Self::is_valid_isbn10(&normalized),
            13 => Self::is_valid_isbn13(&normalized),
            _ => false,
        };
        if valid {
            Ok(Self(normalized))
        } else {
            Err(DomainError::Validation(Self::INVALID_MESSAGE.into()))
        }
    }

    /// Strip separators and upper-case a trailing check character.
    pub fn normalize(raw: &str) -> String {
        raw.chars()
            .filter(|c| !c.is_whitespace() && *c != '-')
            .map(|c| c.to_ascii_uppercase())
            .collect()
    }

    fn is_valid_isbn10(digits: &str) -> bool {
        let mut sum = 0u32;
        for (index, ch) in digits.chars().enumerate() {
            let value = match ch {
                'X' if index == 9 => 10,
                c => match c.to_digit(10) {
                    Some(d) => d,
                    None => return false,
                },
            };
            sum += value * (10 - index as u32);
        }
        sum % 11 == 0
    }

    fn is_valid_isbn13(digits: &str) -> bool {
        let mut sum = 0u32;
        for (index, ch) in digits.chars().enumerate() {
            let Some(d) = ch.to_digit(10) else {
                return false;
            };
            sum += if index % 2 == 0 { d } else { d * 3 };
        }
        sum % 10 == 0
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Isbn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Isbn> for String {
    fn from(value: Isbn) -> Self {
        value.0
    }
}

fn bounded_text(value: String, field: &str) -> DomainResult<String> {
    let value = value.trim().to_string();
    if value.is_empty() {
        return Err(DomainError::Validation(format!("{field} cannot be empty")));
    }
    if value.chars().count() > MAX_TEXT_LENGTH {
        return Err(DomainError::Validation(format!(
            "{field} must be at most {MAX_TEXT_LENGTH} characters"
        )));
    }
    Ok(value)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookTitle(String);

impl BookTitle {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        bounded_text(value.into(), "title").map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookAuthor(String);

impl BookAuthor {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        bounded_text(value.into(), "author").map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// A course from the campus catalogue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseId(String);

impl CourseId {
    pub const PLACEHOLDER: &'static str = "default";
    pub const MISSING_MESSAGE: &'static str = "Please select a course";

    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into().trim().to_string();
        if value.is_empty() || value == Self::PLACEHOLDER {
            return Err(DomainError::Validation(Self::MISSING_MESSAGE.into()));
        }
        match catalog::find_course(&value) {
            Some(known) => Ok(Self(known.to_string())),
            None => Err(DomainError::Validation(format!("unknown course '{value}'"))),
        }
    }

    /// Trust a value that was validated before it was stored.
    pub(crate) fn from_stored(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Price(f64);

impl Price {
    pub fn new(value: f64) -> DomainResult<Self> {
        if !value.is_finite() || value < 0.0 {
            return Err(DomainError::Validation(
                "price must be a non-negative number".into(),
            ));
        }
        if value > MAX_PRICE {
            return Err(DomainError::Validation(format!(
                "price must not exceed {MAX_PRICE}"
            )));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

/// Number of copies offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quantity(i32);

impl Quantity {
    pub fn new(value: i32) -> DomainResult<Self> {
        if value < 1 {
            return Err(DomainError::Validation("quantity must be at least 1".into()));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookDescription(String);

impl BookDescription {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into().trim().to_string();
        if value.chars().count() > MAX_DESCRIPTION_LENGTH {
            return Err(DomainError::Validation(format!(
                "description must be at most {MAX_DESCRIPTION_LENGTH} characters"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_isbn13_with_hyphens() {
        let isbn = Isbn::new("978-0-262-03384-8").unwrap();
        assert_eq!(isbn.as_str(), "9780262033848");
    }

    #[test]
    fn accepts_isbn10_with_x_check_digit() {
        let isbn = Isbn::new("0-8044-2957-x").unwrap();
        assert_eq!(isbn.as_str(), "080442957X");
    }

    #[test]
    fn rejects_bad_checksums_and_lengths() {
        for raw in ["9780262033849", "0262033845", "12345", "X804429570", "97802620338a8", ""] {
            let err = Isbn::new(raw).unwrap_err();
            assert!(
                matches!(err, DomainError::Validation(ref msg) if msg == Isbn::INVALID_MESSAGE),
                "{raw:?}"
            );
        }
    }

    #[test]
    fn course_placeholder_asks_for_selection() {
        let err = CourseId::new("default").unwrap_err();
        assert!(matches!(err, DomainError::Validation(ref msg) if msg == CourseId::MISSING_MESSAGE));
        assert!(CourseId::new("   ").is_err());
        assert!(CourseId::new("NOPE 000").is_err());
        assert_eq!(CourseId::new(" CS 1301 ").unwrap().as_str(), "CS 1301");
    }

    #[test]
    fn price_and_quantity_bounds() {
        assert!(Price::new(0.0).is_ok());
        assert!(Price::new(-0.01).is_err());
        assert!(Price::new(f64::NAN).is_err());
        assert!(Price::new(1_000_000.0).is_err());
        assert!(Quantity::new(0).is_err());
        assert_eq!(Quantity::new(2).unwrap().value(), 2);
    }

    #[test]
    fn title_is_trimmed_and_required() {
        assert_eq!(BookTitle::new("  Calculus ").unwrap().as_str(), "Calculus");
        assert!(BookTitle::new("   ").is_err());
        assert!(BookAuthor::new("a".repeat(256)).is_err());
        assert_eq!(BookDescription::new("  ").unwrap().as_str(), "");
    }
}
