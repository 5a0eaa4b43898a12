// src/domain/book/search.rs
use crate::domain::book::value_objects::Isbn;
use crate::domain::errors::DomainError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use utoipa::ToSchema;

/// The book attribute a search matches against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SearchField {
    #[default]
    #[serde(alias = "BTitle")]
    Title,
    #[serde(alias = "BAuthor")]
    Author,
    #[serde(alias = "BCourse")]
    Course,
    #[serde(alias = "BISBN")]
    Isbn,
}

impl SearchField {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchField::Title => "title",
            SearchField::Author => "author",
            SearchField::Course => "course",
            SearchField::Isbn => "isbn",
        }
    }

    /// Column the field maps to. Never derived from user input.
    pub fn column(&self) -> &'static str {
        match self {
            SearchField::Title => "title",
            SearchField::Author => "author",
            SearchField::Course => "course",
            SearchField::Isbn => "isbn",
        }
    }
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "title" | "BTitle" => Ok(SearchField::Title),
            "author" | "BAuthor" => Ok(SearchField::Author),
            "course" | "BCourse" => Ok(SearchField::Course),
            "isbn" | "BISBN" => Ok(SearchField::Isbn),
            other => Err(DomainError::Validation(format!(
                "cannot search by '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookSearch {
    field: SearchField,
    term: String,
}

impl BookSearch {
    /// Returns `None` when the term is blank, which means "everything".
    pub fn new(field: SearchField, term: &str) -> Option<Self> {
        let term = match field {
            SearchField::Isbn => Isbn::normalize(term),
            _ => term.trim().to_string(),
        };
        if term.is_empty() {
            None
        } else {
            Some(Self { field, term })
        }
    }

    pub fn field(&self) -> SearchField {
        self.field
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    /// `%term%` with LIKE wildcards in the term escaped.
    pub fn like_pattern(&self) -> String {
        let mut pattern = String::with_capacity(self.term.len() + 2);
        pattern.push('%');
        for ch in self.term.chars() {
            if matches!(ch, '%' | '_' | '\\') {
                pattern.push('\\');
            }
            pattern.push(ch);
        }
        pattern.push('%');
        pattern
    }

    /// Case-insensitive substring match, equivalent to the SQL pattern.
    pub fn matches(&self, value: &str) -> bool {
        value.to_lowercase().contains(&self.term.to_lowercase())
    }
}
