//! URL-safe board slugs.

use super::BoardDomainError;
use deunicode::deunicode;
use serde::{Deserialize, Serialize};
use std::fmt;

/// URL-safe identifier derived from a board name at creation time.
///
/// Slugs consist of lowercase ASCII letters and digits separated by single
/// hyphens. The name is transliterated to ASCII first, so `Café` becomes
/// `cafe`. Whitespace, hyphens, and underscores become separators; `@`
/// becomes the word `at`; any other character is dropped.
///
/// # Examples
///
///     use taskboard::board::domain::BoardSlug;
///
///     let slug = BoardSlug::from_name("Sprint 12").expect("valid");
///     assert_eq!(slug.as_str(), "sprint-12");
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoardSlug(String);

impl BoardSlug {
    /// Derives a slug from a board name.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::NameWithoutSlug`] when the transliterated
    /// name contains no ASCII letter or digit.
    pub fn from_name(name: &str) -> Result<Self, BoardDomainError> {
        let ascii = deunicode(name);
        let mut slug = String::with_capacity(ascii.len());
        let mut pending_separator = false;

        for ch in ascii.chars() {
            if ch.is_ascii_alphanumeric() {
                push_word(&mut slug, &mut pending_separator, ch.to_ascii_lowercase());
            } else if ch == '@' {
                pending_separator = true;
                push_word(&mut slug, &mut pending_separator, 'a');
                slug.push('t');
                pending_separator = true;
            } else if ch.is_whitespace() || ch == '-' || ch == '_' {
                pending_separator = true;
            }
        }

        if slug.is_empty() {
            return Err(BoardDomainError::NameWithoutSlug(name.to_owned()));
        }
        Ok(Self(slug))
    }

    /// Wraps a slug loaded from persistence without re-deriving it.
    #[must_use]
    pub const fn from_persisted(value: String) -> Self {
        Self(value)
    }

    /// Returns the slug as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn push_word(slug: &mut String, pending_separator: &mut bool, ch: char) {
    if *pending_separator && !slug.is_empty() {
        slug.push('-');
    }
    *pending_separator = false;
    slug.push(ch);
}

impl AsRef<str> for BoardSlug {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for BoardSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
