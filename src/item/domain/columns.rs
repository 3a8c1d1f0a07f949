//! Status labels and the ordered set of columns a board renders.

use super::ItemDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Maximum status label length in characters.
const MAX_STATUS_LENGTH: usize = 50;

/// Column labels used when none are configured.
const STANDARD_COLUMNS: [&str; 3] = ["todo", "in-progress", "done"];

/// A trimmed, non-empty status label of at most 50 characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StatusLabel(String);

impl StatusLabel {
    /// Validates and wraps a status label.
    ///
    /// # Errors
    ///
    /// Returns [`ItemDomainError::StatusRequired`] for blank input or
    /// [`ItemDomainError::StatusTooLong`] past 50 characters.
    pub fn new(value: impl AsRef<str>) -> Result<Self, ItemDomainError> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ItemDomainError::StatusRequired);
        }
        if trimmed.chars().count() > MAX_STATUS_LENGTH {
            return Err(ItemDomainError::StatusTooLong {
                max: MAX_STATUS_LENGTH,
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the label as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for StatusLabel {
    type Error = ItemDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<StatusLabel> for String {
    fn from(value: StatusLabel) -> Self {
        value.0
    }
}

impl AsRef<str> for StatusLabel {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for StatusLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Errors returned while building a [`ColumnSet`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ColumnSetError {
    /// No columns were given.
    #[error("at least one column is required")]
    Empty,
    /// A label appears more than once.
    #[error("duplicate column '{0}'")]
    Duplicate(String),
    /// A label is invalid.
    #[error(transparent)]
    Label(#[from] ItemDomainError),
}

/// Ordered, non-empty, duplicate-free column labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSet {
    first: StatusLabel,
    rest: Vec<StatusLabel>,
}

impl ColumnSet {
    /// Builds a column set preserving the given order.
    ///
    /// # Errors
    ///
    /// Returns [`ColumnSetError::Empty`] for no labels and
    /// [`ColumnSetError::Duplicate`] when a label repeats.
    pub fn new(labels: impl IntoIterator<Item = StatusLabel>) -> Result<Self, ColumnSetError> {
        let mut iter = labels.into_iter();
        let first = iter.next().ok_or(ColumnSetError::Empty)?;
        let mut rest: Vec<StatusLabel> = Vec::new();
        for label in iter {
            if label == first || rest.contains(&label) {
                return Err(ColumnSetError::Duplicate(label.0));
            }
            rest.push(label);
        }
        Ok(Self { first, rest })
    }

    /// Parses a comma-separated list such as `todo,in-progress,done`.
    ///
    /// Empty entries are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ColumnSetError`] when a label is invalid, repeated, or the
    /// list is empty.
    pub fn parse(list: &str) -> Result<Self, ColumnSetError> {
        let labels = list
            .split(',')
            .filter(|entry| !entry.trim().is_empty())
            .map(StatusLabel::new)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(labels)
    }

    /// Returns the standard `todo`, `in-progress`, `done` columns.
    #[must_use]
    pub fn standard() -> Self {
        let mut labels = STANDARD_COLUMNS
            .iter()
            .map(|label| StatusLabel((*label).to_owned()));
        let first = labels
            .next()
            .unwrap_or_else(|| StatusLabel("todo".to_owned()));
        Self {
            first,
            rest: labels.collect(),
        }
    }

    /// Returns the first column, used as the default item status.
    #[must_use]
    pub const fn first(&self) -> &StatusLabel {
        &self.first
    }

    /// Returns `true` when `label` is one of the columns.
    #[must_use]
    pub fn contains(&self, label: &StatusLabel) -> bool {
        self.iter().any(|column| column == label)
    }

    /// Iterates the columns in display order.
    pub fn iter(&self) -> impl Iterator<Item = &StatusLabel> {
        std::iter::once(&self.first).chain(self.rest.iter())
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rest.len() + 1
    }

    /// Always `false`; a column set holds at least one column.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }
}

impl Default for ColumnSet {
    fn default() -> Self {
        Self::standard()
    }
}
