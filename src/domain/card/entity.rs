//! Card entity - one static catalog entry

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when validating card data
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CardValidationError {
    #[error("card id must be a positive integer")]
    InvalidId,

    #[error("card {0} has an empty title")]
    EmptyTitle(u32),

    #[error("card {0} has an empty description")]
    EmptyDescription(u32),
}

/// Card identifier - positive integer, unique within the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct CardId(u32);

impl CardId {
    /// Create a new CardId after validation
    pub fn new(id: u32) -> Result<Self, CardValidationError> {
        if id == 0 {
            return Err(CardValidationError::InvalidId);
        }
        Ok(Self(id))
    }

    /// Get the inner numeric value
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for CardId {
    type Error = CardValidationError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CardId> for u32 {
    fn from(id: CardId) -> Self {
        id.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One entry of the static tarot catalog.
///
/// Immutable for the lifetime of the process; the free tier sees only
/// `description`, the premium tier gets `premium_description` and
/// `practice_text` on top.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    id: CardId,
    title: String,
    description: String,
    premium_description: String,
    practice_text: String,
    image_url: String,
}

impl Card {
    pub fn new(
        id: CardId,
        title: impl Into<String>,
        description: impl Into<String>,
        premium_description: impl Into<String>,
        practice_text: impl Into<String>,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            premium_description: premium_description.into(),
            practice_text: practice_text.into(),
            image_url: image_url.into(),
        }
    }

    pub fn id(&self) -> CardId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Basic description shown to the free tier
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Extended description shown to the premium tier
    pub fn premium_description(&self) -> &str {
        &self.premium_description
    }

    /// Suggested practice, premium only
    pub fn practice_text(&self) -> &str {
        &self.practice_text
    }

    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    /// Validate the entry's content fields
    pub fn validate(&self) -> Result<(), CardValidationError> {
        if self.title.trim().is_empty() {
            return Err(CardValidationError::EmptyTitle(self.id.value()));
        }

        if self.description.trim().is_empty() {
            return Err(CardValidationError::EmptyDescription(self.id.value()));
        }

        Ok(())
    }
}
