//! Reading entity - one issued card instance
//!
//! A reading snapshots the card content at issuance time. Later catalog
//! edits must not alter what a user was shown, so the payload is a
//! denormalized copy rather than a reference into the catalog.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::card::CardId;
use crate::domain::user::{Tier, UserId};

/// Reading identifier - freshly generated at issuance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReadingId(Uuid);

impl ReadingId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl std::fmt::Display for ReadingId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Tier-projected card content as shown to the user.
///
/// `practice_text` is absent for free-tier readings; `meaning` mirrors the
/// practice text for premium readings and is empty otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingCard {
    card_id: CardId,
    title: String,
    description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    practice_text: Option<String>,
    meaning: String,
    image_url: String,
}

impl ReadingCard {
    pub fn new(
        card_id: CardId,
        title: impl Into<String>,
        description: impl Into<String>,
        practice_text: Option<String>,
        meaning: impl Into<String>,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            card_id,
            title: title.into(),
            description: description.into(),
            practice_text,
            meaning: meaning.into(),
            image_url: image_url.into(),
        }
    }

    pub fn card_id(&self) -> CardId {
        self.card_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn practice_text(&self) -> Option<&str> {
        self.practice_text.as_deref()
    }

    pub fn meaning(&self) -> &str {
        &self.meaning
    }

    pub fn image_url(&self) -> &str {
        &self.image_url
    }
}

/// One issued reading. Created exactly once per eligible request; never
/// mutated, never deleted by this engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reading {
    id: ReadingId,
    user_id: UserId,
    card: ReadingCard,
    issued_at: DateTime<Utc>,
    tier: Tier,
}

impl Reading {
    /// Issue a new reading with a fresh identifier
    pub fn new(user_id: UserId, card: ReadingCard, issued_at: DateTime<Utc>, tier: Tier) -> Self {
        Self {
            id: ReadingId::generate(),
            user_id,
            card,
            issued_at,
            tier,
        }
    }

    /// Rebuild a persisted reading from its stored parts
    pub fn from_parts(
        id: ReadingId,
        user_id: UserId,
        card: ReadingCard,
        issued_at: DateTime<Utc>,
        tier: Tier,
    ) -> Self {
        Self {
            id,
            user_id,
            card,
            issued_at,
            tier,
        }
    }

    pub fn id(&self) -> ReadingId {
        self.id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn card(&self) -> &ReadingCard {
        &self.card
    }

    pub fn issued_at(&self) -> DateTime<Utc> {
        self.issued_at
    }

    pub fn tier(&self) -> Tier {
        self.tier
    }
}
