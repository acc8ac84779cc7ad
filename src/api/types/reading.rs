//! Tarot API response types
//!
//! Field names follow the platform's existing API contract
//! (`reading_date`, `is_premium`) so the frontend keeps working unchanged.

use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::reading::Reading;

/// Card payload as shown inside a reading
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadingCardResponse {
    pub id: u32,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub practice_text: Option<String>,
    pub meaning: String,
    pub image_url: String,
}

/// One issued reading
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadingResponse {
    pub id: String,
    pub user_id: String,
    pub card: ReadingCardResponse,
    pub reading_date: chrono::DateTime<chrono::Utc>,
    pub is_premium: bool,
}

impl ReadingResponse {
    pub fn from_domain(reading: &Reading) -> Self {
        let card = reading.card();

        Self {
            id: reading.id().to_string(),
            user_id: reading.user_id().to_string(),
            card: ReadingCardResponse {
                id: card.card_id().value(),
                title: card.title().to_string(),
                description: card.description().to_string(),
                practice_text: card.practice_text().map(str::to_string),
                meaning: card.meaning().to_string(),
                image_url: card.image_url().to_string(),
            },
            reading_date: reading.issued_at(),
            is_premium: reading.tier().is_premium(),
        }
    }
}

/// Free-tier card summary for the catalog listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardSummary {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub image_url: String,
}

impl CardSummary {
    pub fn from_domain(card: &Card) -> Self {
        Self {
            id: card.id().value(),
            title: card.title().to_string(),
            description: card.description().to_string(),
            image_url: card.image_url().to_string(),
        }
    }
}

/// Catalog listing response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardsResponse {
    pub cards: Vec<CardSummary>,
    pub total: usize,
}

impl CardsResponse {
    pub fn new(cards: Vec<CardSummary>) -> Self {
        let total = cards.len();
        Self { cards, total }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::card::CardId;
    use crate::domain::reading::ReadingCard;
    use crate::domain::user::{Tier, UserId};
    use chrono::Utc;

    #[test]
    fn test_reading_response_from_domain() {
        let card = ReadingCard::new(
            CardId::new(3).unwrap(),
            "EL CAMINO SE ACLARA",
            "desc premium",
            Some("práctica".to_string()),
            "práctica",
            "/tarot3.png",
        );
        let reading = Reading::new(UserId::new("alice").unwrap(), card, Utc::now(), Tier::Premium);

        let response = ReadingResponse::from_domain(&reading);
        assert_eq!(response.user_id, "alice");
        assert_eq!(response.card.id, 3);
        assert!(response.is_premium);

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"reading_date\""));
        assert!(json.contains("\"practice_text\""));
    }

    #[test]
    fn test_free_reading_response_omits_practice_text() {
        let card = ReadingCard::new(
            CardId::new(1).unwrap(),
            "TITULO",
            "desc",
            None,
            "",
            "/tarot1.png",
        );
        let reading = Reading::new(UserId::new("bob").unwrap(), card, Utc::now(), Tier::Free);

        let json = serde_json::to_string(&ReadingResponse::from_domain(&reading)).unwrap();
        assert!(!json.contains("practice_text"));
        assert!(json.contains("\"is_premium\":false"));
    }

    #[test]
    fn test_card_summary_uses_basic_description() {
        let card = Card::new(
            CardId::new(2).unwrap(),
            "NUEVA ESPERANZA",
            "básica",
            "premium",
            "práctica",
            "/tarot2.png",
        );

        let summary = CardSummary::from_domain(&card);
        assert_eq!(summary.description, "básica");

        let json = serde_json::to_string(&summary).unwrap();
        assert!(!json.contains("premium"));
        assert!(!json.contains("práctica"));
    }

    #[test]
    fn test_cards_response_total() {
        let response = CardsResponse::new(vec![]);
        assert_eq!(response.total, 0);
    }
}
