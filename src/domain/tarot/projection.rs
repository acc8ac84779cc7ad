//! Tier-based content projection
//!
//! Turns a catalog card into the payload snapshotted on a reading. Premium
//! readers get the extended description and the practice text (mirrored into
//! the legacy `meaning` field); free readers get the basic description only.
//! The image reference ships at both tiers.

use crate::domain::card::Card;
use crate::domain::reading::ReadingCard;
use crate::domain::user::Tier;

/// Project a card into the tier-appropriate reading payload
pub fn project_card(card: &Card, tier: Tier) -> ReadingCard {
    match tier {
        Tier::Premium => ReadingCard::new(
            card.id(),
            card.title(),
            card.premium_description(),
            Some(card.practice_text().to_string()),
            card.practice_text(),
            card.image_url(),
        ),
        Tier::Free => ReadingCard::new(
            card.id(),
            card.title(),
            card.description(),
            None,
            "",
            card.image_url(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::card::CardId;

    fn sample_card() -> Card {
        Card::new(
            CardId::new(2).unwrap(),
            "NUEVA ESPERANZA RENACE",
            "Los ciclos terminan para dar paso a nuevos comienzos.",
            "El universo está conspirando a tu favor.",
            "✨ Práctica sugerida: escribe tres cosas que quieres manifestar.",
            "/tarot2.png",
        )
    }

    #[test]
    fn test_premium_projection() {
        let card = sample_card();
        let payload = project_card(&card, Tier::Premium);

        assert_eq!(payload.card_id(), card.id());
        assert_eq!(payload.description(), card.premium_description());
        assert_eq!(payload.practice_text(), Some(card.practice_text()));
        // meaning mirrors the practice text
        assert_eq!(payload.meaning(), card.practice_text());
        assert_eq!(payload.image_url(), card.image_url());
    }

    #[test]
    fn test_free_projection() {
        let card = sample_card();
        let payload = project_card(&card, Tier::Free);

        assert_eq!(payload.description(), card.description());
        assert_eq!(payload.practice_text(), None);
        assert_eq!(payload.meaning(), "");
        // image is included regardless of tier
        assert_eq!(payload.image_url(), card.image_url());
    }

    #[test]
    fn test_title_preserved_at_both_tiers() {
        let card = sample_card();
        assert_eq!(project_card(&card, Tier::Free).title(), card.title());
        assert_eq!(project_card(&card, Tier::Premium).title(), card.title());
    }
}
