//! Anti-repetition card selection
//!
//! Selects uniformly at random from the catalog minus the card of the
//! immediately preceding reading. Only the last card is excluded; repetition
//! over longer horizons is tolerated.

use std::fmt::Debug;

use crate::domain::card::{Card, CardCatalog, CardId};

/// Source of uniform random indices, injectable so selection can be made
/// deterministic in tests.
pub trait RandomSource: Send + Sync + Debug {
    /// A uniformly distributed index in `0..bound`. `bound` is never zero.
    fn pick(&self, bound: usize) -> usize;
}

/// Select the next card from `catalog`, avoiding `exclude` when possible.
///
/// An exclusion id that does not belong to the catalog is ignored. When the
/// exclusion would empty the candidate set (single-card catalog), selection
/// falls back to the full catalog.
pub fn select_card<'a>(
    catalog: &'a CardCatalog,
    exclude: Option<CardId>,
    rng: &dyn RandomSource,
) -> &'a Card {
    let candidates: Vec<&Card> = match exclude {
        Some(excluded) if catalog.contains(excluded) && catalog.len() > 1 => catalog
            .cards()
            .iter()
            .filter(|c| c.id() != excluded)
            .collect(),
        _ => catalog.cards().iter().collect(),
    };

    candidates[rng.pick(candidates.len())]
}
