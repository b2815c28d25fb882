use super::*;
use hg_cards::*;
use hg_core::*;
use serde::Serialize;
use std::collections::BTreeMap;

/// Outcome of checking a window when the bell rings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// An animal is on the table. Carries the most recently revealed one.
    Animal(Variant),
    /// Some fruit totals exactly the target. Lowest variant on ties.
    Fruit(Variant),
    Miss,
}

impl Verdict {
    /// Judges the last `rule.window` cards of a round's history.
    ///
    /// Any animal wins outright and fruit is never counted. Otherwise a fruit
    /// wins only when its tally equals `rule.target` exactly; overshooting
    /// does not count.
    pub fn evaluate(history: &[Card], rule: &Rule) -> Self {
        let window = window(history, rule.window);
        if let Some(animal) = window.iter().rev().find(|c| c.is_animal()) {
            return Self::Animal(animal.variant);
        }
        Tally::from(window)
            .fruits
            .into_iter()
            .find(|(_, n)| *n == rule.target)
            .map(|(variant, _)| Self::Fruit(variant))
            .unwrap_or(Self::Miss)
    }
    pub fn is_win(&self) -> bool {
        !matches!(self, Self::Miss)
    }
}

/// The most recent `size` cards, oldest first. Shorter histories are
/// returned whole.
pub fn window(history: &[Card], size: usize) -> &[Card] {
    &history[history.len().saturating_sub(size)..]
}

/// Breakdown of a window for players asking why a ring did or didn't win.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Tally {
    pub cards: Vec<Card>,
    pub fruits: BTreeMap<Variant, Count>,
    pub animals: Vec<Variant>,
}

impl From<&[Card]> for Tally {
    fn from(window: &[Card]) -> Self {
        let mut fruits = BTreeMap::new();
        let mut animals = Vec::new();
        for card in window {
            match card.kind {
                Kind::Animal => animals.push(card.variant),
                Kind::Fruit => card
                    .fruits()
                    .iter()
                    .for_each(|e| {
                        let n = fruits.entry(e.variant).or_insert(0);
                        *n = Count::saturating_add(*n, e.count);
                    }),
            }
        }
        Self {
            cards: window.to_vec(),
            fruits,
            animals,
        }
    }
}
