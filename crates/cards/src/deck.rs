use super::card::Card;
use rand::Rng;

/// A shuffled sequence of cards dealt in order and reshuffled when exhausted.
///
/// Built from the template set as a uniform random permutation. Within one
/// pass every template card is dealt exactly once; after the last card the
/// cursor wraps to the top and the deck is reshuffled, so a deck never runs
/// dry. Repeats across a reshuffle boundary are possible.
///
/// The deck must hold at least one card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
    cursor: usize,
}

impl Deck {
    /// Copies the templates and shuffles them.
    pub fn new(templates: &[Card]) -> Self {
        debug_assert!(!templates.is_empty());
        let mut deck = Self {
            cards: templates.to_vec(),
            cursor: 0,
        };
        deck.shuffle();
        deck
    }
    /// Fisher-Yates with the thread-local generator.
    pub fn shuffle(&mut self) {
        self.shuffle_with(&mut rand::rng());
    }
    /// Fisher-Yates: each position from the second onward swaps with a
    /// uniform position at or before it.
    pub fn shuffle_with<R>(&mut self, rng: &mut R)
    where
        R: Rng + ?Sized,
    {
        for i in 1..self.cards.len() {
            let j = rng.random_range(0..=i);
            self.cards.swap(i, j);
        }
    }
    /// Deals the card under the cursor, wrapping and reshuffling first if
    /// the previous pass is exhausted.
    pub fn draw(&mut self) -> Card {
        if self.cursor >= self.cards.len() {
            log::trace!("[deck] exhausted {} cards, reshuffling", self.cards.len());
            self.cursor = 0;
            self.shuffle();
        }
        let card = self.cards[self.cursor].clone();
        self.cursor += 1;
        card
    }
    /// Index of the next card to deal before wrap normalization.
    pub fn cursor(&self) -> usize {
        self.cursor
    }
    pub fn len(&self) -> usize {
        self.cards.len()
    }
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
    /// Cards in dealing order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl From<Vec<Card>> for Deck {
    /// Takes the cards in the given order without shuffling.
    fn from(cards: Vec<Card>) -> Self {
        Self { cards, cursor: 0 }
    }
}

impl Iterator for Deck {
    type Item = Card;
    fn next(&mut self) -> Option<Self::Item> {
        Some(self.draw())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn templates() -> Vec<Card> {
        vec![
            Card::fruit("1s", [(1, 1)]),
            Card::fruit("2s", [(1, 2)]),
            Card::fruit("3p", [(2, 3)]),
            Card::fruit("1g_1b", [(3, 1), (4, 1)]),
            Card::animal("monkey", 3),
            Card::fruit("2s", [(1, 2)]),
        ]
    }
    fn sorted(mut cards: Vec<Card>) -> Vec<String> {
        let mut keys = cards.drain(..).map(|c| format!("{}{}", c.image, c)).collect::<Vec<_>>();
        keys.sort();
        keys
    }

    #[test]
    fn shuffle_is_permutation() {
        let ref mut rng = SmallRng::seed_from_u64(7);
        let mut deck = Deck::from(templates());
        deck.shuffle_with(rng);
        assert_eq!(sorted(deck.cards().to_vec()), sorted(templates()));
    }
    #[test]
    fn one_pass_deals_every_card_once() {
        let mut deck = Deck::new(&templates());
        let dealt = (0..deck.len()).map(|_| deck.draw()).collect::<Vec<_>>();
        assert_eq!(sorted(dealt), sorted(templates()));
        assert_eq!(deck.cursor(), deck.len());
    }
    #[test]
    fn draws_stay_within_templates() {
        let templates = templates();
        let deck = Deck::new(&templates);
        assert!(deck.take(100).all(|c| templates.contains(&c)));
    }
    #[test]
    fn wraps_after_exhaustion() {
        let mut deck = Deck::new(&templates());
        for _ in 0..deck.len() {
            deck.draw();
        }
        deck.draw();
        assert_eq!(deck.cursor(), 1);
        assert_eq!(deck.len(), templates().len());
    }
    #[test]
    fn unshuffled_deck_deals_in_order() {
        let mut deck = Deck::from(templates());
        assert_eq!(deck.draw(), templates()[0]);
        assert_eq!(deck.draw(), templates()[1]);
    }
    #[test]
    fn single_card_deck_repeats() {
        let mut deck = Deck::new(&[Card::animal("rabbit", 1)]);
        assert!((0..5).map(|_| deck.draw()).all(|c| c.variant == 1));
    }
    #[test]
    fn shuffle_is_not_identity() {
        let cards = (0..32).map(|i| Card::animal(format!("{}", i), i)).collect::<Vec<_>>();
        let ref mut rng = SmallRng::seed_from_u64(42);
        let mut deck = Deck::from(cards.clone());
        deck.shuffle_with(rng);
        assert_ne!(deck.cards(), cards.as_slice());
    }
}
