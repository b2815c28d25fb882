use hg_cards::Catalog;
use hg_gameroom::Message;
use hg_gameroom::Notice;
use hg_gameroom::Notifier;
use hg_gameroom::RoundStatus;
use hg_gameroom::Rule;
use hg_gameroom::Tally;
use std::io::Write;
use std::sync::Arc;

/// Notifier that prints every message as a line of English.
pub struct Console<W> {
    rule: Rule,
    catalog: Arc<Catalog>,
    out: W,
}

impl Console<std::io::Stdout> {
    pub fn stdout(rule: Rule, catalog: Arc<Catalog>) -> Self {
        Self::new(rule, catalog, std::io::stdout())
    }
}

impl<W> Console<W> {
    pub fn new(rule: Rule, catalog: Arc<Catalog>, out: W) -> Self {
        Self { rule, catalog, out }
    }
    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn render(&self, message: &Message) -> String {
        let text = match &message.notice {
            Notice::ShowRule => self.rules(),
            Notice::CardRevealed(card) => format!(
                "card {} {}",
                card.image,
                self.catalog.describe(card)
            ),
            Notice::PlayerWin(status) => self.win(status),
            Notice::FakeRing(status) => format!(
                "{} rang the bell, but there is nothing to win. Say continue to resume.",
                status.player
            ),
            Notice::Terminated => "Game over. Say game to open a new table.".to_string(),
            Notice::Explain(tally) => self.explain(tally),
        };
        format!("#{} {}", message.channel, text)
    }

    fn rules(&self) -> String {
        format!(
            "Halli Galli! A card is revealed every {}s. Ring the bell when the last {} cards show exactly {} of one fruit, or any animal. Say start to deal.",
            self.rule.interval.as_secs(),
            self.rule.window,
            self.rule.target,
        )
    }

    fn win(&self, status: &RoundStatus) -> String {
        let with = match (&status.animal, &status.fruit) {
            (Some(animal), _) => format!("the {}", animal),
            (None, Some(fruit)) => format!("{} {}", self.rule.target, fruit),
            (None, None) => "luck".to_string(),
        };
        format!(
            "{} wins the round with {}! Say continue for the next round.",
            status.player, with
        )
    }

    fn explain(&self, tally: &Tally) -> String {
        if tally.cards.is_empty() {
            return "No cards on the table yet.".to_string();
        }
        let cards = tally
            .cards
            .iter()
            .map(|card| self.catalog.describe(card))
            .collect::<Vec<_>>()
            .join(" ");
        let fruits = tally
            .fruits
            .iter()
            .map(|(variant, count)| format!("{} {}", count, self.catalog.fruit_name(*variant)))
            .collect::<Vec<_>>();
        let animals = tally
            .animals
            .iter()
            .map(|variant| self.catalog.animal_name(*variant))
            .collect::<Vec<_>>();
        let mut totals = fruits;
        totals.extend(animals);
        format!("Cards {} total {}", cards, totals.join(", "))
    }
}

#[async_trait::async_trait]
impl<W> Notifier for Console<W>
where
    W: Write + Send,
{
    async fn deliver(&mut self, message: &Message) -> anyhow::Result<()> {
        let line = self.render(message);
        writeln!(self.out, "{}", line)?;
        self.out.flush()?;
        Ok(())
    }
}
