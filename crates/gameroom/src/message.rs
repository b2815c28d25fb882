use super::*;
use hg_cards::*;
use hg_core::*;
use serde::Serialize;

/// Result of a ring, as announced to the channel.
/// At most one of `animal` and `fruit` is set, and only on a win.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RoundStatus {
    pub win: bool,
    pub player: Player,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fruit: Option<String>,
}

impl RoundStatus {
    /// Resolves display names for a verdict. Uncatalogued variants are
    /// reported by number.
    pub fn new(verdict: Verdict, player: Player, catalog: &Catalog) -> Self {
        let (animal, fruit) = match verdict {
            Verdict::Animal(v) => (Some(catalog.animal_name(v)), None),
            Verdict::Fruit(v) => (None, Some(catalog.fruit_name(v))),
            Verdict::Miss => (None, None),
        };
        Self {
            win: verdict.is_win(),
            player,
            animal,
            fruit,
        }
    }
}

/// Payload of an outbound notification, one shape per kind.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum Notice {
    /// Table opened; show how to play.
    ShowRule,
    /// A card was turned face up.
    CardRevealed(Card),
    /// The ring was right. A new round starts on continue.
    PlayerWin(RoundStatus),
    /// The ring was wrong.
    FakeRing(RoundStatus),
    /// Table closed.
    Terminated,
    /// Breakdown of the current window.
    Explain(Tally),
}

/// Notification from a table to whoever formats and delivers chat messages.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Message {
    pub channel: ChannelId,
    #[serde(flatten)]
    pub notice: Notice,
}

impl Message {
    pub fn new(channel: impl Into<ChannelId>, notice: Notice) -> Self {
        Self {
            channel: channel.into(),
            notice,
        }
    }
    pub fn kind(&self) -> &'static str {
        match self.notice {
            Notice::ShowRule => "show_rule",
            Notice::CardRevealed(_) => "card_revealed",
            Notice::PlayerWin(_) => "player_win",
            Notice::FakeRing(_) => "fake_ring",
            Notice::Terminated => "terminated",
            Notice::Explain(_) => "explain",
        }
    }
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl std::fmt::Display for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match &self.notice {
            Notice::CardRevealed(card) => write!(f, "#{} {} {}", self.channel, self.kind(), card),
            Notice::PlayerWin(status) | Notice::FakeRing(status) => {
                write!(f, "#{} {} {}", self.channel, self.kind(), status.player)
            }
            _ => write!(f, "#{} {}", self.channel, self.kind()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn status_names_from_catalog() {
        let catalog = Catalog::default().with_animal(7, "panda").with_fruit(3, "grape");
        let player = Player::new("1", "bob");
        let status = RoundStatus::new(Verdict::Animal(7), player.clone(), &catalog);
        assert!(status.win);
        assert_eq!(status.animal.as_deref(), Some("panda"));
        assert_eq!(status.fruit, None);
        let status = RoundStatus::new(Verdict::Fruit(3), player.clone(), &catalog);
        assert_eq!(status.fruit.as_deref(), Some("grape"));
        let status = RoundStatus::new(Verdict::Miss, player, &catalog);
        assert!(!status.win);
        assert_eq!((status.animal, status.fruit), (None, None));
    }
    #[test]
    fn status_falls_back_to_variant() {
        let status = RoundStatus::new(Verdict::Animal(7), Player::default(), &Catalog::default());
        assert_eq!(status.animal.as_deref(), Some("7"));
    }
    #[test]
    fn json_is_tagged() {
        let json = Message::new("lobby", Notice::Terminated).to_json().unwrap();
        assert_eq!(json, r#"{"channel":"lobby","type":"terminated"}"#);
        let json = Message::new("lobby", Notice::CardRevealed(Card::animal("a.png", 2)))
            .to_json()
            .unwrap();
        assert!(json.contains(r#""type":"card_revealed""#));
        assert!(json.contains(r#""payload":{"image":"a.png","type":"animal""#));
    }
}
