use hg_gameroom::Action;
use hg_gameroom::Event;
use hg_gameroom::Player;

/// What a free-text chat line is asking for.
///
/// Matching is by case-insensitive substring, checked in declaration
/// order, so "start a game" opens a table rather than dealing. Anything
/// unrecognized is a ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Game,
    Start,
    Continue,
    Stop,
    Why,
    Ring,
}

impl Intent {
    const KEYWORDS: [(&'static str, Intent); 6] = [
        ("game", Intent::Game),
        ("start", Intent::Start),
        ("continue", Intent::Continue),
        ("stop", Intent::Stop),
        ("why", Intent::Why),
        ("debug", Intent::Why),
    ];

    /// Binds the intent to whoever said it.
    pub fn action(self, player: Player) -> Action {
        match self {
            Intent::Game => Action::Initiate,
            Intent::Start => Action::Start,
            Intent::Continue => Action::Continue,
            Intent::Stop => Action::Terminate,
            Intent::Why => Action::Explain,
            Intent::Ring => Action::RingTheBell(player),
        }
    }

    /// Parses a console line of the form `<channel> <player> <text>`.
    /// Lines without a channel and a player are skipped.
    pub fn parse(line: &str) -> Option<Event> {
        let mut parts = line.trim().splitn(3, char::is_whitespace);
        let channel = parts.next().filter(|s| !s.is_empty())?;
        let player = parts.next().filter(|s| !s.is_empty())?;
        let text = parts.next().unwrap_or_default();
        let action = Intent::from(text).action(Player::new(player, player));
        Some(Event::new(channel, action))
    }
}

impl From<&str> for Intent {
    fn from(text: &str) -> Self {
        let ref text = text.to_lowercase();
        Self::KEYWORDS
            .iter()
            .find(|(word, _)| text.contains(word))
            .map(|(_, intent)| *intent)
            .unwrap_or(Intent::Ring)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords() {
        assert_eq!(Intent::from("let's play a game"), Intent::Game);
        assert_eq!(Intent::from("START"), Intent::Start);
        assert_eq!(Intent::from("continue please"), Intent::Continue);
        assert_eq!(Intent::from("stop"), Intent::Stop);
        assert_eq!(Intent::from("why?"), Intent::Why);
        assert_eq!(Intent::from("debug"), Intent::Why);
    }
    #[test]
    fn priority() {
        assert_eq!(Intent::from("start the game"), Intent::Game);
        assert_eq!(Intent::from("stop and start"), Intent::Start);
    }
    #[test]
    fn anything_else_rings() {
        assert_eq!(Intent::from("ding!"), Intent::Ring);
        assert_eq!(Intent::from(""), Intent::Ring);
    }
    #[test]
    fn parse_lines() {
        assert_eq!(
            Intent::parse("lobby alice game on"),
            Some(Event::new("lobby", Action::Initiate))
        );
        assert_eq!(
            Intent::parse("  lobby bob   ding "),
            Some(Event::new(
                "lobby",
                Action::RingTheBell(Player::new("bob", "bob"))
            ))
        );
        assert_eq!(
            Intent::parse("lobby bob"),
            Some(Event::new(
                "lobby",
                Action::RingTheBell(Player::new("bob", "bob"))
            ))
        );
        assert_eq!(Intent::parse("lobby"), None);
        assert_eq!(Intent::parse("   "), None);
    }
}
