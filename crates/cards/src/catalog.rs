use super::card::Card;
use hg_core::Variant;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Errors that can occur while loading the card catalog.
#[derive(Debug)]
pub enum AssetError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    EmptyDeck,
}

impl std::fmt::Display for AssetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "unable to read assets: {}", e),
            Self::Parse(e) => write!(f, "malformed assets: {}", e),
            Self::EmptyDeck => write!(f, "assets define no cards"),
        }
    }
}

impl std::error::Error for AssetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::EmptyDeck => None,
        }
    }
}

impl From<std::io::Error> for AssetError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
impl From<serde_json::Error> for AssetError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e)
    }
}

// on-disk layout of asset.json
#[derive(Deserialize)]
struct Asset {
    meta: Meta,
    cards: Vec<Entry>,
}
#[derive(Deserialize)]
struct Meta {
    #[serde(default)]
    fruits: Vec<Named>,
    #[serde(default)]
    animals: Vec<Named>,
}
#[derive(Deserialize)]
struct Named {
    name: String,
    variant: Variant,
}
#[derive(Deserialize)]
struct Entry {
    #[serde(flatten)]
    card: Card,
    #[serde(default = "once")]
    repeat: usize,
}
fn once() -> usize {
    1
}

/// Read-only card catalog: display names per variant and the template deck.
///
/// Loaded once at startup and shared by reference. Names are only used for
/// logs and explanations; game logic runs on variant ids.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    fruits: BTreeMap<Variant, String>,
    animals: BTreeMap<Variant, String>,
    cards: Vec<Card>,
}

impl Catalog {
    /// Reads and parses an asset file.
    pub fn load<P>(path: P) -> Result<Self, AssetError>
    where
        P: AsRef<Path>,
    {
        let ref json = std::fs::read_to_string(path.as_ref())?;
        let catalog = Self::try_from(json.as_str())?;
        log::info!(
            "[catalog] loaded {} cards, {} fruits, {} animals from {}",
            catalog.cards.len(),
            catalog.fruits.len(),
            catalog.animals.len(),
            path.as_ref().display()
        );
        Ok(catalog)
    }
    /// Fruit display name, if the variant is catalogued.
    pub fn fruit(&self, variant: Variant) -> Option<&str> {
        self.fruits.get(&variant).map(String::as_str)
    }
    /// Animal display name, if the variant is catalogued.
    pub fn animal(&self, variant: Variant) -> Option<&str> {
        self.animals.get(&variant).map(String::as_str)
    }
    /// Template card set with authored repeats expanded.
    pub fn templates(&self) -> &[Card] {
        &self.cards
    }
    /// Card face with catalog names, for logs.
    pub fn describe(&self, card: &Card) -> String {
        match card.is_animal() {
            true => format!("[{}]", self.animal_name(card.variant)),
            false => format!(
                "[{}]",
                card.fruits()
                    .iter()
                    .map(|e| format!("{} x{}", self.fruit_name(e.variant), e.count))
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
        }
    }
    /// Fruit name, falling back to the numeric variant.
    pub fn fruit_name(&self, variant: Variant) -> String {
        self.fruit(variant)
            .map(String::from)
            .unwrap_or_else(|| variant.to_string())
    }
    /// Animal name, falling back to the numeric variant.
    pub fn animal_name(&self, variant: Variant) -> String {
        self.animal(variant)
            .map(String::from)
            .unwrap_or_else(|| variant.to_string())
    }
}

impl Catalog {
    pub fn with_fruit(mut self, variant: Variant, name: &str) -> Self {
        self.fruits.insert(variant, name.to_string());
        self
    }
    pub fn with_animal(mut self, variant: Variant, name: &str) -> Self {
        self.animals.insert(variant, name.to_string());
        self
    }
    pub fn with_card(mut self, card: Card) -> Self {
        self.cards.push(card);
        self
    }
}

impl TryFrom<&str> for Catalog {
    type Error = AssetError;
    fn try_from(json: &str) -> Result<Self, Self::Error> {
        let asset = serde_json::from_str::<Asset>(json)?;
        let cards = asset
            .cards
            .into_iter()
            .flat_map(|e| std::iter::repeat_n(e.card, e.repeat))
            .collect::<Vec<_>>();
        if cards.is_empty() {
            return Err(AssetError::EmptyDeck);
        }
        Ok(Self {
            fruits: asset
                .meta
                .fruits
                .into_iter()
                .map(|n| (n.variant, n.name))
                .collect(),
            animals: asset
                .meta
                .animals
                .into_iter()
                .map(|n| (n.variant, n.name))
                .collect(),
            cards,
        })
    }
}
