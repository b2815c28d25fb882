use hg_core::Count;
use hg_core::Variant;
use serde::Deserialize;
use serde::Serialize;

/// What a card face shows.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Kind {
    Fruit,
    Animal,
}

/// One group of identical fruits drawn on a card face.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    pub variant: Variant,
    #[serde(rename = "number")]
    pub count: Count,
}

impl From<(Variant, Count)> for Element {
    fn from((variant, count): (Variant, Count)) -> Self {
        Self { variant, count }
    }
}

/// A single card as authored in the asset file.
///
/// Animal cards are identified by `variant` alone and carry no elements.
/// Fruit cards list one or more `(variant, count)` groups; their own
/// `variant` is unused. The `image` is an opaque reference handed through
/// to whoever renders the card.
#[derive(Debug, Clone, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub image: String,
    #[serde(rename = "type")]
    pub kind: Kind,
    #[serde(default)]
    pub variant: Variant,
    #[serde(default)]
    pub elements: Vec<Element>,
}

impl Card {
    pub fn fruit<I>(image: impl Into<String>, elements: I) -> Self
    where
        I: IntoIterator<Item = (Variant, Count)>,
    {
        Self {
            image: image.into(),
            kind: Kind::Fruit,
            variant: 0,
            elements: elements.into_iter().map(Element::from).collect(),
        }
    }
    pub fn animal(image: impl Into<String>, variant: Variant) -> Self {
        Self {
            image: image.into(),
            kind: Kind::Animal,
            variant,
            elements: Vec::new(),
        }
    }
    pub fn is_animal(&self) -> bool {
        self.kind == Kind::Animal
    }
    pub fn is_fruit(&self) -> bool {
        self.kind == Kind::Fruit
    }
    /// Fruit groups on the face. Empty for animals regardless of authoring.
    pub fn fruits(&self) -> &[Element] {
        match self.kind {
            Kind::Fruit => &self.elements,
            Kind::Animal => &[],
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.kind {
            Kind::Animal => write!(f, "[animal #{}]", self.variant),
            Kind::Fruit => write!(
                f,
                "[{}]",
                self.elements
                    .iter()
                    .map(|e| format!("#{} x{}", e.variant, e.count))
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
        }
    }
}
