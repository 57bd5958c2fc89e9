use serde::{Deserialize, Deserializer, Serialize};

/// The five colors of Magic: The Gathering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Color {
    White,
    Blue,
    Black,
    Red,
    Green,
}

impl Color {
    pub const ALL: [Color; 5] = [
        Color::White,
        Color::Blue,
        Color::Black,
        Color::Red,
        Color::Green,
    ];

    /// Convert to the single character representation
    pub fn to_char(&self) -> char {
        match self {
            Color::White => 'W',
            Color::Blue => 'U',
            Color::Black => 'B',
            Color::Red => 'R',
            Color::Green => 'G',
        }
    }

    /// Name of the basic land that produces this color
    pub fn basic_land_name(&self) -> &'static str {
        match self {
            Color::White => "Plains",
            Color::Blue => "Island",
            Color::Black => "Swamp",
            Color::Red => "Mountain",
            Color::Green => "Forest",
        }
    }

    fn basic_land_multiverseid(&self) -> &'static str {
        match self {
            Color::White => "73963",
            Color::Blue => "73951",
            Color::Black => "73973",
            Color::Red => "73958",
            Color::Green => "73946",
        }
    }
}

const GATHERER_IMAGE_URL: &str =
    "http://gatherer.wizards.com/Handlers/Image.ashx?type=card&multiverseid=";

/// A card record as supplied by the card-data provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub name: String,
    #[serde(default)]
    pub colors: Vec<Color>,
    pub types: Vec<String>,
    #[serde(default)]
    pub cmc: u32,
    #[serde(default, deserialize_with = "string_or_number")]
    pub power: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(
        default,
        rename = "multiverseid",
        deserialize_with = "string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub multiverse_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub names: Option<Vec<String>>,
}

/// Provider data mixes `"3"` and `3` for numeric-looking fields
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrNumber {
        Text(String),
        Integer(i64),
        Float(f64),
    }

    Ok(
        Option::<StringOrNumber>::deserialize(deserializer)?.map(|value| match value {
            StringOrNumber::Text(s) => s,
            StringOrNumber::Integer(n) => n.to_string(),
            StringOrNumber::Float(f) => f.to_string(),
        }),
    )
}

impl Card {
    /// The basic land for a color, built from the static land table
    pub fn basic_land(color: Color) -> Card {
        Card {
            name: color.basic_land_name().to_string(),
            colors: Vec::new(),
            types: vec!["Land".to_string()],
            cmc: 0,
            power: None,
            image_url: None,
            multiverse_id: Some(color.basic_land_multiverseid().to_string()),
            names: None,
        }
    }

    pub fn has_type(&self, card_type: &str) -> bool {
        self.types.iter().any(|t| t == card_type)
    }

    pub fn is_creature(&self) -> bool {
        self.has_type("Creature")
    }

    pub fn is_land(&self) -> bool {
        self.has_type("Land")
    }

    pub fn is_artifact(&self) -> bool {
        self.has_type("Artifact")
    }

    pub fn is_colorless(&self) -> bool {
        self.colors.is_empty()
    }

    /// Returns true if the card is not the back half of a flipped, transformed or melded card
    pub fn is_front(&self) -> bool {
        match &self.names {
            Some(names) => names.first().map_or(true, |front| *front == self.name),
            None => true,
        }
    }

    /// Numeric power for combat math.
    /// Anything that is not a plain integer ("*", "1+*", missing) counts as 0.
    pub fn power_value(&self) -> i32 {
        self.power
            .as_deref()
            .and_then(|p| p.trim().parse::<i32>().ok())
            .unwrap_or(0)
    }

    /// URL of the card art
    pub fn image_url(&self) -> Option<String> {
        self.image_url.clone().or_else(|| {
            self.multiverse_id
                .as_ref()
                .map(|id| format!("{}{}", GATHERER_IMAGE_URL, id))
        })
    }
}
