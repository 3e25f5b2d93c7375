use super::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Colors a select option or a rich text annotation can carry.
///
/// Wire names follow the Notion API: plain colors are bare words and the
/// background variants carry a `_background` suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Color {
    #[default]
    #[serde(rename = "default")]
    Default,
    #[serde(rename = "gray")]
    Gray,
    #[serde(rename = "brown")]
    Brown,
    #[serde(rename = "red")]
    Red,
    #[serde(rename = "orange")]
    Orange,
    #[serde(rename = "yellow")]
    Yellow,
    #[serde(rename = "green")]
    Green,
    #[serde(rename = "blue")]
    Blue,
    #[serde(rename = "purple")]
    Purple,
    #[serde(rename = "pink")]
    Pink,
    #[serde(rename = "default_background")]
    DefaultBackground,
    #[serde(rename = "gray_background")]
    GrayBackground,
    #[serde(rename = "brown_background")]
    BrownBackground,
    #[serde(rename = "red_background")]
    RedBackground,
    #[serde(rename = "orange_background")]
    OrangeBackground,
    #[serde(rename = "yellow_background")]
    YellowBackground,
    #[serde(rename = "green_background")]
    GreenBackground,
    #[serde(rename = "blue_background")]
    BlueBackground,
    #[serde(rename = "purple_background")]
    PurpleBackground,
    #[serde(rename = "pink_background")]
    PinkBackground,
    /// A color name this crate does not know.
    #[serde(rename = "other")]
    #[serde(other)]
    Other,
}

impl std::str::FromStr for Color {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(Color::Default),
            "gray" => Ok(Color::Gray),
            "brown" => Ok(Color::Brown),
            "red" => Ok(Color::Red),
            "orange" => Ok(Color::Orange),
            "yellow" => Ok(Color::Yellow),
            "green" => Ok(Color::Green),
            "blue" => Ok(Color::Blue),
            "purple" => Ok(Color::Purple),
            "pink" => Ok(Color::Pink),
            "default_background" => Ok(Color::DefaultBackground),
            "gray_background" => Ok(Color::GrayBackground),
            "brown_background" => Ok(Color::BrownBackground),
            "red_background" => Ok(Color::RedBackground),
            "orange_background" => Ok(Color::OrangeBackground),
            "yellow_background" => Ok(Color::YellowBackground),
            "green_background" => Ok(Color::GreenBackground),
            "blue_background" => Ok(Color::BlueBackground),
            "purple_background" => Ok(Color::PurpleBackground),
            "pink_background" => Ok(Color::PinkBackground),
            _ => Err(ValidationError::InvalidColor(s.to_string())),
        }
    }
}

impl Color {
    /// Wire name of the color.
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Default => "default",
            Color::Gray => "gray",
            Color::Brown => "brown",
            Color::Red => "red",
            Color::Orange => "orange",
            Color::Yellow => "yellow",
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Purple => "purple",
            Color::Pink => "pink",
            Color::DefaultBackground => "default_background",
            Color::GrayBackground => "gray_background",
            Color::BrownBackground => "brown_background",
            Color::RedBackground => "red_background",
            Color::OrangeBackground => "orange_background",
            Color::YellowBackground => "yellow_background",
            Color::GreenBackground => "green_background",
            Color::BlueBackground => "blue_background",
            Color::PurpleBackground => "purple_background",
            Color::PinkBackground => "pink_background",
            Color::Other => "other",
        }
    }

    pub fn is_background(&self) -> bool {
        self.as_str().ends_with("_background")
    }

    pub(crate) fn is_default(&self) -> bool {
        matches!(self, Color::Default)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
