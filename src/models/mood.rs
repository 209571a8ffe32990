use serde::{Deserialize, Serialize};

use crate::error::OrryxError;

/// One of the five emotional outcomes a meal can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Joy,
    Calm,
    Energized,
    Warm,
    Upset,
}

impl Mood {
    /// Every mood, in canonical order.
    pub const ALL: [Mood; 5] = [
        Mood::Joy,
        Mood::Calm,
        Mood::Energized,
        Mood::Warm,
        Mood::Upset,
    ];

    /// Lowercase identifier used in storage and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Joy => "joy",
            Mood::Calm => "calm",
            Mood::Energized => "energized",
            Mood::Warm => "warm",
            Mood::Upset => "upset",
        }
    }

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            Mood::Joy => "Joy",
            Mood::Calm => "Calm",
            Mood::Energized => "Energized",
            Mood::Warm => "Warm",
            Mood::Upset => "Upset",
        }
    }
}

impl std::str::FromStr for Mood {
    type Err = OrryxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "joy" => Ok(Mood::Joy),
            "calm" => Ok(Mood::Calm),
            "energized" => Ok(Mood::Energized),
            "warm" => Ok(Mood::Warm),
            "upset" => Ok(Mood::Upset),
            other => Err(OrryxError::UnknownMood(other.to_string())),
        }
    }
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Fixed-arity record with one slot per mood.
///
/// The mood set is closed, so per-mood tables are plain fields rather than
/// an open-ended dictionary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, bound(deserialize = "T: Deserialize<'de> + Default"))]
pub struct MoodMap<T> {
    pub joy: T,
    pub calm: T,
    pub energized: T,
    pub warm: T,
    pub upset: T,
}

impl<T> MoodMap<T> {
    pub fn get(&self, mood: Mood) -> &T {
        match mood {
            Mood::Joy => &self.joy,
            Mood::Calm => &self.calm,
            Mood::Energized => &self.energized,
            Mood::Warm => &self.warm,
            Mood::Upset => &self.upset,
        }
    }

    pub fn get_mut(&mut self, mood: Mood) -> &mut T {
        match mood {
            Mood::Joy => &mut self.joy,
            Mood::Calm => &mut self.calm,
            Mood::Energized => &mut self.energized,
            Mood::Warm => &mut self.warm,
            Mood::Upset => &mut self.upset,
        }
    }
}
