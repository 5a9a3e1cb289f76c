use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Algorithm used to snap a raw clock time to a canonical boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum RoundingPolicy {
    /// Quarter hours: up to :07 down, :08-:22 → :15, ... :53+ → next hour
    #[default]
    #[value(name = "standard")]
    Standard,
    #[value(name = "nearest_5")]
    Nearest5,
    #[value(name = "nearest_10")]
    Nearest10,
    #[value(name = "nearest_30")]
    Nearest30,
    /// Up to the next quarter hour
    #[value(name = "ceiling")]
    Ceiling,
    /// Down to the previous quarter hour
    #[value(name = "floor")]
    Floor,
}

impl RoundingPolicy {
    pub const ALL: [RoundingPolicy; 6] = [
        RoundingPolicy::Standard,
        RoundingPolicy::Nearest5,
        RoundingPolicy::Nearest10,
        RoundingPolicy::Nearest30,
        RoundingPolicy::Ceiling,
        RoundingPolicy::Floor,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RoundingPolicy::Standard => "standard",
            RoundingPolicy::Nearest5 => "nearest_5",
            RoundingPolicy::Nearest10 => "nearest_10",
            RoundingPolicy::Nearest30 => "nearest_30",
            RoundingPolicy::Ceiling => "ceiling",
            RoundingPolicy::Floor => "floor",
        }
    }

    /// Strict lookup by configuration name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        let key = name.trim().to_lowercase();
        Self::ALL.into_iter().find(|p| p.as_str() == key)
    }

    /// Lookup that never fails: unknown names select `Standard`.
    pub fn from_name_or_standard(name: &str) -> Self {
        match Self::from_name(name) {
            Some(p) => p,
            None => {
                tracing::warn!(
                    rounding_algorithm = name,
                    "unknown rounding algorithm, using standard"
                );
                RoundingPolicy::Standard
            }
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            RoundingPolicy::Standard => "Standard (15 minutes)",
            RoundingPolicy::Nearest5 => "Nearest 5 minutes",
            RoundingPolicy::Nearest10 => "Nearest 10 minutes",
            RoundingPolicy::Nearest30 => "Nearest 30 minutes",
            RoundingPolicy::Ceiling => "Round up (ceiling, 15 minutes)",
            RoundingPolicy::Floor => "Round down (floor, 15 minutes)",
        }
    }
}
