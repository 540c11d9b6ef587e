//! Static trivia records shown in the explore view

use serde::{Deserialize, Serialize};

/// Topic a fact belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FactCategory {
    /// Black holes
    BlackHoles,
    /// Stars
    Stars,
    /// Galaxies
    Galaxies,
    /// Physics
    Physics,
    /// Unexplained phenomena
    Mysteries,
}

impl FactCategory {
    /// Every category, in display order
    pub const ALL: [Self; 5] = [
        Self::BlackHoles,
        Self::Stars,
        Self::Galaxies,
        Self::Physics,
        Self::Mysteries,
    ];

    /// Wire name of the category
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BlackHoles => "black_holes",
            Self::Stars => "stars",
            Self::Galaxies => "galaxies",
            Self::Physics => "physics",
            Self::Mysteries => "mysteries",
        }
    }

    /// Human label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::BlackHoles => "Black Holes",
            Self::Stars => "Stars",
            Self::Galaxies => "Galaxies",
            Self::Physics => "Physics",
            Self::Mysteries => "Mysteries",
        }
    }
}

impl std::fmt::Display for FactCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for FactCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', ' '], "_");
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == normalized)
            .ok_or_else(|| {
                format!(
                    "Unknown category: {s}. Use: black_holes, stars, galaxies, physics, mysteries"
                )
            })
    }
}

/// A piece of cosmic trivia
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Fact {
    /// Short headline
    pub title: &'static str,
    /// The fact itself
    pub body: &'static str,
    /// Topic
    pub category: FactCategory,
    /// Attribution, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<&'static str>,
}
