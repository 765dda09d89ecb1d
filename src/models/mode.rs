//! Game modes and map-name prefixes.

use serde::{Deserialize, Serialize};

/// The game modes a map can belong to, in display priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    GemGrab,
    BrawlBall,
    Bounty,
    HotZone,
    Knockout,
    Heist,
}

impl GameMode {
    /// All modes, in the order maps are grouped.
    pub const ALL: [GameMode; 6] = [
        GameMode::GemGrab,
        GameMode::BrawlBall,
        GameMode::Bounty,
        GameMode::HotZone,
        GameMode::Knockout,
        GameMode::Heist,
    ];

    /// Lowercase prefix that map names of this mode start with.
    pub fn prefix(&self) -> &'static str {
        match self {
            GameMode::GemGrab => "gem_grab",
            GameMode::BrawlBall => "brawl_ball",
            GameMode::Bounty => "bounty",
            GameMode::HotZone => "hot_zone",
            GameMode::Knockout => "knockout",
            GameMode::Heist => "heist",
        }
    }

    /// Whether `map` belongs to this mode (case-insensitive prefix match).
    pub fn matches_map(&self, map: &str) -> bool {
        map.to_lowercase().starts_with(self.prefix())
    }

    /// First mode, in priority order, whose prefix the map name starts with.
    pub fn from_map_name(map: &str) -> Option<Self> {
        let lower = map.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|mode| lower.starts_with(mode.prefix()))
    }
}

impl std::fmt::Display for GameMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.prefix())
    }
}
