//! Game modes a player can start a session in.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    /// Build words from the dictionary on a 3x3 morpheme grid
    MainGame,
    /// Combine any morphemes and justify the result with a definition
    FreeBuild,
    /// Declared but not playable yet
    PrefixMatcher,
}

impl GameMode {
    pub fn is_available(&self) -> bool {
        !matches!(self, GameMode::PrefixMatcher)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            GameMode::MainGame => "Main game",
            GameMode::FreeBuild => "Free build",
            GameMode::PrefixMatcher => "Prefix matcher",
        }
    }
}

impl std::fmt::Display for GameMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_availability() {
        assert!(GameMode::MainGame.is_available());
        assert!(GameMode::FreeBuild.is_available());
        assert!(!GameMode::PrefixMatcher.is_available());
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&GameMode::FreeBuild).unwrap(), "\"free_build\"");
        let mode: GameMode = serde_json::from_str("\"main_game\"").unwrap();
        assert_eq!(mode, GameMode::MainGame);
    }
}
