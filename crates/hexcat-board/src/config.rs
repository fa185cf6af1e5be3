use hexcat_paths::PathFinder;

use crate::board::BoardError;

/// Settings for a new [`Game`](crate::Game).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Cells along each board edge. Must be odd.
    pub side: i32,
    /// Fraction of cells blocked before the first turn, in `0.0..=1.0`.
    pub block_ratio: f64,
    /// Seed for obstacle placement and the cat's random moves. `None` seeds
    /// from the operating system.
    pub seed: Option<u64>,
    /// Cap on cells expanded per escape search. `None` means unbounded.
    pub expansion_limit: Option<usize>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            side: 21,
            block_ratio: 0.1,
            seed: None,
            expansion_limit: None,
        }
    }
}

impl GameConfig {
    /// Check the settings without building anything.
    pub fn validate(&self) -> Result<(), BoardError> {
        if self.side < 1 || self.side % 2 == 0 {
            return Err(BoardError::InvalidSide(self.side));
        }
        if !(0.0..=1.0).contains(&self.block_ratio) {
            return Err(BoardError::InvalidRatio(self.block_ratio));
        }
        Ok(())
    }

    /// The path finder these settings describe.
    pub fn finder(&self) -> PathFinder {
        match self.expansion_limit {
            Some(limit) => PathFinder::with_expansion_limit(limit),
            None => PathFinder::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let cfg = GameConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.finder(), PathFinder::new());
    }

    #[test]
    fn rejects_bad_side_and_ratio() {
        let even = GameConfig {
            side: 10,
            ..GameConfig::default()
        };
        assert_eq!(even.validate(), Err(BoardError::InvalidSide(10)));

        let ratio = GameConfig {
            block_ratio: 1.5,
            ..GameConfig::default()
        };
        assert_eq!(ratio.validate(), Err(BoardError::InvalidRatio(1.5)));

        let nan = GameConfig {
            block_ratio: f64::NAN,
            ..GameConfig::default()
        };
        assert!(nan.validate().is_err());
    }

    #[test]
    fn expansion_limit_reaches_finder() {
        let cfg = GameConfig {
            expansion_limit: Some(32),
            ..GameConfig::default()
        };
        assert_eq!(cfg.finder().expansion_limit(), Some(32));
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn config_round_trip() {
        let cfg = GameConfig {
            side: 11,
            block_ratio: 0.25,
            seed: Some(9),
            expansion_limit: Some(100),
        };
        let json = serde_json::to_string(&cfg).unwrap();
        let back: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(cfg, back);
    }

    #[test]
    fn missing_fields_use_defaults() {
        let cfg: GameConfig = serde_json::from_str(r#"{"side": 7}"#).unwrap();
        assert_eq!(cfg.side, 7);
        assert_eq!(cfg.block_ratio, GameConfig::default().block_ratio);
        assert_eq!(cfg.seed, None);
    }
}
