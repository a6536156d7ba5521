//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};

use crate::core::error::EcoError;

/// Unique identifier for animals, assigned sequentially within a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnimalId(pub u32);

/// Turn counter (simulation time unit)
pub type Turn = u64;

/// Species enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Species {
    Rabbit,
    Deer,
    Fox,
    Wolf,
}

impl Species {
    /// All species, in a fixed order for per-species processing
    pub const ALL: [Species; 4] = [Species::Rabbit, Species::Deer, Species::Fox, Species::Wolf];
}

impl std::str::FromStr for Species {
    type Err = EcoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "rabbit" => Ok(Species::Rabbit),
            "deer" => Ok(Species::Deer),
            "fox" => Ok(Species::Fox),
            "wolf" => Ok(Species::Wolf),
            _ => Err(EcoError::InvalidSpecies(s.to_string())),
        }
    }
}

impl std::fmt::Display for Species {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Species::Rabbit => "Rabbit",
            Species::Deer => "Deer",
            Species::Fox => "Fox",
            Species::Wolf => "Wolf",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_species_parse_roundtrip() {
        for species in Species::ALL {
            let parsed: Species = species.to_string().parse().unwrap();
            assert_eq!(parsed, species);
        }
    }

    #[test]
    fn test_unknown_species_rejected() {
        let result = "Badger".parse::<Species>();
        assert!(matches!(result, Err(EcoError::InvalidSpecies(_))));
    }
}
