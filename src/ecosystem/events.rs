//! Events generated during a simulation turn
//!
//! These are returned by `advance_turn` for display in the caller's
//! action log; the engine itself never reads them back.

use serde::{Deserialize, Serialize};

use crate::core::types::{AnimalId, Species};

/// Why an animal was removed at the mortality step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeathCause {
    /// Age exceeded the species lifespan
    OldAge,
    /// Energy fell to zero or below
    Starvation,
}

/// Environmental swings applied to the resource pool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnvEvent {
    Drought,
    Rain,
}

/// One notable thing that happened during a turn
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnEvent {
    /// A predator killed and ate a prey animal
    Hunted {
        predator: AnimalId,
        predator_species: Species,
        prey: AnimalId,
        prey_species: Species,
    },
    /// An animal died of old age or starvation
    Died {
        animal: AnimalId,
        species: Species,
        cause: DeathCause,
    },
    /// A species produced one newborn
    Born { animal: AnimalId, species: Species },
    /// The environment shifted
    Environment(EnvEvent),
}
