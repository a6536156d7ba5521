//! Individual animals

use serde::{Deserialize, Serialize};

use crate::core::types::{AnimalId, Species};

/// A single animal in the ecosystem
///
/// Animals are plain value records; all per-species behavior comes from the
/// profile table. An animal stored in the population is alive by definition:
/// death removes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Animal {
    pub id: AnimalId,
    pub species: Species,
    /// Age in turns, incremented once per turn
    pub age: u32,
    /// Current energy; reaching zero or below is fatal at the mortality step
    pub energy: i32,
}

impl Animal {
    pub fn new(id: AnimalId, species: Species, energy: i32) -> Self {
        Self {
            id,
            species,
            age: 0,
            energy,
        }
    }

    /// Gain energy from feeding, capped at the ceiling
    pub fn gain_energy(&mut self, amount: i32, max_energy: i32) {
        self.energy = (self.energy + amount).min(max_energy);
    }

    /// Fertile animals are old enough and hold more energy than the threshold
    pub fn is_fertile(&self, fertile_energy: i32) -> bool {
        self.age >= self.species.profile().reproduction_age && self.energy > fertile_energy
    }
}
