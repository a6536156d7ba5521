//! Static species profiles
//!
//! Behavior varies by species through this lookup table, not through
//! subclassing: every per-species number lives in one immutable profile.

use crate::core::types::Species;

/// What a species eats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Diet {
    /// Grazes on the shared grass pool
    Grass,
    /// Hunts live animals of the preferred prey species
    Prey(Species),
}

/// Fixed per-species parameters
#[derive(Debug, Clone)]
pub struct SpeciesProfile {
    pub diet: Diet,
    /// Probability of one birth per turn, given at least two fertile animals
    pub reproduction_rate: f64,
    /// Minimum age to count as fertile
    pub reproduction_age: u32,
    /// Maximum age; animals strictly older die at the end of the turn
    pub lifespan: u32,
    /// Energy burned per turn just by living
    pub energy_cost: i32,
    /// Energy gained from a full foraging bite (herbivores only)
    pub forage_energy_gain: i32,
}

const RABBIT: SpeciesProfile = SpeciesProfile {
    diet: Diet::Grass,
    reproduction_rate: 0.50,
    reproduction_age: 2,
    lifespan: 8,
    energy_cost: 5,
    forage_energy_gain: 20,
};

const DEER: SpeciesProfile = SpeciesProfile {
    diet: Diet::Grass,
    reproduction_rate: 0.30,
    reproduction_age: 3,
    lifespan: 15,
    energy_cost: 8,
    forage_energy_gain: 25,
};

const FOX: SpeciesProfile = SpeciesProfile {
    diet: Diet::Prey(Species::Rabbit),
    reproduction_rate: 0.20,
    reproduction_age: 3,
    lifespan: 10,
    energy_cost: 12,
    forage_energy_gain: 0,
};

const WOLF: SpeciesProfile = SpeciesProfile {
    diet: Diet::Prey(Species::Deer),
    reproduction_rate: 0.15,
    reproduction_age: 4,
    lifespan: 12,
    energy_cost: 15,
    forage_energy_gain: 0,
};

impl Species {
    /// The static profile for this species
    pub fn profile(self) -> &'static SpeciesProfile {
        match self {
            Species::Rabbit => &RABBIT,
            Species::Deer => &DEER,
            Species::Fox => &FOX,
            Species::Wolf => &WOLF,
        }
    }

    pub fn is_predator(self) -> bool {
        matches!(self.profile().diet, Diet::Prey(_))
    }

    /// The prey species this predator hunts, if it is one
    pub fn preferred_prey(self) -> Option<Species> {
        match self.profile().diet {
            Diet::Prey(prey) => Some(prey),
            Diet::Grass => None,
        }
    }
}
