//! Engine configuration with documented constants
//!
//! All tunable numbers are collected here with explanations of their purpose
//! and how they interact with each other. The engine holds a config by value;
//! there is no global state.

/// Tunable parameters for the simulation engine
///
/// Defaults are tuned so a balanced starting ecosystem survives on the order
/// of tens of turns without intervention. Changing them shifts pacing.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    // === ENERGY SYSTEM ===
    /// Energy ceiling for every animal
    ///
    /// Feeding and hunting gains are capped here. An animal at the ceiling
    /// can survive the longest famine its species allows.
    pub max_energy: i32,

    /// Energy of a newly created animal (birth or intervention)
    pub newborn_energy: i32,

    /// Energy an animal must exceed to count as fertile
    ///
    /// Together with the per-species reproduction age this gates
    /// reproduction: only well-fed adults breed.
    pub fertile_energy: i32,

    // === FORAGING ===
    /// Grass units each herbivore draws from the pool per turn
    pub forage_bite: u64,

    /// Minimum grass yield for a foraging animal to gain energy
    ///
    /// When the pool runs low an animal may receive a partial bite; below
    /// this threshold the animal went hungry and gains nothing.
    pub forage_min_yield: u64,

    // === HUNTING ===
    /// Probability a predator's hunt succeeds, per predator per turn
    ///
    /// Applied uniformly across predator species. A species-level override
    /// would live in the species profile; the baseline matches the 30%
    /// success rate the ecosystem was balanced around.
    pub hunt_success_rate: f64,

    /// Energy a predator gains from a successful kill (capped at max_energy)
    pub hunt_energy_gain: i32,

    // === DRINKING ===
    /// Water units each animal draws from the pool per turn
    pub water_sip: u64,

    /// Energy gained by drinking a full sip
    ///
    /// Zero by default: drinking is energy-neutral, and a dry pool causes
    /// no harm beyond forfeiting this gain.
    pub drink_energy_gain: i32,

    // === RESOURCE REGENERATION ===
    /// Per-turn grass regrowth, drawn uniformly from this inclusive range
    pub grass_regen_min: u64,
    pub grass_regen_max: u64,

    /// Per-turn water replenishment, drawn uniformly from this inclusive range
    pub water_regen_min: u64,
    pub water_regen_max: u64,

    // === ENVIRONMENTAL EVENTS ===
    /// Probability of a drought in a given turn
    ///
    /// Drought and rain are independent draws; both can fire in one turn,
    /// in which case their effects partially cancel.
    pub drought_chance: f64,

    /// Probability of abundant rain in a given turn
    pub rain_chance: f64,

    /// Grass / water destroyed by a drought (clamped at zero)
    pub drought_grass_loss: u64,
    pub drought_water_loss: u64,

    /// Grass / water added by abundant rain
    pub rain_grass_gain: u64,
    pub rain_water_gain: u64,

    // === HEALTH PREDICATE ===
    /// Minimum total population for the ecosystem to count as healthy
    pub healthy_population: usize,

    /// Grass and water must each exceed this level for a healthy ecosystem
    pub healthy_resource_level: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            // Energy
            max_energy: 150,
            newborn_energy: 100,
            fertile_energy: 60,

            // Foraging
            forage_bite: 15,
            forage_min_yield: 10,

            // Hunting
            hunt_success_rate: 0.30,
            hunt_energy_gain: 40,

            // Drinking
            water_sip: 2,
            drink_energy_gain: 0,

            // Regeneration
            grass_regen_min: 50,
            grass_regen_max: 100,
            water_regen_min: 30,
            water_regen_max: 70,

            // Events
            drought_chance: 0.05,
            rain_chance: 0.05,
            drought_grass_loss: 200,
            drought_water_loss: 300,
            rain_grass_gain: 300,
            rain_water_gain: 400,

            // Health
            healthy_population: 10,
            healthy_resource_level: 100,
        }
    }
}

impl EngineConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.max_energy <= 0 {
            return Err("max_energy must be positive".into());
        }

        if self.newborn_energy <= 0 || self.newborn_energy > self.max_energy {
            return Err(format!(
                "newborn_energy ({}) must be in 1..=max_energy ({})",
                self.newborn_energy, self.max_energy
            ));
        }

        if self.fertile_energy >= self.max_energy {
            return Err(format!(
                "fertile_energy ({}) must be below max_energy ({})",
                self.fertile_energy, self.max_energy
            ));
        }

        if self.forage_min_yield > self.forage_bite {
            return Err(format!(
                "forage_min_yield ({}) must be <= forage_bite ({})",
                self.forage_min_yield, self.forage_bite
            ));
        }

        if self.grass_regen_min > self.grass_regen_max
            || self.water_regen_min > self.water_regen_max
        {
            return Err("regeneration ranges must have min <= max".into());
        }

        for (name, p) in [
            ("hunt_success_rate", self.hunt_success_rate),
            ("drought_chance", self.drought_chance),
            ("rain_chance", self.rain_chance),
        ] {
            if !(0.0..=1.0).contains(&p) {
                return Err(format!("{} ({}) must be a probability in [0, 1]", name, p));
            }
        }

        Ok(())
    }
}
