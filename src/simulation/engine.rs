//! The simulation engine
//!
//! Sole owner of the population and the resource pool. One logical caller
//! (the menu loop) drives it sequentially: advance turns, apply player
//! interventions between them, read state for display. There is no
//! concurrency and no mid-turn interruption.

use ahash::AHashMap;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::core::config::EngineConfig;
use crate::core::error::{EcoError, Result};
use crate::core::types::{Species, Turn};
use crate::ecosystem::events::TurnEvent;
use crate::ecosystem::population::Population;
use crate::ecosystem::resources::{ResourceKind, ResourceLevels, ResourcePool};
use crate::simulation::turn;

/// The default starting ecosystem
pub const DEFAULT_SCENARIO: [(Species, usize); 4] = [
    (Species::Rabbit, 20),
    (Species::Deer, 10),
    (Species::Fox, 5),
    (Species::Wolf, 3),
];

pub struct SimulationEngine<R: Rng> {
    population: Population,
    resources: ResourcePool,
    config: EngineConfig,
    rng: R,
    turn: Turn,
}

impl SimulationEngine<ChaCha8Rng> {
    /// Engine with an empty population and empty pools, seeded for
    /// reproducible runs
    pub fn from_seed(seed: u64) -> Self {
        Self::new(
            Population::new(),
            ResourcePool::default(),
            ChaCha8Rng::seed_from_u64(seed),
        )
    }

    /// The classic starting ecosystem: 20 rabbits, 10 deer, 5 foxes,
    /// 3 wolves, grass and water at 1000
    pub fn default_scenario(seed: u64) -> Self {
        Self::new(
            Population::seed(&DEFAULT_SCENARIO),
            ResourcePool::new(1000, 1000),
            ChaCha8Rng::seed_from_u64(seed),
        )
    }
}

impl<R: Rng> SimulationEngine<R> {
    pub fn new(population: Population, resources: ResourcePool, rng: R) -> Self {
        Self::with_config(population, resources, rng, EngineConfig::default())
    }

    pub fn with_config(
        population: Population,
        resources: ResourcePool,
        rng: R,
        config: EngineConfig,
    ) -> Self {
        Self {
            population,
            resources,
            config,
            rng,
            turn: 0,
        }
    }

    /// Run one complete turn of the eight-stage pipeline
    ///
    /// Returns the turn's notable events for display; the engine state is
    /// fully updated when this returns.
    pub fn advance_turn(&mut self) -> Vec<TurnEvent> {
        self.turn += 1;
        let mut events = Vec::new();

        self.resources.regenerate(&mut self.rng, &self.config);
        turn::forage(&mut self.population, &mut self.resources, &self.config);
        turn::hunt(&mut self.population, &mut self.rng, &self.config, &mut events);
        turn::drink(&mut self.population, &mut self.resources, &self.config);
        turn::age_and_decay(&mut self.population);
        turn::apply_mortality(&mut self.population, &mut events);
        turn::reproduce(&mut self.population, &mut self.rng, &self.config, &mut events);
        turn::random_events(&mut self.resources, &mut self.rng, &self.config, &mut events);

        let levels = self.resources.levels();
        tracing::debug!(
            turn = self.turn,
            population = self.population.len(),
            grass = levels.grass,
            water = levels.water,
            events = events.len(),
            "turn complete"
        );

        events
    }

    // === Interventions (called between turns) ===

    /// Player adds grass to the pool
    pub fn add_grass(&mut self, amount: i64) -> Result<()> {
        let amount = validate_amount("grass", amount)?;
        self.resources.add(ResourceKind::Grass, amount);
        Ok(())
    }

    /// Player adds water to the pool
    pub fn add_water(&mut self, amount: i64) -> Result<()> {
        let amount = validate_amount("water", amount)?;
        self.resources.add(ResourceKind::Water, amount);
        Ok(())
    }

    /// Player introduces new animals, all at age 0, full newborn energy
    pub fn introduce_animals(&mut self, species: Species, count: i64) -> Result<()> {
        let count = validate_amount("animal count", count)?;
        for _ in 0..count {
            self.population.spawn(species, self.config.newborn_energy);
        }
        Ok(())
    }

    // === Queries ===

    /// Healthy = population at least 10 AND grass over 100 AND water over 100
    pub fn is_healthy(&self) -> bool {
        let levels = self.resources.levels();
        self.population.len() >= self.config.healthy_population
            && levels.grass > self.config.healthy_resource_level
            && levels.water > self.config.healthy_resource_level
    }

    pub fn counts_by_species(&self) -> AHashMap<Species, usize> {
        self.population.counts_by_species()
    }

    pub fn resource_levels(&self) -> ResourceLevels {
        self.resources.levels()
    }

    pub fn total_population(&self) -> usize {
        self.population.len()
    }

    pub fn turn(&self) -> Turn {
        self.turn
    }

    pub fn population(&self) -> &Population {
        &self.population
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

fn validate_amount(what: &'static str, amount: i64) -> Result<u64> {
    if amount < 0 {
        return Err(EcoError::InvalidAmount { what, amount });
    }
    Ok(amount as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_boundaries() {
        // Exactly at the edge: 10 animals, 101 grass, 101 water
        let mut engine = SimulationEngine::new(
            Population::seed(&[(Species::Rabbit, 10)]),
            ResourcePool::new(101, 101),
            ChaCha8Rng::seed_from_u64(0),
        );
        assert!(engine.is_healthy());

        // One animal short
        engine = SimulationEngine::new(
            Population::seed(&[(Species::Rabbit, 9)]),
            ResourcePool::new(101, 101),
            ChaCha8Rng::seed_from_u64(0),
        );
        assert!(!engine.is_healthy());

        // Grass exactly at the threshold is not enough
        engine = SimulationEngine::new(
            Population::seed(&[(Species::Rabbit, 10)]),
            ResourcePool::new(100, 101),
            ChaCha8Rng::seed_from_u64(0),
        );
        assert!(!engine.is_healthy());
    }

    #[test]
    fn test_turn_counter_advances() {
        let mut engine = SimulationEngine::default_scenario(42);
        assert_eq!(engine.turn(), 0);
        engine.advance_turn();
        engine.advance_turn();
        assert_eq!(engine.turn(), 2);
    }
}
