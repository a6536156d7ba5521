//! Shared resource pool - grass and water
//!
//! Quantities never go negative: consumption clamps to what is available.
//! There is no upper cap; regrowth and player additions accumulate freely.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::config::EngineConfig;
use crate::ecosystem::events::EnvEvent;

/// The two consumable resources of the well-mixed ecosystem
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceKind {
    Grass,
    Water,
}

/// Snapshot of current resource levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceLevels {
    pub grass: u64,
    pub water: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResourcePool {
    grass: u64,
    water: u64,
}

impl ResourcePool {
    pub fn new(grass: u64, water: u64) -> Self {
        Self { grass, water }
    }

    pub fn levels(&self) -> ResourceLevels {
        ResourceLevels {
            grass: self.grass,
            water: self.water,
        }
    }

    pub fn get(&self, kind: ResourceKind) -> u64 {
        match kind {
            ResourceKind::Grass => self.grass,
            ResourceKind::Water => self.water,
        }
    }

    /// Unconditional increment (interventions, rain)
    pub fn add(&mut self, kind: ResourceKind, amount: u64) {
        match kind {
            ResourceKind::Grass => self.grass += amount,
            ResourceKind::Water => self.water += amount,
        }
    }

    /// Consume up to `amount`, returning what was actually taken
    pub fn consume(&mut self, kind: ResourceKind, amount: u64) -> u64 {
        let slot = match kind {
            ResourceKind::Grass => &mut self.grass,
            ResourceKind::Water => &mut self.water,
        };
        let taken = amount.min(*slot);
        *slot -= taken;
        taken
    }

    /// Natural per-turn regrowth
    pub fn regenerate(&mut self, rng: &mut impl Rng, config: &EngineConfig) {
        self.grass += rng.gen_range(config.grass_regen_min..=config.grass_regen_max);
        self.water += rng.gen_range(config.water_regen_min..=config.water_regen_max);
    }

    /// Apply an environmental swing
    pub fn apply_event(&mut self, event: EnvEvent, config: &EngineConfig) {
        match event {
            EnvEvent::Drought => {
                self.grass = self.grass.saturating_sub(config.drought_grass_loss);
                self.water = self.water.saturating_sub(config.drought_water_loss);
            }
            EnvEvent::Rain => {
                self.grass += config.rain_grass_gain;
                self.water += config.rain_water_gain;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consume_clamps_to_available() {
        let mut pool = ResourcePool::new(10, 0);
        assert_eq!(pool.consume(ResourceKind::Grass, 25), 10);
        assert_eq!(pool.get(ResourceKind::Grass), 0);
        assert_eq!(pool.consume(ResourceKind::Water, 5), 0);
    }

    #[test]
    fn test_drought_clamps_at_zero() {
        let config = EngineConfig::default();
        let mut pool = ResourcePool::new(50, 50);
        pool.apply_event(EnvEvent::Drought, &config);
        assert_eq!(pool.levels(), ResourceLevels { grass: 0, water: 0 });
    }

    #[test]
    fn test_rain_boosts_both_pools() {
        let config = EngineConfig::default();
        let mut pool = ResourcePool::new(100, 100);
        pool.apply_event(EnvEvent::Rain, &config);
        assert_eq!(pool.get(ResourceKind::Grass), 100 + config.rain_grass_gain);
        assert_eq!(pool.get(ResourceKind::Water), 100 + config.rain_water_gain);
    }

    #[test]
    fn test_regenerate_stays_within_range() {
        use rand::SeedableRng;
        let config = EngineConfig::default();
        let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(7);
        let mut pool = ResourcePool::new(0, 0);
        pool.regenerate(&mut rng, &config);
        let levels = pool.levels();
        assert!((config.grass_regen_min..=config.grass_regen_max).contains(&levels.grass));
        assert!((config.water_regen_min..=config.water_regen_max).contains(&levels.water));
    }
}
