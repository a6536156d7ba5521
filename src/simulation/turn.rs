//! Turn pipeline stages
//!
//! One turn runs these stages in fixed order so that predators hunt
//! post-regeneration resources and reproduction sees the post-mortality
//! population:
//!
//! 1. Regenerate resources (on `ResourcePool`)
//! 2. Forage (herbivores eat grass)
//! 3. Hunt (predators kill preferred prey)
//! 4. Drink (every animal draws water)
//! 5. Age & energy decay
//! 6. Mortality (old age, starvation)
//! 7. Reproduction (at most one birth per species)
//! 8. Random environmental events

use rand::Rng;

use crate::core::config::EngineConfig;
use crate::core::types::Species;
use crate::ecosystem::events::{DeathCause, EnvEvent, TurnEvent};
use crate::ecosystem::population::Population;
use crate::ecosystem::resources::{ResourceKind, ResourcePool};

/// Herbivores draw grass from the pool
///
/// A short yield below the minimum means the animal went hungry: the grass is
/// still gone, but no energy is gained.
pub(crate) fn forage(
    population: &mut Population,
    resources: &mut ResourcePool,
    config: &EngineConfig,
) {
    for animal in population.iter_mut() {
        if animal.species.is_predator() {
            continue;
        }
        let yielded = resources.consume(ResourceKind::Grass, config.forage_bite);
        if yielded >= config.forage_min_yield {
            let gain = animal.species.profile().forage_energy_gain;
            animal.gain_energy(gain, config.max_energy);
        }
    }
}

/// Predators attempt one kill each
///
/// Kills remove the prey immediately, so a prey animal taken early in the
/// stage is gone for every later predator.
pub(crate) fn hunt(
    population: &mut Population,
    rng: &mut impl Rng,
    config: &EngineConfig,
    events: &mut Vec<TurnEvent>,
) {
    let predator_ids: Vec<_> = population
        .iter()
        .filter(|a| a.species.is_predator())
        .map(|a| a.id)
        .collect();

    for predator_id in predator_ids {
        if !rng.gen_bool(config.hunt_success_rate) {
            continue;
        }

        // Predators are never prey, so the predator is still present here
        let Some(predator_idx) = population.position(predator_id) else {
            continue;
        };
        let predator_species = match population.get(predator_idx) {
            Some(p) => p.species,
            None => continue,
        };
        let Some(prey_species) = predator_species.preferred_prey() else {
            continue;
        };

        let candidates = population.indices_of(prey_species);
        if candidates.is_empty() {
            continue;
        }
        let prey_idx = candidates[rng.gen_range(0..candidates.len())];
        let prey = population.remove_at(prey_idx);

        // Look the predator up again: swap_remove may have moved it
        if let Some(idx) = population.position(predator_id) {
            if let Some(predator) = population.get_mut(idx) {
                predator.gain_energy(config.hunt_energy_gain, config.max_energy);
            }
        }

        tracing::trace!(
            predator = predator_id.0,
            prey = prey.id.0,
            species = %prey.species,
            "kill"
        );
        events.push(TurnEvent::Hunted {
            predator: predator_id,
            predator_species,
            prey: prey.id,
            prey_species: prey.species,
        });
    }
}

/// Every animal draws a sip of water
///
/// Running dry is never fatal on its own; it only forfeits the (by default
/// zero) drinking energy gain.
pub(crate) fn drink(
    population: &mut Population,
    resources: &mut ResourcePool,
    config: &EngineConfig,
) {
    for animal in population.iter_mut() {
        let yielded = resources.consume(ResourceKind::Water, config.water_sip);
        if yielded >= config.water_sip && config.drink_energy_gain > 0 {
            animal.gain_energy(config.drink_energy_gain, config.max_energy);
        }
    }
}

/// Age every animal one turn and burn its per-turn energy cost
pub(crate) fn age_and_decay(population: &mut Population) {
    for animal in population.iter_mut() {
        animal.age += 1;
        animal.energy -= animal.species.profile().energy_cost;
    }
}

/// Remove animals past their lifespan or out of energy
pub(crate) fn apply_mortality(population: &mut Population, events: &mut Vec<TurnEvent>) {
    population.retain(|animal| {
        let cause = if animal.age > animal.species.profile().lifespan {
            Some(DeathCause::OldAge)
        } else if animal.energy <= 0 {
            Some(DeathCause::Starvation)
        } else {
            None
        };
        match cause {
            Some(cause) => {
                events.push(TurnEvent::Died {
                    animal: animal.id,
                    species: animal.species,
                    cause,
                });
                false
            }
            None => true,
        }
    });
}

/// One reproduction draw per species
///
/// Needs at least two fertile animals (sexual reproduction without explicit
/// pairing); success adds exactly one newborn, so a species can never gain
/// more than one animal per turn this way.
pub(crate) fn reproduce(
    population: &mut Population,
    rng: &mut impl Rng,
    config: &EngineConfig,
    events: &mut Vec<TurnEvent>,
) {
    for species in Species::ALL {
        let fertile = population
            .iter()
            .filter(|a| a.species == species && a.is_fertile(config.fertile_energy))
            .count();
        if fertile < 2 {
            continue;
        }
        if rng.gen_bool(species.profile().reproduction_rate) {
            let id = population.spawn(species, config.newborn_energy);
            events.push(TurnEvent::Born {
                animal: id,
                species,
            });
        }
    }
}

/// Independent drought and rain draws; both may fire in the same turn
pub(crate) fn random_events(
    resources: &mut ResourcePool,
    rng: &mut impl Rng,
    config: &EngineConfig,
    events: &mut Vec<TurnEvent>,
) {
    if rng.gen_bool(config.drought_chance) {
        resources.apply_event(EnvEvent::Drought, config);
        tracing::debug!("drought strikes");
        events.push(TurnEvent::Environment(EnvEvent::Drought));
    }
    if rng.gen_bool(config.rain_chance) {
        resources.apply_event(EnvEvent::Rain, config);
        tracing::debug!("abundant rain");
        events.push(TurnEvent::Environment(EnvEvent::Rain));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(1)
    }

    #[test]
    fn test_forage_full_bite_gains_energy() {
        let config = EngineConfig::default();
        let mut population = Population::seed(&[(Species::Rabbit, 1)]);
        let mut resources = ResourcePool::new(100, 0);

        forage(&mut population, &mut resources, &config);

        let rabbit = population.iter().next().unwrap();
        assert_eq!(rabbit.energy, 120);
        assert_eq!(
            resources.get(ResourceKind::Grass),
            100 - config.forage_bite
        );
    }

    #[test]
    fn test_forage_short_yield_means_hunger() {
        let config = EngineConfig::default();
        let mut population = Population::seed(&[(Species::Rabbit, 1)]);
        // Below forage_min_yield: the rabbit eats what little there is but
        // gains nothing from it
        let mut resources = ResourcePool::new(5, 0);

        forage(&mut population, &mut resources, &config);

        assert_eq!(population.iter().next().unwrap().energy, 100);
        assert_eq!(resources.get(ResourceKind::Grass), 0);
    }

    #[test]
    fn test_predators_do_not_graze() {
        let config = EngineConfig::default();
        let mut population = Population::seed(&[(Species::Fox, 1)]);
        let mut resources = ResourcePool::new(100, 0);

        forage(&mut population, &mut resources, &config);

        assert_eq!(resources.get(ResourceKind::Grass), 100);
        assert_eq!(population.iter().next().unwrap().energy, 100);
    }

    #[test]
    fn test_hunt_removes_preferred_prey() {
        let mut config = EngineConfig::default();
        config.hunt_success_rate = 1.0;
        let mut population = Population::seed(&[(Species::Fox, 1), (Species::Rabbit, 1)]);
        let mut events = Vec::new();

        hunt(&mut population, &mut rng(), &config, &mut events);

        assert_eq!(population.count_of(Species::Rabbit), 0);
        let fox = population.iter().next().unwrap();
        assert_eq!(fox.energy, (100 + config.hunt_energy_gain).min(config.max_energy));
        assert!(matches!(events[0], TurnEvent::Hunted { .. }));
    }

    #[test]
    fn test_hunt_without_preferred_prey_is_noop() {
        let mut config = EngineConfig::default();
        config.hunt_success_rate = 1.0;
        // Deer present, but foxes only take rabbits
        let mut population = Population::seed(&[(Species::Fox, 1), (Species::Deer, 2)]);
        let mut events = Vec::new();

        hunt(&mut population, &mut rng(), &config, &mut events);

        assert_eq!(population.count_of(Species::Deer), 2);
        assert!(events.is_empty());
    }

    #[test]
    fn test_two_foxes_one_rabbit_single_kill() {
        let mut config = EngineConfig::default();
        config.hunt_success_rate = 1.0;
        let mut population = Population::seed(&[(Species::Fox, 2), (Species::Rabbit, 1)]);
        let mut events = Vec::new();

        hunt(&mut population, &mut rng(), &config, &mut events);

        assert_eq!(population.count_of(Species::Rabbit), 0);
        assert_eq!(events.len(), 1, "second fox found no prey left");
    }

    #[test]
    fn test_drink_is_energy_neutral_by_default() {
        let config = EngineConfig::default();
        let mut population = Population::seed(&[(Species::Deer, 3)]);
        let mut resources = ResourcePool::new(0, 100);

        drink(&mut population, &mut resources, &config);

        assert_eq!(resources.get(ResourceKind::Water), 100 - 3 * config.water_sip);
        assert!(population.iter().all(|a| a.energy == 100));
    }

    #[test]
    fn test_dry_pool_causes_no_harm() {
        let config = EngineConfig::default();
        let mut population = Population::seed(&[(Species::Deer, 1)]);
        let mut resources = ResourcePool::new(0, 0);

        drink(&mut population, &mut resources, &config);

        assert_eq!(population.iter().next().unwrap().energy, 100);
    }

    #[test]
    fn test_mortality_old_age_and_starvation() {
        let mut population = Population::seed(&[(Species::Rabbit, 3)]);
        {
            let mut animals = population.iter_mut();
            animals.next().unwrap().age = 9; // past rabbit lifespan of 8
            animals.next().unwrap().energy = 0; // starved
        }
        let mut events = Vec::new();

        apply_mortality(&mut population, &mut events);

        assert_eq!(population.len(), 1);
        assert_eq!(events.len(), 2);
        assert!(events.iter().any(|e| matches!(
            e,
            TurnEvent::Died { cause: DeathCause::OldAge, .. }
        )));
        assert!(events.iter().any(|e| matches!(
            e,
            TurnEvent::Died { cause: DeathCause::Starvation, .. }
        )));
    }

    // Deterministic rng stand-ins: gen_bool(p < 1.0) is false on an all-max
    // stream and true on an all-zero stream
    struct FixedRng(u64);

    impl rand::RngCore for FixedRng {
        fn next_u32(&mut self) -> u32 {
            self.0 as u32
        }
        fn next_u64(&mut self) -> u64 {
            self.0
        }
        fn fill_bytes(&mut self, dest: &mut [u8]) {
            dest.fill(self.0 as u8);
        }
        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
            self.fill_bytes(dest);
            Ok(())
        }
    }

    #[test]
    fn test_reproduce_success_adds_one_newborn() {
        let config = EngineConfig::default();
        let mut population = Population::seed(&[(Species::Rabbit, 2)]);
        for animal in population.iter_mut() {
            animal.age = 3;
        }
        let mut events = Vec::new();

        reproduce(&mut population, &mut FixedRng(0), &config, &mut events);

        assert_eq!(population.len(), 3);
        assert_eq!(events.len(), 1);
        let newborn = population.iter().last().unwrap();
        assert_eq!(newborn.age, 0);
        assert_eq!(newborn.energy, config.newborn_energy);
    }

    #[test]
    fn test_reproduce_failed_draw_adds_nothing() {
        let config = EngineConfig::default();
        let mut population = Population::seed(&[(Species::Rabbit, 2)]);
        for animal in population.iter_mut() {
            animal.age = 3;
        }
        let mut events = Vec::new();

        reproduce(&mut population, &mut FixedRng(u64::MAX), &config, &mut events);

        assert_eq!(population.len(), 2);
        assert!(events.is_empty());
    }

    #[test]
    fn test_reproduce_needs_two_fertile() {
        let config = EngineConfig::default();

        // A lone fertile rabbit never reproduces, even on a winning stream
        let mut lone = Population::seed(&[(Species::Rabbit, 1)]);
        lone.iter_mut().next().unwrap().age = 3;
        let mut events = Vec::new();
        reproduce(&mut lone, &mut FixedRng(0), &config, &mut events);
        assert_eq!(lone.len(), 1);

        // Two adults below the energy threshold are not fertile
        let mut hungry = Population::seed(&[(Species::Rabbit, 2)]);
        for animal in hungry.iter_mut() {
            animal.age = 3;
            animal.energy = config.fertile_energy;
        }
        reproduce(&mut hungry, &mut FixedRng(0), &config, &mut events);
        assert_eq!(hungry.len(), 2);
        assert!(events.is_empty());
    }

    #[test]
    fn test_both_events_may_fire_same_turn() {
        let mut config = EngineConfig::default();
        config.drought_chance = 1.0;
        config.rain_chance = 1.0;
        let mut resources = ResourcePool::new(1000, 1000);
        let mut events = Vec::new();

        random_events(&mut resources, &mut rng(), &config, &mut events);

        assert_eq!(
            events,
            vec![
                TurnEvent::Environment(EnvEvent::Drought),
                TurnEvent::Environment(EnvEvent::Rain),
            ]
        );
        let levels = resources.levels();
        assert_eq!(levels.grass, 1000 - 200 + 300);
        assert_eq!(levels.water, 1000 - 300 + 400);
    }
}
