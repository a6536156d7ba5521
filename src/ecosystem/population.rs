//! The animal population
//!
//! An unordered collection of live animals. Insertion order carries no
//! meaning; removal uses swap-remove. Dead animals never linger: hunting and
//! the mortality step remove them immediately.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::core::types::{AnimalId, Species};
use crate::ecosystem::animal::Animal;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Population {
    animals: Vec<Animal>,
    next_id: u32,
}

impl Population {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a population from (species, count) pairs, all at age 0, energy 100
    pub fn seed(groups: &[(Species, usize)]) -> Self {
        let mut population = Self::new();
        for &(species, count) in groups {
            for _ in 0..count {
                population.spawn(species, 100);
            }
        }
        population
    }

    /// Add a newborn animal, returning its id
    pub fn spawn(&mut self, species: Species, energy: i32) -> AnimalId {
        let id = AnimalId(self.next_id);
        self.next_id += 1;
        self.animals.push(Animal::new(id, species, energy));
        id
    }

    pub fn len(&self) -> usize {
        self.animals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.animals.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Animal> {
        self.animals.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Animal> {
        self.animals.iter_mut()
    }

    /// Position of an animal by id, if still alive
    pub fn position(&self, id: AnimalId) -> Option<usize> {
        self.animals.iter().position(|a| a.id == id)
    }

    pub fn get(&self, index: usize) -> Option<&Animal> {
        self.animals.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Animal> {
        self.animals.get_mut(index)
    }

    /// Remove an animal by index (order is not preserved)
    pub fn remove_at(&mut self, index: usize) -> Animal {
        self.animals.swap_remove(index)
    }

    /// Keep only the animals the predicate accepts
    pub fn retain(&mut self, f: impl FnMut(&Animal) -> bool) {
        self.animals.retain(f);
    }

    /// Indices of all live animals of one species
    pub fn indices_of(&self, species: Species) -> Vec<usize> {
        self.animals
            .iter()
            .enumerate()
            .filter(|(_, a)| a.species == species)
            .map(|(i, _)| i)
            .collect()
    }

    pub fn count_of(&self, species: Species) -> usize {
        self.animals.iter().filter(|a| a.species == species).count()
    }

    /// Current population counts, including zero entries for extinct species
    pub fn counts_by_species(&self) -> AHashMap<Species, usize> {
        let mut counts: AHashMap<Species, usize> =
            Species::ALL.iter().map(|&s| (s, 0)).collect();
        for animal in &self.animals {
            *counts.entry(animal.species).or_insert(0) += 1;
        }
        counts
    }
}
