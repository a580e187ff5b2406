use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use rand::Rng;

use crate::domain::pokemon::Pokemon;

/// Upper bound (exclusive) of a catch roll.
pub const CATCH_CEILING: u32 = 637;

/// How far below the base experience a roll still counts as a near miss.
pub const NEAR_MISS_MARGIN: u32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatchOutcome {
    Caught,
    NearMiss,
    BrokeFree,
}

/// Source of catch rolls in `0..ceiling`.
pub trait CatchRoll {
    fn roll(&mut self, ceiling: u32) -> u32;
}

/// Uniform rolls from the thread-local RNG.
#[derive(Debug, Default)]
pub struct RandomRoll;

impl CatchRoll for RandomRoll {
    fn roll(&mut self, ceiling: u32) -> u32 {
        rand::thread_rng().gen_range(0..ceiling.max(1))
    }
}

/// Decide a catch attempt from a single roll.
///
/// Harder pokemon have a higher base experience, so fewer rolls reach it.
pub fn attempt_catch(base_experience: Option<u32>, roll: u32) -> CatchOutcome {
    let difficulty = base_experience.unwrap_or(0);
    if roll >= difficulty {
        CatchOutcome::Caught
    } else if difficulty - roll <= NEAR_MISS_MARGIN {
        CatchOutcome::NearMiss
    } else {
        CatchOutcome::BrokeFree
    }
}

#[derive(Debug, Clone)]
pub struct CaughtPokemon {
    pub pokemon: Pokemon,
    pub caught_at: DateTime<Utc>,
}

/// The player's collection, keyed and ordered by pokemon name.
#[derive(Debug, Default)]
pub struct Pokedex {
    entries: BTreeMap<String, CaughtPokemon>,
}

impl Pokedex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a catch. Catching the same pokemon again refreshes the entry.
    pub fn record(&mut self, pokemon: Pokemon) {
        self.entries.insert(
            pokemon.name.clone(),
            CaughtPokemon {
                pokemon,
                caught_at: Utc::now(),
            },
        );
    }

    pub fn get(&self, name: &str) -> Option<&CaughtPokemon> {
        self.entries.get(&name.trim().to_lowercase())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
