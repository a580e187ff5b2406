use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::error::{PokedexError, Result};
use crate::ports::fetcher::Fetcher;

#[derive(Clone)]
enum Canned {
    Body(Vec<u8>),
    Status(u16),
}

#[derive(Default)]
struct MockState {
    responses: HashMap<String, Canned>,
    calls: HashMap<String, usize>,
}

/// Fetcher with canned responses that counts calls per URL.
///
/// Clones share state, so a test can keep one clone to inspect call counts
/// after handing another to the code under test. Unknown URLs answer 404.
#[derive(Clone, Default)]
pub struct MockFetcher {
    state: Arc<Mutex<MockState>>,
}

impl MockFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_body(self, url: &str, body: impl Into<Vec<u8>>) -> Self {
        self.set(url, Canned::Body(body.into()));
        self
    }

    #[must_use]
    pub fn with_json(self, url: &str, value: &serde_json::Value) -> Self {
        self.with_body(url, value.to_string())
    }

    #[must_use]
    pub fn with_status(self, url: &str, status: u16) -> Self {
        self.set(url, Canned::Status(status));
        self
    }

    /// Replace the canned response for `url` after construction.
    pub fn set_body(&self, url: &str, body: impl Into<Vec<u8>>) {
        self.set(url, Canned::Body(body.into()));
    }

    pub fn calls(&self, url: &str) -> usize {
        self.state
            .lock()
            .unwrap()
            .calls
            .get(url)
            .copied()
            .unwrap_or(0)
    }

    pub fn total_calls(&self) -> usize {
        self.state.lock().unwrap().calls.values().sum()
    }

    fn set(&self, url: &str, canned: Canned) {
        self.state
            .lock()
            .unwrap()
            .responses
            .insert(url.to_string(), canned);
    }
}

#[async_trait]
impl Fetcher for MockFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        let canned = {
            let mut state = self.state.lock().unwrap();
            *state.calls.entry(url.to_string()).or_default() += 1;
            state.responses.get(url).cloned()
        };
        match canned {
            Some(Canned::Body(body)) => Ok(body),
            Some(Canned::Status(status)) => Err(PokedexError::Remote {
                status,
                url: url.to_string(),
            }),
            None => Err(PokedexError::Remote {
                status: 404,
                url: url.to_string(),
            }),
        }
    }
}

pub fn location_page(
    next: Option<&str>,
    previous: Option<&str>,
    names: &[&str],
) -> serde_json::Value {
    let results: Vec<serde_json::Value> = names
        .iter()
        .map(|name| {
            serde_json::json!({
                "name": name,
                "url": format!("https://pokeapi.co/api/v2/location-area/{name}/"),
            })
        })
        .collect();
    serde_json::json!({
        "count": 1089,
        "next": next,
        "previous": previous,
        "results": results,
    })
}

pub fn location_area_json(name: &str, pokemon: &[&str]) -> serde_json::Value {
    let encounters: Vec<serde_json::Value> = pokemon
        .iter()
        .map(|p| {
            serde_json::json!({
                "pokemon": { "name": p, "url": format!("https://pokeapi.co/api/v2/pokemon/{p}/") },
                "version_details": [{
                    "max_chance": 60,
                    "version": { "name": "diamond", "url": "https://pokeapi.co/api/v2/version/12/" },
                    "encounter_details": [{ "min_level": 20, "max_level": 30, "chance": 60 }]
                }]
            })
        })
        .collect();
    serde_json::json!({
        "id": 1,
        "name": name,
        "location": { "name": "canalave-city", "url": "https://pokeapi.co/api/v2/location/1/" },
        "pokemon_encounters": encounters,
    })
}

pub fn pokemon_json(name: &str, base_experience: Option<u32>) -> serde_json::Value {
    serde_json::json!({
        "id": 25,
        "name": name,
        "base_experience": base_experience,
        "height": 4,
        "weight": 60,
        "location_area_encounters": format!("https://pokeapi.co/api/v2/pokemon/{name}/encounters"),
        "moves": [
            { "move": { "name": "thunder-shock", "url": "https://pokeapi.co/api/v2/move/84/" } }
        ],
        "stats": [
            { "base_stat": 35, "effort": 0, "stat": { "name": "hp", "url": "https://pokeapi.co/api/v2/stat/1/" } },
            { "base_stat": 90, "effort": 2, "stat": { "name": "speed", "url": "https://pokeapi.co/api/v2/stat/6/" } }
        ],
        "types": [
            { "slot": 1, "type": { "name": "electric", "url": "https://pokeapi.co/api/v2/type/13/" } }
        ]
    })
}
