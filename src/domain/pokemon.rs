use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::domain::location::NamedResource;
use crate::error::Result;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pokemon {
    pub id: u32,
    pub name: String,
    /// Null on the wire for some forms.
    #[serde(default)]
    pub base_experience: Option<u32>,
    pub height: u32,
    pub weight: u32,
    #[serde(default)]
    pub location_area_encounters: String,
    #[serde(default)]
    pub moves: Vec<PokemonMove>,
    #[serde(default)]
    pub stats: Vec<PokemonStat>,
    #[serde(default)]
    pub types: Vec<PokemonType>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokemonMove {
    #[serde(rename = "move")]
    pub move_: NamedResource,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokemonStat {
    pub base_stat: u32,
    pub stat: NamedResource,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokemonType {
    pub slot: u32,
    #[serde(rename = "type")]
    pub type_: NamedResource,
}

impl Pokemon {
    pub fn decode(body: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(body)?)
    }

    /// Multi-line summary printed by the inspect command.
    pub fn summary(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Name: {}", self.name);
        let _ = writeln!(out, "Height: {}", self.height);
        let _ = writeln!(out, "Weight: {}", self.weight);
        out.push_str("Stats:\n");
        for stat in &self.stats {
            let _ = writeln!(out, "  - {}: {}", stat.stat.name, stat.base_stat);
        }
        out.push_str("Types:\n");
        let mut types: Vec<&PokemonType> = self.types.iter().collect();
        types.sort_by_key(|t| t.slot);
        for t in types {
            let _ = writeln!(out, "  - {}", t.type_.name);
        }
        out
    }
}
