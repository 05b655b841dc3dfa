//! Wire shapes returned by the upstream REST API
//!
//! Scalar fields are kept as raw JSON values so that a missing or mistyped
//! field becomes `None` on the record instead of failing the whole decode.
//! Structural fields (`abilities`, `results`, `pokemon`) are required.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::error::{CatalogError, Result};
use crate::model::{Ability, Pokemon};

/// Body of `GET /pokemon/{nameOrId}` and of every referenced record URL
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonPayload {
    #[serde(default)]
    pub id: Value,
    #[serde(default)]
    pub name: Value,
    #[serde(default)]
    pub height: Value,
    #[serde(default)]
    pub weight: Value,
    pub abilities: Vec<AbilitySlot>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AbilitySlot {
    pub ability: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NamedResource {
    #[serde(default)]
    pub name: Value,
}

/// Body of `GET /pokemon?limit&offset`
#[derive(Debug, Clone, Deserialize)]
pub struct ListingPayload {
    pub results: Vec<Reference>,
}

/// Body of `GET /type/{type}`
#[derive(Debug, Clone, Deserialize)]
pub struct TypePayload {
    pub pokemon: Vec<TypeMember>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TypeMember {
    pub pokemon: Reference,
}

/// Opaque link to a full record
#[derive(Debug, Clone, Deserialize)]
pub struct Reference {
    pub url: String,
}

impl ListingPayload {
    pub fn into_urls(self) -> Vec<String> {
        self.results.into_iter().map(|r| r.url).collect()
    }
}

impl TypePayload {
    pub fn into_urls(self) -> Vec<String> {
        self.pokemon.into_iter().map(|m| m.pokemon.url).collect()
    }
}

impl From<PokemonPayload> for Pokemon {
    fn from(payload: PokemonPayload) -> Self {
        Self {
            id: int_field(&payload.id),
            name: string_field(payload.name),
            height: int_field(&payload.height),
            weight: int_field(&payload.weight),
            abilities: payload
                .abilities
                .into_iter()
                .map(|slot| Ability { name: string_field(slot.ability.name) })
                .collect(),
        }
    }
}

// Whole-number floats such as `25.0` count as integers.
fn int_field(value: &Value) -> Option<i32> {
    let n = match value.as_i64() {
        Some(n) => n,
        None => {
            let f = value.as_f64().filter(|f| f.fract() == 0.0)?;
            if f < f64::from(i32::MIN) || f > f64::from(i32::MAX) {
                return None;
            }
            f as i64
        }
    };
    i32::try_from(n).ok()
}

fn string_field(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        _ => None,
    }
}

/// Decodes an upstream body, attributing failures to `url`
pub fn decode<T: DeserializeOwned>(url: &str, body: &[u8]) -> Result<T> {
    serde_json::from_slice(body)
        .map_err(|source| CatalogError::MalformedResponse { url: url.to_string(), source })
}
