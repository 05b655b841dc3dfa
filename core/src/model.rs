use serde::{Deserialize, Serialize};

/// A normalized catalog record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pokemon {
    /// Upstream numeric identifier
    pub id: Option<i32>,
    /// Upstream name
    pub name: Option<String>,
    /// Height in decimetres, as reported upstream
    pub height: Option<i32>,
    /// Weight in hectograms, as reported upstream
    pub weight: Option<i32>,
    /// Abilities in upstream order
    pub abilities: Vec<Ability>,
}

/// A named ability of a [`Pokemon`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ability {
    pub name: Option<String>,
}

impl Ability {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: Some(name.into()) }
    }
}
