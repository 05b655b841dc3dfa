use async_graphql::{Object, SimpleObject};
use dexgraph_core::model;

/// A Pokemon as reported by the upstream catalog
#[derive(Debug)]
pub struct Pokemon(model::Pokemon);

#[Object]
impl Pokemon {
    /// National dex number
    async fn id(&self) -> Option<i32> {
        self.0.id
    }

    async fn name(&self) -> Option<&str> {
        self.0.name.as_deref()
    }

    /// Height in decimetres
    async fn height(&self) -> Option<i32> {
        self.0.height
    }

    /// Weight in hectograms
    async fn weight(&self) -> Option<i32> {
        self.0.weight
    }

    /// Abilities in upstream slot order
    async fn abilities(&self) -> Option<Vec<Option<Ability>>> {
        Some(self.0.abilities.iter().cloned().map(|a| Some(a.into())).collect())
    }
}

impl From<model::Pokemon> for Pokemon {
    fn from(pokemon: model::Pokemon) -> Self {
        Self(pokemon)
    }
}

/// A named ability
#[derive(Debug, SimpleObject)]
pub struct Ability {
    pub name: Option<String>,
}

impl From<model::Ability> for Ability {
    fn from(ability: model::Ability) -> Self {
        Self { name: ability.name }
    }
}
