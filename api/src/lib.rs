//! GraphQL API layer for dexgraph

use async_graphql::http::GraphiQLSource;
use async_graphql::{
    Context, EmptyMutation, EmptySubscription, Error, ErrorExtensions, Object, Result, Schema,
};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::extract::{FromRequest, RawQuery, Request, State};
use axum::http::{header, HeaderMap};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use dexgraph_core::{Catalog, CatalogError, DEFAULT_LIMIT, DEFAULT_OFFSET};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod types;

pub use types::{Ability, Pokemon};

/// Path the GraphQL endpoint is served on
pub const GRAPHQL_PATH: &str = "/graphql";

/// GraphQL schema type
pub type DexSchema = Schema<Query, EmptyMutation, EmptySubscription>;

/// GraphQL Query root
pub struct Query;

#[Object]
impl Query {
    /// Get a Pokemon by name or id
    async fn get_pokemon(&self, ctx: &Context<'_>, name_or_id: String) -> Result<Option<Pokemon>> {
        let catalog = ctx.data::<Catalog>()?;
        let pokemon = catalog.get_pokemon(&name_or_id).await.map_err(graphql_error)?;
        Ok(Some(pokemon.into()))
    }

    /// List one page of Pokemon
    async fn list_pokemon(
        &self,
        ctx: &Context<'_>,
        #[graphql(desc = "Page size, 10 when omitted")] limit: Option<i32>,
        #[graphql(desc = "Entries to skip, 0 when omitted")] offset: Option<i32>,
    ) -> Result<Option<Vec<Option<Pokemon>>>> {
        let catalog = ctx.data::<Catalog>()?;
        // An explicit null takes the default too
        let records = catalog
            .list_pokemon(limit.unwrap_or(DEFAULT_LIMIT), offset.unwrap_or(DEFAULT_OFFSET))
            .await
            .map_err(graphql_error)?;
        Ok(Some(records.into_iter().map(|p| Some(p.into())).collect()))
    }

    /// List every Pokemon of a type
    async fn get_pokemon_by_type(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "type")] kind: String,
    ) -> Result<Option<Vec<Option<Pokemon>>>> {
        let catalog = ctx.data::<Catalog>()?;
        let records = catalog.pokemon_by_type(&kind).await.map_err(graphql_error)?;
        Ok(Some(records.into_iter().map(|p| Some(p.into())).collect()))
    }
}

/// Converts a catalog failure into a GraphQL error
///
/// The message is kept verbatim; the cause category goes in `extensions.code`.
pub fn graphql_error(err: CatalogError) -> Error {
    let code = match &err {
        CatalogError::PokemonNotFound | CatalogError::TypeNotFound => "NOT_FOUND",
        CatalogError::Transport { .. } => "UPSTREAM_UNAVAILABLE",
        CatalogError::MalformedResponse { .. } => "BAD_UPSTREAM_RESPONSE",
    };
    if !err.is_not_found() {
        tracing::error!(error = %err, "catalog query failed");
    }
    Error::new(err.to_string()).extend_with(|_, e| e.set("code", code))
}

/// Create the GraphQL schema
pub fn create_schema(catalog: Catalog) -> DexSchema {
    Schema::build(Query, EmptyMutation, EmptySubscription).data(catalog).finish()
}

/// Create the HTTP router serving the schema and GraphiQL
///
/// Any origin may call the endpoint.
pub fn create_router(schema: DexSchema) -> Router {
    Router::new()
        .route(GRAPHQL_PATH, get(graphql_get).post(graphql_handler))
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
        .with_state(schema)
}

/// GET serves GraphiQL to browsers asking for a page, and executes the
/// query string otherwise
async fn graphql_get(
    State(schema): State<DexSchema>,
    headers: HeaderMap,
    RawQuery(query): RawQuery,
    request: Request,
) -> Response {
    if !has_query_param(query.as_deref()) && accepts_html(&headers) {
        return graphiql().into_response();
    }

    match GraphQLRequest::from_request(request, &()).await {
        Ok(req) => graphql_handler(State(schema), req).await.into_response(),
        Err(rejection) => rejection.into_response(),
    }
}

fn has_query_param(query: Option<&str>) -> bool {
    query.is_some_and(|q| q.split('&').any(|pair| pair == "query" || pair.starts_with("query=")))
}

fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get_all(header::ACCEPT)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .any(|value| value.contains("text/html"))
}

fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}

async fn graphql_handler(State(schema): State<DexSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}
