use std::env;

use async_graphql::{EmptyMutation, EmptySubscription, Schema};

use super::QueryRoot;
use crate::state::AppState;

pub type AppSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

/// Build the GraphQL schema and inject shared state (AppState) into the context.
pub fn build_schema(state: AppState) -> AppSchema {
    let introspection_enabled = env::var("GQL_INTROSPECTION")
        .map(|v| v == "true")
        .unwrap_or(true);

    let mut builder = Schema::build(QueryRoot::default(), EmptyMutation, EmptySubscription)
        .data(state) // available in resolvers via ctx.data::<AppState>()
        .limit_depth(10)
        .limit_complexity(200);

    if !introspection_enabled {
        builder = builder.disable_introspection();
    }

    builder.finish()
}
