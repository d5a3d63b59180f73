use api::gql::{build_schema, AppSchema};
use api::AppState;
use async_graphql::{Request, Variables};
use infra::repos::MemoryPlayerGraph;

pub fn setup_schema(graph: MemoryPlayerGraph) -> AppSchema {
    build_schema(AppState::new(graph))
}

/// Helper function to execute GraphQL queries
pub async fn execute_graphql(
    schema: &AppSchema,
    query: &str,
    variables: Option<Variables>,
) -> async_graphql::Response {
    let mut request = Request::new(query);

    if let Some(vars) = variables {
        request = request.variables(vars);
    }

    schema.execute(request).await
}

/// Execute and return `data` as JSON, panicking on GraphQL errors.
#[allow(dead_code)]
pub async fn query_json(
    schema: &AppSchema,
    query: &str,
    variables: serde_json::Value,
) -> serde_json::Value {
    let response = execute_graphql(schema, query, Some(Variables::from_json(variables))).await;
    assert!(
        response.errors.is_empty(),
        "GraphQL errors: {:?}",
        response.errors
    );
    response.data.into_json().unwrap()
}
