use async_graphql::MergedObject;

use crate::gql::domains::players::PlayerQuery;

#[derive(MergedObject, Default)]
pub struct QueryRoot(PlayerQuery);
