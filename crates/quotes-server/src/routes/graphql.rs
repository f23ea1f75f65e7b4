//! GraphQL endpoint and playground.
//!
//! - POST / and POST /graphql - Execute a GraphQL operation
//! - GET / and GET /graphql - GraphiQL playground (when enabled)

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
};

use crate::context::RequestContext;
use crate::state::AppState;

/// Path the playground posts operations to.
pub const GRAPHQL_PATH: &str = "/graphql";

/// Execute one GraphQL operation with the request's context attached.
async fn graphql_handler(
    State(state): State<AppState>,
    context: RequestContext,
    request: GraphQLRequest,
) -> GraphQLResponse {
    let request = request.into_inner().data(context);
    state.schema().execute(request).await.into()
}

/// Serve the GraphiQL playground.
async fn graphiql(State(state): State<AppState>) -> Response {
    if !state.config().graphiql_enabled {
        return StatusCode::NOT_FOUND.into_response();
    }
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish()).into_response()
}

/// Build GraphQL routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(graphiql).post(graphql_handler))
        .route(GRAPHQL_PATH, get(graphiql).post(graphql_handler))
}
