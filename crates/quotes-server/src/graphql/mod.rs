//! GraphQL schema, resolvers, and the mutation guard.

pub mod guard;
pub mod mutation;
pub mod query;
pub mod schema;
pub mod types;

pub use guard::Capability;
pub use mutation::MutationRoot;
pub use query::QueryRoot;
pub use schema::{QuoteSchema, build_schema};
pub use types::{Authentication, DeleteResponse, QuoteObject};
