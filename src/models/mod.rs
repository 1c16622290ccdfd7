//! Up API data shapes.
//!
//! # Pass-through resources
//!
//! Accounts, transactions, categories and tags are owned by the Up API. The
//! server never interprets their attributes: [`Resource`] models only the
//! JSON:API `id` and `type` and carries everything else verbatim.
//!
//! # Typed requests
//!
//! - [`AccountQuery`], [`TransactionQuery`], [`TagQuery`]: listing filters
//!   rendered into `filter[...]` / `page[...]` query parameters.
//! - [`Relationship`] / [`ResourceIdentifier`]: bodies for the category and
//!   tag relationship endpoints.

mod query;
mod resource;

pub use query::*;
pub use resource::*;
