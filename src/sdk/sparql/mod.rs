pub mod client;
pub mod error;
pub mod response;

pub use client::{SparqlClient, SparqlService};
pub use error::{QueryError, QueryResult};
pub use response::{Binding, BindingExt, BindingValue};
