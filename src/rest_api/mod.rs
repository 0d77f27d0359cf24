//! # Books REST API
//!
//! The listing pipeline (parse, filter, sort, paginate), single-book
//! lookup and the Axum routes that expose them.

pub mod errors;
pub mod filter;
pub mod handler;
pub mod pagination;
pub mod parser;
pub mod response;
pub mod server;
pub mod sort;

pub use errors::{ErrorResponse, RestError, RestResult};
pub use filter::{Criterion, FilterSet};
pub use handler::{BookHandler, CatalogHandler};
pub use pagination::{PageRequest, DEFAULT_LIMIT, DEFAULT_PAGE};
pub use parser::{coerce_number, ListQuery};
pub use response::ListResponse;
pub use server::RestServer;
pub use sort::{SortDirection, SortSpec};
