pub mod config;
pub mod error;
pub mod logging;

pub mod module;
pub mod split;
pub mod url_parts;

pub use error::QueryError;
pub use module::{RemoveQueriesModule, RenderInstruction, UrlModule};
pub use url_parts::{RemoveTarget, UrlParts};
