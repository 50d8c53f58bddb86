//! plasver-core: resolución de la versión efectiva del intérprete para el
//! harness de build/test del toolkit de física de plasmas.
pub mod config;
pub mod errors;
pub mod model;
pub mod resolver;
pub mod source;

pub use config::{ResolverConfig, DEFAULT_VAR_NAME};
pub use errors::ResolverError;
pub use model::{Origin, Resolution};
pub use resolver::{effective_version, resolve, resolve_lossy};
pub use source::{VersionSource, RUNTIME_VERSION};
