//! Errores del resolver (ruta estricta).
//! La ruta `resolve_lossy` conserva la adopción silenciosa del original y no
//! produce estas variantes.

use crate::model::Origin;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResolverError {
    #[error("probe spawn failed for `{program}`: {source}")]
    ProbeSpawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("probe output for `{program}` is not valid UTF-8")]
    ProbeOutputNotUtf8 { program: String },
    #[error("resolved version is empty (origin: {origin})")]
    EmptyVersion { origin: Origin },
}
