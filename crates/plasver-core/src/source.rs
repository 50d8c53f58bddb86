//! Fuentes de versión para la ruta de fallback.
//! `Runtime` consulta una constante en proceso (sin superficie de fallo de
//! spawn); `Command` reproduce la sonda original: un proceso hijo bloqueante
//! cuya salida combinada (stdout + stderr, el `2>&1` del snippet) se adopta.

use crate::errors::ResolverError;
use serde::{Deserialize, Serialize};
use std::process::Command;

/// Versión del runtime en proceso. En builds de release el CI puede inyectar
/// el tag vía `PLASVER_RUNTIME_VERSION`; en desarrollo cae a la versión del
/// paquete.
pub const RUNTIME_VERSION: &str = match option_env!("PLASVER_RUNTIME_VERSION") {
    Some(version) => version,
    None => env!("CARGO_PKG_VERSION"),
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum VersionSource {
    /// Constante de compilación; consulta infalible.
    Runtime,
    /// Proceso hijo una sola vez, sin timeout.
    Command { program: String, args: Vec<String> },
}

impl VersionSource {
    /// Sonda del snippet original: `python --version`.
    pub fn python() -> Self {
        VersionSource::Command {
            program: "python".to_string(),
            args: vec!["--version".to_string()],
        }
    }

    /// Consulta estricta: fallo de spawn y salida no-UTF-8 son errores.
    pub fn query(&self) -> Result<String, ResolverError> {
        match self {
            VersionSource::Runtime => Ok(RUNTIME_VERSION.to_string()),
            VersionSource::Command { program, args } => {
                let output = Command::new(program).args(args).output().map_err(|e| {
                    ResolverError::ProbeSpawn {
                        program: program.clone(),
                        source: e,
                    }
                })?;
                let stdout = String::from_utf8(output.stdout).map_err(|_| {
                    ResolverError::ProbeOutputNotUtf8 {
                        program: program.clone(),
                    }
                })?;
                let stderr = String::from_utf8(output.stderr).map_err(|_| {
                    ResolverError::ProbeOutputNotUtf8 {
                        program: program.clone(),
                    }
                })?;
                Ok(merge_streams(&stdout, &stderr))
            }
        }
    }

    /// Consulta laxa: adopta lo que haya, incluso texto de error o vacío.
    pub fn query_lossy(&self) -> String {
        match self {
            VersionSource::Runtime => RUNTIME_VERSION.to_string(),
            VersionSource::Command { program, args } => {
                match Command::new(program).args(args).output() {
                    Ok(output) => merge_streams(
                        &String::from_utf8_lossy(&output.stdout),
                        &String::from_utf8_lossy(&output.stderr),
                    ),
                    // Sin salida producida: el texto del error es lo único adoptable.
                    Err(e) => e.to_string(),
                }
            }
        }
    }
}

// Combina stdout y stderr en ese orden y recorta el whitespace final
// (python2 reportaba por stderr, python3 por stdout).
fn merge_streams(stdout: &str, stderr: &str) -> String {
    let mut text = String::with_capacity(stdout.len() + stderr.len());
    text.push_str(stdout);
    text.push_str(stderr);
    text.trim_end().to_string()
}
