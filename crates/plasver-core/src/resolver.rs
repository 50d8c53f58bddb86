//! Resolución lineal de la versión efectiva.
//! Una sola decisión (override presente vs. ausente), sin bucles ni retries.
//! Las líneas de diagnóstico van a un sink `io::Write` inyectado; la CLI
//! pasa stderr.

use crate::config::ResolverConfig;
use crate::errors::ResolverError;
use crate::model::{Origin, Resolution};
use std::io;
use std::sync::OnceLock;

/// Resolución estricta: la consulta a la fuente puede fallar y un valor
/// efectivo vacío es un error (cierra la brecha de adopción silenciosa del
/// harness original).
pub fn resolve(
    config: ResolverConfig,
    diag: &mut impl io::Write,
) -> Result<Resolution, ResolverError> {
    if let Some(value) = config.override_value {
        let resolution = Resolution {
            var_name: config.var_name,
            value,
            origin: Origin::Override,
        };
        confirm(diag, &resolution.value);
        return Ok(resolution);
    }
    let origin = fallback_origin(&config);
    let value = config.source.query()?;
    if value.is_empty() {
        return Err(ResolverError::EmptyVersion { origin });
    }
    report_query(diag, &value);
    let resolution = Resolution {
        var_name: config.var_name,
        value,
        origin,
    };
    confirm(diag, &resolution.value);
    Ok(resolution)
}

/// Resolución laxa, fiel al snippet original: se adopta lo que la fuente
/// produzca, incluso vacío o texto de error.
pub fn resolve_lossy(config: ResolverConfig, diag: &mut impl io::Write) -> Resolution {
    if let Some(value) = config.override_value {
        let resolution = Resolution {
            var_name: config.var_name,
            value,
            origin: Origin::Override,
        };
        confirm(diag, &resolution.value);
        return resolution;
    }
    let origin = fallback_origin(&config);
    let value = config.source.query_lossy();
    report_query(diag, &value);
    let resolution = Resolution {
        var_name: config.var_name,
        value,
        origin,
    };
    confirm(diag, &resolution.value);
    resolution
}

/// Versión efectiva cacheada a nivel de proceso (configuración por defecto).
/// Llamadas repetidas son idempotentes: la fuente se consulta a lo sumo una
/// vez por proceso.
pub fn effective_version() -> &'static str {
    static VERSION: OnceLock<String> = OnceLock::new();
    VERSION.get_or_init(|| resolve_lossy(ResolverConfig::from_env(), &mut io::stderr()).value)
}

fn fallback_origin(config: &ResolverConfig) -> Origin {
    match config.source {
        crate::source::VersionSource::Runtime => Origin::Runtime,
        crate::source::VersionSource::Command { .. } => Origin::Probe,
    }
}

// Primera línea de diagnóstico: solo en la ruta de fallback.
fn report_query(diag: &mut impl io::Write, value: &str) {
    let _ = writeln!(diag, "[plasver] interpreter version: {value}");
}

// Segunda línea: confirmación del valor efectivo, en ambas rutas.
fn confirm(diag: &mut impl io::Write, value: &str) {
    let _ = writeln!(diag, "[plasver] using {value}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{VersionSource, RUNTIME_VERSION};

    fn diag_lines(buf: &[u8]) -> Vec<String> {
        String::from_utf8_lossy(buf).lines().map(str::to_string).collect()
    }

    #[test]
    fn test_override_short_circuits_source() {
        // Fuente imposible de consultar: si se tocara, la ruta estricta fallaría
        let cfg = ResolverConfig::default()
            .with_override("Python 3.9.0")
            .with_source(VersionSource::Command {
                program: "definitely-not-an-interpreter".into(),
                args: vec![],
            });
        let mut diag = Vec::new();
        let r = resolve(cfg, &mut diag).unwrap();
        assert_eq!(r.value, "Python 3.9.0");
        assert_eq!(r.origin, Origin::Override);
        assert_eq!(diag_lines(&diag), vec!["[plasver] using Python 3.9.0"]);
    }

    #[test]
    fn test_fallback_emits_both_diagnostic_lines() {
        let cfg = ResolverConfig::from_lookup("PYTHON", |_| None)
            .with_source(VersionSource::Runtime);
        let mut diag = Vec::new();
        let r = resolve(cfg, &mut diag).unwrap();
        assert_eq!(r.value, RUNTIME_VERSION);
        assert_eq!(r.origin, Origin::Runtime);
        assert_eq!(
            diag_lines(&diag),
            vec![
                format!("[plasver] interpreter version: {RUNTIME_VERSION}"),
                format!("[plasver] using {RUNTIME_VERSION}"),
            ]
        );
    }

    #[test]
    fn test_strict_rejects_empty_source_output() {
        // `true` no escribe nada en ninguno de los dos streams
        let cfg = ResolverConfig::from_lookup("PYTHON", |_| None).with_source(
            VersionSource::Command {
                program: "true".into(),
                args: vec![],
            },
        );
        let mut diag = Vec::new();
        match resolve(cfg, &mut diag) {
            Err(ResolverError::EmptyVersion { origin }) => assert_eq!(origin, Origin::Probe),
            other => panic!("expected EmptyVersion, got {other:?}"),
        }
        // Nada confirmado: sin líneas de diagnóstico
        assert!(diag.is_empty());
    }

    #[test]
    fn test_lossy_adopts_empty_source_output() {
        let cfg = ResolverConfig::from_lookup("PYTHON", |_| None).with_source(
            VersionSource::Command {
                program: "true".into(),
                args: vec![],
            },
        );
        let mut diag = Vec::new();
        let r = resolve_lossy(cfg, &mut diag);
        assert_eq!(r.value, "");
        assert_eq!(r.origin, Origin::Probe);
        assert_eq!(diag_lines(&diag).len(), 2);
    }

    #[test]
    fn test_effective_version_is_idempotent() {
        let first = effective_version();
        let second = effective_version();
        // Mismo valor y misma referencia: una sola resolución por proceso
        assert_eq!(first, second);
        assert!(std::ptr::eq(first, second));
    }
}
