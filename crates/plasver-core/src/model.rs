//! Modelo del resultado de resolución.
//! `Resolution` es el registro transitorio que adopta el harness; no se
//! persiste y se publica como asignación estilo entorno (`NAME=value`).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fuente que ganó la resolución.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Origin {
    /// Valor externo pre-establecido (variable de entorno no vacía).
    Override,
    /// Salida capturada de un intérprete local (proceso hijo).
    Probe,
    /// Constante en proceso del propio runtime (sin proceso hijo).
    Runtime,
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Origin::Override => write!(f, "override"),
            Origin::Probe => write!(f, "probe"),
            Origin::Runtime => write!(f, "runtime"),
        }
    }
}

/// Identificador de versión efectivo tras la resolución.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    /// Nombre de la variable bajo la que se publica el valor.
    pub var_name: String,
    /// Texto de versión adoptado.
    pub value: String,
    pub origin: Origin,
}

impl Resolution {
    /// Línea `NAME=value` lista para que el shell invocante la exporte.
    pub fn assignment(&self) -> String {
        format!("{}={}", self.var_name, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assignment_line_format() {
        let r = Resolution {
            var_name: "PYTHON".into(),
            value: "Python 3.11.2".into(),
            origin: Origin::Probe,
        };
        assert_eq!(r.assignment(), "PYTHON=Python 3.11.2");
    }

    #[test]
    fn test_origin_display_lowercase() {
        assert_eq!(Origin::Override.to_string(), "override");
        assert_eq!(Origin::Probe.to_string(), "probe");
        assert_eq!(Origin::Runtime.to_string(), "runtime");
    }

    #[test]
    fn test_resolution_serializes_with_origin_tag() {
        let r = Resolution {
            var_name: "PYTHON".into(),
            value: "Python 3.9.0".into(),
            origin: Origin::Override,
        };
        let json = serde_json::to_string(&r).unwrap();
        assert!(json.contains("\"origin\":\"Override\""));
        assert!(json.contains("\"value\":\"Python 3.9.0\""));
    }
}
