//! Configuración del resolver.
//! Carga variables de entorno (.env) y expone un objeto de configuración
//! pasado por valor: el override se captura una sola vez en la construcción
//! y no queda estado global mutable.

use crate::source::VersionSource;
use dotenvy::dotenv;
use once_cell::sync::Lazy;
use std::env;

/// Variable de entorno consultada por defecto, como en el harness original.
pub const DEFAULT_VAR_NAME: &str = "PYTHON";

// Carga perezosa del archivo .env una sola vez.
static DOTENV_LOADED: Lazy<()> = Lazy::new(|| {
    let _ = dotenv(); // ignora error si no existe .env
});

#[derive(Debug, Clone)]
pub struct ResolverConfig {
    pub var_name: String,
    /// Override externo ya normalizado: vacío se trata como ausente.
    pub override_value: Option<String>,
    /// Fuente consultada cuando no hay override.
    pub source: VersionSource,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            var_name: DEFAULT_VAR_NAME.to_string(),
            override_value: None,
            source: VersionSource::Runtime,
        }
    }
}

impl ResolverConfig {
    /// Lee el entorno del proceso para la variable por defecto (`PYTHON`).
    pub fn from_env() -> Self {
        Self::from_env_var(DEFAULT_VAR_NAME)
    }

    /// Lee el entorno del proceso para una variable concreta.
    pub fn from_env_var(var_name: &str) -> Self {
        // asegura que .env se haya cargado
        Lazy::force(&DOTENV_LOADED);
        Self::from_lookup(var_name, |k| env::var(k).ok())
    }

    /// Construcción con entorno inyectable (tests, harnesses embebidos).
    pub fn from_lookup(var_name: &str, lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            var_name: var_name.to_string(),
            override_value: normalize(lookup(var_name)),
            source: VersionSource::Runtime,
        }
    }

    pub fn with_source(mut self, source: VersionSource) -> Self {
        self.source = source;
        self
    }

    pub fn with_override(mut self, value: impl Into<String>) -> Self {
        self.override_value = normalize(Some(value.into()));
        self
    }
}

// Semántica `-z` del condicional original: cadena vacía equivale a no definida.
fn normalize(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
