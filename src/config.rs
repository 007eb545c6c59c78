//! Configuración de la aplicación.
//! Carga variables de entorno (.env) una sola vez y las resuelve en un
//! `AppConfig` inmutable. La CLI no tiene flags: todo lo ajustable vive aquí.
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use chrono_tz::Tz;
use nb_core::constants::{DEFAULT_TIMEZONE, EXECUTED_DIR, NOTEBOOKS_DIR};
use nb_core::{RegistryError, StepTable};
use nb_engine::EngineOptions;
use once_cell::sync::Lazy;

use crate::errors::ConfigError;

// Carga perezosa del archivo .env una sola vez.
static DOTENV_LOADED: Lazy<()> = Lazy::new(|| {
    let _ = dotenvy::dotenv(); // ignora error si no existe .env
});

/// Forzar carga temprana de .env.
pub fn init_dotenv() {
    Lazy::force(&DOTENV_LOADED);
}

/// Engine de render a usar para los reportes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RendererKind {
    /// nbconvert vía Python (por defecto).
    Nbconvert,
    /// Renderer HTML en Rust.
    Native,
}

impl FromStr for RendererKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "nbconvert" => Ok(Self::Nbconvert),
            "native" => Ok(Self::Native),
            other => Err(format!("unknown renderer '{other}' (expected nbconvert|native)")),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub project_root: PathBuf,
    pub notebooks_dir: PathBuf,
    pub output_dir: PathBuf,
    /// Zona horaria de reporte (inicio/fin). Los nombres de salida van en UTC.
    pub timezone: Tz,
    /// Tabla de steps alternativa (JSON); `None` usa la incorporada.
    pub steps_file: Option<PathBuf>,
    pub engine: EngineOptions,
    pub renderer: RendererKind,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        init_dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Resuelve la configuración desde una fuente arbitraria de variables.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let project_root = match lookup("NBFLOW_PROJECT_ROOT") {
            Some(root) => PathBuf::from(root),
            None => env::current_dir().map_err(ConfigError::CurrentDir)?,
        };
        let notebooks_dir = project_root.join(lookup("NBFLOW_NOTEBOOKS_DIR").unwrap_or_else(|| NOTEBOOKS_DIR.to_string()));
        let output_dir = project_root.join(lookup("NBFLOW_OUTPUT_DIR").unwrap_or_else(|| EXECUTED_DIR.to_string()));
        let timezone = parse_var("NBFLOW_TIMEZONE",
                                 lookup("NBFLOW_TIMEZONE").unwrap_or_else(|| DEFAULT_TIMEZONE.to_string()))?;
        let steps_file = lookup("NBFLOW_STEPS_FILE").map(|p| project_root.join(p));
        let execution_timeout = lookup("NBFLOW_EXECUTION_TIMEOUT").map(|v| parse_var::<u64>("NBFLOW_EXECUTION_TIMEOUT", v))
                                                                  .transpose()?;
        let renderer = match lookup("NBFLOW_RENDERER") {
            Some(v) => parse_var("NBFLOW_RENDERER", v)?,
            None => RendererKind::Nbconvert,
        };

        Ok(Self { project_root,
                  notebooks_dir,
                  output_dir,
                  timezone,
                  steps_file,
                  engine: EngineOptions { kernel_name: lookup("NBFLOW_KERNEL"),
                                          execution_timeout },
                  renderer })
    }

    /// Tabla de steps efectiva.
    pub fn step_table(&self) -> Result<StepTable, RegistryError> {
        match &self.steps_file {
            Some(path) => StepTable::from_file(path),
            None => Ok(StepTable::builtin()),
        }
    }
}

fn parse_var<T>(var: &'static str, value: String) -> Result<T, ConfigError>
    where T: FromStr,
          T::Err: std::fmt::Display
{
    value.parse::<T>().map_err(|e| ConfigError::Invalid { var,
                                                          reason: e.to_string(),
                                                          value })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_follow_the_project_layout() {
        let cfg = AppConfig::from_lookup(lookup(&[("NBFLOW_PROJECT_ROOT", "/proj")])).unwrap();
        assert_eq!(cfg.notebooks_dir, PathBuf::from("/proj/notebooks"));
        assert_eq!(cfg.output_dir, PathBuf::from("/proj/executed-notebooks"));
        assert_eq!(cfg.timezone, chrono_tz::US::Eastern);
        assert_eq!(cfg.renderer, RendererKind::Nbconvert);
        assert_eq!(cfg.engine, EngineOptions::default());
        assert!(cfg.steps_file.is_none());
        assert_eq!(cfg.step_table().unwrap(), StepTable::builtin());
    }

    #[test]
    fn overrides_are_applied() {
        let cfg = AppConfig::from_lookup(lookup(&[("NBFLOW_PROJECT_ROOT", "/proj"),
                                                  ("NBFLOW_OUTPUT_DIR", "/tmp/out"),
                                                  ("NBFLOW_TIMEZONE", "Europe/Madrid"),
                                                  ("NBFLOW_STEPS_FILE", "steps.json"),
                                                  ("NBFLOW_KERNEL", "python3"),
                                                  ("NBFLOW_EXECUTION_TIMEOUT", "600"),
                                                  ("NBFLOW_RENDERER", "Native")])).unwrap();
        assert_eq!(cfg.output_dir, PathBuf::from("/tmp/out"));
        assert_eq!(cfg.timezone, chrono_tz::Europe::Madrid);
        assert_eq!(cfg.steps_file, Some(PathBuf::from("/proj/steps.json")));
        assert_eq!(cfg.engine.kernel_name.as_deref(), Some("python3"));
        assert_eq!(cfg.engine.execution_timeout, Some(600));
        assert_eq!(cfg.renderer, RendererKind::Native);
    }

    #[test]
    fn invalid_values_name_the_variable() {
        let err = AppConfig::from_lookup(lookup(&[("NBFLOW_PROJECT_ROOT", "/p"), ("NBFLOW_TIMEZONE", "Mars/Base")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { var: "NBFLOW_TIMEZONE", .. }));

        let err = AppConfig::from_lookup(lookup(&[("NBFLOW_PROJECT_ROOT", "/p"), ("NBFLOW_EXECUTION_TIMEOUT", "soon")])).unwrap_err();
        assert!(err.to_string().contains("NBFLOW_EXECUTION_TIMEOUT"));

        let err = AppConfig::from_lookup(lookup(&[("NBFLOW_PROJECT_ROOT", "/p"), ("NBFLOW_RENDERER", "pdf")])).unwrap_err();
        assert!(err.to_string().contains("unknown renderer"));
    }
}
