//! Taxonomía de errores del pipeline.
//!
//! Tres familias fatales (`RegistryError`, `ExecutionError`, `RenderError`) y
//! un envoltorio `PipelineError` que es lo que devuelve el orquestador. No hay
//! reintentos en ningún punto: cada error aborta la corrida.

use std::path::PathBuf;

use thiserror::Error;

/// Fallo reportado por un engine externo (ejecución o render).
///
/// Es deliberadamente opaco: el core sólo necesita el mensaje para
/// adjuntarlo al error contractual correspondiente.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct EngineFailure(pub String);

impl EngineFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Defecto de configuración detectado al construir el registry.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("cannot read notebooks directory {}: {source}", dir.display())]
    Io {
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("declared step '{prefix}' has no matching notebook in {}", dir.display())]
    MissingNotebook { prefix: String, dir: PathBuf },
    #[error("step prefix '{0}' is declared more than once")]
    DuplicatePrefix(String),
    #[error("invalid step table {}: {reason}", path.display())]
    InvalidTable { path: PathBuf, reason: String },
}

/// Fallo al ejecutar un notebook. Siempre identifica el step afectado.
#[derive(Debug, Error)]
pub enum ExecutionError {
    #[error("step '{prefix}' ({}) failed: {message}", source_path.display())]
    Engine {
        prefix: String,
        source_path: PathBuf,
        message: String,
    },
    #[error("step '{prefix}' ({}): cannot prepare output directory {}: {source}", source_path.display(), dir.display())]
    OutputDir {
        prefix: String,
        source_path: PathBuf,
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ExecutionError {
    pub fn prefix(&self) -> &str {
        match self {
            Self::Engine { prefix, .. } | Self::OutputDir { prefix, .. } => prefix,
        }
    }

    pub fn source_path(&self) -> &std::path::Path {
        match self {
            Self::Engine { source_path, .. } | Self::OutputDir { source_path, .. } => source_path,
        }
    }
}

/// Fallo al convertir un artifact ejecutado en reporte. Nunca revierte el
/// artifact ya escrito.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot parse notebook {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("notebook {} declares no nbformat version", path.display())]
    MissingSchemaVersion { path: PathBuf },
    #[error("notebook {} uses nbformat {found}, only {supported} is supported", path.display())]
    UnsupportedSchema { path: PathBuf, found: u64, supported: u64 },
    #[error("rendering engine rejected {}: {message}", path.display())]
    Engine { path: PathBuf, message: String },
    #[error("report path for {} would overwrite the executed notebook", path.display())]
    PathCollision { path: PathBuf },
    #[error("cannot write report {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Error de cualquier fase del pipeline.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Registry(#[from] RegistryError),
    #[error(transparent)]
    Execution(#[from] ExecutionError),
    #[error(transparent)]
    Render(#[from] RenderError),
}
