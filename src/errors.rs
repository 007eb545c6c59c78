use nb_core::{EngineFailure, PipelineError, RegistryError};
use nb_engine::EngineError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var}: valor inválido '{value}': {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
    #[error("no se pudo determinar el directorio actual: {0}")]
    CurrentDir(std::io::Error),
}

/// Error de la aplicación: configuración, arranque del engine o pipeline.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Engine(#[from] EngineError),
    #[error("renderer nativo: {0}")]
    Renderer(#[from] EngineFailure),
    #[error(transparent)]
    Pipeline(#[from] PipelineError),
}

impl From<RegistryError> for AppError {
    fn from(e: RegistryError) -> Self {
        AppError::Pipeline(e.into())
    }
}
