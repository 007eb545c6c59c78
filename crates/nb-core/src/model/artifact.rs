//! Artifacts en disco producidos por una corrida.
//!
//! Ambos son referencias a archivos: el filesystem es el dueño del contenido.
//! El `ExecutionArtifact` nunca se modifica una vez creado; el
//! `ReportArtifact` se sobreescribe si se regenera.
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Notebook ejecutado por el engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionArtifact {
    pub prefix: String,
    pub path: PathBuf,
}

impl ExecutionArtifact {
    pub fn new(prefix: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self { prefix: prefix.into(),
               path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Reporte HTML derivado 1:1 de un `ExecutionArtifact`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportArtifact {
    pub source: PathBuf,
    pub path: PathBuf,
}

impl ReportArtifact {
    pub fn path(&self) -> &Path {
        &self.path
    }
}
