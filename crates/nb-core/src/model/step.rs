use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Parámetros inyectados a un notebook: objeto JSON plano.
pub type Parameters = Map<String, Value>;

/// Un step conocido por el registry: notebook + prefijo + parámetros.
///
/// Invariantes (garantizadas por `build_registry`): `prefix` es único dentro
/// del registry y `source_path` apunta a un notebook existente.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepSpec {
    pub prefix: String,
    pub source_path: PathBuf,
    pub parameters: Parameters,
}

impl StepSpec {
    pub fn new(prefix: impl Into<String>, source_path: impl Into<PathBuf>, parameters: Parameters) -> Self {
        Self { prefix: prefix.into(),
               source_path: source_path.into(),
               parameters }
    }

    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    /// Nombre de archivo del notebook fuente (vacío si la ruta no tiene uno).
    pub fn file_name(&self) -> String {
        self.source_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}
