//! Tabla declarada de steps: prefijo -> parámetros.
//!
//! Es la contraparte escrita a mano del descubrimiento en disco. El orden de
//! la tabla no importa: el orden del registry lo dicta el nombre de archivo.
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::errors::RegistryError;
use crate::model::Parameters;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepEntry {
    pub prefix: String,
    #[serde(default)]
    pub params: Parameters,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StepTable {
    entries: Vec<StepEntry>,
}

impl StepTable {
    pub fn new(entries: Vec<StepEntry>) -> Self {
        Self { entries }
    }

    /// Tabla incorporada: un único step `01` con `{"a": 1}`.
    pub fn builtin() -> Self {
        let mut params = Parameters::new();
        params.insert("a".to_string(), json!(1));
        Self::new(vec![StepEntry { prefix: "01".to_string(),
                                   params }])
    }

    /// Carga una tabla JSON de la forma `[{"prefix": "01", "params": {...}}]`.
    pub fn from_file(path: &Path) -> Result<Self, RegistryError> {
        let raw = fs::read_to_string(path).map_err(|e| RegistryError::InvalidTable { path: path.to_path_buf(),
                                                                                       reason: e.to_string() })?;
        Self::from_json_str(path, &raw)
    }

    pub fn from_json_str(path: &Path, raw: &str) -> Result<Self, RegistryError> {
        serde_json::from_str(raw).map_err(|e| RegistryError::InvalidTable { path: path.to_path_buf(),
                                                                             reason: e.to_string() })
    }

    pub fn entries(&self) -> &[StepEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
