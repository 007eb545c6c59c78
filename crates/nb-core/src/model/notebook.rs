//! Lector de documentos notebook (nbformat).
//!
//! Sólo se modela lo que el pipeline necesita leer (versión, celdas, fuentes y
//! outputs); el resto de campos se conserva en `extra` para poder
//! re-serializar el documento tal cual hacia el engine de render.
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::constants::SUPPORTED_NBFORMAT;
use crate::errors::RenderError;

/// Texto multilínea de nbformat: string único o lista de líneas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SourceText {
    Text(String),
    Lines(Vec<String>),
}

impl SourceText {
    pub fn as_text(&self) -> String {
        match self {
            SourceText::Text(s) => s.clone(),
            SourceText::Lines(lines) => lines.concat(),
        }
    }
}

impl Default for SourceText {
    fn default() -> Self {
        SourceText::Text(String::new())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellType {
    Code,
    Markdown,
    Raw,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    pub cell_type: CellType,
    #[serde(default)]
    pub source: SourceText,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outputs: Option<Vec<Value>>,
    /// metadata, id, execution_count, attachments...
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Cell {
    pub fn execution_count(&self) -> Option<i64> {
        self.extra.get("execution_count").and_then(Value::as_i64)
    }

    pub fn outputs(&self) -> &[Value] {
        self.outputs.as_deref().unwrap_or(&[])
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotebookDocument {
    pub nbformat: u64,
    #[serde(default)]
    pub nbformat_minor: u64,
    #[serde(default)]
    pub metadata: Map<String, Value>,
    #[serde(default)]
    pub cells: Vec<Cell>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl NotebookDocument {
    /// Lee y valida un notebook desde disco.
    pub fn read(path: &Path) -> Result<Self, RenderError> {
        let raw = fs::read_to_string(path).map_err(|source| RenderError::Read { path: path.to_path_buf(),
                                                                                   source })?;
        Self::parse(path, &raw)
    }

    /// Parsea el JSON de un notebook. La versión declarada se valida antes de
    /// mapear la estructura: un documento v3 (`worksheets`) se rechaza como
    /// versión no soportada, no como JSON inválido.
    pub fn parse(path: &Path, raw: &str) -> Result<Self, RenderError> {
        let value: Value = serde_json::from_str(raw).map_err(|source| RenderError::Parse { path: path.to_path_buf(),
                                                                                          source })?;
        let found = value.get("nbformat")
                         .and_then(Value::as_u64)
                         .ok_or_else(|| RenderError::MissingSchemaVersion { path: path.to_path_buf() })?;
        if found != SUPPORTED_NBFORMAT {
            return Err(RenderError::UnsupportedSchema { path: path.to_path_buf(),
                                                        found,
                                                        supported: SUPPORTED_NBFORMAT });
        }
        serde_json::from_value(value).map_err(|source| RenderError::Parse { path: path.to_path_buf(),
                                                                           source })
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Título para el reporte: `metadata.title` si existe.
    pub fn title(&self) -> Option<&str> {
        self.metadata.get("title").and_then(Value::as_str)
    }
}
