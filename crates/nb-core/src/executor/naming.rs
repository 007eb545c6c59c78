//! Nombres de salida sellados con tiempo.
//!
//! El sello va siempre en UTC: una zona con horario de verano repite una
//! hora al atrasar el reloj y dos corridas podrían compartir nombre.
use std::path::Path;

use chrono::{DateTime, Utc};

use crate::constants::{NOTEBOOK_EXTENSION, OUTPUT_TIMESTAMP_FORMAT};

/// `YYYYMMDD-HHMMSS` en UTC.
pub fn timestamp(at: &DateTime<Utc>) -> String {
    at.format(OUTPUT_TIMESTAMP_FORMAT).to_string()
}

/// Inserta `-<stamp>` justo antes de la extensión: `01-load.ipynb` ->
/// `01-load-20240301-120000.ipynb`. Sin extensión se usa `.ipynb`.
pub fn output_file_name(source: &Path, stamp: &str) -> String {
    let stem = source.file_stem().map(|s| s.to_string_lossy().into_owned()).unwrap_or_default();
    let ext = source.extension()
                    .map(|e| e.to_string_lossy().into_owned())
                    .unwrap_or_else(|| NOTEBOOK_EXTENSION.to_string());
    format!("{stem}-{stamp}.{ext}")
}
