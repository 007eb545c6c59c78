//! Reporter: convierte un notebook ejecutado en un HTML estático.
//!
//! El reporte se escribe junto al artifact, con el mismo nombre base. El
//! artifact ejecutado sólo se lee: un fallo de render lo deja intacto.

pub mod native;

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::constants::{NOTEBOOK_EXTENSION, REPORT_EXTENSION};
use crate::errors::{EngineFailure, RenderError};
use crate::model::{ExecutionArtifact, NotebookDocument, ReportArtifact};

pub use native::NativeHtmlRenderer;

/// Contrato del engine de render (nbconvert, el renderer nativo o un stub).
pub trait RenderEngine {
    /// Devuelve un cuerpo HTML autocontenido.
    fn render(&self, document: &NotebookDocument) -> Result<String, EngineFailure>;
}

impl<R: RenderEngine + ?Sized> RenderEngine for Box<R> {
    fn render(&self, document: &NotebookDocument) -> Result<String, EngineFailure> {
        (**self).render(document)
    }
}

/// Ruta del reporte: primera aparición de `ipynb` en el nombre de archivo
/// sustituida por `html`.
///
/// Un nombre con `ipynb` en el stem produce un reporte mal nombrado; el
/// esquema `stem-YYYYMMDD-HHMMSS.ipynb` del executor nunca lo provoca para
/// stems normales.
pub fn report_path_for(artifact_path: &Path) -> PathBuf {
    let name = artifact_path.file_name()
                            .map(|n| n.to_string_lossy().into_owned())
                            .unwrap_or_default();
    artifact_path.with_file_name(name.replacen(NOTEBOOK_EXTENSION, REPORT_EXTENSION, 1))
}

#[derive(Debug)]
pub struct Reporter<R> {
    engine: R,
}

impl<R: RenderEngine> Reporter<R> {
    pub fn new(engine: R) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &R {
        &self.engine
    }

    pub fn render(&self, artifact: &ExecutionArtifact) -> Result<ReportArtifact, RenderError> {
        let source = artifact.path();
        let report_path = report_path_for(source);
        if report_path == source {
            return Err(RenderError::PathCollision { path: source.to_path_buf() });
        }

        let document = NotebookDocument::read(source)?;
        debug!("render:start path={} nbformat={}.{} cells={}",
               source.display(),
               document.nbformat,
               document.nbformat_minor,
               document.cells.len());

        let body = self.engine
                       .render(&document)
                       .map_err(|e| RenderError::Engine { path: source.to_path_buf(),
                                                          message: e.to_string() })?;
        fs::write(&report_path, body).map_err(|e| RenderError::Write { path: report_path.clone(),
                                                                      source: e })?;

        info!("Exported {} to {}", display_name(source), display_name(&report_path));
        Ok(ReportArtifact { source: source.to_path_buf(),
                            path: report_path })
    }
}

fn display_name(path: &Path) -> String {
    path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default()
}
