//! nb-engine: engines reales sobre el stack Python de notebooks.
//!
//! `PapermillEngine` implementa `ExecutionEngine` y `NbconvertRenderer`
//! implementa `RenderEngine`. Ambos comparten un módulo Python embebido que
//! se carga una vez con `NotebookEngines::init`.
use std::path::Path;

use log::debug;
use nb_core::{EngineFailure, ExecutionEngine, NotebookDocument, Parameters, RenderEngine};
use pyo3::PyErr;
use thiserror::Error;

pub mod core;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Error inicializando Python/papermill: {0}")]
    Init(PyErr),
    #[error("Error ejecutando notebook: {0}")]
    Execute(PyErr),
    #[error("Error renderizando HTML: {0}")]
    Render(PyErr),
    #[error("Error de serialización: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<EngineError> for EngineFailure {
    fn from(e: EngineError) -> Self {
        EngineFailure(e.to_string())
    }
}

/// Opciones reenviadas a papermill.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineOptions {
    pub kernel_name: Option<String>,
    /// Timeout por celda, en segundos.
    pub execution_timeout: Option<u64>,
}

/// Punto de entrada: inicializa el intérprete y entrega ambos engines.
pub struct NotebookEngines {
    _private: (),
}

impl NotebookEngines {
    pub fn init() -> Result<Self, EngineError> {
        core::init_python().map_err(EngineError::Init)?;
        Ok(Self { _private: () })
    }

    pub fn executor(&self, options: EngineOptions) -> PapermillEngine {
        PapermillEngine { options }
    }

    pub fn renderer(&self) -> NbconvertRenderer {
        NbconvertRenderer { _private: () }
    }
}

/// Ejecución vía `papermill.execute_notebook`, con `cwd` = raíz de entrada.
#[derive(Debug, Clone)]
pub struct PapermillEngine {
    options: EngineOptions,
}

impl PapermillEngine {
    pub fn options(&self) -> &EngineOptions {
        &self.options
    }
}

impl ExecutionEngine for PapermillEngine {
    fn execute(&self,
               input_path: &Path,
               output_path: &Path,
               parameters: &Parameters,
               input_root: &Path)
               -> Result<(), EngineFailure> {
        let parameters_json = serde_json::to_string(parameters).map_err(EngineError::from)?;
        let input = input_path.to_string_lossy();
        let output = output_path.to_string_lossy();
        let cwd = input_root.to_string_lossy();
        debug!("papermill:execute input={input} output={output} cwd={cwd}");
        core::execute_notebook(&core::ExecuteCall { input_path: &input,
                                                    output_path: &output,
                                                    parameters_json: &parameters_json,
                                                    cwd: &cwd,
                                                    kernel_name: self.options.kernel_name.as_deref(),
                                                    execution_timeout: self.options.execution_timeout })
            .map_err(EngineError::Execute)?;
        Ok(())
    }
}

/// Render vía `nbconvert.HTMLExporter`.
#[derive(Debug, Clone)]
pub struct NbconvertRenderer {
    _private: (),
}

impl RenderEngine for NbconvertRenderer {
    fn render(&self, document: &NotebookDocument) -> Result<String, EngineFailure> {
        let notebook_json = document.to_json().map_err(EngineError::from)?;
        let body = core::render_html(&notebook_json).map_err(EngineError::Render)?;
        Ok(body)
    }
}
