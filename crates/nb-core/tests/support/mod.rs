//! Helpers compartidos por los tests de integración: engines stub y
//! notebooks mínimos en un directorio temporal.
#![allow(dead_code)]

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

use nb_core::{EngineFailure, ExecutionEngine, NotebookDocument, Parameters, RenderEngine};
use serde_json::{json, Value};

/// Una invocación registrada del engine de ejecución.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub parameters: Parameters,
    pub input_root: PathBuf,
}

/// Engine que registra cada payload y copia el notebook de entrada a la
/// salida (como haría papermill sin celdas que fallen).
#[derive(Debug, Default)]
pub struct RecordingEngine {
    pub calls: RefCell<Vec<RecordedCall>>,
}

impl RecordingEngine {
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.borrow().clone()
    }
}

impl ExecutionEngine for RecordingEngine {
    fn execute(&self,
               input_path: &Path,
               output_path: &Path,
               parameters: &Parameters,
               input_root: &Path)
               -> Result<(), EngineFailure> {
        self.calls.borrow_mut().push(RecordedCall { input_path: input_path.to_path_buf(),
                                                    output_path: output_path.to_path_buf(),
                                                    parameters: parameters.clone(),
                                                    input_root: input_root.to_path_buf() });
        fs::copy(input_path, output_path).map_err(|e| EngineFailure::new(e.to_string()))?;
        Ok(())
    }
}

/// Engine que falla siempre, como un notebook que lanza una excepción.
#[derive(Debug, Default)]
pub struct FailingEngine {
    pub attempts: RefCell<usize>,
}

impl ExecutionEngine for FailingEngine {
    fn execute(&self, _: &Path, _: &Path, _: &Parameters, _: &Path) -> Result<(), EngineFailure> {
        *self.attempts.borrow_mut() += 1;
        Err(EngineFailure::new("PapermillExecutionError: ZeroDivisionError"))
    }
}

/// Renderer que cuenta llamadas y devuelve un HTML trivial.
#[derive(Debug, Default)]
pub struct CountingRenderer {
    pub renders: RefCell<usize>,
}

impl RenderEngine for CountingRenderer {
    fn render(&self, document: &NotebookDocument) -> Result<String, EngineFailure> {
        *self.renders.borrow_mut() += 1;
        Ok(format!("<html><body>{} cells</body></html>", document.cells.len()))
    }
}

#[derive(Debug, Default)]
pub struct RejectingRenderer;

impl RenderEngine for RejectingRenderer {
    fn render(&self, _: &NotebookDocument) -> Result<String, EngineFailure> {
        Err(EngineFailure::new("template error"))
    }
}

pub fn notebook_json(nbformat: u64) -> Value {
    json!({
        "nbformat": nbformat,
        "nbformat_minor": 5,
        "metadata": {},
        "cells": [
            {"cell_type": "code", "id": "p", "metadata": {"tags": ["parameters"]},
             "execution_count": null, "source": "a = 0", "outputs": []}
        ]
    })
}

/// Escribe `names` como notebooks v4 válidos en `dir`.
pub fn write_notebooks(dir: &Path, names: &[&str]) {
    fs::create_dir_all(dir).unwrap();
    for name in names {
        fs::write(dir.join(name), notebook_json(4).to_string()).unwrap();
    }
}

pub fn params(value: Value) -> Parameters {
    value.as_object().cloned().unwrap()
}
