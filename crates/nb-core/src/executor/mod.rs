//! Executor: corre un notebook con sus parámetros contra el engine de
//! ejecución y produce un artifact con nombre sellado en el tiempo.
//!
//! El directorio de entrada se pasa explícitamente al engine (`input_root`).
//! Este crate nunca cambia el directorio de trabajo; papermill lo cambia y
//! lo restaura alrededor de cada ejecución.

pub mod naming;

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use log::{debug, error, info};

use crate::errors::{EngineFailure, ExecutionError};
use crate::model::{ExecutionArtifact, Parameters, RunRequest, StepSpec};

/// Contrato del engine de ejecución (papermill o un stub en tests).
pub trait ExecutionEngine {
    /// Ejecuta `input_path` celda a celda y escribe el resultado en
    /// `output_path`. Las rutas relativas del notebook resuelven contra
    /// `input_root`. `parameters` se inyecta tal cual.
    fn execute(&self,
               input_path: &Path,
               output_path: &Path,
               parameters: &Parameters,
               input_root: &Path)
               -> Result<(), EngineFailure>;
}

impl<E: ExecutionEngine + ?Sized> ExecutionEngine for Box<E> {
    fn execute(&self,
               input_path: &Path,
               output_path: &Path,
               parameters: &Parameters,
               input_root: &Path)
               -> Result<(), EngineFailure> {
        (**self).execute(input_path, output_path, parameters, input_root)
    }
}

#[derive(Debug)]
pub struct Executor<E> {
    engine: E,
    input_dir: PathBuf,
    output_dir: PathBuf,
}

impl<E: ExecutionEngine> Executor<E> {
    pub fn new(engine: E, input_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self { engine,
               input_dir: input_dir.into(),
               output_dir: output_dir.into() }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn input_dir(&self) -> &Path {
        &self.input_dir
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Construye el `RunRequest` de `step` sellado con `now` (UTC, sin
    /// horas repetidas al cambiar de horario).
    pub fn prepare(&self, step: &StepSpec, now: DateTime<Utc>) -> RunRequest {
        let stamp = naming::timestamp(&now);
        let output_path = self.output_dir.join(naming::output_file_name(step.source_path(), &stamp));
        RunRequest::new(step.clone(), output_path)
    }

    /// Ejecuta un `RunRequest` ya preparado. Sin reintentos.
    pub fn run(&self, request: &RunRequest) -> Result<ExecutionArtifact, ExecutionError> {
        let step = request.step();
        fs::create_dir_all(&self.output_dir).map_err(|source| ExecutionError::OutputDir { prefix: step.prefix.clone(),
                                                                                          source_path: step.source_path.clone(),
                                                                                          dir: self.output_dir.clone(),
                                                                                          source })?;
        info!("Input notebook path: {}", step.source_path.display());
        info!("Output notebook path: {}", request.output_path().display());
        debug!("execute:start prefix={} params={}", step.prefix, serde_json::Value::Object(step.parameters.clone()));

        self.engine
            .execute(step.source_path(), request.output_path(), &step.parameters, &self.input_dir)
            .map_err(|e| {
                error!("execute:failed prefix={} err={}", step.prefix, e);
                ExecutionError::Engine { prefix: step.prefix.clone(),
                                         source_path: step.source_path.clone(),
                                         message: e.to_string() }
            })?;

        debug!("execute:done prefix={} output={}", step.prefix, request.output_path().display());
        Ok(ExecutionArtifact::new(step.prefix.clone(), request.output_path()))
    }

    /// `prepare` + `run`.
    pub fn execute(&self, step: &StepSpec, now: DateTime<Utc>) -> Result<ExecutionArtifact, ExecutionError> {
        let request = self.prepare(step, now);
        self.run(&request)
    }
}
