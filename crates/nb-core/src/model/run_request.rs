use std::path::{Path, PathBuf};

use super::StepSpec;

/// Pedido de ejecución de un step: inmutable una vez construido.
///
/// Se crea justo antes de invocar al engine (ver `Executor::prepare`) y se
/// descarta después.
#[derive(Debug, Clone, PartialEq)]
pub struct RunRequest {
    step: StepSpec,
    output_path: PathBuf,
}

impl RunRequest {
    pub fn new(step: StepSpec, output_path: PathBuf) -> Self {
        Self { step, output_path }
    }

    pub fn step(&self) -> &StepSpec {
        &self.step
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }
}
