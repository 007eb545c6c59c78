use chrono::DateTime;
use chrono_tz::Tz;
use uuid::Uuid;

use crate::constants::DISPLAY_TIMESTAMP_FORMAT;
use crate::model::{ExecutionArtifact, ReportArtifact};

/// Resultado de un step completado (ejecutado y reportado).
#[derive(Debug, Clone, PartialEq)]
pub struct StepOutcome {
    pub prefix: String,
    pub execution: ExecutionArtifact,
    pub report: ReportArtifact,
}

/// Resumen de una corrida terminada en `Done`.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub run_id: Uuid,
    /// Prefijos seleccionados, en orden del registry.
    pub selected: Vec<String>,
    pub outcomes: Vec<StepOutcome>,
    pub started_at: DateTime<Tz>,
    pub ended_at: DateTime<Tz>,
    /// Segundos enteros transcurridos.
    pub elapsed_secs: i64,
}

impl RunSummary {
    pub fn executed(&self) -> usize {
        self.outcomes.len()
    }

    pub fn started_display(&self) -> String {
        self.started_at.format(DISPLAY_TIMESTAMP_FORMAT).to_string()
    }

    pub fn ended_display(&self) -> String {
        self.ended_at.format(DISPLAY_TIMESTAMP_FORMAT).to_string()
    }
}
