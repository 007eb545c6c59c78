//! Tipos de evento de una corrida y estructura `RunEvent`.
//!
//! El orquestador emite un evento por cada transición de su máquina de
//! estados. La secuencia es la traza observable de la corrida: a partir de
//! ella se puede verificar, por ejemplo, que un step fallido nunca llegó a la
//! fase de reporte.
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Fase de la máquina de estados del orquestador.
///
/// Transiciones válidas:
/// - `Start` -> `Select`
/// - `Select` -> `Execute` | `Done`
/// - `Execute` -> `Report` | `Failed`
/// - `Report` -> `Execute` | `Done` | `Failed`
/// - `Start`/`Select` -> `Failed` (registry inválido)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunPhase {
    Start,
    Select,
    Execute,
    Report,
    Done,
    Failed,
}

impl RunPhase {
    pub fn can_transition_to(self, next: RunPhase) -> bool {
        use RunPhase::*;
        matches!((self, next),
                 (Start, Select)
                 | (Start, Failed)
                 | (Select, Execute)
                 | (Select, Done)
                 | (Select, Failed)
                 | (Execute, Report)
                 | (Execute, Failed)
                 | (Report, Execute)
                 | (Report, Done)
                 | (Report, Failed))
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, RunPhase::Done | RunPhase::Failed)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RunEventKind {
    /// Primer evento de toda corrida.
    RunStarted { selector: String },
    /// Resultado del selector, en orden del registry.
    StepsSelected { prefixes: Vec<String> },
    /// Se construyó el RunRequest y se invoca al engine de ejecución.
    StepStarted { prefix: String, output_path: PathBuf },
    /// El engine terminó; `params_hash` identifica el payload inyectado.
    StepExecuted {
        prefix: String,
        output_path: PathBuf,
        params_hash: String,
    },
    ReportWritten { prefix: String, report_path: PathBuf },
    /// Fallo terminal: la corrida no continúa.
    StepFailed {
        prefix: String,
        phase: RunPhase,
        message: String,
    },
    RunCompleted { executed: usize, elapsed_secs: i64 },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunEvent {
    pub seq: u64,
    pub run_id: Uuid,
    pub kind: RunEventKind,
    pub ts: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::RunPhase::*;

    #[test]
    fn phase_transitions_follow_the_pipeline() {
        assert!(Start.can_transition_to(Select));
        assert!(Select.can_transition_to(Done));
        assert!(Report.can_transition_to(Execute));
        assert!(!Execute.can_transition_to(Done));
        assert!(!Done.can_transition_to(Execute));
        assert!(!Failed.can_transition_to(Select));
        assert!(Failed.is_terminal() && Done.is_terminal());
    }
}
