//! Orquestador: SELECT -> (EXECUTE -> REPORT)* -> DONE, estrictamente
//! secuencial.
//!
//! Un step termina (o falla) antes de que empiece el siguiente. Cualquier
//! fallo de ejecución o de render es fatal para toda la corrida: los steps no
//! declaran dependencias, pero uno posterior puede leer de disco lo que
//! escribió uno anterior.

mod summary;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use log::{debug, error, info};
use uuid::Uuid;

use crate::clock::{Clock, SystemClock};
use crate::constants::DISPLAY_TIMESTAMP_FORMAT;
use crate::errors::PipelineError;
use crate::event::{EventStore, InMemoryEventStore, RunEvent, RunEventKind, RunPhase};
use crate::executor::{ExecutionEngine, Executor};
use crate::hashing::params_hash;
use crate::model::RunRequest;
use crate::registry::Registry;
use crate::reporter::{RenderEngine, Reporter};
use crate::selector::select;

pub use summary::{RunSummary, StepOutcome};

pub struct Orchestrator<E, R, S = InMemoryEventStore> {
    registry: Registry,
    executor: Executor<E>,
    reporter: Reporter<R>,
    event_store: S,
    clock: Box<dyn Clock>,
    timezone: Tz,
    phase: RunPhase,
}

impl<E, R, S> Orchestrator<E, R, S>
    where E: ExecutionEngine,
          R: RenderEngine,
          S: EventStore
{
    pub fn new(registry: Registry, executor: Executor<E>, reporter: Reporter<R>, event_store: S, timezone: Tz) -> Self {
        Self { registry,
               executor,
               reporter,
               event_store,
               clock: Box::new(SystemClock),
               timezone,
               phase: RunPhase::Start }
    }

    /// Sustituye el reloj del sistema (tests).
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn executor(&self) -> &Executor<E> {
        &self.executor
    }

    pub fn reporter(&self) -> &Reporter<R> {
        &self.reporter
    }

    pub fn event_store(&self) -> &S {
        &self.event_store
    }

    pub fn events(&self, run_id: Uuid) -> Vec<RunEvent> {
        self.event_store.list(run_id)
    }

    /// Fase en la que quedó la última corrida.
    pub fn phase(&self) -> RunPhase {
        self.phase
    }

    /// Los `RunRequest` que produciría `selector` ahora mismo, sin ejecutar nada.
    pub fn plan(&self, selector: &str) -> Vec<RunRequest> {
        let now = self.clock.now();
        select(&self.registry, selector).iter()
                                         .map(|step| self.executor.prepare(step, now))
                                         .collect()
    }

    /// Ejecuta todos los steps seleccionados por `selector`.
    pub fn run(&mut self, selector: &str) -> Result<RunSummary, PipelineError> {
        let run_id = Uuid::new_v4();
        self.phase = RunPhase::Start;
        let started = self.clock.now();
        info!("Started at: {}", self.display(started));
        self.event_store.append_kind(run_id, RunEventKind::RunStarted { selector: selector.to_string() });

        self.transition(RunPhase::Select);
        let selected = select(&self.registry, selector);
        let prefixes: Vec<String> = selected.iter().map(|s| s.prefix.clone()).collect();
        debug!("run:selected run_id={run_id} selector={selector:?} steps={prefixes:?}");
        self.event_store.append_kind(run_id, RunEventKind::StepsSelected { prefixes: prefixes.clone() });

        let mut outcomes = Vec::with_capacity(selected.len());
        for step in &selected {
            self.transition(RunPhase::Execute);
            let request = self.executor.prepare(step, self.clock.now());
            self.event_store.append_kind(run_id,
                                         RunEventKind::StepStarted { prefix: step.prefix.clone(),
                                                                     output_path: request.output_path().to_path_buf() });
            let execution = match self.executor.run(&request) {
                Ok(artifact) => artifact,
                Err(e) => return Err(self.fail(run_id, &step.prefix, e.into())),
            };
            self.event_store.append_kind(run_id,
                                         RunEventKind::StepExecuted { prefix: step.prefix.clone(),
                                                                      output_path: execution.path.clone(),
                                                                      params_hash: params_hash(&step.parameters) });

            self.transition(RunPhase::Report);
            let report = match self.reporter.render(&execution) {
                Ok(report) => report,
                Err(e) => return Err(self.fail(run_id, &step.prefix, e.into())),
            };
            self.event_store.append_kind(run_id,
                                         RunEventKind::ReportWritten { prefix: step.prefix.clone(),
                                                                       report_path: report.path.clone() });
            outcomes.push(StepOutcome { prefix: step.prefix.clone(),
                                        execution,
                                        report });
        }

        self.transition(RunPhase::Done);
        let ended = self.clock.now();
        let elapsed_secs = (ended - started).num_seconds();
        self.event_store.append_kind(run_id,
                                     RunEventKind::RunCompleted { executed: outcomes.len(),
                                                                  elapsed_secs });
        info!("Ended at: {} ({}s)", self.display(ended), elapsed_secs);

        Ok(RunSummary { run_id,
                        selected: prefixes,
                        outcomes,
                        started_at: started.with_timezone(&self.timezone),
                        ended_at: ended.with_timezone(&self.timezone),
                        elapsed_secs })
    }

    fn transition(&mut self, next: RunPhase) {
        debug_assert!(self.phase.can_transition_to(next),
                      "invalid phase transition {:?} -> {:?}",
                      self.phase,
                      next);
        self.phase = next;
    }

    fn fail(&mut self, run_id: Uuid, prefix: &str, err: PipelineError) -> PipelineError {
        error!("run:failed run_id={run_id} prefix={prefix} phase={:?} err={err}", self.phase);
        self.event_store.append_kind(run_id,
                                     RunEventKind::StepFailed { prefix: prefix.to_string(),
                                                                phase: self.phase,
                                                                message: err.to_string() });
        self.transition(RunPhase::Failed);
        err
    }

    fn display(&self, at: DateTime<Utc>) -> String {
        at.with_timezone(&self.timezone).format(DISPLAY_TIMESTAMP_FORMAT).to_string()
    }
}
