//! nb-core: pipeline lineal de notebooks.
//!
//! Registry -> Selector -> Executor -> Reporter, conducido por el
//! `Orchestrator`. Los engines externos (ejecución y render) entran por los
//! traits `ExecutionEngine` y `RenderEngine`; este crate no depende de Python.
pub mod clock;
pub mod constants;
pub mod errors;
pub mod event;
pub mod executor;
pub mod hashing;
pub mod model;
pub mod orchestrator;
pub mod registry;
pub mod reporter;
pub mod selector;

pub use clock::{Clock, FixedClock, SystemClock};
pub use errors::{EngineFailure, ExecutionError, PipelineError, RegistryError, RenderError};
pub use event::{EventStore, InMemoryEventStore, RunEvent, RunEventKind, RunPhase};
pub use executor::{ExecutionEngine, Executor};
pub use model::{ExecutionArtifact, NotebookDocument, Parameters, ReportArtifact, RunRequest, StepSpec};
pub use orchestrator::{Orchestrator, RunSummary, StepOutcome};
pub use registry::{build_registry, build_registry_with, Registry, StepEntry, StepTable};
pub use reporter::{report_path_for, NativeHtmlRenderer, RenderEngine, Reporter};
pub use selector::{select, StepFilter};
