//! Modelos del pipeline (StepSpec, RunRequest, artifacts, documento notebook).

pub mod artifact;
pub mod notebook;
pub mod run_request;
pub mod step;

pub use artifact::{ExecutionArtifact, ReportArtifact};
pub use notebook::{Cell, CellType, NotebookDocument, SourceText};
pub use run_request::RunRequest;
pub use step::{Parameters, StepSpec};
