//! nbflow
//!
//! Ejecuta notebooks parametrizados seleccionados por prefijo y exporta cada
//! notebook ejecutado a HTML:
//! - `config` resuelve rutas, zona horaria y opciones de engine desde el entorno.
//! - `run` arma registry + engines + orquestador y ejecuta un selector.

pub mod config;
pub mod errors;

use log::info;
use nb_core::{build_registry_with, Executor, InMemoryEventStore, NativeHtmlRenderer, Orchestrator, RenderEngine,
              Reporter, RunSummary};
use nb_engine::NotebookEngines;

use crate::config::{AppConfig, RendererKind};
use crate::errors::AppError;

/// Construye el pipeline real (papermill + renderer configurado) y ejecuta
/// `selector`.
pub fn run(config: &AppConfig, selector: &str) -> Result<RunSummary, AppError> {
    let table = config.step_table()?;
    let registry = build_registry_with(&config.notebooks_dir, &table)?;
    info!("Registry: {} step(s) in {}", registry.len(), config.notebooks_dir.display());

    let engines = NotebookEngines::init()?;
    let renderer: Box<dyn RenderEngine> = match config.renderer {
        RendererKind::Nbconvert => Box::new(engines.renderer()),
        RendererKind::Native => Box::new(NativeHtmlRenderer::new()?),
    };
    let executor = Executor::new(engines.executor(config.engine.clone()),
                                 &config.notebooks_dir,
                                 &config.output_dir);

    let mut orchestrator = Orchestrator::new(registry,
                                             executor,
                                             Reporter::new(renderer),
                                             InMemoryEventStore::default(),
                                             config.timezone);
    Ok(orchestrator.run(selector)?)
}
