//! Run Registry: catálogo ordenado de steps conocidos.
//!
//! Se construye una sola vez al arrancar, cruzando los notebooks encontrados
//! en disco con la `StepTable` declarada. El orden resultante (nombre de
//! archivo, lexicográfico) es el orden autoritativo de todo el pipeline.

pub mod table;

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::constants::NOTEBOOK_EXTENSION;
use crate::errors::RegistryError;
use crate::model::StepSpec;

pub use table::{StepEntry, StepTable};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Registry {
    steps: Vec<StepSpec>,
}

impl Registry {
    /// Construye un registry desde steps ya resueltos. No valida contra disco;
    /// útil para tests y para callers que componen su propio catálogo.
    pub fn from_steps(steps: Vec<StepSpec>) -> Self {
        Self { steps }
    }

    pub fn steps(&self) -> &[StepSpec] {
        &self.steps
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StepSpec> {
        self.steps.iter()
    }

    pub fn get(&self, prefix: &str) -> Option<&StepSpec> {
        self.steps.iter().find(|s| s.prefix == prefix)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a StepSpec;
    type IntoIter = std::slice::Iter<'a, StepSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

/// Registry con la tabla incorporada (`StepTable::builtin`).
pub fn build_registry(notebooks_dir: &Path) -> Result<Registry, RegistryError> {
    build_registry_with(notebooks_dir, &StepTable::builtin())
}

/// Cruza los notebooks de `notebooks_dir` con `table`.
///
/// Cada prefijo declarado se asigna al primer notebook (en orden de nombre)
/// cuyo nombre de archivo empieza por él.
pub fn build_registry_with(notebooks_dir: &Path, table: &StepTable) -> Result<Registry, RegistryError> {
    let notebooks = discover_notebooks(notebooks_dir)?;
    debug!("registry:discover dir={} found={}", notebooks_dir.display(), notebooks.len());

    let mut seen: HashSet<&str> = HashSet::new();
    let mut steps: Vec<StepSpec> = Vec::with_capacity(table.len());
    for entry in table.entries() {
        if !seen.insert(entry.prefix.as_str()) {
            return Err(RegistryError::DuplicatePrefix(entry.prefix.clone()));
        }
        let mut matching = notebooks.iter().filter(|p| file_name_of(p).starts_with(&entry.prefix));
        let path = matching.next()
                           .ok_or_else(|| RegistryError::MissingNotebook { prefix: entry.prefix.clone(),
                                                                           dir: notebooks_dir.to_path_buf() })?;
        if let Some(other) = matching.next() {
            warn!("registry:ambiguous prefix={} using={} ignored={}",
                  entry.prefix,
                  path.display(),
                  other.display());
        }
        steps.push(StepSpec::new(entry.prefix.clone(), path.clone(), entry.params.clone()));
    }

    steps.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(Registry::from_steps(steps))
}

/// Lista los `*.ipynb` (archivos regulares) ordenados por nombre.
pub fn discover_notebooks(notebooks_dir: &Path) -> Result<Vec<PathBuf>, RegistryError> {
    let io_err = |source: std::io::Error| RegistryError::Io { dir: notebooks_dir.to_path_buf(),
                                              source };
    let mut found = Vec::new();
    for entry in fs::read_dir(notebooks_dir).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        let is_notebook = path.extension().is_some_and(|ext| ext == NOTEBOOK_EXTENSION);
        if is_notebook && path.is_file() {
            found.push(path);
        }
    }
    found.sort_by_key(|p| file_name_of(p));
    Ok(found)
}

fn file_name_of(path: &Path) -> String {
    path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default()
}
