//! Selector: filtra el registry con un selector de texto libre.
//!
//! La salida respeta el orden del registry (no el del selector) y nunca
//! duplica un step, aunque varios términos lo seleccionen. Términos que no
//! coinciden con nada se ignoran sin error.

mod filter;

pub use filter::StepFilter;

use crate::model::StepSpec;
use crate::registry::Registry;

pub fn select(registry: &Registry, selector: &str) -> Vec<StepSpec> {
    select_with(registry, &StepFilter::parse(selector))
}

pub fn select_with(registry: &Registry, filter: &StepFilter) -> Vec<StepSpec> {
    registry.iter().filter(|s| filter.matches(&s.prefix)).cloned().collect()
}
