/// Predicado de selección sobre el prefijo de un step.
///
/// El lenguaje es mínimo: términos separados por coma, cada uno una
/// subcadena (`Contains`), combinados con OR (`AnyOf`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepFilter {
    Contains(String),
    AnyOf(Vec<StepFilter>),
}

impl StepFilter {
    /// Parsea `"01,03"` como `AnyOf([Contains("01"), Contains("03")])`.
    ///
    /// Los términos no se recortan. Un término vacío (`""`, `"01,"`) es la
    /// subcadena vacía y por tanto selecciona todos los steps.
    pub fn parse(selector: &str) -> Self {
        StepFilter::AnyOf(selector.split(',').map(|t| StepFilter::Contains(t.to_string())).collect())
    }

    pub fn matches(&self, prefix: &str) -> bool {
        match self {
            StepFilter::Contains(term) => prefix.contains(term.as_str()),
            StepFilter::AnyOf(filters) => filters.iter().any(|f| f.matches(prefix)),
        }
    }

    /// Términos hoja, en el orden escrito.
    pub fn terms(&self) -> Vec<&str> {
        match self {
            StepFilter::Contains(term) => vec![term.as_str()],
            StepFilter::AnyOf(filters) => filters.iter().flat_map(|f| f.terms()).collect(),
        }
    }
}
