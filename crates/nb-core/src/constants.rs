//! Constantes del pipeline.
//!
//! Agrupa los nombres y formatos que forman parte del contrato observable en
//! disco: cambiar cualquiera de ellos cambia los nombres de los artifacts
//! producidos (y por tanto el orden natural de ejecuciones en el filesystem).

/// Extensión de los notebooks de entrada y de los artifacts ejecutados.
pub const NOTEBOOK_EXTENSION: &str = "ipynb";

/// Extensión del reporte estático derivado.
pub const REPORT_EXTENSION: &str = "html";

/// Formato del sello temporal insertado antes de la extensión (`stem-YYYYMMDD-HHMMSS.ipynb`).
pub const OUTPUT_TIMESTAMP_FORMAT: &str = "%Y%m%d-%H%M%S";

/// Formato usado al informar inicio/fin de una corrida.
pub const DISPLAY_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Versión mayor de nbformat soportada por el lector de documentos.
pub const SUPPORTED_NBFORMAT: u64 = 4;

/// Selector usado por la CLI cuando no se indica ninguno.
pub const DEFAULT_SELECTOR: &str = "01,02,03";

/// Directorio de notebooks de entrada, relativo a la raíz del proyecto.
pub const NOTEBOOKS_DIR: &str = "notebooks";

/// Directorio de notebooks ejecutados, relativo a la raíz del proyecto.
pub const EXECUTED_DIR: &str = "executed-notebooks";

/// Zona horaria de reporte por defecto.
pub const DEFAULT_TIMEZONE: &str = "US/Eastern";
