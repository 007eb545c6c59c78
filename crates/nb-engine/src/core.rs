use pyo3::ffi::c_str;
use pyo3::prelude::*;
use pyo3::types::{PyDict, PyModule};
use std::ffi::CString;
use std::sync::OnceLock;

static BRIDGE_MODULE: OnceLock<Py<PyModule>> = OnceLock::new();

/// Carga `notebook_bridge.py` en el intérprete embebido (idempotente).
pub fn init_python() -> PyResult<()> {
    if BRIDGE_MODULE.get().is_some() {
        return Ok(());
    }
    Python::attach(|py| {
        let code = CString::new(include_str!("../python/notebook_bridge.py"))?;
        let module = PyModule::from_code(py,
                                         code.as_c_str(),
                                         c_str!("notebook_bridge.py"),
                                         c_str!("notebook_bridge"))?;
        BRIDGE_MODULE.set(module.unbind()).ok();
        Ok(())
    })
}

fn get_module(py: Python<'_>) -> PyResult<Py<PyModule>> {
    BRIDGE_MODULE.get().map(|module| module.clone_ref(py)).ok_or_else(|| {
        PyErr::new::<pyo3::exceptions::PyRuntimeError, _>("init_python() debe llamarse antes de usar el engine")
    })
}

/// Argumentos de `notebook_bridge.execute`.
pub struct ExecuteCall<'a> {
    pub input_path: &'a str,
    pub output_path: &'a str,
    pub parameters_json: &'a str,
    pub cwd: &'a str,
    pub kernel_name: Option<&'a str>,
    pub execution_timeout: Option<u64>,
}

pub fn execute_notebook(call: &ExecuteCall<'_>) -> PyResult<()> {
    Python::attach(|py| {
        let bridge_py = get_module(py)?;
        let bridge = bridge_py.bind(py);
        let kwargs = PyDict::new(py);
        if let Some(kernel) = call.kernel_name {
            kwargs.set_item("kernel_name", kernel)?;
        }
        if let Some(timeout) = call.execution_timeout {
            kwargs.set_item("execution_timeout", timeout)?;
        }
        bridge.getattr("execute")?
              .call((call.input_path, call.output_path, call.parameters_json, call.cwd), Some(&kwargs))?;
        Ok(())
    })
}

pub fn render_html(notebook_json: &str) -> PyResult<String> {
    Python::attach(|py| {
        let bridge_py = get_module(py)?;
        let bridge = bridge_py.bind(py);
        let body: String = bridge.getattr("render_html")?.call1((notebook_json,))?.extract()?;
        Ok(body)
    })
}
