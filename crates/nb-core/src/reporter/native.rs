//! Renderer HTML nativo (sin Python).
//!
//! Produce un HTML autocontenido y sencillo: fuentes de celdas, contador de
//! ejecución y outputs (texto, HTML, imágenes embebidas y tracebacks). Todo
//! el texto pasa por el autoescape de minijinja salvo los outputs
//! `text/html`, que se insertan tal cual como hace nbconvert.
use minijinja::{context, Environment};
use regex::Regex;
use serde::Serialize;
use serde_json::Value;

use super::RenderEngine;
use crate::errors::EngineFailure;
use crate::model::{CellType, NotebookDocument};

const TEMPLATE_NAME: &str = "report.html";

const REPORT_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{{ title }}</title>
<style>
body { font-family: sans-serif; margin: 2em; }
.cell { margin-bottom: 1.5em; }
.prompt { color: #303f9f; font-family: monospace; }
pre { background: #f7f7f7; padding: .5em; overflow-x: auto; }
pre.error { background: #fdd; }
</style>
</head>
<body>
{% for cell in cells %}<div class="cell {{ cell.kind }}">
{% if cell.kind == "code" %}<div class="prompt">In [{% if cell.execution_count is none %} {% else %}{{ cell.execution_count }}{% endif %}]:</div>
<pre class="input">{{ cell.source }}</pre>
{% elif cell.kind == "markdown" %}<div class="markdown"><pre>{{ cell.source }}</pre></div>
{% else %}<pre class="raw">{{ cell.source }}</pre>
{% endif %}{% for out in cell.outputs %}{% if out.kind == "html" %}<div class="output html">{{ out.text|safe }}</div>
{% elif out.kind == "image" %}<img class="output" src="data:{{ out.mime|safe }};base64,{{ out.text|safe }}">
{% elif out.kind == "error" %}<pre class="output error">{{ out.text }}</pre>
{% else %}<pre class="output">{{ out.text }}</pre>
{% endif %}{% endfor %}</div>
{% endfor %}</body>
</html>
"#;

const ANSI_ESCAPE: &str = r"\x1b\[[0-9;]*[A-Za-z]";

/// Plantilla y regex se compilan una vez; `render` sólo las usa.
#[derive(Debug, Clone)]
pub struct NativeHtmlRenderer {
    env: Environment<'static>,
    ansi: Regex,
}

impl NativeHtmlRenderer {
    pub fn new() -> Result<Self, EngineFailure> {
        let mut env = Environment::new();
        env.add_template(TEMPLATE_NAME, REPORT_TEMPLATE)
           .map_err(|e| EngineFailure::new(e.to_string()))?;
        let ansi = Regex::new(ANSI_ESCAPE).map_err(|e| EngineFailure::new(e.to_string()))?;
        Ok(Self { env, ansi })
    }
}

#[derive(Debug, Serialize)]
struct CellView {
    kind: &'static str,
    source: String,
    execution_count: Option<i64>,
    outputs: Vec<OutputView>,
}

#[derive(Debug, Serialize)]
struct OutputView {
    kind: &'static str,
    mime: String,
    text: String,
}

impl RenderEngine for NativeHtmlRenderer {
    fn render(&self, document: &NotebookDocument) -> Result<String, EngineFailure> {
        let cells: Vec<CellView> = document.cells
                                           .iter()
                                           .map(|cell| CellView { kind: match cell.cell_type {
                                                                      CellType::Code => "code",
                                                                      CellType::Markdown => "markdown",
                                                                      CellType::Raw => "raw",
                                                                  },
                                                                  source: cell.source.as_text(),
                                                                  execution_count: cell.execution_count(),
                                                                  outputs: cell.outputs()
                                                                               .iter()
                                                                               .filter_map(|o| output_view(o, &self.ansi))
                                                                               .collect() })
                                           .collect();

        let template = self.env
                           .get_template(TEMPLATE_NAME)
                           .map_err(|e| EngineFailure::new(e.to_string()))?;
        template.render(context! { title => document.title().unwrap_or("Notebook"), cells => cells })
                .map_err(|e| EngineFailure::new(e.to_string()))
    }
}

/// Texto nbformat: string o lista de strings.
fn multiline(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.clone()),
        Value::Array(items) => Some(items.iter().filter_map(Value::as_str).collect()),
        _ => None,
    }
}

fn output_view(output: &Value, ansi: &Regex) -> Option<OutputView> {
    let view = |kind, mime: &str, text: String| OutputView { kind,
                                                             mime: mime.to_string(),
                                                             text };
    match output.get("output_type").and_then(Value::as_str)? {
        "stream" => multiline(output.get("text")).map(|t| view("text", "text/plain", t)),
        "execute_result" | "display_data" => {
            let data = output.get("data")?;
            if let Some(html) = multiline(data.get("text/html")) {
                return Some(view("html", "text/html", html));
            }
            for mime in ["image/png", "image/jpeg"] {
                if let Some(img) = multiline(data.get(mime)) {
                    // sólo alfabeto base64: el valor se inserta sin escapar
                    let encoded: String = img.chars()
                                             .filter(|c| c.is_ascii_alphanumeric() || matches!(*c, '+' | '/' | '='))
                                             .collect();
                    return Some(view("image", mime, encoded));
                }
            }
            multiline(data.get("text/plain")).map(|t| view("text", "text/plain", t))
        }
        "error" => {
            let traceback = output.get("traceback")
                                  .and_then(Value::as_array)
                                  .map(|lines| lines.iter().filter_map(Value::as_str).collect::<Vec<_>>().join("\n"))
                                  .unwrap_or_default();
            let text = if traceback.is_empty() {
                format!("{}: {}",
                        output.get("ename").and_then(Value::as_str).unwrap_or("Error"),
                        output.get("evalue").and_then(Value::as_str).unwrap_or(""))
            } else {
                ansi.replace_all(&traceback, "").into_owned()
            };
            Some(view("error", "text/plain", text))
        }
        _ => None,
    }
}
