//! Requieren un Python con papermill, nbconvert e ipykernel instalados:
//! `cargo test -p nb-engine -- --ignored`.
use std::fs;

use nb_core::{ExecutionEngine, NotebookDocument, RenderEngine};
use nb_engine::{EngineOptions, NotebookEngines};
use serde_json::json;

fn parameterized_notebook() -> serde_json::Value {
    json!({
        "nbformat": 4,
        "nbformat_minor": 5,
        "metadata": {"kernelspec": {"name": "python3", "display_name": "Python 3", "language": "python"}},
        "cells": [
            {"cell_type": "code", "id": "params", "metadata": {"tags": ["parameters"]},
             "execution_count": null, "source": "a = 0", "outputs": []},
            {"cell_type": "code", "id": "body", "metadata": {},
             "execution_count": null, "source": "open('marker.txt').read().strip() + str(a)", "outputs": []}
        ]
    })
}

#[test]
#[ignore]
fn papermill_injects_parameters_and_resolves_paths_against_input_root() {
    let tmp = tempfile::tempdir().unwrap();
    let input_dir = tmp.path().join("notebooks");
    fs::create_dir_all(&input_dir).unwrap();
    fs::write(input_dir.join("marker.txt"), "value=").unwrap();
    fs::write(input_dir.join("01.ipynb"), parameterized_notebook().to_string()).unwrap();
    let output = tmp.path().join("01-out.ipynb");

    let engines = NotebookEngines::init().expect("python bridge");
    let executor = engines.executor(EngineOptions::default());
    let params = json!({"a": 7}).as_object().cloned().unwrap();
    executor.execute(&input_dir.join("01.ipynb"), &output, &params, &input_dir).expect("papermill run");

    let doc = NotebookDocument::read(&output).unwrap();
    let rendered = serde_json::to_string(&doc.cells.last().unwrap().outputs()).unwrap();
    assert!(rendered.contains("value=7"));

    let html = engines.renderer().render(&doc).expect("nbconvert");
    assert!(html.contains("value=7"));
}

#[test]
#[ignore]
fn failing_notebook_surfaces_as_engine_failure() {
    let tmp = tempfile::tempdir().unwrap();
    let mut nb = parameterized_notebook();
    nb["cells"][1]["source"] = json!("1 / 0");
    fs::write(tmp.path().join("bad.ipynb"), nb.to_string()).unwrap();

    let engines = NotebookEngines::init().expect("python bridge");
    let err = engines.executor(EngineOptions::default())
                     .execute(&tmp.path().join("bad.ipynb"),
                              &tmp.path().join("bad-out.ipynb"),
                              &serde_json::Map::new(),
                              tmp.path())
                     .unwrap_err();
    assert!(err.to_string().contains("ZeroDivisionError"));
}
