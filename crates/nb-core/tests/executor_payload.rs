mod support;

use chrono::{Duration, TimeZone, Utc};
use nb_core::{Executor, ExecutionError, StepSpec};
use serde_json::json;
use support::{params, write_notebooks, FailingEngine, RecordingEngine};

#[test]
fn parameters_reach_the_engine_verbatim_with_explicit_input_root() {
    let tmp = tempfile::tempdir().unwrap();
    let input = tmp.path().join("notebooks");
    let output = tmp.path().join("executed-notebooks");
    write_notebooks(&input, &["01-load.ipynb"]);
    let payload = params(json!({"a": 1, "nested": {"z": [1, 2.5, null], "y": "ñ"}, "flag": true}));
    let step = StepSpec::new("01", input.join("01-load.ipynb"), payload.clone());

    let executor = Executor::new(RecordingEngine::default(), &input, &output);
    let at = Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 45).unwrap();
    let artifact = executor.execute(&step, at).unwrap();

    let calls = executor.engine().calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].parameters, payload);
    assert_eq!(serde_json::to_value(&calls[0].parameters).unwrap(), serde_json::to_value(&payload).unwrap());
    assert_eq!(calls[0].input_root, input);
    assert_eq!(calls[0].input_path, input.join("01-load.ipynb"));
    assert_eq!(artifact.path, output.join("01-load-20240301-123045.ipynb"));
    assert_eq!(artifact.prefix, "01");
    assert!(artifact.path.exists(), "output directory is created on demand");
}

#[test]
fn repeated_runs_never_collide() {
    let tmp = tempfile::tempdir().unwrap();
    let input = tmp.path().join("notebooks");
    write_notebooks(&input, &["01-load.ipynb"]);
    let step = StepSpec::new("01", input.join("01-load.ipynb"), params(json!({})));
    let executor = Executor::new(RecordingEngine::default(), &input, tmp.path().join("out"));

    let t0 = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
    let first = executor.execute(&step, t0).unwrap();
    let second = executor.execute(&step, t0 + Duration::seconds(1)).unwrap();
    assert_ne!(first.path, second.path);
    assert!(first.path < second.path, "filesystem order follows run order");
}

#[test]
fn naming_is_stamped_in_utc() {
    let executor = Executor::new(RecordingEngine::default(), "/nb", "/out");
    let step = StepSpec::new("02", "/nb/02-clean.ipynb", params(json!({})));
    let req = executor.prepare(&step, Utc.with_ymd_and_hms(2024, 1, 15, 3, 4, 5).unwrap());
    assert_eq!(req.output_path(), std::path::Path::new("/out/02-clean-20240115-030405.ipynb"));
    assert_eq!(req.step(), &step);
}

#[test]
fn runs_an_hour_apart_on_fall_back_night_get_distinct_names() {
    // 05:30Z y 06:30Z son ambas 01:30 en US/Eastern
    let executor = Executor::new(RecordingEngine::default(), "/nb", "/out");
    let step = StepSpec::new("01", "/nb/01.ipynb", params(json!({})));
    let first = executor.prepare(&step, Utc.with_ymd_and_hms(2024, 11, 3, 5, 30, 0).unwrap());
    let second = executor.prepare(&step, Utc.with_ymd_and_hms(2024, 11, 3, 6, 30, 0).unwrap());
    assert_ne!(first.output_path(), second.output_path());
    assert!(first.output_path() < second.output_path());
}

#[test]
fn engine_failure_carries_prefix_and_source_path() {
    let tmp = tempfile::tempdir().unwrap();
    let step = StepSpec::new("03", tmp.path().join("03-model.ipynb"), params(json!({})));
    let executor = Executor::new(FailingEngine::default(), tmp.path(), tmp.path().join("out"));

    let err = executor.execute(&step, Utc::now()).unwrap_err();
    assert!(matches!(&err, ExecutionError::Engine { message, .. } if message.contains("ZeroDivisionError")));
    assert_eq!(err.prefix(), "03");
    assert_eq!(err.source_path(), tmp.path().join("03-model.ipynb"));
    assert_eq!(*executor.engine().attempts.borrow(), 1, "no retries");
}
