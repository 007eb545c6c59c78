use std::path::Path;
use std::process::{Command, Output};

fn nbflow(root: &Path, extra_env: &[(&str, &str)], args: &[&str]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_nbflow"));
    cmd.current_dir(root)
       .args(args)
       .env("NBFLOW_PROJECT_ROOT", root)
       .env("RUST_LOG", "off");
    for var in ["NBFLOW_NOTEBOOKS_DIR", "NBFLOW_OUTPUT_DIR", "NBFLOW_TIMEZONE", "NBFLOW_STEPS_FILE",
                "NBFLOW_KERNEL", "NBFLOW_EXECUTION_TIMEOUT", "NBFLOW_RENDERER"]
    {
        cmd.env_remove(var);
    }
    for (k, v) in extra_env {
        cmd.env(k, v);
    }
    cmd.output().unwrap()
}

#[test]
fn empty_project_exits_non_zero() {
    let tmp = tempfile::tempdir().unwrap();
    let out = nbflow(tmp.path(), &[], &["01"]);

    assert!(!out.status.success());
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("[nbflow] error"));
    assert!(out.stdout.is_empty());
}

#[test]
fn invalid_configuration_exits_with_code_two() {
    let tmp = tempfile::tempdir().unwrap();
    let out = nbflow(tmp.path(), &[("NBFLOW_TIMEZONE", "Mars/Base")], &[]);

    assert_eq!(out.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&out.stderr).contains("NBFLOW_TIMEZONE"));
}
