use std::fs;

use tempfile::tempdir;

use section_cli::{Args, CliError, run};

fn args_for(input: &str) -> Args {
    Args {
        input: input.to_string(),
        diagram: false,
        output: None,
        format: None,
        config: None,
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_summary_and_diagram_for_right_triangle() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let input_path = temp_dir.path().join("triangle.txt");
    fs::write(&input_path, "# right triangle\n0 0\n4 0\n0 3\n").unwrap();

    let output_stem = temp_dir.path().join("triangle");
    let mut args = args_for(&input_path.to_string_lossy());
    args.diagram = true;
    args.output = Some(output_stem.to_string_lossy().to_string());

    run(&args).expect("CLI run failed");

    let svg_path = temp_dir.path().join("triangle.svg");
    let content = fs::read_to_string(&svg_path).expect("Diagram SVG not written");
    assert!(content.contains("<svg"));
    assert!(content.contains("polyline"));
}

#[test]
fn e2e_degenerate_input_fails() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let input_path = temp_dir.path().join("line.txt");
    fs::write(&input_path, "0 0\n1 1\n2 2\n").unwrap();

    let err = run(&args_for(&input_path.to_string_lossy())).unwrap_err();
    assert!(matches!(err, CliError::Geometry(_)));
}

#[test]
fn e2e_missing_input_fails() {
    let err = run(&args_for("no-such-file.txt")).unwrap_err();
    assert!(matches!(err, CliError::Io(_)));
}

#[test]
fn e2e_too_few_vertices_fails() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let input_path = temp_dir.path().join("pair.txt");
    fs::write(&input_path, "0 0\n1 0\n").unwrap();

    let err = run(&args_for(&input_path.to_string_lossy())).unwrap_err();
    assert!(matches!(err, CliError::Geometry(_)));
}
