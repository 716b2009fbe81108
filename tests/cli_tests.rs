// Tests for the command-line interface.

#[cfg(test)]
mod tests {
    use assert_cmd::Command;
    use predicates::prelude::*;
    use serde_json::Value;
    use std::fs;
    use std::path::PathBuf;

    fn get_test_data_path(file_name: &str) -> PathBuf {
        let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        path.push("tests");
        path.push("samples");
        path.push(file_name);
        path
    }

    #[test]
    fn test_prints_document_to_stdout() {
        let output = Command::cargo_bin("swagger-spec-converter")
            .unwrap()
            .arg("--input")
            .arg(get_test_data_path("riot_model.json"))
            .output()
            .unwrap();

        assert!(output.status.success());
        let document: Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(document["swagger"], "2.0");
        assert_eq!(document["info"]["version"].as_str().map(str::len), Some(64));
    }

    #[test]
    fn test_compact_output_is_single_line() {
        Command::cargo_bin("swagger-spec-converter")
            .unwrap()
            .args(["--compact", "--title", "Compact API", "--input"])
            .arg(get_test_data_path("riot_model.json"))
            .assert()
            .success()
            .stdout(predicate::str::contains("\"title\":\"Compact API\""));
    }

    #[test]
    fn test_writes_document_to_output_dir() {
        let output_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("target")
            .join("test-output")
            .join("cli");

        // Clean previous test output
        if output_dir.exists() {
            fs::remove_dir_all(&output_dir).unwrap();
        }

        Command::cargo_bin("swagger-spec-converter")
            .unwrap()
            .arg("--input")
            .arg(get_test_data_path("riot_model.json"))
            .arg("--output-dir")
            .arg(&output_dir)
            .assert()
            .success();

        assert!(output_dir.join("swaggerspec-2.0.json").exists());
    }

    #[test]
    fn test_missing_input_fails() {
        Command::cargo_bin("swagger-spec-converter")
            .unwrap()
            .arg("--input")
            .arg(get_test_data_path("does_not_exist.json"))
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("Error converting API model"));
    }
}
