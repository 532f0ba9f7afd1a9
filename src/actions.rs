//! GitHub Actions file commands: job summary and step outputs.

use log::debug;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

fn append(path: &Path, content: &str) -> Result<(), String> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| format!("Failed to open {}: {}", path.display(), e))?;
    file.write_all(content.as_bytes()).map_err(|e| format!("Failed to write {}: {}", path.display(), e))
}

/// Append `body` to the job summary file, newline-terminated
pub fn append_step_summary(path: &Path, body: &str) -> Result<(), String> {
    debug!("appending {} bytes to {}", body.len(), path.display());
    append(path, &format!("{}\n", body))
}

/// Record a multi-line step output using the `name<<DELIMITER` form
pub fn set_output(path: &Path, name: &str, value: &str) -> Result<(), String> {
    let delimiter = output_delimiter();
    if value.lines().any(|line| line == delimiter) {
        return Err(format!("Output {} contains its own delimiter {}", name, delimiter));
    }
    append(path, &format!("{}<<{}\n{}\n{}\n", name, delimiter, value, delimiter))
}

fn output_delimiter() -> String {
    let nanos = chrono::Local::now().timestamp_nanos_opt().unwrap_or_default();
    format!("ghadelimiter_{}_{}", std::process::id(), nanos)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_summary_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("summary.md");
        std::fs::write(&path, "previous step\n").unwrap();

        append_step_summary(&path, "## report").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "previous step\n## report\n");
    }

    #[test]
    fn test_set_output_uses_heredoc() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("output");

        set_output(&path, "body", "line 1\nline 2").unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = written.lines().collect();

        assert_eq!(lines.len(), 4);
        let delimiter = lines[0].strip_prefix("body<<").expect("heredoc header");
        assert!(delimiter.starts_with("ghadelimiter_"));
        assert_eq!(&lines[1..3], &["line 1", "line 2"]);
        assert_eq!(lines[3], delimiter);
    }

    #[test]
    fn test_unwritable_path() {
        let err = append_step_summary(Path::new("/nonexistent/dir/summary.md"), "x").unwrap_err();
        assert!(err.contains("/nonexistent/dir/summary.md"));
    }
}
