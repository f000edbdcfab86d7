//! One-shot line-based file reading.

use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::{Path, PathBuf},
};

/// Error returned by [`read_lines`].
///
/// The two variants correspond to the two failure sites of a line read:
/// the initial open, and a read error encountered mid-scan after the file
/// was opened. Both carry the offending path.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum ReadLinesError {
    /// The file could not be opened.
    #[display("failed to open {}: {source}", path.display())]
    Open {
        /// Path that could not be opened.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// A read error occurred while scanning lines.
    #[display("failed to read line {line} of {}: {source}", path.display())]
    Read {
        /// Path being read.
        path: PathBuf,
        /// 1-based number of the line on which the read failed.
        line: usize,
        /// Underlying I/O error.
        source: io::Error,
    },
}

/// Reads the file at `path` and returns its content as ordered lines.
///
/// Each element is one line of the file, in input order, with line
/// terminators (`\n` or `\r\n`) stripped. The content is treated as plain
/// text; no further encoding contract is imposed.
///
/// There is no retry: the first failure is returned to the caller as-is.
///
/// # Errors
///
/// Returns [`ReadLinesError::Open`] when the path cannot be opened and
/// [`ReadLinesError::Read`] when a read error occurs mid-scan.
///
/// # Examples
///
/// ```no_run
/// use quadrille_text::read_lines;
///
/// let lines = read_lines("puzzle-input.txt")?;
/// for line in &lines {
///     println!("{line}");
/// }
/// # Ok::<(), quadrille_text::ReadLinesError>(())
/// ```
pub fn read_lines(path: impl AsRef<Path>) -> Result<Vec<String>, ReadLinesError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| ReadLinesError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let mut lines = Vec::new();
    for (i, line) in BufReader::new(file).lines().enumerate() {
        let line = line.map_err(|source| ReadLinesError::Read {
            path: path.to_path_buf(),
            line: i + 1,
            source,
        })?;
        lines.push(line);
    }

    log::debug!("read {} lines from {}", lines.len(), path.display());
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("quadrille-lines-{}-{name}", std::process::id()))
    }

    #[test]
    fn test_reads_lines_in_order() {
        let path = temp_path("order");
        fs::write(&path, "alpha\nbeta\ngamma\n").unwrap();

        let lines = read_lines(&path).unwrap();
        assert_eq!(lines, ["alpha", "beta", "gamma"]);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_strips_carriage_returns() {
        let path = temp_path("crlf");
        fs::write(&path, "one\r\ntwo\r\nthree").unwrap();

        let lines = read_lines(&path).unwrap();
        assert_eq!(lines, ["one", "two", "three"]);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_missing_final_newline_keeps_last_line() {
        let path = temp_path("no-final-newline");
        fs::write(&path, "a\nb").unwrap();

        let lines = read_lines(&path).unwrap();
        assert_eq!(lines, ["a", "b"]);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_empty_file_yields_no_lines() {
        let path = temp_path("empty");
        fs::write(&path, "").unwrap();

        let lines = read_lines(&path).unwrap();
        assert!(lines.is_empty());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_preserves_interior_blank_lines() {
        let path = temp_path("blank");
        fs::write(&path, "a\n\nb\n").unwrap();

        let lines = read_lines(&path).unwrap();
        assert_eq!(lines, ["a", "", "b"]);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_missing_file_is_open_error() {
        let path = temp_path("does-not-exist");

        let err = read_lines(&path).unwrap_err();
        match &err {
            ReadLinesError::Open { path: p, source } => {
                assert_eq!(p, &path);
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            ReadLinesError::Read { .. } => panic!("expected open error, got {err}"),
        }
        assert!(err.to_string().contains("failed to open"));
    }
}
