//! File access for the command-line tool.

use std::fs;
use std::path::Path;

use crate::Error;

/// Read a Markdown source file.
///
/// A missing or unreadable file is reported as [`Error::InputNotFound`] with
/// the underlying cause as its source. Bytes that are not valid UTF-8 are
/// replaced with U+FFFD.
pub fn read_source(path: &Path) -> Result<String, Error> {
    let bytes = fs::read(path).map_err(|source| Error::InputNotFound {
        path: path.to_path_buf(),
        source,
    })?;
    let source = match String::from_utf8(bytes) {
        Ok(source) => source,
        Err(err) => {
            tracing::warn!(
                path = %path.display(),
                offset = err.utf8_error().valid_up_to(),
                "source is not valid UTF-8, replacing invalid bytes"
            );
            String::from_utf8_lossy(err.as_bytes()).into_owned()
        }
    };
    tracing::debug!(path = %path.display(), bytes = source.len(), "read source");
    Ok(source)
}

/// Write converted text to `path`, replacing any existing file.
pub fn write_output(path: &Path, contents: &str) -> Result<(), Error> {
    fs::write(path, contents).map_err(|source| Error::OutputWrite {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = contents.len(), "wrote output");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.md");
        let err = read_source(&path).unwrap_err();
        assert!(matches!(err, Error::InputNotFound { .. }));
        assert!(err.to_string().contains("missing.md"));
    }

    #[test]
    fn test_write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.md");
        write_output(&path, "**x**").unwrap();
        assert_eq!(read_source(&path).unwrap(), "**x**");
    }

    #[test]
    fn test_invalid_utf8_is_decoded_lossily() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("latin1.md");
        fs::write(&path, b"caf\xe9 **x**").unwrap();
        assert_eq!(read_source(&path).unwrap(), "caf\u{FFFD} **x**");
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope").join("out.html");
        assert!(matches!(
            write_output(&path, "x"),
            Err(Error::OutputWrite { .. })
        ));
    }
}
