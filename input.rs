use std::fs;
use std::path::Path;

use log::debug;

use crate::error::WordCountError;

/// Read the whole file and split it into lines.
pub fn read_lines(path: &Path) -> Result<Vec<String>, WordCountError> {
    let contents = fs::read_to_string(path).map_err(|source| WordCountError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let lines: Vec<String> = contents.lines().map(String::from).collect();
    debug!("Read {} lines from {}", lines.len(), path.display());
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn splits_on_unix_and_windows_newlines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "first line\r\nsecond\nthird").unwrap();

        let lines = read_lines(file.path()).unwrap();
        assert_eq!(lines, ["first line", "second", "third"]);
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.txt");

        match read_lines(&path) {
            Err(WordCountError::Read { path: failed, .. }) => assert_eq!(failed, path),
            Ok(lines) => panic!("expected a read error, got {} lines", lines.len()),
        }
    }

    #[test]
    fn invalid_utf8_is_a_read_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0x66, 0x6f, 0xff, 0xfe]).unwrap();

        let err = read_lines(file.path()).unwrap_err();
        assert_eq!(err.to_string(), "File cannot be read");
    }
}
