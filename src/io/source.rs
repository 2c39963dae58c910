use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use crate::error::{Error, Result};

/// Where input lines are read from: a named file, or the process's stdin.
///
/// Both variants decode as strict UTF-8; invalid byte sequences surface later,
/// from the line loop, as a decoding error. The file handle is scoped to the
/// returned reader and released when it is dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    File(PathBuf),
    Stdin,
}

impl InputSource {
    /// Open the source as a buffered line reader.
    ///
    /// A file that does not exist or cannot be read yields
    /// [`Error::FileAccess`] naming the offending path.
    pub fn open(&self) -> Result<Box<dyn BufRead>> {
        match self {
            InputSource::File(path) => {
                let file = File::open(path).map_err(|source| Error::FileAccess {
                    path: path.clone(),
                    source,
                })?;
                Ok(Box::new(BufReader::new(file)))
            }
            InputSource::Stdin => Ok(Box::new(io::stdin().lock())),
        }
    }
}

impl From<Option<PathBuf>> for InputSource {
    fn from(filename: Option<PathBuf>) -> Self {
        match filename {
            Some(path) => InputSource::File(path),
            None => InputSource::Stdin,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn missing_file_is_a_file_access_error() {
        let source = InputSource::File(PathBuf::from("/no/such/file.txt"));
        match source.open() {
            Err(Error::FileAccess { path, .. }) => {
                assert_eq!(path, PathBuf::from("/no/such/file.txt"));
            }
            other => panic!("expected FileAccess error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn reads_lines_from_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.txt");
        std::fs::File::create(&path)
            .and_then(|mut f| f.write_all("One\nTwo\n".as_bytes()))
            .unwrap();

        let reader = InputSource::File(path).open().unwrap();
        let lines: Vec<String> = reader.lines().map(|l| l.unwrap()).collect();
        assert_eq!(lines, vec!["One", "Two"]);
    }

    #[test]
    fn filename_option_maps_to_source() {
        assert_eq!(InputSource::from(None), InputSource::Stdin);
        assert_eq!(
            InputSource::from(Some(PathBuf::from("a.txt"))),
            InputSource::File(PathBuf::from("a.txt"))
        );
    }
}
