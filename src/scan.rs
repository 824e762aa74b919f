use crate::error::{Error, Result};
use std::fmt;
use std::io::ErrorKind;
use std::path::Path;
use std::str::FromStr;

/// Which directory entries count as candidates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TargetKind {
    /// Regular files only.
    #[default]
    File,
    /// Directories only.
    Dir,
    /// Files and directories alike.
    Both,
}

impl TargetKind {
    fn accepts(self, path: &Path) -> bool {
        match self {
            Self::File => path.is_file(),
            Self::Dir => path.is_dir(),
            Self::Both => true,
        }
    }
}

impl FromStr for TargetKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "file" => Ok(Self::File),
            "dir" => Ok(Self::Dir),
            "both" => Ok(Self::Both),
            other => Err(Error::Configuration(format!("unknown target kind `{other}`"))),
        }
    }
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File => f.write_str("file"),
            Self::Dir => f.write_str("dir"),
            Self::Both => f.write_str("both"),
        }
    }
}

/// List the base names of entries in `dir` that match `kind`, sorted.
///
/// A directory that does not exist yields an empty list. Any other failure to
/// read it is returned as [`Error::Io`].
pub fn list_entries(dir: &Path, kind: TargetKind) -> Result<Vec<String>> {
    let io_error = |source| Error::Io {
        path: dir.to_path_buf(),
        source,
    };

    let read = match std::fs::read_dir(dir) {
        Ok(read) => read,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(dir = %dir.display(), "directory does not exist");
            return Ok(Vec::new());
        }
        Err(e) => return Err(io_error(e)),
    };

    let mut entries: Vec<_> = read.collect::<std::io::Result<_>>().map_err(io_error)?;
    entries.sort_by_key(|e| e.path());

    let mut names = Vec::new();
    for entry in entries {
        let path = entry.path();
        if !kind.accepts(&path) {
            continue;
        }
        match entry.file_name().into_string() {
            Ok(name) => names.push(name),
            Err(raw) => tracing::debug!(name = ?raw, "skipping non UTF-8 entry"),
        }
    }

    tracing::debug!(dir = %dir.display(), kind = %kind, count = names.len(), "listed entries");
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use tempfile::tempdir;

    #[test]
    fn filters_by_kind() {
        let dir = tempdir().unwrap();
        File::create(dir.path().join("b_v002.txt")).unwrap();
        File::create(dir.path().join("a_v001.txt")).unwrap();
        fs::create_dir(dir.path().join("c_v003")).unwrap();

        assert_eq!(
            list_entries(dir.path(), TargetKind::File).unwrap(),
            ["a_v001.txt", "b_v002.txt"]
        );
        assert_eq!(list_entries(dir.path(), TargetKind::Dir).unwrap(), ["c_v003"]);
        assert_eq!(
            list_entries(dir.path(), TargetKind::Both).unwrap(),
            ["a_v001.txt", "b_v002.txt", "c_v003"]
        );
    }

    #[test]
    fn missing_directory_is_empty() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope");
        assert!(list_entries(&missing, TargetKind::Both).unwrap().is_empty());
    }

    #[test]
    fn listing_a_file_is_an_io_error() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("plain.txt");
        File::create(&file).unwrap();
        assert!(matches!(
            list_entries(&file, TargetKind::File),
            Err(Error::Io { .. })
        ));
    }

    #[test]
    fn target_kind_from_str() {
        assert_eq!("dir".parse::<TargetKind>().unwrap(), TargetKind::Dir);
        assert_eq!(TargetKind::Both.to_string(), "both");
        assert!(matches!(
            "folder".parse::<TargetKind>(),
            Err(Error::Configuration(_))
        ));
    }
}
