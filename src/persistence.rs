// File: src/persistence.rs
use crate::core::types::Corpus;
use crate::error::{CorpusError, Result};
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tempfile::{Builder, NamedTempFile};

/// Reads and parses a whole corpus file into memory.
pub fn load_corpus(path: &Path) -> Result<Corpus> {
    let text = fs::read_to_string(path).map_err(|source| CorpusError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Corpus::parse(&text))
}

/// Writes the corpus atomically: everything goes to a temp file next to the
/// target, which only replaces `path` once fully flushed.
pub fn save_corpus(corpus: &Corpus, path: &Path) -> Result<()> {
    let write_err = |source: std::io::Error| CorpusError::Write {
        path: path.to_path_buf(),
        source,
    };

    let parent_dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent_dir).map_err(write_err)?;

    let mut temp_file = temp_file_for(path, parent_dir).map_err(write_err)?;
    temp_file
        .write_all(corpus.to_text().as_bytes())
        .map_err(write_err)?;
    temp_file.as_file().sync_all().map_err(write_err)?;

    temp_file.persist(path).map_err(|e| write_err(e.error))?;
    Ok(())
}

/// Creates the temp file that will replace `target`. An existing target's
/// permissions carry over; a new file gets 0o644, narrowed by the umask.
fn temp_file_for(target: &Path, dir: &Path) -> io::Result<NamedTempFile> {
    match fs::metadata(target) {
        Ok(meta) => {
            let temp_file = NamedTempFile::new_in(dir)?;
            temp_file.as_file().set_permissions(meta.permissions())?;
            Ok(temp_file)
        }
        Err(_) => new_file_temp(dir),
    }
}

#[cfg(unix)]
fn new_file_temp(dir: &Path) -> io::Result<NamedTempFile> {
    use std::os::unix::fs::PermissionsExt;
    Builder::new()
        .permissions(fs::Permissions::from_mode(0o644))
        .tempfile_in(dir)
}

#[cfg(not(unix))]
fn new_file_temp(dir: &Path) -> io::Result<NamedTempFile> {
    Builder::new().tempfile_in(dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_input_is_a_read_error() {
        let dir = tempdir().unwrap();
        let err = load_corpus(&dir.path().join("nope.txt")).unwrap_err();
        assert!(matches!(err, CorpusError::Read { .. }));
    }

    #[test]
    fn save_creates_parent_dirs_and_terminates_every_line() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/out.txt");
        let corpus = Corpus::parse("{a, 가}\n\n{b, 나}");
        save_corpus(&corpus, &path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "{a, 가}\n{b, 나}\n");
    }

    #[test]
    fn parent_that_is_a_file_is_a_write_error() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();

        let err = save_corpus(&Corpus::parse("{a, 가}"), &blocker.join("out.txt")).unwrap_err();

        assert!(matches!(err, CorpusError::Write { .. }));
        let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn overwrite_keeps_existing_mode() {
        use std::os::unix::fs::PermissionsExt;
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.txt");
        fs::write(&path, "old\n").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o640)).unwrap();

        save_corpus(&Corpus::parse("{a, 가}"), &path).unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o640);
    }

    #[test]
    fn empty_corpus_writes_empty_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.txt");
        fs::write(&path, "old contents\n").unwrap();
        save_corpus(&Corpus::default(), &path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }
}
