//! Output file handling: the table is written only when generation succeeds.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::Error;

/// Output file that is removed again unless it is committed.
///
/// The file is created up front so an unwritable destination is reported
/// before any input is processed; dropping it without `commit` leaves no
/// file behind.
pub struct PendingOutput {
    path: PathBuf,
    file: Option<File>,
}

impl PendingOutput {
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref().to_path_buf();
        match File::create(&path) {
            Ok(file) => Ok(PendingOutput {
                path,
                file: Some(file),
            }),
            Err(source) => Err(Error::OpenOutput { path, source }),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes `contents` and keeps the file.
    pub fn commit(mut self, contents: &[u8]) -> io::Result<()> {
        if let Some(file) = self.file.as_mut() {
            file.write_all(contents)?;
            file.sync_all()?;
        }
        self.file = None;
        Ok(())
    }
}

impl Drop for PendingOutput {
    fn drop(&mut self) {
        if self.file.take().is_some() {
            debug!("removing incomplete output {}", self.path.display());
            let _ = fs::remove_file(&self.path);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::process;

    fn scratch_path(name: &str) -> PathBuf {
        env::temp_dir().join(format!("bltrip-{}-{}", process::id(), name))
    }

    #[test]
    fn commit_keeps_file() {
        let path = scratch_path("commit");
        let output = PendingOutput::create(&path).unwrap();
        output.commit(b"db 0x00").unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"db 0x00");
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn drop_removes_file() {
        let path = scratch_path("drop");
        {
            let output = PendingOutput::create(&path).unwrap();
            assert!(output.path().exists());
        }
        assert!(!path.exists());
    }

    #[test]
    fn unwritable_destination() {
        let path = scratch_path("missing-dir").join("out.lib");
        let error = PendingOutput::create(&path).err().unwrap();
        assert_eq!(error.exit_code(), 4);
    }
}
