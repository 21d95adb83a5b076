//! Relocating remover: Moves matches into a holding folder

use std::ffi::OsString;
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::{RemoveError, Remover};

const MAX_NAME_ATTEMPTS: u32 = 1000;

/// Moves files into `destination`, never overwriting anything there.
///
/// A name that is already taken gets a numeric suffix: `a.txt`, `a.1.txt`,
/// `a.2.txt`, and so on. The new name is claimed atomically (hard link, or
/// exclusive create when linking is not possible), so a file that appears
/// at the chosen name mid-move is never clobbered.
#[derive(Debug, Clone)]
pub struct RelocatingRemover {
    destination: PathBuf,
}

impl RelocatingRemover {
    #[must_use]
    pub fn new(destination: impl Into<PathBuf>) -> Self {
        Self {
            destination: destination.into(),
        }
    }

    #[must_use]
    pub fn destination(&self) -> &Path {
        &self.destination
    }

    fn io_error(&self, path: &Path, source: io::Error) -> RemoveError {
        RemoveError::Io {
            path: path.to_path_buf(),
            destination: self.destination.clone(),
            source,
        }
    }
}

/// File name for the given attempt, keeping non-UTF-8 names intact
pub(super) fn suffixed_name(path: &Path, attempt: u32) -> Option<OsString> {
    let stem = path.file_stem()?;
    let mut name = stem.to_os_string();
    if attempt > 0 {
        name.push(format!(".{attempt}"));
    }
    if let Some(extension) = path.extension() {
        name.push(".");
        name.push(extension);
    }
    Some(name)
}

/// Put a copy of `source` at `target` without replacing anything there.
///
/// Fails with [`io::ErrorKind::AlreadyExists`] when `target` is taken.
pub(super) fn place_no_clobber(source: &Path, target: &Path) -> io::Result<()> {
    match fs::hard_link(source, target) {
        Ok(()) => return Ok(()),
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => return Err(e),
        // Other filesystem, or links unsupported there
        Err(e) => debug!("Hard link failed ({e}), falling back to copy"),
    }

    let mut input = File::open(source)?;
    let mut output = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(target)?;
    let copied = io::copy(&mut input, &mut output)
        .and_then(|_| output.sync_all())
        .and_then(|()| fs::set_permissions(target, input.metadata()?.permissions()));
    if let Err(e) = copied {
        // Never leave a partial copy behind
        drop(output);
        let _ = fs::remove_file(target);
        return Err(e);
    }
    Ok(())
}

impl Remover for RelocatingRemover {
    fn remove(&self, path: &Path) -> Result<(), RemoveError> {
        fs::create_dir_all(&self.destination).map_err(|e| self.io_error(path, e))?;

        for attempt in 0..MAX_NAME_ATTEMPTS {
            let Some(name) = suffixed_name(path, attempt) else {
                break;
            };
            let target = self.destination.join(name);

            match place_no_clobber(path, &target) {
                Ok(()) => {
                    info!("Moving {} to {}", path.display(), target.display());
                    return fs::remove_file(path).map_err(|e| self.io_error(path, e));
                }
                Err(e) if e.kind() == io::ErrorKind::AlreadyExists => continue,
                Err(e) => return Err(self.io_error(path, e)),
            }
        }

        Err(RemoveError::Collision {
            path: path.to_path_buf(),
            destination: self.destination.clone(),
        })
    }
}
