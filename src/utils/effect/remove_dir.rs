use camino::Utf8Path;
use mevn_std::{Fs, MevnStdError};

/// Recursively deletes a directory tree.
///
/// Each platform family gets its own implementation of [`NativeRemoveDirTree`];
/// the right one is picked at compile time.
#[cfg_attr(test, mockall::automock)]
pub trait RemoveDirTree {
    fn remove_dir_tree(&self, path: &Utf8Path) -> Result<(), MevnStdError>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NativeRemoveDirTree;

#[cfg(unix)]
impl RemoveDirTree for NativeRemoveDirTree {
    fn remove_dir_tree(&self, path: &Utf8Path) -> Result<(), MevnStdError> {
        Fs::remove_dir_all(path)
    }
}

#[cfg(windows)]
impl RemoveDirTree for NativeRemoveDirTree {
    fn remove_dir_tree(&self, path: &Utf8Path) -> Result<(), MevnStdError> {
        // git marks pack and object files read-only, which makes Windows refuse to delete them
        clear_readonly(path)?;
        Fs::remove_dir_all(path)
    }
}

#[cfg(windows)]
fn clear_readonly(path: &Utf8Path) -> Result<(), MevnStdError> {
    use anyhow::Context;

    let metadata = Fs::metadata(path)?;
    let mut permissions = metadata.permissions();
    if permissions.readonly() {
        #[allow(clippy::permissions_set_readonly_false)]
        permissions.set_readonly(false);
        std::fs::set_permissions(path, permissions)
            .with_context(|| format!("could not make {} writable", path))?;
    }
    if metadata.is_dir() {
        let entries = path
            .read_dir_utf8()
            .with_context(|| format!("could not read entries of {}", path))?;
        for entry in entries {
            let entry = entry.with_context(|| format!("could not read entries of {}", path))?;
            clear_readonly(entry.path())?;
        }
    }
    Ok(())
}
