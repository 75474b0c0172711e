//! Common file system operations with unified error handling

use std::fs;
use std::path::Path;

/// Merge a directory tree into `dst`, overwriting files that already exist.
///
/// A missing source directory is a no-op. Entries that are neither regular
/// files nor directories (symlinks, devices) are skipped.
pub fn copy_dir_recursive<P1, P2>(src: P1, dst: P2) -> std::io::Result<()>
where
    P1: AsRef<Path>,
    P2: AsRef<Path>,
{
    let src_ref = src.as_ref();
    let dst_ref = dst.as_ref();

    if !src_ref.exists() {
        return Ok(());
    }

    if !dst_ref.exists() {
        fs::create_dir_all(dst_ref)?;
    }

    for entry in fs::read_dir(src_ref)? {
        let entry = entry?;
        let entry_path = entry.path();
        let dst_path = dst_ref.join(entry.file_name());

        // file_type() does not follow symlinks, so a symlinked directory
        // falls through to the skip arm
        let file_type = entry.file_type()?;

        if file_type.is_file() {
            fs::copy(&entry_path, &dst_path)?;
        } else if file_type.is_dir() {
            copy_dir_recursive(&entry_path, &dst_path)?;
        }
    }

    Ok(())
}
