use std::path::{Path, PathBuf};

use eyre::{Context, Result, bail};
use tracing::debug;

/// Header line written at the top of every generated source file.
pub const GENERATED_HEADER: &str = "// Generated by vkgen - DO NOT EDIT";

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the file path relative to the output directory
    fn path(&self) -> PathBuf;

    /// Render the file content
    fn render(&self) -> String;

    /// Render into an owned [`File`]
    fn to_file(&self) -> File {
        File::new(self.path(), self.render())
    }
}

/// A rendered file, addressed relative to an output directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    path: PathBuf,
    content: String,
}

impl File {
    /// Create a new file with the given relative path and content
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the file content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Write the file below `base`, creating parent directories
    pub fn write(&self, base: &Path) -> Result<()> {
        write_file(&base.join(&self.path), &self.content)
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content).wrap_err_with(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

/// The sibling directory [`replace_dir`] stages output in, e.g.
/// `src/.api.vkgen-tmp` for `src/api`. `None` for paths without a final
/// component such as `/` or `..`.
pub fn staging_dir(target: &Path) -> Option<PathBuf> {
    let name = target.file_name()?;
    let parent = target.parent().unwrap_or_else(|| Path::new(""));
    Some(parent.join(format!(".{}.vkgen-tmp", name.to_string_lossy())))
}

/// Replace `target` with a directory holding exactly `files`.
///
/// Files are first written to a sibling staging directory. The previous
/// contents of `target` are only removed once every file has been written,
/// so a failed write leaves the old output untouched. Returns the number of
/// files written.
pub fn replace_dir(target: &Path, files: &[File]) -> Result<usize> {
    let Some(staging) = staging_dir(target) else {
        bail!(
            "refusing to replace '{}': output must be a named directory",
            target.display()
        );
    };

    if staging.exists() {
        std::fs::remove_dir_all(&staging)
            .wrap_err_with(|| format!("failed to remove stale {}", staging.display()))?;
    }
    std::fs::create_dir_all(&staging)
        .wrap_err_with(|| format!("failed to create {}", staging.display()))?;

    for file in files {
        if let Err(err) = file.write(&staging) {
            let _ = std::fs::remove_dir_all(&staging);
            return Err(err);
        }
    }
    debug!(staging = %staging.display(), count = files.len(), "staged output");

    if target.exists() {
        std::fs::remove_dir_all(target)
            .wrap_err_with(|| format!("failed to remove {}", target.display()))?;
        debug!(target = %target.display(), "removed previous output");
    }
    std::fs::rename(&staging, target)
        .wrap_err_with(|| format!("failed to move output into {}", target.display()))?;

    Ok(files.len())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    struct Greeting;

    impl GeneratedFile for Greeting {
        fn path(&self) -> PathBuf {
            PathBuf::from("nested").join("hello.rs")
        }

        fn render(&self) -> String {
            format!("{}\n", GENERATED_HEADER)
        }
    }

    #[test]
    fn test_write_file_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a").join("b").join("c").join("test.txt");

        write_file(&path, "nested").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "nested");
    }

    #[test]
    fn test_file_write_relative_to_base() {
        let temp = TempDir::new().unwrap();
        let file = Greeting.to_file();

        file.write(temp.path()).unwrap();

        let written = fs::read_to_string(temp.path().join("nested/hello.rs")).unwrap();
        assert!(written.starts_with(GENERATED_HEADER));
    }

    #[test]
    fn test_replace_dir_creates_missing_target() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("api");

        let count = replace_dir(&target, &[File::new("mod.rs", "pub mod x;\n")]).unwrap();

        assert_eq!(count, 1);
        assert_eq!(
            fs::read_to_string(target.join("mod.rs")).unwrap(),
            "pub mod x;\n"
        );
    }

    #[test]
    fn test_replace_dir_removes_stale_files() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("api");
        fs::create_dir_all(target.join("old")).unwrap();
        fs::write(target.join("old").join("gone.rs"), "stale").unwrap();
        fs::write(target.join("mod.rs"), "stale").unwrap();

        replace_dir(&target, &[File::new("mod.rs", "fresh")]).unwrap();

        assert!(!target.join("old").exists());
        assert_eq!(fs::read_to_string(target.join("mod.rs")).unwrap(), "fresh");
        assert!(!temp.path().join(".api.vkgen-tmp").exists());
    }

    #[test]
    fn test_replace_dir_keeps_previous_output_on_write_failure() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("api");
        fs::create_dir_all(&target).unwrap();
        fs::write(target.join("mod.rs"), "previous").unwrap();

        // A file and a directory cannot share the path "clash"
        let files = [
            File::new("clash", "file"),
            File::new("clash/inner.rs", "child"),
        ];
        assert!(replace_dir(&target, &files).is_err());

        assert_eq!(
            fs::read_to_string(target.join("mod.rs")).unwrap(),
            "previous"
        );
        assert!(!temp.path().join(".api.vkgen-tmp").exists());
    }

    #[test]
    fn test_staging_dir_is_hidden_sibling() {
        assert_eq!(
            staging_dir(Path::new("src/api")),
            Some(PathBuf::from("src/.api.vkgen-tmp"))
        );
        assert_eq!(staging_dir(Path::new("/")), None);
    }

    #[test]
    fn test_replace_dir_refuses_unnamed_target() {
        assert!(replace_dir(Path::new("."), &[]).is_err());
        assert!(replace_dir(Path::new("/"), &[]).is_err());
    }
}
