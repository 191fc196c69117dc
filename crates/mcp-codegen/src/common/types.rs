//! Generator output types.
//!
//! A generation run produces a [`GeneratedCode`]: an ordered list of
//! [`GeneratedFile`]s with paths relative to the project root. Nothing is
//! written to disk unless the caller asks for it with
//! [`GeneratedCode::write_to`].
//!
//! # Examples
//!
//! ```
//! use mcp_framework_codegen::{GeneratedCode, GeneratedFile};
//!
//! let mut code = GeneratedCode::new();
//! code.add_file(GeneratedFile::new("src/index.ts", "export {};\n"));
//!
//! assert_eq!(code.file_count(), 1);
//! assert_eq!(code.paths(), vec!["src/index.ts"]);
//! ```

use mcp_framework_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Component, Path, PathBuf};

/// Ordered set of generated files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedCode {
    /// Files in generation order
    pub files: Vec<GeneratedFile>,
}

impl GeneratedCode {
    /// Creates an empty container.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self { files: Vec::new() }
    }

    /// Appends a file.
    pub fn add_file(&mut self, file: GeneratedFile) {
        self.files.push(file);
    }

    /// Number of files.
    #[inline]
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Iterates over files in generation order.
    #[inline]
    pub fn files(&self) -> impl Iterator<Item = &GeneratedFile> {
        self.files.iter()
    }

    /// Relative paths in generation order.
    #[must_use]
    pub fn paths(&self) -> Vec<&str> {
        self.files.iter().map(GeneratedFile::path).collect()
    }

    /// Looks up a file by relative path.
    ///
    /// # Examples
    ///
    /// ```
    /// use mcp_framework_codegen::{GeneratedCode, GeneratedFile};
    ///
    /// let mut code = GeneratedCode::new();
    /// code.add_file(GeneratedFile::new("package.json", "{}"));
    ///
    /// assert_eq!(code.get("package.json").unwrap().content(), "{}");
    /// assert!(code.get("missing.ts").is_none());
    /// ```
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&GeneratedFile> {
        self.files.iter().find(|f| f.path == path)
    }

    /// Writes every file under `root`, creating parent directories.
    ///
    /// Returns the written paths in generation order. Paths are checked
    /// before anything is written, so a rejected path leaves `root`
    /// untouched.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ValidationError`] if a file path is absolute or
    /// escapes `root`, and [`Error::Io`] if a directory or file cannot be
    /// written.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use mcp_framework_codegen::{GenerationConfig, ServerGenerator};
    ///
    /// # fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let config = GenerationConfig::builder().name("my-server").build();
    /// let code = ServerGenerator::new()?.generate(&config)?;
    /// let written = code.write_to("./my-server")?;
    /// println!("wrote {} files", written.len());
    /// # Ok(())
    /// # }
    /// ```
    pub fn write_to(&self, root: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
        let root = root.as_ref();

        for file in &self.files {
            check_relative(&file.path)?;
        }

        let mut written = Vec::with_capacity(self.files.len());
        for file in &self.files {
            let target = root.join(&file.path);

            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent).map_err(|source| Error::Io {
                    path: parent.display().to_string(),
                    source,
                })?;
            }

            fs::write(&target, &file.content).map_err(|source| Error::Io {
                path: target.display().to_string(),
                source,
            })?;

            tracing::debug!(path = %target.display(), bytes = file.content.len(), "wrote file");
            written.push(target);
        }

        tracing::info!(root = %root.display(), files = written.len(), "wrote generated project");
        Ok(written)
    }
}

fn check_relative(path: &str) -> Result<()> {
    let escapes = path.is_empty()
        || Path::new(path).components().any(|c| {
            matches!(
                c,
                Component::ParentDir | Component::RootDir | Component::Prefix(_)
            )
        });

    if escapes {
        return Err(Error::ValidationError {
            field: "path".to_string(),
            reason: format!("'{path}' is not a relative path inside the output directory"),
        });
    }
    Ok(())
}

/// One generated file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedFile {
    /// Path relative to the project root, `/`-separated
    pub path: String,
    /// File content
    pub content: String,
}

impl GeneratedFile {
    /// Creates a file.
    #[must_use]
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Returns the file path.
    #[inline]
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the file content.
    #[inline]
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample() -> GeneratedCode {
        let mut code = GeneratedCode::new();
        code.add_file(GeneratedFile::new("package.json", "{}"));
        code.add_file(GeneratedFile::new("src/services/BaseService.ts", "export {};"));
        code
    }

    #[test]
    fn test_paths_keep_order() {
        assert_eq!(
            sample().paths(),
            vec!["package.json", "src/services/BaseService.ts"]
        );
    }

    #[test]
    fn test_write_to_creates_directories() {
        let dir = TempDir::new().unwrap();
        let written = sample().write_to(dir.path()).unwrap();

        assert_eq!(written.len(), 2);
        let content = fs::read_to_string(dir.path().join("src/services/BaseService.ts")).unwrap();
        assert_eq!(content, "export {};");
    }

    #[test]
    fn test_write_to_rejects_parent_escape() {
        let dir = TempDir::new().unwrap();
        let mut code = sample();
        code.add_file(GeneratedFile::new("../outside.ts", "x"));

        let err = code.write_to(dir.path()).unwrap_err();
        assert!(err.is_validation_error());
        // nothing written, not even the valid files
        assert!(!dir.path().join("package.json").exists());
    }

    #[test]
    fn test_write_to_rejects_absolute_and_empty_paths() {
        assert!(check_relative("/etc/passwd").is_err());
        assert!(check_relative("").is_err());
        assert!(check_relative("src/./index.ts").is_ok());
    }

    #[test]
    fn test_serde_roundtrip_preserves_order() {
        let code = sample();
        let json = serde_json::to_string(&code).unwrap();
        let back: GeneratedCode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, code);
    }
}
