// Ports - Interface definitions (contracts)

use std::fmt;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::error::OddsResult;

/// A single external program call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolInvocation {
    pub program: String,
    pub args: Vec<String>,
}

impl ToolInvocation {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn path_arg(self, path: &Path) -> Self {
        self.arg(path.to_string_lossy())
    }
}

impl fmt::Display for ToolInvocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            if arg.is_empty() || arg.contains(char::is_whitespace) {
                write!(f, " {:?}", arg)?;
            } else {
                write!(f, " {}", arg)?;
            }
        }
        Ok(())
    }
}

/// Port for the documentation toolchain
#[async_trait]
pub trait DocsPort: Send + Sync {
    /// Run an external builder to completion, inheriting stdio
    async fn run_tool(&self, invocation: &ToolInvocation) -> OddsResult<()>;

    /// Recursively remove a directory. Returns `false` when it did not exist.
    async fn remove_dir_all(&self, path: &Path) -> OddsResult<bool>;

    /// Whether the source directory is present
    async fn dir_exists(&self, path: &Path) -> OddsResult<bool>;
}

/// Record of a removed directory, used in reports
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Removal {
    pub path: PathBuf,
    pub existed: bool,
}
