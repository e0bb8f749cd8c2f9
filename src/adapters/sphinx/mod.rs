//! Sphinx toolchain adapter
//!
//! Runs the external documentation builders as child processes and removes
//! build output. Builder output is passed straight through to the terminal.

use std::io::ErrorKind;
use std::path::Path;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, info};

use crate::error::{OddsError, OddsResult};
use crate::ports::{DocsPort, ToolInvocation};

/// Process-based adapter for `sphinx-build` and friends
#[derive(Debug, Default)]
pub struct SphinxAdapter;

impl SphinxAdapter {
    /// Create new Sphinx adapter
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl DocsPort for SphinxAdapter {
    async fn run_tool(&self, invocation: &ToolInvocation) -> OddsResult<()> {
        info!("Running: {}", invocation);

        let status = Command::new(&invocation.program)
            .args(&invocation.args)
            .status()
            .await
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => OddsError::ToolNotFound {
                    tool: invocation.program.clone(),
                },
                _ => OddsError::IoError(e),
            })?;

        if !status.success() {
            let status = status
                .code()
                .map(|code| code.to_string())
                .unwrap_or_else(|| "signal".to_string());
            return Err(OddsError::DocsToolFailed {
                tool: invocation.program.clone(),
                status,
            });
        }

        debug!("{} finished successfully", invocation.program);
        Ok(())
    }

    async fn remove_dir_all(&self, path: &Path) -> OddsResult<bool> {
        match tokio::fs::remove_dir_all(path).await {
            Ok(()) => {
                info!("Removed {}", path.display());
                Ok(true)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("{} does not exist, nothing to clean", path.display());
                Ok(false)
            }
            Err(e) => Err(OddsError::IoError(e)),
        }
    }

    async fn dir_exists(&self, path: &Path) -> OddsResult<bool> {
        match tokio::fs::metadata(path).await {
            Ok(metadata) => Ok(metadata.is_dir()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(OddsError::IoError(e)),
        }
    }
}
