// Docs interactor - Orchestrates the documentation build commands

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use tracing::{info, warn};

use crate::config::DocsConfig;
use crate::error::OddsResult;
use crate::ports::{DocsPort, Removal, ToolInvocation};

/// Documentation commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocsTarget {
    /// HTML build
    Build,
    /// Live-reload server
    Live,
    /// Remove build output
    Clean,
    /// Clean, then build every released version
    Multiversion,
}

impl fmt::Display for DocsTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DocsTarget::Build => "docs",
            DocsTarget::Live => "docs-live",
            DocsTarget::Clean => "docs-clean",
            DocsTarget::Multiversion => "docs-multiversion",
        };
        f.write_str(name)
    }
}

/// One step of a [`DocsPlan`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocsStep {
    Clean(PathBuf),
    Run(ToolInvocation),
}

impl fmt::Display for DocsStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocsStep::Clean(path) => write!(f, "rm -rf {}", path.display()),
            DocsStep::Run(invocation) => write!(f, "{}", invocation),
        }
    }
}

/// Ordered steps for a target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocsPlan {
    pub target: DocsTarget,
    pub source_dir: PathBuf,
    pub steps: Vec<DocsStep>,
}

impl DocsPlan {
    pub fn for_target(target: DocsTarget, config: &DocsConfig) -> Self {
        let source = config.source_dir.as_path();
        let html = config.html_dir();
        let steps = match target {
            DocsTarget::Build => vec![DocsStep::Run(
                ToolInvocation::new(&config.sphinx_build)
                    .arg("-b")
                    .arg("html")
                    .path_arg(source)
                    .path_arg(&html),
            )],
            DocsTarget::Live => vec![DocsStep::Run(
                ToolInvocation::new(&config.sphinx_autobuild)
                    .path_arg(source)
                    .path_arg(&html),
            )],
            DocsTarget::Clean => vec![DocsStep::Clean(config.build_dir.clone())],
            DocsTarget::Multiversion => vec![
                DocsStep::Clean(config.build_dir.clone()),
                DocsStep::Run(
                    ToolInvocation::new(&config.sphinx_multiversion)
                        .path_arg(source)
                        .path_arg(&html),
                ),
            ],
        };
        Self {
            target,
            source_dir: config.source_dir.clone(),
            steps,
        }
    }

    /// Whether any step reads the source directory
    pub fn needs_sources(&self) -> bool {
        self.steps.iter().any(|step| matches!(step, DocsStep::Run(_)))
    }
}

/// What a plan execution did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocsReport {
    pub removals: Vec<Removal>,
    pub tools_run: Vec<String>,
}

/// Interactor for the documentation use case
pub struct DocsInteractor {
    docs_port: Arc<dyn DocsPort>,
}

impl DocsInteractor {
    /// Create new docs interactor with injected port
    pub fn new(docs_port: Arc<dyn DocsPort>) -> Self {
        Self { docs_port }
    }

    /// Run every step of the plan in order, stopping at the first failure
    pub async fn execute(&self, plan: &DocsPlan) -> OddsResult<DocsReport> {
        info!("Starting {}", plan.target);

        if plan.needs_sources() && !self.docs_port.dir_exists(&plan.source_dir).await? {
            warn!(
                "Documentation source directory {} not found",
                plan.source_dir.display()
            );
        }

        let mut report = DocsReport::default();
        for step in &plan.steps {
            match step {
                DocsStep::Clean(path) => {
                    let existed = self.docs_port.remove_dir_all(path).await?;
                    report.removals.push(Removal {
                        path: path.clone(),
                        existed,
                    });
                }
                DocsStep::Run(invocation) => {
                    self.docs_port.run_tool(invocation).await?;
                    report.tools_run.push(invocation.program.clone());
                }
            }
        }

        info!("{} completed", plan.target);
        Ok(report)
    }
}
