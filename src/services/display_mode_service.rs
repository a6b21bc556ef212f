//! Discovers and applies display modes through the two external tools.
//!
//! The service owns the persistent screen id observed in the scaling tool's
//! listing, since applying a scaled mode has to name the screen again.

use crate::error::{AppError, Result};
use crate::modes::{self, DisplayRecord, PhysicalDisplay, ScalingListing};
use crate::selection::ModeSelection;
use crate::tools::{SystemToolRunner, ToolOutput, ToolPaths, ToolRunner};
use log::{debug, error, info, warn};
use std::path::Path;
use std::sync::RwLock;

const SCALING_UNAVAILABLE: &str = "Tool or screen ID not found.";

/// Service for listing and switching display modes.
pub struct DisplayModeService<R = SystemToolRunner> {
    paths: ToolPaths,
    runner: R,
    /// Last persistent screen id seen in a scaling listing (`None` until the
    /// first successful discovery).
    screen_id: RwLock<Option<String>>,
}

impl DisplayModeService<SystemToolRunner> {
    /// Creates a service that spawns the real tools.
    pub fn new(paths: ToolPaths) -> Self {
        Self::with_runner(paths, SystemToolRunner)
    }
}

impl<R: ToolRunner> DisplayModeService<R> {
    pub fn with_runner(paths: ToolPaths, runner: R) -> Self {
        Self {
            paths,
            runner,
            screen_id: RwLock::new(None),
        }
    }

    /// Cached persistent screen id, if any listing has reported one.
    pub fn screen_id(&self) -> Option<String> {
        match self.screen_id.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    fn remember_screen_id(&self, id: String) {
        debug!("Persistent screen id: {}", id);
        match self.screen_id.write() {
            Ok(mut guard) => *guard = Some(id),
            Err(poisoned) => *poisoned.into_inner() = Some(id),
        }
    }

    /// Lists modes from both tools concurrently and builds one record per display.
    ///
    /// Never fails: a tool that cannot run contributes an empty list. Every
    /// display receives the same mode lists because neither tool is queried
    /// per display.
    pub async fn discover(&self, displays: &[PhysicalDisplay]) -> Vec<DisplayRecord> {
        let scaling_tool = self.paths.locate_scaling_tool();

        let (hardware_modes, listing) = tokio::join!(
            self.list_hardware_modes(),
            self.list_scaled_modes(scaling_tool.as_deref())
        );

        if let Some(id) = listing.persistent_screen_id {
            self.remember_screen_id(id);
        }

        info!(
            "Discovered {} hardware and {} scaled modes for {} display(s)",
            hardware_modes.len(),
            listing.modes.len(),
            displays.len()
        );

        displays
            .iter()
            .map(|display| {
                DisplayRecord::new(display, hardware_modes.clone(), listing.modes.clone())
            })
            .collect()
    }

    async fn list_hardware_modes(&self) -> Vec<String> {
        let list = ["list".to_string()];
        match self.invoke(self.paths.hardware_tool(), &list).await {
            Ok(output) => modes::parse_hardware_modes(&output.stdout),
            Err(e) => {
                warn!("Hardware mode listing unavailable: {}", e);
                Vec::new()
            }
        }
    }

    async fn list_scaled_modes(&self, tool: Option<&Path>) -> ScalingListing {
        let Some(tool) = tool else {
            warn!("Scaled mode listing unavailable: displayplacer not found");
            return ScalingListing::default();
        };

        let list = ["list".to_string()];
        match self.invoke(tool, &list).await {
            Ok(output) => modes::parse_scaling_listing(&output.stdout),
            Err(e) => {
                warn!("Scaled mode listing unavailable: {}", e);
                ScalingListing::default()
            }
        }
    }

    /// Applies a selection token coming from the panel.
    ///
    /// One attempt; the result reflects the tool's exit status.
    pub async fn apply_mode(&self, token: &str) -> Result<()> {
        let selection: ModeSelection = token.parse()?;
        info!("Applying display mode {}", selection);

        let result = match &selection {
            ModeSelection::Scaled { res, hz, scaling } => {
                let tool = self.paths.locate_scaling_tool();
                let (Some(tool), Some(id)) = (tool, self.screen_id()) else {
                    return Err(AppError::ToolUnavailable(SCALING_UNAVAILABLE.to_string()));
                };
                let argument = scaled_mode_argument(&id, res, hz, *scaling);
                self.invoke(&tool, &[argument]).await
            }
            ModeSelection::Hardware(res) => {
                let args = ["set".to_string(), res.clone()];
                self.invoke(self.paths.hardware_tool(), &args).await
            }
        };

        if let Err(e) = &result {
            error!("Failed to apply {}: {}", selection, e);
        }
        result.map(|_| ())
    }

    /// Runs a tool and maps launch failures and non-zero exits to
    /// [`AppError::ToolInvocation`]. Stderr text is preferred as the message.
    async fn invoke(&self, tool: &Path, args: &[String]) -> Result<ToolOutput> {
        let output = self.runner.run(tool, args).await?;
        if output.success {
            return Ok(output);
        }

        let message = if output.stderr.is_empty() {
            format!("{} exited with {}", tool.display(), output.status)
        } else {
            output.stderr
        };
        Err(AppError::ToolInvocation(message))
    }
}

/// The single displayplacer argument selecting a mode on one screen.
pub fn scaled_mode_argument(screen_id: &str, res: &str, hz: &str, scaling: bool) -> String {
    let mut argument = format!("id:{} res:{} hz:{}", screen_id, res, hz);
    if scaling {
        argument.push_str(" scaling:on");
    }
    argument
}
