//! Locating and running the two external display tools.

use crate::config::{DEV_TOOL_DIR, HARDWARE_TOOL_NAME, SCALING_TOOL_CANDIDATES};
use crate::error::MissingDependency;
use log::debug;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Stdio;

/// Captured result of one finished tool process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolOutput {
    pub success: bool,
    pub status: String,
    pub stdout: String,
    pub stderr: String,
}

/// Runs an executable to completion. Swapped for a fake in tests.
#[allow(async_fn_in_trait)]
pub trait ToolRunner {
    async fn run(&self, program: &Path, args: &[String]) -> io::Result<ToolOutput>;
}

/// Spawns real processes through tokio.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemToolRunner;

impl ToolRunner for SystemToolRunner {
    async fn run(&self, program: &Path, args: &[String]) -> io::Result<ToolOutput> {
        debug!("Running {} {:?}", program.display(), args);
        let output = tokio::process::Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .await?;

        Ok(ToolOutput {
            success: output.status.success(),
            status: output.status.to_string(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

/// Returns the first candidate that exists as a file.
pub fn locate_tool<P: AsRef<Path>>(candidates: &[P]) -> Option<PathBuf> {
    candidates
        .iter()
        .map(|candidate| candidate.as_ref())
        .find(|path| path.is_file())
        .map(Path::to_path_buf)
}

/// Where the tools live for this process.
///
/// The hardware tool path is fixed at startup; the scaling tool is looked up
/// again on every [`ToolPaths::locate_scaling_tool`] call so a mid-session
/// `brew install displayplacer` is picked up.
#[derive(Debug, Clone)]
pub struct ToolPaths {
    hardware: PathBuf,
    scaling_candidates: Vec<PathBuf>,
}

impl ToolPaths {
    pub fn new(hardware: PathBuf, scaling_candidates: Vec<PathBuf>) -> Self {
        Self {
            hardware,
            scaling_candidates,
        }
    }

    /// Resolves the packaged hardware tool and the standard scaling tool locations.
    pub fn detect() -> Self {
        let scaling_candidates = SCALING_TOOL_CANDIDATES.iter().map(PathBuf::from).collect();
        Self::new(hardware_tool_path(), scaling_candidates)
    }

    pub fn hardware_tool(&self) -> &Path {
        &self.hardware
    }

    pub fn locate_scaling_tool(&self) -> Option<PathBuf> {
        locate_tool(&self.scaling_candidates)
    }

    /// Every required tool that cannot be found right now.
    pub fn missing_dependencies(&self) -> Vec<MissingDependency> {
        let mut missing = Vec::new();
        if !self.hardware.is_file() {
            missing.push(MissingDependency::HardwareTool);
        }
        if self.locate_scaling_tool().is_none() {
            missing.push(MissingDependency::ScalingTool);
        }
        missing
    }
}

/// `Contents/Resources/screenresolution` inside an app bundle, the
/// development `bin/` directory otherwise.
fn hardware_tool_path() -> PathBuf {
    let dev_path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join(DEV_TOOL_DIR)
        .join(HARDWARE_TOOL_NAME);

    std::env::current_exe()
        .ok()
        .and_then(|exe| bundle_resource_dir(&exe))
        .map(|resources| resources.join(HARDWARE_TOOL_NAME))
        .unwrap_or(dev_path)
}

/// `Foo.app/Contents/Resources` for an executable at `Foo.app/Contents/MacOS/foo`.
fn bundle_resource_dir(exe: &Path) -> Option<PathBuf> {
    let macos_dir = exe.parent()?;
    let contents = macos_dir.parent()?;
    let is_bundle = macos_dir.file_name()? == "MacOS"
        && contents.file_name()? == "Contents"
        && contents
            .parent()?
            .extension()
            .is_some_and(|ext| ext == "app");

    is_bundle.then(|| contents.join("Resources"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("simpleres-{}-{}", name, std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn locate_tool_returns_first_existing_candidate() {
        let dir = scratch_dir("locate");
        let intel = dir.join("intel-displayplacer");
        fs::write(&intel, b"").unwrap();
        let silicon = dir.join("silicon-displayplacer");

        assert_eq!(locate_tool(&[silicon.clone(), intel.clone()]), Some(intel.clone()));

        fs::write(&silicon, b"").unwrap();
        assert_eq!(locate_tool(&[silicon.clone(), intel]), Some(silicon));

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn locate_tool_ignores_directories_and_missing_paths() {
        let dir = scratch_dir("locate-dir");
        assert_eq!(locate_tool(&[dir.clone(), dir.join("absent")]), None);
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn missing_dependencies_reports_both_tools() {
        let paths = ToolPaths::new(
            PathBuf::from("/nonexistent/screenresolution"),
            vec![PathBuf::from("/nonexistent/displayplacer")],
        );

        assert_eq!(
            paths.missing_dependencies(),
            vec![MissingDependency::HardwareTool, MissingDependency::ScalingTool]
        );
    }

    #[test]
    fn bundle_resources_resolved_from_app_executable() {
        let exe = Path::new("/Applications/SimpleRes.app/Contents/MacOS/simpleres");
        assert_eq!(
            bundle_resource_dir(exe),
            Some(PathBuf::from("/Applications/SimpleRes.app/Contents/Resources"))
        );
        assert_eq!(bundle_resource_dir(Path::new("/work/target/debug/simpleres")), None);
    }
}
