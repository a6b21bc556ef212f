//! Unified error types for the resolution switcher.

use std::fmt;

/// An external executable the app cannot run without.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MissingDependency {
    /// The bundled `screenresolution` binary is not where it was packaged.
    HardwareTool,
    /// `displayplacer` is not installed in any known location.
    ScalingTool,
}

impl fmt::Display for MissingDependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HardwareTool => write!(f, "The \"screenresolution\" executable is missing."),
            Self::ScalingTool => write!(f, "The \"displayplacer\" utility is not installed."),
        }
    }
}

/// Application-specific errors.
#[derive(Debug)]
pub enum AppError {
    /// Startup found required tools missing. Fatal.
    MissingDependencies(Vec<MissingDependency>),
    /// A tool could not be launched or exited non-zero. Carries the message
    /// shown to the user.
    ToolInvocation(String),
    /// The scaling tool or the persistent screen id is not available yet.
    ToolUnavailable(String),
    /// A selection token that is neither a scaled nor a hardware mode.
    InvalidSelection(String),
    /// Display enumeration is not supported on this platform.
    Platform(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::MissingDependencies(missing) => {
                write!(f, "missing dependencies:")?;
                for dependency in missing {
                    write!(f, " {}", dependency)?;
                }
                Ok(())
            }
            AppError::ToolInvocation(msg) => write!(f, "{}", msg),
            AppError::ToolUnavailable(msg) => write!(f, "{}", msg),
            AppError::InvalidSelection(token) => write!(f, "Invalid mode selection: {}", token),
            AppError::Platform(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::ToolInvocation(err.to_string())
    }
}

/// Type alias for Results in this application.
pub type Result<T> = std::result::Result<T, AppError>;
