//! Selection tokens exchanged between the panel and the mode service.
//!
//! `scaled:<res>:<hz>:<true|false>` targets the scaling tool,
//! `hardware:<resString>` the hardware-mode tool.

use crate::error::{AppError, Result};
use crate::modes::ScaledMode;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModeSelection {
    Scaled { res: String, hz: String, scaling: bool },
    Hardware(String),
}

impl ModeSelection {
    pub fn scaled(mode: &ScaledMode) -> Self {
        Self::Scaled {
            res: mode.res.clone(),
            hz: mode.hz.clone(),
            scaling: mode.scaling,
        }
    }

    pub fn hardware(token: &str) -> Self {
        Self::Hardware(token.to_string())
    }
}

impl fmt::Display for ModeSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scaled { res, hz, scaling } => write!(f, "scaled:{}:{}:{}", res, hz, scaling),
            Self::Hardware(res) => write!(f, "hardware:{}", res),
        }
    }
}

impl FromStr for ModeSelection {
    type Err = AppError;

    /// Only the literal `true` turns scaling on; any other flag value means off.
    fn from_str(token: &str) -> Result<Self> {
        let invalid = || AppError::InvalidSelection(token.to_string());
        let (kind, rest) = token.split_once(':').ok_or_else(invalid)?;

        match kind {
            "scaled" => {
                let mut parts = rest.split(':');
                let res = parts.next().filter(|s| !s.is_empty()).ok_or_else(invalid)?;
                let hz = parts.next().filter(|s| !s.is_empty()).ok_or_else(invalid)?;
                let scaling = parts.next() == Some("true");
                Ok(Self::Scaled {
                    res: res.to_string(),
                    hz: hz.to_string(),
                    scaling,
                })
            }
            "hardware" => {
                let res = rest.split(':').next().unwrap_or_default();
                if res.is_empty() {
                    return Err(invalid());
                }
                Ok(Self::Hardware(res.to_string()))
            }
            _ => Err(invalid()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_scaled_token() {
        let selection: ModeSelection = "scaled:1920x1080:60:true".parse().unwrap();
        assert_eq!(
            selection,
            ModeSelection::Scaled {
                res: "1920x1080".into(),
                hz: "60".into(),
                scaling: true
            }
        );
    }

    #[test]
    fn scaling_flag_requires_literal_true() {
        for token in ["scaled:1920x1080:60:false", "scaled:1920x1080:60:TRUE", "scaled:1920x1080:60"] {
            let selection: ModeSelection = token.parse().unwrap();
            assert!(matches!(selection, ModeSelection::Scaled { scaling: false, .. }));
        }
    }

    #[test]
    fn parses_hardware_token() {
        let selection: ModeSelection = "hardware:1920x1080x32@60".parse().unwrap();
        assert_eq!(selection, ModeSelection::hardware("1920x1080x32@60"));
    }

    #[test]
    fn rejects_malformed_tokens() {
        for token in ["", "scaled", "scaled::60:true", "scaled:1920x1080", "hardware:", "native:1x1"] {
            assert!(
                matches!(token.parse::<ModeSelection>(), Err(AppError::InvalidSelection(_))),
                "{token} should be rejected"
            );
        }
    }

    #[test]
    fn display_produces_wire_format() {
        let mode = ScaledMode {
            res: "1440x900".into(),
            hz: "60".into(),
            scaling: false,
        };
        assert_eq!(ModeSelection::scaled(&mode).to_string(), "scaled:1440x900:60:false");
        assert_eq!(
            ModeSelection::hardware("1440x900x32@60").to_string(),
            "hardware:1440x900x32@60"
        );
    }
}
