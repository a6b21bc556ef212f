//! Builds the rows of one display's dropdown.

use crate::config::{HARDWARE_GROUP_LABEL, SCALED_GROUP_LABEL};
use crate::modes::{format_hardware_label, DisplayRecord};
use crate::selection::ModeSelection;

/// One dropdown row. Group headers carry no token and cannot be chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionRow {
    pub label: String,
    pub token: Option<String>,
}

impl OptionRow {
    fn header(label: &str) -> Self {
        Self {
            label: label.to_string(),
            token: None,
        }
    }

    fn choice(label: String, selection: ModeSelection) -> Self {
        Self {
            label,
            token: Some(selection.to_string()),
        }
    }

    pub fn is_header(&self) -> bool {
        self.token.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dropdown {
    pub rows: Vec<OptionRow>,
    pub selected: Option<usize>,
}

/// Scaled modes first, hardware modes second.
///
/// A scaled row matches the current resolution exactly; a hardware row
/// matches when its token starts with it, since hardware tokens also carry
/// depth and refresh. The last matching row is selected, falling back to the
/// first choice.
pub fn dropdown_for(record: &DisplayRecord) -> Dropdown {
    let current = record.current_resolution.as_str();
    let mut rows = Vec::with_capacity(record.scaled_modes.len() + record.hardware_modes.len() + 2);
    let mut selected = None;

    rows.push(OptionRow::header(SCALED_GROUP_LABEL));
    for mode in &record.scaled_modes {
        if mode.res == current {
            selected = Some(rows.len());
        }
        rows.push(OptionRow::choice(mode.label(), ModeSelection::scaled(mode)));
    }

    rows.push(OptionRow::header(HARDWARE_GROUP_LABEL));
    for token in &record.hardware_modes {
        if token.starts_with(current) {
            selected = Some(rows.len());
        }
        rows.push(OptionRow::choice(
            format_hardware_label(token),
            ModeSelection::hardware(token),
        ));
    }

    let selected = selected.or_else(|| rows.iter().position(|row| !row.is_header()));
    Dropdown { rows, selected }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modes::ScaledMode;

    fn record(current: &str, scaled: &[(&str, &str, bool)], hardware: &[&str]) -> DisplayRecord {
        DisplayRecord {
            id: 1,
            label: "Display 1".into(),
            current_resolution: current.into(),
            hardware_modes: hardware.iter().map(|s| s.to_string()).collect(),
            scaled_modes: scaled
                .iter()
                .map(|(res, hz, scaling)| ScaledMode {
                    res: res.to_string(),
                    hz: hz.to_string(),
                    scaling: *scaling,
                })
                .collect(),
        }
    }

    #[test]
    fn scaled_group_precedes_hardware_group() {
        let dropdown = dropdown_for(&record(
            "1440x900",
            &[("1440x900", "60", true)],
            &["2880x1800x32@60"],
        ));

        let labels: Vec<_> = dropdown.rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                SCALED_GROUP_LABEL,
                "1440x900 @ 60Hz",
                HARDWARE_GROUP_LABEL,
                "2880 x 1800 @ 60Hz",
            ]
        );
        assert_eq!(
            dropdown.rows[1].token.as_deref(),
            Some("scaled:1440x900:60:true")
        );
        assert_eq!(
            dropdown.rows[3].token.as_deref(),
            Some("hardware:2880x1800x32@60")
        );
        assert_eq!(dropdown.selected, Some(1));
    }

    #[test]
    fn hardware_prefix_match_wins_over_scaled_match() {
        let dropdown = dropdown_for(&record(
            "1920x1080",
            &[("1920x1080", "60", false), ("1280x720", "60", true)],
            &["1280x720x32@60", "1920x1080x32@50", "1920x1080x32@60"],
        ));

        assert_eq!(
            dropdown.rows[dropdown.selected.unwrap()].token.as_deref(),
            Some("hardware:1920x1080x32@60")
        );
    }

    #[test]
    fn no_match_selects_first_choice() {
        let dropdown = dropdown_for(&record("3008x1692", &[], &["800x600x32@60"]));

        assert_eq!(dropdown.selected, Some(2));
    }

    #[test]
    fn empty_lists_have_no_selection() {
        let dropdown = dropdown_for(&record("1440x900", &[], &[]));

        assert_eq!(dropdown.rows.len(), 2);
        assert!(dropdown.rows.iter().all(OptionRow::is_header));
        assert_eq!(dropdown.selected, None);
    }
}
