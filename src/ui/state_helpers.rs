//! Helper functions that push discovery results into ViewState properties.

use crate::modes::DisplayRecord;
use crate::state::panel::panel_height;
use crate::ui::options::{dropdown_for, Dropdown};
use log::debug;
use slint::ComponentHandle;

fn to_display_group(label: &str, dropdown: Dropdown) -> crate::DisplayGroup {
    let options: Vec<crate::ModeOption> = dropdown
        .rows
        .into_iter()
        .map(|row| crate::ModeOption {
            is_header: row.is_header(),
            label: row.label.into(),
            token: row.token.unwrap_or_default().into(),
        })
        .collect();

    crate::DisplayGroup {
        label: label.into(),
        options: slint::ModelRc::new(slint::VecModel::from(options)),
        selected_index: dropdown.selected.map(|i| i as i32).unwrap_or(-1),
    }
}

/// Replaces every dropdown and resizes the panel to fit the display count.
///
/// Groups: displays, panel-height, loading, expanded-index
pub fn set_display_records(ui: &crate::AppWindow, records: &[DisplayRecord]) {
    let groups: Vec<crate::DisplayGroup> = records
        .iter()
        .map(|record| {
            debug!(
                "Display {} ({}) currently at {}",
                record.id, record.label, record.current_resolution
            );
            to_display_group(&record.label, dropdown_for(record))
        })
        .collect();

    let view_state = ui.global::<crate::ViewState>();
    view_state.set_panel_height(panel_height(records.len()) as f32);
    view_state.set_expanded_index(-1);
    view_state.set_displays(slint::ModelRc::new(slint::VecModel::from(groups)));
    view_state.set_loading(false);
}

/// Shows the loading placeholder until the next discovery finishes.
pub fn set_loading(ui: &crate::AppWindow) {
    let view_state = ui.global::<crate::ViewState>();
    view_state.set_loading(true);
    view_state.set_expanded_index(-1);
}
