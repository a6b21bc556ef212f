//! Display mode records and the parsers for both tools' `list` output.
//!
//! Parsing is best effort: anything that does not look like a mode is dropped
//! without raising an error.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

static HARDWARE_MODE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([0-9]+)x([0-9]+)x([0-9]+)@([0-9]+)").expect("valid hardware mode pattern")
});
static PERSISTENT_SCREEN_ID: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"Persistent screen id: ([A-Za-z0-9_-]+)").expect("valid screen id pattern")
});
static MODE_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"mode [0-9]+: .*").expect("valid mode line pattern"));
static MODE_RES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"res:\s*([0-9]+x[0-9]+)").expect("valid resolution pattern"));
static MODE_HZ: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"hz:([0-9]+)").expect("valid refresh pattern"));

/// A display as reported by the operating system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhysicalDisplay {
    pub id: u32,
    pub label: Option<String>,
    pub width: u32,
    pub height: u32,
}

/// A HiDPI-capable mode from the scaling tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaledMode {
    pub res: String,
    pub hz: String,
    pub scaling: bool,
}

impl ScaledMode {
    /// Text shown in the dropdown, e.g. `1440x900 @ 60Hz`.
    pub fn label(&self) -> String {
        format!("{} @ {}Hz", self.res, self.hz)
    }
}

/// Everything discovery knows about one connected display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRecord {
    pub id: u32,
    pub label: String,
    pub current_resolution: String,
    pub hardware_modes: Vec<String>,
    pub scaled_modes: Vec<ScaledMode>,
}

impl DisplayRecord {
    pub fn new(
        display: &PhysicalDisplay,
        hardware_modes: Vec<String>,
        scaled_modes: Vec<ScaledMode>,
    ) -> Self {
        Self {
            id: display.id,
            label: display
                .label
                .clone()
                .filter(|label| !label.is_empty())
                .unwrap_or_else(|| format!("Display {}", display.id)),
            current_resolution: format!("{}x{}", display.width, display.height),
            hardware_modes,
            scaled_modes,
        }
    }
}

/// Result of parsing the scaling tool's `list` output.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScalingListing {
    pub persistent_screen_id: Option<String>,
    pub modes: Vec<ScaledMode>,
}

/// Sort key (width, height, refresh) of a hardware token. Tokens that do not
/// match the `WxHxD@R` shape sort as zero; oversized numbers saturate.
pub fn hardware_sort_key(token: &str) -> (u64, u64, u64) {
    // Captures are ASCII digits only, so a failed parse is an overflow.
    let number = |digits: &str| digits.parse().unwrap_or(u64::MAX);
    match HARDWARE_MODE.captures(token) {
        Some(caps) => (number(&caps[1]), number(&caps[2]), number(&caps[4])),
        None => (0, 0, 0),
    }
}

/// Extracts the `WxHxD@R` tokens from `screenresolution list` output.
///
/// Any whitespace-separated token containing both `x` and `@` is kept.
/// Duplicates collapse onto their first occurrence and the result is
/// stable-sorted by width, height and refresh rate.
pub fn parse_hardware_modes(output: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut modes: Vec<String> = output
        .lines()
        .flat_map(|line| line.split_whitespace())
        .filter(|token| token.contains('x') && token.contains('@'))
        .filter(|token| seen.insert(*token))
        .map(str::to_string)
        .collect();

    modes.sort_by_key(|token| hardware_sort_key(token));
    modes
}

/// Parses `displayplacer list` output.
///
/// The first `Persistent screen id` wins. Mode lines without both a
/// resolution and a refresh rate are dropped.
pub fn parse_scaling_listing(output: &str) -> ScalingListing {
    let persistent_screen_id = PERSISTENT_SCREEN_ID
        .captures(output)
        .map(|caps| caps[1].to_string());

    let modes = MODE_LINE
        .find_iter(output)
        .filter_map(|line| parse_scaled_mode(line.as_str()))
        .collect();

    ScalingListing {
        persistent_screen_id,
        modes,
    }
}

fn parse_scaled_mode(line: &str) -> Option<ScaledMode> {
    let res = MODE_RES.captures(line)?;
    let hz = MODE_HZ.captures(line)?;
    Some(ScaledMode {
        res: res[1].to_string(),
        hz: hz[1].to_string(),
        scaling: line.contains("scaling:on"),
    })
}

/// Human-readable form of a hardware token, `1920 x 1080 @ 60Hz`. Tokens that
/// do not match the hardware shape are shown as-is.
pub fn format_hardware_label(token: &str) -> String {
    match HARDWARE_MODE.captures(token) {
        Some(caps) => format!("{} x {} @ {}Hz", &caps[1], &caps[2], &caps[4]),
        None => token.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCREENRESOLUTION_LIST: &str = "\
Available Modes on Display 0
  2560x1600x32@60       1440x900x32@60        1920x1200x32@60       1024x768x32@60
  1440x900x32@60        1280x800x32@60        1920x1200x32@59       1280x800x32@60
  640x480x32@60
";

    const DISPLAYPLACER_LIST: &str = "\
Persistent screen id: 37D8832A-2D66-02CA-B9F7-8F30A301B230
Contextual screen id: 1
Serial screen id: s4251086178
Type: 13 inch builtin screen
Resolution: 1440x900
Hertz: 60
Color Depth: 8
Scaling: on
Origin: (0,0) - main display
Rotation: 0 - rotate internal screen example (may crash computer, but will be rotated after rebooting): `displayplacer \"id:37D8832A-2D66-02CA-B9F7-8F30A301B230 degree:90\"`
Enabled: true
Resolutions for rotation 0:
  mode 0: res:1440x900 hz:60 color_depth:8 scaling:on <-- current mode
  mode 1: res:2880x1800 hz:60 color_depth:8
  mode 2: res:1680x1050 hz:60 color_depth:8 scaling:on
  mode 3: res:1024x640 color_depth:8 scaling:on
  mode 4: hz:60 color_depth:8

Persistent screen id: 0F2B7C11-0000-1111-2222-333344445555
Resolutions for rotation 0:
  mode 0: res:1920x1080 hz:75 color_depth:8
";

    #[test]
    fn hardware_modes_are_deduplicated_and_sorted() {
        let modes = parse_hardware_modes(SCREENRESOLUTION_LIST);

        assert_eq!(
            modes,
            vec![
                "640x480x32@60",
                "1024x768x32@60",
                "1280x800x32@60",
                "1440x900x32@60",
                "1920x1200x32@59",
                "1920x1200x32@60",
                "2560x1600x32@60",
            ]
        );

        let keys: Vec<_> = modes.iter().map(|m| hardware_sort_key(m)).collect();
        assert!(keys.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn unmatched_hardware_tokens_are_kept_and_sort_first() {
        let modes = parse_hardware_modes("1920x1080x32@60 weird@x 800x600x32@60 plain 1x1");

        assert_eq!(modes, vec!["weird@x", "800x600x32@60", "1920x1080x32@60"]);
    }

    #[test]
    fn oversized_dimensions_sort_last() {
        let modes = parse_hardware_modes("5000000000x600x32@60 800x600x32@60");

        assert_eq!(modes, vec!["800x600x32@60", "5000000000x600x32@60"]);
        assert_eq!(hardware_sort_key("5000000000x600x32@60").0, 5_000_000_000);
        assert_eq!(
            hardware_sort_key("99999999999999999999999x600x32@60").0,
            u64::MAX
        );
    }

    #[test]
    fn only_ascii_digits_form_a_mode() {
        // 1920x1080x32@60 in Arabic-Indic digits.
        let token = "\u{661}\u{669}\u{662}\u{660}x\u{661}\u{660}\u{668}\u{660}x\u{663}\u{662}@\u{666}\u{660}";

        assert_eq!(hardware_sort_key(token), (0, 0, 0));
        assert_eq!(format_hardware_label(token), token);
        assert_eq!(
            parse_hardware_modes(&format!("800x600x32@60 {token}")),
            vec![token, "800x600x32@60"]
        );

        let listing =
            parse_scaling_listing("  mode 0: res:\u{661}\u{669}\u{662}\u{660}x1080 hz:60\n");
        assert!(listing.modes.is_empty());
    }

    #[test]
    fn hardware_parse_of_empty_output_is_empty() {
        assert!(parse_hardware_modes("").is_empty());
        assert!(parse_hardware_modes("Available Modes on Display 0\n").is_empty());
    }

    #[test]
    fn scaling_listing_takes_first_screen_id() {
        let listing = parse_scaling_listing(DISPLAYPLACER_LIST);

        assert_eq!(
            listing.persistent_screen_id.as_deref(),
            Some("37D8832A-2D66-02CA-B9F7-8F30A301B230")
        );
    }

    #[test]
    fn scaling_listing_drops_lines_without_res_or_hz() {
        let listing = parse_scaling_listing(DISPLAYPLACER_LIST);

        assert_eq!(
            listing.modes,
            vec![
                ScaledMode {
                    res: "1440x900".into(),
                    hz: "60".into(),
                    scaling: true
                },
                ScaledMode {
                    res: "2880x1800".into(),
                    hz: "60".into(),
                    scaling: false
                },
                ScaledMode {
                    res: "1680x1050".into(),
                    hz: "60".into(),
                    scaling: true
                },
                ScaledMode {
                    res: "1920x1080".into(),
                    hz: "75".into(),
                    scaling: false
                },
            ]
        );
    }

    #[test]
    fn scaling_listing_without_id_or_modes() {
        let listing = parse_scaling_listing("displayplacer: no screens found\n");

        assert_eq!(listing, ScalingListing::default());
    }

    #[test]
    fn resolution_may_be_padded_after_colon() {
        let listing = parse_scaling_listing("mode 7: res: 1280x720 hz:30\n");

        assert_eq!(listing.modes.len(), 1);
        assert_eq!(listing.modes[0].res, "1280x720");
        assert!(!listing.modes[0].scaling);
    }

    #[test]
    fn hardware_label_is_human_readable() {
        assert_eq!(format_hardware_label("1920x1080x32@60"), "1920 x 1080 @ 60Hz");
        assert_eq!(format_hardware_label("odd@x"), "odd@x");
    }

    #[test]
    fn display_record_falls_back_to_numbered_label() {
        let display = PhysicalDisplay {
            id: 3,
            label: None,
            width: 1512,
            height: 982,
        };
        let record = DisplayRecord::new(&display, vec![], vec![]);

        assert_eq!(record.label, "Display 3");
        assert_eq!(record.current_resolution, "1512x982");
    }
}
