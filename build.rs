use std::env;
use std::path::PathBuf;

const HARDWARE_TOOL_PATH: &str = "bin/screenresolution";

fn main() {
    println!("cargo:rerun-if-changed={HARDWARE_TOOL_PATH}");

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").unwrap_or_default());
    if !manifest_dir.join(HARDWARE_TOOL_PATH).exists() {
        println!(
            "cargo:warning={HARDWARE_TOOL_PATH} was not found; the app will refuse to start until it is placed there."
        );
    }

    slint_build::compile("ui/app-window.slint").expect("Slint build failed");
}
