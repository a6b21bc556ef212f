//! Small AppKit calls needed by a menu-bar app. No-ops elsewhere.

/// Keeps the app out of the Dock and the app switcher.
#[cfg(target_os = "macos")]
pub fn hide_dock_icon() {
    use objc2::rc::Retained;
    use objc2::runtime::AnyObject;
    use objc2::{msg_send, ClassType};
    use objc2_app_kit::{NSApplication, NSApplicationActivationPolicy};

    let app: Retained<AnyObject> = unsafe { msg_send![NSApplication::class(), sharedApplication] };
    let accepted: bool = unsafe {
        msg_send![&*app, setActivationPolicy: NSApplicationActivationPolicy::Accessory]
    };
    if !accepted {
        log::warn!("Accessory activation policy was rejected");
    }
}

/// Brings the app to the front so the panel receives focus (and later, blur).
#[cfg(target_os = "macos")]
pub fn activate_app() {
    use objc2::rc::Retained;
    use objc2::runtime::AnyObject;
    use objc2::{msg_send, ClassType};
    use objc2_app_kit::NSApplication;

    let app: Retained<AnyObject> = unsafe { msg_send![NSApplication::class(), sharedApplication] };
    let _: () = unsafe { msg_send![&*app, activateIgnoringOtherApps: true] };
}

#[cfg(not(target_os = "macos"))]
pub fn hide_dock_icon() {}

#[cfg(not(target_os = "macos"))]
pub fn activate_app() {}
