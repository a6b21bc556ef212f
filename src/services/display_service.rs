//! Enumerates the physical displays attached to the machine.

use crate::error::{AppError, Result};
use crate::modes::PhysicalDisplay;

/// Service for listing connected screens.
pub struct DisplayService;

impl DisplayService {
    /// Creates a new display service.
    pub fn new() -> Self {
        Self
    }

    /// Lists every connected screen with its size in points.
    pub fn physical_displays(&self) -> Result<Vec<PhysicalDisplay>> {
        #[cfg(target_os = "macos")]
        {
            self.physical_displays_macos()
        }

        #[cfg(not(target_os = "macos"))]
        {
            Err(AppError::Platform(
                "Display enumeration is supported only on macOS".to_string(),
            ))
        }
    }

    #[cfg(target_os = "macos")]
    fn physical_displays_macos(&self) -> Result<Vec<PhysicalDisplay>> {
        use objc2::rc::{autoreleasepool, Retained};
        use objc2::runtime::AnyObject;
        use objc2::{msg_send, ClassType};
        use objc2_app_kit::NSScreen;
        use objc2_foundation::{NSArray, NSRect, NSString};

        autoreleasepool(|_| {
            let screens: Option<Retained<NSArray<NSScreen>>> = unsafe {
                // 安全性: Cocoaのクラスメソッド呼び出し
                msg_send![NSScreen::class(), screens]
            };
            let screens =
                screens.ok_or_else(|| AppError::Platform("No display found".to_string()))?;

            let number_key = NSString::from_str("NSScreenNumber");
            let mut displays = Vec::with_capacity(screens.count());

            for (index, screen) in screens.iter().enumerate() {
                let frame: NSRect = unsafe { msg_send![&*screen, frame] };

                let name: Option<Retained<NSString>> = unsafe {
                    // 安全性: localizedNameはmacOS 10.15以降で利用可能
                    msg_send![&*screen, localizedName]
                };

                let description: Option<Retained<AnyObject>> =
                    unsafe { msg_send![&*screen, deviceDescription] };
                let number: Option<Retained<AnyObject>> = match &description {
                    Some(description) => unsafe {
                        msg_send![&**description, objectForKey: &*number_key]
                    },
                    None => None,
                };
                let id: u32 = match &number {
                    Some(number) => unsafe { msg_send![&**number, unsignedIntValue] },
                    None => index as u32,
                };

                displays.push(PhysicalDisplay {
                    id,
                    label: name.map(|name| name.to_string()),
                    width: frame.size.width.round() as u32,
                    height: frame.size.height.round() as u32,
                });
            }

            Ok(displays)
        })
    }
}

impl Default for DisplayService {
    fn default() -> Self {
        Self::new()
    }
}
