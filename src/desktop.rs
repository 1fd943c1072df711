#[cfg(windows)]
use crate::DisplayMode;
use crate::{ModeSource, Resolution};

/// The display modes of the calling thread's current display device
///
/// On Windows this queries [`EnumDisplaySettingsW`][enumdisplaysettingsw] with no device name,
/// one index at a time. Other platforms have no such API, and report no modes.
///
/// [enumdisplaysettingsw]: https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-enumdisplaysettingsw
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[doc(alias = "EnumDisplaySettingsW")]
pub struct DesktopModes;

impl ModeSource for DesktopModes {
    #[cfg(windows)]
    fn mode(&self, index: u32) -> Option<Resolution> {
        DisplayMode::win32_enum(None, index).map(|mode| DisplayMode::from_win32(mode).resolution())
    }

    #[cfg(not(windows))]
    fn mode(&self, _index: u32) -> Option<Resolution> {
        None
    }
}
