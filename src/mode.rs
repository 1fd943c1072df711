#[cfg(doc)]
use windows::Win32;
use {
    crate::{win32::wide_str_from_slice_truncated, Resolution},
    std::{
        fmt::{self, Debug, Display, Formatter},
        mem,
    },
    widestring::WideCStr,
    windows::{
        core::PCWSTR,
        Win32::Graphics::Gdi::{EnumDisplaySettingsW, DEVMODEW, ENUM_DISPLAY_SETTINGS_MODE},
    },
};

/// A graphics mode reported for a display device
///
/// This wraps a [`DEVMODE`][devmode] as filled in by
/// [`EnumDisplaySettingsW`][enumdisplaysettingsw].
///
/// See also: [`Win32::Graphics::Gdi::DEVMODEW`]
///
/// [devmode]: https://learn.microsoft.com/en-us/windows/win32/api/wingdi/ns-wingdi-devmodew
/// [enumdisplaysettingsw]: https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-enumdisplaysettingsw
#[derive(Copy, Clone)]
#[repr(transparent)]
#[doc(alias = "DEVMODEW")]
#[doc(alias = "DEVMODE")]
pub struct DisplayMode {
    mode: DEVMODEW,
}

impl DisplayMode {
    /// Enumerate every graphics mode of the current display device
    ///
    /// Modes are reported as the OS lists them, so the same resolution and refresh rate
    /// usually appears several times (once per colour depth or scaling variant).
    /// Use [`supported_resolutions`](crate::supported_resolutions) for the distinct, sorted set.
    ///
    /// This is a wrapper around [`EnumDisplaySettingsW`][enumdisplaysettingsw],
    /// with no `lpszDeviceName` requested.
    ///
    /// [enumdisplaysettingsw]: https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-enumdisplaysettingsw
    #[doc(alias = "EnumDisplaySettingsW")]
    pub fn enumerate() -> impl Iterator<Item = Self> {
        Self::win32_enumerate().map(Self::from_win32)
    }

    /// Horizontal pixel count
    #[doc(alias = "dmPelsWidth")]
    pub const fn width(&self) -> u32 {
        self.mode.dmPelsWidth
    }

    /// Vertical pixel count
    #[doc(alias = "dmPelsHeight")]
    pub const fn height(&self) -> u32 {
        self.mode.dmPelsHeight
    }

    /// Refresh rate in Hz
    ///
    /// A value of `0` or `1` means the display hardware's default rate.
    #[doc(alias = "dmDisplayFrequency")]
    pub const fn refresh_rate(&self) -> u32 {
        self.mode.dmDisplayFrequency
    }

    /// Colour resolution, in bits per pixel
    #[doc(alias = "dmBitsPerPel")]
    pub const fn bits_per_pixel(&self) -> u32 {
        self.mode.dmBitsPerPel
    }

    /// Display mode flags
    pub fn flags(&self) -> DisplayModeFlags {
        DisplayModeFlags::from_bits_truncate(self.win32_display_flags())
    }

    /// The name of the display device this mode was reported for
    pub fn device_name<'a>(&'a self) -> impl Display + Debug + 'a {
        wide_str_from_slice_truncated(&self.mode.dmDeviceName).display()
    }

    /// The `(width, height, refresh_rate)` of this mode
    pub const fn resolution(&self) -> Resolution {
        Resolution::new(self.width(), self.height(), self.refresh_rate())
    }
}

#[allow(missing_docs)]
#[cfg_attr(feature = "doc", doc(cfg(feature = "win32")))]
#[cfg_attr(not(feature = "win32"), doc(hidden))]
impl DisplayMode {
    pub const fn from_win32_ref(mode: &DEVMODEW) -> &Self {
        unsafe { mem::transmute(mode) }
    }

    pub const fn from_win32(mode: DEVMODEW) -> Self {
        Self { mode }
    }

    pub const fn into_win32(self) -> DEVMODEW {
        self.mode
    }

    pub const fn win32_mode(&self) -> &DEVMODEW {
        &self.mode
    }

    #[doc(alias = "dmDisplayFlags")]
    pub fn win32_display_flags(&self) -> u32 {
        unsafe { self.mode.Anonymous2.dmDisplayFlags }
    }

    /// Describe the mode at `index`, or `None` once `index` is past the last mode
    #[doc(alias = "EnumDisplaySettingsW")]
    pub fn win32_enum(device: Option<&WideCStr>, index: u32) -> Option<DEVMODEW> {
        let mut mode = DEVMODEW::default();
        mode.dmSize = mem::size_of::<DEVMODEW>() as u16;
        unsafe {
            EnumDisplaySettingsW(
                device.map(|s| PCWSTR(s.as_ptr())),
                ENUM_DISPLAY_SETTINGS_MODE(index),
                &mut mode,
            )
        }
        .ok()
        .map(|()| mode)
        .ok()
    }

    #[doc(alias = "EnumDisplaySettingsW")]
    pub fn win32_enumerate() -> impl Iterator<Item = DEVMODEW> {
        (0..=u32::MAX)
            .map(|i| Self::win32_enum(None, i))
            .take_while(|m| m.is_some())
            .filter_map(|m| m)
    }
}

impl Debug for DisplayMode {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("DisplayMode")
            .field("device_name", &self.device_name())
            .field("width", &self.width())
            .field("height", &self.height())
            .field("refresh_rate", &self.refresh_rate())
            .field("bits_per_pixel", &self.bits_per_pixel())
            .field("flags", &self.flags())
            .finish()
    }
}

impl AsRef<DEVMODEW> for DisplayMode {
    fn as_ref(&self) -> &DEVMODEW {
        &self.mode
    }
}

impl From<DisplayMode> for DEVMODEW {
    fn from(mode: DisplayMode) -> Self {
        mode.mode
    }
}

impl From<DEVMODEW> for DisplayMode {
    fn from(mode: DEVMODEW) -> Self {
        Self::from_win32(mode)
    }
}

impl From<DisplayMode> for Resolution {
    fn from(mode: DisplayMode) -> Self {
        mode.resolution()
    }
}

bitflags::bitflags! {
    /// The [`dmDisplayFlags` field][displayflags] of a [`DisplayMode`]
    ///
    /// [displayflags]: https://learn.microsoft.com/en-us/windows/win32/api/wingdi/ns-wingdi-devmodew#members
    #[derive(Default)]
    pub struct DisplayModeFlags: u32 {
        /// The display is monochrome
        #[doc(alias = "DM_GRAYSCALE")]
        const GRAYSCALE = 0x0000_0001;

        /// The display mode is interlaced
        #[doc(alias = "DM_INTERLACED")]
        const INTERLACED = 0x0000_0002;
    }
}
