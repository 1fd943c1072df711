#![warn(missing_docs)]
#![cfg_attr(feature = "doc", feature(doc_cfg))]

//! Supported desktop resolutions on Windows.
//!
//! Lists every `(width, height, refresh rate)` the current display device reports through
//! `EnumDisplaySettingsW`, without duplicates, ordered by width, then height, then refresh rate.
//! This includes modes above a secondary monitor's native resolution when that monitor accepts
//! and downsamples the signal of a duplicated desktop.
//!
//! # Example
//!
//! ```rust,no_run
//! use supported_resolutions::supported_resolutions;
//!
//! for res in supported_resolutions() {
//!     println!("{res}");
//! }
//! ```
//!
//! Any [`ModeSource`] can be enumerated the same way:
//!
//! ```rust
//! use supported_resolutions::{supported_resolutions_from, Resolution};
//!
//! let reported = [
//!     Resolution::new(1920, 1080, 60),
//!     Resolution::new(1920, 1080, 60),
//!     Resolution::new(3840, 2160, 30),
//! ];
//! assert_eq!(supported_resolutions_from(&reported), [
//!     Resolution::new(1920, 1080, 60),
//!     Resolution::new(3840, 2160, 30),
//! ]);
//! ```

#[cfg(windows)]
pub use self::mode::{DisplayMode, DisplayModeFlags};
pub use self::{
    desktop::DesktopModes,
    resolution::Resolution,
    source::{from_fn, supported_resolutions, supported_resolutions_from, FromFn, ModeSource},
};

mod desktop;
#[cfg(windows)]
mod mode;
mod resolution;
mod source;

#[cfg(windows)]
#[cfg_attr(feature = "doc", doc(cfg(feature = "win32")))]
pub mod win32 {
    //! [`windows`] API re-exports

    #[allow(missing_docs)]
    #[cfg_attr(feature = "doc", doc(cfg(feature = "win32")))]
    #[cfg_attr(not(feature = "win32"), doc(hidden))]
    #[doc(no_inline)]
    pub use windows::Win32::Graphics::Gdi::{DEVMODEW, ENUM_DISPLAY_SETTINGS_MODE};
    pub use {
        widestring::{self, WideCStr, WideCString, WideStr, WideString},
        windows::{self, core, Win32},
    };

    pub(crate) fn wide_str_from_slice_truncated(sz: &[u16]) -> &WideStr {
        match WideCStr::from_slice_truncate(sz) {
            Ok(str) => str.as_ref(),
            Err(_) => WideStr::from_slice(sz),
        }
    }
}
