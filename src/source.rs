use {
    crate::Resolution,
    std::{collections::BTreeSet, rc::Rc, sync::Arc},
};

/// Something that can describe the display mode at a given index
///
/// Implementations must report `None` once `index` is past the last available mode.
/// [`DesktopModes`](crate::DesktopModes) is the platform implementation, and slices, vectors
/// and closures can stand in for it.
pub trait ModeSource {
    /// The display mode at `index`, or `None` when the source is exhausted
    fn mode(&self, index: u32) -> Option<Resolution>;

    /// All distinct modes reported by this source, in ascending order
    ///
    /// See [`supported_resolutions_from`].
    fn resolutions(&self) -> Vec<Resolution> {
        supported_resolutions_from(self)
    }
}

/// Every distinct [`Resolution`] reported by the current desktop, in ascending order
///
/// An empty vector is returned when no modes can be enumerated,
/// including on platforms without a display settings API.
///
/// # Example
///
/// ```rust,no_run
/// for res in supported_resolutions::supported_resolutions() {
///     println!("{}x{} : {}", res.width(), res.height(), res.refresh_rate());
/// }
/// ```
#[doc(alias = "EnumDisplaySettingsW")]
pub fn supported_resolutions() -> Vec<Resolution> {
    supported_resolutions_from(&crate::DesktopModes)
}

/// Enumerate `source` from index `0` until it is exhausted,
/// returning every distinct mode ordered by width, height, then refresh rate
pub fn supported_resolutions_from<S: ModeSource + ?Sized>(source: &S) -> Vec<Resolution> {
    let mut reported = 0usize;
    let modes: BTreeSet<Resolution> = (0..=u32::MAX)
        .map(|i| source.mode(i))
        .take_while(|mode| mode.is_some())
        .filter_map(|mode| mode)
        .inspect(|mode| {
            log::trace!("display mode {}: {}", reported, mode);
            reported += 1;
        })
        .collect();
    log::debug!("{} display modes reported, {} distinct", reported, modes.len());

    modes.into_iter().collect()
}

impl ModeSource for [Resolution] {
    fn mode(&self, index: u32) -> Option<Resolution> {
        self.get(index as usize).copied()
    }
}

impl<const N: usize> ModeSource for [Resolution; N] {
    fn mode(&self, index: u32) -> Option<Resolution> {
        self[..].mode(index)
    }
}

impl ModeSource for Vec<Resolution> {
    fn mode(&self, index: u32) -> Option<Resolution> {
        self[..].mode(index)
    }
}

/// A [`ModeSource`] that calls a closure for each index
///
/// Created by [`from_fn`].
#[derive(Clone)]
pub struct FromFn<F> {
    f: F,
}

/// Wrap a closure as a [`ModeSource`]
///
/// ```rust
/// use supported_resolutions::{from_fn, ModeSource, Resolution};
///
/// let source = from_fn(|i| match i {
///     0 | 1 => Some(Resolution::new(1920, 1080, 60)),
///     _ => None,
/// });
/// assert_eq!(source.resolutions(), [Resolution::new(1920, 1080, 60)]);
/// ```
pub fn from_fn<F: Fn(u32) -> Option<Resolution>>(f: F) -> FromFn<F> {
    FromFn { f }
}

impl<F: Fn(u32) -> Option<Resolution>> ModeSource for FromFn<F> {
    fn mode(&self, index: u32) -> Option<Resolution> {
        (self.f)(index)
    }
}

impl<'a, S: ModeSource + ?Sized> ModeSource for &'a S {
    fn mode(&self, index: u32) -> Option<Resolution> {
        (**self).mode(index)
    }
}

impl<S: ModeSource + ?Sized> ModeSource for Box<S> {
    fn mode(&self, index: u32) -> Option<Resolution> {
        (**self).mode(index)
    }
}

impl<S: ModeSource + ?Sized> ModeSource for Rc<S> {
    fn mode(&self, index: u32) -> Option<Resolution> {
        (**self).mode(index)
    }
}

impl<S: ModeSource + ?Sized> ModeSource for Arc<S> {
    fn mode(&self, index: u32) -> Option<Resolution> {
        (**self).mode(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use k9::assert_equal as assert_eq;
    use std::cell::Cell;

    fn init_logging() {
        let _ = env_logger::Builder::new()
            .is_test(true)
            .filter_level(log::LevelFilter::Trace)
            .try_init();
    }

    fn res(width: u32, height: u32, refresh_rate: u32) -> Resolution {
        Resolution::new(width, height, refresh_rate)
    }

    #[test]
    fn duplicates_collapse() {
        init_logging();
        let source = [res(1920, 1080, 60), res(1920, 1080, 60), res(3840, 2160, 30)];
        assert_eq!(supported_resolutions_from(&source), vec![
            res(1920, 1080, 60),
            res(3840, 2160, 30)
        ]);
    }

    #[test]
    fn ordered_by_width_then_height_then_refresh_rate() {
        init_logging();
        let source = vec![res(3840, 2160, 120), res(3440, 1440, 144), res(3840, 2160, 60)];
        assert_eq!(source.resolutions(), vec![
            res(3440, 1440, 144),
            res(3840, 2160, 60),
            res(3840, 2160, 120)
        ]);
    }

    #[test]
    fn empty_source() {
        init_logging();
        let source: [Resolution; 0] = [];
        assert_eq!(supported_resolutions_from(&source), Vec::<Resolution>::new());
        assert_eq!(supported_resolutions_from(&from_fn(|_| None)), Vec::<Resolution>::new());
    }

    #[test]
    fn single_mode() {
        let source = [res(1280, 720, 60)];
        assert_eq!(supported_resolutions_from(&source), vec![res(1280, 720, 60)]);
    }

    #[test]
    fn stops_at_first_exhaustion() {
        let calls = Cell::new(0u32);
        let source = from_fn(|i| {
            calls.set(calls.get() + 1);
            match i {
                0 => Some(res(800, 600, 60)),
                1 => None,
                _ => Some(res(1024, 768, 60)),
            }
        });
        assert_eq!(supported_resolutions_from(&source), vec![res(800, 600, 60)]);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn colour_depth_variants_and_shuffled_input() {
        init_logging();
        // the OS repeats each triple once per colour depth, in no particular order
        let raw = [
            res(1920, 1080, 144),
            res(640, 480, 60),
            res(1920, 1080, 60),
            res(640, 480, 60),
            res(1920, 1080, 144),
            res(1600, 900, 60),
            res(1920, 1080, 60),
            res(640, 480, 60),
            res(1600, 900, 60),
        ];
        let out = supported_resolutions_from(&raw);
        assert_eq!(out, vec![
            res(640, 480, 60),
            res(1600, 900, 60),
            res(1920, 1080, 60),
            res(1920, 1080, 144)
        ]);

        let mut reversed = raw;
        reversed.reverse();
        assert_eq!(supported_resolutions_from(&reversed), out);
    }

    #[test]
    fn complete_sorted_and_unique() {
        let raw: Vec<Resolution> = (0..200u32)
            .map(|i| res(640 + (i * 7919) % 5 * 320, 480 + (i * 104729) % 3 * 240, 30 + (i % 4) * 30))
            .collect();
        let out = raw.resolutions();

        assert!(out.windows(2).all(|pair| pair[0] < pair[1]));
        for mode in &raw {
            assert_eq!(out.iter().filter(|&m| m == mode).count(), 1);
        }
        for mode in &out {
            assert!(raw.contains(mode));
        }
    }

    #[test]
    fn deterministic() {
        let source = Box::new(vec![res(2560, 1440, 165), res(1920, 1080, 60), res(2560, 1440, 60)]);
        assert_eq!(source.resolutions(), source.resolutions());
        let shared = Arc::new(source);
        assert_eq!(supported_resolutions_from(&shared), shared.resolutions());
    }

    #[test]
    fn desktop_is_total() {
        // whatever the host reports, the result is sorted and unique
        let out = supported_resolutions();
        assert!(out.windows(2).all(|pair| pair[0] < pair[1]));
        #[cfg(not(windows))]
        assert_eq!(out, Vec::<Resolution>::new());
    }
}
