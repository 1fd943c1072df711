use std::{
    cmp::Ordering,
    fmt::{self, Display, Formatter},
};

/// A supported display mode: horizontal and vertical pixel counts plus refresh rate
///
/// Equality and ordering compare `width`, then `height`, then `refresh_rate`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Resolution {
    width: u32,
    height: u32,
    refresh_rate: u32,
}

impl Resolution {
    /// Describe a mode of `width`x`height` pixels refreshed `refresh_rate` times per second
    pub const fn new(width: u32, height: u32, refresh_rate: u32) -> Self {
        Self {
            width,
            height,
            refresh_rate,
        }
    }

    /// Horizontal pixel count
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Vertical pixel count
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Refresh rate in Hz, as reported by the OS
    #[doc(alias = "dmDisplayFrequency")]
    pub const fn refresh_rate(&self) -> u32 {
        self.refresh_rate
    }

    /// The `(width, height, refresh_rate)` triple
    pub const fn to_tuple(&self) -> (u32, u32, u32) {
        (self.width, self.height, self.refresh_rate)
    }
}

impl PartialOrd for Resolution {
    fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
        Some(self.cmp(rhs))
    }
}

impl Ord for Resolution {
    fn cmp(&self, rhs: &Self) -> Ordering {
        self.to_tuple().cmp(&rhs.to_tuple())
    }
}

impl Display for Resolution {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}x{} @ {} Hz", self.width, self.height, self.refresh_rate)
    }
}

impl From<(u32, u32, u32)> for Resolution {
    fn from((width, height, refresh_rate): (u32, u32, u32)) -> Self {
        Self::new(width, height, refresh_rate)
    }
}

impl From<Resolution> for (u32, u32, u32) {
    fn from(res: Resolution) -> Self {
        res.to_tuple()
    }
}
