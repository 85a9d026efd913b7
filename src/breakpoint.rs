//! Viewport breakpoints.
//!
//! A width is classified into exactly one [`Breakpoint`] by [`Breakpoints`],
//! which holds the two width thresholds. [`BreakpointSet`] describes which
//! breakpoints a gated view targets and supports unions, negation and ranges.

use std::ops::{BitOr, Bound, RangeBounds, RangeInclusive};

use bitflags::bitflags;

use crate::error::ResponsiveError;

bitflags! {
  #[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
  #[must_use]
  pub(crate) struct BreakpointFlags: u8 {
    const MOBILE = 1;
    const TABLET = 2;
    const DESKTOP = 4;
  }
}

/// One of the three mutually exclusive width classes, ordered narrowest first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Breakpoint {
    Mobile,
    Tablet,
    Desktop,
}

impl Breakpoint {
    pub const ALL: [Breakpoint; 3] = [Breakpoint::Mobile, Breakpoint::Tablet, Breakpoint::Desktop];

    pub const fn name(self) -> &'static str {
        match self {
            Breakpoint::Mobile => "Mobile",
            Breakpoint::Tablet => "Tablet",
            Breakpoint::Desktop => "Desktop",
        }
    }

    const fn flag(self) -> BreakpointFlags {
        match self {
            Breakpoint::Mobile => BreakpointFlags::MOBILE,
            Breakpoint::Tablet => BreakpointFlags::TABLET,
            Breakpoint::Desktop => BreakpointFlags::DESKTOP,
        }
    }
}

impl std::fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Width thresholds in device-independent pixels.
///
/// `Desktop` starts at `desktop`, `Tablet` at `tablet`, and everything narrower
/// is `Mobile`. Construction guarantees `0 < tablet < desktop`, so all three
/// breakpoints are reachable and every width maps to exactly one of them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawBreakpoints"))]
pub struct Breakpoints {
    tablet: u32,
    desktop: u32,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            tablet: 768,
            desktop: 992,
        }
    }
}

impl Breakpoints {
    pub fn new(tablet: u32, desktop: u32) -> Result<Self, ResponsiveError> {
        if tablet == 0 || tablet >= desktop {
            return Err(ResponsiveError::InvalidBreakpoints { tablet, desktop });
        }
        Ok(Self { tablet, desktop })
    }

    /// The narrowest `Tablet` width.
    pub fn tablet(&self) -> u32 {
        self.tablet
    }

    /// The narrowest `Desktop` width.
    pub fn desktop(&self) -> u32 {
        self.desktop
    }

    pub fn classify(&self, width: u32) -> Breakpoint {
        if width >= self.desktop {
            Breakpoint::Desktop
        } else if width >= self.tablet {
            Breakpoint::Tablet
        } else {
            Breakpoint::Mobile
        }
    }

    /// All widths that classify as `breakpoint`.
    pub fn widths(&self, breakpoint: Breakpoint) -> RangeInclusive<u32> {
        match breakpoint {
            Breakpoint::Mobile => 0..=self.tablet - 1,
            Breakpoint::Tablet => self.tablet..=self.desktop - 1,
            Breakpoint::Desktop => self.desktop..=u32::MAX,
        }
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct RawBreakpoints {
    #[serde(default = "default_tablet")]
    tablet: u32,
    #[serde(default = "default_desktop")]
    desktop: u32,
}

#[cfg(feature = "serde")]
fn default_tablet() -> u32 {
    Breakpoints::default().tablet
}

#[cfg(feature = "serde")]
fn default_desktop() -> u32 {
    Breakpoints::default().desktop
}

#[cfg(feature = "serde")]
impl TryFrom<RawBreakpoints> for Breakpoints {
    type Error = ResponsiveError;

    fn try_from(raw: RawBreakpoints) -> Result<Self, Self::Error> {
        Breakpoints::new(raw.tablet, raw.desktop)
    }
}

/// Converts a fractional logical width reported by a host into whole pixels.
/// Negative and NaN widths clamp to zero.
pub fn logical_width(width: f64) -> u32 {
    if width.is_nan() || width <= 0.0 {
        0
    } else if width >= u32::MAX as f64 {
        u32::MAX
    } else {
        width.floor() as u32
    }
}

/// The set of breakpoints a gated view is shown at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BreakpointSet {
    flags: BreakpointFlags,
}

impl BreakpointSet {
    pub const MOBILE: BreakpointSet = BreakpointSet::new(BreakpointFlags::MOBILE);
    pub const TABLET: BreakpointSet = BreakpointSet::new(BreakpointFlags::TABLET);
    pub const DESKTOP: BreakpointSet = BreakpointSet::new(BreakpointFlags::DESKTOP);
    pub const ALL: BreakpointSet = BreakpointSet::new(BreakpointFlags::all());

    const fn new(flags: BreakpointFlags) -> Self {
        Self { flags }
    }

    pub const fn not(set: BreakpointSet) -> Self {
        let flags = BreakpointFlags::all().difference(set.flags);
        Self { flags }
    }

    pub fn contains(&self, breakpoint: Breakpoint) -> bool {
        self.flags.contains(breakpoint.flag())
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// The targeted breakpoints, narrowest first.
    pub fn breakpoints(&self) -> impl Iterator<Item = Breakpoint> + '_ {
        Breakpoint::ALL.into_iter().filter(|bp| self.contains(*bp))
    }
}

impl From<Breakpoint> for BreakpointSet {
    fn from(breakpoint: Breakpoint) -> Self {
        Self::new(breakpoint.flag())
    }
}

impl BitOr for BreakpointSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self::new(self.flags | rhs.flags)
    }
}

impl BitOr<Breakpoint> for BreakpointSet {
    type Output = Self;

    fn bitor(self, rhs: Breakpoint) -> Self::Output {
        self | BreakpointSet::from(rhs)
    }
}

/// All breakpoints between the bounds, e.g. `range(Breakpoint::Tablet..)` for
/// everything at least as wide as a tablet.
pub fn range<R: RangeBounds<Breakpoint>>(range: R) -> BreakpointSet {
    let start = match range.start_bound() {
        Bound::Included(bp) => *bp as u8,
        Bound::Excluded(bp) => *bp as u8 + 1,
        Bound::Unbounded => Breakpoint::Mobile as u8,
    };
    let end = match range.end_bound() {
        Bound::Included(bp) => Some(*bp as u8),
        Bound::Excluded(bp) => (*bp as u8).checked_sub(1),
        Bound::Unbounded => Some(Breakpoint::Desktop as u8),
    };

    let flags = Breakpoint::ALL
        .into_iter()
        .filter(|bp| {
            let index = *bp as u8;
            index >= start && end.is_some_and(|end| index <= end)
        })
        .fold(BreakpointFlags::empty(), |flags, bp| flags | bp.flag());

    BreakpointSet { flags }
}
