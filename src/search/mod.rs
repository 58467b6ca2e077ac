//! Locating a fingerprinted template inside a context image.
//!
//! The scan visits anchors column by column (outer loop x, inner loop y) and
//! returns the first placement at which every fingerprint point matches. That
//! order is part of the contract: when a template occurs more than once, the
//! occurrence found first in this order is the one reported.

pub(crate) mod scan;

#[cfg(feature = "rayon")]
pub(crate) mod rayon;

use crate::fingerprint::Fingerprint;
use crate::image::Raster;
use crate::trace::{trace_debug, trace_span};

pub use scan::{candidate_points, find, verify_placement};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle, min-inclusive and max-exclusive.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rect {
    pub x0: usize,
    pub y0: usize,
    pub x1: usize,
    pub y1: usize,
}

impl Rect {
    /// Creates a rectangle from its top-left corner and size.
    ///
    /// # Panics
    ///
    /// Panics on overflow in debug builds; see [`Rect::checked_from_origin`].
    pub fn from_origin(x0: usize, y0: usize, width: usize, height: usize) -> Self {
        Self {
            x0,
            y0,
            x1: x0 + width,
            y1: y0 + height,
        }
    }

    /// Like [`Rect::from_origin`], returning `None` if a far edge overflows.
    pub fn checked_from_origin(x0: usize, y0: usize, width: usize, height: usize) -> Option<Self> {
        Some(Self {
            x0,
            y0,
            x1: x0.checked_add(width)?,
            y1: y0.checked_add(height)?,
        })
    }

    /// Horizontal extent, `x1 - x0`. Saturates at zero for inverted rectangles.
    pub fn width(&self) -> usize {
        self.x1.saturating_sub(self.x0)
    }

    /// Vertical extent, `y1 - y0`. Saturates at zero for inverted rectangles.
    pub fn height(&self) -> usize {
        self.y1.saturating_sub(self.y0)
    }

    /// True when `x0 <= x1` and `y0 <= y1`.
    pub fn is_ordered(&self) -> bool {
        self.x0 <= self.x1 && self.y0 <= self.y1
    }

    /// True when the rectangle fits inside a `width` x `height` image.
    pub fn fits_within(&self, width: usize, height: usize) -> bool {
        self.x1 <= width && self.y1 <= height
    }
}

/// A verified placement of a template in the context image.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Match {
    /// Template bounds in context coordinates.
    pub rect: Rect,
    /// Context pixel the scan was visiting when the match was verified.
    pub anchor_x: usize,
    pub anchor_y: usize,
    /// Index of the fingerprint point hypothesized to sit on the anchor.
    pub point_idx: usize,
}

/// Configuration for the matcher.
#[derive(Clone, Debug, Default)]
pub struct MatchConfig {
    /// Scan context columns in parallel (requires the `rayon` feature,
    /// ignored otherwise). The result is identical to the sequential scan.
    pub parallel: bool,
}

/// Matcher bound to one fingerprint.
pub struct Matcher {
    fingerprint: Fingerprint,
    cfg: MatchConfig,
}

impl Matcher {
    /// Creates a matcher with the default configuration.
    pub fn new(fingerprint: Fingerprint) -> Self {
        Self {
            fingerprint,
            cfg: MatchConfig::default(),
        }
    }

    /// Replaces the matcher configuration.
    pub fn with_config(mut self, cfg: MatchConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Returns the matcher configuration.
    pub fn config(&self) -> &MatchConfig {
        &self.cfg
    }

    /// Returns the fingerprint this matcher searches for.
    pub fn fingerprint(&self) -> &Fingerprint {
        &self.fingerprint
    }

    /// Returns the first verified placement in scan order, if any.
    pub fn find<R: Raster + Sync + ?Sized>(&self, context: &R) -> Option<Match> {
        find_with_config(context, &self.fingerprint, &self.cfg)
    }
}

/// Dispatches to the sequential or parallel scan.
pub fn find_with_config<R: Raster + Sync + ?Sized>(
    context: &R,
    fingerprint: &Fingerprint,
    cfg: &MatchConfig,
) -> Option<Match> {
    let (width, height) = context.bounds();
    let _span = trace_span!(
        "find",
        width = width,
        height = height,
        points = fingerprint.len(),
        parallel = cfg.parallel
    )
    .entered();

    #[cfg(feature = "rayon")]
    let found = if cfg.parallel {
        self::rayon::find_par(context, fingerprint)
    } else {
        scan::find_sequential(context, fingerprint)
    };
    #[cfg(not(feature = "rayon"))]
    let found = scan::find_sequential(context, fingerprint);

    if let Some(m) = &found {
        trace_debug!(
            "match_found",
            x0 = m.rect.x0,
            y0 = m.rect.y0,
            x1 = m.rect.x1,
            y1 = m.rect.y1,
        );
    }
    found
}
