//! Sparse template fingerprints.
//!
//! A fingerprint is a short list of `(x, y, color)` samples taken from a
//! template at random coordinates, together with the template dimensions.
//! Matching a fingerprint costs one color lookup per sampled point instead of
//! one per template pixel.

use crate::image::{Color, Raster};
use crate::trace::{trace_event, trace_span};
use crate::util::{FingerMatchError, FingerMatchResult};
use rand::Rng;

mod sample;

pub use sample::os_seeded_rng;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A sampled template pixel: offset from the template origin plus its color.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FingerprintPoint {
    x: usize,
    y: usize,
    #[cfg_attr(feature = "serde", serde(flatten))]
    color: Color,
}

impl FingerprintPoint {
    /// Creates a point at template offset `(x, y)`.
    pub fn new(x: usize, y: usize, color: Color) -> Self {
        Self { x, y, color }
    }

    /// Column offset inside the template.
    pub fn x(&self) -> usize {
        self.x
    }

    /// Row offset inside the template.
    pub fn y(&self) -> usize {
        self.y
    }

    /// Color sampled at the offset.
    pub fn color(&self) -> Color {
        self.color
    }
}

/// Sampling parameters for building a fingerprint.
#[derive(Clone, Debug)]
pub struct SampleConfig {
    /// Number of points to sample. Must be positive.
    pub points: usize,
    /// Draw distinct coordinates only, capped at `width * height`.
    ///
    /// Off by default: plain sampling may pick the same coordinate twice,
    /// and enabling this lowers the false-negative rate of small fingerprints.
    pub dedup: bool,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            points: 10,
            dedup: false,
        }
    }
}

impl SampleConfig {
    /// Plain sampling of `points` coordinates.
    pub fn with_points(points: usize) -> Self {
        Self {
            points,
            ..Self::default()
        }
    }

    /// Number of points actually drawn from a `width` x `height` template.
    pub fn effective_points(&self, width: usize, height: usize) -> usize {
        if self.dedup {
            self.points.min(width.saturating_mul(height))
        } else {
            self.points
        }
    }
}

/// Wire form of a fingerprint; converted through [`Fingerprint::from_points`].
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct FingerprintRepr {
    template_width: usize,
    template_height: usize,
    points: Vec<FingerprintPoint>,
}

#[cfg(feature = "serde")]
impl TryFrom<FingerprintRepr> for Fingerprint {
    type Error = FingerMatchError;

    fn try_from(repr: FingerprintRepr) -> FingerMatchResult<Self> {
        Fingerprint::from_points(repr.template_width, repr.template_height, repr.points)
    }
}

/// Immutable fingerprint of a template image.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "FingerprintRepr"))]
pub struct Fingerprint {
    template_width: usize,
    template_height: usize,
    points: Vec<FingerprintPoint>,
}

impl Fingerprint {
    /// Samples `point_count` points from `template` with a freshly seeded generator.
    ///
    /// Every call draws its own seed from the operating system, so repeated
    /// calls over the same template give independent fingerprints.
    ///
    /// # Panics
    ///
    /// Panics if the template has zero width or height, or if the operating
    /// system cannot supply secure randomness.
    pub fn build<R: Raster + ?Sized>(template: &R, point_count: usize) -> Self {
        Self::build_with_config(template, &SampleConfig::with_points(point_count))
    }

    /// Same as [`Fingerprint::build`] with explicit sampling parameters.
    ///
    /// # Panics
    ///
    /// See [`Fingerprint::build`].
    pub fn build_with_config<R: Raster + ?Sized>(template: &R, cfg: &SampleConfig) -> Self {
        let mut rng = os_seeded_rng();
        Self::sample(template, cfg, &mut rng)
    }

    /// Samples a fingerprint using a caller-owned generator.
    ///
    /// # Panics
    ///
    /// Panics if the template has zero width or height.
    pub fn sample<R, G>(template: &R, cfg: &SampleConfig, rng: &mut G) -> Self
    where
        R: Raster + ?Sized,
        G: Rng,
    {
        let (width, height) = template.bounds();
        assert!(
            width > 0 && height > 0,
            "cannot fingerprint an empty {width}x{height} template"
        );
        let _span = trace_span!("fingerprint_build", width = width, height = height).entered();

        let count = cfg.effective_points(width, height);
        let coords = if cfg.dedup {
            sample::distinct_coords(width, height, count, rng)
        } else {
            sample::uniform_coords(width, height, count, rng)
        };
        let points: Vec<_> = coords
            .into_iter()
            .filter_map(|(x, y)| {
                template
                    .color_at(x, y)
                    .map(|color| FingerprintPoint::new(x, y, color))
            })
            .collect();

        trace_event!("fingerprint_built", points = points.len(), dedup = cfg.dedup);
        Self {
            template_width: width,
            template_height: height,
            points,
        }
    }

    /// Creates a fingerprint from explicit points.
    pub fn from_points(
        template_width: usize,
        template_height: usize,
        points: Vec<FingerprintPoint>,
    ) -> FingerMatchResult<Self> {
        if template_width == 0 || template_height == 0 {
            return Err(FingerMatchError::InvalidDimensions {
                width: template_width,
                height: template_height,
            });
        }
        if let Some(p) = points
            .iter()
            .find(|p| p.x >= template_width || p.y >= template_height)
        {
            return Err(FingerMatchError::PointOutOfBounds {
                x: p.x,
                y: p.y,
                width: template_width,
                height: template_height,
            });
        }
        Ok(Self {
            template_width,
            template_height,
            points,
        })
    }

    /// Width of the template the fingerprint was taken from.
    pub fn template_width(&self) -> usize {
        self.template_width
    }

    /// Height of the template the fingerprint was taken from.
    pub fn template_height(&self) -> usize {
        self.template_height
    }

    /// Sampled points in insertion order.
    pub fn points(&self) -> &[FingerprintPoint] {
        &self.points
    }

    /// Number of sampled points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True when no points were sampled.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
