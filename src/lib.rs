//! FingerMatch locates a known template inside a larger image by sparse
//! fingerprint matching.
//!
//! A [`Fingerprint`] samples a handful of random `(x, y, color)` points from the
//! template. The [`Matcher`] scans the context image, keeps anchors whose color
//! matches some fingerprint point, and verifies the whole fingerprint at the
//! implied translation. The first verified placement wins. Only translation is
//! modeled and matching is exact on RGB (alpha is ignored).
//!
//! Single fingerprints are probabilistic; [`FingerprintSet`] and
//! [`find_with_retries`] repeat the search with fresh fingerprints. The column
//! scan can run in parallel via the `rayon` feature without changing results.

pub mod fingerprint;
pub mod image;
pub mod lowlevel;
pub mod search;
pub mod set;
mod trace;
pub mod util;

#[cfg(feature = "image-io")]
pub use crate::image::io;

pub use fingerprint::{Fingerprint, FingerprintPoint, SampleConfig};
pub use crate::image::{Color, ImageView, OwnedImage, Raster};
pub use search::{find, find_with_config, Match, MatchConfig, Matcher, Rect};
pub use set::{
    find_with_retries, find_with_retries_config, FingerprintSet, RetryConfig, RetryOutcome,
};
pub use util::{FingerMatchError, FingerMatchResult};
