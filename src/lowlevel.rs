//! Low-level building blocks for custom search loops.
//!
//! These expose the per-anchor steps of the matcher: the color filter and the
//! placement check. Most users should prefer [`crate::Matcher`] or
//! [`crate::find_with_retries`].

pub use crate::fingerprint::os_seeded_rng;
pub use crate::search::{candidate_points, verify_placement};
