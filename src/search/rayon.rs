//! Column-parallel scan (feature-gated).
//!
//! Columns are scanned independently and combined with `find_map_first`, so
//! the reported match is the one the sequential scan would return, and
//! columns to the right of a found match are abandoned.

use super::scan::scan_column;
use super::Match;
use crate::fingerprint::Fingerprint;
use crate::image::Raster;
use rayon::prelude::*;

pub(crate) fn find_par<R: Raster + Sync + ?Sized>(
    context: &R,
    fingerprint: &Fingerprint,
) -> Option<Match> {
    (0..context.width())
        .into_par_iter()
        .find_map_first(|x| scan_column(context, fingerprint, x))
}
