//! Sequential anchor scan with early rejection.

use super::{Match, Rect};
use crate::fingerprint::{Fingerprint, FingerprintPoint};
use crate::image::{Color, Raster};

/// Finds the first placement of `fingerprint` in `context`, scanning sequentially.
///
/// Equivalent to [`super::find_with_config`] with the default configuration.
pub fn find<R: Raster + ?Sized>(context: &R, fingerprint: &Fingerprint) -> Option<Match> {
    find_sequential(context, fingerprint)
}

pub(crate) fn find_sequential<R: Raster + ?Sized>(
    context: &R,
    fingerprint: &Fingerprint,
) -> Option<Match> {
    (0..context.width()).find_map(|x| scan_column(context, fingerprint, x))
}

/// Scans anchors `(x, 0..height)` and returns the first verified match.
pub(crate) fn scan_column<R: Raster + ?Sized>(
    context: &R,
    fingerprint: &Fingerprint,
    x: usize,
) -> Option<Match> {
    for y in 0..context.height() {
        let Some(anchor) = context.color_at(x, y) else {
            continue;
        };
        for (point_idx, point) in candidate_points(fingerprint, anchor) {
            if let Some(rect) = verify_placement(context, fingerprint, x, y, point) {
                return Some(Match {
                    rect,
                    anchor_x: x,
                    anchor_y: y,
                    point_idx,
                });
            }
        }
    }
    None
}

/// Fingerprint points whose color equals `anchor` (alpha ignored), with their indices.
pub fn candidate_points(
    fingerprint: &Fingerprint,
    anchor: Color,
) -> impl Iterator<Item = (usize, &FingerprintPoint)> + '_ {
    fingerprint
        .points()
        .iter()
        .enumerate()
        .filter(move |(_, p)| p.color().same_rgb(&anchor))
}

/// Checks the hypothesis that fingerprint point `p` lies on context pixel `(x, y)`.
///
/// Every point `q` is translated to `(x - (p.x - q.x), y - (p.y - q.y))` and
/// must carry the same color there. The placement is rejected when any
/// translated coordinate is negative or the template rectangle would leave
/// (or overflow past) the context image.
pub fn verify_placement<R: Raster + ?Sized>(
    context: &R,
    fingerprint: &Fingerprint,
    x: usize,
    y: usize,
    p: &FingerprintPoint,
) -> Option<Rect> {
    let x0 = x.checked_sub(p.x())?;
    let y0 = y.checked_sub(p.y())?;
    let rect = Rect::checked_from_origin(
        x0,
        y0,
        fingerprint.template_width(),
        fingerprint.template_height(),
    )?;
    if !rect.fits_within(context.width(), context.height()) {
        return None;
    }

    for q in fingerprint.points() {
        let tx = (x + q.x()).checked_sub(p.x())?;
        let ty = (y + q.y()).checked_sub(p.y())?;
        match context.color_at(tx, ty) {
            Some(color) if color.same_rgb(&q.color()) => {}
            _ => return None,
        }
    }
    Some(rect)
}
