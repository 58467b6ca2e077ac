//! Retrying a match with independently sampled fingerprints.
//!
//! A single fingerprint can miss: when most samples fall in a flat region the
//! first all-matching placement may be wrong or absent. Retrying with fresh
//! fingerprints amortizes that at the cost of extra scans. The number of
//! attempts is bounded and reported back to the caller.

use crate::fingerprint::{Fingerprint, SampleConfig};
use crate::image::Raster;
use crate::search::{find_with_config, Match, MatchConfig};
use crate::trace::{trace_event, trace_span};

/// Configuration for [`find_with_retries_config`].
#[derive(Clone, Debug)]
pub struct RetryConfig {
    /// Sampling parameters for every fingerprint.
    pub sample: SampleConfig,
    /// Maximum number of fingerprints to try.
    pub attempts: usize,
    /// Matcher configuration used for each attempt.
    pub matching: MatchConfig,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            sample: SampleConfig::default(),
            attempts: 50,
            matching: MatchConfig::default(),
        }
    }
}

/// Result of a bounded retry loop.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RetryOutcome {
    /// First match found, if any.
    pub found: Option<Match>,
    /// Number of fingerprints that were scanned.
    pub attempts: usize,
}

impl RetryOutcome {
    /// True when one of the attempts matched.
    pub fn is_found(&self) -> bool {
        self.found.is_some()
    }
}

/// Fingerprints of one template, tried in order until one matches.
#[derive(Clone, Debug, Default)]
pub struct FingerprintSet {
    fingerprints: Vec<Fingerprint>,
}

impl FingerprintSet {
    /// Builds `size` independently seeded fingerprints up front.
    ///
    /// # Panics
    ///
    /// See [`Fingerprint::build`].
    pub fn build<R: Raster + ?Sized>(template: &R, cfg: &SampleConfig, size: usize) -> Self {
        let fingerprints = (0..size)
            .map(|_| Fingerprint::build_with_config(template, cfg))
            .collect();
        Self { fingerprints }
    }

    /// Wraps existing fingerprints; they are tried in the given order.
    pub fn from_fingerprints(fingerprints: Vec<Fingerprint>) -> Self {
        Self { fingerprints }
    }

    /// Number of fingerprints in the set.
    pub fn len(&self) -> usize {
        self.fingerprints.len()
    }

    /// True when the set holds no fingerprints.
    pub fn is_empty(&self) -> bool {
        self.fingerprints.is_empty()
    }

    /// Fingerprints in the order they are tried.
    pub fn iter(&self) -> impl Iterator<Item = &Fingerprint> {
        self.fingerprints.iter()
    }

    /// Tries each fingerprint in order and stops at the first match.
    pub fn find<R: Raster + Sync + ?Sized>(&self, context: &R, cfg: &MatchConfig) -> RetryOutcome {
        let _span = trace_span!("find_with_retries", attempts = self.len()).entered();
        retry(self.len(), |idx| {
            find_with_config(context, &self.fingerprints[idx], cfg)
        })
    }
}

/// Builds fingerprints lazily and retries until one matches or `attempts` run out.
///
/// # Panics
///
/// See [`Fingerprint::build`].
pub fn find_with_retries<R, T>(
    context: &R,
    template: &T,
    point_count: usize,
    attempts: usize,
) -> RetryOutcome
where
    R: Raster + Sync + ?Sized,
    T: Raster + ?Sized,
{
    let cfg = RetryConfig {
        sample: SampleConfig::with_points(point_count),
        attempts,
        ..RetryConfig::default()
    };
    find_with_retries_config(context, template, &cfg)
}

/// [`find_with_retries`] with explicit sampling and matcher settings.
///
/// # Panics
///
/// See [`Fingerprint::build`].
pub fn find_with_retries_config<R, T>(context: &R, template: &T, cfg: &RetryConfig) -> RetryOutcome
where
    R: Raster + Sync + ?Sized,
    T: Raster + ?Sized,
{
    let _span = trace_span!("find_with_retries", attempts = cfg.attempts).entered();
    retry(cfg.attempts, |_| {
        let fingerprint = Fingerprint::build_with_config(template, &cfg.sample);
        find_with_config(context, &fingerprint, &cfg.matching)
    })
}

fn retry<F>(attempts: usize, mut attempt: F) -> RetryOutcome
where
    F: FnMut(usize) -> Option<Match>,
{
    for idx in 0..attempts {
        if let Some(found) = attempt(idx) {
            return RetryOutcome {
                found: Some(found),
                attempts: idx + 1,
            };
        }
        trace_event!("attempt_missed", attempt = idx + 1, attempts = attempts);
    }
    RetryOutcome {
        found: None,
        attempts,
    }
}
