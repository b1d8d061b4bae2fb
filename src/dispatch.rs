//! Parallel ray dispatch with scoped worker threads.
//!
//! The ray slice is cut into contiguous chunks, one per worker. Workers share
//! the canvas: two rays can cross the same pixel, and whichever store lands
//! last wins. Every store is a whole `u32`, so the result is always a color
//! some ray or obstacle actually wrote.

use crate::canvas::RayCanvas;
use crate::march::{march, MarchOutcome};
use crate::types::{Circle, Ray};
use log::trace;
use std::ops::Range;

/// Totals for one dispatch, summed over all workers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchStats {
    pub exited: usize,
    pub blocked: usize,
    pub pixels: usize,
}

impl DispatchStats {
    fn record(&mut self, outcome: MarchOutcome) {
        match outcome {
            MarchOutcome::Exited { steps } => {
                self.exited += 1;
                self.pixels += steps;
            }
            MarchOutcome::Blocked { steps, .. } => {
                self.blocked += 1;
                self.pixels += steps;
            }
        }
    }

    fn merge(&mut self, other: DispatchStats) {
        self.exited += other.exited;
        self.blocked += other.blocked;
        self.pixels += other.pixels;
    }
}

/// Split `0..len` into `workers` contiguous ranges of `len / workers` rays;
/// the last range also takes the remainder.
///
/// With more workers than rays every range but the last is empty.
pub fn partition(len: usize, workers: usize) -> Vec<Range<usize>> {
    assert!(workers >= 1, "worker count must be at least 1");
    let per_worker = len / workers;

    (0..workers)
        .map(|t| {
            let start = t * per_worker;
            let end = if t == workers - 1 { len } else { start + per_worker };
            start..end
        })
        .collect()
}

/// March every ray into `canvas` using `workers` threads.
/// Returns only once all workers have finished.
pub fn compute_rays(
    canvas: &RayCanvas,
    rays: &[Ray],
    obstacles: &[Circle],
    workers: usize,
) -> DispatchStats {
    let chunks = partition(rays.len(), workers);

    let stats = std::thread::scope(|s| {
        let handles: Vec<_> = chunks
            .into_iter()
            .filter(|range| !range.is_empty())
            .map(|range| {
                let chunk = &rays[range];
                s.spawn(move || {
                    let mut local = DispatchStats::default();
                    for ray in chunk {
                        local.record(march(canvas, ray, obstacles));
                    }
                    local
                })
            })
            .collect();

        let mut total = DispatchStats::default();
        for handle in handles {
            match handle.join() {
                Ok(local) => total.merge(local),
                Err(payload) => std::panic::resume_unwind(payload),
            }
        }
        total
    });

    trace!(
        "dispatch: {} rays on {} workers, {} exited, {} blocked, {} pixels",
        rays.len(),
        workers,
        stats.exited,
        stats.blocked,
        stats.pixels
    );
    stats
}
