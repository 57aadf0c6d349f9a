use log::{debug, warn};
use rayon::prelude::*;

use crate::frequency::{FrequencyMap, SharedFrequencyMap};

/// Turns the input lines into a completed `FrequencyMap`.
pub trait Strategy: Send + Sync {
    fn aggregate(&self, lines: &[String]) -> FrequencyMap;
}

/// One writer, lines in file order. Ties rank in file order.
#[derive(Debug, Default, Clone, Copy)]
pub struct Sequential;

impl Strategy for Sequential {
    fn aggregate(&self, lines: &[String]) -> FrequencyMap {
        let mut map = FrequencyMap::new();
        for line in lines {
            map.record_line(line);
        }
        map
    }
}

/// How concurrent workers combine their counts.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum MergePolicy {
    /// Each worker counts into a private map; maps are merged pairwise in
    /// line order. No locking, and first-seen order matches `Sequential`.
    #[default]
    PartitionMerge,
    /// All workers update one lock-guarded map. First-seen order, and so the
    /// order of tied counts, depends on thread scheduling.
    SharedLock,
}

/// Lines are spread over the rayon worker pool.
#[derive(Debug, Default, Clone, Copy)]
pub struct Concurrent {
    pub merge: MergePolicy,
    /// Run on a dedicated pool of this many workers instead of the global one.
    pub threads: Option<usize>,
}

impl Concurrent {
    pub fn new(merge: MergePolicy) -> Self {
        Self {
            merge,
            threads: None,
        }
    }

    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }

    fn count(&self, lines: &[String]) -> FrequencyMap {
        match self.merge {
            MergePolicy::PartitionMerge => lines
                .par_iter()
                .fold(FrequencyMap::new, |mut map, line| {
                    map.record_line(line);
                    map
                })
                .reduce(FrequencyMap::new, |mut left, right| {
                    left.merge(right);
                    left
                }),
            MergePolicy::SharedLock => {
                let shared = SharedFrequencyMap::new();
                lines.par_iter().for_each(|line| shared.record_line(line));
                shared.into_inner()
            }
        }
    }
}

impl Strategy for Concurrent {
    fn aggregate(&self, lines: &[String]) -> FrequencyMap {
        let Some(threads) = self.threads else {
            return self.count(lines);
        };
        match rayon::ThreadPoolBuilder::new().num_threads(threads).build() {
            Ok(pool) => {
                debug!("Counting on a dedicated pool of {} workers", threads);
                pool.install(|| self.count(lines))
            }
            Err(e) => {
                warn!("Could not build a pool of {} workers, using the global pool: {}", threads, e);
                self.count(lines)
            }
        }
    }
}

/// Which strategy a run uses.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionMode {
    #[default]
    Sequential,
    Concurrent,
}

impl ExecutionMode {
    pub fn strategy(self) -> Box<dyn Strategy> {
        match self {
            ExecutionMode::Sequential => Box::new(Sequential),
            ExecutionMode::Concurrent => Box::new(Concurrent::default()),
        }
    }
}
