//! Execution settings for the batch engine.

/// Batch engine configuration.
///
/// `parallel` only takes effect when the crate is built with the `rayon`
/// feature; batches shorter than `par_min_batch` always run serially.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CircumCfg {
    pub parallel: bool,
    pub par_min_batch: usize,
}

impl Default for CircumCfg {
    fn default() -> Self {
        Self {
            parallel: cfg!(feature = "rayon"),
            par_min_batch: 4096,
        }
    }
}

impl CircumCfg {
    /// Serial evaluation regardless of batch size.
    pub fn serial() -> Self {
        Self {
            parallel: false,
            ..Self::default()
        }
    }

    #[inline]
    pub(crate) fn runs_parallel(&self, n: usize) -> bool {
        cfg!(feature = "rayon") && self.parallel && n >= self.par_min_batch
    }
}
