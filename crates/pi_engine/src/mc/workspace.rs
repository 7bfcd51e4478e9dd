//! Pre-allocated sample buffer for the trial loop.
//!
//! [`BatchWorkspace`] holds the uniforms for one estimate. It is allocated
//! once per generator and refilled for every trial, so the inner loop runs
//! without heap allocation.

/// Reusable buffer of uniform samples for one estimate.
///
/// # Examples
///
/// ```rust
/// use pi_engine::mc::BatchWorkspace;
///
/// let mut workspace = BatchWorkspace::new(100);
/// workspace.samples_mut().fill(0.5);
/// assert_eq!(workspace.samples().len(), 100);
/// ```
#[derive(Clone, Debug)]
pub struct BatchWorkspace {
    /// Uniform samples for the current estimate.
    samples: Vec<f64>,
}

impl BatchWorkspace {
    /// Creates a workspace holding `size` zeroed samples.
    pub fn new(size: usize) -> Self {
        Self {
            samples: vec![0.0; size],
        }
    }

    /// Returns the current batch.
    #[inline]
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Returns the current batch for refilling.
    #[inline]
    pub fn samples_mut(&mut self) -> &mut [f64] {
        &mut self.samples
    }
}
