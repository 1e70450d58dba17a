//! Full-length forward DFT

use rustfft::{FftPlanner, num_complex::Complex64};
use std::sync::Arc;

/// Forward FFT processor with a fixed-size plan.
///
/// Unlike a real-input spectrum helper, this keeps all N bins: the
/// analyzer needs the mirrored half to build its 0..fs frequency axis.
pub struct Fft {
    fft: Arc<dyn rustfft::Fft<f64>>,
    size: usize,
}

impl Fft {
    /// Create a new FFT processor for the given size
    pub fn new(size: usize) -> Self {
        let fft = FftPlanner::new().plan_fft_forward(size);
        Self { fft, size }
    }

    /// Unnormalised forward transform of real input.
    ///
    /// Input shorter than the FFT size is zero-padded; longer input is
    /// truncated. Returns `size` bins.
    pub fn forward(&self, input: &[f64]) -> Vec<Complex64> {
        let mut buffer: Vec<Complex64> = input
            .iter()
            .take(self.size)
            .map(|&x| Complex64::new(x, 0.0))
            .collect();
        buffer.resize(self.size, Complex64::new(0.0, 0.0));
        self.fft.process(&mut buffer);
        buffer
    }
}

/// DFT of `signal` at its own length.
pub fn spectrum(signal: &[f64]) -> Vec<Complex64> {
    Fft::new(signal.len()).forward(signal)
}

/// Convert a complex bin to dB; a true zero maps to `-inf`.
pub fn magnitude_db(bin: Complex64) -> f64 {
    let mag = bin.norm();
    if mag == 0.0 {
        f64::NEG_INFINITY
    } else {
        20.0 * mag.log10()
    }
}
