//! Cascade of second-order sections.
//!
//! [`SosCascade`] runs a signal through each [`Biquad`] in turn, starting
//! from zero state. Filtering a whole signal with [`SosCascade::filter`]
//! gives the same output as scipy's `sosfilt` for the same rows.

use crate::biquad::Biquad;
use crate::error::{DesignError, Result};
use num_complex::Complex64;
use std::f64::consts::TAU;

/// Series connection of biquad sections.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SosCascade {
    sections: Vec<Biquad>,
}

impl SosCascade {
    /// Builds a cascade from SOS rows `[b0, b1, b2, a0, a1, a2]`.
    ///
    /// # Errors
    ///
    /// [`DesignError::DegenerateSection`] if any row has `a0 == 0`.
    pub fn new(rows: &[[f64; 6]]) -> Result<Self> {
        let sections = rows
            .iter()
            .enumerate()
            .map(|(index, row)| Biquad::from_row(*row).ok_or(DesignError::DegenerateSection { index }))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { sections })
    }

    /// The sections, first to last.
    pub fn sections(&self) -> &[Biquad] {
        &self.sections
    }

    /// Normalised SOS rows (`a0 == 1`).
    pub fn rows(&self) -> Vec<[f64; 6]> {
        self.sections.iter().map(Biquad::coefficients).collect()
    }

    /// Processes one sample through every section.
    #[inline]
    pub fn process(&mut self, input: f64) -> f64 {
        self.sections
            .iter_mut()
            .fold(input, |sample, section| section.process(sample))
    }

    /// Processes a block of samples, continuing from the current state.
    ///
    /// # Panics
    ///
    /// Debug builds panic if `input.len() != output.len()`.
    pub fn process_block(&mut self, input: &[f64], output: &mut [f64]) {
        debug_assert_eq!(
            input.len(),
            output.len(),
            "Input and output buffers must have same length"
        );
        for (inp, out) in input.iter().zip(output.iter_mut()) {
            *out = self.process(*inp);
        }
    }

    /// Filters a whole signal from zero initial state.
    ///
    /// The cascade itself is left untouched.
    pub fn filter(&self, signal: &[f64]) -> Vec<f64> {
        let mut state = self.clone();
        state.reset();
        signal.iter().map(|x| state.process(*x)).collect()
    }

    /// Response of the filter to a unit impulse at sample `at`.
    ///
    /// Returns `len` samples; samples before `at` are zero. An impulse
    /// position past the end yields all zeros.
    pub fn impulse_response(&self, len: usize, at: usize) -> Vec<f64> {
        let mut impulse = vec![0.0; len];
        if let Some(sample) = impulse.get_mut(at) {
            *sample = 1.0;
        }
        self.filter(&impulse)
    }

    /// Clears every section's delay lines.
    pub fn reset(&mut self) {
        for section in &mut self.sections {
            section.clear();
        }
    }

    /// Complex frequency response at `freq_hz` for sample rate `sample_rate`.
    pub fn frequency_response_at(&self, freq_hz: f64, sample_rate: f64) -> Complex64 {
        let omega = TAU * freq_hz / sample_rate;
        self.sections
            .iter()
            .fold(Complex64::new(1.0, 0.0), |acc, section| acc * section.response_at(omega))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ONE_POLE: [f64; 6] = [0.5, 0.0, 0.0, 1.0, -0.5, 0.0];

    #[test]
    fn empty_cascade_is_identity() {
        let mut cascade = SosCascade::new(&[]).unwrap();
        assert_eq!(cascade.process(0.7), 0.7);
        assert_eq!(cascade.frequency_response_at(10.0, 100.0), Complex64::new(1.0, 0.0));
    }

    #[test]
    fn degenerate_row_reports_its_index() {
        let rows = [ONE_POLE, [1.0, 0.0, 0.0, 0.0, 0.0, 0.0]];
        assert_eq!(
            SosCascade::new(&rows),
            Err(DesignError::DegenerateSection { index: 1 })
        );
    }

    #[test]
    fn impulse_response_is_delayed() {
        let cascade = SosCascade::new(&[ONE_POLE]).unwrap();
        let h = cascade.impulse_response(6, 2);
        assert_eq!(h, vec![0.0, 0.0, 0.5, 0.25, 0.125, 0.0625]);
    }

    #[test]
    fn impulse_past_end_is_silent() {
        let cascade = SosCascade::new(&[ONE_POLE]).unwrap();
        assert!(cascade.impulse_response(4, 10).iter().all(|x| *x == 0.0));
    }

    #[test]
    fn filter_starts_from_zero_state() {
        let mut cascade = SosCascade::new(&[ONE_POLE, ONE_POLE]).unwrap();
        for _ in 0..10 {
            cascade.process(1.0);
        }
        let first = cascade.filter(&[1.0, 0.0, 0.0]);
        let second = cascade.filter(&[1.0, 0.0, 0.0]);
        assert_eq!(first, second);
        assert_eq!(first[0], 0.25);
    }

    #[test]
    fn process_block_matches_filter() {
        let cascade = SosCascade::new(&[ONE_POLE, [1.0, -1.0, 0.0, 1.0, 0.0, 0.0]]).unwrap();
        let input = [1.0, 2.0, -1.0, 0.5, 0.0];
        let mut output = [0.0; 5];
        let mut running = cascade.clone();
        running.process_block(&input, &mut output);
        assert_eq!(output.to_vec(), cascade.filter(&input));
    }
}
