//! Biquad (bi-quadratic) filter section.
//!
//! One second-order section of an SOS cascade. Rows use the scipy
//! `output='sos'` layout `[b0, b1, b2, a0, a1, a2]`.

use num_complex::Complex64;

/// Second-order IIR section with Direct Form I state.
///
/// ```text
/// y[n] = b0*x[n] + b1*x[n-1] + b2*x[n-2]
///                - a1*y[n-1] - a2*y[n-2]
/// ```
///
/// Coefficients are stored normalised by `a0`.
#[derive(Debug, Clone, PartialEq)]
pub struct Biquad {
    /// Feedforward coefficients
    b0: f64,
    b1: f64,
    b2: f64,

    /// Feedback coefficients
    a1: f64,
    a2: f64,

    /// Input delay line: x[n-1], x[n-2]
    x1: f64,
    x2: f64,

    /// Output delay line: y[n-1], y[n-2]
    y1: f64,
    y2: f64,
}

impl Biquad {
    /// Creates a new biquad with passthrough coefficients.
    ///
    /// Initial state: `y[n] = x[n]` (no filtering)
    pub fn new() -> Self {
        Self {
            b0: 1.0,
            b1: 0.0,
            b2: 0.0,
            a1: 0.0,
            a2: 0.0,
            x1: 0.0,
            x2: 0.0,
            y1: 0.0,
            y2: 0.0,
        }
    }

    /// Builds a section from an SOS row `[b0, b1, b2, a0, a1, a2]`.
    ///
    /// Returns `None` when `a0` is zero.
    pub fn from_row(row: [f64; 6]) -> Option<Self> {
        if row[3] == 0.0 {
            return None;
        }
        let mut biquad = Self::new();
        biquad.set_coefficients(row[0], row[1], row[2], row[3], row[4], row[5]);
        Some(biquad)
    }

    /// Sets the biquad coefficients.
    ///
    /// # Arguments
    ///
    /// * `b0, b1, b2` - Feedforward coefficients
    /// * `a0, a1, a2` - Feedback coefficients (a0 is typically 1.0)
    ///
    /// Note: This function normalizes by a0 internally.
    pub fn set_coefficients(&mut self, b0: f64, b1: f64, b2: f64, a0: f64, a1: f64, a2: f64) {
        let a0_inv = 1.0 / a0;
        self.b0 = b0 * a0_inv;
        self.b1 = b1 * a0_inv;
        self.b2 = b2 * a0_inv;
        self.a1 = a1 * a0_inv;
        self.a2 = a2 * a0_inv;
    }

    /// Normalised coefficients as an SOS row (`a0 == 1`).
    pub fn coefficients(&self) -> [f64; 6] {
        [self.b0, self.b1, self.b2, 1.0, self.a1, self.a2]
    }

    /// Processes a single sample through the biquad filter.
    #[inline]
    pub fn process(&mut self, input: f64) -> f64 {
        let output = self.b0 * input + self.b1 * self.x1 + self.b2 * self.x2
            - self.a1 * self.y1
            - self.a2 * self.y2;

        self.x2 = self.x1;
        self.x1 = input;
        self.y2 = self.y1;
        self.y1 = output;

        output
    }

    /// Clears the filter state (delay lines).
    ///
    /// Useful for resetting the filter without changing coefficients.
    pub fn clear(&mut self) {
        self.x1 = 0.0;
        self.x2 = 0.0;
        self.y1 = 0.0;
        self.y2 = 0.0;
    }

    /// Complex response at normalised angular frequency `omega` (rad/sample).
    pub fn response_at(&self, omega: f64) -> Complex64 {
        let z1 = Complex64::from_polar(1.0, -omega);
        let z2 = z1 * z1;
        let num = self.b0 + z1 * self.b1 + z2 * self.b2;
        let den = 1.0 + z1 * self.a1 + z2 * self.a2;
        num / den
    }
}

impl Default for Biquad {
    fn default() -> Self {
        Self::new()
    }
}
