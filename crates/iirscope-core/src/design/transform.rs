//! Analog frequency transforms and the bilinear transform.
//!
//! All transforms operate on zpk form so that high orders stay well
//! conditioned; no polynomial is ever expanded.

use super::zpk::Zpk;
use num_complex::Complex64;

fn product<'a>(values: impl IntoIterator<Item = &'a Complex64>) -> Complex64 {
    values.into_iter().fold(Complex64::new(1.0, 0.0), |acc, v| acc * *v)
}

/// Lowpass prototype to lowpass with cutoff `wo` rad/s.
pub fn lowpass_to_lowpass(zpk: &Zpk, wo: f64) -> Zpk {
    let degree = zpk.degree();
    Zpk::new(
        zpk.zeros.iter().map(|z| *z * wo).collect(),
        zpk.poles.iter().map(|p| *p * wo).collect(),
        zpk.gain * wo.powi(degree as i32),
    )
}

/// Lowpass prototype to highpass with cutoff `wo` rad/s.
pub fn lowpass_to_highpass(zpk: &Zpk, wo: f64) -> Zpk {
    let degree = zpk.degree();
    let mut zeros: Vec<Complex64> = zpk.zeros.iter().map(|z| wo / *z).collect();
    let poles: Vec<Complex64> = zpk.poles.iter().map(|p| wo / *p).collect();
    zeros.extend(std::iter::repeat_n(Complex64::new(0.0, 0.0), degree));

    let neg_z = product(&zpk.zeros.iter().map(|z| -*z).collect::<Vec<_>>());
    let neg_p = product(&zpk.poles.iter().map(|p| -*p).collect::<Vec<_>>());
    Zpk::new(zeros, poles, zpk.gain * (neg_z / neg_p).re)
}

/// Lowpass prototype to bandpass centred on `wo` with bandwidth `bw` rad/s.
pub fn lowpass_to_bandpass(zpk: &Zpk, wo: f64, bw: f64) -> Zpk {
    let degree = zpk.degree();
    let split = |root: &Complex64| -> [Complex64; 2] {
        let scaled = *root * (bw / 2.0);
        let offset = (scaled * scaled - wo * wo).sqrt();
        [scaled + offset, scaled - offset]
    };

    let mut zeros: Vec<Complex64> = zpk.zeros.iter().flat_map(split).collect();
    let poles: Vec<Complex64> = zpk.poles.iter().flat_map(split).collect();
    zeros.extend(std::iter::repeat_n(Complex64::new(0.0, 0.0), degree));

    Zpk::new(zeros, poles, zpk.gain * bw.powi(degree as i32))
}

/// Lowpass prototype to bandstop centred on `wo` with bandwidth `bw` rad/s.
pub fn lowpass_to_bandstop(zpk: &Zpk, wo: f64, bw: f64) -> Zpk {
    let degree = zpk.degree();
    let split = |root: &Complex64| -> [Complex64; 2] {
        let inverted = (bw / 2.0) / *root;
        let offset = (inverted * inverted - wo * wo).sqrt();
        [inverted + offset, inverted - offset]
    };

    let mut zeros: Vec<Complex64> = zpk.zeros.iter().flat_map(split).collect();
    let poles: Vec<Complex64> = zpk.poles.iter().flat_map(split).collect();
    zeros.extend(std::iter::repeat_n(Complex64::new(0.0, wo), degree));
    zeros.extend(std::iter::repeat_n(Complex64::new(0.0, -wo), degree));

    let neg_z = product(&zpk.zeros.iter().map(|z| -*z).collect::<Vec<_>>());
    let neg_p = product(&zpk.poles.iter().map(|p| -*p).collect::<Vec<_>>());
    Zpk::new(zeros, poles, zpk.gain * (neg_z / neg_p).re)
}

/// Bilinear transform `s = 2·fs·(z − 1)/(z + 1)` of an analog zpk.
///
/// Zeros at infinity map to z = −1 (Nyquist).
pub fn bilinear(zpk: &Zpk, fs: f64) -> Zpk {
    let degree = zpk.degree();
    let fs2 = 2.0 * fs;

    let mut zeros: Vec<Complex64> = zpk.zeros.iter().map(|z| (fs2 + *z) / (fs2 - *z)).collect();
    let poles: Vec<Complex64> = zpk.poles.iter().map(|p| (fs2 + *p) / (fs2 - *p)).collect();
    zeros.extend(std::iter::repeat_n(Complex64::new(-1.0, 0.0), degree));

    let num = product(&zpk.zeros.iter().map(|z| fs2 - *z).collect::<Vec<_>>());
    let den = product(&zpk.poles.iter().map(|p| fs2 - *p).collect::<Vec<_>>());
    Zpk::new(zeros, poles, zpk.gain * (num / den).re)
}
