//! Integration tests for iirscope-core filter design.
//!
//! Designs filters through the public API and checks them with signal-level
//! measurements: sine wave gain through the cascade, analytic response at
//! the band edges, and rejection of invalid parameters.

use iirscope_core::design::prototype;
use iirscope_core::{
    BandType, DesignError, FilterFamily, FilterParams, SosCascade, design, design_zpk,
};
use num_complex::Complex64;

const SAMPLE_RATE: f64 = 250.0;
const TAU: f64 = std::f64::consts::TAU;

/// Generate a sine wave buffer at the given frequency and sample rate.
fn generate_sine(freq_hz: f64, sample_rate: f64, num_samples: usize) -> Vec<f64> {
    (0..num_samples)
        .map(|n| (TAU * freq_hz * n as f64 / sample_rate).sin())
        .collect()
}

/// Measure RMS amplitude of a signal buffer.
fn rms(signal: &[f64]) -> f64 {
    let sum_sq: f64 = signal.iter().map(|&s| s * s).sum();
    (sum_sq / signal.len() as f64).sqrt()
}

/// Convert linear amplitude to dB.
fn to_db(linear: f64) -> f64 {
    20.0 * linear.max(1e-15).log10()
}

fn response_db(cascade: &SosCascade, freq_hz: f64) -> f64 {
    to_db(cascade.frequency_response_at(freq_hz, SAMPLE_RATE).norm())
}

// ============================================================================
// 1. Measured responses
// ============================================================================

/// Feed a sine through a cascade and measure the settled output level.
fn measure_gain_db(cascade: &SosCascade, freq_hz: f64) -> f64 {
    let num_samples = 5000;
    let settle = 2500;
    let input = generate_sine(freq_hz, SAMPLE_RATE, num_samples);
    let output = cascade.filter(&input);
    to_db(rms(&output[settle..]) / rms(&input[settle..]))
}

#[test]
fn butterworth_lowpass_measured_response() {
    let params = FilterParams::lowpass(FilterFamily::Butterworth, 4, 50.0, SAMPLE_RATE);
    let cascade = design(&params).unwrap();

    for &freq in &[2.0, 5.0, 10.0] {
        let gain_db = measure_gain_db(&cascade, freq);
        assert!(
            gain_db.abs() < 0.1,
            "Lowpass passband: {freq} Hz should be ~0 dB, got {gain_db:.2} dB"
        );
    }

    for &freq in &[100.0, 110.0] {
        let gain_db = measure_gain_db(&cascade, freq);
        assert!(
            gain_db < -20.0,
            "Lowpass stopband: {freq} Hz should be attenuated, got {gain_db:.1} dB"
        );
    }

    let at_cutoff = measure_gain_db(&cascade, 50.0);
    assert!(
        (at_cutoff + 3.01).abs() < 0.1,
        "Lowpass at cutoff: expected ~-3 dB, got {at_cutoff:.2} dB"
    );
}

#[test]
fn highpass_rejects_low_frequencies() {
    for family in FilterFamily::ALL {
        let params = FilterParams::highpass(family, 4, 40.0, SAMPLE_RATE)
            .with_stopband_attenuation(60.0);
        let cascade = design(&params).unwrap();
        let low = response_db(&cascade, 1.0);
        assert!(low < -30.0, "{family}: 1 Hz got {low:.1} dB");
    }
}

// ============================================================================
// 2. Family characteristics
// ============================================================================

#[test]
fn dc_gain_per_family() {
    for order in 1..=6 {
        for family in FilterFamily::ALL {
            let params = FilterParams::lowpass(family, order, 30.0, SAMPLE_RATE);
            let dc = response_db(&design(&params).unwrap(), 0.0);
            let expected = match family {
                FilterFamily::ChebyshevI if order % 2 == 0 => -1.0,
                _ => 0.0,
            };
            assert!(
                (dc - expected).abs() < 1e-6,
                "{family} order {order}: DC {dc:.6} dB, expected {expected}"
            );
        }
    }
}

#[test]
fn chebyshev2_stopband_edge_has_requested_attenuation() {
    let params = FilterParams::lowpass(FilterFamily::ChebyshevII, 5, 30.0, SAMPLE_RATE)
        .with_stopband_attenuation(40.0);
    let cascade = design(&params).unwrap();
    let edge = response_db(&cascade, 30.0);
    assert!((edge + 40.0).abs() < 1e-6, "got {edge}");
}

#[test]
fn bandpass_and_bandstop_edges() {
    let (low, high) = (20.0, 40.0);
    let bp = design(&FilterParams::new(
        FilterFamily::Butterworth,
        BandType::Bandpass,
        3,
        low,
        high,
        SAMPLE_RATE,
    ))
    .unwrap();
    assert!((response_db(&bp, low) + 3.0103).abs() < 1e-3);
    assert!((response_db(&bp, high) + 3.0103).abs() < 1e-3);
    assert!(response_db(&bp, 0.0) < -100.0);

    let bs = design(&FilterParams::new(
        FilterFamily::Butterworth,
        BandType::Bandstop,
        3,
        low,
        high,
        SAMPLE_RATE,
    ))
    .unwrap();
    assert!(response_db(&bs, 0.0).abs() < 1e-9);
    assert!((response_db(&bs, low) + 3.0103).abs() < 1e-3);
    // Notch at the prewarped geometric centre.
    let centre = {
        let warp = |f: f64| (std::f64::consts::PI * f / SAMPLE_RATE).tan();
        (warp(low) * warp(high)).sqrt().atan() * SAMPLE_RATE / std::f64::consts::PI
    };
    assert!(response_db(&bs, centre) < -100.0, "centre {centre}");
}

#[test]
fn designed_poles_are_inside_unit_circle() {
    for family in FilterFamily::ALL {
        for band in BandType::ALL {
            for order in [1, 2, 4, 5, 10] {
                let params = FilterParams::new(family, band, order, 20.0, 30.0, SAMPLE_RATE);
                let zpk = design_zpk(&params).unwrap();
                let expected_poles = if band.is_band() { 2 * order } else { order };
                assert_eq!(zpk.poles.len(), expected_poles);
                let max = zpk.poles.iter().map(|p| p.norm()).fold(0.0, f64::max);
                assert!(max < 1.0, "{family} {band} order {order}: max |p| = {max}");
            }
        }
    }
}

// ============================================================================
// 3. Reference coefficients
// ============================================================================

/// Single-section designs, lowpass at half Nyquist (62.5 Hz) and highpass
/// at a fifth of Nyquist (25 Hz), with 1 dB ripple and 1 dB attenuation.
/// Values are the classic analog-prototype recipe evaluated in extended
/// precision.
const REFERENCE_SECTIONS: [(FilterFamily, BandType, usize, [f64; 6]); 7] = [
    (
        FilterFamily::Butterworth,
        BandType::Lowpass,
        2,
        [
            0.2928932188134525,
            0.585786437626905,
            0.2928932188134525,
            1.0,
            0.0,
            0.1715728752538099,
        ],
    ),
    (
        FilterFamily::Butterworth,
        BandType::Highpass,
        2,
        [
            0.6389455251590224,
            -1.2778910503180447,
            0.6389455251590224,
            1.0,
            -1.142980502539901,
            0.4128015980961886,
        ],
    ),
    (
        FilterFamily::ChebyshevI,
        BandType::Lowpass,
        1,
        [
            0.6627576601695528,
            0.6627576601695528,
            0.0,
            1.0,
            0.3255153203391056,
            0.0,
        ],
    ),
    (
        FilterFamily::ChebyshevI,
        BandType::Lowpass,
        2,
        [
            0.307043201259064,
            0.614086402518128,
            0.307043201259064,
            1.0,
            0.06406405700380917,
            0.3139684953186775,
        ],
    ),
    (
        FilterFamily::ChebyshevII,
        BandType::Lowpass,
        2,
        [
            0.7852085029771729,
            0.5234723353181152,
            0.7852085029771729,
            1.0,
            0.4595990500927597,
            0.6342902911797013,
        ],
    ),
    (
        FilterFamily::ChebyshevII,
        BandType::Highpass,
        2,
        [
            0.8977262179582006,
            -1.6154055087567045,
            0.8977262179582006,
            1.0,
            -1.6044209848797824,
            0.8064369597933234,
        ],
    ),
    (
        FilterFamily::Bessel,
        BandType::Lowpass,
        2,
        [
            0.2679491924311227,
            0.5358983848622454,
            0.2679491924311227,
            1.0,
            0.0,
            0.07179676972449082,
        ],
    ),
];

#[test]
fn single_section_designs_match_reference_coefficients() {
    for (family, band, order, expected) in REFERENCE_SECTIONS {
        let params = match band {
            BandType::Lowpass => FilterParams::lowpass(family, order, 62.5, SAMPLE_RATE),
            _ => FilterParams::highpass(family, order, 25.0, SAMPLE_RATE),
        };
        let rows = design(&params).unwrap().rows();
        assert_eq!(rows.len(), 1, "{family} {band} order {order}");
        for (k, (got, want)) in rows[0].iter().zip(expected).enumerate() {
            assert!(
                (got - want).abs() < 1e-9,
                "{family} {band} order {order}, coefficient {k}: got {got}, expected {want}"
            );
        }
    }
}

/// Upper-half-plane poles of the order-16 phase-normalised Bessel
/// prototype, from the reverse Bessel polynomial solved in extended
/// precision.
const BESSEL_16_POLES: [(f64, f64); 8] = [
    (-0.9072099595087001, 0.07214211304111733),
    (-0.8911723070323648, 0.2167089659900576),
    (-0.858426423152133, 0.3621697271802066),
    (-0.8074790293236004, 0.50929337511718),
    (-0.7356166304713116, 0.6591950877860394),
    (-0.6379502514039067, 0.8137453537108762),
    (-0.5047606444424767, 0.976713747779909),
    (-0.3108782755645388, 1.1585528411993304),
];

#[test]
fn highest_order_bessel_poles_match_reference() {
    let zpk = prototype::bessel(16).unwrap();
    assert_eq!(zpk.poles.len(), 16);
    for (re, im) in BESSEL_16_POLES {
        for expected in [Complex64::new(re, im), Complex64::new(re, -im)] {
            let error = zpk
                .poles
                .iter()
                .map(|p| (*p - expected).norm())
                .fold(f64::INFINITY, f64::min);
            assert!(
                error < 1e-8 * expected.norm(),
                "pole {expected}: off by {error:e}"
            );
        }
    }

    // Digital design at the same order keeps unit DC gain.
    let params = FilterParams::lowpass(FilterFamily::Bessel, 16, 25.0, SAMPLE_RATE);
    let dc = design(&params).unwrap().frequency_response_at(0.0, SAMPLE_RATE).norm();
    assert!((dc - 1.0).abs() < 1e-7, "dc gain {dc}");
}

// ============================================================================
// 4. Impulse responses
// ============================================================================

#[test]
fn impulse_response_sums_to_dc_gain() {
    let params = FilterParams::lowpass(FilterFamily::Bessel, 4, 25.0, SAMPLE_RATE);
    let cascade = design(&params).unwrap();
    let h = cascade.impulse_response(2000, 10);
    assert!(h[..10].iter().all(|x| *x == 0.0));
    let sum: f64 = h.iter().sum();
    assert!((sum - 1.0).abs() < 1e-9, "sum {sum}");
}

// ============================================================================
// 5. Parameter validation
// ============================================================================

#[test]
fn invalid_parameters_are_rejected() {
    let cases = [
        FilterParams::lowpass(FilterFamily::Butterworth, 0, 50.0, SAMPLE_RATE),
        FilterParams::lowpass(FilterFamily::Butterworth, 4, 0.0, SAMPLE_RATE),
        FilterParams::lowpass(FilterFamily::Butterworth, 4, 125.0, SAMPLE_RATE),
        FilterParams::highpass(FilterFamily::Bessel, 4, -5.0, SAMPLE_RATE),
        FilterParams::new(
            FilterFamily::ChebyshevI,
            BandType::Bandstop,
            2,
            40.0,
            40.0,
            SAMPLE_RATE,
        ),
        FilterParams::lowpass(FilterFamily::ChebyshevII, 4, 50.0, SAMPLE_RATE)
            .with_stopband_attenuation(-3.0),
    ];
    for params in cases {
        assert!(design(&params).is_err(), "{params:?} should be rejected");
    }

    // Sweep edges of 200/300 Hz lie beyond Nyquist at 250 Hz.
    let params = FilterParams::lowpass(FilterFamily::Butterworth, 2, 300.0, SAMPLE_RATE);
    assert!(matches!(
        design(&params),
        Err(DesignError::EdgeOutOfRange { edge: "high", .. })
    ));
}
