//! Deterministic trend and seasonal shapes.
//!
//! A [`Shape`] is a closed-form function of time. [`generate_shape`] samples
//! it over a time grid through [`generate_from_fn`], so shapes pick up the
//! same noise handling and non-finite checks as any closure.

use std::f64::consts::PI;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::custom::generate_from_fn;
use crate::error::GenerateError;

/// A trend or seasonal component evaluated pointwise in time.
///
/// Harmonic lists pair up by index. When one side of a pair holds a single
/// value it is repeated to the length of the other side; otherwise both
/// sides must have the same length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shape {
    /// `amplitude * |sin(frequency t + phase)|^power * sign(sin(frequency t + phase))`.
    ///
    /// `power < 1` flattens the wave towards a square wave, `power > 1`
    /// sharpens it into peaks.
    PoweredSine {
        amplitude: f64,
        frequency: f64,
        phase: f64,
        power: f64,
    },

    /// `offset + sum_k cos[k] cos(alpha (k+1) t^delta) + sin[k] sin(alpha (k+1) t^delta)`.
    TrigonometricSeries {
        offset: f64,
        cos: Vec<f64>,
        sin: Vec<f64>,
        alpha: f64,
        delta: f64,
    },

    /// `offset + sum_k amplitudes[k] sin(frequencies[k] t)`.
    SineSum {
        offset: f64,
        amplitudes: Vec<f64>,
        frequencies: Vec<f64>,
    },

    /// `offset + sum_k amplitudes[k] cos(frequencies[k] t)`.
    CosineSum {
        offset: f64,
        amplitudes: Vec<f64>,
        frequencies: Vec<f64>,
    },

    /// `|sum_k coefficients[k] exp(i frequencies[k] t)|`.
    FourierModulus {
        coefficients: Vec<f64>,
        frequencies: Vec<f64>,
    },

    /// `amplitude(t) * sin(frequency t + phase)`, a pseudo-periodic wave
    /// whose envelope is itself a shape.
    VariableAmplitude {
        amplitude: Box<Shape>,
        frequency: f64,
        phase: f64,
    },

    /// `(offset + sin(frequency t)) * sin(t)`.
    AmplitudeModulated { offset: f64, frequency: f64 },

    /// `sin(alpha t) * cos(beta t)`.
    ProductModulated { alpha: f64, beta: f64 },

    /// `sum_{i=1..terms} alpha^i cos(beta^i pi t)`.
    Weierstrass { terms: usize, alpha: f64, beta: f64 },

    /// Linear frequency modulation:
    /// `amplitude * cos(phase + 2 pi (frequency t + rate / 2 * t^2))`.
    LinearChirp {
        amplitude: f64,
        phase: f64,
        frequency: f64,
        rate: f64,
    },

    /// `scale * exp(rate t)`.
    Exponential { scale: f64, rate: f64 },

    /// `sum_i coefficients[i] t^i`.
    Polynomial { coefficients: Vec<f64> },
}

impl Shape {
    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Shape::PoweredSine { .. } => "powered_sine",
            Shape::TrigonometricSeries { .. } => "trigonometric_series",
            Shape::SineSum { .. } => "sine_sum",
            Shape::CosineSum { .. } => "cosine_sum",
            Shape::FourierModulus { .. } => "fourier_modulus",
            Shape::VariableAmplitude { .. } => "variable_amplitude",
            Shape::AmplitudeModulated { .. } => "amplitude_modulated",
            Shape::ProductModulated { .. } => "product_modulated",
            Shape::Weierstrass { .. } => "weierstrass",
            Shape::LinearChirp { .. } => "linear_chirp",
            Shape::Exponential { .. } => "exponential",
            Shape::Polynomial { .. } => "polynomial",
        }
    }

    /// Checks list shapes and term counts.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`GenerateError::InvalidArgument`] | an empty harmonic list, or two lists of different lengths neither of which has length 1 |
    /// | [`GenerateError::InvalidArgument`] | `Weierstrass` with zero terms |
    /// | [`GenerateError::InvalidArgument`] | `Polynomial` with no coefficients |
    pub fn validate(&self) -> Result<(), GenerateError> {
        match self {
            Shape::TrigonometricSeries { cos, sin, .. } => check_pairing("sin", cos, sin),
            Shape::SineSum {
                amplitudes,
                frequencies,
                ..
            }
            | Shape::CosineSum {
                amplitudes,
                frequencies,
                ..
            } => check_pairing("frequencies", amplitudes, frequencies),
            Shape::FourierModulus {
                coefficients,
                frequencies,
            } => check_pairing("frequencies", coefficients, frequencies),
            Shape::VariableAmplitude { amplitude, .. } => amplitude.validate(),
            Shape::Weierstrass { terms: 0, .. } => Err(GenerateError::InvalidArgument {
                name: "terms",
                reason: "must be positive".to_string(),
            }),
            Shape::Polynomial { coefficients } if coefficients.is_empty() => {
                Err(GenerateError::InvalidArgument {
                    name: "coefficients",
                    reason: "at least one coefficient is required".to_string(),
                })
            }
            _ => Ok(()),
        }
    }

    /// Evaluates the shape at time `t`.
    ///
    /// Assumes a shape that passed [`Shape::validate`].
    pub fn value(&self, t: f64) -> f64 {
        match self {
            Shape::PoweredSine {
                amplitude,
                frequency,
                phase,
                power,
            } => {
                let s = (frequency * t + phase).sin();
                amplitude * s.abs().powf(*power) * sign(s)
            }
            Shape::TrigonometricSeries {
                offset,
                cos,
                sin,
                alpha,
                delta,
            } => {
                let x = t.powf(*delta);
                let season: f64 = paired(cos, sin)
                    .enumerate()
                    .map(|(k, (a, b))| {
                        let w = alpha * (k + 1) as f64 * x;
                        a * w.cos() + b * w.sin()
                    })
                    .sum();
                offset + season
            }
            Shape::SineSum {
                offset,
                amplitudes,
                frequencies,
            } => {
                offset
                    + paired(amplitudes, frequencies)
                        .map(|(a, w)| a * (w * t).sin())
                        .sum::<f64>()
            }
            Shape::CosineSum {
                offset,
                amplitudes,
                frequencies,
            } => {
                offset
                    + paired(amplitudes, frequencies)
                        .map(|(a, w)| a * (w * t).cos())
                        .sum::<f64>()
            }
            Shape::FourierModulus {
                coefficients,
                frequencies,
            } => {
                let (re, im) = paired(coefficients, frequencies)
                    .fold((0.0, 0.0), |(re, im), (c, w)| {
                        (re + c * (w * t).cos(), im + c * (w * t).sin())
                    });
                re.hypot(im)
            }
            Shape::VariableAmplitude {
                amplitude,
                frequency,
                phase,
            } => amplitude.value(t) * (frequency * t + phase).sin(),
            Shape::AmplitudeModulated { offset, frequency } => {
                (offset + (frequency * t).sin()) * t.sin()
            }
            Shape::ProductModulated { alpha, beta } => (alpha * t).sin() * (beta * t).cos(),
            Shape::Weierstrass { terms, alpha, beta } => {
                let mut a = 1.0;
                let mut b = 1.0;
                let mut sum = 0.0;
                for _ in 0..*terms {
                    a *= alpha;
                    b *= beta;
                    sum += a * (b * PI * t).cos();
                }
                sum
            }
            Shape::LinearChirp {
                amplitude,
                phase,
                frequency,
                rate,
            } => amplitude * (phase + 2.0 * PI * (frequency * t + rate / 2.0 * t * t)).cos(),
            Shape::Exponential { scale, rate } => scale * (rate * t).exp(),
            Shape::Polynomial { coefficients } => {
                coefficients.iter().rev().fold(0.0, |acc, c| acc * t + c)
            }
        }
    }
}

/// Samples `shape` over `time` and adds `N(0, noise_std)` noise.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`GenerateError::InvalidArgument`] | `time` is empty |
/// | [`GenerateError::InvalidArgument`] | `shape` fails [`Shape::validate`] |
/// | [`GenerateError::InvalidArgument`] | the shape is non-finite somewhere on the grid |
/// | [`GenerateError::InvalidNoiseStd`] | `noise_std` is negative or non-finite |
///
/// # Example
///
/// ```
/// use rand::SeedableRng;
/// use tsforge_generate::{Shape, angular_frequency, generate_shape, time_grid};
///
/// let time = time_grid(48, 1.0).unwrap();
/// let shape = Shape::SineSum {
///     offset: 10.0,
///     amplitudes: vec![2.0],
///     frequencies: vec![angular_frequency(12.0).unwrap()],
/// };
/// let mut rng = rand::rngs::StdRng::seed_from_u64(5);
/// let series = generate_shape(&time, &shape, 0.0, &mut rng).unwrap();
/// assert!((series[3] - 12.0).abs() < 1e-12);
/// ```
pub fn generate_shape<R: Rng + ?Sized>(
    time: &[f64],
    shape: &Shape,
    noise_std: f64,
    rng: &mut R,
) -> Result<Vec<f64>, GenerateError> {
    if time.is_empty() {
        return Err(GenerateError::InvalidArgument {
            name: "time",
            reason: "time grid must not be empty".to_string(),
        });
    }
    shape.validate()?;

    let series = generate_from_fn(time, |t| shape.value(t), noise_std, rng)?;
    debug!(n = series.len(), shape = shape.name(), "generated shape series");
    Ok(series)
}

/// Evenly spaced grid `0, step, 2 step, ...` with `n` points.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`GenerateError::InvalidArgument`] | `n == 0` |
/// | [`GenerateError::InvalidArgument`] | `step` is not finite and positive |
pub fn time_grid(n: usize, step: f64) -> Result<Vec<f64>, GenerateError> {
    if n == 0 {
        return Err(GenerateError::InvalidArgument {
            name: "n",
            reason: "grid length must be positive".to_string(),
        });
    }
    if !step.is_finite() || step <= 0.0 {
        return Err(GenerateError::InvalidArgument {
            name: "step",
            reason: format!("must be finite and positive, got {step}"),
        });
    }
    Ok((0..n).map(|i| i as f64 * step).collect())
}

/// Angular frequency `2 pi / period` of a wave repeating every `period`
/// time units.
///
/// # Errors
///
/// Returns [`GenerateError::InvalidArgument`] when `period` is not finite
/// and positive.
pub fn angular_frequency(period: f64) -> Result<f64, GenerateError> {
    if !period.is_finite() || period <= 0.0 {
        return Err(GenerateError::InvalidArgument {
            name: "period",
            reason: format!("must be finite and positive, got {period}"),
        });
    }
    Ok(2.0 * PI / period)
}

fn sign(x: f64) -> f64 {
    if x == 0.0 { 0.0 } else { x.signum() }
}

fn check_pairing(name: &'static str, left: &[f64], right: &[f64]) -> Result<(), GenerateError> {
    let compatible = !left.is_empty()
        && !right.is_empty()
        && (left.len() == right.len() || left.len() == 1 || right.len() == 1);
    if compatible {
        Ok(())
    } else {
        Err(GenerateError::InvalidArgument {
            name,
            reason: format!("cannot pair {} values with {}", left.len(), right.len()),
        })
    }
}

/// Index-wise pairs, repeating a single-element side.
fn paired<'a>(left: &'a [f64], right: &'a [f64]) -> impl Iterator<Item = (f64, f64)> + 'a {
    let pick = |v: &[f64], i: usize| v.get(i).or(v.first()).copied().unwrap_or(0.0);
    (0..left.len().max(right.len())).map(move |i| (pick(left, i), pick(right, i)))
}
