//! # tsforge-generate
//!
//! Recurrence-based synthetic series for AR, MA, ARMA, ARIMA and SARIMAX
//! processes, a closure-driven generator, and a family of deterministic trend
//! and seasonal [`Shape`]s sampled through it.
//!
//! ## Generators
//!
//! ```mermaid
//! graph LR
//!     N["draw_noise(n, std, &mut rng)"] --> A["generate_ar"]
//!     N --> M["generate_ma"]
//!     N --> B["generate_arma"]
//!     N --> I["generate_arima"]
//!     N --> S["generate_sarimax"]
//!     N --> F["generate_from_fn"]
//!     F --> H["generate_shape(time, &Shape, ...)"]
//! ```
//!
//! Every generator draws its full noise vector of length `n` first and then
//! runs the recurrence over the output series, so identically seeded
//! generators reproduce the same series.
//!
//! | Function | Recurrence start | Warm-up values |
//! |----------|------------------|----------------|
//! | [`generate_ar`] | `p` | noise |
//! | [`generate_ma`] | `0` | none |
//! | [`generate_arma`] | `max(p, q) + 1` | zero |
//! | [`generate_arima`] | `max(p, q)` | first `d` seeded with noise |
//! | [`generate_sarimax`] | `max(p, q, P + Q)` | differenced zero base |

mod custom;
mod error;
mod noise;
mod process;
mod seasonal;
mod shapes;

pub use custom::generate_from_fn;
pub use error::GenerateError;
pub use noise::draw_noise;
pub use process::{generate_ar, generate_arima, generate_arma, generate_ma};
pub use seasonal::generate_sarimax;
pub use shapes::{Shape, angular_frequency, generate_shape, time_grid};
