//! # tsforge-arma
//!
//! Seasonal ARMA model fitting via state-space maximum likelihood (Kalman
//! filter), information criteria and parallel order selection.
//!
//! ## Typestate Workflow
//!
//! ```mermaid
//! graph LR
//!     A["ArmaSpec::seasonal(p, q, P, Q, s)"] -->|".fit(&data)?"| B["ArmaFit"]
//!     B --> C[".ar() / .ma(): coefficients"]
//!     B --> D[".score(criterion)"]
//!     B --> E[".forecast(horizon)"]
//!     H["select_best(&data, &candidates, criterion)?"] -->|"parallel grid"| S["Selection"]
//!     S --> B
//! ```
//!
//! ## Two Usage Paths
//!
//! **Direct fit** (known orders):
//! ```ignore
//! let fit = ArmaSpec::new(2, 1).fit(&data)?;
//! ```
//!
//! **Criterion search** (unknown orders):
//! ```ignore
//! let selection = select_best(&data, &candidates, InformationCriterion::Bic)?;
//! ```
//!
//! ## Mathematical Glossary
//!
//! | Symbol | Accessor | Meaning |
//! |--------|----------|---------|
//! | phi | [`ArmaFit::ar()`] | AR coefficients: weights on past observations |
//! | theta | [`ArmaFit::ma()`] | MA coefficients: weights on past forecast errors |
//! | Phi, Theta | [`ArmaFit::seasonal_ar()`], [`ArmaFit::seasonal_ma()`] | Same at multiples of the season length |
//! | sigma2 | [`ArmaFit::sigma2()`] | Innovation (white-noise) variance |
//! | AIC, AICc, BIC | [`ArmaFit::score()`] | Information criteria (lower = better) |

mod error;
mod fit;
mod selection;
mod spec;

pub(crate) mod kalman;
pub(crate) mod optimizer;
pub(crate) mod params;
pub(crate) mod polynomial;
pub(crate) mod state_space;

pub use error::ArmaError;
pub use fit::ArmaFit;
pub use selection::{CandidateScore, InformationCriterion, Selection, select_best};
pub use spec::ArmaSpec;
