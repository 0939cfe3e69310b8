//! Model orders threaded from one search step into the next.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Non-seasonal ARIMA order `(p, d, q)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModelOrder {
    pub p: usize,
    pub d: usize,
    pub q: usize,
}

impl ModelOrder {
    pub fn new(p: usize, d: usize, q: usize) -> Self {
        Self { p, d, q }
    }
}

impl fmt::Display for ModelOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{},{})", self.p, self.d, self.q)
    }
}

/// Seasonal order `(P, D, Q, s)`.
///
/// `s` must be positive whenever `P`, `D` or `Q` is non-zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeasonalOrder {
    pub p: usize,
    pub d: usize,
    pub q: usize,
    pub s: usize,
}

impl SeasonalOrder {
    /// Creates a seasonal order, rejecting `s == 0` with non-zero terms.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidOrder`] when `s == 0` and any of
    /// `P`, `D`, `Q` is non-zero.
    pub fn new(p: usize, d: usize, q: usize, s: usize) -> Result<Self, ModelError> {
        if s == 0 && p + d + q > 0 {
            return Err(ModelError::InvalidOrder {
                reason: format!("season length is 0 for seasonal order ({p},{d},{q})"),
            });
        }
        Ok(Self { p, d, q, s })
    }

    /// `true` if any seasonal term is present.
    pub fn is_seasonal(&self) -> bool {
        self.p + self.d + self.q > 0
    }
}

impl TryFrom<&[usize]> for SeasonalOrder {
    type Error = ModelError;

    fn try_from(value: &[usize]) -> Result<Self, Self::Error> {
        match *value {
            [p, d, q, s] => Self::new(p, d, q, s),
            _ => Err(ModelError::InvalidOrder {
                reason: format!("expected [P, D, Q, s], got {} values", value.len()),
            }),
        }
    }
}

impl fmt::Display for SeasonalOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{},{},{})", self.p, self.d, self.q, self.s)
    }
}

/// Full SARIMA order `(p, d, q)x(P, D, Q, s)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SarimaOrder {
    pub order: ModelOrder,
    pub seasonal: SeasonalOrder,
}

impl SarimaOrder {
    pub fn new(order: ModelOrder, seasonal: SeasonalOrder) -> Self {
        Self { order, seasonal }
    }
}

impl fmt::Display for SarimaOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.order, self.seasonal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_forms() {
        let order = ModelOrder::new(2, 1, 0);
        let seasonal = SeasonalOrder::new(1, 1, 0, 12).unwrap();
        assert_eq!(order.to_string(), "(2,1,0)");
        assert_eq!(seasonal.to_string(), "(1,1,0,12)");
        assert_eq!(
            SarimaOrder::new(order, seasonal).to_string(),
            "(2,1,0)x(1,1,0,12)"
        );
    }

    #[test]
    fn seasonal_from_slice() {
        let s = SeasonalOrder::try_from(&[1, 0, 1, 4][..]).unwrap();
        assert_eq!(s, SeasonalOrder { p: 1, d: 0, q: 1, s: 4 });
        assert!(SeasonalOrder::try_from(&[1, 0, 1][..]).is_err());
        assert!(SeasonalOrder::try_from(&[1, 0, 1, 4, 5][..]).is_err());
    }

    #[test]
    fn zero_season_length_rejected() {
        assert!(SeasonalOrder::new(1, 0, 0, 0).is_err());
        assert!(SeasonalOrder::new(0, 0, 0, 0).is_ok());
        assert!(!SeasonalOrder::default().is_seasonal());
    }

    #[test]
    fn orders_serialize() {
        let json = serde_json::to_string(&ModelOrder::new(1, 1, 2)).unwrap();
        assert_eq!(json, r#"{"p":1,"d":1,"q":2}"#);
    }
}
