//! Seasonal ARIMA(p, d, q)x(P, D, Q, s).

use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use tsforge_arma::{ArmaSpec, InformationCriterion, select_best};

use crate::differencing::Differencing;
use crate::error::ModelError;
use crate::lifecycle::ModelCore;
use crate::model::ForecastModel;
use crate::order::{ModelOrder, SarimaOrder, SeasonalOrder};

/// Bounds of the seasonal grid search.
///
/// Every maximum defaults to 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonalSearch {
    season_length: usize,
    max_p: usize,
    max_q: usize,
    max_seasonal_p: usize,
    max_seasonal_q: usize,
}

impl SeasonalSearch {
    pub fn new(season_length: usize) -> Self {
        Self {
            season_length,
            max_p: 1,
            max_q: 1,
            max_seasonal_p: 1,
            max_seasonal_q: 1,
        }
    }

    pub fn with_max_order(mut self, max_p: usize, max_q: usize) -> Self {
        self.max_p = max_p;
        self.max_q = max_q;
        self
    }

    pub fn with_max_seasonal_order(mut self, max_seasonal_p: usize, max_seasonal_q: usize) -> Self {
        self.max_seasonal_p = max_seasonal_p;
        self.max_seasonal_q = max_seasonal_q;
        self
    }

    pub fn season_length(&self) -> usize {
        self.season_length
    }

    pub fn max_order(&self) -> (usize, usize) {
        (self.max_p, self.max_q)
    }

    pub fn max_seasonal_order(&self) -> (usize, usize) {
        (self.max_seasonal_p, self.max_seasonal_q)
    }

    /// `(p, q, P, Q)` in enumeration order, all-zero excluded.
    fn grid(&self) -> Vec<(usize, usize, usize, usize)> {
        let mut grid = Vec::new();
        for p in 0..=self.max_p {
            for q in 0..=self.max_q {
                for sp in 0..=self.max_seasonal_p {
                    for sq in 0..=self.max_seasonal_q {
                        if p + q + sp + sq > 0 {
                            grid.push((p, q, sp, sq));
                        }
                    }
                }
            }
        }
        grid
    }
}

/// SARIMA model over one series.
#[derive(Debug, Clone)]
pub struct SarimaModel {
    core: ModelCore,
    order: Option<SarimaOrder>,
}

impl SarimaModel {
    pub fn new(data: Vec<f64>) -> Self {
        Self {
            core: ModelCore::new(data),
            order: None,
        }
    }

    /// Sets the criterion used by [`SarimaModel::search_best_order`] and
    /// [`ForecastModel::score`].
    pub fn with_criterion(mut self, criterion: InformationCriterion) -> Self {
        self.core.set_criterion(criterion);
        self
    }

    /// Smallest `D <= max_seasonal_d` at which the series tests stationary,
    /// else `max_seasonal_d + 1` (saturating).
    ///
    /// Like [`ForecastModel::discover_difference_order`], the test runs on
    /// the original series, so the answer is `0` or `max_seasonal_d + 1`.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`ModelError::InvalidOrder`] | `season_length == 0` |
    /// | [`ModelError::Stats`] | the series cannot be tested |
    pub fn discover_seasonal_difference_order(
        &self,
        season_length: usize,
        max_seasonal_d: usize,
    ) -> Result<usize, ModelError> {
        if season_length == 0 {
            return Err(ModelError::InvalidOrder {
                reason: "season length must be positive".to_string(),
            });
        }
        if self.is_stationary()? {
            debug!(seasonal_d = 0, season_length, "series is stationary");
            return Ok(0);
        }
        Ok(max_seasonal_d.saturating_add(1))
    }

    /// Grid search over `(p, q, P, Q)` with `d` and `D` held fixed.
    ///
    /// Runs on the full series after `(1 - B)^d (1 - B^s)^D`. The all-zero
    /// candidate is never tried and failed candidates are skipped. Ties keep
    /// the earlier candidate in `p, q, P, Q` nesting order.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`ModelError::InvalidOrder`] | `season_length == 0` |
    /// | [`ModelError::Arma`] | no candidate could be fitted |
    pub fn search_best_order(
        &self,
        d: usize,
        seasonal_d: usize,
        search: &SeasonalSearch,
    ) -> Result<(SarimaOrder, f64), ModelError> {
        let s = search.season_length();
        if s == 0 {
            return Err(ModelError::InvalidOrder {
                reason: "season length must be positive".to_string(),
            });
        }

        let differenced = Differencing::new(d, seasonal_d, s).apply(self.core.data());
        let candidates: Vec<ArmaSpec> = search
            .grid()
            .into_iter()
            .map(|(p, q, sp, sq)| ArmaSpec::seasonal(p, q, sp, sq, s))
            .collect();

        let selection = select_best(&differenced, &candidates, self.core.criterion())?;
        let best = selection.best().spec();
        let order = SarimaOrder::new(
            ModelOrder::new(best.p(), d, best.q()),
            SeasonalOrder {
                p: best.seasonal_p(),
                d: seasonal_d,
                q: best.seasonal_q(),
                s,
            },
        );
        info!(
            %order,
            score = selection.best_score(),
            criterion = %selection.criterion(),
            "best SARIMA order"
        );
        Ok((order, selection.best_score()))
    }
}

impl ForecastModel for SarimaModel {
    type Order = SarimaOrder;

    fn name(&self) -> &'static str {
        "SARIMA"
    }

    fn core(&self) -> &ModelCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ModelCore {
        &mut self.core
    }

    fn order(&self) -> Option<SarimaOrder> {
        self.order
    }

    fn fit(&mut self, order: SarimaOrder) -> Result<(), ModelError> {
        let SarimaOrder { order: base, seasonal } = order;
        let seasonal = SeasonalOrder::new(seasonal.p, seasonal.d, seasonal.q, seasonal.s)?;

        let fit = self.core.fit_arma(
            ArmaSpec::seasonal(base.p, base.q, seasonal.p, seasonal.q, seasonal.s),
            Differencing::new(base.d, seasonal.d, seasonal.s),
        )?;
        info!(%order, sigma2 = fit.sigma2(), log_likelihood = fit.log_likelihood(), "fitted SARIMA");
        self.order = Some(order);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lifecycle::Stage;

    fn seasonal_wave(n: usize, s: usize) -> Vec<f64> {
        (0..n)
            .map(|i| {
                let phase = (i % s) as f64;
                2.0 * phase.sin() + 0.4 * ((i * 13 % 7) as f64 - 3.0)
            })
            .collect()
    }

    #[test]
    fn grid_skips_all_zero() {
        let grid = SeasonalSearch::new(4).grid();
        assert_eq!(grid.len(), 15);
        assert!(!grid.contains(&(0, 0, 0, 0)));
        assert_eq!(grid[0], (0, 0, 0, 1));
        assert_eq!(grid[14], (1, 1, 1, 1));
    }

    #[test]
    fn search_builder() {
        let search = SeasonalSearch::new(12)
            .with_max_order(2, 3)
            .with_max_seasonal_order(1, 0);
        assert_eq!(search.season_length(), 12);
        assert_eq!(search.max_order(), (2, 3));
        assert_eq!(search.max_seasonal_order(), (1, 0));
        assert_eq!(search.grid().len(), 3 * 4 * 2 - 1);
    }

    #[test]
    fn zero_season_length_rejected() {
        let model = SarimaModel::new(seasonal_wave(40, 4));
        assert!(matches!(
            model.search_best_order(0, 0, &SeasonalSearch::new(0)),
            Err(ModelError::InvalidOrder { .. })
        ));
        assert!(model.discover_seasonal_difference_order(0, 1).is_err());
    }

    #[test]
    fn fit_rejects_zero_season_with_terms() {
        let mut model = SarimaModel::new(seasonal_wave(40, 4));
        model.split(0.2).unwrap();
        let order = SarimaOrder::new(
            ModelOrder::new(1, 0, 0),
            SeasonalOrder { p: 1, d: 0, q: 0, s: 0 },
        );
        assert!(matches!(model.fit(order), Err(ModelError::InvalidOrder { .. })));
        assert_eq!(model.stage(), Stage::Split);
    }

    #[test]
    fn seasonal_fit_and_predict() {
        let mut model = SarimaModel::new(seasonal_wave(96, 4));
        model.split(0.25).unwrap();
        let order = SarimaOrder::new(
            ModelOrder::new(1, 0, 0),
            SeasonalOrder::new(1, 1, 0, 4).unwrap(),
        );
        model.fit(order).unwrap();
        assert_eq!(model.order(), Some(order));
        // D = 1 at s = 4 consumes four training points
        assert_eq!(model.residuals().unwrap().len(), 72 - 4);

        let forecast = model.predict(24).unwrap();
        assert_eq!(forecast.horizon(), 24);
        assert!(forecast.values().iter().all(|v| v.is_finite()));
    }
}
