//! Non-seasonal ARIMA(p, d, q).

use tracing::info;
use tsforge_arma::{ArmaSpec, InformationCriterion, select_best};

use crate::differencing::Differencing;
use crate::error::ModelError;
use crate::lifecycle::ModelCore;
use crate::model::ForecastModel;
use crate::order::ModelOrder;

/// ARIMA model over one series.
#[derive(Debug, Clone)]
pub struct ArimaModel {
    core: ModelCore,
    order: Option<ModelOrder>,
}

impl ArimaModel {
    pub fn new(data: Vec<f64>) -> Self {
        Self {
            core: ModelCore::new(data),
            order: None,
        }
    }

    /// Sets the criterion used by [`ArimaModel::search_best_order`] and
    /// [`ForecastModel::score`].
    pub fn with_criterion(mut self, criterion: InformationCriterion) -> Self {
        self.core.set_criterion(criterion);
        self
    }

    /// Grid search over `p <= max_p`, `q <= max_q` with `d` held fixed.
    ///
    /// Runs on the full series differenced `d` times. `(0, 0)` is never a
    /// candidate and candidates that fail to fit are skipped. Ties keep the
    /// earlier candidate with `p` as the outer loop.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Arma`] wrapping
    /// [`ArmaError::AllCandidatesFailed`](tsforge_arma::ArmaError::AllCandidatesFailed)
    /// when no candidate could be fitted, including an empty grid.
    pub fn search_best_order(
        &self,
        d: usize,
        max_p: usize,
        max_q: usize,
    ) -> Result<(ModelOrder, f64), ModelError> {
        let differenced = Differencing::new(d, 0, 0).apply(self.core.data());
        let candidates: Vec<ArmaSpec> = (0..=max_p)
            .flat_map(|p| (0..=max_q).map(move |q| (p, q)))
            .filter(|&(p, q)| p + q > 0)
            .map(|(p, q)| ArmaSpec::new(p, q))
            .collect();

        let selection = select_best(&differenced, &candidates, self.core.criterion())?;
        let best = selection.best().spec();
        let order = ModelOrder::new(best.p(), d, best.q());
        info!(
            %order,
            score = selection.best_score(),
            criterion = %selection.criterion(),
            "best ARIMA order"
        );
        Ok((order, selection.best_score()))
    }
}

impl ForecastModel for ArimaModel {
    type Order = ModelOrder;

    fn name(&self) -> &'static str {
        "ARIMA"
    }

    fn core(&self) -> &ModelCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ModelCore {
        &mut self.core
    }

    fn order(&self) -> Option<ModelOrder> {
        self.order
    }

    fn fit(&mut self, order: ModelOrder) -> Result<(), ModelError> {
        let fit = self.core.fit_arma(
            ArmaSpec::new(order.p, order.q),
            Differencing::new(order.d, 0, 0),
        )?;
        info!(%order, sigma2 = fit.sigma2(), log_likelihood = fit.log_likelihood(), "fitted ARIMA");
        self.order = Some(order);
        Ok(())
    }
}
