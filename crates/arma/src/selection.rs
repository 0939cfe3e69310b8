//! Information-criterion model order selection.

use std::fmt;
use std::str::FromStr;

use rayon::prelude::*;
use tracing::{debug, info};

use crate::error::ArmaError;
use crate::fit::ArmaFit;
use crate::spec::ArmaSpec;

/// Score used to rank candidate fits; lower is better for every variant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum InformationCriterion {
    /// Akaike Information Criterion.
    #[default]
    Aic,
    /// AIC with the small-sample correction.
    Aicc,
    /// Bayesian (Schwarz) Information Criterion.
    Bic,
}

impl fmt::Display for InformationCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Aic => "aic",
            Self::Aicc => "aicc",
            Self::Bic => "bic",
        })
    }
}

impl FromStr for InformationCriterion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "aic" => Ok(Self::Aic),
            "aicc" => Ok(Self::Aicc),
            "bic" => Ok(Self::Bic),
            other => Err(format!(
                "unknown information criterion '{other}' (expected aic, aicc or bic)"
            )),
        }
    }
}

/// Score of one candidate in a selection run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CandidateScore {
    /// The candidate specification.
    pub spec: ArmaSpec,
    /// Criterion value, `None` if the fit failed or scored non-finite.
    pub score: Option<f64>,
}

/// Outcome of [`select_best`]: the winning fit and the full score table.
#[derive(Clone, Debug)]
pub struct Selection {
    best: ArmaFit,
    best_score: f64,
    criterion: InformationCriterion,
    scores: Vec<CandidateScore>,
}

impl Selection {
    /// The lowest-scoring fit.
    pub fn best(&self) -> &ArmaFit {
        &self.best
    }

    /// Criterion value of the winning fit.
    pub fn best_score(&self) -> f64 {
        self.best_score
    }

    /// The criterion candidates were ranked by.
    pub fn criterion(&self) -> InformationCriterion {
        self.criterion
    }

    /// One entry per candidate, in candidate order.
    pub fn scores(&self) -> &[CandidateScore] {
        &self.scores
    }
}

/// Fits every candidate and keeps the one with the lowest `criterion`.
///
/// Candidates are fitted in parallel; the winner is the first strictly
/// lowest score in candidate order, so the result does not depend on
/// scheduling. Candidates that fail to fit or score non-finite are skipped.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`ArmaError::AllCandidatesFailed`] | `candidates` is empty or every fit failed |
///
/// # Example
///
/// ```
/// use tsforge_arma::{ArmaSpec, InformationCriterion, select_best};
///
/// let data: Vec<f64> = (0..80).map(|i| ((i * 5 % 13) as f64).cos()).collect();
/// let candidates = [ArmaSpec::new(0, 0), ArmaSpec::new(1, 0), ArmaSpec::new(0, 1)];
/// let selection = select_best(&data, &candidates, InformationCriterion::Aic).unwrap();
/// assert_eq!(selection.scores().len(), 3);
/// ```
#[tracing::instrument(skip(data, candidates), fields(n = data.len(), candidates = candidates.len()))]
pub fn select_best(
    data: &[f64],
    candidates: &[ArmaSpec],
    criterion: InformationCriterion,
) -> Result<Selection, ArmaError> {
    let fits: Vec<Result<ArmaFit, ArmaError>> =
        candidates.par_iter().map(|spec| spec.fit(data)).collect();

    let mut scores = Vec::with_capacity(candidates.len());
    let mut best: Option<(ArmaFit, f64)> = None;

    for (spec, fit) in candidates.iter().zip(fits) {
        let scored = match fit {
            Ok(fit) => {
                let score = fit.score(criterion);
                score.is_finite().then_some((fit, score))
            }
            Err(err) => {
                debug!(%spec, error = %err, "candidate failed");
                None
            }
        };

        let score = scored.as_ref().map(|(_, score)| *score);
        debug!(%spec, ?score, "candidate scored");
        scores.push(CandidateScore { spec: *spec, score });

        if let Some((fit, score)) = scored {
            if best.as_ref().is_none_or(|(_, best_score)| score < *best_score) {
                best = Some((fit, score));
            }
        }
    }

    let (best, best_score) = best.ok_or(ArmaError::AllCandidatesFailed {
        candidates: candidates.len(),
    })?;
    info!(spec = %best.spec(), score = best_score, %criterion, "selected");

    Ok(Selection {
        best,
        best_score,
        criterion,
        scores,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn criterion_parse_and_display() {
        for c in [
            InformationCriterion::Aic,
            InformationCriterion::Aicc,
            InformationCriterion::Bic,
        ] {
            assert_eq!(c.to_string().parse::<InformationCriterion>(), Ok(c));
        }
        assert_eq!(
            "BIC".parse::<InformationCriterion>(),
            Ok(InformationCriterion::Bic)
        );
        assert!("hqic".parse::<InformationCriterion>().is_err());
        assert_eq!(InformationCriterion::default(), InformationCriterion::Aic);
    }

    #[test]
    fn empty_candidate_list_fails() {
        let err = select_best(&[1.0, 2.0, 3.0], &[], InformationCriterion::Aic).unwrap_err();
        assert_eq!(err, ArmaError::AllCandidatesFailed { candidates: 0 });
    }

    #[test]
    fn failed_candidates_are_skipped() {
        let data: Vec<f64> = (0..30).map(|i| ((i * 7 % 5) as f64) - 2.0).collect();
        // 40 observations needed for the second candidate
        let candidates = [ArmaSpec::new(0, 0), ArmaSpec::new(39, 0)];
        let selection = select_best(&data, &candidates, InformationCriterion::Aic).unwrap();
        assert_eq!(selection.best().spec(), ArmaSpec::new(0, 0));
        assert!(selection.scores()[0].score.is_some());
        assert!(selection.scores()[1].score.is_none());
    }

    #[test]
    fn all_failing_candidates() {
        let candidates = [ArmaSpec::new(5, 0), ArmaSpec::new(0, 5)];
        let err = select_best(&[1.0, 2.0, 1.5], &candidates, InformationCriterion::Bic).unwrap_err();
        assert_eq!(err, ArmaError::AllCandidatesFailed { candidates: 2 });
    }

    #[test]
    fn ties_keep_first_candidate() {
        let data: Vec<f64> = (0..40).map(|i| ((i * 3 % 7) as f64) - 3.0).collect();
        let spec = ArmaSpec::new(0, 0);
        let selection =
            select_best(&data, &[spec, spec, spec], InformationCriterion::Aic).unwrap();
        let scores: Vec<f64> = selection.scores().iter().filter_map(|c| c.score).collect();
        assert_eq!(scores.len(), 3);
        assert_eq!(scores[0], scores[1]);
        assert_eq!(selection.best_score(), scores[0]);
    }
}
