pub mod engine;
pub mod loader;
pub mod types;

pub use self::types::{
    GainRates, GutsRate, MainStat, OffsetBonusTable, Projection, ScoredCandidate, Stat,
    StatVector,
};
use crate::config::ScoringParams;
use crate::error::MrResult;
use tracing::debug;

/// Maps a monster's resolved stats to its ranking score.
#[derive(Debug, Clone, Default)]
pub struct Scorer {
    params: ScoringParams,
}

impl Scorer {
    pub fn new(params: ScoringParams) -> MrResult<Self> {
        params.validate()?;
        debug!(?params, "Scorer initialised");
        Ok(Self { params })
    }

    pub fn params(&self) -> &ScoringParams {
        &self.params
    }

    /// Fast path used by the offset search.
    #[inline]
    pub fn score(&self, stats: &StatVector, gains: &GainRates, guts: GutsRate) -> f64 {
        engine::project(&self.params, stats, gains, guts).score
    }

    /// Same computation as [`Scorer::score`], keeping every intermediate.
    pub fn project(&self, stats: &StatVector, gains: &GainRates, guts: GutsRate) -> Projection {
        engine::project(&self.params, stats, gains, guts)
    }

    /// Scores a monster with no offset bonus applied.
    pub fn evaluate(
        &self,
        stats: &StatVector,
        gains: &GainRates,
        guts: GutsRate,
    ) -> MrResult<ScoredCandidate> {
        stats.validate("base stats")?;
        gains.validate("gain rates")?;
        let projection = self.project(stats, gains, guts);
        Ok(ScoredCandidate {
            offsets: None,
            score: projection.score,
            projection: Some(projection),
        })
    }
}
