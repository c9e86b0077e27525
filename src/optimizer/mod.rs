pub mod runner;

use crate::error::{MonrankError, MrResult};
use crate::scorer::{GainRates, GutsRate, OffsetBonusTable, ScoredCandidate, Scorer, StatVector};
use tracing::debug;

/// Exhaustive search over offset-index pairs.
///
/// Each pair `(i, j)` applies `table[i] + table[j]` on top of the base stats
/// and is scored by the shared [`Scorer`]. Bonus addition commutes, so only
/// `j >= i` is visited; the mirrored pair `(j, i)` would always be reached
/// later in a full row-major scan and can never displace the first maximum.
pub struct OffsetOptimizer<'a> {
    scorer: &'a Scorer,
    table: &'a OffsetBonusTable,
}

impl<'a> OffsetOptimizer<'a> {
    pub fn new(scorer: &'a Scorer, table: &'a OffsetBonusTable) -> Self {
        Self { scorer, table }
    }

    pub fn table(&self) -> &OffsetBonusTable {
        self.table
    }

    #[inline(always)]
    fn candidate_stats(&self, base: &StatVector, i: usize, j: usize) -> MrResult<StatVector> {
        let bonus = *self.table.get(i)? + *self.table.get(j)?;
        Ok(*base + bonus)
    }

    /// Score of one specific pair. Non-finite base stats or gains are rejected.
    pub fn score_pair(
        &self,
        base: &StatVector,
        gains: &GainRates,
        guts: GutsRate,
        offset1: usize,
        offset2: usize,
    ) -> MrResult<f64> {
        base.validate("base stats")?;
        gains.validate("gain rates")?;
        self.score_pair_unchecked(base, gains, guts, offset1, offset2)
    }

    /// Caller has already validated `base` and `gains`.
    pub(crate) fn score_pair_unchecked(
        &self,
        base: &StatVector,
        gains: &GainRates,
        guts: GutsRate,
        offset1: usize,
        offset2: usize,
    ) -> MrResult<f64> {
        let stats = self.candidate_stats(base, offset1, offset2)?;
        Ok(self.scorer.score(&stats, gains, guts))
    }

    fn check_inputs(&self, base: &StatVector, gains: &GainRates) -> MrResult<usize> {
        base.validate("base stats")?;
        gains.validate("gain rates")?;
        if self.table.is_empty() {
            return Err(MonrankError::Validation(
                "offset table is empty".to_string(),
            ));
        }
        Ok(self.table.len())
    }

    /// Best achievable score over every pair. Ties keep the pair reached
    /// first (`i` outer, `j` inner). A winner that is not finite is an error.
    pub fn best(
        &self,
        base: &StatVector,
        gains: &GainRates,
        guts: GutsRate,
    ) -> MrResult<ScoredCandidate> {
        let n = self.check_inputs(base, gains)?;

        let mut best_score = f64::NEG_INFINITY;
        let mut best_pair = (0, 0);
        for i in 0..n {
            for j in i..n {
                let score = self.score_pair_unchecked(base, gains, guts, i, j)?;
                if score > best_score {
                    best_score = score;
                    best_pair = (i, j);
                }
            }
        }

        // NaN never wins the comparison; an all-NaN search leaves the seed behind.
        if !best_score.is_finite() {
            return Err(MonrankError::Validation(format!(
                "no offset pair produced a finite score (best {})",
                best_score
            )));
        }

        let stats = self.candidate_stats(base, best_pair.0, best_pair.1)?;
        let projection = self.scorer.project(&stats, gains, guts);
        debug!(
            "Best offsets ({}, {}) -> {:.4} over {} entries",
            best_pair.0, best_pair.1, best_score, n
        );

        Ok(ScoredCandidate {
            offsets: Some(best_pair),
            score: best_score,
            projection: Some(projection),
        })
    }

    /// The `k` best distinct pairs, highest first; ties stay in enumeration order.
    pub fn top_pairs(
        &self,
        base: &StatVector,
        gains: &GainRates,
        guts: GutsRate,
        k: usize,
    ) -> MrResult<Vec<ScoredCandidate>> {
        let n = self.check_inputs(base, gains)?;

        let mut all = Vec::with_capacity(n * (n + 1) / 2);
        for i in 0..n {
            for j in i..n {
                all.push(ScoredCandidate {
                    offsets: Some((i, j)),
                    score: self.score_pair_unchecked(base, gains, guts, i, j)?,
                    projection: None,
                });
            }
        }

        all.sort_by(|a, b| b.score.total_cmp(&a.score));
        all.truncate(k);
        Ok(all)
    }
}
