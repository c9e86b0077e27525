use super::OffsetOptimizer;
use crate::error::MrResult;
use crate::scorer::loader::{EntryOffsets, MonsterRecord};
use crate::scorer::{GainRates, GutsRate, OffsetBonusTable, ScoredCandidate, Scorer, StatVector};
use rayon::prelude::*;
use serde::Serialize;
use std::time::Instant;
use tracing::info;

#[derive(Debug, Clone, Serialize)]
pub struct RankedMonster {
    pub id: u32,
    pub name: String,
    pub main: String,
    pub sub: String,
    pub candidate: ScoredCandidate,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoredEntry {
    pub entry: EntryOffsets,
    pub score: f64,
}

fn score_monster(
    scorer: &Scorer,
    monster: &MonsterRecord,
    offsets: Option<&OffsetBonusTable>,
) -> MrResult<ScoredCandidate> {
    match offsets {
        Some(table) if monster.offset_eligible => OffsetOptimizer::new(scorer, table).best(
            &monster.stats,
            &monster.gains,
            monster.guts_rate,
        ),
        _ => scorer.evaluate(&monster.stats, &monster.gains, monster.guts_rate),
    }
}

/// Scores every monster and sorts by score, highest first.
///
/// Monsters are scored in parallel; the collect keeps roster order and the
/// sort is stable, so equal scores stay in roster order.
pub fn rank_roster(
    scorer: &Scorer,
    roster: &[MonsterRecord],
    offsets: Option<&OffsetBonusTable>,
) -> MrResult<Vec<RankedMonster>> {
    let start = Instant::now();

    let mut ranked = roster
        .par_iter()
        .map(|m| -> MrResult<RankedMonster> {
            Ok(RankedMonster {
                id: m.id,
                name: m.name.clone(),
                main: m.main.clone(),
                sub: m.sub.clone(),
                candidate: score_monster(scorer, m, offsets)?,
            })
        })
        .collect::<MrResult<Vec<_>>>()?;

    ranked.sort_by(|a, b| b.candidate.score.total_cmp(&a.candidate.score));

    info!(
        "Ranked {} monsters in {:.2?} (offsets: {})",
        ranked.len(),
        start.elapsed(),
        offsets.is_some()
    );
    Ok(ranked)
}

/// Highest-scoring entry of an already rolled list; the first one wins ties.
pub fn best_entry(
    optimizer: &OffsetOptimizer,
    base: &StatVector,
    gains: &GainRates,
    guts: GutsRate,
    entries: &[EntryOffsets],
) -> MrResult<Option<ScoredEntry>> {
    base.validate("base stats")?;
    gains.validate("gain rates")?;

    let mut best: Option<ScoredEntry> = None;
    for entry in entries {
        let score =
            optimizer.score_pair_unchecked(base, gains, guts, entry.offset1, entry.offset2)?;
        if best.map_or(true, |b| score > b.score) {
            best = Some(ScoredEntry {
                entry: *entry,
                score,
            });
        }
    }
    Ok(best)
}
