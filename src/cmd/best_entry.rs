use crate::reports;
use clap::Args;
use monrank::config::{DataPaths, ScoringParams};
use monrank::error::{MonrankError, MrResult};
use monrank::optimizer::runner::best_entry;
use monrank::optimizer::OffsetOptimizer;
use monrank::scorer::loader::{find_monster, load_entries, load_offset_table, MonsterRecord};
use monrank::scorer::Scorer;
use tracing::{info, warn};

#[derive(Args, Debug, Clone)]
pub struct BestEntryArgs {
    #[command(flatten)]
    pub params: ScoringParams,

    #[arg(long)]
    pub monster_id: u32,

    /// Entry list CSV. Defaults to `<monster-id>.csv`.
    #[arg(long)]
    pub entries: Option<String>,
}

pub fn run(
    args: &BestEntryArgs,
    scorer: &Scorer,
    roster: &[MonsterRecord],
    paths: &DataPaths,
) -> MrResult<()> {
    let monster = find_monster(roster, args.monster_id)?;
    if !monster.offset_eligible {
        warn!(
            "Monster {} is not flagged for offsets; scoring entries anyway.",
            monster.id
        );
    }

    info!("Loading offset table: {}", paths.offsets);
    let table = load_offset_table(&paths.offsets)?;

    let entries_path = args
        .entries
        .clone()
        .unwrap_or_else(|| format!("{}.csv", args.monster_id));
    let entries = load_entries(&entries_path)?;

    let optimizer = OffsetOptimizer::new(scorer, &table);
    let best = best_entry(
        &optimizer,
        &monster.stats,
        &monster.gains,
        monster.guts_rate,
        &entries,
    )?
    .ok_or_else(|| {
        MonrankError::Validation(format!("no entries with offsets in '{}'", entries_path))
    })?;

    reports::print_best_entry(monster, &best);
    Ok(())
}
