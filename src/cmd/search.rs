use crate::reports;
use clap::Args;
use monrank::config::{DataPaths, ScoringParams};
use monrank::error::MrResult;
use monrank::optimizer::OffsetOptimizer;
use monrank::scorer::loader::{find_monster, load_offset_table, MonsterRecord};
use monrank::scorer::Scorer;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    #[command(flatten)]
    pub params: ScoringParams,

    #[arg(long)]
    pub monster_id: u32,

    /// Number of runner-up pairs to list.
    #[arg(long, default_value_t = 5)]
    pub top: usize,
}

pub fn run(
    args: &SearchArgs,
    scorer: &Scorer,
    roster: &[MonsterRecord],
    paths: &DataPaths,
) -> MrResult<()> {
    let monster = find_monster(roster, args.monster_id)?;

    info!("Loading offset table: {}", paths.offsets);
    let table = load_offset_table(&paths.offsets)?;
    let optimizer = OffsetOptimizer::new(scorer, &table);

    let base = scorer.evaluate(&monster.stats, &monster.gains, monster.guts_rate)?;
    let best = optimizer.best(&monster.stats, &monster.gains, monster.guts_rate)?;
    let top = optimizer.top_pairs(&monster.stats, &monster.gains, monster.guts_rate, args.top)?;

    reports::print_search(monster, &base, &best, &top);
    Ok(())
}
