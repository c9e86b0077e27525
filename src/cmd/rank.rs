use crate::reports;
use clap::Args;
use monrank::config::{DataPaths, ScoringParams};
use monrank::error::MrResult;
use monrank::optimizer::runner::rank_roster;
use monrank::scorer::loader::{load_offset_table, MonsterRecord};
use monrank::scorer::Scorer;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct RankArgs {
    #[command(flatten)]
    pub params: ScoringParams,

    /// Number of monsters to display.
    #[arg(long, default_value_t = 20)]
    pub top: usize,

    /// Score offset-eligible monsters at their best offset pair.
    #[arg(long, default_value_t = false)]
    pub with_offsets: bool,

    /// Emit the ranking as JSON instead of a table.
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(
    args: &RankArgs,
    scorer: &Scorer,
    roster: &[MonsterRecord],
    paths: &DataPaths,
) -> MrResult<()> {
    let table = if args.with_offsets {
        info!("Loading offset table: {}", paths.offsets);
        Some(load_offset_table(&paths.offsets)?)
    } else {
        None
    };

    let ranked = rank_roster(scorer, roster, table.as_ref())?;
    let shown = &ranked[..args.top.min(ranked.len())];

    if args.json {
        println!("{}", serde_json::to_string_pretty(shown)?);
    } else {
        reports::print_ranking(shown, args.with_offsets);
    }
    Ok(())
}
