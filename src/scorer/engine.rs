use super::types::{GainRates, GutsRate, MainStat, Projection, StatVector};
use crate::config::ScoringParams;

/// Projects end-of-training stats and the resulting ranking score.
///
/// `params` must already be validated (`max_weeks >= 1`, `cycle_weeks > 0`).
#[inline]
pub fn project(
    params: &ScoringParams,
    stats: &StatVector,
    gains: &GainRates,
    guts: GutsRate,
) -> Projection {
    let weeks_available = stats.lifespan.clamp(1.0, params.max_weeks);
    let heavy_cycles = (weeks_available / params.cycle_weeks).floor();

    // Strict comparison: equal gains train Intelligence.
    let (main_stat, projected_main) = if gains.power > gains.intelligence {
        (MainStat::Power, stats.power + gains.power * heavy_cycles)
    } else {
        (
            MainStat::Intelligence,
            stats.intelligence + gains.intelligence * heavy_cycles,
        )
    };

    let projected_skill = stats.skill + gains.skill * heavy_cycles;
    let projected_speed = stats.speed + gains.speed * heavy_cycles;

    let effective_guts_rate = guts.effective(params.guts_baseline);

    let weighted = params.weight_main * projected_main
        + params.weight_skill * projected_skill
        + params.weight_speed * projected_speed;
    let score = weighted * (params.guts_baseline / effective_guts_rate) / weeks_available;

    Projection {
        weeks_available,
        heavy_cycles,
        main_stat,
        projected_main,
        projected_skill,
        projected_speed,
        effective_guts_rate,
        score,
    }
}
