use crate::error::{MonrankError, MrResult};
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Input files shared by every subcommand.
#[derive(Args, Debug, Clone)]
pub struct DataPaths {
    /// Monster roster CSVs (comma separated), concatenated in the order given.
    #[arg(
        global = true,
        short,
        long,
        value_delimiter = ',',
        default_values = ["en_sqlout_1.csv", "en_sqlout_2.csv"]
    )]
    pub monsters: Vec<String>,

    #[arg(global = true, short, long, default_value = "sdata_monster_offset.csv")]
    pub offsets: String,

    /// Optional JSON file with scoring parameters.
    #[arg(global = true, long)]
    pub params: Option<String>,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringParams {
    // === TERM WEIGHTS ===
    #[arg(long, default_value_t = 0.5)]
    pub weight_main: f64,
    #[arg(long, default_value_t = 0.3)]
    pub weight_skill: f64,
    #[arg(long, default_value_t = 0.2)]
    pub weight_speed: f64,

    // === GUTS ===
    // Substituted for a zero guts rate and used as the numerator of the guts factor.
    #[arg(long, default_value_t = 20.0)]
    pub guts_baseline: f64,

    // === TRAINING CALENDAR ===
    #[arg(long, default_value_t = 104.0)]
    pub max_weeks: f64,
    #[arg(long, default_value_t = 4.0)]
    pub cycle_weeks: f64,
}

impl Default for ScoringParams {
    fn default() -> Self {
        Self {
            weight_main: 0.5,
            weight_skill: 0.3,
            weight_speed: 0.2,
            guts_baseline: 20.0,
            max_weeks: 104.0,
            cycle_weeks: 4.0,
        }
    }
}

impl ScoringParams {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> MrResult<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Copies every parameter the user typed on the command line over the
    /// values loaded from file.
    pub fn merge_from_cli(&mut self, cli_params: &ScoringParams, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident) => {
                if matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                    self.$field = cli_params.$field;
                }
            };
        }

        update_if_present!(weight_main);
        update_if_present!(weight_skill);
        update_if_present!(weight_speed);
        update_if_present!(guts_baseline);
        update_if_present!(max_weeks);
        update_if_present!(cycle_weeks);
    }

    pub fn validate(&self) -> MrResult<()> {
        let fields = [
            ("weight_main", self.weight_main),
            ("weight_skill", self.weight_skill),
            ("weight_speed", self.weight_speed),
            ("guts_baseline", self.guts_baseline),
            ("max_weeks", self.max_weeks),
            ("cycle_weeks", self.cycle_weeks),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(MonrankError::Config(format!(
                    "{} must be finite, got {}",
                    name, value
                )));
            }
        }
        if self.max_weeks < 1.0 {
            return Err(MonrankError::Config(format!(
                "max_weeks must be at least 1, got {}",
                self.max_weeks
            )));
        }
        if self.cycle_weeks <= 0.0 {
            return Err(MonrankError::Config(format!(
                "cycle_weeks must be positive, got {}",
                self.cycle_weeks
            )));
        }
        if self.guts_baseline <= 0.0 {
            return Err(MonrankError::Config(format!(
                "guts_baseline must be positive, got {}",
                self.guts_baseline
            )));
        }
        Ok(())
    }
}
