use crate::error::{MonrankError, MrResult};
use serde::{Deserialize, Serialize};
use std::ops::Add;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumCount, EnumIter};

/// The seven canonical stat fields, in canonical order.
#[derive(Debug, Clone, Copy, EnumIter, EnumCount, Display, PartialEq, Eq, Hash, Serialize)]
pub enum Stat {
    Life,
    Power,
    Intelligence,
    Skill,
    Speed,
    Defense,
    Lifespan,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatVector {
    pub life: f64,
    pub power: f64,
    pub intelligence: f64,
    pub skill: f64,
    pub speed: f64,
    pub defense: f64,
    pub lifespan: f64,
}

impl StatVector {
    pub fn get(&self, stat: Stat) -> f64 {
        match stat {
            Stat::Life => self.life,
            Stat::Power => self.power,
            Stat::Intelligence => self.intelligence,
            Stat::Skill => self.skill,
            Stat::Speed => self.speed,
            Stat::Defense => self.defense,
            Stat::Lifespan => self.lifespan,
        }
    }

    pub fn set(&mut self, stat: Stat, value: f64) {
        let slot = match stat {
            Stat::Life => &mut self.life,
            Stat::Power => &mut self.power,
            Stat::Intelligence => &mut self.intelligence,
            Stat::Skill => &mut self.skill,
            Stat::Speed => &mut self.speed,
            Stat::Defense => &mut self.defense,
            Stat::Lifespan => &mut self.lifespan,
        };
        *slot = value;
    }

    /// Rejects NaN or infinite fields. `context` names the owner in the error.
    pub fn validate(&self, context: &str) -> MrResult<()> {
        for stat in Stat::iter() {
            let v = self.get(stat);
            if !v.is_finite() {
                return Err(MonrankError::Validation(format!(
                    "{}: {} is not finite ({})",
                    context, stat, v
                )));
            }
        }
        Ok(())
    }
}

impl Add for StatVector {
    type Output = StatVector;

    fn add(self, rhs: StatVector) -> StatVector {
        StatVector {
            life: self.life + rhs.life,
            power: self.power + rhs.power,
            intelligence: self.intelligence + rhs.intelligence,
            skill: self.skill + rhs.skill,
            speed: self.speed + rhs.speed,
            defense: self.defense + rhs.defense,
            lifespan: self.lifespan + rhs.lifespan,
        }
    }
}

/// Per-cycle training gains. Zero and negative values are legal.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GainRates {
    pub power: f64,
    pub intelligence: f64,
    pub skill: f64,
    pub speed: f64,
}

impl GainRates {
    pub fn validate(&self, context: &str) -> MrResult<()> {
        let fields = [
            ("Pow gain", self.power),
            ("Int gain", self.intelligence),
            ("Ski gain", self.skill),
            ("Spd gain", self.speed),
        ];
        for (name, v) in fields {
            if !v.is_finite() {
                return Err(MonrankError::Validation(format!(
                    "{}: {} is not finite ({})",
                    context, name, v
                )));
            }
        }
        Ok(())
    }
}

/// Non-negative guts rate. Zero is a sentinel for the baseline rate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GutsRate(f64);

impl GutsRate {
    pub fn new(rate: f64) -> MrResult<Self> {
        if !rate.is_finite() || rate < 0.0 {
            return Err(MonrankError::Validation(format!(
                "guts rate must be finite and non-negative, got {}",
                rate
            )));
        }
        Ok(Self(rate))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// The rate actually used by the formula.
    #[inline(always)]
    pub fn effective(self, baseline: f64) -> f64 {
        if self.0 == 0.0 {
            baseline
        } else {
            self.0
        }
    }
}

#[derive(Debug, Clone, Copy, Display, PartialEq, Eq, Serialize)]
pub enum MainStat {
    #[strum(serialize = "Pow")]
    Power,
    #[strum(serialize = "Int")]
    Intelligence,
}

/// Every intermediate of one score computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Projection {
    pub weeks_available: f64,
    pub heavy_cycles: f64,
    pub main_stat: MainStat,
    pub projected_main: f64,
    pub projected_skill: f64,
    pub projected_speed: f64,
    pub effective_guts_rate: f64,
    pub score: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoredCandidate {
    /// `None` when the monster was scored without offsets.
    pub offsets: Option<(usize, usize)>,
    pub score: f64,
    pub projection: Option<Projection>,
}

/// Maximum stat bonus per offset index, in canonical field order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OffsetBonusTable {
    entries: Vec<StatVector>,
}

impl OffsetBonusTable {
    pub fn new(entries: Vec<StatVector>) -> MrResult<Self> {
        for (i, entry) in entries.iter().enumerate() {
            entry.validate(&format!("offset {}", i))?;
        }
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[StatVector] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> MrResult<&StatVector> {
        self.entries.get(index).ok_or(MonrankError::OffsetIndex {
            index,
            len: self.entries.len(),
        })
    }
}
