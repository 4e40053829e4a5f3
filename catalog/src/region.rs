//! Geographic selections and their chart-ready datasets.

#[cfg(test)]
#[path = "region_test.rs"]
mod region_test;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::locale::Bilingual;

/// Selectable geographic scope. `India` is the national aggregate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    #[default]
    India,
    Bihar,
    UttarPradesh,
    Delhi,
    Maharashtra,
    Gujarat,
}

impl Region {
    /// Selector order.
    pub const ALL: [Self; 6] = [
        Self::India,
        Self::Bihar,
        Self::UttarPradesh,
        Self::Delhi,
        Self::Maharashtra,
        Self::Gujarat,
    ];

    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::India => "india",
            Self::Bihar => "bihar",
            Self::UttarPradesh => "uttar_pradesh",
            Self::Delhi => "delhi",
            Self::Maharashtra => "maharashtra",
            Self::Gujarat => "gujarat",
        }
    }

    /// Caption shown in the region selector.
    #[must_use]
    pub fn caption(self) -> &'static str {
        match self {
            Self::India => "🇮🇳 India",
            Self::Bihar => "📍 Bihar",
            Self::UttarPradesh => "📍 UP",
            Self::Delhi => "📍 Delhi",
            Self::Maharashtra => "📍 MH",
            Self::Gujarat => "📍 Gujarat",
        }
    }

    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|region| region.code() == code)
    }

    #[must_use]
    pub fn is_national(self) -> bool {
        self == Self::India
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// One bar of the population age distribution.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AgeBand {
    pub name: String,
    /// Population in crore.
    pub value: f64,
    pub fill: String,
}

/// Share of suspicious enrolments in a district, split by age bracket.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnomalyRecord {
    pub district: String,
    pub total: f64,
    pub kids: f64,
    pub adult: f64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MigrationRecord {
    pub district: String,
    pub updates: u64,
}

/// Percentage split for one sub-region. The three shares sum to 100.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenderSplit {
    pub region: String,
    pub male: u8,
    pub female: u8,
    pub other: u8,
}

/// Enrolment center timings in minutes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CenterEfficiency {
    pub district: String,
    pub wait_time: u32,
    pub process_time: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BiometricRecord {
    pub age_group: String,
    /// Enrolled population in crore.
    pub enrolled: f64,
    /// Saturation percentage, 0 to 100.
    pub saturation: f64,
}

/// Every chart-ready record bundled for one region.
///
/// Array fields default to empty so a partial document still parses;
/// completeness is enforced by [`RegionDataset::empty_fields`] at load.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RegionDataset {
    pub population: String,
    #[serde(default)]
    pub age: Vec<AgeBand>,
    #[serde(default)]
    pub anomalies: Vec<AnomalyRecord>,
    #[serde(default)]
    pub migration: Vec<MigrationRecord>,
    #[serde(default)]
    pub gender: Vec<GenderSplit>,
    #[serde(default)]
    pub efficiency: Vec<CenterEfficiency>,
    #[serde(default)]
    pub biometric: Vec<BiometricRecord>,
    #[serde(default)]
    pub insight: Bilingual,
}

/// Charted array fields of a [`RegionDataset`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegionField {
    Age,
    Anomalies,
    Migration,
    Gender,
    Efficiency,
    Biometric,
}

impl RegionField {
    pub const ALL: [Self; 6] = [
        Self::Age,
        Self::Anomalies,
        Self::Migration,
        Self::Gender,
        Self::Efficiency,
        Self::Biometric,
    ];
}

impl fmt::Display for RegionField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Age => "age",
            Self::Anomalies => "anomalies",
            Self::Migration => "migration",
            Self::Gender => "gender",
            Self::Efficiency => "efficiency",
            Self::Biometric => "biometric",
        })
    }
}

impl RegionDataset {
    #[must_use]
    pub fn field_len(&self, field: RegionField) -> usize {
        match field {
            RegionField::Age => self.age.len(),
            RegionField::Anomalies => self.anomalies.len(),
            RegionField::Migration => self.migration.len(),
            RegionField::Gender => self.gender.len(),
            RegionField::Efficiency => self.efficiency.len(),
            RegionField::Biometric => self.biometric.len(),
        }
    }

    /// Charted fields that hold no records.
    #[must_use]
    pub fn empty_fields(&self) -> Vec<RegionField> {
        RegionField::ALL.into_iter().filter(|field| self.field_len(*field) == 0).collect()
    }

    /// Copy of `national` that keeps this region's population headline.
    ///
    /// Used for regions that ship only a headline figure.
    #[must_use]
    pub fn inheriting(&self, national: &RegionDataset) -> RegionDataset {
        RegionDataset { population: self.population.clone(), ..national.clone() }
    }
}
