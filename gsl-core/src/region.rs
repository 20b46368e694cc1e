use crate::month_key::MonthKey;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The three geographic partitions the observation datasets are split into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    Mexico,
    Utah,
    Arizona,
}

impl Region {
    pub const ALL: [Region; 3] = [Region::Mexico, Region::Utah, Region::Arizona];

    /// Two-letter code used in partition directory and file names.
    pub fn code(&self) -> &'static str {
        match self {
            Region::Mexico => "MX",
            Region::Utah => "UT",
            Region::Arizona => "AZ",
        }
    }
}

/// The two bird datasets the story covers: American White Pelican (AMP)
/// and Eared Grebe (EG).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Species {
    Pelican,
    Grebe,
}

impl Species {
    /// File-name prefix of this dataset's partition files.
    pub fn prefix(&self) -> &'static str {
        match self {
            Species::Pelican => "AMP",
            Species::Grebe => "EG",
        }
    }

    /// Top-level directory holding this dataset's monthly partitions.
    pub fn dataset_dir(&self) -> &'static str {
        match self {
            Species::Pelican => "amp_geojsons",
            Species::Grebe => "eg_geojsons",
        }
    }

    /// Relative path of one monthly partition file, e.g.
    /// `amp_geojsons/monthly_MX_jsons/AMP_MX_2004-01.json`.
    pub fn partition_path(&self, region: Region, key: MonthKey) -> String {
        format!(
            "{}/monthly_{}_jsons/{}_{}_{}.json",
            self.dataset_dir(),
            region.code(),
            self.prefix(),
            region.code(),
            key
        )
    }
}

impl FromStr for Species {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pelican" | "amp" => Ok(Species::Pelican),
            "grebe" | "eg" => Ok(Species::Grebe),
            other => Err(format!("unknown species: {other}")),
        }
    }
}
