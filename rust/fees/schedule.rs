use chrono::prelude::*;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::error::{TaxError, TaxResult};

/// A fee charged for passages in the clock interval `[start, end)`.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeeBand {
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub fee: i32,
}

impl FeeBand {
    /// Create a band from `(hour, minute)` boundaries.
    ///
    /// Returns an error if either boundary is not a valid clock time.
    pub fn try_new(start: (u32, u32), end: (u32, u32), fee: i32) -> TaxResult<Self> {
        let hm = |(h, m): (u32, u32)| {
            NaiveTime::from_hms_opt(h, m, 0).ok_or_else(|| {
                TaxError::InvalidSchedule(format!("{:02}:{:02} is not a valid clock time.", h, m))
            })
        };
        Ok(FeeBand {
            start: hm(start)?,
            end: hm(end)?,
            fee,
        })
    }

    /// Returns whether the time falls inside the band.
    pub fn contains(&self, time: &NaiveTime) -> bool {
        self.start <= *time && *time < self.end
    }
}

/// A step function from clock time to fee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "FeeScheduleDataModel")]
pub struct FeeSchedule {
    pub(crate) bands: Vec<FeeBand>,
}

#[derive(Deserialize)]
struct FeeScheduleDataModel {
    bands: Vec<FeeBand>,
}

impl TryFrom<FeeScheduleDataModel> for FeeSchedule {
    type Error = TaxError;

    fn try_from(model: FeeScheduleDataModel) -> Result<Self, Self::Error> {
        Self::try_new(model.bands)
    }
}

impl FeeSchedule {
    /// Create a new [`FeeSchedule`].
    ///
    /// Bands are sorted by their start time. Returns an error if any band is empty or reversed,
    /// carries a negative fee, or overlaps another band.
    pub fn try_new(bands: Vec<FeeBand>) -> TaxResult<Self> {
        let bands: Vec<FeeBand> = bands.into_iter().sorted_by_key(|b| b.start).collect();
        for band in bands.iter() {
            if band.start >= band.end {
                return Err(TaxError::InvalidSchedule(format!(
                    "band {}..{} must start before it ends.",
                    band.start, band.end
                )));
            }
            if band.fee < 0 {
                return Err(TaxError::InvalidSchedule(format!(
                    "band {}..{} has negative fee {}.",
                    band.start, band.end, band.fee
                )));
            }
        }
        if let Some((a, b)) = bands.iter().tuple_windows().find(|(a, b)| a.end > b.start) {
            return Err(TaxError::InvalidSchedule(format!(
                "band {}..{} overlaps band {}..{}.",
                a.start, a.end, b.start, b.end
            )));
        }
        Ok(FeeSchedule { bands })
    }

    /// The Gothenburg congestion tax fees.
    ///
    /// | Time        | Fee |
    /// |-------------|-----|
    /// | 06:00–06:29 | 8   |
    /// | 06:30–07:59 | 13  |
    /// | 08:00–08:29 | 18  |
    /// | 08:30–14:59 | 13  |
    /// | 15:00–15:29 | 8   |
    /// | 15:30–16:59 | 13  |
    /// | 17:00–18:29 | 18  |
    /// | 18:30–18:59 | 13  |
    /// | 19:00–05:59 | 0   |
    pub fn gothenburg() -> TaxResult<Self> {
        FeeSchedule::try_new(vec![
            FeeBand::try_new((6, 0), (6, 30), 8)?,
            FeeBand::try_new((6, 30), (8, 0), 13)?,
            FeeBand::try_new((8, 0), (8, 30), 18)?,
            FeeBand::try_new((8, 30), (15, 0), 13)?,
            FeeBand::try_new((15, 0), (15, 30), 8)?,
            FeeBand::try_new((15, 30), (17, 0), 13)?,
            FeeBand::try_new((17, 0), (18, 30), 18)?,
            FeeBand::try_new((18, 30), (19, 0), 13)?,
        ])
    }

    /// Return the fee for a passage at the given clock time.
    ///
    /// Only the hour and minute are considered; seconds are ignored.
    pub fn fee_for(&self, time: &NaiveTime) -> i32 {
        let time = time
            .with_second(0)
            .and_then(|t| t.with_nanosecond(0))
            .unwrap_or(*time);
        self.bands
            .iter()
            .find(|band| band.contains(&time))
            .map_or(0, |band| band.fee)
    }

    /// Return the bands in ascending order of start time.
    pub fn bands(&self) -> &[FeeBand] {
        &self.bands
    }
}
