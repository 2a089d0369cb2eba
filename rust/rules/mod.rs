//! The parameters which define a congestion tax regime.
//!
//! [`TaxRules`] bundles a toll-free [`Cal`], a [`FeeSchedule`], a [`VehicleExemptionSet`], the
//! daily maximum and the single charge window length. Rules are plain data and can be stored and
//! loaded as JSON with the [`JSON`](crate::json::JSON) trait; loading validates every component.
//!
//! ### Example
//! ```rust
//! # use congestion_tax::rules::TaxRules;
//! # use congestion_tax::json::JSON;
//! let rules = TaxRules::gothenburg_2013().unwrap();
//! let js = rules.to_json().unwrap();
//! assert_eq!(TaxRules::from_json(&js).unwrap(), rules);
//! ```

mod serde;

use ::serde::{Deserialize, Serialize};
use chrono::Duration;

use crate::calendars::{get_calendar_by_name, Cal};
use crate::error::{TaxError, TaxResult};
use crate::fees::FeeSchedule;
use crate::ledger::DEFAULT_WINDOW_MINUTES;
use crate::vehicles::VehicleExemptionSet;

/// The daily maximum in the Gothenburg rules.
pub const DEFAULT_MAX_DAILY_FEE: i32 = 60;

/// The complete set of rules applied by a [`TaxCalculator`](crate::calculator::TaxCalculator).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TaxRulesDataModel")]
pub struct TaxRules {
    pub calendar: Cal,
    pub fees: FeeSchedule,
    pub exemptions: VehicleExemptionSet,
    pub max_daily_fee: i32,
    pub window_minutes: i64,
}

#[derive(Deserialize)]
struct TaxRulesDataModel {
    calendar: Cal,
    fees: FeeSchedule,
    exemptions: VehicleExemptionSet,
    max_daily_fee: i32,
    window_minutes: i64,
}

impl TryFrom<TaxRulesDataModel> for TaxRules {
    type Error = TaxError;

    fn try_from(model: TaxRulesDataModel) -> Result<Self, Self::Error> {
        let rules = TaxRules {
            calendar: model.calendar,
            fees: model.fees,
            exemptions: model.exemptions,
            max_daily_fee: model.max_daily_fee,
            window_minutes: model.window_minutes,
        };
        rules.validate()?;
        Ok(rules)
    }
}

impl TaxRules {
    /// The Gothenburg congestion tax rules for 2013.
    pub fn gothenburg_2013() -> TaxResult<Self> {
        Ok(TaxRules {
            calendar: get_calendar_by_name("gbg")?,
            fees: FeeSchedule::gothenburg()?,
            exemptions: VehicleExemptionSet::default(),
            max_daily_fee: DEFAULT_MAX_DAILY_FEE,
            window_minutes: DEFAULT_WINDOW_MINUTES,
        })
    }

    /// Check the scalar parameters are usable.
    pub fn validate(&self) -> TaxResult<()> {
        if self.max_daily_fee < 0 {
            return Err(TaxError::InvalidArgument(format!(
                "`max_daily_fee` cannot be negative, got {}.",
                self.max_daily_fee
            )));
        }
        self.window().map(|_| ())
    }

    /// Return the single charge window as a duration.
    pub fn window(&self) -> TaxResult<Duration> {
        if self.window_minutes <= 0 {
            return Err(TaxError::InvalidArgument(format!(
                "`window_minutes` must be positive, got {}.",
                self.window_minutes
            )));
        }
        Duration::try_minutes(self.window_minutes).ok_or_else(|| {
            TaxError::InvalidArgument(format!(
                "`window_minutes` {} is out of range.",
                self.window_minutes
            ))
        })
    }
}
