use crate::calculator::DailyTax;
use crate::calendars::Cal;
use crate::fees::FeeSchedule;
use crate::json::JSON;
use crate::rules::TaxRules;
use crate::vehicles::{VehicleCategory, VehicleExemptionSet};

impl JSON for Cal {}
impl JSON for FeeSchedule {}
impl JSON for VehicleCategory {}
impl JSON for VehicleExemptionSet {}
impl JSON for TaxRules {}
impl JSON for DailyTax {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendars::{get_calendar_by_name, nd};
    use crate::error::TaxError;
    use crate::fees::FeeBand;

    #[test]
    fn test_cal_json() {
        let hols = vec![nd(2013, 6, 20), nd(2013, 6, 21)];
        let cal = Cal::try_new(hols, vec![5, 6]).unwrap();
        let js = cal.to_json().unwrap();
        let cal2 = Cal::from_json(&js).unwrap();
        assert_eq!(cal, cal2);
    }

    #[test]
    fn test_named_cal_json() {
        let cal = get_calendar_by_name("gbg").unwrap();
        let js = cal.to_json().unwrap();
        assert_eq!(Cal::from_json(&js).unwrap(), cal);
    }

    #[test]
    fn test_fee_schedule_json() {
        let s = FeeSchedule::gothenburg().unwrap();
        let js = s.to_json().unwrap();
        assert_eq!(FeeSchedule::from_json(&js).unwrap(), s);
    }

    #[test]
    fn test_fee_schedule_json_rejects_overlap() {
        let bad = FeeSchedule {
            bands: vec![
                FeeBand::try_new((7, 0), (8, 0), 10).unwrap(),
                FeeBand::try_new((7, 30), (9, 0), 5).unwrap(),
            ],
        };
        let js = bad.to_json().unwrap();
        assert!(matches!(FeeSchedule::from_json(&js), Err(TaxError::Json(_))));
    }

    #[test]
    fn test_vehicle_category_json() {
        let js = VehicleCategory::Diplomat.to_json().unwrap();
        assert_eq!(js, "\"Diplomat\"");
        assert_eq!(VehicleCategory::from_json(&js).unwrap(), VehicleCategory::Diplomat);
    }

    #[test]
    fn test_exemptions_json() {
        let set = VehicleExemptionSet::default();
        let js = set.to_json().unwrap();
        assert_eq!(VehicleExemptionSet::from_json(&js).unwrap(), set);
    }

    #[test]
    fn test_tax_rules_json_rejects_window() {
        let mut rules = TaxRules::gothenburg_2013().unwrap();
        rules.window_minutes = -5;
        let js = rules.to_json().unwrap();
        assert!(TaxRules::from_json(&js).is_err());
    }
}
