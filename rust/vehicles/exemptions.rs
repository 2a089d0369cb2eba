use indexmap::set::IndexSet;
use serde::{Deserialize, Serialize};

use crate::vehicles::VehicleCategory;

/// The set of vehicle categories which never incur congestion tax.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VehicleExemptionSet {
    pub(crate) exempt: IndexSet<VehicleCategory>,
}

impl VehicleExemptionSet {
    /// Create an exemption set from the given categories.
    pub fn new(exempt: Vec<VehicleCategory>) -> Self {
        VehicleExemptionSet {
            exempt: IndexSet::from_iter(exempt),
        }
    }

    /// Returns whether vehicles of the category pass toll gates free of charge.
    pub fn is_exempt(&self, category: &VehicleCategory) -> bool {
        self.exempt.contains(category)
    }
}

impl Default for VehicleExemptionSet {
    /// Motorcycles, buses, emergency, diplomatic, foreign and military vehicles.
    fn default() -> Self {
        VehicleExemptionSet::new(vec![
            VehicleCategory::Motorcycle,
            VehicleCategory::Bus,
            VehicleCategory::Emergency,
            VehicleCategory::Diplomat,
            VehicleCategory::Foreign,
            VehicleCategory::Military,
        ])
    }
}
