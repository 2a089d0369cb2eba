use serde::{Deserialize, Serialize};
use std::fmt;

/// Enumerable type for the category of a vehicle passing a toll gate.
#[derive(Debug, Hash, Copy, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum VehicleCategory {
    Car,
    Motorcycle,
    Bus,
    Emergency,
    Diplomat,
    Foreign,
    Military,
    /// Any category not otherwise listed. Taxed as a car.
    Unlisted,
}

impl VehicleCategory {
    /// Return the category matching `name`, case-insensitively.
    ///
    /// Unrecognised names do not fail; they map to [`VehicleCategory::Unlisted`]. The legacy
    /// Swedish spelling *"buss"* is accepted for [`VehicleCategory::Bus`].
    ///
    /// # Examples
    /// ```rust
    /// # use congestion_tax::vehicles::VehicleCategory;
    /// assert_eq!(VehicleCategory::from_name("Motorcycle"), VehicleCategory::Motorcycle);
    /// assert_eq!(VehicleCategory::from_name("Buss"), VehicleCategory::Bus);
    /// assert_eq!(VehicleCategory::from_name("Tractor"), VehicleCategory::Unlisted);
    /// ```
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "car" => VehicleCategory::Car,
            "motorcycle" | "motorbike" => VehicleCategory::Motorcycle,
            "bus" | "buss" => VehicleCategory::Bus,
            "emergency" => VehicleCategory::Emergency,
            "diplomat" => VehicleCategory::Diplomat,
            "foreign" => VehicleCategory::Foreign,
            "military" => VehicleCategory::Military,
            _ => VehicleCategory::Unlisted,
        }
    }
}

impl fmt::Display for VehicleCategory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            VehicleCategory::Car => "Car",
            VehicleCategory::Motorcycle => "Motorcycle",
            VehicleCategory::Bus => "Bus",
            VehicleCategory::Emergency => "Emergency",
            VehicleCategory::Diplomat => "Diplomat",
            VehicleCategory::Foreign => "Foreign",
            VehicleCategory::Military => "Military",
            VehicleCategory::Unlisted => "Unlisted",
        };
        write!(f, "{}", name)
    }
}

/// Anything which passes a toll gate and can be classified for tax purposes.
pub trait Vehicle {
    /// Return the category used to decide whether the vehicle is taxed.
    fn category(&self) -> VehicleCategory;
}

impl Vehicle for VehicleCategory {
    fn category(&self) -> VehicleCategory {
        *self
    }
}
