//! Vehicle categories and the set of categories exempt from congestion tax.

mod category;
mod exemptions;

pub use crate::vehicles::{
    category::{Vehicle, VehicleCategory},
    exemptions::VehicleExemptionSet,
};
