pub mod parking;

pub use parking::{parking_page, spot_sections, ParkingPageVm};
