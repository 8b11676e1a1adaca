pub mod spot;
pub mod view;

pub use spot::{Category, Occupancy, ParkingSpot, SpotPatch};
pub use view::{InventorySummary, SpotView};
