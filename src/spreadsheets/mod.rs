pub mod export_xlsx;

pub use export_xlsx::{export_filename, export_spots_xlsx};
