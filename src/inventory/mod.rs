pub mod assignment;
pub mod events;
pub mod lifecycle;
pub mod query;
pub mod store;

pub use assignment::AssignmentForm;
pub use events::{EventKind, EventRecorder, InventoryEvent, InventoryObserver, Notice, Severity};
pub use lifecycle::toggle_availability;
pub use query::{query, SortKey, SpotQuery, StatusFilter, TypeFilter};
pub use store::InventoryStore;
