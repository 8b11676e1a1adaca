// src/inventory/events.rs

use crate::domain::spot::ParkingSpot;
use crate::errors::{FieldError, InventoryError};
use chrono::{NaiveDateTime, Utc};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Alert colour understood by the confirmation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Danger,
    Warning,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Danger => "danger",
            Severity::Warning => "warning",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A human-readable message for the alert layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub severity: Severity,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Success,
        }
    }

    pub fn danger(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Danger,
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Warning,
        }
    }
}

impl From<&InventoryError> for Notice {
    fn from(err: &InventoryError) -> Self {
        match err {
            InventoryError::NotFound { number } => {
                Notice::warning(format!("El espacio {number} no existe"))
            }
            InventoryError::DuplicateNumber { number } => {
                Notice::danger(format!("El espacio {number} ya está registrado"))
            }
            InventoryError::Validation(errs) => {
                Notice::danger(format!("Revise los campos: {}", errs.field_names().join(", ")))
            }
        }
    }
}

/// What changed in the store, after the change was committed.
#[derive(Debug, Clone, PartialEq)]
pub enum EventKind {
    Added(ParkingSpot),
    Updated(ParkingSpot),
    Removed(ParkingSpot),
    Assigned { spot: ParkingSpot, notice: Notice },
    ValidationFailed {
        number: String,
        fields: Vec<FieldError>,
        notice: Notice,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct InventoryEvent {
    pub kind: EventKind,
    pub occurred_at: NaiveDateTime,
}

impl InventoryEvent {
    pub fn now(kind: EventKind) -> Self {
        Self {
            kind,
            occurred_at: Utc::now().naive_utc(),
        }
    }

    /// Short name used in logs and by subscribers filtering on kind.
    pub fn name(&self) -> &'static str {
        match self.kind {
            EventKind::Added(_) => "added",
            EventKind::Updated(_) => "updated",
            EventKind::Removed(_) => "removed",
            EventKind::Assigned { .. } => "assigned",
            EventKind::ValidationFailed { .. } => "validation-failed",
        }
    }

    pub fn number(&self) -> &str {
        match &self.kind {
            EventKind::Added(spot)
            | EventKind::Updated(spot)
            | EventKind::Removed(spot)
            | EventKind::Assigned { spot, .. } => &spot.number,
            EventKind::ValidationFailed { number, .. } => number,
        }
    }

    pub fn notice(&self) -> Option<&Notice> {
        match &self.kind {
            EventKind::Assigned { notice, .. } | EventKind::ValidationFailed { notice, .. } => {
                Some(notice)
            }
            _ => None,
        }
    }
}

/// Receives store events synchronously, right after each commit.
pub trait InventoryObserver {
    fn notify(&mut self, event: &InventoryEvent);
}

/// Keeps every event it sees. Clones share the same buffer, so one handle
/// can be given to the store while another is read by the caller.
#[derive(Debug, Clone, Default)]
pub struct EventRecorder {
    events: Rc<RefCell<Vec<InventoryEvent>>>,
}

impl EventRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.events.borrow().iter().map(|e| e.name()).collect()
    }

    pub fn last(&self) -> Option<InventoryEvent> {
        self.events.borrow().last().cloned()
    }

    /// Takes everything recorded so far.
    pub fn drain(&self) -> Vec<InventoryEvent> {
        self.events.borrow_mut().drain(..).collect()
    }
}

impl InventoryObserver for EventRecorder {
    fn notify(&mut self, event: &InventoryEvent) {
        self.events.borrow_mut().push(event.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ValidationErrors;

    #[test]
    fn error_notices_use_expected_severity() {
        let missing = InventoryError::NotFound {
            number: "V-09".to_string(),
        };
        assert_eq!(Notice::from(&missing).severity, Severity::Warning);

        let dup = InventoryError::DuplicateNumber {
            number: "A-101".to_string(),
        };
        assert_eq!(Notice::from(&dup).severity, Severity::Danger);

        let mut errs = ValidationErrors::new();
        errs.push("owner", "is required");
        let notice = Notice::from(&InventoryError::Validation(errs));
        assert_eq!(notice.severity, Severity::Danger);
        assert!(notice.message.contains("owner"));
    }

    #[test]
    fn recorder_clones_share_buffer() {
        let recorder = EventRecorder::new();
        let mut handle = recorder.clone();
        let spot = crate::domain::spot::ParkingSpot::empty(
            "A-1",
            crate::domain::spot::Category::Resident,
        );
        handle.notify(&InventoryEvent::now(EventKind::Added(spot)));

        assert_eq!(recorder.names(), vec!["added"]);
        assert_eq!(recorder.drain().len(), 1);
        assert!(recorder.is_empty());
    }
}
