//! Editing session: one active ring, one converter, explicit subscriptions
//!
//! The session replaces ambient map/polygon globals with owned state. The
//! UI layer pushes each edited ring through [`EditorSession::apply_edit`];
//! registered observers receive the outcome of every edit. A failed
//! computation degrades the area display only - the last good report is
//! kept and the session stays usable.

use crate::domain::Ring;
use crate::geometry::{AreaConverter, AreaReport};

/// Outcome of one edit, delivered to every subscriber
#[derive(Debug, Clone)]
pub enum SessionEvent {
    /// The ring produced a fresh report
    Report(AreaReport),
    /// Computation failed; the message is user-visible
    Degraded {
        message: String,
        last_report: Option<AreaReport>,
    },
}

type EditObserver = Box<dyn FnMut(&SessionEvent)>;

/// Owns the active ring and the converter for one editing surface
pub struct EditorSession {
    ring: Ring,
    converter: AreaConverter,
    last_report: Option<AreaReport>,
    observers: Vec<EditObserver>,
}

impl EditorSession {
    pub fn new(initial_ring: Ring, converter: AreaConverter) -> Self {
        Self {
            ring: initial_ring,
            converter,
            last_report: None,
            observers: Vec::new(),
        }
    }

    /// Register an observer invoked with the outcome of every edit
    pub fn subscribe(&mut self, observer: impl FnMut(&SessionEvent) + 'static) {
        self.observers.push(Box::new(observer));
    }

    pub fn ring(&self) -> &Ring {
        &self.ring
    }

    /// Most recent successful report, if any
    pub fn last_report(&self) -> Option<&AreaReport> {
        self.last_report.as_ref()
    }

    /// Replace the active ring and recompute
    pub fn apply_edit(&mut self, ring: Ring) -> SessionEvent {
        self.ring = ring;
        self.refresh()
    }

    /// Recompute the report for the current ring and notify observers
    pub fn refresh(&mut self) -> SessionEvent {
        let event = match self.converter.compute_report(&self.ring) {
            Ok(report) => {
                self.last_report = Some(report);
                SessionEvent::Report(report)
            }
            Err(err) => SessionEvent::Degraded {
                message: err.to_string(),
                last_report: self.last_report,
            },
        };

        for observer in &mut self.observers {
            observer(&event);
        }

        event
    }
}
