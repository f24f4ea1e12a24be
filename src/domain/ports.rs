use crate::domain::model::{AgeBreakdown, CalendarDate};

/// One entry the host may hand to its append-only activity store after a
/// successful computation. The engine builds the payload; storage is entirely
/// the collaborator's concern.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ActivityRecord {
    pub action: String,
    pub input_date: CalendarDate,
    pub output_age: AgeBreakdown,
    pub timestamp: String,
}

pub trait ActivitySink {
    fn record(&self, entry: &ActivityRecord);
}
