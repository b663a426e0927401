//! Request sequencing
//!
//! Each request purpose has its own monotonically increasing sequence. A
//! response is applied only while its id is still the latest issued for its
//! purpose, so a slow response can never overwrite the result of a newer
//! request.

/// What a request is for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestKind {
    Search,
    SeatPlan,
    Recommendations,
}

/// Tag carried by a request and echoed by its response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestId {
    pub kind: RequestKind,
    pub seq: u64,
}

/// Latest issued sequence per [`RequestKind`]
#[derive(Debug, Clone, Default)]
pub struct RequestTracker {
    search: u64,
    seat_plan: u64,
    recommendations: u64,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a new id, superseding every earlier id of the same kind
    pub fn issue(&mut self, kind: RequestKind) -> RequestId {
        let slot = self.slot_mut(kind);
        *slot += 1;
        RequestId { kind, seq: *slot }
    }

    /// Supersede every outstanding id of `kind` without issuing a new one
    pub fn invalidate(&mut self, kind: RequestKind) {
        *self.slot_mut(kind) += 1;
    }

    pub fn is_latest(&self, id: RequestId) -> bool {
        self.slot(id.kind) == id.seq
    }

    fn slot(&self, kind: RequestKind) -> u64 {
        match kind {
            RequestKind::Search => self.search,
            RequestKind::SeatPlan => self.seat_plan,
            RequestKind::Recommendations => self.recommendations,
        }
    }

    fn slot_mut(&mut self, kind: RequestKind) -> &mut u64 {
        match kind {
            RequestKind::Search => &mut self.search,
            RequestKind::SeatPlan => &mut self.seat_plan,
            RequestKind::Recommendations => &mut self.recommendations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_latest_is_current() {
        let mut tracker = RequestTracker::new();
        let first = tracker.issue(RequestKind::Recommendations);
        let second = tracker.issue(RequestKind::Recommendations);

        assert!(!tracker.is_latest(first));
        assert!(tracker.is_latest(second));
    }

    #[test]
    fn test_kinds_are_independent() {
        let mut tracker = RequestTracker::new();
        let search = tracker.issue(RequestKind::Search);
        let plan = tracker.issue(RequestKind::SeatPlan);
        tracker.issue(RequestKind::Recommendations);

        assert!(tracker.is_latest(search));
        assert!(tracker.is_latest(plan));
    }

    #[test]
    fn test_invalidate_drops_outstanding() {
        let mut tracker = RequestTracker::new();
        let plan = tracker.issue(RequestKind::SeatPlan);
        tracker.invalidate(RequestKind::SeatPlan);
        assert!(!tracker.is_latest(plan));

        let next = tracker.issue(RequestKind::SeatPlan);
        assert!(tracker.is_latest(next));
        assert!(next.seq > plan.seq);
    }
}
