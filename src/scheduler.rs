//! Reload coalescing state machine.
//!
//! At most one fetch is outstanding at any time. A reload request that
//! arrives while one is in flight is folded into a single pending intent,
//! replayed exactly once when the outstanding request settles. The machine
//! is pure; the window layer issues the actual fetches when told to.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchState {
    Idle,
    InFlight,
    InFlightWithPending,
}

#[derive(Debug)]
pub struct ReloadScheduler {
    state: FetchState,
}

impl ReloadScheduler {
    pub fn new() -> Self {
        Self {
            state: FetchState::Idle,
        }
    }

    pub fn state(&self) -> FetchState {
        self.state
    }

    /// Ask for a reload. Returns true when the caller should issue a fetch
    /// now; while a request is outstanding the ask collapses into the
    /// pending intent instead.
    #[must_use]
    pub fn request_reload(&mut self) -> bool {
        match self.state {
            FetchState::Idle => {
                self.state = FetchState::InFlight;
                true
            }
            FetchState::InFlight => {
                self.state = FetchState::InFlightWithPending;
                false
            }
            FetchState::InFlightWithPending => false,
        }
    }

    /// Settle the outstanding request after its outcome (success or failure)
    /// has been handled. Returns true when a pending intent should be
    /// replayed as a new fetch immediately; the machine stays `InFlight` for
    /// that replay.
    #[must_use]
    pub fn finish(&mut self) -> bool {
        match self.state {
            FetchState::InFlightWithPending => {
                self.state = FetchState::InFlight;
                true
            }
            _ => {
                self.state = FetchState::Idle;
                false
            }
        }
    }
}

impl Default for ReloadScheduler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_request_issues_fetch() {
        let mut scheduler = ReloadScheduler::new();
        assert!(scheduler.request_reload());
        assert_eq!(scheduler.state(), FetchState::InFlight);
    }

    #[test]
    fn test_requests_while_in_flight_coalesce() {
        let mut scheduler = ReloadScheduler::new();
        assert!(scheduler.request_reload());
        // Any number of further requests collapse into one pending intent.
        for _ in 0..10 {
            assert!(!scheduler.request_reload());
        }
        assert_eq!(scheduler.state(), FetchState::InFlightWithPending);
        assert!(scheduler.finish());
        assert_eq!(scheduler.state(), FetchState::InFlight);
        // The replayed fetch settles with nothing pending.
        assert!(!scheduler.finish());
        assert_eq!(scheduler.state(), FetchState::Idle);
    }

    #[test]
    fn test_two_ticks_before_completion_issue_two_fetches() {
        let mut scheduler = ReloadScheduler::new();
        let mut issued = 0;
        // Two timer ticks fire before the first fetch completes.
        if scheduler.request_reload() {
            issued += 1;
        }
        if scheduler.request_reload() {
            issued += 1;
        }
        assert_eq!(issued, 1);
        if scheduler.finish() {
            issued += 1;
        }
        if scheduler.finish() {
            issued += 1;
        }
        assert_eq!(issued, 2);
        assert_eq!(scheduler.state(), FetchState::Idle);
    }

    #[test]
    fn test_finish_without_pending_goes_idle() {
        let mut scheduler = ReloadScheduler::new();
        assert!(scheduler.request_reload());
        assert!(!scheduler.finish());
        assert_eq!(scheduler.state(), FetchState::Idle);
        // The next tick starts a fresh request.
        assert!(scheduler.request_reload());
    }
}
