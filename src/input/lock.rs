//! Cursor-lock tracking.
//!
//! The host (browser pointer-lock API, or a native cursor grab) owns the
//! lock. The tracker only mirrors what the host reports and tells the host
//! when a click should request capture.

/// Whether the host currently captures the cursor for the rig's surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerLock {
    /// Cursor is free. Initial state.
    #[default]
    Unlocked,
    /// Cursor is captured and pointer movement arrives as relative deltas.
    Locked,
}

/// Side effects the rig asks the host to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostRequest {
    /// Begin cursor capture on the rig's target surface.
    RequestPointerLock,
}

/// Two-state lock mirror driven by host reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LockTracker {
    state: PointerLock,
}

impl LockTracker {
    /// Current mirrored state.
    #[must_use]
    pub fn state(self) -> PointerLock {
        self.state
    }

    /// Shorthand for `state() == PointerLock::Locked`.
    #[must_use]
    pub fn is_locked(self) -> bool {
        self.state == PointerLock::Locked
    }

    /// Host reported a lock change. `target_is_owner` is true when the
    /// rig's own surface is now the locked element; any other report means
    /// the rig is unlocked.
    ///
    /// Returns the new state.
    pub fn on_lock_change(&mut self, target_is_owner: bool) -> PointerLock {
        let next = if target_is_owner {
            PointerLock::Locked
        } else {
            PointerLock::Unlocked
        };
        if next != self.state {
            log::debug!("pointer lock {:?} -> {:?}", self.state, next);
        }
        self.state = next;
        next
    }

    /// Host reported that a capture request failed. Logged, state kept.
    pub fn on_lock_error(self) {
        log::error!("pointer lock request failed (state stays {:?})", self.state);
    }

    /// User clicked the target surface. Capture is requested only while
    /// unlocked; releasing is left to the host (e.g. Escape in browsers).
    #[must_use]
    pub fn on_click(self) -> Option<HostRequest> {
        match self.state {
            PointerLock::Unlocked => Some(HostRequest::RequestPointerLock),
            PointerLock::Locked => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_unlocked() {
        let tracker = LockTracker::default();
        assert_eq!(tracker.state(), PointerLock::Unlocked);
        assert!(!tracker.is_locked());
    }

    #[test]
    fn owner_report_locks_other_report_unlocks() {
        let mut tracker = LockTracker::default();
        assert_eq!(tracker.on_lock_change(true), PointerLock::Locked);
        assert!(tracker.is_locked());
        // Repeated report is stable
        assert_eq!(tracker.on_lock_change(true), PointerLock::Locked);
        assert_eq!(tracker.on_lock_change(false), PointerLock::Unlocked);
        assert_eq!(tracker.on_lock_change(false), PointerLock::Unlocked);
    }

    #[test]
    fn lock_error_keeps_state() {
        let mut tracker = LockTracker::default();
        tracker.on_lock_error();
        assert_eq!(tracker.state(), PointerLock::Unlocked);

        let _ = tracker.on_lock_change(true);
        tracker.on_lock_error();
        assert_eq!(tracker.state(), PointerLock::Locked);
    }

    #[test]
    fn click_requests_capture_only_when_unlocked() {
        let mut tracker = LockTracker::default();
        assert_eq!(tracker.on_click(), Some(HostRequest::RequestPointerLock));
        let _ = tracker.on_lock_change(true);
        assert_eq!(tracker.on_click(), None);
    }
}
