//! Per-panel request sequencing
//!
//! Each panel issues tickets from a monotonic counter. A response is only
//! rendered if it answers the most recently issued ticket, so a slow reply
//! to an older request can never overwrite a newer one.

use tracing::debug;

/// What a panel currently shows
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PanelView<T> {
    #[default]
    Idle,
    Loading,
    Ready(T),
    /// Fixed user-facing failure message
    Failed(String),
}

impl<T> PanelView<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, PanelView::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            PanelView::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&str> {
        match self {
            PanelView::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Proof that a request was issued; hand it back to [`Panel::finish`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

impl Ticket {
    pub fn seq(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Panel<T> {
    name: &'static str,
    seq: u64,
    view: PanelView<T>,
}

impl<T> Panel<T> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            seq: 0,
            view: PanelView::Idle,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn view(&self) -> &PanelView<T> {
        &self.view
    }

    /// Latest issued sequence number (0 before the first request)
    pub fn seq(&self) -> u64 {
        self.seq
    }

    /// Issue a new ticket and show the loading state.
    pub fn begin(&mut self) -> Ticket {
        self.seq += 1;
        self.view = PanelView::Loading;
        Ticket(self.seq)
    }

    /// Apply a result if `ticket` is still the latest; returns whether it was applied.
    pub fn finish(&mut self, ticket: Ticket, result: Result<T, String>) -> bool {
        if ticket.0 != self.seq {
            debug!(
                panel = self.name,
                stale = ticket.0,
                latest = self.seq,
                "Discarding stale response"
            );
            return false;
        }
        self.view = match result {
            Ok(value) => PanelView::Ready(value),
            Err(message) => PanelView::Failed(message),
        };
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_then_finish() {
        let mut panel: Panel<u32> = Panel::new("test");
        assert_eq!(panel.view(), &PanelView::Idle);

        let ticket = panel.begin();
        assert!(panel.view().is_loading());
        assert!(panel.finish(ticket, Ok(7)));
        assert_eq!(panel.view().ready(), Some(&7));
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut panel: Panel<&str> = Panel::new("weather");
        let first = panel.begin();
        let second = panel.begin();

        assert!(panel.finish(second, Ok("Delhi")));
        assert!(!panel.finish(first, Ok("Agra")));
        assert_eq!(panel.view().ready(), Some(&"Delhi"));
    }

    #[test]
    fn test_stale_failure_does_not_replace_success() {
        let mut panel: Panel<&str> = Panel::new("mandi");
        let first = panel.begin();
        let second = panel.begin();

        assert!(panel.finish(second, Ok("prices")));
        assert!(!panel.finish(first, Err("Could not load prices".to_string())));
        assert!(panel.view().failure().is_none());
    }

    #[test]
    fn test_older_pending_request_keeps_loading() {
        let mut panel: Panel<u8> = Panel::new("mandi");
        let first = panel.begin();
        let _second = panel.begin();

        assert!(!panel.finish(first, Ok(1)));
        assert!(panel.view().is_loading());
        assert_eq!(panel.seq(), 2);
    }
}
