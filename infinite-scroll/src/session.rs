/// The inputs the loading session compares across a content update.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContentProps {
    pub has_more: Option<bool>,
    pub is_infinite_loading: bool,
    pub item_count: usize,
}

/// Tracks whether a load request is outstanding.
///
/// A session starts when the edge detector emits a load request and ends on the first content
/// update that satisfies [`LoadingSession::should_clear`]. At most one session is active.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadingSession {
    active: bool,
}

impl LoadingSession {
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Starts a session. Returns `false` (and changes nothing) if one is already active.
    pub fn begin(&mut self) -> bool {
        if self.active {
            return false;
        }
        self.active = true;
        true
    }

    pub fn clear(&mut self) {
        self.active = false;
    }

    /// Whether the update from `prev` to `next` ends the active session.
    ///
    /// Two caller conventions are supported and either one ends the session:
    /// - the caller drives `is_infinite_loading` and flips it from `true` to `false`;
    /// - the caller only drives `has_more` plus the item count, and the count changed while
    ///   `has_more` was or is `Some(true)`.
    pub fn should_clear(&self, prev: &ContentProps, next: &ContentProps) -> bool {
        if !self.active {
            return false;
        }
        let loading_finished = prev.is_infinite_loading && !next.is_infinite_loading;
        let had_more = prev.has_more == Some(true) || next.has_more == Some(true);
        let count_changed = prev.item_count != next.item_count;
        loading_finished || (had_more && count_changed)
    }
}
