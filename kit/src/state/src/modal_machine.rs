//! Open / close lifecycle of a single modal slot.
//!
//! `Closed --open--> Open --close--> Closing --ticket--> Closed`. Opening while
//! `Closing` goes straight back to `Open` and invalidates the outstanding ticket.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalPhase {
    #[default]
    Closed,
    Open,
    Closing,
}

/// Identifies one close transition. Only the latest ticket can complete a close.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CloseTicket(u64);

#[derive(Clone, Debug)]
pub struct ModalMachine<C> {
    phase: ModalPhase,
    content: Option<C>,
    generation: u64,
    revision: u64,
}

impl<C> Default for ModalMachine<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> ModalMachine<C> {
    pub fn new() -> Self {
        Self {
            phase: ModalPhase::Closed,
            content: None,
            generation: 0,
            revision: 0,
        }
    }

    pub fn phase(&self) -> ModalPhase {
        self.phase
    }

    /// True while anything is on screen, including the closing window.
    pub fn is_open(&self) -> bool {
        self.phase != ModalPhase::Closed
    }

    pub fn is_closing(&self) -> bool {
        self.phase == ModalPhase::Closing
    }

    pub fn content(&self) -> Option<&C> {
        self.content.as_ref()
    }

    /// Bumped on every `open`. Closing leaves it alone, so it only changes
    /// when the displayed content is replaced.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Replaces the content and enters `Open`. Returns `true` if this
    /// interrupted a pending close.
    pub fn open(&mut self, content: C) -> bool {
        let interrupted = self.phase == ModalPhase::Closing;
        if interrupted {
            self.generation += 1;
        }
        self.content = Some(content);
        self.revision += 1;
        self.phase = ModalPhase::Open;
        interrupted
    }

    /// Starts a close from `Open`. Redundant closes yield `None` so only one
    /// completion is ever outstanding.
    pub fn begin_close(&mut self) -> Option<CloseTicket> {
        match self.phase {
            ModalPhase::Open => {
                self.generation += 1;
                self.phase = ModalPhase::Closing;
                Some(CloseTicket(self.generation))
            }
            ModalPhase::Closed | ModalPhase::Closing => None,
        }
    }

    pub fn pending_close(&self) -> Option<CloseTicket> {
        self.is_closing().then_some(CloseTicket(self.generation))
    }

    /// Completes the close identified by `ticket`. Stale tickets are ignored.
    pub fn finish_close(&mut self, ticket: CloseTicket) -> bool {
        if self.phase != ModalPhase::Closing || ticket.0 != self.generation {
            return false;
        }
        self.phase = ModalPhase::Closed;
        self.content = None;
        true
    }
}
