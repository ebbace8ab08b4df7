//! Request-generation tokens for fetches that cannot be cancelled.
//!
//! Each request takes a ticket when it is issued. When the response arrives it
//! is applied only if no newer request of the same kind was issued meanwhile.

/// Proof that a request was issued at a given generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

#[derive(Debug, Default, Clone)]
pub struct FetchGeneration {
    latest: u64,
}

impl FetchGeneration {
    #[must_use]
    pub const fn new() -> Self {
        Self { latest: 0 }
    }

    /// Start a new request, superseding every earlier ticket.
    pub const fn issue(&mut self) -> FetchTicket {
        self.latest = self.latest.wrapping_add(1);
        FetchTicket(self.latest)
    }

    /// Supersede in-flight requests without starting a new one.
    pub const fn invalidate(&mut self) {
        self.latest = self.latest.wrapping_add(1);
    }

    #[must_use]
    pub const fn is_current(&self, ticket: FetchTicket) -> bool {
        ticket.0 == self.latest
    }
}
