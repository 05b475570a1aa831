/// Monotonic counter guarding against out-of-order responses.
///
/// Every request takes a token from `issue()`; its response may only be
/// applied while `is_latest(token)` holds, so a slow earlier response can
/// never overwrite the result of a later request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestTicket {
    latest: u64,
}

impl RequestTicket {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new request and returns its token
    pub fn issue(&mut self) -> u64 {
        self.latest = self.latest.wrapping_add(1);
        self.latest
    }

    pub fn current(&self) -> u64 {
        self.latest
    }

    pub fn is_latest(&self, token: u64) -> bool {
        token == self.latest
    }
}
