use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies one aggregation request. Tokens are strictly increasing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RequestToken(u64);

impl fmt::Display for RequestToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Remembers the most recently issued request so stale completions can be dropped.
#[derive(Debug, Default)]
pub struct RequestTracker {
    issued: u64,
    latest: Option<RequestToken>,
}

impl RequestTracker {
    /// Issue a new token; every earlier token stops being current.
    pub fn issue(&mut self) -> RequestToken {
        self.issued += 1;
        let token = RequestToken(self.issued);
        self.latest = Some(token);
        token
    }

    #[cfg_attr(not(feature = "tui"), allow(dead_code))]
    pub fn latest(&self) -> Option<RequestToken> {
        self.latest
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        self.latest == Some(token)
    }

    /// Forget the current request without issuing a new one (e.g. leaving the results view).
    pub fn clear(&mut self) {
        self.latest = None;
    }
}
