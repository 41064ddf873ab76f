//! Per-call options for systemctl invocations.

use serde::{Deserialize, Serialize};

/// Options controlling how a single systemctl invocation is issued.
///
/// Constructed fresh per call and copied into the command builder;
/// nothing in this crate retains it across calls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Options {
    /// Address the invoking user's session manager (`--user`) instead of
    /// the host-wide system manager (`--system`).
    pub user_mode: bool,
}

impl Options {
    /// Options targeting the system service manager.
    pub fn system() -> Self {
        Self { user_mode: false }
    }

    /// Options targeting the per-user session manager.
    pub fn user() -> Self {
        Self { user_mode: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_system_scope() {
        assert_eq!(Options::default(), Options::system());
        assert!(!Options::default().user_mode);
    }

    #[test]
    fn test_user_scope() {
        assert!(Options::user().user_mode);
    }
}
