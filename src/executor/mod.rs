//! Subprocess execution for systemctl.
//!
//! Handles safe spawning of the external tool and output capture.

mod subprocess;

pub use subprocess::{ExecOutput, SystemctlCommand, SYSTEMCTL_BIN};
