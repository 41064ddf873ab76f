//! unitctl
//!
//! A thin typed wrapper around the `systemctl` command-line tool. Each
//! operation builds one command line, executes it asynchronously, and
//! classifies the exit status and diagnostic text into a closed set of
//! sentinel errors ([`Error::DoesNotExist`], [`Error::InsufficientPermissions`],
//! [`Error::Masked`], [`Error::BusFailure`]) instead of leaving callers to
//! parse shell output.
//!
//! Cancellation: operations are futures; wrap them in
//! `tokio::time::timeout` (or race them in a `select!`) and the underlying
//! subprocess is killed when the future is dropped. The resulting
//! `Elapsed` converts into [`Error::Timeout`], which is distinct from every
//! classified sentinel.
//!
//! ```no_run
//! use std::time::Duration;
//! use unitctl::{enable, Error, Options};
//!
//! async fn enable_nginx() -> Result<(), Error> {
//!     let fut = enable("nginx", Options::system());
//!     match tokio::time::timeout(Duration::from_secs(10), fut).await? {
//!         Ok(()) => Ok(()),
//!         Err(Error::Masked) => Err(Error::Masked), // unmask first
//!         Err(err) => Err(err),
//!     }
//! }
//! ```
//!
//! This crate owns no state: unit enablement and mask flags live in the
//! external service manager, and mutating calls are neither transactional
//! nor reversible here.

pub mod classify;
pub mod error;
pub mod executor;
pub mod options;
pub mod properties;
pub mod unit;

pub use error::{Error, Result};
pub use options::Options;
pub use properties::Property;
pub use unit::{
    daemon_reload, disable, enable, get_memory_usage, get_num_restarts, get_pid, get_start_time,
    is_active, is_enabled, is_failed, list_units, mask, reload, reload_or_restart, restart, show,
    start, status, stop, unmask, ListedUnit,
};
