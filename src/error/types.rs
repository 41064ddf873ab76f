//! Error types for unitctl.

use thiserror::Error;

/// Main error type for systemctl operations.
///
/// The first four variants are the sentinel classifications derived from
/// systemctl's exit status and diagnostic text. Callers are expected to
/// branch on them with `matches!` or a `match`, e.g. treating
/// [`Error::DoesNotExist`] differently from [`Error::InsufficientPermissions`].
#[derive(Error, Debug)]
pub enum Error {
    /// The service manager reported that the unit is not installed.
    #[error("unit does not exist")]
    DoesNotExist,

    /// The invoking identity may not manage units in the requested scope.
    #[error("insufficient permissions for the requested scope")]
    InsufficientPermissions,

    /// The unit is masked and cannot be enabled, started, or activated.
    #[error("unit is masked")]
    Masked,

    /// The control bus for the requested scope could not be reached,
    /// e.g. asking for `--user` semantics where no session bus exists.
    #[error("failed to connect to the service manager bus")]
    BusFailure,

    /// systemctl exited nonzero with no recognized diagnostic pattern.
    /// Carries the raw combined output for debugging.
    #[error("systemctl failed: {output}")]
    Failed { output: String },

    /// The caller's deadline elapsed before systemctl completed.
    /// The subprocess has been terminated.
    #[error("operation timed out before systemctl completed")]
    Timeout,

    /// The systemctl binary could not be spawned at all.
    #[error("failed to execute systemctl: {0}")]
    Spawn(#[from] std::io::Error),

    /// A queried property exists but has no value set for this unit.
    #[error("property has no value set")]
    ValueNotSet,

    /// systemctl produced output this crate does not know how to interpret.
    #[error("unexpected systemctl output: {output}")]
    UnexpectedOutput { output: String },
}

impl From<tokio::time::error::Elapsed> for Error {
    fn from(_: tokio::time::error::Elapsed) -> Self {
        Error::Timeout
    }
}

/// Result type alias for systemctl operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elapsed_converts_to_timeout() {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()
            .unwrap();
        let err = rt.block_on(async {
            tokio::time::timeout(std::time::Duration::from_millis(1), std::future::pending::<()>())
                .await
                .unwrap_err()
        });
        assert!(matches!(Error::from(err), Error::Timeout));
    }

    #[test]
    fn test_display_preserves_raw_output() {
        let err = Error::Failed {
            output: "Job for nginx.service failed".to_string(),
        };
        assert!(err.to_string().contains("Job for nginx.service failed"));
    }
}
