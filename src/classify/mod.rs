//! Outcome classification for systemctl invocations.
//!
//! systemctl reports failure causes only as human-readable diagnostic
//! text, so the mapping to typed errors is substring matching over the
//! combined stderr+stdout. The rules live in one ordered table: earlier
//! rules win when several patterns are present in the same output.
//! Real-world precedent pinned by the tests below:
//! - a permission refusal in system scope mentions the unit too, and must
//!   classify as a permission error, not an existence error;
//! - a masked-unit report can carry "not found"-like phrasing and must
//!   classify as masked.
//!
//! Matching is ASCII-case-insensitive since phrasing casing varies across
//! systemd versions.

use crate::error::Error;
use crate::executor::ExecOutput;

/// What an ordered rule classifies a matching output as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Verdict {
    BusFailure,
    InsufficientPermissions,
    Masked,
    DoesNotExist,
}

impl Verdict {
    fn into_error(self) -> Error {
        match self {
            Verdict::BusFailure => Error::BusFailure,
            Verdict::InsufficientPermissions => Error::InsufficientPermissions,
            Verdict::Masked => Error::Masked,
            Verdict::DoesNotExist => Error::DoesNotExist,
        }
    }
}

/// Ordered classification rules. All needles are lowercase; the candidate
/// text is lowercased before matching.
///
/// Order matters: bus connectivity and permission refusals take precedence
/// over masked and existence reports, and masked over existence. Extend by
/// adding needles to the right rule, never by inlining checks at call
/// sites.
const RULES: &[(Verdict, &[&str])] = &[
    (
        Verdict::BusFailure,
        &[
            // "Failed to connect to bus: No such file or directory"
            // "Failed to connect to bus: Operation not permitted"
            "failed to connect to bus",
            "failed to connect to the bus",
        ],
    ),
    (
        Verdict::InsufficientPermissions,
        &[
            // "Failed to enable unit: Access denied"
            "access denied",
            "permission denied",
            // polkit prompts on a non-interactive invocation
            "interactive authentication required",
            "authentication is required",
            "not authorized",
        ],
    ),
    (
        Verdict::Masked,
        &[
            // "Failed to enable unit: Unit file nginx.service is masked."
            "is masked",
            "unit is masked",
        ],
    ),
    (
        Verdict::DoesNotExist,
        &[
            // "Failed to enable unit: Unit file nonexistant.service does not exist."
            "does not exist",
            // "Unit nonexistant.service could not be found."
            "could not be found",
            "not found",
            // "Failed to get unit file state for x.service: No such file or directory"
            "no such file or directory",
        ],
    ),
];

/// Apply the ordered rule table to diagnostic text.
///
/// Returns the sentinel for the first rule with a matching needle, or
/// `None` when nothing matches. Exit codes are not consulted here; use
/// [`classify`] for the full verdict.
pub fn match_rules(text: &str) -> Option<Error> {
    let text = text.to_ascii_lowercase();
    for (verdict, needles) in RULES {
        if needles.iter().any(|needle| text.contains(needle)) {
            return Some(verdict.into_error());
        }
    }
    None
}

/// Classify a finished invocation.
///
/// A zero exit is success outright: benign output can carry the needles
/// (a status text of "Config file not found", a unit description
/// mentioning "masked"), and systemctl signals every failure it diagnoses
/// with a nonzero exit. Only then are the pattern rules consulted, in
/// table order; an unmatched nonzero exit becomes [`Error::Failed`]
/// carrying the raw combined output.
pub fn classify(output: &ExecOutput) -> Result<(), Error> {
    if output.success() {
        return Ok(());
    }

    if let Some(err) = match_rules(&output.combined()) {
        return Err(err);
    }

    Err(Error::Failed {
        output: output.combined().trim().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(code: i32, stderr: &str) -> ExecOutput {
        ExecOutput {
            code: Some(code),
            stdout: String::new(),
            stderr: stderr.to_string(),
        }
    }

    // Recorded systemctl diagnostics, one per sentinel.

    #[test]
    fn test_clean_exit_is_success() {
        assert!(classify(&output(0, "")).is_ok());
    }

    #[test]
    fn test_zero_exit_is_success_even_with_needle_bearing_stdout() {
        // A queried status text may legitimately contain rule needles.
        let out = ExecOutput {
            code: Some(0),
            stdout: "StatusText=Config file not found\n".to_string(),
            stderr: String::new(),
        };
        assert!(classify(&out).is_ok());
    }

    #[test]
    fn test_zero_exit_is_success_even_with_needle_bearing_stderr() {
        let out = output(0, "Removed /etc/systemd/system/snap.lxd.activate.service.\n");
        assert!(classify(&out).is_ok());

        let out = output(0, "unit description mentions a unit that is masked elsewhere\n");
        assert!(classify(&out).is_ok());
    }

    #[test]
    fn test_unit_file_does_not_exist() {
        let out = output(
            1,
            "Failed to enable unit: Unit file nonexistant.service does not exist.\n",
        );
        assert!(matches!(classify(&out), Err(Error::DoesNotExist)));
    }

    #[test]
    fn test_unit_could_not_be_found() {
        let out = output(4, "Unit nonexistant.service could not be found.\n");
        assert!(matches!(classify(&out), Err(Error::DoesNotExist)));
    }

    #[test]
    fn test_unit_file_state_no_such_file() {
        let out = output(
            1,
            "Failed to get unit file state for nonexistant.service: No such file or directory\n",
        );
        assert!(matches!(classify(&out), Err(Error::DoesNotExist)));
    }

    #[test]
    fn test_access_denied() {
        let out = output(1, "Failed to enable unit: Access denied\n");
        assert!(matches!(classify(&out), Err(Error::InsufficientPermissions)));
    }

    #[test]
    fn test_interactive_authentication_required() {
        let out = output(
            1,
            "Failed to enable unit: Interactive authentication required.\n",
        );
        assert!(matches!(classify(&out), Err(Error::InsufficientPermissions)));
    }

    #[test]
    fn test_masked_unit() {
        let out = output(1, "Failed to enable unit: Unit file nginx.service is masked.\n");
        assert!(matches!(classify(&out), Err(Error::Masked)));
    }

    #[test]
    fn test_bus_failure() {
        let out = output(1, "Failed to connect to bus: No such file or directory\n");
        assert!(matches!(classify(&out), Err(Error::BusFailure)));
    }

    #[test]
    fn test_unrecognized_nonzero_exit_preserves_output() {
        let out = output(
            1,
            "Job for nginx.service failed because the control process exited with error code.\n",
        );
        match classify(&out) {
            Err(Error::Failed { output }) => assert!(output.contains("Job for nginx.service")),
            other => panic!("expected Failed, got {:?}", other),
        }
    }

    // Precedence when several patterns appear in one output.

    #[test]
    fn test_permission_takes_precedence_over_existence() {
        // Querying a nonexistent unit in system scope as a regular user
        // refuses before resolving the unit.
        let out = output(
            1,
            "Failed to enable unit: Access denied\n\
             Unit nonexistant.service could not be found.\n",
        );
        assert!(matches!(classify(&out), Err(Error::InsufficientPermissions)));
    }

    #[test]
    fn test_bus_failure_takes_precedence_over_permission() {
        let out = output(1, "Failed to connect to bus: Operation not permitted\n");
        assert!(matches!(classify(&out), Err(Error::BusFailure)));
    }

    #[test]
    fn test_masked_takes_precedence_over_existence() {
        let out = output(
            1,
            "Unit file nginx.service is masked.\n\
             Unit nginx.service could not be found.\n",
        );
        assert!(matches!(classify(&out), Err(Error::Masked)));
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let out = output(1, "failed to enable unit: ACCESS DENIED\n");
        assert!(matches!(classify(&out), Err(Error::InsufficientPermissions)));
    }

    #[test]
    fn test_state_words_on_stdout_are_inspected_too() {
        let out = ExecOutput {
            code: Some(1),
            stdout: "Unit snap.foo.service is masked.\n".to_string(),
            stderr: String::new(),
        };
        assert!(matches!(classify(&out), Err(Error::Masked)));
    }
}
