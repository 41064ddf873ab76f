//! Unit lifecycle operations.
//!
//! Each operation issues exactly one systemctl invocation in the scope
//! selected by [`Options`], awaits it, and classifies the outcome through
//! the ordered rule table in [`crate::classify`]. Unit names are passed
//! through verbatim; the service manager decides validity.
//!
//! Every mutating call changes durable state owned by the service manager.
//! Nothing here is transactional: undoing an `enable` means calling
//! [`disable`]. Concurrent calls are independent; serialization of
//! conflicting mutations is the service manager's concern.

mod list;

pub use list::ListedUnit;

use chrono::{DateTime, Local, NaiveDateTime, TimeZone};
use tracing::debug;

use crate::classify::{classify, match_rules};
use crate::error::{Error, Result};
use crate::executor::{ExecOutput, SystemctlCommand};
use crate::options::Options;
use crate::properties::Property;

/// Enable the unit so the service manager starts it at boot (or session
/// start in user scope).
pub async fn enable(unit: &str, options: Options) -> Result<()> {
    debug!(unit = %unit, user_mode = options.user_mode, "enabling unit");
    let out = SystemctlCommand::new("enable", options).unit(unit).run().await?;
    classify(&out)
}

/// Remove the unit's enablement.
pub async fn disable(unit: &str, options: Options) -> Result<()> {
    debug!(unit = %unit, user_mode = options.user_mode, "disabling unit");
    let out = SystemctlCommand::new("disable", options).unit(unit).run().await?;
    classify(&out)
}

/// Mask the unit, forbidding it from being enabled or started until
/// unmasked. Masking an already-masked unit succeeds.
pub async fn mask(unit: &str, options: Options) -> Result<()> {
    debug!(unit = %unit, user_mode = options.user_mode, "masking unit");
    let out = SystemctlCommand::new("mask", options).unit(unit).run().await?;
    classify(&out)
}

/// Clear the unit's masked state. Unmasking an unmasked unit succeeds.
pub async fn unmask(unit: &str, options: Options) -> Result<()> {
    debug!(unit = %unit, user_mode = options.user_mode, "unmasking unit");
    let out = SystemctlCommand::new("unmask", options).unit(unit).run().await?;
    classify(&out)
}

/// Start the unit now.
pub async fn start(unit: &str, options: Options) -> Result<()> {
    debug!(unit = %unit, user_mode = options.user_mode, "starting unit");
    let out = SystemctlCommand::new("start", options).unit(unit).run().await?;
    classify(&out)
}

/// Stop the unit now.
pub async fn stop(unit: &str, options: Options) -> Result<()> {
    debug!(unit = %unit, user_mode = options.user_mode, "stopping unit");
    let out = SystemctlCommand::new("stop", options).unit(unit).run().await?;
    classify(&out)
}

/// Stop and then start the unit.
pub async fn restart(unit: &str, options: Options) -> Result<()> {
    debug!(unit = %unit, user_mode = options.user_mode, "restarting unit");
    let out = SystemctlCommand::new("restart", options).unit(unit).run().await?;
    classify(&out)
}

/// Ask the unit to reload its configuration without restarting.
pub async fn reload(unit: &str, options: Options) -> Result<()> {
    debug!(unit = %unit, user_mode = options.user_mode, "reloading unit");
    let out = SystemctlCommand::new("reload", options).unit(unit).run().await?;
    classify(&out)
}

/// Reload the unit if it supports it, otherwise restart it.
pub async fn reload_or_restart(unit: &str, options: Options) -> Result<()> {
    debug!(unit = %unit, user_mode = options.user_mode, "reload-or-restarting unit");
    let out = SystemctlCommand::new("reload-or-restart", options)
        .unit(unit)
        .run()
        .await?;
    classify(&out)
}

/// Reload the service manager's own configuration (unit files).
pub async fn daemon_reload(options: Options) -> Result<()> {
    debug!(user_mode = options.user_mode, "reloading service manager configuration");
    let out = SystemctlCommand::new("daemon-reload", options).run().await?;
    classify(&out)
}

fn active_from_state(state: &str) -> Option<bool> {
    match state {
        "active" | "activating" | "reloading" => Some(true),
        "inactive" | "failed" | "deactivating" => Some(false),
        _ => None,
    }
}

/// Whether the unit is currently active.
///
/// `inactive` and `failed` are `Ok(false)`, not errors; the sentinel
/// classifications still apply when the query itself is refused.
pub async fn is_active(unit: &str, options: Options) -> Result<bool> {
    debug!(unit = %unit, user_mode = options.user_mode, "querying active state");
    let out = SystemctlCommand::new("is-active", options).unit(unit).run().await?;
    match active_from_state(out.stdout.trim()) {
        Some(active) => Ok(active),
        None => {
            classify(&out)?;
            Err(Error::UnexpectedOutput {
                output: out.stdout.trim().to_string(),
            })
        }
    }
}

fn enablement_from_state(state: &str) -> Option<Result<bool>> {
    match state {
        // States under which the service manager will activate the unit
        // on its own.
        "enabled" | "enabled-runtime" | "alias" | "static" | "indirect" | "generated"
        | "transient" | "linked" | "linked-runtime" => Some(Ok(true)),
        "disabled" => Some(Ok(false)),
        "masked" | "masked-runtime" => Some(Err(Error::Masked)),
        _ => None,
    }
}

/// Whether the unit is enabled.
///
/// Any enablement state the manager acts on by itself (`enabled`,
/// `static`, `linked`, ...) is `Ok(true)`; `disabled` is `Ok(false)`;
/// a masked unit reports [`Error::Masked`].
pub async fn is_enabled(unit: &str, options: Options) -> Result<bool> {
    debug!(unit = %unit, user_mode = options.user_mode, "querying enablement state");
    let out = SystemctlCommand::new("is-enabled", options).unit(unit).run().await?;
    match enablement_from_state(out.stdout.trim()) {
        Some(verdict) => verdict,
        None => {
            classify(&out)?;
            Err(Error::UnexpectedOutput {
                output: out.stdout.trim().to_string(),
            })
        }
    }
}

/// Whether the unit is in the failed state.
pub async fn is_failed(unit: &str, options: Options) -> Result<bool> {
    debug!(unit = %unit, user_mode = options.user_mode, "querying failed state");
    let out = SystemctlCommand::new("is-failed", options).unit(unit).run().await?;
    let state = out.stdout.trim();
    if state == "failed" {
        Ok(true)
    } else if active_from_state(state).is_some() {
        Ok(false)
    } else {
        classify(&out)?;
        Err(Error::UnexpectedOutput {
            output: state.to_string(),
        })
    }
}

fn status_outcome(out: ExecOutput) -> Result<String> {
    // The status report on stdout embeds recent journal lines from the
    // unit itself, which may contain any of the rule needles; only
    // systemctl's own diagnostics on stderr are classified here.
    if let Some(err) = match_rules(&out.stderr) {
        return Err(err);
    }
    match out.code {
        Some(0..=4) => Ok(out.stdout),
        _ => Err(Error::Failed {
            output: out.combined().trim().to_string(),
        }),
    }
}

/// Human-readable status text for the unit.
///
/// `systemctl status` exits 0 through 4 depending on the unit's state
/// while still printing a report, so those exits return the text. Pattern
/// classification still applies to the tool's stderr diagnostics, e.g. an
/// unknown unit reports [`Error::DoesNotExist`].
pub async fn status(unit: &str, options: Options) -> Result<String> {
    debug!(unit = %unit, user_mode = options.user_mode, "querying unit status");
    let out = SystemctlCommand::new("status", options).unit(unit).run().await?;
    status_outcome(out)
}

fn property_value(property: Property, line: &str) -> Option<String> {
    let (key, value) = line.split_once('=')?;
    (key == property.as_str()).then(|| value.to_string())
}

/// Current value of one recognized property for the unit.
///
/// The value is the text after `=` in systemctl's `KEY=VALUE` line; an
/// unset property yields an empty string.
pub async fn show(unit: &str, property: Property, options: Options) -> Result<String> {
    debug!(
        unit = %unit,
        property = %property,
        user_mode = options.user_mode,
        "querying unit property"
    );
    let out = SystemctlCommand::new("show", options)
        .unit(unit)
        .arg(&format!("--property={}", property))
        .run()
        .await?;
    classify(&out)?;
    property_value(property, out.stdout.trim()).ok_or_else(|| Error::UnexpectedOutput {
        output: out.stdout.trim().to_string(),
    })
}

fn parse_timestamp(value: &str) -> Result<DateTime<Local>> {
    // "Tue 2024-01-02 10:11:12 UTC": weekday and timezone tokens are
    // informational, the wall-clock fields are the manager's local time.
    let mut fields = value.split_whitespace();
    let _weekday = fields.next();
    let (date, time) = match (fields.next(), fields.next()) {
        (Some(date), Some(time)) => (date, time),
        _ => {
            return Err(Error::UnexpectedOutput {
                output: value.to_string(),
            })
        }
    };
    let naive = NaiveDateTime::parse_from_str(&format!("{date} {time}"), "%Y-%m-%d %H:%M:%S")
        .map_err(|_| Error::UnexpectedOutput {
            output: value.to_string(),
        })?;
    Local
        .from_local_datetime(&naive)
        .single()
        .ok_or_else(|| Error::UnexpectedOutput {
            output: value.to_string(),
        })
}

/// When the unit's main process last started.
///
/// [`Error::ValueNotSet`] when the unit has never run.
pub async fn get_start_time(unit: &str, options: Options) -> Result<DateTime<Local>> {
    let value = show(unit, Property::ExecMainStartTimestamp, options).await?;
    if value.is_empty() || value == "n/a" {
        return Err(Error::ValueNotSet);
    }
    parse_timestamp(&value)
}

/// How many times the service restarted since it was last enabled.
pub async fn get_num_restarts(unit: &str, options: Options) -> Result<u32> {
    let value = show(unit, Property::NRestarts, options).await?;
    value.parse().map_err(|_| Error::UnexpectedOutput { output: value })
}

/// Current memory usage of the unit's cgroup, in bytes.
///
/// [`Error::ValueNotSet`] when accounting is off or the unit is not
/// running.
pub async fn get_memory_usage(unit: &str, options: Options) -> Result<u64> {
    let value = show(unit, Property::MemoryCurrent, options).await?;
    if value.is_empty() || value == "[not set]" {
        return Err(Error::ValueNotSet);
    }
    value.parse().map_err(|_| Error::UnexpectedOutput { output: value })
}

/// PID of the unit's main process. Zero when the unit is not running.
pub async fn get_pid(unit: &str, options: Options) -> Result<u32> {
    let value = show(unit, Property::MainPID, options).await?;
    value.parse().map_err(|_| Error::UnexpectedOutput { output: value })
}

/// All units the service manager currently has in memory.
pub async fn list_units(options: Options) -> Result<Vec<ListedUnit>> {
    debug!(user_mode = options.user_mode, "listing units");
    let out = SystemctlCommand::new("list-units", options)
        .arg("--all")
        .arg("--plain")
        .arg("--full")
        .arg("--no-legend")
        .run()
        .await?;
    classify(&out)?;
    Ok(list::parse_list_output(&out.stdout))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_state_words() {
        assert_eq!(active_from_state("active"), Some(true));
        assert_eq!(active_from_state("activating"), Some(true));
        assert_eq!(active_from_state("inactive"), Some(false));
        assert_eq!(active_from_state("failed"), Some(false));
        assert_eq!(active_from_state("bananas"), None);
    }

    #[test]
    fn test_enablement_state_words() {
        assert!(matches!(enablement_from_state("enabled"), Some(Ok(true))));
        assert!(matches!(enablement_from_state("static"), Some(Ok(true))));
        assert!(matches!(enablement_from_state("linked-runtime"), Some(Ok(true))));
        assert!(matches!(enablement_from_state("disabled"), Some(Ok(false))));
        assert!(matches!(enablement_from_state("masked"), Some(Err(Error::Masked))));
        assert!(matches!(enablement_from_state("masked-runtime"), Some(Err(Error::Masked))));
        assert!(enablement_from_state("what").is_none());
    }

    #[test]
    fn test_status_ignores_needles_in_journal_lines_on_stdout() {
        // The report quotes the unit's own log output, which can mention
        // anything.
        let out = ExecOutput {
            code: Some(3),
            stdout: "\
x nginx.service - A high performance web server
     Loaded: loaded (/lib/systemd/system/nginx.service; enabled)
     Active: inactive (dead)

Jan 02 10:11:12 host nginx[123]: Permission denied while reading upstream
Jan 02 10:11:13 host nginx[123]: Failed to connect to bus backend at 10.0.0.1
"
            .to_string(),
            stderr: String::new(),
        };
        let text = status_outcome(out).unwrap();
        assert!(text.contains("Active: inactive"));
    }

    #[test]
    fn test_status_classifies_stderr_diagnostics() {
        let out = ExecOutput {
            code: Some(4),
            stdout: String::new(),
            stderr: "Unit nonexistant.service could not be found.\n".to_string(),
        };
        assert!(matches!(status_outcome(out), Err(Error::DoesNotExist)));
    }

    #[test]
    fn test_status_unrecognized_exit_wraps_output() {
        let out = ExecOutput {
            code: Some(64),
            stdout: String::new(),
            stderr: "something else entirely\n".to_string(),
        };
        assert!(matches!(status_outcome(out), Err(Error::Failed { .. })));
    }

    #[test]
    fn test_property_value_strips_key() {
        let line = "MainPID=1234";
        assert_eq!(property_value(Property::MainPID, line).unwrap(), "1234");
    }

    #[test]
    fn test_property_value_allows_equals_in_value() {
        let line = "Environment=FOO=bar BAZ=qux";
        assert_eq!(
            property_value(Property::Environment, line).unwrap(),
            "FOO=bar BAZ=qux"
        );
    }

    #[test]
    fn test_property_value_rejects_mismatched_key() {
        assert!(property_value(Property::MainPID, "ControlPID=9").is_none());
        assert!(property_value(Property::MainPID, "garbage").is_none());
    }

    #[test]
    fn test_parse_timestamp() {
        let parsed = parse_timestamp("Tue 2024-01-02 10:11:12 UTC").unwrap();
        assert_eq!(
            parsed.naive_local(),
            NaiveDateTime::parse_from_str("2024-01-02 10:11:12", "%Y-%m-%d %H:%M:%S").unwrap()
        );
    }

    #[test]
    fn test_parse_timestamp_rejects_garbage() {
        assert!(matches!(
            parse_timestamp("n/a"),
            Err(Error::UnexpectedOutput { .. })
        ));
        assert!(matches!(
            parse_timestamp("Tue 2024-13-99 10:11:12 UTC"),
            Err(Error::UnexpectedOutput { .. })
        ));
    }
}
