//! Parsing for `systemctl list-units` output.

use serde::{Deserialize, Serialize};

/// One row of `systemctl list-units --all --plain --full --no-legend`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListedUnit {
    /// Unit name, e.g. `nginx.service`.
    pub name: String,
    /// Whether the unit file was loaded (`loaded`, `not-found`, `masked`).
    pub load_state: String,
    /// High-level activation state (`active`, `inactive`, `failed`).
    pub active_state: String,
    /// Low-level state (`running`, `dead`, `exited`, ...).
    pub sub_state: String,
    /// Free-text description from the unit file.
    pub description: String,
}

/// Parse the plain, legend-free table into rows.
///
/// Columns are whitespace-separated with the description taking the
/// remainder of the line. Lines with fewer than four columns are skipped.
pub(crate) fn parse_list_output(stdout: &str) -> Vec<ListedUnit> {
    stdout
        .lines()
        .filter_map(|line| {
            let mut fields = line.split_whitespace();
            let name = fields.next()?;
            let load_state = fields.next()?;
            let active_state = fields.next()?;
            let sub_state = fields.next()?;
            let description = fields.collect::<Vec<_>>().join(" ");
            Some(ListedUnit {
                name: name.to_string(),
                load_state: load_state.to_string(),
                active_state: active_state.to_string(),
                sub_state: sub_state.to_string(),
                description,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
nginx.service loaded active running A high performance web server and a reverse proxy server
ssh.service loaded active running OpenBSD Secure Shell server
systemd-journald.service loaded active running Journal Service
motd-news.service loaded inactive dead Message of the Day
snap.lxd.activate.service not-found inactive dead snap.lxd.activate.service
";

    #[test]
    fn test_parses_all_rows() {
        let units = parse_list_output(SAMPLE);
        assert_eq!(units.len(), 5);
    }

    #[test]
    fn test_description_keeps_remaining_columns() {
        let units = parse_list_output(SAMPLE);
        assert_eq!(units[0].name, "nginx.service");
        assert_eq!(units[0].load_state, "loaded");
        assert_eq!(units[0].active_state, "active");
        assert_eq!(units[0].sub_state, "running");
        assert_eq!(
            units[0].description,
            "A high performance web server and a reverse proxy server"
        );
    }

    #[test]
    fn test_not_found_units_are_reported() {
        let units = parse_list_output(SAMPLE);
        assert_eq!(units[4].load_state, "not-found");
        assert_eq!(units[4].active_state, "inactive");
    }

    #[test]
    fn test_short_lines_are_skipped() {
        assert!(parse_list_output("\n   \nlonely.service loaded\n").is_empty());
    }

    #[test]
    fn test_empty_description_is_allowed() {
        let units = parse_list_output("foo.service loaded active running\n");
        assert_eq!(units.len(), 1);
        assert_eq!(units[0].description, "");
    }
}
