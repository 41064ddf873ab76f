//! Recognized `systemctl show` property identifiers.
//!
//! A closed, static table. The Show operation accepts any [`Property`]
//! listed here; supporting a new property means adding a variant to this
//! table, not touching the facade logic.

use std::fmt;
use std::str::FromStr;

/// A unit property queryable with `systemctl show --property=...`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Property {
    // Identity and description
    Id,
    Names,
    Description,
    Documentation,
    FragmentPath,

    // Load and activation state
    LoadState,
    ActiveState,
    SubState,
    UnitFileState,
    UnitFilePreset,
    FreezerState,
    NeedDaemonReload,
    ConditionResult,
    UnitResult,

    // State-change timestamps
    ActiveEnterTimestamp,
    ActiveExitTimestamp,
    InactiveEnterTimestamp,
    InactiveExitTimestamp,
    StateChangeTimestamp,

    // Capabilities
    CanStart,
    CanStop,
    CanReload,
    CanIsolate,
    CanFreeze,

    // Service execution
    Type,
    Restart,
    MainPID,
    ControlPID,
    ExecMainPID,
    ExecMainStartTimestamp,
    ExecMainExitTimestamp,
    ExecMainCode,
    ExecMainStatus,
    NRestarts,
    StatusText,
    User,
    Group,
    Environment,
    StandardOutput,
    StandardError,
    SyslogIdentifier,

    // Process and resource accounting
    Slice,
    ControlGroup,
    MemoryCurrent,
    MemoryMax,
    CPUUsageNSec,
    TasksCurrent,
    TasksMax,
    LimitNOFILE,

    // Lifecycle timing
    TimeoutStartUSec,
    TimeoutStopUSec,
    RestartUSec,
    WatchdogUSec,

    // Termination behavior
    KillMode,
    KillSignal,

    // Dependencies and ordering
    Wants,
    WantedBy,
    Requires,
    RequiredBy,
    Requisite,
    BindsTo,
    PartOf,
    Conflicts,
    Before,
    After,
    OnFailure,
    Triggers,
    TriggeredBy,

    // Misc behavior flags
    DefaultDependencies,
    RefuseManualStart,
    RefuseManualStop,
    IgnoreOnIsolate,
    CollectMode,
    Delegate,
    Transient,
}

impl Property {
    /// Every recognized property, for exhaustive iteration.
    pub const ALL: &'static [Property] = &[
        Property::Id,
        Property::Names,
        Property::Description,
        Property::Documentation,
        Property::FragmentPath,
        Property::LoadState,
        Property::ActiveState,
        Property::SubState,
        Property::UnitFileState,
        Property::UnitFilePreset,
        Property::FreezerState,
        Property::NeedDaemonReload,
        Property::ConditionResult,
        Property::UnitResult,
        Property::ActiveEnterTimestamp,
        Property::ActiveExitTimestamp,
        Property::InactiveEnterTimestamp,
        Property::InactiveExitTimestamp,
        Property::StateChangeTimestamp,
        Property::CanStart,
        Property::CanStop,
        Property::CanReload,
        Property::CanIsolate,
        Property::CanFreeze,
        Property::Type,
        Property::Restart,
        Property::MainPID,
        Property::ControlPID,
        Property::ExecMainPID,
        Property::ExecMainStartTimestamp,
        Property::ExecMainExitTimestamp,
        Property::ExecMainCode,
        Property::ExecMainStatus,
        Property::NRestarts,
        Property::StatusText,
        Property::User,
        Property::Group,
        Property::Environment,
        Property::StandardOutput,
        Property::StandardError,
        Property::SyslogIdentifier,
        Property::Slice,
        Property::ControlGroup,
        Property::MemoryCurrent,
        Property::MemoryMax,
        Property::CPUUsageNSec,
        Property::TasksCurrent,
        Property::TasksMax,
        Property::LimitNOFILE,
        Property::TimeoutStartUSec,
        Property::TimeoutStopUSec,
        Property::RestartUSec,
        Property::WatchdogUSec,
        Property::KillMode,
        Property::KillSignal,
        Property::Wants,
        Property::WantedBy,
        Property::Requires,
        Property::RequiredBy,
        Property::Requisite,
        Property::BindsTo,
        Property::PartOf,
        Property::Conflicts,
        Property::Before,
        Property::After,
        Property::OnFailure,
        Property::Triggers,
        Property::TriggeredBy,
        Property::DefaultDependencies,
        Property::RefuseManualStart,
        Property::RefuseManualStop,
        Property::IgnoreOnIsolate,
        Property::CollectMode,
        Property::Delegate,
        Property::Transient,
    ];

    /// The identifier as systemctl spells it.
    pub fn as_str(&self) -> &'static str {
        match self {
            Property::Id => "Id",
            Property::Names => "Names",
            Property::Description => "Description",
            Property::Documentation => "Documentation",
            Property::FragmentPath => "FragmentPath",
            Property::LoadState => "LoadState",
            Property::ActiveState => "ActiveState",
            Property::SubState => "SubState",
            Property::UnitFileState => "UnitFileState",
            Property::UnitFilePreset => "UnitFilePreset",
            Property::FreezerState => "FreezerState",
            Property::NeedDaemonReload => "NeedDaemonReload",
            Property::ConditionResult => "ConditionResult",
            Property::UnitResult => "Result",
            Property::ActiveEnterTimestamp => "ActiveEnterTimestamp",
            Property::ActiveExitTimestamp => "ActiveExitTimestamp",
            Property::InactiveEnterTimestamp => "InactiveEnterTimestamp",
            Property::InactiveExitTimestamp => "InactiveExitTimestamp",
            Property::StateChangeTimestamp => "StateChangeTimestamp",
            Property::CanStart => "CanStart",
            Property::CanStop => "CanStop",
            Property::CanReload => "CanReload",
            Property::CanIsolate => "CanIsolate",
            Property::CanFreeze => "CanFreeze",
            Property::Type => "Type",
            Property::Restart => "Restart",
            Property::MainPID => "MainPID",
            Property::ControlPID => "ControlPID",
            Property::ExecMainPID => "ExecMainPID",
            Property::ExecMainStartTimestamp => "ExecMainStartTimestamp",
            Property::ExecMainExitTimestamp => "ExecMainExitTimestamp",
            Property::ExecMainCode => "ExecMainCode",
            Property::ExecMainStatus => "ExecMainStatus",
            Property::NRestarts => "NRestarts",
            Property::StatusText => "StatusText",
            Property::User => "User",
            Property::Group => "Group",
            Property::Environment => "Environment",
            Property::StandardOutput => "StandardOutput",
            Property::StandardError => "StandardError",
            Property::SyslogIdentifier => "SyslogIdentifier",
            Property::Slice => "Slice",
            Property::ControlGroup => "ControlGroup",
            Property::MemoryCurrent => "MemoryCurrent",
            Property::MemoryMax => "MemoryMax",
            Property::CPUUsageNSec => "CPUUsageNSec",
            Property::TasksCurrent => "TasksCurrent",
            Property::TasksMax => "TasksMax",
            Property::LimitNOFILE => "LimitNOFILE",
            Property::TimeoutStartUSec => "TimeoutStartUSec",
            Property::TimeoutStopUSec => "TimeoutStopUSec",
            Property::RestartUSec => "RestartUSec",
            Property::WatchdogUSec => "WatchdogUSec",
            Property::KillMode => "KillMode",
            Property::KillSignal => "KillSignal",
            Property::Wants => "Wants",
            Property::WantedBy => "WantedBy",
            Property::Requires => "Requires",
            Property::RequiredBy => "RequiredBy",
            Property::Requisite => "Requisite",
            Property::BindsTo => "BindsTo",
            Property::PartOf => "PartOf",
            Property::Conflicts => "Conflicts",
            Property::Before => "Before",
            Property::After => "After",
            Property::OnFailure => "OnFailure",
            Property::Triggers => "Triggers",
            Property::TriggeredBy => "TriggeredBy",
            Property::DefaultDependencies => "DefaultDependencies",
            Property::RefuseManualStart => "RefuseManualStart",
            Property::RefuseManualStop => "RefuseManualStop",
            Property::IgnoreOnIsolate => "IgnoreOnIsolate",
            Property::CollectMode => "CollectMode",
            Property::Delegate => "Delegate",
            Property::Transient => "Transient",
        }
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Property {
    type Err = UnknownProperty;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Property::ALL
            .iter()
            .copied()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| UnknownProperty(s.to_string()))
    }
}

/// Returned when parsing a property identifier that is not in the table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized property identifier: {0}")]
pub struct UnknownProperty(pub String);
