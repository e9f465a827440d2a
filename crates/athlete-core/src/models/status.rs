//! Session and exercise status enumerations.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize};

/// Which half of a training day a session belongs to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum SessionType {
    Morning,
    Evening,
}

impl SessionType {
    /// Both session types in display order.
    pub const ALL: [SessionType; 2] = [SessionType::Morning, SessionType::Evening];

    /// Convert to the field name used in the stored JSON record
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionType::Morning => "morning",
            SessionType::Evening => "evening",
        }
    }

    /// Session name prefixed with its icon.
    ///
    /// ```rust
    /// use athlete_core::models::SessionType;
    ///
    /// assert_eq!(SessionType::Morning.with_icon(), "☀️ Morning");
    /// assert_eq!(SessionType::Evening.with_icon(), "🌙 Evening");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            SessionType::Morning => "☀️ Morning",
            SessionType::Evening => "🌙 Evening",
        }
    }
}

impl fmt::Display for SessionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SessionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "morning" | "am" => Ok(SessionType::Morning),
            "evening" | "pm" => Ok(SessionType::Evening),
            _ => Err(format!("Invalid session type: {s}")),
        }
    }
}

/// Outcome recorded for an exercise during workout mode.
///
/// A record with no outcome yet is represented as `Option::<ExerciseStatus>::None`
/// and stored as `null`.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ExerciseStatus {
    /// Exercise was performed
    Completed,

    /// Exercise was passed over
    Skipped,
}

impl FromStr for ExerciseStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "completed" => Ok(ExerciseStatus::Completed),
            "skipped" => Ok(ExerciseStatus::Skipped),
            _ => Err(format!("Invalid exercise status: {s}")),
        }
    }
}

impl ExerciseStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExerciseStatus::Completed => "completed",
            ExerciseStatus::Skipped => "skipped",
        }
    }

    /// Get status with consistent icon formatting for display.
    ///
    /// Pass `None` for an exercise that has not been completed or skipped.
    ///
    /// ```rust
    /// use athlete_core::models::ExerciseStatus;
    ///
    /// assert_eq!(ExerciseStatus::icon_for(Some(ExerciseStatus::Completed)), "✓ Completed");
    /// assert_eq!(ExerciseStatus::icon_for(Some(ExerciseStatus::Skipped)), "⏭️ Skipped");
    /// assert_eq!(ExerciseStatus::icon_for(None), "○ Pending");
    /// ```
    pub fn icon_for(status: Option<ExerciseStatus>) -> &'static str {
        match status {
            Some(ExerciseStatus::Completed) => "✓ Completed",
            Some(ExerciseStatus::Skipped) => "⏭️ Skipped",
            None => "○ Pending",
        }
    }
}

impl<'de> Deserialize<'de> for ExerciseStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Reads a stored `status` value, mapping anything unrecognised to no status.
pub(crate) fn lenient_status<'de, D>(deserializer: D) -> Result<Option<ExerciseStatus>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_str().and_then(|s| s.parse().ok()))
}
