//! Roles, providers, difficulty levels, and status enums for the planner.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`,
//! which is also the representation stored in SQL text columns.
//! Status enums with state machines provide `allowed_next_states()` to enforce
//! valid transitions at the application layer.

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// UserRole
// ---------------------------------------------------------------------------

/// Which study track a user follows. Selects the track of plans they create.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Normal,
    It,
}

impl UserRole {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::It => "it",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Normal => "Normal Student",
            Self::It => "IT Student",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// PlanTrack
// ---------------------------------------------------------------------------

/// How a plan's tasks are generated and rescheduled. Chosen from the owner's
/// role when the plan is created and stored with it, so later role changes
/// never alter an existing plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum PlanTrack {
    /// Coding tasks verified by commits to a repository.
    Commit,
    /// Chapter reading across comma-separated subjects.
    Subject,
}

impl PlanTrack {
    #[must_use]
    pub const fn for_role(role: UserRole) -> Self {
        match role {
            UserRole::It => Self::Commit,
            UserRole::Normal => Self::Subject,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Commit => "commit",
            Self::Subject => "subject",
        }
    }
}

impl fmt::Display for PlanTrack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// OAuthProvider
// ---------------------------------------------------------------------------

/// Identity provider a user signed in with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum OAuthProvider {
    Github,
    Google,
}

impl OAuthProvider {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Github => "github",
            Self::Google => "google",
        }
    }
}

impl fmt::Display for OAuthProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Difficulty
// ---------------------------------------------------------------------------

/// Difficulty setting of a plan.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    #[default]
    Moderate,
    Hard,
}

impl Difficulty {
    /// Multiplier applied to daily hours when picking the intensity tier.
    #[must_use]
    pub const fn factor(self) -> u32 {
        match self {
            Self::Easy => 1,
            Self::Moderate => 2,
            Self::Hard => 3,
        }
    }

    /// Case-insensitive parse. Unrecognized input maps to [`Difficulty::Moderate`].
    #[must_use]
    pub fn parse_lenient(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "easy" => Self::Easy,
            "hard" => Self::Hard,
            _ => Self::Moderate,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Moderate => "moderate",
            Self::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// TaskStatus
// ---------------------------------------------------------------------------

/// Status of a study task.
///
/// ```text
/// pending → completed
///         → missed
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    #[default]
    Pending,
    Completed,
    Missed,
}

impl TaskStatus {
    /// Valid next states from the current state.
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Pending => &[Self::Completed, Self::Missed],
            Self::Completed | Self::Missed => &[],
        }
    }

    /// Check whether transitioning to `next` is allowed.
    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
            Self::Missed => "missed",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ActivityStatus
// ---------------------------------------------------------------------------

/// Traffic-light freshness of a repository's last commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ActivityStatus {
    Green,
    Yellow,
    Red,
    NoActivity,
}

impl ActivityStatus {
    /// Today → green, yesterday → yellow, anything older → red.
    #[must_use]
    pub fn from_last_commit(last_commit: Option<NaiveDate>, today: NaiveDate) -> Self {
        let Some(last) = last_commit else {
            return Self::NoActivity;
        };
        if last == today {
            Self::Green
        } else if today.pred_opt() == Some(last) {
            Self::Yellow
        } else {
            Self::Red
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Red => "red",
            Self::NoActivity => "no_activity",
        }
    }
}

impl fmt::Display for ActivityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// CompletionEstimate
// ---------------------------------------------------------------------------

/// Coarse forecast of whether a plan will finish on time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum CompletionEstimate {
    NotStarted,
    Overdue,
    OnTrack,
    BehindSchedule,
    AtRisk,
}

impl CompletionEstimate {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotStarted => "not_started",
            Self::Overdue => "overdue",
            Self::OnTrack => "on_track",
            Self::BehindSchedule => "behind_schedule",
            Self::AtRisk => "at_risk",
        }
    }
}

impl fmt::Display for CompletionEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
