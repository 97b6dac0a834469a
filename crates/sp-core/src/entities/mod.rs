//! Entity structs for all planner domain objects.
//!
//! Each persisted entity maps to a table in the libSQL database. Draft
//! structs (`NewUser`, `PlanDraft`, `TaskDraft`, `SnapshotDraft`) carry the fields known
//! before the row exists and are what writers accept.
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for JSON
//! roundtrip and schema validation.

mod activity;
mod plan;
mod task;
mod user;

pub use activity::{ActivitySnapshot, SnapshotDraft};
pub use plan::{PlanDraft, StudyPlan};
pub use task::{Reschedule, StudyTask, TaskDraft};
pub use user::{NewUser, User};
