//! Central schema registry for the planner's public types.
//!
//! The `SchemaRegistry` builds JSON Schemas from sp-core types at construction
//! time using [`schemars::schema_for!`] and provides validation via `jsonschema`.

use std::collections::HashMap;

use schemars::schema_for;

use crate::errors::CoreError;

/// Named JSON Schemas for entities and CLI responses.
pub struct SchemaRegistry {
    schemas: HashMap<&'static str, serde_json::Value>,
}

/// Insert a schema into the map. `schemars` output always serializes, so a
/// failure here is a bug in the derive and is surfaced as a `null` schema.
macro_rules! register {
    ($map:expr, $name:expr, $ty:ty) => {
        $map.insert(
            $name,
            serde_json::to_value(schema_for!($ty)).unwrap_or(serde_json::Value::Null),
        );
    };
}

impl SchemaRegistry {
    #[must_use]
    pub fn new() -> Self {
        let mut schemas = HashMap::new();

        register!(schemas, "user", crate::entities::User);
        register!(schemas, "study_plan", crate::entities::StudyPlan);
        register!(schemas, "study_task", crate::entities::StudyTask);
        register!(schemas, "task_draft", crate::entities::TaskDraft);
        register!(schemas, "activity_snapshot", crate::entities::ActivitySnapshot);

        register!(
            schemas,
            "plan_create_response",
            crate::responses::PlanCreateResponse
        );
        register!(
            schemas,
            "plan_detail_response",
            crate::responses::PlanDetailResponse
        );
        register!(schemas, "adjust_response", crate::responses::AdjustResponse);
        register!(schemas, "dashboard_stats", crate::responses::DashboardStats);
        register!(schemas, "activity_view", crate::responses::ActivityView);
        register!(
            schemas,
            "activity_refresh_response",
            crate::responses::ActivityRefreshResponse
        );

        Self { schemas }
    }

    /// Get a schema by name. Returns `None` if not found.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&serde_json::Value> {
        self.schemas.get(name)
    }

    /// Validate a JSON value against a named schema.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` for an unknown schema name and
    /// `CoreError::Validation` listing every violation otherwise.
    pub fn validate(&self, name: &str, instance: &serde_json::Value) -> Result<(), CoreError> {
        let schema = self.get(name).ok_or_else(|| CoreError::NotFound {
            entity_type: "schema".into(),
            id: name.to_string(),
        })?;

        let validator = jsonschema::validator_for(schema)
            .map_err(|e| CoreError::Validation(format!("schema {name} does not compile: {e}")))?;

        let errors: Vec<String> = validator
            .iter_errors(instance)
            .map(|e| format!("{e}"))
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(CoreError::Validation(errors.join("; ")))
        }
    }

    /// List all registered schema names, sorted.
    #[must_use]
    pub fn list(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.schemas.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use pretty_assertions::assert_eq;

    use crate::entities::StudyTask;
    use crate::enums::TaskStatus;

    #[test]
    fn registry_lists_all_types() {
        let names = SchemaRegistry::new().list();
        assert_eq!(names.len(), 11);
        assert!(names.contains(&"study_plan"));
        assert!(names.contains(&"dashboard_stats"));
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
    }

    #[test]
    fn serialized_task_validates() {
        let task = StudyTask {
            id: 7,
            plan_id: 1,
            task_date: NaiveDate::from_ymd_opt(2026, 6, 1).unwrap(),
            description: "Basic: Write unit tests (Est. time: 1 hours)".into(),
            requires_commit: true,
            status: TaskStatus::Pending,
            created_at: Utc::now(),
        };
        let value = serde_json::to_value(&task).unwrap();
        SchemaRegistry::new()
            .validate("study_task", &value)
            .expect("task should match its schema");
    }

    #[test]
    fn bad_status_fails_validation() {
        let value = serde_json::json!({
            "id": 1,
            "plan_id": 1,
            "task_date": "2026-06-01",
            "description": "x",
            "requires_commit": false,
            "status": "done",
            "created_at": "2026-06-01T00:00:00Z"
        });
        let err = SchemaRegistry::new()
            .validate("study_task", &value)
            .unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn unknown_schema_is_not_found() {
        let err = SchemaRegistry::new()
            .validate("nope", &serde_json::Value::Null)
            .unwrap_err();
        assert!(matches!(err, CoreError::NotFound { .. }));
    }
}
