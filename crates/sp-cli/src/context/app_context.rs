use std::path::PathBuf;

use anyhow::Context;
use chrono::NaiveDate;
use sp_config::PlannerConfig;
use sp_db::service::PlannerService;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub service: PlannerService,
    pub config: PlannerConfig,
    /// Local calendar day every date computation in this run is anchored to.
    pub today: NaiveDate,
}

impl AppContext {
    /// Open (and migrate) the planner database named by the config.
    pub async fn init(config: PlannerConfig) -> anyhow::Result<Self> {
        let db_path = database_path(&config)?;
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }

        let service = PlannerService::new_local(&db_path.to_string_lossy())
            .await
            .with_context(|| format!("failed to open database {}", db_path.display()))?;
        tracing::debug!(path = %db_path.display(), "planner database ready");

        Ok(Self {
            service,
            config,
            today: chrono::Local::now().date_naive(),
        })
    }
}

fn database_path(config: &PlannerConfig) -> anyhow::Result<PathBuf> {
    config
        .database
        .resolved_path()
        .context("could not determine a database path; set database.path or STUDYPLAN_DATABASE__PATH")
}
