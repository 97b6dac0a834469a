use anyhow::Context;
use sp_config::PlannerConfig;

/// Load `.env` (if present) and the layered configuration.
pub fn load_config() -> anyhow::Result<PlannerConfig> {
    if let Err(error) = dotenvy::dotenv()
        && !error.not_found()
    {
        return Err(error).context("failed to load .env file");
    }

    PlannerConfig::load().context("failed to load configuration")
}
