pub mod activity;
pub mod auth;
pub mod plan;
pub mod task;

pub use activity::ActivityCommands;
pub use auth::AuthCommands;
pub use plan::PlanCommands;
pub use task::TaskCommands;
