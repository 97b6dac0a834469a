pub mod activity;
pub mod auth;
pub mod dashboard;
pub mod dispatch;
pub mod plan;
pub mod schema;
pub mod shared;
pub mod task;
