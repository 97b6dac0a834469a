//! Repository modules. Each adds methods to [`crate::service::PlannerService`].

pub mod activity;
pub mod plan;
pub mod task;
pub mod user;
