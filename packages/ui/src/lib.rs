//! This crate contains all shared UI for the workspace.

mod activity_log;
pub use activity_log::{
    log_activity, use_activity_log, ActivityFeed, ActivityLog, LogEntry, LogLevel,
};

mod book;
pub use book::make_book;

mod recipe_form;
pub use recipe_form::RecipeForm;

mod recipe_list;
pub use recipe_list::RecipeList;

pub mod views;
