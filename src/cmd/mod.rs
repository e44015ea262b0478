//! Command handlers for broker-roi CLI
//!
//! Each submodule handles a specific CLI command. The calculation commands
//! take a [`ResolvedConfig`](crate::config::ResolvedConfig) built by
//! [`AssumptionArgs::resolve`].

pub mod args;
pub mod category;
pub mod compare;
pub mod completions;
pub mod init;
pub mod project;
pub mod sensitivity;

pub use args::AssumptionArgs;
pub use category::cmd_category;
pub use compare::cmd_compare;
pub use completions::cmd_completions;
pub use init::cmd_init;
pub use project::cmd_project;
pub use sensitivity::{cmd_sensitivity, GridArgs};
