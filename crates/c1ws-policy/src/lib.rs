pub mod client;
pub mod config;
pub mod copy;
pub mod error;
pub mod headers;
pub mod logging;
pub mod model;
pub mod prompt;
pub mod resolver;
pub mod session;
pub mod snapshot;

pub use client::{base_url_for_region, fetch_policy_details, PolicyClient, UpdateOutcome};
pub use config::{LoggingConfig, ToolConfig};
pub use copy::{
    copy_payload, execute, plan_copy, CopyOutcome, CopyPlan, CopySource, ExecuteOptions,
};
pub use error::{PolicyError, Result};
pub use headers::auth_headers;
pub use model::{Policy, PolicyId, PolicyList, PolicyPath, PolicySelector};
pub use prompt::Prompter;
pub use resolver::{resolve, resolve_by_name, resolve_by_path};
pub use session::connect;
