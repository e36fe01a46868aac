pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod http_server;
pub mod utils;

pub use crate::app::checkers::{BreachedAccountChecker, PwnedPasswordChecker};
pub use crate::config::{toml_config::ServerTomlConfig, CliConfig};
pub use crate::core::engine::SecurityCheckEngine;
pub use crate::domain::model::{
    BreachRecord, EmailCheckResult, PasswordCheckResult, Recommendation, RecommendationKind,
    SecurityCheckRequest, SecurityCheckResponse,
};
pub use crate::domain::ports::{ConfigProvider, EmailBreachCheck, PasswordBreachCheck};
pub use crate::utils::error::{Result, ShieldError};
