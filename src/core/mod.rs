pub mod engine;
pub mod recommendations;

pub use crate::domain::model::{
    BreachRecord, EmailCheckResult, PasswordCheckResult, Recommendation, RecommendationKind,
    SecurityCheckRequest, SecurityCheckResponse,
};
pub use crate::domain::ports::{ConfigProvider, EmailBreachCheck, PasswordBreachCheck};
pub use crate::utils::error::Result;
