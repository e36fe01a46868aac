pub mod email;
pub mod password;

pub use email::BreachedAccountChecker;
pub use password::PwnedPasswordChecker;
