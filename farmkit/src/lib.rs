pub mod config;
pub mod errors;
pub mod export;
pub mod mock;
pub mod session;
pub mod shell;
pub mod theme;
pub mod types;
pub mod views;

pub use config::DashboardConfig;
pub use errors::{FarmError, Result};
pub use session::{Session, ShellEvent};
pub use shell::{Dashboard, Tab};
