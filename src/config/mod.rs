//! Configuration module

mod mode;
mod site;

pub use mode::BuildMode;
pub use mode::MODE_ENV_VAR;
pub use site::MissingTitle;
pub use site::ServerConfig;
pub use site::SiteConfig;
