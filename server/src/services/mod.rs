pub mod credentials;
pub mod generate;
pub mod project;
pub mod session;
