pub mod config;
pub mod dotenv;
pub mod env_audit;
pub mod error;
pub mod ignore;
pub mod matcher;
pub mod pattern;
pub mod project;
pub mod walker;
