pub mod config;
pub mod dotenv;
pub mod env_var;
