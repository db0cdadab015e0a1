pub mod config;
pub mod handlers;
pub mod llm;
pub mod relay;
pub mod routes;
pub mod state;
pub mod utils;
pub mod workbench;
