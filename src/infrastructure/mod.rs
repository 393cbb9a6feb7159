// Infrastructure layer - External dependencies and adapters
pub mod chart_registry;
pub mod config;
pub mod nutrition_client;
pub mod settings_store;
