// Application layer - Chart adapters and the dashboard use cases
pub mod adapters;
pub mod dashboard_service;
pub mod nutrition_api;
pub mod render_sink;
