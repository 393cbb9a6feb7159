// Domain layer - View-state types and controllers with no I/O
pub mod charts;
pub mod filter;
pub mod pagination;
pub mod payloads;
