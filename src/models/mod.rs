// Models module - API payloads and body records

pub mod body;
pub mod responses;

// Re-export all models for easier imports
pub use body::*;
pub use responses::*;
