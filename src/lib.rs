// Planet browser library
// Fetches an API key, loads celestial bodies and presents them on a UI surface

pub mod models;
pub mod client;
pub mod config;
pub mod error;
pub mod ui;
pub mod verbosity;
pub mod viewer;

// Re-export commonly used types
pub use models::{Body, Temperature};
pub use client::{BodySource, Credential, PlanetClient};
pub use config::ViewerConfig;
pub use error::{Result, ViewerError};
pub use ui::{MemorySurface, Surface};
pub use viewer::{LoadState, Viewer};

// Constants
pub const API_BASE_URL: &str = "https://n5n3eiyjb0.execute-api.eu-north-1.amazonaws.com";
pub const API_KEY_HEADER: &str = "x-zocom";
pub const CONFIG_FILE: &str = "planet_browser.toml";
