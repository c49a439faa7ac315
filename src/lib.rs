pub mod agents;
pub mod api;
pub mod messages;
pub mod notes;
pub mod session;
pub mod settings;
pub mod storage;
pub mod types;

#[cfg(any(feature = "web", feature = "desktop", feature = "mobile"))]
pub mod theme;
#[cfg(any(feature = "web", feature = "desktop", feature = "mobile"))]
pub mod ui;
#[cfg(any(feature = "web", feature = "desktop", feature = "mobile"))]
pub mod views;
