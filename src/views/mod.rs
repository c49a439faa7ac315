pub mod about;
pub mod chat;
pub mod dashboard;
pub mod documents;
pub mod notes;
pub mod settings;
pub mod shared;
pub mod tutorial;

pub use about::AboutView;
pub use chat::ChatView;
pub use dashboard::DashboardView;
pub use documents::DocumentAnalysisView;
pub use settings::SettingsView;
pub use tutorial::TutorialOverlay;
