pub mod history;
pub mod insights;
pub mod recommend;
pub mod settings;

pub use history::HistoryPage;
pub use insights::InsightsPage;
pub use recommend::RecommendPage;
pub use settings::SettingsPage;
