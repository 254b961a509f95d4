/// Use cases module containing application business logic orchestration
mod analyze_app;
mod compare_apps;
mod steps;

pub use analyze_app::AnalyzeAppUseCase;
pub use compare_apps::CompareAppsUseCase;
