pub mod analysis;
pub mod app;
pub mod config;
pub mod data;
pub mod grader;
pub mod i18n;
pub mod model;
pub mod session;
pub mod ui;
pub mod view_models;

pub use app::QuizApp;
