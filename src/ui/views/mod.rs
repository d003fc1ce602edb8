pub mod exam;
pub mod loader;
pub mod main_menu;
pub mod quiz;
pub mod results;
pub mod topic_menu;
