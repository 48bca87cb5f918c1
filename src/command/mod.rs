pub mod dashboard;
pub mod edit;
pub mod list;
pub mod prefs;
pub mod spin;
pub mod svg;
