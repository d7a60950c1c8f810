pub mod history;
pub mod others;
pub mod profile;
