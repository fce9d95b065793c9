pub mod admin;
pub mod portfolio;
