//! Route handlers organized by resource

pub mod authors;
pub mod health;
pub mod pages;
pub mod quotes;
pub mod themes;
