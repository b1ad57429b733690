pub mod analytics;
pub mod category;
pub mod chart;
pub mod entry;
pub mod filter;
pub mod notification;
pub mod session;
