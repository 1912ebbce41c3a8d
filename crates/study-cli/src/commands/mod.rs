pub mod auth;
pub mod chat;
pub mod dashboard;
pub mod dispatch;
pub mod shared;
pub mod upload;
pub mod uploads;
pub mod workspace;
