pub mod auth;
pub mod dashboard;
pub mod dispatch;
pub mod generate;
pub mod init;
pub mod profile;
pub mod schema;
pub mod search;
pub mod shared;
pub mod users;
