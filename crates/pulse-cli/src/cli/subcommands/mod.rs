mod auth;
mod users;

pub use auth::{AuthCommands, AuthLoginArgs, AuthSignupArgs};
pub use users::UsersCommands;
