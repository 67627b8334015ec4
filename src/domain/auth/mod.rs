pub mod entities;
pub mod errors;
pub mod ports;
pub mod services;
pub mod value_objects;

#[cfg(test)]
pub mod test_support;

pub use entities::{Account, CurrentAccount, Session};
pub use errors::{AuthError, HashError, RepositoryError, ValidationError};
pub use ports::{AccountRepository, PasswordHasher, SessionRepository};
pub use services::{AuthService, AuthServiceConfig, NewAccount};
pub use value_objects::{
  AccountIdentity, AccountRole, Password, PasswordHash, SessionToken, TokenHash, UserType,
};
