pub mod jwt;
pub mod password;
pub mod service;

// Re-export public items
pub use jwt::{JwtTokenService, TokenPayload, TokenService};
pub use password::{Argon2PasswordService, PasswordService};
pub use service::{AuthService, Credentials, LoginResult};
