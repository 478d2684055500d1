// Access layer: token validation plus role and ownership guards.
// Credential storage and verification live with the external identity
// provider; this subsystem only consumes the tokens it issues.

pub mod error;
pub mod guards;
pub mod middleware;
pub mod models;
pub mod token;

pub use error::AuthError;
pub use guards::require_role;
pub use middleware::AuthenticatedUser;
pub use models::Role;
pub use token::{Claims, TokenService};
