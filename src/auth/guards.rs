// Explicit authorization guards, composed in front of service calls.
// Each guard either passes through or returns a typed error; no
// annotation-driven or ambient access checks anywhere.

use crate::auth::error::AuthError;
use crate::auth::middleware::AuthenticatedUser;
use crate::auth::models::Role;

/// Require the principal to hold the given role
pub fn require_role(user: &AuthenticatedUser, required: Role) -> Result<(), AuthError> {
    if user.role != required {
        return Err(AuthError::InsufficientPermissions {
            required,
            actual: user.role,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn principal(role: Role) -> AuthenticatedUser {
        AuthenticatedUser {
            user_id: 7,
            email: "guest@example.com".to_string(),
            role,
        }
    }

    #[test]
    fn test_matching_role_passes() {
        assert!(require_role(&principal(Role::Admin), Role::Admin).is_ok());
        assert!(require_role(&principal(Role::User), Role::User).is_ok());
    }

    #[test]
    fn test_user_denied_admin_route() {
        let result = require_role(&principal(Role::User), Role::Admin);
        match result.unwrap_err() {
            AuthError::InsufficientPermissions { required, actual } => {
                assert_eq!(required, Role::Admin);
                assert_eq!(actual, Role::User);
            }
            other => panic!("Expected InsufficientPermissions, got {:?}", other),
        }
    }

    #[test]
    fn test_admin_denied_user_only_route() {
        // Admins do not implicitly satisfy user-role routes; the check is exact
        let result = require_role(&principal(Role::Admin), Role::User);
        assert!(result.is_err());
    }
}
