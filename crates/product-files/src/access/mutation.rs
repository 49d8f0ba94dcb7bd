//! Role checks for operations other than reads.

use crate::model::User;

/// Only admins pass. Guards update and delete, and admin visibility.
pub fn admin_only(identity: Option<&User>) -> bool {
    identity.is_some_and(User::is_admin)
}

/// Any authenticated identity passes. Guards uploads.
pub fn authenticated(identity: Option<&User>) -> bool {
    identity.is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Role, UserId};

    #[test]
    fn test_role_checks() {
        let admin = User::new(UserId(1), "Root", "root@example.com", Role::Admin);
        let buyer = User::new(UserId(2), "Bea", "bea@example.com", Role::User);

        assert!(admin_only(Some(&admin)));
        assert!(!admin_only(Some(&buyer)));
        assert!(!admin_only(None));

        assert!(authenticated(Some(&buyer)));
        assert!(!authenticated(None));
    }
}
