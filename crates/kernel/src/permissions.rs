//! Role gate.
//!
//! Access is decided from a role name and the role set of the signed-in user.
//! The admin role satisfies every requirement.

use std::collections::BTreeSet;

use crate::session::SessionUser;

pub mod well_known {
    pub const ADMIN_ROLE: &str = "admin";
    pub const CLIENT_ROLE: &str = "client";

    /// Roles a user can be created with.
    pub const ALL: [&str; 2] = [ADMIN_ROLE, CLIENT_ROLE];

    pub fn is_known(role: &str) -> bool {
        ALL.contains(&role)
    }
}

/// Outcome of gating a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Granted,
    LoginRequired,
    Denied,
}

/// True when no role is required, the role is held, or admin is held.
pub fn can_access(required: Option<&str>, roles: &BTreeSet<String>) -> bool {
    match required {
        None => true,
        Some(role) => roles.contains(role) || roles.contains(well_known::ADMIN_ROLE),
    }
}

/// Gate an optional signed-in user against an optional role.
pub fn authorize(user: Option<&SessionUser>, required: Option<&str>) -> Access {
    match user {
        None => Access::LoginRequired,
        Some(user) if can_access(required, &user.roles) => Access::Granted,
        Some(_) => Access::Denied,
    }
}
