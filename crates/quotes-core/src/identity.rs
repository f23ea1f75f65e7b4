//! User identity derivation.
//!
//! A `UserId` is a UUID v5 of the username under a fixed namespace, so the
//! same username always maps to the same id. Tokens signed with a stable
//! secret therefore keep resolving across process restarts.
//!
//! # Example
//!
//! ```
//! use quotes_core::identity::derive_user_id;
//!
//! let a = derive_user_id("alice");
//! assert_eq!(a, derive_user_id("alice"));
//! assert_ne!(a, derive_user_id("bob"));
//! ```

use uuid::Uuid;

use crate::types::UserId;

/// Namespace for user id derivation.
pub const USER_NAMESPACE: Uuid = Uuid::from_u128(0x6f1c_2b0e_93a4_4d57_8a1e_5c3f_d2b7_0e41);

/// Derive a UserId from a username.
pub fn derive_user_id(username: &str) -> UserId {
    UserId::from_uuid(Uuid::new_v5(&USER_NAMESPACE, username.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_user_id_deterministic() {
        assert_eq!(derive_user_id("admin"), derive_user_id("admin"));
    }

    #[test]
    fn test_derive_user_id_distinct() {
        assert_ne!(derive_user_id("admin"), derive_user_id("Admin"));
    }

    #[test]
    fn test_derive_user_id_is_v5() {
        let id = derive_user_id("someone");
        assert_eq!(id.as_uuid().get_version_num(), 5);
    }
}
