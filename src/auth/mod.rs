//! Credential hashing
//!
//! Passwords are only ever stored as Argon2id hashes. Both operations
//! fail closed: an internal error yields `None`, which callers must
//! treat as "operation could not be completed" - distinct from
//! `Some(false)`, "verified and did not match".

mod crypto;

pub use crypto::{hash_password, verify_password};
