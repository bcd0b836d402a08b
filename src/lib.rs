//! socioforms - form validation and persistence mapping for a
//! cooperative membership system
//!
//! The crate covers the submission path between raw UI form state and
//! the membership registry's persistence layer:
//!
//! 1. A raw JSON candidate is checked against a declarative per-entity
//!    rule table ([`schema`]), producing either a typed form value or a
//!    field-indexed error map.
//! 2. A validated form is mapped to its persistence shape ([`mapper`]):
//!    decimal strings become numbers, omitted optional fields become
//!    explicit nulls, omitted booleans become `false`.
//! 3. The persisted record is POSTed to the registration endpoint
//!    ([`submit`]).
//!
//! Validation and mapping are pure, synchronous and deterministic; the
//! only asynchronous operation is the network submission.

pub mod auth;
pub mod cli;
pub mod mapper;
pub mod model;
pub mod observability;
pub mod schema;
pub mod submit;
