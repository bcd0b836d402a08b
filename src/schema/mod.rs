//! Schema validation subsystem
//!
//! Declarative per-entity field rules applied to raw form candidates
//! before anything reaches the mapper or the wire.
//!
//! # Design principles
//!
//! - Validation happens once, at submission time, before mapping
//! - One message per offending field (the first violated rule)
//! - Optional fields accept absence and explicit null unconditionally
//! - Update candidates apply the same rules but treat every field as
//!   optional
//! - Deterministic: same candidate, same outcome, every time
//!
//! Cross-field rules (e.g. ordering between `fechaIngreso` and
//! `fechaSalida`) are deliberately not implemented; each field is
//! checked in isolation.

mod errors;
mod registry;
mod types;
mod validator;

pub use errors::{SchemaResult, ValidationError};
pub use registry::{validate_and_map, FormEntity, Registry, RegistryError};
pub use types::{
    FieldDef, FieldRule, ACCION_RULES, PAGO_RULES, PRESTAMO_RULES, ROL_RULES, SOCIO_RULES,
    SOLICITUD_RULES, USUARIO_RULES, VARIABLES_RULES, VOTACION_RULES,
};
pub use validator::{validate, Mode};
