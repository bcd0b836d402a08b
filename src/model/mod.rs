//! Entity shapes for the membership registry
//!
//! Every business entity has two representations:
//!
//! - a **form** shape: what the UI collects. Dates are loosely
//!   formatted strings, monetary amounts are decimal strings, and every
//!   member is optional - whether a field must be present is a
//!   validation-mode concern, not a type-level one. A create form and a
//!   partial-update form share the same struct.
//! - a **persist** shape: what the storage layer receives.
//!   Monetary amounts are numbers, nullable columns are explicit
//!   `Option`s (serialized as JSON null, never an absent key), and
//!   boolean columns always carry a value.

mod enums;
mod forms;
mod persist;

pub use enums::{Modalidad, TipoCuota};
pub use forms::{
    AccionForm, PagoForm, PrestamoForm, RolForm, SocioForm, SolicitudForm, UsuarioForm,
    VariablesForm, VotacionForm,
};
pub use persist::{
    AccionPersist, PagoPersist, PrestamoPersist, RolPersist, SocioPersist, SolicitudPersist,
    UsuarioPersist, VariablesPersist, VotacionPersist,
};

/// A date as the UI supplies it: "YYYY-MM-DD" or any other parseable
/// textual form.
pub type DateString = String;

/// A monetary amount as text: optional sign, integer part, up to four
/// fractional digits (the persistence layer stores DECIMAL(14,4)).
pub type DecimalString = String;
