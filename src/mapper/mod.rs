//! Persistence mapping subsystem
//!
//! Pure, one-way transforms from validated form values to their
//! persistence shapes. One function per entity; no function inspects
//! another entity's fields. Mapping never re-validates - rejection is
//! the schema validator's job - but an unparsable decimal string is a
//! loud [`MapError`], never a silent NaN in the persisted record.

mod decimal;
mod entities;
mod errors;

pub use decimal::{to_decimal4, DecimalValue};
pub use entities::{
    map_accion, map_pago, map_prestamo, map_rol, map_socio, map_solicitud, map_usuario,
    map_variables, map_votacion,
};
pub use errors::{MapError, MapResult};
