//! Field rules and per-entity rule tables
//!
//! A rule table is the complete validation contract for one entity:
//! which fields are recognized, which must be present on a create
//! candidate, and what constraint each value must satisfy.

use crate::model::{Modalidad, TipoCuota};

/// Constraint a present, non-null field value must satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    /// UTF-8 string of at least `min_len` bytes. `min_len` 0 accepts
    /// any string, `min_len` 1 rejects the empty string literal (no
    /// trimming is applied before the check).
    Text { min_len: usize },
    /// Syntactically valid email address.
    Email,
    /// Decimal amount as text: optional sign, integer part, up to four
    /// fractional digits.
    Decimal,
    /// Parseable textual date. Deliberately permissive: any form the
    /// date parser accepts passes, not just "YYYY-MM-DD".
    Date,
    /// Whole JSON number, optionally with a lower bound.
    Integer { min: Option<i64> },
    /// String equal to one of the listed members.
    Enum { variants: &'static [&'static str] },
    /// JSON boolean.
    Bool,
}

/// One recognized field: wire name, constraint, and whether a create
/// candidate must carry it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDef {
    pub name: &'static str,
    pub rule: FieldRule,
    pub required: bool,
}

impl FieldDef {
    /// Required non-empty string.
    pub const fn required_text(name: &'static str) -> Self {
        Self { name, rule: FieldRule::Text { min_len: 1 }, required: true }
    }

    /// Optional unconstrained string.
    pub const fn optional_text(name: &'static str) -> Self {
        Self { name, rule: FieldRule::Text { min_len: 0 }, required: false }
    }

    /// Required string with a minimum length.
    pub const fn min_len_text(name: &'static str, min_len: usize) -> Self {
        Self { name, rule: FieldRule::Text { min_len }, required: true }
    }

    /// Required email address.
    pub const fn email(name: &'static str) -> Self {
        Self { name, rule: FieldRule::Email, required: true }
    }

    /// Required decimal string.
    pub const fn required_decimal(name: &'static str) -> Self {
        Self { name, rule: FieldRule::Decimal, required: true }
    }

    /// Optional decimal string.
    pub const fn optional_decimal(name: &'static str) -> Self {
        Self { name, rule: FieldRule::Decimal, required: false }
    }

    /// Required parseable date string.
    pub const fn required_date(name: &'static str) -> Self {
        Self { name, rule: FieldRule::Date, required: true }
    }

    /// Optional parseable date string.
    pub const fn optional_date(name: &'static str) -> Self {
        Self { name, rule: FieldRule::Date, required: false }
    }

    /// Required whole number.
    pub const fn required_int(name: &'static str) -> Self {
        Self { name, rule: FieldRule::Integer { min: None }, required: true }
    }

    /// Optional whole number.
    pub const fn optional_int(name: &'static str) -> Self {
        Self { name, rule: FieldRule::Integer { min: None }, required: false }
    }

    /// Required whole number with a lower bound.
    pub const fn int_at_least(name: &'static str, min: i64) -> Self {
        Self { name, rule: FieldRule::Integer { min: Some(min) }, required: true }
    }

    /// Required enum member.
    pub const fn required_enum(name: &'static str, variants: &'static [&'static str]) -> Self {
        Self { name, rule: FieldRule::Enum { variants }, required: true }
    }

    /// Optional boolean.
    pub const fn optional_bool(name: &'static str) -> Self {
        Self { name, rule: FieldRule::Bool, required: false }
    }
}

/// Credentials plus optional role/member links.
pub static USUARIO_RULES: &[FieldDef] = &[
    FieldDef::required_text("username"),
    FieldDef::min_len_text("password", 6),
    FieldDef::optional_int("rolId"),
    FieldDef::optional_int("idSocio"),
];

/// System parameter.
pub static VARIABLES_RULES: &[FieldDef] = &[
    FieldDef::required_text("descripcion"),
    FieldDef::required_decimal("valor"),
];

/// Role label.
pub static ROL_RULES: &[FieldDef] = &[FieldDef::required_text("descripcion")];

/// Member identity. `telefono` is collected by the sign-up screen but
/// carries no constraint of its own.
pub static SOCIO_RULES: &[FieldDef] = &[
    FieldDef::required_text("cedula"),
    FieldDef::required_text("nombre"),
    FieldDef::optional_date("fechaNacimiento"),
    FieldDef::optional_date("fechaIngreso"),
    FieldDef::optional_date("fechaSalida"),
    FieldDef::optional_decimal("montoAccion"),
    FieldDef::optional_int("multiplicador"),
    FieldDef::email("correo"),
    FieldDef::optional_text("telefono"),
];

/// Share purchase event.
pub static ACCION_RULES: &[FieldDef] = &[
    FieldDef::required_int("socioId"),
    FieldDef::required_date("fecha"),
    FieldDef::required_decimal("monto_colones"),
    FieldDef::int_at_least("cantidadAcciones", 1),
    FieldDef::optional_text("periodo"),
    FieldDef::optional_int("pesoMultiplicador"),
];

/// Loan.
pub static PRESTAMO_RULES: &[FieldDef] = &[
    FieldDef::required_int("socioId"),
    FieldDef::required_decimal("monto"),
    FieldDef::int_at_least("plazo", 1),
    FieldDef::optional_text("motivo"),
    FieldDef::required_enum("modalidad", Modalidad::variants()),
    FieldDef::required_decimal("saldoCapital"),
    FieldDef::required_decimal("saldoInteresOrdinario"),
    FieldDef::required_decimal("saldoInteresMoratorio"),
];

/// Payment / installment.
pub static PAGO_RULES: &[FieldDef] = &[
    FieldDef::required_int("socioId"),
    FieldDef::optional_int("prestamoId"),
    FieldDef::required_date("fechaProyectada"),
    FieldDef::optional_date("fechaReal"),
    FieldDef::optional_int("diasAtraso"),
    FieldDef::required_decimal("monto"),
    FieldDef::required_decimal("interesOrdinario"),
    FieldDef::required_enum("tipoCuota", TipoCuota::variants()),
    FieldDef::optional_decimal("interesExtraordinario"),
];

/// Request / application.
pub static SOLICITUD_RULES: &[FieldDef] = &[
    FieldDef::required_int("socioId"),
    FieldDef::required_date("fechaSolicitud"),
    FieldDef::optional_text("detalle"),
    FieldDef::optional_bool("aprobada"),
    FieldDef::optional_date("fechaAprobacion"),
    FieldDef::optional_bool("cerrada"),
];

/// Vote on a request.
pub static VOTACION_RULES: &[FieldDef] = &[
    FieldDef::required_int("socioId"),
    FieldDef::required_int("solicitudId"),
    FieldDef::required_date("fecha"),
    FieldDef::optional_text("hora"),
    FieldDef::optional_text("observacion"),
    FieldDef::optional_bool("aprueba"),
];
