//! UI-facing form shapes
//!
//! One canonical struct per entity. Every member is optional: a create
//! form and a partial-update form deserialize into the same shape, and
//! the validator decides which absences are errors. Field names follow
//! the wire contract of the registry API (camelCase, with the one
//! historical exception of `monto_colones`).

use serde::{Deserialize, Serialize};

use super::enums::{Modalidad, TipoCuota};
use super::{DateString, DecimalString};

/// Account credentials, optionally linked to a role and a member.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsuarioForm {
    pub username: Option<String>,
    pub password: Option<String>,
    pub rol_id: Option<i64>,
    pub id_socio: Option<i64>,
}

/// System parameter: a named decimal value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariablesForm {
    pub descripcion: Option<String>,
    pub valor: Option<DecimalString>,
}

/// Role label.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RolForm {
    pub descripcion: Option<String>,
}

/// Member identity as collected at sign-up.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocioForm {
    pub cedula: Option<String>,
    pub nombre: Option<String>,
    pub fecha_nacimiento: Option<DateString>,
    pub fecha_ingreso: Option<DateString>,
    pub fecha_salida: Option<DateString>,
    pub monto_accion: Option<DecimalString>,
    pub multiplicador: Option<i64>,
    pub correo: Option<String>,
    pub telefono: Option<String>,
}

/// Share purchase event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccionForm {
    pub socio_id: Option<i64>,
    pub fecha: Option<DateString>,
    #[serde(rename = "monto_colones")]
    pub monto_colones: Option<DecimalString>,
    pub cantidad_acciones: Option<i64>,
    pub periodo: Option<String>,
    pub peso_multiplicador: Option<i64>,
}

/// Loan request: amount, term in months, amortization modality and the
/// running balances.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrestamoForm {
    pub socio_id: Option<i64>,
    pub monto: Option<DecimalString>,
    pub plazo: Option<i64>,
    pub motivo: Option<String>,
    pub modalidad: Option<Modalidad>,
    pub saldo_capital: Option<DecimalString>,
    pub saldo_interes_ordinario: Option<DecimalString>,
    pub saldo_interes_moratorio: Option<DecimalString>,
}

/// Payment / installment against a loan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagoForm {
    pub socio_id: Option<i64>,
    pub prestamo_id: Option<i64>,
    pub fecha_proyectada: Option<DateString>,
    pub fecha_real: Option<DateString>,
    pub dias_atraso: Option<i64>,
    pub monto: Option<DecimalString>,
    pub interes_ordinario: Option<DecimalString>,
    pub tipo_cuota: Option<TipoCuota>,
    pub interes_extraordinario: Option<DecimalString>,
}

/// Request / application filed by a member.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolicitudForm {
    pub socio_id: Option<i64>,
    pub fecha_solicitud: Option<DateString>,
    pub detalle: Option<String>,
    pub aprobada: Option<bool>,
    pub fecha_aprobacion: Option<DateString>,
    pub cerrada: Option<bool>,
}

/// Vote cast on a request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VotacionForm {
    pub socio_id: Option<i64>,
    pub solicitud_id: Option<i64>,
    pub fecha: Option<DateString>,
    /// "HH:mm" when the UI supplies it.
    pub hora: Option<String>,
    pub observacion: Option<String>,
    pub aprueba: Option<bool>,
}
