//! Storage-facing record shapes
//!
//! What the registry endpoint receives after mapping: decimal strings
//! parsed to numbers, nullable columns as explicit `Option`s (an absent
//! form field serializes as JSON null, never as a missing key) and
//! boolean columns always populated.

use serde::{Deserialize, Serialize};

use super::enums::{Modalidad, TipoCuota};
use super::DateString;

/// Persisted account credentials.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsuarioPersist {
    pub username: String,
    pub password: String,
    pub rol_id: Option<i64>,
    pub id_socio: Option<i64>,
}

/// Persisted system parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariablesPersist {
    pub descripcion: String,
    /// Stored as DECIMAL(14,4).
    pub valor: f64,
}

/// Persisted role label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RolPersist {
    pub descripcion: String,
}

/// Persisted member identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocioPersist {
    pub cedula: String,
    pub nombre: String,
    pub fecha_nacimiento: Option<DateString>,
    pub fecha_ingreso: Option<DateString>,
    pub fecha_salida: Option<DateString>,
    pub monto_accion: Option<f64>,
    pub multiplicador: Option<i64>,
    pub correo: String,
    pub telefono: String,
}

/// Persisted share purchase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccionPersist {
    pub socio_id: i64,
    pub fecha: DateString,
    #[serde(rename = "monto_colones")]
    pub monto_colones: f64,
    pub cantidad_acciones: i64,
    pub periodo: Option<String>,
    pub peso_multiplicador: Option<i64>,
}

/// Persisted loan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrestamoPersist {
    pub socio_id: i64,
    pub monto: f64,
    /// Term in months.
    pub plazo: i64,
    pub motivo: Option<String>,
    pub modalidad: Modalidad,
    pub saldo_capital: f64,
    pub saldo_interes_ordinario: f64,
    pub saldo_interes_moratorio: f64,
}

/// Persisted payment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagoPersist {
    pub socio_id: i64,
    pub prestamo_id: Option<i64>,
    pub fecha_proyectada: DateString,
    pub fecha_real: Option<DateString>,
    pub dias_atraso: Option<i64>,
    pub monto: f64,
    pub interes_ordinario: f64,
    pub tipo_cuota: TipoCuota,
    pub interes_extraordinario: Option<f64>,
}

/// Persisted request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolicitudPersist {
    pub socio_id: i64,
    pub fecha_solicitud: DateString,
    pub detalle: Option<String>,
    pub aprobada: bool,
    pub fecha_aprobacion: Option<DateString>,
    pub cerrada: bool,
}

/// Persisted vote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VotacionPersist {
    pub socio_id: i64,
    pub solicitud_id: i64,
    pub fecha: DateString,
    pub hora: Option<String>,
    pub observacion: Option<String>,
    pub aprueba: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_absent_optionals_serialize_as_explicit_null() {
        let record = UsuarioPersist {
            username: "ana".into(),
            password: "hash".into(),
            rol_id: None,
            id_socio: Some(7),
        };

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value, json!({
            "username": "ana",
            "password": "hash",
            "rolId": null,
            "idSocio": 7
        }));
        // The key must exist even when the value is null.
        assert!(value.as_object().unwrap().contains_key("rolId"));
    }

    #[test]
    fn test_booleans_are_always_present() {
        let record = SolicitudPersist {
            socio_id: 1,
            fecha_solicitud: "2024-01-01".into(),
            detalle: None,
            aprobada: false,
            fecha_aprobacion: None,
            cerrada: false,
        };

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["aprobada"], json!(false));
        assert_eq!(value["cerrada"], json!(false));
    }
}
