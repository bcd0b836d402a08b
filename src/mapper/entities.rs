//! Per-entity form -> persist mapping
//!
//! Each function resolves its entity's fields the same way: missing
//! required strings become `""`, missing required numerics become 0,
//! missing enums take their documented defaults, missing booleans
//! become `false`, and absent optional fields become `None` so the
//! persisted record always carries an explicit null. Defaults exist so
//! partial-update forms can flow through the same functions; callers
//! validate first when they need rejection.

use crate::model::{
    AccionForm, AccionPersist, PagoForm, PagoPersist, PrestamoForm, PrestamoPersist, RolForm,
    RolPersist, SocioForm, SocioPersist, SolicitudForm, SolicitudPersist, UsuarioForm,
    UsuarioPersist, VariablesForm, VariablesPersist, VotacionForm, VotacionPersist,
};

use super::decimal::to_decimal4;
use super::errors::MapResult;

/// Required decimal: absent means zero.
fn decimal_or_zero(value: &Option<String>) -> MapResult<f64> {
    to_decimal4(value.as_deref().unwrap_or("0").into())
}

/// Optional decimal: absent stays null.
fn decimal_or_null(value: &Option<String>) -> MapResult<Option<f64>> {
    value.as_deref().map(|s| to_decimal4(s.into())).transpose()
}

pub fn map_usuario(form: &UsuarioForm) -> MapResult<UsuarioPersist> {
    Ok(UsuarioPersist {
        username: form.username.clone().unwrap_or_default(),
        password: form.password.clone().unwrap_or_default(),
        rol_id: form.rol_id,
        id_socio: form.id_socio,
    })
}

pub fn map_variables(form: &VariablesForm) -> MapResult<VariablesPersist> {
    Ok(VariablesPersist {
        descripcion: form.descripcion.clone().unwrap_or_default(),
        valor: decimal_or_zero(&form.valor)?,
    })
}

pub fn map_rol(form: &RolForm) -> MapResult<RolPersist> {
    Ok(RolPersist {
        descripcion: form.descripcion.clone().unwrap_or_default(),
    })
}

pub fn map_socio(form: &SocioForm) -> MapResult<SocioPersist> {
    Ok(SocioPersist {
        cedula: form.cedula.clone().unwrap_or_default(),
        nombre: form.nombre.clone().unwrap_or_default(),
        fecha_nacimiento: form.fecha_nacimiento.clone(),
        fecha_ingreso: form.fecha_ingreso.clone(),
        fecha_salida: form.fecha_salida.clone(),
        monto_accion: decimal_or_null(&form.monto_accion)?,
        multiplicador: form.multiplicador,
        correo: form.correo.clone().unwrap_or_default(),
        telefono: form.telefono.clone().unwrap_or_default(),
    })
}

pub fn map_accion(form: &AccionForm) -> MapResult<AccionPersist> {
    Ok(AccionPersist {
        socio_id: form.socio_id.unwrap_or(0),
        fecha: form.fecha.clone().unwrap_or_default(),
        monto_colones: decimal_or_zero(&form.monto_colones)?,
        cantidad_acciones: form.cantidad_acciones.unwrap_or(0),
        periodo: form.periodo.clone(),
        peso_multiplicador: form.peso_multiplicador,
    })
}

pub fn map_prestamo(form: &PrestamoForm) -> MapResult<PrestamoPersist> {
    Ok(PrestamoPersist {
        socio_id: form.socio_id.unwrap_or(0),
        monto: decimal_or_zero(&form.monto)?,
        plazo: form.plazo.unwrap_or(0),
        motivo: form.motivo.clone(),
        modalidad: form.modalidad.unwrap_or_default(),
        saldo_capital: decimal_or_zero(&form.saldo_capital)?,
        saldo_interes_ordinario: decimal_or_zero(&form.saldo_interes_ordinario)?,
        saldo_interes_moratorio: decimal_or_zero(&form.saldo_interes_moratorio)?,
    })
}

pub fn map_pago(form: &PagoForm) -> MapResult<PagoPersist> {
    Ok(PagoPersist {
        socio_id: form.socio_id.unwrap_or(0),
        prestamo_id: form.prestamo_id,
        fecha_proyectada: form.fecha_proyectada.clone().unwrap_or_default(),
        fecha_real: form.fecha_real.clone(),
        dias_atraso: form.dias_atraso,
        monto: decimal_or_zero(&form.monto)?,
        interes_ordinario: decimal_or_zero(&form.interes_ordinario)?,
        tipo_cuota: form.tipo_cuota.unwrap_or_default(),
        interes_extraordinario: decimal_or_null(&form.interes_extraordinario)?,
    })
}

pub fn map_solicitud(form: &SolicitudForm) -> MapResult<SolicitudPersist> {
    Ok(SolicitudPersist {
        socio_id: form.socio_id.unwrap_or(0),
        fecha_solicitud: form.fecha_solicitud.clone().unwrap_or_default(),
        detalle: form.detalle.clone(),
        aprobada: form.aprobada.unwrap_or(false),
        fecha_aprobacion: form.fecha_aprobacion.clone(),
        cerrada: form.cerrada.unwrap_or(false),
    })
}

pub fn map_votacion(form: &VotacionForm) -> MapResult<VotacionPersist> {
    Ok(VotacionPersist {
        socio_id: form.socio_id.unwrap_or(0),
        solicitud_id: form.solicitud_id.unwrap_or(0),
        fecha: form.fecha.clone().unwrap_or_default(),
        hora: form.hora.clone(),
        observacion: form.observacion.clone(),
        aprueba: form.aprueba.unwrap_or(false),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Modalidad, TipoCuota};

    #[test]
    fn test_socio_mapping_resolves_optionals() {
        let form = SocioForm {
            cedula: Some("123".into()),
            nombre: Some("Ana".into()),
            fecha_nacimiento: Some("1990-01-01".into()),
            fecha_ingreso: Some("2024-01-01".into()),
            fecha_salida: None,
            monto_accion: Some("100.5".into()),
            multiplicador: Some(3),
            correo: Some("ana@x.com".into()),
            telefono: Some("8888".into()),
        };

        let record = map_socio(&form).unwrap();
        assert_eq!(record.monto_accion, Some(100.5));
        assert_eq!(record.multiplicador, Some(3));
        assert_eq!(record.fecha_salida, None);
        assert_eq!(record.correo, "ana@x.com");
    }

    #[test]
    fn test_usuario_foreign_keys_normalize_to_null() {
        let record = map_usuario(&UsuarioForm {
            username: Some("ana".into()),
            password: Some("secret1".into()),
            rol_id: None,
            id_socio: None,
        })
        .unwrap();

        assert_eq!(record.rol_id, None);
        assert_eq!(record.id_socio, None);
    }

    #[test]
    fn test_solicitud_booleans_default_to_false() {
        let record = map_solicitud(&SolicitudForm {
            socio_id: Some(1),
            fecha_solicitud: Some("2024-01-01".into()),
            ..Default::default()
        })
        .unwrap();

        assert!(!record.aprobada);
        assert!(!record.cerrada);
        assert_eq!(record.fecha_aprobacion, None);
    }

    #[test]
    fn test_prestamo_defaults_on_partial_form() {
        let record = map_prestamo(&PrestamoForm {
            monto: Some("150000".into()),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(record.socio_id, 0);
        assert_eq!(record.plazo, 0);
        assert_eq!(record.monto, 150000.0);
        assert_eq!(record.modalidad, Modalidad::Frances);
        assert_eq!(record.saldo_capital, 0.0);
    }

    #[test]
    fn test_pago_preserves_enum_and_nulls_fecha_real() {
        let record = map_pago(&PagoForm {
            socio_id: Some(1),
            fecha_proyectada: Some("2024-02-01".into()),
            monto: Some("5000".into()),
            interes_ordinario: Some("250.75".into()),
            tipo_cuota: Some(TipoCuota::Adicional),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(record.tipo_cuota, TipoCuota::Adicional);
        assert_eq!(record.fecha_real, None);
        assert_eq!(record.prestamo_id, None);
        assert_eq!(record.interes_extraordinario, None);
        assert_eq!(record.interes_ordinario, 250.75);
    }

    #[test]
    fn test_unparsable_decimal_is_an_error() {
        let result = map_variables(&VariablesForm {
            descripcion: Some("tasa".into()),
            valor: Some("abc".into()),
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_votacion_defaults() {
        let record = map_votacion(&VotacionForm {
            socio_id: Some(4),
            solicitud_id: Some(9),
            fecha: Some("2024-03-01".into()),
            ..Default::default()
        })
        .unwrap();

        assert!(!record.aprueba);
        assert_eq!(record.hora, None);
        assert_eq!(record.observacion, None);
    }
}
