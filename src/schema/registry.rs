//! Entity registry
//!
//! An explicit mapping from entity name to its validator/mapper pair,
//! constructed once at startup and passed by reference to callers.
//! Nothing is registered implicitly; the full entity list lives in
//! [`Registry::bootstrap`].

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use thiserror::Error;

use crate::mapper::{
    map_accion, map_pago, map_prestamo, map_rol, map_socio, map_solicitud, map_usuario,
    map_variables, map_votacion, MapError, MapResult,
};
use crate::model::{
    AccionForm, AccionPersist, PagoForm, PagoPersist, PrestamoForm, PrestamoPersist, RolForm,
    RolPersist, SocioForm, SocioPersist, SolicitudForm, SolicitudPersist, UsuarioForm,
    UsuarioPersist, VariablesForm, VariablesPersist, VotacionForm, VotacionPersist,
};

use super::errors::ValidationError;
use super::types::{
    FieldDef, ACCION_RULES, PAGO_RULES, PRESTAMO_RULES, ROL_RULES, SOCIO_RULES, SOLICITUD_RULES,
    USUARIO_RULES, VARIABLES_RULES, VOTACION_RULES,
};
use super::validator::{validate, Mode};

/// Failure anywhere in the validate-then-map pipeline.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The entity name is not registered.
    #[error("unknown entity '{0}'")]
    UnknownEntity(String),

    /// The candidate violated its entity's rule table.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Mapping rejected the (already validated) form.
    #[error(transparent)]
    Map(#[from] MapError),

    /// The candidate did not decode into the entity's form shape.
    #[error("malformed candidate: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Ties a form shape to its rule table and persistence mapping.
///
/// The trait is the seam the registry is built over; implementations
/// live here so the model and mapper layers stay independent of the
/// schema subsystem.
pub trait FormEntity: DeserializeOwned {
    /// Registry name.
    const NAME: &'static str;

    /// Persistence-shaped counterpart.
    type Persist: Serialize;

    /// Declarative rule table for this entity's fields.
    fn rules() -> &'static [FieldDef];

    /// Pure mapping to the persistence shape. Assumes a validated form.
    fn to_persist(&self) -> MapResult<Self::Persist>;
}

/// Validates a create candidate and maps it to its typed persistence
/// shape in one step.
pub fn validate_and_map<E: FormEntity>(candidate: &Value) -> Result<E::Persist, RegistryError> {
    validate(E::rules(), candidate, Mode::Create)?;
    let form: E = serde_json::from_value(candidate.clone())?;
    Ok(form.to_persist()?)
}

fn map_value<E: FormEntity>(candidate: &Value) -> Result<Value, RegistryError> {
    let form: E = serde_json::from_value(candidate.clone())?;
    Ok(serde_json::to_value(form.to_persist()?)?)
}

fn validate_and_map_value<E: FormEntity>(candidate: &Value) -> Result<Value, RegistryError> {
    Ok(serde_json::to_value(validate_and_map::<E>(candidate)?)?)
}

struct EntityEntry {
    rules: &'static [FieldDef],
    map: fn(&Value) -> Result<Value, RegistryError>,
    validate_and_map: fn(&Value) -> Result<Value, RegistryError>,
}

/// The entity registry. Build it once with [`Registry::bootstrap`] and
/// share it by reference.
pub struct Registry {
    entries: BTreeMap<&'static str, EntityEntry>,
}

impl Registry {
    /// Registers every entity the membership registry knows about.
    pub fn bootstrap() -> Self {
        let mut registry = Self { entries: BTreeMap::new() };
        registry.register::<UsuarioForm>();
        registry.register::<VariablesForm>();
        registry.register::<RolForm>();
        registry.register::<SocioForm>();
        registry.register::<AccionForm>();
        registry.register::<PrestamoForm>();
        registry.register::<PagoForm>();
        registry.register::<SolicitudForm>();
        registry.register::<VotacionForm>();
        registry
    }

    fn register<E: FormEntity>(&mut self) {
        self.entries.insert(
            E::NAME,
            EntityEntry {
                rules: E::rules(),
                map: map_value::<E>,
                validate_and_map: validate_and_map_value::<E>,
            },
        );
    }

    fn entry(&self, entity: &str) -> Result<&EntityEntry, RegistryError> {
        self.entries
            .get(entity)
            .ok_or_else(|| RegistryError::UnknownEntity(entity.to_string()))
    }

    /// Registered entity names, in order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }

    /// Validates a candidate against an entity's rule table.
    pub fn validate(&self, entity: &str, candidate: &Value, mode: Mode) -> Result<(), RegistryError> {
        let entry = self.entry(entity)?;
        validate(entry.rules, candidate, mode)?;
        Ok(())
    }

    /// Maps a candidate to its persistence shape without validating.
    pub fn map(&self, entity: &str, candidate: &Value) -> Result<Value, RegistryError> {
        (self.entry(entity)?.map)(candidate)
    }

    /// The full submission pipeline over raw JSON: validate as a create
    /// candidate, then map.
    pub fn validate_and_map(&self, entity: &str, candidate: &Value) -> Result<Value, RegistryError> {
        (self.entry(entity)?.validate_and_map)(candidate)
    }
}

impl FormEntity for UsuarioForm {
    const NAME: &'static str = "usuario";
    type Persist = UsuarioPersist;
    fn rules() -> &'static [FieldDef] {
        USUARIO_RULES
    }
    fn to_persist(&self) -> MapResult<UsuarioPersist> {
        map_usuario(self)
    }
}

impl FormEntity for VariablesForm {
    const NAME: &'static str = "variables";
    type Persist = VariablesPersist;
    fn rules() -> &'static [FieldDef] {
        VARIABLES_RULES
    }
    fn to_persist(&self) -> MapResult<VariablesPersist> {
        map_variables(self)
    }
}

impl FormEntity for RolForm {
    const NAME: &'static str = "rol";
    type Persist = RolPersist;
    fn rules() -> &'static [FieldDef] {
        ROL_RULES
    }
    fn to_persist(&self) -> MapResult<RolPersist> {
        map_rol(self)
    }
}

impl FormEntity for SocioForm {
    const NAME: &'static str = "socio";
    type Persist = SocioPersist;
    fn rules() -> &'static [FieldDef] {
        SOCIO_RULES
    }
    fn to_persist(&self) -> MapResult<SocioPersist> {
        map_socio(self)
    }
}

impl FormEntity for AccionForm {
    const NAME: &'static str = "accion";
    type Persist = AccionPersist;
    fn rules() -> &'static [FieldDef] {
        ACCION_RULES
    }
    fn to_persist(&self) -> MapResult<AccionPersist> {
        map_accion(self)
    }
}

impl FormEntity for PrestamoForm {
    const NAME: &'static str = "prestamo";
    type Persist = PrestamoPersist;
    fn rules() -> &'static [FieldDef] {
        PRESTAMO_RULES
    }
    fn to_persist(&self) -> MapResult<PrestamoPersist> {
        map_prestamo(self)
    }
}

impl FormEntity for PagoForm {
    const NAME: &'static str = "pago";
    type Persist = PagoPersist;
    fn rules() -> &'static [FieldDef] {
        PAGO_RULES
    }
    fn to_persist(&self) -> MapResult<PagoPersist> {
        map_pago(self)
    }
}

impl FormEntity for SolicitudForm {
    const NAME: &'static str = "solicitud";
    type Persist = SolicitudPersist;
    fn rules() -> &'static [FieldDef] {
        SOLICITUD_RULES
    }
    fn to_persist(&self) -> MapResult<SolicitudPersist> {
        map_solicitud(self)
    }
}

impl FormEntity for VotacionForm {
    const NAME: &'static str = "votacion";
    type Persist = VotacionPersist;
    fn rules() -> &'static [FieldDef] {
        VOTACION_RULES
    }
    fn to_persist(&self) -> MapResult<VotacionPersist> {
        map_votacion(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bootstrap_registers_all_nine_entities() {
        let registry = Registry::bootstrap();
        let names: Vec<_> = registry.names().collect();
        assert_eq!(
            names,
            vec![
                "accion", "pago", "prestamo", "rol", "socio", "solicitud", "usuario",
                "variables", "votacion"
            ]
        );
    }

    #[test]
    fn test_unknown_entity_is_a_typed_error() {
        let registry = Registry::bootstrap();
        let result = registry.validate("dividendo", &json!({}), Mode::Create);
        assert!(matches!(result, Err(RegistryError::UnknownEntity(name)) if name == "dividendo"));

        // Lookups are case-sensitive.
        assert!(registry.map("Socio", &json!({})).is_err());
    }

    #[test]
    fn test_typed_pipeline() {
        let candidate = json!({
            "username": "ana",
            "password": "secret1"
        });

        let record = validate_and_map::<UsuarioForm>(&candidate).unwrap();
        assert_eq!(record.username, "ana");
        assert_eq!(record.rol_id, None);
    }

    #[test]
    fn test_value_pipeline_produces_explicit_nulls() {
        let registry = Registry::bootstrap();
        let candidate = json!({
            "socioId": 1,
            "fechaSolicitud": "2024-01-01"
        });

        let record = registry.validate_and_map("solicitud", &candidate).unwrap();
        assert_eq!(record["aprobada"], json!(false));
        assert_eq!(record["cerrada"], json!(false));
        assert_eq!(record["detalle"], json!(null));
        assert!(record.as_object().unwrap().contains_key("fechaAprobacion"));
    }

    #[test]
    fn test_pipeline_rejects_before_mapping() {
        let registry = Registry::bootstrap();
        let candidate = json!({ "username": "ana" });

        let err = registry.validate_and_map("usuario", &candidate).unwrap_err();
        match err {
            RegistryError::Validation(e) => {
                assert_eq!(e.message_for("password"), Some("required"));
            }
            other => panic!("expected a validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_map_without_validation_applies_defaults() {
        let registry = Registry::bootstrap();
        let record = registry.map("prestamo", &json!({})).unwrap();
        assert_eq!(record["socioId"], json!(0));
        assert_eq!(record["modalidad"], json!("FRANCES"));
    }
}
