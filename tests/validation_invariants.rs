//! Validation invariant tests
//!
//! - Validation is deterministic
//! - Required fields must be present on create candidates
//! - Update candidates never fail on omitted fields
//! - Exactly one message per offending field
//! - Error maps contain only the offending fields

use serde_json::{json, Value};
use socioforms::schema::{validate, Mode, Registry};

// =============================================================================
// Helper Functions
// =============================================================================

/// A minimal valid create candidate for every entity.
fn valid_candidates() -> Vec<(&'static str, Value)> {
    vec![
        ("usuario", json!({ "username": "ana", "password": "secret1" })),
        ("variables", json!({ "descripcion": "tasa base", "valor": "4.25" })),
        ("rol", json!({ "descripcion": "tesorero" })),
        (
            "socio",
            json!({ "cedula": "1-2345-6789", "nombre": "Ana", "correo": "ana@x.com" }),
        ),
        (
            "accion",
            json!({
                "socioId": 1,
                "fecha": "2024-01-01",
                "monto_colones": "100.5",
                "cantidadAcciones": 1
            }),
        ),
        (
            "prestamo",
            json!({
                "socioId": 1,
                "monto": "150000",
                "plazo": 12,
                "modalidad": "FRANCES",
                "saldoCapital": "150000",
                "saldoInteresOrdinario": "0",
                "saldoInteresMoratorio": "0"
            }),
        ),
        (
            "pago",
            json!({
                "socioId": 1,
                "fechaProyectada": "2024-02-01",
                "monto": "5000",
                "interesOrdinario": "250",
                "tipoCuota": "ORDINARIA"
            }),
        ),
        ("solicitud", json!({ "socioId": 1, "fechaSolicitud": "2024-01-01" })),
        (
            "votacion",
            json!({ "socioId": 1, "solicitudId": 2, "fecha": "2024-03-01" }),
        ),
    ]
}

// =============================================================================
// Determinism
// =============================================================================

/// Same candidate validates the same way every time.
#[test]
fn test_validation_is_deterministic() {
    let registry = Registry::bootstrap();

    for (entity, candidate) in valid_candidates() {
        for _ in 0..50 {
            assert!(
                registry.validate(entity, &candidate, Mode::Create).is_ok(),
                "{} should validate",
                entity
            );
        }
    }
}

/// An invalid candidate fails consistently with the same messages.
#[test]
fn test_invalid_candidate_fails_consistently() {
    let candidate = json!({ "username": "", "password": "x" });

    let first = validate(socioforms::schema::USUARIO_RULES, &candidate, Mode::Create).unwrap_err();
    for _ in 0..50 {
        let again =
            validate(socioforms::schema::USUARIO_RULES, &candidate, Mode::Create).unwrap_err();
        assert_eq!(first, again);
    }
}

// =============================================================================
// Required Fields
// =============================================================================

/// Every valid create candidate passes; dropping any required field
/// fails with that field in the error map.
#[test]
fn test_dropping_any_required_field_fails() {
    let registry = Registry::bootstrap();

    for (entity, candidate) in valid_candidates() {
        let fields: Vec<String> = candidate.as_object().unwrap().keys().cloned().collect();

        for field in fields {
            let mut broken = candidate.clone();
            broken.as_object_mut().unwrap().remove(&field);

            let result = registry.validate(entity, &broken, Mode::Create);
            let err = match result {
                Err(socioforms::schema::RegistryError::Validation(err)) => err,
                other => panic!("{}.{}: expected validation failure, got {:?}", entity, field, other),
            };
            assert_eq!(
                err.message_for(&field),
                Some("required"),
                "{}.{}",
                entity,
                field
            );
        }
    }
}

/// Omitting an optional field never produces an error.
#[test]
fn test_optional_fields_may_be_omitted() {
    let registry = Registry::bootstrap();

    // The minimal candidates above already omit every optional field.
    for (entity, candidate) in valid_candidates() {
        assert!(registry.validate(entity, &candidate, Mode::Create).is_ok(), "{}", entity);
    }
}

// =============================================================================
// Update Semantics
// =============================================================================

/// An empty update candidate is always valid.
#[test]
fn test_empty_update_candidate_is_valid() {
    let registry = Registry::bootstrap();

    for (entity, _) in valid_candidates() {
        assert!(
            registry.validate(entity, &json!({}), Mode::Update).is_ok(),
            "{}",
            entity
        );
    }
}

/// A field present on an update candidate still obeys its rule.
#[test]
fn test_update_candidate_checks_present_fields() {
    let registry = Registry::bootstrap();

    let result = registry.validate("socio", &json!({ "correo": "nope" }), Mode::Update);
    let err = match result {
        Err(socioforms::schema::RegistryError::Validation(err)) => err,
        other => panic!("expected validation failure, got {:?}", other),
    };
    assert_eq!(err.message_for("correo"), Some("invalid email address"));
}

// =============================================================================
// Error Map Shape
// =============================================================================

/// A candidate missing only `correo` fails with exactly that key.
#[test]
fn test_error_map_contains_only_offending_fields() {
    let registry = Registry::bootstrap();
    let candidate = json!({
        "cedula": "123",
        "nombre": "Ana",
        "telefono": "8888"
    });

    let err = match registry.validate("socio", &candidate, Mode::Create) {
        Err(socioforms::schema::RegistryError::Validation(err)) => err,
        other => panic!("expected validation failure, got {:?}", other),
    };

    assert_eq!(err.len(), 1);
    assert!(err.message_for("correo").is_some());
}

/// Multiple violations on one field yield a single message.
#[test]
fn test_one_message_per_field() {
    // Empty string: too short for both the min-6 rule and any other
    // reading of the field - still one message.
    let candidate = json!({ "username": "ana", "password": "" });

    let err = validate(socioforms::schema::USUARIO_RULES, &candidate, Mode::Create).unwrap_err();
    assert_eq!(err.len(), 1);
    assert_eq!(err.message_for("password"), Some("minimum 6 characters"));
}
