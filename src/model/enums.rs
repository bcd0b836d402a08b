//! Wire-level enumerations shared by the form and persist shapes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Loan amortization modality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Modalidad {
    /// German schedule: constant principal, decreasing installments.
    Aleman,
    /// French schedule: constant installments.
    Frances,
}

impl Modalidad {
    /// Wire literals accepted for this enum, in declaration order.
    pub const fn variants() -> &'static [&'static str] {
        &["ALEMAN", "FRANCES"]
    }

    /// Returns the wire literal.
    pub fn as_str(&self) -> &'static str {
        match self {
            Modalidad::Aleman => "ALEMAN",
            Modalidad::Frances => "FRANCES",
        }
    }
}

impl Default for Modalidad {
    /// Substituted by the mapper when an update form omits the field.
    fn default() -> Self {
        Modalidad::Frances
    }
}

impl fmt::Display for Modalidad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Installment kind on a payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TipoCuota {
    /// Scheduled installment.
    Ordinaria,
    /// Extra payment outside the schedule.
    Adicional,
}

impl TipoCuota {
    /// Wire literals accepted for this enum, in declaration order.
    pub const fn variants() -> &'static [&'static str] {
        &["ORDINARIA", "ADICIONAL"]
    }

    /// Returns the wire literal.
    pub fn as_str(&self) -> &'static str {
        match self {
            TipoCuota::Ordinaria => "ORDINARIA",
            TipoCuota::Adicional => "ADICIONAL",
        }
    }
}

impl Default for TipoCuota {
    /// Substituted by the mapper when an update form omits the field.
    fn default() -> Self {
        TipoCuota::Ordinaria
    }
}

impl fmt::Display for TipoCuota {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_modalidad_wire_literals() {
        assert_eq!(serde_json::to_value(Modalidad::Aleman).unwrap(), json!("ALEMAN"));
        assert_eq!(serde_json::to_value(Modalidad::Frances).unwrap(), json!("FRANCES"));

        let parsed: Modalidad = serde_json::from_value(json!("ALEMAN")).unwrap();
        assert_eq!(parsed, Modalidad::Aleman);
    }

    #[test]
    fn test_tipo_cuota_wire_literals() {
        assert_eq!(serde_json::to_value(TipoCuota::Ordinaria).unwrap(), json!("ORDINARIA"));

        let parsed: TipoCuota = serde_json::from_value(json!("ADICIONAL")).unwrap();
        assert_eq!(parsed, TipoCuota::Adicional);
    }

    #[test]
    fn test_lowercase_literal_rejected() {
        assert!(serde_json::from_value::<Modalidad>(json!("aleman")).is_err());
        assert!(serde_json::from_value::<TipoCuota>(json!("ordinaria")).is_err());
    }

    #[test]
    fn test_mapper_defaults() {
        assert_eq!(Modalidad::default(), Modalidad::Frances);
        assert_eq!(TipoCuota::default(), TipoCuota::Ordinaria);
    }
}
