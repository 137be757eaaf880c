use thiserror::Error;

/// Errors surfaced by the library entry points.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum NfeError {
    /// One or more validation findings. The document was not accepted.
    #[error("documento rejeitado: {}", format_findings(.0))]
    Validacao(Vec<ValidationError>),
}

fn format_findings(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Classification of a validation finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstraintKind {
    /// Wrong shape: missing required field, empty list, out-of-bounds count.
    Structural,
    /// Value outside a closed code table (includes "no ICMS shape matched").
    DomainEnum,
    /// Fixed-length / all-digit / pattern violation.
    Format,
    /// CNPJ/CPF check-digit mismatch.
    Checksum,
    /// Too many decimal places for the field.
    Precision,
    /// Conditional business rule between fields failed.
    CrossField,
}

impl ConstraintKind {
    /// Stable identifier used in error reports.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Structural => "estrutura",
            Self::DomainEnum => "dominio",
            Self::Format => "formato",
            Self::Checksum => "digito-verificador",
            Self::Precision => "precisao",
            Self::CrossField => "regra-condicional",
        }
    }
}

/// A single validation finding with field path and message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dot-separated path to the field, using the NF-e tag names
    /// (e.g. "dest.indIEDest", "det[3].imposto.icms.vBC").
    pub field: String,
    /// Which constraint family was violated.
    pub kind: ConstraintKind,
    /// Human-readable description in the fiscal authority's language.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}: {}", self.kind.code(), self.field, self.message)
    }
}

impl ValidationError {
    pub fn new(
        kind: ConstraintKind,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            kind,
            message: message.into(),
        }
    }

    pub fn structural(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ConstraintKind::Structural, field, message)
    }

    pub fn domain(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ConstraintKind::DomainEnum, field, message)
    }

    pub fn format(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ConstraintKind::Format, field, message)
    }

    pub fn checksum(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ConstraintKind::Checksum, field, message)
    }

    pub fn precision(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ConstraintKind::Precision, field, message)
    }

    pub fn cross_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ConstraintKind::CrossField, field, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_kind_code() {
        let err = ValidationError::checksum("dest.CNPJ", "dígito verificador inválido");
        assert_eq!(
            err.to_string(),
            "[digito-verificador] dest.CNPJ: dígito verificador inválido"
        );
    }

    #[test]
    fn nfe_error_joins_findings() {
        let err = NfeError::Validacao(vec![
            ValidationError::structural("det", "a nota deve ter ao menos um item"),
            ValidationError::domain("ide.tpNF", "valor fora da tabela"),
        ]);
        let text = err.to_string();
        assert!(text.contains("det"));
        assert!(text.contains("ide.tpNF"));
    }
}
