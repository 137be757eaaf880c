//! Document assembly: normalization, block validation and the top-level
//! entry point.
//!
//! Validation runs in dependency order — primitive/shape checks on every
//! leaf, ICMS shape resolution per line item, then the conditional
//! cross-field rules — and never short-circuits: the caller receives every
//! finding of the pass in one list.

mod ide;
mod item;
mod normalize;
mod party;
pub mod rules;
mod tax;
mod trade;

pub use ide::validate_ide;
pub use item::validate_det;
pub use normalize::normalize;
pub use party::{
    validate_aut_xml, validate_dest, validate_emit, validate_endereco, validate_entrega,
    validate_retirada,
};
pub use tax::validate_imposto;
pub use trade::{validate_cobr, validate_inf_adic, validate_pag, validate_total, validate_transp};

use crate::core::uf::Uf;
use crate::core::{Nfe, NfeError, ValidationError};

/// External context the document validator depends on.
///
/// Passed explicitly into [`validate_nfe`]: the benefit-code rule both
/// applies and words its message according to the issuing state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationConfig {
    /// State of the issuing party.
    pub uf_emitente: Uf,
}

/// Validate a document against the full constraint and rule catalogue.
///
/// On success returns the normalized document: free text trimmed and
/// accent-stripped, defaulted fields filled. On failure returns every
/// finding collected over the whole pass.
pub fn validate_nfe(nfe: &Nfe, config: &ValidationConfig) -> Result<Nfe, NfeError> {
    let mut doc = nfe.clone();
    normalize(&mut doc);

    let errors = validate_normalized(&doc, config);
    if errors.is_empty() {
        Ok(doc)
    } else {
        Err(NfeError::Validacao(errors))
    }
}

/// Run every validator over an already-normalized document.
pub fn validate_normalized(doc: &Nfe, config: &ValidationConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    validate_ide(&doc.ide, &mut errors);
    validate_emit(&doc.emit, &mut errors);
    validate_dest(&doc.dest, &mut errors);
    if let Some(retirada) = &doc.retirada {
        validate_retirada(retirada, &mut errors);
    }
    if let Some(entrega) = &doc.entrega {
        validate_entrega(entrega, &mut errors);
    }
    validate_aut_xml(&doc.aut_xml, &mut errors);

    if doc.det.is_empty() || doc.det.len() > 990 {
        errors.push(ValidationError::structural(
            "det",
            "a nota deve conter entre 1 e 990 itens",
        ));
    }
    for (i, det) in doc.det.iter().enumerate() {
        validate_det(det, i, config.uf_emitente, &mut errors);
    }

    validate_total(&doc.total, &mut errors);
    validate_transp(&doc.transp, &mut errors);
    if let Some(cobr) = &doc.cobr {
        validate_cobr(cobr, &mut errors);
    }
    validate_pag(&doc.pag, &mut errors);
    if let Some(inf_adic) = &doc.inf_adic {
        validate_inf_adic(inf_adic, &mut errors);
    }

    errors
}
