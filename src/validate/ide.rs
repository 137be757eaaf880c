//! Identification block validation, including prior-document references.

use crate::core::constraint::*;
use crate::core::uf::Uf;
use crate::core::{Ide, NfRef, RefEcf, RefNf, RefNfModelo, RefNfProdutor, ValidationError};

const TP_NF: &[&str] = &["0", "1"];
const ID_DEST: &[&str] = &["1", "2", "3"];
const TP_IMP: &[&str] = &["0", "1", "2", "3"];
const FIN_NFE: &[&str] = &["1", "2", "3", "4"];
const IND_FINAL: &[&str] = &["0", "1"];
const IND_PRES: &[&str] = &["0", "1", "2", "3", "4", "5", "9"];
const IND_INTERMED: &[&str] = &["0", "1"];

/// Validate the identification block. Assumes the document was normalized
/// (series and emission timestamps already defaulted).
pub fn validate_ide(ide: &Ide, errors: &mut Vec<ValidationError>) {
    check_text(&ide.nat_op, 1, 60, "ide.natOp", errors);
    check_serie(ide.serie, "ide.serie", errors);
    check_n_nf(ide.n_nf, "ide.nNF", errors);
    check_code(&ide.tp_nf, TP_NF, "ide.tpNF", errors);
    check_code(&ide.id_dest, ID_DEST, "ide.idDest", errors);
    check_code(&ide.tp_imp, TP_IMP, "ide.tpImp", errors);
    check_code(&ide.fin_nfe, FIN_NFE, "ide.finNFe", errors);
    check_code(&ide.ind_final, IND_FINAL, "ide.indFinal", errors);
    check_code(&ide.ind_pres, IND_PRES, "ide.indPres", errors);
    if let Some(ind_intermed) = &ide.ind_intermed {
        check_code(ind_intermed, IND_INTERMED, "ide.indIntermed", errors);
    }

    if ide.nf_ref.len() > 500 {
        errors.push(ValidationError::structural(
            "ide.NFref",
            "a lista de documentos referenciados admite no máximo 500 entradas",
        ));
    }
    for (i, nf_ref) in ide.nf_ref.iter().enumerate() {
        validate_nf_ref(nf_ref, &format!("ide.NFref[{i}]"), errors);
    }
}

fn check_serie(serie: Option<u16>, field: &str, errors: &mut Vec<ValidationError>) {
    if serie.is_some_and(|s| s > 969) {
        errors.push(ValidationError::format(field, "a série deve estar entre 0 e 969"));
    }
}

fn check_n_nf(n_nf: u32, field: &str, errors: &mut Vec<ValidationError>) {
    if !(1..1_000_000_000).contains(&n_nf) {
        errors.push(ValidationError::format(
            field,
            "o número do documento deve estar entre 1 e 999999999",
        ));
    }
}

fn validate_nf_ref(nf_ref: &NfRef, prefix: &str, errors: &mut Vec<ValidationError>) {
    match nf_ref {
        NfRef::Nfe { ref_nfe, ref_nf } => {
            check_digits(ref_nfe, 44, &format!("{prefix}.refNFe"), errors);
            match ref_nf {
                RefNf::Modelo(modelo) => validate_ref_modelo(modelo, prefix, errors),
                RefNf::Produtor(produtor) => validate_ref_produtor(produtor, prefix, errors),
            }
        }
        NfRef::Ecf { ref_cte, ref_ecf } => {
            check_digits(ref_cte, 44, &format!("{prefix}.refCTe"), errors);
            validate_ref_ecf(ref_ecf, prefix, errors);
        }
    }
}

fn validate_ref_modelo(r: &RefNfModelo, prefix: &str, errors: &mut Vec<ValidationError>) {
    check_c_uf(r.c_uf, &format!("{prefix}.refNF.cUF"), errors);
    check_aamm(&r.aamm, &format!("{prefix}.refNF.AAMM"), errors);
    check_cnpj(&r.cnpj, &format!("{prefix}.refNF.CNPJ"), errors);
    check_code(&r.modelo, &["01", "02"], &format!("{prefix}.refNF.mod"), errors);
    check_serie(r.serie, &format!("{prefix}.refNF.serie"), errors);
    check_n_nf(r.n_nf, &format!("{prefix}.refNF.nNF"), errors);
}

fn validate_ref_produtor(r: &RefNfProdutor, prefix: &str, errors: &mut Vec<ValidationError>) {
    check_c_uf(r.c_uf, &format!("{prefix}.refNF.cUF"), errors);
    check_aamm(&r.aamm, &format!("{prefix}.refNF.AAMM"), errors);
    check_cnpj_or_cpf(&r.cpf_cnpj, &format!("{prefix}.refNF.cpfCnpj"), errors);
    if let Some(ie) = &r.ie {
        check_ie(ie, &format!("{prefix}.refNF.ie"), errors);
    }
    check_code(&r.modelo, &["01", "04"], &format!("{prefix}.refNF.mod"), errors);
    check_serie(r.serie, &format!("{prefix}.refNF.serie"), errors);
    check_n_nf(r.n_nf, &format!("{prefix}.refNF.nNF"), errors);
}

fn validate_ref_ecf(r: &RefEcf, prefix: &str, errors: &mut Vec<ValidationError>) {
    check_code(&r.modelo, &["2B", "2C", "2D"], &format!("{prefix}.refECF.mod"), errors);
    if !(100..=999).contains(&r.n_ecf) {
        errors.push(ValidationError::format(
            format!("{prefix}.refECF.nECF"),
            "o número do equipamento deve estar entre 100 e 999",
        ));
    }
    if !(100_000..=999_999).contains(&r.n_coo) {
        errors.push(ValidationError::format(
            format!("{prefix}.refECF.nCOO"),
            "o contador de cupom deve estar entre 100000 e 999999",
        ));
    }
}

fn check_c_uf(c_uf: u8, field: &str, errors: &mut Vec<ValidationError>) {
    if Uf::from_codigo(c_uf).is_none() {
        errors.push(ValidationError::domain(
            field,
            format!("código de UF '{c_uf}' desconhecido"),
        ));
    }
}

/// AAMM — two-digit year followed by a 01-12 month.
fn check_aamm(aamm: &str, field: &str, errors: &mut Vec<ValidationError>) {
    let ok = aamm.len() == 4
        && aamm.bytes().all(|b| b.is_ascii_digit())
        && matches!(&aamm[2..], "01" | "02" | "03" | "04" | "05" | "06" | "07" | "08" | "09"
            | "10" | "11" | "12");
    if !ok {
        errors.push(ValidationError::format(
            field,
            "AAMM deve conter ano e mês no formato AAMM",
        ));
    }
}

/// IE — state registration: 2 to 14 digits, or the literal "ISENTO".
pub fn check_ie(ie: &str, field: &str, errors: &mut Vec<ValidationError>) {
    if ie == "ISENTO" {
        return;
    }
    check_digits_range(ie, 2, 14, field, errors);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ide() -> Ide {
        Ide {
            nat_op: "VENDA DE MERCADORIA".into(),
            serie: Some(1),
            n_nf: 1234,
            dh_emi: None,
            dh_sai_ent: None,
            tp_nf: "1".into(),
            id_dest: "1".into(),
            tp_imp: "1".into(),
            fin_nfe: "1".into(),
            ind_final: "1".into(),
            ind_pres: "1".into(),
            ind_intermed: None,
            nf_ref: Vec::new(),
        }
    }

    fn run(ide: &Ide) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        validate_ide(ide, &mut errors);
        errors
    }

    #[test]
    fn valid_block() {
        assert!(run(&ide()).is_empty());
    }

    #[test]
    fn serie_and_numbering_bounds() {
        let mut i = ide();
        i.serie = Some(970);
        i.n_nf = 1_000_000_000;
        let errors = run(&i);
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn code_tables_are_closed() {
        let mut i = ide();
        i.tp_nf = "2".into();
        i.ind_pres = "6".into();
        let errors = run(&i);
        assert!(errors.iter().any(|e| e.field == "ide.tpNF"));
        assert!(errors.iter().any(|e| e.field == "ide.indPres"));
    }

    #[test]
    fn reference_shapes() {
        let mut i = ide();
        i.nf_ref.push(NfRef::Nfe {
            ref_nfe: "1".repeat(44),
            ref_nf: RefNf::Produtor(RefNfProdutor {
                c_uf: 35,
                aamm: "2406".into(),
                cpf_cnpj: "11222333000181".into(),
                ie: Some("ISENTO".into()),
                modelo: "04".into(),
                serie: Some(0),
                n_nf: 55,
            }),
        });
        assert!(run(&i).is_empty());
    }

    #[test]
    fn reference_rejects_unknown_uf_and_month() {
        let mut i = ide();
        i.nf_ref.push(NfRef::Nfe {
            ref_nfe: "1".repeat(44),
            ref_nf: RefNf::Modelo(RefNfModelo {
                c_uf: 99,
                aamm: "2413".into(),
                cnpj: "11222333000181".into(),
                modelo: "01".into(),
                serie: None,
                n_nf: 55,
            }),
        });
        let errors = run(&i);
        assert!(errors.iter().any(|e| e.field.ends_with("cUF")));
        assert!(errors.iter().any(|e| e.field.ends_with("AAMM")));
    }

    #[test]
    fn ecf_reference_bounds() {
        let mut i = ide();
        i.nf_ref.push(NfRef::Ecf {
            ref_cte: "2".repeat(44),
            ref_ecf: RefEcf {
                modelo: "2B".into(),
                n_ecf: 99,
                n_coo: 99_999,
            },
        });
        let errors = run(&i);
        assert_eq!(errors.len(), 2);
    }
}
