//! Emitter, recipient and pickup/delivery party validation.

use crate::core::constraint::*;
use crate::core::uf::is_known_uf;
use crate::core::{Dest, Emit, Endereco, Entrega, Retirada, ValidationError};

use super::ide::check_ie;
use super::rules::{DEST_RULES, apply_rules};

const CRT: &[&str] = &["1", "2", "3"];
const IND_IE_DEST: &[&str] = &["1", "2", "9"];

/// Validate an address block.
pub fn validate_endereco(endereco: &Endereco, prefix: &str, errors: &mut Vec<ValidationError>) {
    check_text(&endereco.x_lgr, 2, 60, &format!("{prefix}.xLgr"), errors);
    check_text(&endereco.nro, 1, 60, &format!("{prefix}.nro"), errors);
    if let Some(x_cpl) = &endereco.x_cpl {
        check_text(x_cpl, 1, 60, &format!("{prefix}.xCpl"), errors);
    }
    check_text(&endereco.x_bairro, 2, 60, &format!("{prefix}.xBairro"), errors);
    check_digits(&endereco.c_mun, 7, &format!("{prefix}.cMun"), errors);
    if !is_known_uf(&endereco.uf) {
        errors.push(ValidationError::domain(
            format!("{prefix}.UF"),
            format!("UF '{}' desconhecida", endereco.uf),
        ));
    }
    if let Some(cep) = &endereco.cep {
        check_digits(cep, 8, &format!("{prefix}.CEP"), errors);
    }
    check_text(&endereco.fone, 6, 14, &format!("{prefix}.fone"), errors);
}

/// Validate the issuing party.
pub fn validate_emit(emit: &Emit, errors: &mut Vec<ValidationError>) {
    check_cnpj(&emit.cnpj, "emit.CNPJ", errors);
    check_text(&emit.x_nome, 2, 60, "emit.xNome", errors);
    if let Some(x_fant) = &emit.x_fant {
        check_text(x_fant, 1, 60, "emit.xFant", errors);
    }
    validate_endereco(&emit.ender_emit, "emit.enderEmit", errors);
    check_ie(&emit.ie, "emit.IE", errors);
    if let Some(iest) = &emit.iest {
        check_digits_range(iest, 2, 14, "emit.IEST", errors);
    }
    if let Some(conjugada) = &emit.conjugada {
        check_text(&conjugada.im, 1, 15, "emit.IM", errors);
        if let Some(cnae) = &conjugada.cnae {
            check_digits(cnae, 7, "emit.CNAE", errors);
        }
    }
    check_code(&emit.crt, CRT, "emit.CRT", errors);
}

/// Validate the receiving party, including the state-registration rules.
pub fn validate_dest(dest: &Dest, errors: &mut Vec<ValidationError>) {
    if let Some(id) = &dest.cpf_cnpj {
        match id.len() {
            14 => check_cnpj(id, "dest.cpfCnpj", errors),
            11 => check_cpf(id, "dest.cpfCnpj", errors),
            5 | 20 => {} // foreign identifier, free-form at a fixed length
            _ => errors.push(ValidationError::format(
                "dest.cpfCnpj",
                "identificação deve ser CNPJ, CPF ou ID estrangeiro de 5 ou 20 caracteres",
            )),
        }
    }
    check_text(&dest.x_nome, 2, 60, "dest.xNome", errors);
    validate_endereco(&dest.ender_dest, "dest.enderDest", errors);
    check_code(&dest.ind_ie_dest, IND_IE_DEST, "dest.indIEDest", errors);
    if let Some(isuf) = &dest.isuf {
        check_text(isuf, 8, 9, "dest.ISUF", errors);
    }
    if let Some(im) = &dest.im {
        check_text(im, 1, 15, "dest.IM", errors);
    }
    if let Some(email) = &dest.email {
        check_email(email, "dest.email", errors);
    }

    apply_rules(dest, DEST_RULES, "dest", errors);
}

/// Validate the optional pickup party.
pub fn validate_retirada(retirada: &Retirada, errors: &mut Vec<ValidationError>) {
    if let Some(id) = &retirada.cpf_cnpj {
        check_cnpj_or_cpf(id, "retirada.cpfCnpj", errors);
    }
    if let Some(x_nome) = &retirada.x_nome {
        check_text(x_nome, 2, 60, "retirada.xNome", errors);
    }
    validate_endereco(&retirada.endereco, "retirada.endereco", errors);
    if let Some(email) = &retirada.email {
        check_email(email, "retirada.email", errors);
    }
    if let Some(ie) = &retirada.ie {
        check_ie(ie, "retirada.IE", errors);
    }
}

/// Validate the optional delivery party.
pub fn validate_entrega(entrega: &Entrega, errors: &mut Vec<ValidationError>) {
    if let Some(id) = &entrega.cpf_cnpj {
        check_cnpj_or_cpf(id, "entrega.cpfCnpj", errors);
    }
    if let Some(x_nome) = &entrega.x_nome {
        check_text(x_nome, 2, 60, "entrega.xNome", errors);
    }
    validate_endereco(&entrega.endereco, "entrega.endereco", errors);
    if let Some(fone) = &entrega.fone {
        check_text(fone, 6, 14, "entrega.fone", errors);
    }
    if let Some(email) = &entrega.email {
        check_email(email, "entrega.email", errors);
    }
    if let Some(ie) = &entrega.ie {
        check_ie(ie, "entrega.IE", errors);
    }
}

/// Validate the authorized-viewer list (max 10 CNPJ/CPF entries).
pub fn validate_aut_xml(aut_xml: &[String], errors: &mut Vec<ValidationError>) {
    if aut_xml.len() > 10 {
        errors.push(ValidationError::structural(
            "autXML",
            "a lista de autorizados admite no máximo 10 entradas",
        ));
    }
    for (i, id) in aut_xml.iter().enumerate() {
        check_cnpj_or_cpf(id, &format!("autXML[{i}]"), errors);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ConstraintKind;

    fn endereco() -> Endereco {
        Endereco {
            x_lgr: "Avenida Paulista".into(),
            nro: "1000".into(),
            x_cpl: None,
            x_bairro: "Bela Vista".into(),
            c_mun: "3550308".into(),
            uf: "SP".into(),
            cep: Some("01310100".into()),
            c_pais: Some(1058),
            fone: "1133334444".into(),
        }
    }

    fn dest() -> Dest {
        Dest {
            cpf_cnpj: Some("11222333000181".into()),
            x_nome: "Comprador Ltda".into(),
            ender_dest: endereco(),
            ind_ie_dest: "1".into(),
            ie: Some("123456789".into()),
            isuf: None,
            im: None,
            email: Some("compras@comprador.com.br".into()),
        }
    }

    #[test]
    fn valid_recipient() {
        let mut errors = Vec::new();
        validate_dest(&dest(), &mut errors);
        assert!(errors.is_empty(), "{errors:?}");
    }

    #[test]
    fn recipient_with_bad_checksum() {
        let mut d = dest();
        d.cpf_cnpj = Some("11222333000180".into());
        let mut errors = Vec::new();
        validate_dest(&d, &mut errors);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ConstraintKind::Checksum);
    }

    #[test]
    fn foreign_recipient_with_indicator_9() {
        let d = Dest {
            cpf_cnpj: Some("A".repeat(20)),
            ind_ie_dest: "9".into(),
            ie: None,
            ..dest()
        };
        let mut errors = Vec::new();
        validate_dest(&d, &mut errors);
        assert!(errors.is_empty(), "{errors:?}");
    }

    #[test]
    fn foreign_recipient_with_registered_indicator_fails() {
        let d = Dest {
            cpf_cnpj: Some("A".repeat(20)),
            ind_ie_dest: "1".into(),
            ie: None,
            ..dest()
        };
        let mut errors = Vec::new();
        validate_dest(&d, &mut errors);
        assert!(errors.iter().any(|e| {
            e.kind == ConstraintKind::CrossField && e.field == "dest.indIEDest"
        }));
        assert!(
            errors
                .iter()
                .any(|e| e.message == "Para indIEDest='1', IE é obrigatória")
        );
    }

    #[test]
    fn unknown_state_reported() {
        let mut d = dest();
        d.ender_dest.uf = "XX".into();
        let mut errors = Vec::new();
        validate_dest(&d, &mut errors);
        assert!(errors.iter().any(|e| e.field == "dest.enderDest.UF"));
    }

    #[test]
    fn aut_xml_bounds_and_checksums() {
        let mut errors = Vec::new();
        validate_aut_xml(&vec!["11222333000181".to_string(); 11], &mut errors);
        assert!(errors.iter().any(|e| e.field == "autXML"));

        let mut errors = Vec::new();
        validate_aut_xml(&["52998224725".to_string(), "123".to_string()], &mut errors);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "autXML[1]");
    }
}
