//! Per-item tax block validation: ICMS resolution plus the IPI, II,
//! PIS/COFINS (plain and substitution) and ISSQN groups.

use crate::core::constraint::*;
use crate::core::{
    Cofins, CofinsSt, Ii, Imposto, Ipi, Issqn, Pis, PisSt, ValidationError,
};
use crate::icms::{self, Icms, IcmsUfDest};

use super::rules::{
    COFINS_RULES, IPI_RULES, PIS_COFINS_CST_ALIQ, PIS_COFINS_CST_NT, PIS_COFINS_CST_OUTR,
    PIS_COFINS_CST_QTDE, PIS_RULES, apply_rules,
};

/// Validate the whole tax block of one line item. Returns the resolved ICMS
/// shape when resolution succeeds.
pub fn validate_imposto(
    imposto: &Imposto,
    prefix: &str,
    errors: &mut Vec<ValidationError>,
) -> Option<Icms> {
    if let Some(v_tot_trib) = imposto.v_tot_trib {
        check_precision(v_tot_trib, 2, &format!("{prefix}.vTotTrib"), errors);
    }

    let resolved = match icms::resolve(&imposto.icms, &format!("{prefix}.ICMS")) {
        Ok(icms) => Some(icms),
        Err(err) => {
            errors.push(err);
            None
        }
    };

    if let Some(uf_dest) = &imposto.icms_uf_dest {
        validate_icms_uf_dest(uf_dest, &format!("{prefix}.ICMSUFDest"), errors);
    }
    if let Some(ipi) = &imposto.ipi {
        validate_ipi(ipi, &format!("{prefix}.IPI"), errors);
    }
    if let Some(ii) = &imposto.ii {
        validate_ii(ii, &format!("{prefix}.II"), errors);
    }
    if let Some(pis) = &imposto.pis {
        validate_pis(pis, &format!("{prefix}.PIS"), errors);
    }
    if let Some(pis_st) = &imposto.pis_st {
        validate_pis_st(pis_st, &format!("{prefix}.PISST"), errors);
    }
    if let Some(cofins) = &imposto.cofins {
        validate_cofins(cofins, &format!("{prefix}.COFINS"), errors);
    }
    if let Some(cofins_st) = &imposto.cofins_st {
        validate_cofins_st(cofins_st, &format!("{prefix}.COFINSST"), errors);
    }
    if let Some(issqn) = &imposto.issqn {
        validate_issqn(issqn, &format!("{prefix}.ISSQN"), errors);
    }

    resolved
}

/// Interstate consumer-destination apportionment; orthogonal to the resolved
/// regime, all amounts at 2 decimal places.
fn validate_icms_uf_dest(b: &IcmsUfDest, prefix: &str, errors: &mut Vec<ValidationError>) {
    check_precision(b.v_bc_uf_dest, 2, &format!("{prefix}.vBCUFDest"), errors);
    check_precision(b.v_bc_fcp_uf_dest, 2, &format!("{prefix}.vBCFCPUFDest"), errors);
    if let Some(p_fcp) = b.p_fcp_uf_dest {
        check_precision(p_fcp, 2, &format!("{prefix}.pFCPUFDest"), errors);
    }
    check_precision(b.p_icms_uf_dest, 2, &format!("{prefix}.pICMSUFDest"), errors);
    check_precision(b.p_icms_inter, 2, &format!("{prefix}.pICMSInter"), errors);
    check_precision(b.p_icms_inter_part, 2, &format!("{prefix}.pICMSInterPart"), errors);
    if let Some(v_fcp) = b.v_fcp_uf_dest {
        check_precision(v_fcp, 2, &format!("{prefix}.vFCPUFDest"), errors);
    }
    check_precision(b.v_icms_uf_dest, 2, &format!("{prefix}.vICMSUFDest"), errors);
    check_precision(b.v_icms_uf_remet, 2, &format!("{prefix}.vICMSUFRemet"), errors);
}

/// Every legal IPI situation code.
const IPI_CST: &[&str] = &[
    "00", "01", "02", "03", "04", "05", "49", "50", "51", "52", "53", "54", "55", "99",
];

fn validate_ipi(ipi: &Ipi, prefix: &str, errors: &mut Vec<ValidationError>) {
    if let Some(cnpj_prod) = &ipi.cnpj_prod {
        check_cnpj(cnpj_prod, &format!("{prefix}.CNPJProd"), errors);
    }
    if let Some(c_selo) = &ipi.c_selo {
        check_text(c_selo, 1, 60, &format!("{prefix}.cSelo"), errors);
    }
    check_digits_range(&ipi.c_enq, 1, 3, &format!("{prefix}.cEnq"), errors);
    check_code(&ipi.cst, IPI_CST, &format!("{prefix}.CST"), errors);
    if let Some(trib) = &ipi.trib {
        if let Some(v_bc) = trib.v_bc {
            check_precision(v_bc, 2, &format!("{prefix}.IPITrib.vBC"), errors);
        }
        if let Some(p_ipi) = trib.p_ipi {
            check_precision(p_ipi, 4, &format!("{prefix}.IPITrib.pIPI"), errors);
        }
        if let Some(q_unid) = trib.q_unid {
            check_precision(q_unid, 4, &format!("{prefix}.IPITrib.qUnid"), errors);
        }
        if let Some(v_unid) = trib.v_unid {
            check_precision(v_unid, 4, &format!("{prefix}.IPITrib.vUnid"), errors);
        }
        check_precision(trib.v_ipi, 2, &format!("{prefix}.IPITrib.vIPI"), errors);
    }

    apply_rules(ipi, IPI_RULES, prefix, errors);
}

fn validate_ii(ii: &Ii, prefix: &str, errors: &mut Vec<ValidationError>) {
    check_precision(ii.v_bc, 2, &format!("{prefix}.vBC"), errors);
    check_precision(ii.v_desp_adu, 2, &format!("{prefix}.vDespAdu"), errors);
    check_precision(ii.v_ii, 2, &format!("{prefix}.vII"), errors);
    check_precision(ii.v_iof, 2, &format!("{prefix}.vIOF"), errors);
}

/// Union of the PIS/COFINS dispatch sets: the closed CST table.
fn check_pis_cofins_cst(cst: &str, field: &str, errors: &mut Vec<ValidationError>) {
    let known = PIS_COFINS_CST_ALIQ.contains(&cst)
        || PIS_COFINS_CST_QTDE.contains(&cst)
        || PIS_COFINS_CST_NT.contains(&cst)
        || PIS_COFINS_CST_OUTR.contains(&cst);
    if !known {
        errors.push(ValidationError::domain(
            field,
            format!("CST '{cst}' fora da tabela de situações tributárias"),
        ));
    }
}

fn validate_pis(pis: &Pis, prefix: &str, errors: &mut Vec<ValidationError>) {
    check_pis_cofins_cst(&pis.cst, &format!("{prefix}.CST"), errors);
    if let Some(aliq) = &pis.aliq {
        check_precision(aliq.v_bc, 2, &format!("{prefix}.PISAliq.vBC"), errors);
        check_precision(aliq.p_pis, 4, &format!("{prefix}.PISAliq.pPIS"), errors);
        check_precision(aliq.v_pis, 2, &format!("{prefix}.PISAliq.vPIS"), errors);
    }
    if let Some(qtde) = &pis.qtde {
        check_precision(qtde.q_bc_prod, 4, &format!("{prefix}.PISQtde.qBCProd"), errors);
        check_precision(qtde.v_aliq_prod, 4, &format!("{prefix}.PISQtde.vAliqProd"), errors);
        check_precision(qtde.v_pis, 2, &format!("{prefix}.PISQtde.vPIS"), errors);
    }
    if let Some(outr) = &pis.outr {
        if let Some(v_bc) = outr.v_bc {
            check_precision(v_bc, 2, &format!("{prefix}.PISOutr.vBC"), errors);
        }
        if let Some(p_pis) = outr.p_pis {
            check_precision(p_pis, 4, &format!("{prefix}.PISOutr.pPIS"), errors);
        }
        if let Some(q_bc_prod) = outr.q_bc_prod {
            check_precision(q_bc_prod, 4, &format!("{prefix}.PISOutr.qBCProd"), errors);
        }
        if let Some(v_aliq_prod) = outr.v_aliq_prod {
            check_precision(v_aliq_prod, 4, &format!("{prefix}.PISOutr.vAliqProd"), errors);
        }
        check_precision(outr.v_pis, 2, &format!("{prefix}.PISOutr.vPIS"), errors);
    }

    apply_rules(pis, PIS_RULES, prefix, errors);
}

fn validate_pis_st(pis_st: &PisSt, prefix: &str, errors: &mut Vec<ValidationError>) {
    if let Some(v_bc) = pis_st.v_bc {
        check_precision(v_bc, 2, &format!("{prefix}.vBC"), errors);
    }
    if let Some(p_pis) = pis_st.p_pis {
        check_precision(p_pis, 4, &format!("{prefix}.pPIS"), errors);
    }
    if let Some(q_bc_prod) = pis_st.q_bc_prod {
        check_precision(q_bc_prod, 4, &format!("{prefix}.qBCProd"), errors);
    }
    if let Some(v_aliq_prod) = pis_st.v_aliq_prod {
        check_precision(v_aliq_prod, 4, &format!("{prefix}.vAliqProd"), errors);
    }
    check_precision(pis_st.v_pis, 2, &format!("{prefix}.vPIS"), errors);
}

fn validate_cofins(cofins: &Cofins, prefix: &str, errors: &mut Vec<ValidationError>) {
    check_pis_cofins_cst(&cofins.cst, &format!("{prefix}.CST"), errors);
    if let Some(aliq) = &cofins.aliq {
        check_precision(aliq.v_bc, 2, &format!("{prefix}.COFINSAliq.vBC"), errors);
        check_precision(aliq.p_cofins, 4, &format!("{prefix}.COFINSAliq.pCOFINS"), errors);
        check_precision(aliq.v_cofins, 2, &format!("{prefix}.COFINSAliq.vCOFINS"), errors);
    }
    if let Some(qtde) = &cofins.qtde {
        check_precision(qtde.q_bc_prod, 4, &format!("{prefix}.COFINSQtde.qBCProd"), errors);
        check_precision(
            qtde.v_aliq_prod,
            4,
            &format!("{prefix}.COFINSQtde.vAliqProd"),
            errors,
        );
        check_precision(qtde.v_cofins, 2, &format!("{prefix}.COFINSQtde.vCOFINS"), errors);
    }
    if let Some(outr) = &cofins.outr {
        if let Some(v_bc) = outr.v_bc {
            check_precision(v_bc, 2, &format!("{prefix}.COFINSOutr.vBC"), errors);
        }
        if let Some(p_cofins) = outr.p_cofins {
            check_precision(p_cofins, 4, &format!("{prefix}.COFINSOutr.pCOFINS"), errors);
        }
        if let Some(q_bc_prod) = outr.q_bc_prod {
            check_precision(q_bc_prod, 4, &format!("{prefix}.COFINSOutr.qBCProd"), errors);
        }
        if let Some(v_aliq_prod) = outr.v_aliq_prod {
            check_precision(
                v_aliq_prod,
                4,
                &format!("{prefix}.COFINSOutr.vAliqProd"),
                errors,
            );
        }
        check_precision(outr.v_cofins, 2, &format!("{prefix}.COFINSOutr.vCOFINS"), errors);
    }

    apply_rules(cofins, COFINS_RULES, prefix, errors);
}

fn validate_cofins_st(cofins_st: &CofinsSt, prefix: &str, errors: &mut Vec<ValidationError>) {
    if let Some(v_bc) = cofins_st.v_bc {
        check_precision(v_bc, 2, &format!("{prefix}.vBC"), errors);
    }
    if let Some(p_cofins) = cofins_st.p_cofins {
        check_precision(p_cofins, 4, &format!("{prefix}.pCOFINS"), errors);
    }
    if let Some(q_bc_prod) = cofins_st.q_bc_prod {
        check_precision(q_bc_prod, 4, &format!("{prefix}.qBCProd"), errors);
    }
    if let Some(v_aliq_prod) = cofins_st.v_aliq_prod {
        check_precision(v_aliq_prod, 4, &format!("{prefix}.vAliqProd"), errors);
    }
    check_precision(cofins_st.v_cofins, 2, &format!("{prefix}.vCOFINS"), errors);
}

fn validate_issqn(issqn: &Issqn, prefix: &str, errors: &mut Vec<ValidationError>) {
    check_precision(issqn.v_bc, 2, &format!("{prefix}.vBC"), errors);
    check_precision(issqn.v_aliq, 4, &format!("{prefix}.vAliq"), errors);
    check_precision(issqn.v_issqn, 2, &format!("{prefix}.vISSQN"), errors);
    check_digits(&issqn.c_mun_fg, 7, &format!("{prefix}.cMunFG"), errors);
    check_c_list_serv(&issqn.c_list_serv, &format!("{prefix}.cListServ"), errors);
}

/// cListServ — LC 116 item in the "NN.NN" form.
fn check_c_list_serv(value: &str, field: &str, errors: &mut Vec<ValidationError>) {
    let bytes = value.as_bytes();
    let ok = bytes.len() == 5
        && bytes[0].is_ascii_digit()
        && bytes[1].is_ascii_digit()
        && bytes[2] == b'.'
        && bytes[3].is_ascii_digit()
        && bytes[4].is_ascii_digit();
    if !ok {
        errors.push(ValidationError::format(
            field,
            "item da lista de serviços deve seguir o formato NN.NN",
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{IpiTrib, PisAliq};
    use rust_decimal_macros::dec;

    fn imposto_00() -> Imposto {
        Imposto {
            v_tot_trib: None,
            icms: crate::icms::IcmsPayload {
                orig: Some("0".into()),
                mod_bc: Some("3".into()),
                v_bc: Some(dec!(100.00)),
                p_icms: Some(dec!(18)),
                v_icms: Some(dec!(18.00)),
                ..Default::default()
            },
            icms_uf_dest: None,
            ipi: None,
            ii: None,
            pis: None,
            pis_st: None,
            cofins: None,
            cofins_st: None,
            issqn: None,
        }
    }

    fn run(imposto: &Imposto) -> (Option<Icms>, Vec<ValidationError>) {
        let mut errors = Vec::new();
        let icms = validate_imposto(imposto, "det[0].imposto", &mut errors);
        (icms, errors)
    }

    #[test]
    fn resolves_icms_and_reports_nothing() {
        let (icms, errors) = run(&imposto_00());
        assert!(errors.is_empty(), "{errors:?}");
        assert_eq!(icms.unwrap().situacao(), "00");
    }

    #[test]
    fn unresolvable_icms_is_a_domain_error() {
        let mut imposto = imposto_00();
        imposto.icms.orig = None;
        let (icms, errors) = run(&imposto);
        assert!(icms.is_none());
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "det[0].imposto.ICMS");
    }

    #[test]
    fn ipi_taxed_cst_requires_group() {
        let mut imposto = imposto_00();
        imposto.ipi = Some(Ipi {
            cnpj_prod: None,
            c_selo: None,
            q_selo: None,
            c_enq: "999".into(),
            cst: "50".into(),
            trib: None,
        });
        let (_, errors) = run(&imposto);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "det[0].imposto.IPI.IPITrib");

        imposto.ipi.as_mut().unwrap().trib = Some(IpiTrib {
            v_bc: Some(dec!(100.00)),
            p_ipi: Some(dec!(5)),
            q_unid: None,
            v_unid: None,
            v_ipi: dec!(5.00),
        });
        let (_, errors) = run(&imposto);
        assert!(errors.is_empty(), "{errors:?}");
    }

    #[test]
    fn pis_rate_cst_requires_rate_group() {
        let mut imposto = imposto_00();
        imposto.pis = Some(Pis {
            cst: "01".into(),
            aliq: None,
            qtde: None,
            outr: None,
        });
        let (_, errors) = run(&imposto);
        assert_eq!(errors.len(), 1);

        imposto.pis.as_mut().unwrap().aliq = Some(PisAliq {
            v_bc: dec!(100.00),
            p_pis: dec!(1.65),
            v_pis: dec!(1.65),
        });
        let (_, errors) = run(&imposto);
        assert!(errors.is_empty(), "{errors:?}");
    }

    #[test]
    fn pis_unknown_cst_is_domain_error() {
        let mut imposto = imposto_00();
        imposto.pis = Some(Pis {
            cst: "47".into(),
            aliq: None,
            qtde: None,
            outr: None,
        });
        let (_, errors) = run(&imposto);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, crate::core::ConstraintKind::DomainEnum);
    }

    #[test]
    fn uf_dest_precision() {
        let mut imposto = imposto_00();
        imposto.icms_uf_dest = Some(IcmsUfDest {
            v_bc_uf_dest: dec!(100.00),
            v_bc_fcp_uf_dest: dec!(100.00),
            p_fcp_uf_dest: Some(dec!(2)),
            p_icms_uf_dest: dec!(18),
            p_icms_inter: dec!(12),
            p_icms_inter_part: dec!(100),
            v_fcp_uf_dest: Some(dec!(2.00)),
            v_icms_uf_dest: dec!(6.00),
            v_icms_uf_remet: dec!(0.001),
        });
        let (_, errors) = run(&imposto);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, crate::core::ConstraintKind::Precision);
        assert!(errors[0].field.ends_with("vICMSUFRemet"));
    }
}
