//! Totals, transport, billing, payment and addenda validation.

use crate::core::constraint::*;
use crate::core::uf::is_known_uf;
use crate::core::{Cobr, InfAdic, Pag, Total, Transp, ValidationError};

use super::ide::check_ie;
use super::rules::{TRANSPORTA_RULES, apply_rules};

const MOD_FRETE: &[&str] = &["0", "1", "2", "3", "4", "9"];
const IND_PAG: &[&str] = &["0", "1"];
const T_PAG: &[&str] = &[
    "01", "02", "03", "04", "05", "10", "11", "12", "13", "14", "15", "16", "17", "18", "19",
    "90", "99",
];
const TP_INTEGRA: &[&str] = &["1", "2"];
const T_BAND: &[&str] = &["01", "02", "03", "04", "05", "06", "99"];

/// Validate the totals block. Amounts are taken as declared; only their
/// decimal-place budget is enforced here.
pub fn validate_total(total: &Total, errors: &mut Vec<ValidationError>) {
    let t = &total.icms_tot;
    for (value, tag) in [
        (t.v_bc, "vBC"),
        (t.v_icms, "vICMS"),
        (t.v_icms_deson, "vICMSDeson"),
        (t.v_fcp, "vFCP"),
        (t.v_bc_st, "vBCST"),
        (t.v_st, "vST"),
        (t.v_fcp_st, "vFCPST"),
        (t.v_fcp_st_ret, "vFCPSTRet"),
        (t.v_prod, "vProd"),
        (t.v_frete, "vFrete"),
        (t.v_seg, "vSeg"),
        (t.v_desc, "vDesc"),
        (t.v_ii, "vII"),
        (t.v_ipi, "vIPI"),
        (t.v_ipi_devol, "vIPIDevol"),
        (t.v_pis, "vPIS"),
        (t.v_cofins, "vCOFINS"),
        (t.v_outro, "vOutro"),
        (t.v_nf, "vNF"),
    ] {
        check_precision(value, 2, &format!("total.ICMSTot.{tag}"), errors);
    }
    if let Some(v_tot_trib) = t.v_tot_trib {
        check_precision(v_tot_trib, 2, "total.ICMSTot.vTotTrib", errors);
    }

    if let Some(issqn_tot) = &total.issqn_tot {
        for (value, tag) in [
            (issqn_tot.v_serv, "vServ"),
            (issqn_tot.v_bc, "vBC"),
            (issqn_tot.v_iss, "vISS"),
            (issqn_tot.v_pis, "vPIS"),
            (issqn_tot.v_cofins, "vCOFINS"),
        ] {
            if let Some(value) = value {
                check_precision(value, 2, &format!("total.ISSQNtot.{tag}"), errors);
            }
        }
    }

    if let Some(ret_trib) = &total.ret_trib {
        for (value, tag) in [
            (ret_trib.v_ret_pis, "vRetPIS"),
            (ret_trib.v_ret_cofins, "vRetCOFINS"),
            (ret_trib.v_ret_csll, "vRetCSLL"),
            (ret_trib.v_bc_irrf, "vBCIRRF"),
            (ret_trib.v_irrf, "vIRRF"),
            (ret_trib.v_bc_ret_prev, "vBCRetPrev"),
            (ret_trib.v_ret_prev, "vRetPrev"),
        ] {
            if let Some(value) = value {
                check_precision(value, 2, &format!("total.retTrib.{tag}"), errors);
            }
        }
    }
}

/// Validate the transport block, including the carrier rules.
pub fn validate_transp(transp: &Transp, errors: &mut Vec<ValidationError>) {
    check_code(&transp.mod_frete, MOD_FRETE, "transp.modFrete", errors);

    if let Some(transporta) = &transp.transporta {
        if let Some(cnpj) = &transporta.cnpj {
            check_cnpj(cnpj, "transp.transporta.CNPJ", errors);
        }
        if let Some(cpf) = &transporta.cpf {
            check_cpf(cpf, "transp.transporta.CPF", errors);
        }
        if let Some(x_nome) = &transporta.x_nome {
            check_text(x_nome, 2, 60, "transp.transporta.xNome", errors);
        }
        if let Some(ie) = &transporta.ie {
            check_ie(ie, "transp.transporta.IE", errors);
        }
        if let Some(x_ender) = &transporta.x_ender {
            check_text(x_ender, 1, 60, "transp.transporta.xEnder", errors);
        }
        if let Some(x_mun) = &transporta.x_mun {
            check_text(x_mun, 1, 60, "transp.transporta.xMun", errors);
        }
        if let Some(uf) = &transporta.uf {
            if !is_known_uf(uf) {
                errors.push(ValidationError::domain(
                    "transp.transporta.UF",
                    format!("UF '{uf}' desconhecida"),
                ));
            }
        }

        apply_rules(transporta, TRANSPORTA_RULES, "transp.transporta", errors);
    }

    if let Some(veic_transp) = &transp.veic_transp {
        check_placa(&veic_transp.placa, "transp.veicTransp.placa", errors);
        if let Some(uf) = &veic_transp.uf {
            if !is_known_uf(uf) {
                errors.push(ValidationError::domain(
                    "transp.veicTransp.UF",
                    format!("UF '{uf}' desconhecida"),
                ));
            }
        }
        if let Some(rntc) = &veic_transp.rntc {
            check_text(rntc, 1, 20, "transp.veicTransp.RNTC", errors);
        }
    }

    for (i, vol) in transp.vol.iter().enumerate() {
        let prefix = format!("transp.vol[{i}]");
        if let Some(esp) = &vol.esp {
            check_text(esp, 1, 60, &format!("{prefix}.esp"), errors);
        }
        if let Some(marca) = &vol.marca {
            check_text(marca, 1, 60, &format!("{prefix}.marca"), errors);
        }
        if let Some(n_vol) = &vol.n_vol {
            check_text(n_vol, 1, 60, &format!("{prefix}.nVol"), errors);
        }
        if let Some(peso_l) = vol.peso_l {
            check_precision(peso_l, 3, &format!("{prefix}.pesoL"), errors);
        }
        if let Some(peso_b) = vol.peso_b {
            check_precision(peso_b, 3, &format!("{prefix}.pesoB"), errors);
        }
    }
}

/// placa — 7-character alphanumeric license plate.
fn check_placa(placa: &str, field: &str, errors: &mut Vec<ValidationError>) {
    let ok = placa.len() == 7 && placa.bytes().all(|b| b.is_ascii_alphanumeric());
    if !ok {
        errors.push(ValidationError::format(
            field,
            "a placa deve ter 7 caracteres alfanuméricos",
        ));
    }
}

/// Validate the billing block.
pub fn validate_cobr(cobr: &Cobr, errors: &mut Vec<ValidationError>) {
    if let Some(fat) = &cobr.fat {
        check_text(&fat.n_fat, 1, 60, "cobr.fat.nFat", errors);
        check_precision(fat.v_orig, 2, "cobr.fat.vOrig", errors);
        if let Some(v_desc) = fat.v_desc {
            check_precision(v_desc, 2, "cobr.fat.vDesc", errors);
        }
        check_precision(fat.v_liq, 2, "cobr.fat.vLiq", errors);
    }

    if cobr.dup.len() > 120 {
        errors.push(ValidationError::structural(
            "cobr.dup",
            "a lista de duplicatas admite no máximo 120 entradas",
        ));
    }
    for (i, dup) in cobr.dup.iter().enumerate() {
        let prefix = format!("cobr.dup[{i}]");
        check_text(&dup.n_dup, 1, 60, &format!("{prefix}.nDup"), errors);
        check_precision(dup.v_dup, 2, &format!("{prefix}.vDup"), errors);
    }
}

/// Validate the payment block.
pub fn validate_pag(pag: &Pag, errors: &mut Vec<ValidationError>) {
    if pag.det_pag.is_empty() || pag.det_pag.len() > 100 {
        errors.push(ValidationError::structural(
            "pag.detPag",
            "o bloco de pagamento deve conter entre 1 e 100 formas",
        ));
    }
    for (i, det_pag) in pag.det_pag.iter().enumerate() {
        let prefix = format!("pag.detPag[{i}]");
        if let Some(ind_pag) = &det_pag.ind_pag {
            check_code(ind_pag, IND_PAG, &format!("{prefix}.indPag"), errors);
        }
        check_code(&det_pag.t_pag, T_PAG, &format!("{prefix}.tPag"), errors);
        check_precision(det_pag.v_pag, 2, &format!("{prefix}.vPag"), errors);
        if let Some(card) = &det_pag.card {
            check_code(&card.tp_integra, TP_INTEGRA, &format!("{prefix}.card.tpIntegra"), errors);
            if let Some(cnpj) = &card.cnpj {
                check_cnpj(cnpj, &format!("{prefix}.card.CNPJ"), errors);
            }
            if let Some(t_band) = &card.t_band {
                check_code(t_band, T_BAND, &format!("{prefix}.card.tBand"), errors);
            }
            if let Some(c_aut) = &card.c_aut {
                check_text(c_aut, 1, 20, &format!("{prefix}.card.cAut"), errors);
            }
        }
    }
    if let Some(v_troco) = pag.v_troco {
        check_precision(v_troco, 2, "pag.vTroco", errors);
    }
}

/// Validate the free-text addenda.
pub fn validate_inf_adic(inf_adic: &InfAdic, errors: &mut Vec<ValidationError>) {
    if let Some(inf_ad_fisco) = &inf_adic.inf_ad_fisco {
        check_text(inf_ad_fisco, 1, 2000, "infAdic.infAdFisco", errors);
    }
    if let Some(inf_cpl) = &inf_adic.inf_cpl {
        check_text(inf_cpl, 1, 5000, "infAdic.infCpl", errors);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{DetPag, Dup, Fat, IcmsTot, Transporta};
    use rust_decimal_macros::dec;

    fn icms_tot() -> IcmsTot {
        IcmsTot {
            v_bc: dec!(1000.00),
            v_icms: dec!(180.00),
            v_icms_deson: dec!(0),
            v_fcp: dec!(0),
            v_bc_st: dec!(0),
            v_st: dec!(0),
            v_fcp_st: dec!(0),
            v_fcp_st_ret: dec!(0),
            v_prod: dec!(1000.00),
            v_frete: dec!(0),
            v_seg: dec!(0),
            v_desc: dec!(0),
            v_ii: dec!(0),
            v_ipi: dec!(0),
            v_ipi_devol: dec!(0),
            v_pis: dec!(16.50),
            v_cofins: dec!(76.00),
            v_outro: dec!(0),
            v_nf: dec!(1180.00),
            v_tot_trib: None,
        }
    }

    #[test]
    fn totals_precision() {
        let mut errors = Vec::new();
        validate_total(
            &Total {
                icms_tot: icms_tot(),
                issqn_tot: None,
                ret_trib: None,
            },
            &mut errors,
        );
        assert!(errors.is_empty(), "{errors:?}");

        let mut t = icms_tot();
        t.v_nf = dec!(1180.001);
        let mut errors = Vec::new();
        validate_total(
            &Total {
                icms_tot: t,
                issqn_tot: None,
                ret_trib: None,
            },
            &mut errors,
        );
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "total.ICMSTot.vNF");
    }

    fn transporta() -> Transporta {
        Transporta {
            cnpj: Some("11222333000181".into()),
            cpf: None,
            x_nome: Some("Transportes Rapidos Ltda".into()),
            ie: Some("123456789".into()),
            x_ender: Some("Rodovia BR-116 km 20".into()),
            x_mun: Some("Curitiba".into()),
            uf: Some("PR".into()),
        }
    }

    #[test]
    fn carrier_with_ie_needs_state() {
        let mut errors = Vec::new();
        let transp = Transp {
            mod_frete: "0".into(),
            transporta: Some(Transporta {
                uf: None,
                ..transporta()
            }),
            veic_transp: None,
            vol: Vec::new(),
        };
        validate_transp(&transp, &mut errors);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "transp.transporta.UF");

        let mut errors = Vec::new();
        validate_transp(
            &Transp {
                mod_frete: "0".into(),
                transporta: Some(transporta()),
                veic_transp: None,
                vol: Vec::new(),
            },
            &mut errors,
        );
        assert!(errors.is_empty(), "{errors:?}");
    }

    #[test]
    fn carrier_ids_are_exclusive() {
        let mut errors = Vec::new();
        let transp = Transp {
            mod_frete: "0".into(),
            transporta: Some(Transporta {
                cpf: Some("52998224725".into()),
                ..transporta()
            }),
            veic_transp: None,
            vol: Vec::new(),
        };
        validate_transp(&transp, &mut errors);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("não podem ser informados"));
    }

    #[test]
    fn billing_and_payment() {
        let mut errors = Vec::new();
        validate_cobr(
            &Cobr {
                fat: Some(Fat {
                    n_fat: "FAT-001".into(),
                    v_orig: dec!(1180.00),
                    v_desc: None,
                    v_liq: dec!(1180.00),
                }),
                dup: vec![Dup {
                    n_dup: "001".into(),
                    d_venc: None,
                    v_dup: dec!(1180.00),
                }],
            },
            &mut errors,
        );
        assert!(errors.is_empty(), "{errors:?}");

        let mut errors = Vec::new();
        validate_pag(
            &Pag {
                det_pag: Vec::new(),
                v_troco: None,
            },
            &mut errors,
        );
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "pag.detPag");

        let mut errors = Vec::new();
        validate_pag(
            &Pag {
                det_pag: vec![DetPag {
                    ind_pag: Some("0".into()),
                    t_pag: "17".into(),
                    v_pag: dec!(1180.00),
                    card: None,
                }],
                v_troco: None,
            },
            &mut errors,
        );
        assert!(errors.is_empty(), "{errors:?}");
    }
}
