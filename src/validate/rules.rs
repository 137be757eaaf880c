//! Conditional cross-field rules.
//!
//! Each rule is an independent pure predicate plus the message reported when
//! it fails. Rules are evaluated unconditionally and every failure is
//! collected, so a single submission surfaces the complete correction list.

use crate::core::{Cofins, Dest, Di, Ipi, Med, Pis, Transporta, ValidationError};

/// One conditional invariant over a block of type `T`.
pub struct Rule<T> {
    /// Field the finding is reported against, relative to the block prefix.
    pub field: &'static str,
    /// Message shown when the predicate fails.
    pub message: &'static str,
    /// Returns true when the block satisfies the rule.
    pub check: fn(&T) -> bool,
}

/// Evaluate every rule in the catalogue, appending one finding per failure.
pub fn apply_rules<T>(
    value: &T,
    rules: &[Rule<T>],
    prefix: &str,
    errors: &mut Vec<ValidationError>,
) {
    for rule in rules {
        if !(rule.check)(value) {
            errors.push(ValidationError::cross_field(
                format!("{prefix}.{}", rule.field),
                rule.message,
            ));
        }
    }
}

/// Whether the recipient identification is a foreign one: an absent value or
/// a fixed-length (5 or 20) foreign identifier.
pub fn identificacao_estrangeira(dest: &Dest) -> bool {
    match dest.cpf_cnpj.as_deref() {
        None => true,
        Some(v) => v.len() == 5 || v.len() == 20,
    }
}

/// Recipient state-registration rules.
pub static DEST_RULES: &[Rule<Dest>] = &[
    Rule {
        field: "indIEDest",
        message: "Para ID estrangeiro, indIEDest deve ser '9'",
        check: |d| !identificacao_estrangeira(d) || d.ind_ie_dest == "9",
    },
    Rule {
        field: "IE",
        message: "Para ID estrangeiro, IE não deve ser informada",
        check: |d| !identificacao_estrangeira(d) || d.ie.is_none(),
    },
    Rule {
        field: "IE",
        message: "Para indIEDest='2', IE não deve ser informada",
        check: |d| d.ind_ie_dest != "2" || d.ie.is_none(),
    },
    Rule {
        field: "IE",
        message: "Para indIEDest='1', IE é obrigatória",
        check: |d| d.ind_ie_dest != "1" || d.ie.as_deref().is_some_and(|ie| !ie.is_empty()),
    },
];

/// Import-declaration rules.
pub static DI_RULES: &[Rule<Di>] = &[
    Rule {
        field: "vAFRMM",
        message: "Para tpViaTransp='1', vAFRMM é obrigatório",
        check: |di| di.tp_via_transp != "1" || di.v_afrmm.is_some(),
    },
    Rule {
        field: "CNPJ",
        message: "Para tpIntermedio='2' ou tpIntermedio='3', CNPJ é obrigatório",
        check: |di| !intermediado(di) || di.cnpj.is_some(),
    },
    Rule {
        field: "UFTerceiro",
        message: "Para tpIntermedio='2' ou tpIntermedio='3', UFTerceiro é obrigatório",
        check: |di| !intermediado(di) || di.uf_terceiro.is_some(),
    },
];

fn intermediado(di: &Di) -> bool {
    di.tp_intermedio == "2" || di.tp_intermedio == "3"
}

/// Medicine attachment: an ANVISA registry code or an exemption
/// justification must be present.
pub static MED_RULES: &[Rule<Med>] = &[Rule {
    field: "xMotivoIsencao",
    message: "Para cProdANVISA ISENTO, xMotivoIsencao é obrigatório",
    check: |m| m.c_prod_anvisa.is_some() || m.x_motivo_isencao.is_some(),
}];

/// Carrier rules.
pub static TRANSPORTA_RULES: &[Rule<Transporta>] = &[
    Rule {
        field: "UF",
        message: "Para transportador com IE, UF é obrigatória",
        check: |t| t.ie.is_none() || t.uf.is_some(),
    },
    Rule {
        field: "CNPJ",
        message: "CNPJ e CPF do transportador não podem ser informados em conjunto",
        check: |t| t.cnpj.is_none() || t.cpf.is_none(),
    },
];

/// IPI situation codes that carry a calculation group.
pub static IPI_CST_TRIBUTADO: &[&str] = &["00", "49", "50", "99"];

/// IPI: taxed situation codes demand the IPITrib group.
pub static IPI_RULES: &[Rule<Ipi>] = &[Rule {
    field: "IPITrib",
    message: "Para CST tributado do IPI, o grupo IPITrib é obrigatório",
    check: |ipi| !IPI_CST_TRIBUTADO.contains(&ipi.cst.as_str()) || ipi.trib.is_some(),
}];

/// PIS/COFINS situation codes taxed by rate.
pub static PIS_COFINS_CST_ALIQ: &[&str] = &["01", "02"];
/// PIS/COFINS situation codes taxed by quantity.
pub static PIS_COFINS_CST_QTDE: &[&str] = &["03"];
/// PIS/COFINS situation codes with no calculation group.
pub static PIS_COFINS_CST_NT: &[&str] = &["04", "05", "06", "07", "08", "09"];
/// Remaining PIS/COFINS situation codes, settled through the catch-all
/// "other operations" group.
pub static PIS_COFINS_CST_OUTR: &[&str] = &[
    "49", "50", "51", "52", "53", "54", "55", "56", "60", "61", "62", "63", "64", "65", "66",
    "67", "70", "71", "72", "73", "74", "75", "98", "99",
];

fn cst_in(cst: &str, table: &[&str]) -> bool {
    table.contains(&cst)
}

/// PIS: exactly the group matching the situation code, no other.
pub static PIS_RULES: &[Rule<Pis>] = &[
    Rule {
        field: "PISAliq",
        message: "Para CST 01 ou 02, o grupo PISAliq é obrigatório",
        check: |p| !cst_in(&p.cst, PIS_COFINS_CST_ALIQ) || p.aliq.is_some(),
    },
    Rule {
        field: "PISQtde",
        message: "Para CST 03, o grupo PISQtde é obrigatório",
        check: |p| !cst_in(&p.cst, PIS_COFINS_CST_QTDE) || p.qtde.is_some(),
    },
    Rule {
        field: "PISOutr",
        message: "Para CST de outras operações, o grupo PISOutr é obrigatório",
        check: |p| !cst_in(&p.cst, PIS_COFINS_CST_OUTR) || p.outr.is_some(),
    },
    Rule {
        field: "PISAliq",
        message: "O grupo PISAliq não corresponde ao CST informado",
        check: |p| p.aliq.is_none() || cst_in(&p.cst, PIS_COFINS_CST_ALIQ),
    },
    Rule {
        field: "PISQtde",
        message: "O grupo PISQtde não corresponde ao CST informado",
        check: |p| p.qtde.is_none() || cst_in(&p.cst, PIS_COFINS_CST_QTDE),
    },
    Rule {
        field: "PISOutr",
        message: "O grupo PISOutr não corresponde ao CST informado",
        check: |p| p.outr.is_none() || cst_in(&p.cst, PIS_COFINS_CST_OUTR),
    },
];

/// COFINS: same dispatch as PIS, with COFINSOutr as the catch-all.
pub static COFINS_RULES: &[Rule<Cofins>] = &[
    Rule {
        field: "COFINSAliq",
        message: "Para CST 01 ou 02, o grupo COFINSAliq é obrigatório",
        check: |c| !cst_in(&c.cst, PIS_COFINS_CST_ALIQ) || c.aliq.is_some(),
    },
    Rule {
        field: "COFINSQtde",
        message: "Para CST 03, o grupo COFINSQtde é obrigatório",
        check: |c| !cst_in(&c.cst, PIS_COFINS_CST_QTDE) || c.qtde.is_some(),
    },
    Rule {
        field: "COFINSOutr",
        message: "Para CST de outras operações, o grupo COFINSOutr é obrigatório",
        check: |c| !cst_in(&c.cst, PIS_COFINS_CST_OUTR) || c.outr.is_some(),
    },
    Rule {
        field: "COFINSAliq",
        message: "O grupo COFINSAliq não corresponde ao CST informado",
        check: |c| c.aliq.is_none() || cst_in(&c.cst, PIS_COFINS_CST_ALIQ),
    },
    Rule {
        field: "COFINSQtde",
        message: "O grupo COFINSQtde não corresponde ao CST informado",
        check: |c| c.qtde.is_none() || cst_in(&c.cst, PIS_COFINS_CST_QTDE),
    },
    Rule {
        field: "COFINSOutr",
        message: "O grupo COFINSOutr não corresponde ao CST informado",
        check: |c| c.outr.is_none() || cst_in(&c.cst, PIS_COFINS_CST_OUTR),
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Endereco;

    fn endereco() -> Endereco {
        Endereco {
            x_lgr: "Rua das Flores".into(),
            nro: "100".into(),
            x_cpl: None,
            x_bairro: "Centro".into(),
            c_mun: "3550308".into(),
            uf: "SP".into(),
            cep: Some("01310100".into()),
            c_pais: Some(1058),
            fone: "1133334444".into(),
        }
    }

    fn dest_estrangeiro() -> Dest {
        Dest {
            cpf_cnpj: Some("EX-99".into()),
            x_nome: "Foreign Buyer Inc".into(),
            ender_dest: endereco(),
            ind_ie_dest: "9".into(),
            ie: None,
            isuf: None,
            im: None,
            email: None,
        }
    }

    #[test]
    fn foreign_id_with_indicator_9_passes() {
        let mut errors = Vec::new();
        apply_rules(&dest_estrangeiro(), DEST_RULES, "dest", &mut errors);
        assert!(errors.is_empty(), "{errors:?}");
    }

    #[test]
    fn foreign_id_with_wrong_indicator_fails() {
        let dest = Dest {
            ind_ie_dest: "1".into(),
            ..dest_estrangeiro()
        };
        let mut errors = Vec::new();
        apply_rules(&dest, DEST_RULES, "dest", &mut errors);
        // Indicator must be 9 and, as indIEDest='1', the IE becomes
        // mandatory; both findings are reported.
        assert_eq!(errors.len(), 2);
        assert!(errors.iter().any(|e| e.field == "dest.indIEDest"));
        assert!(
            errors
                .iter()
                .any(|e| e.message == "Para indIEDest='1', IE é obrigatória")
        );
    }

    #[test]
    fn exempt_indicator_rejects_registration_value() {
        let dest = Dest {
            cpf_cnpj: Some("11222333000181".into()),
            ind_ie_dest: "2".into(),
            ie: Some("123456789".into()),
            ..dest_estrangeiro()
        };
        let mut errors = Vec::new();
        apply_rules(&dest, DEST_RULES, "dest", &mut errors);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "Para indIEDest='2', IE não deve ser informada");
    }

    #[test]
    fn all_failures_are_collected() {
        // Foreign id with an IE and indicator 1: three independent rules
        // fail and all three findings surface.
        let dest = Dest {
            ind_ie_dest: "1".into(),
            ie: Some("".into()),
            ..dest_estrangeiro()
        };
        let mut errors = Vec::new();
        apply_rules(&dest, DEST_RULES, "dest", &mut errors);
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn pis_dispatch_per_cst() {
        let pis = Pis {
            cst: "01".into(),
            aliq: None,
            qtde: None,
            outr: None,
        };
        let mut errors = Vec::new();
        apply_rules(&pis, PIS_RULES, "det[0].imposto.PIS", &mut errors);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "det[0].imposto.PIS.PISAliq");
    }

    #[test]
    fn pis_group_must_match_cst() {
        let pis = Pis {
            cst: "07".into(),
            aliq: None,
            qtde: Some(crate::core::PisQtde {
                q_bc_prod: rust_decimal_macros::dec!(10),
                v_aliq_prod: rust_decimal_macros::dec!(0.5),
                v_pis: rust_decimal_macros::dec!(5.00),
            }),
            outr: None,
        };
        let mut errors = Vec::new();
        apply_rules(&pis, PIS_RULES, "PIS", &mut errors);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "O grupo PISQtde não corresponde ao CST informado");
    }
}
