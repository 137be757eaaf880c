//! End-to-end validation of complete documents: one valid fixture, then one
//! mutation per rule family to confirm the finding and its field path.

use chrono::NaiveDate;
use notafiscal::core::{
    Cobr, ConstraintKind, Dest, Det, DetPag, Dup, Emit, Endereco, Entrega, Fat, IcmsTot, Ide,
    Imposto, InfAdic, Med, Nfe, NfeError, Pag, ProdutoEspecifico, Total, Transp, Transporta, Uf,
};
use notafiscal::icms::IcmsPayload;
use notafiscal::validate::{ValidationConfig, validate_nfe};
use rust_decimal_macros::dec;

const CNPJ_EMITENTE: &str = "11222333000181";
const CPF_DESTINATARIO: &str = "52998224725";

fn endereco() -> Endereco {
    Endereco {
        x_lgr: "Avenida Paulista".into(),
        nro: "1000".into(),
        x_cpl: Some("Conjunto 52".into()),
        x_bairro: "Bela Vista".into(),
        c_mun: "3550308".into(),
        uf: "SP".into(),
        cep: Some("01310100".into()),
        c_pais: Some(1058),
        fone: "1133334444".into(),
    }
}

fn ide() -> Ide {
    Ide {
        nat_op: "VENDA DE MERCADORIA".into(),
        serie: Some(1),
        n_nf: 4321,
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

fn emit() -> Emit {
    Emit {
        cnpj: CNPJ_EMITENTE.into(),
        x_nome: "Distribuidora Andorinha Ltda".into(),
        x_fant: Some("Andorinha".into()),
        ender_emit: endereco(),
        ie: "110042490114".into(),
        iest: None,
        conjugada: None,
        crt: "3".into(),
    }
}

fn dest() -> Dest {
    Dest {
        cpf_cnpj: Some(CPF_DESTINATARIO.into()),
        x_nome: "Maria da Silva".into(),
        ender_dest: endereco(),
        ind_ie_dest: "9".into(),
        ie: None,
        isuf: None,
        im: None,
        email: Some("maria@exemplo.com.br".into()),
    }
}

fn icms_00() -> IcmsPayload {
    IcmsPayload {
        orig: Some("0".into()),
        mod_bc: Some("3".into()),
        v_bc: Some(dec!(250.00)),
        p_icms: Some(dec!(18)),
        v_icms: Some(dec!(45.00)),
        ..Default::default()
    }
}

fn det() -> Det {
    Det {
        c_prod: Some("CAD-01".into()),
        c_ean: Some("7891234567895".into()),
        x_prod: "Caderno universitario 96 folhas".into(),
        ncm: Some("48202000".into()),
        nve: Vec::new(),
        cest: None,
        ind_escala: None,
        cnpj_fab: None,
        c_benef: None,
        ex_tipi: None,
        cfop: 5102,
        u_com: "UN".into(),
        q_com: dec!(20),
        v_un_com: dec!(12.5),
        v_prod: dec!(250.00),
        c_ean_trib: None,
        u_trib: "UN".into(),
        q_trib: dec!(20),
        v_un_trib: dec!(12.5),
        v_frete: None,
        v_seg: None,
        v_desc: None,
        v_outro: None,
        ind_tot: "1".into(),
        di: Vec::new(),
        det_export: Vec::new(),
        x_ped: None,
        n_item_ped: None,
        n_fci: None,
        rastro: Vec::new(),
        produto_especifico: None,
        imposto: Imposto {
            v_tot_trib: None,
            icms: icms_00(),
            icms_uf_dest: None,
            ipi: None,
            ii: None,
            pis: None,
            pis_st: None,
            cofins: None,
            cofins_st: None,
            issqn: None,
        },
    }
}

fn total() -> Total {
    Total {
        icms_tot: IcmsTot {
            v_bc: dec!(250.00),
            v_icms: dec!(45.00),
            v_icms_deson: dec!(0),
            v_fcp: dec!(0),
            v_bc_st: dec!(0),
            v_st: dec!(0),
            v_fcp_st: dec!(0),
            v_fcp_st_ret: dec!(0),
            v_prod: dec!(250.00),
            v_frete: dec!(0),
            v_seg: dec!(0),
            v_desc: dec!(0),
            v_ii: dec!(0),
            v_ipi: dec!(0),
            v_ipi_devol: dec!(0),
            v_pis: dec!(4.13),
            v_cofins: dec!(19.00),
            v_outro: dec!(0),
            v_nf: dec!(250.00),
            v_tot_trib: None,
        },
        issqn_tot: None,
        ret_trib: None,
    }
}

fn nfe() -> Nfe {
    Nfe {
        ide: ide(),
        emit: emit(),
        dest: dest(),
        retirada: None,
        entrega: None,
        aut_xml: vec![CNPJ_EMITENTE.to_string()],
        det: vec![det()],
        total: total(),
        transp: Transp {
            mod_frete: "0".into(),
            transporta: None,
            veic_transp: None,
            vol: Vec::new(),
        },
        cobr: Some(Cobr {
            fat: Some(Fat {
                n_fat: "FAT-4321".into(),
                v_orig: dec!(250.00),
                v_desc: None,
                v_liq: dec!(250.00),
            }),
            dup: vec![Dup {
                n_dup: "001".into(),
                d_venc: NaiveDate::from_ymd_opt(2024, 7, 15),
                v_dup: dec!(250.00),
            }],
        }),
        pag: Pag {
            det_pag: vec![DetPag {
                ind_pag: Some("0".into()),
                t_pag: "01".into(),
                v_pag: dec!(250.00),
                card: None,
            }],
            v_troco: None,
        },
        inf_adic: None,
    }
}

fn config() -> ValidationConfig {
    ValidationConfig {
        uf_emitente: Uf::Sp,
    }
}

fn findings(result: Result<Nfe, NfeError>) -> Vec<notafiscal::core::ValidationError> {
    match result {
        Ok(_) => panic!("esperava falha de validação"),
        Err(NfeError::Validacao(errors)) => errors,
        Err(err) => panic!("erro inesperado: {err}"),
    }
}

#[test]
fn complete_document_validates() {
    let result = validate_nfe(&nfe(), &config());
    assert!(result.is_ok(), "{result:?}");
}

#[test]
fn normalization_strips_accents_and_fills_defaults() {
    let mut doc = nfe();
    doc.ide.nat_op = "  Venda à vista  ".into();
    doc.ide.serie = None;
    doc.ide.dh_emi = None;
    doc.dest.x_nome = "José Conceição".into();

    let validated = validate_nfe(&doc, &config()).unwrap();
    assert_eq!(validated.ide.nat_op, "Venda a vista");
    assert_eq!(validated.ide.serie, Some(0));
    assert!(validated.ide.dh_emi.is_some());
    assert!(validated.ide.dh_sai_ent.is_some());
    assert_eq!(validated.dest.x_nome, "Jose Conceicao");
}

#[test]
fn emitter_checksum_failure_is_reported() {
    let mut doc = nfe();
    doc.emit.cnpj = "11222333000199".into();
    let errors = findings(validate_nfe(&doc, &config()));
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "emit.CNPJ");
    assert_eq!(errors[0].kind, ConstraintKind::Checksum);
}

#[test]
fn foreign_recipient_round_trip() {
    // 20-character foreign id with indicator 9 and no IE validates.
    let mut doc = nfe();
    doc.dest.cpf_cnpj = Some("PASS-1998-BR-000-077".into());
    doc.dest.ind_ie_dest = "9".into();
    doc.dest.ie = None;
    assert!(validate_nfe(&doc, &config()).is_ok());

    // Same recipient with indicator 1 fails on the registration value.
    doc.dest.ind_ie_dest = "1".into();
    let errors = findings(validate_nfe(&doc, &config()));
    assert!(errors.iter().all(|e| e.kind == ConstraintKind::CrossField));
    assert!(
        errors
            .iter()
            .any(|e| e.field == "dest.IE" && e.message == "Para indIEDest='1', IE é obrigatória")
    );
}

#[test]
fn document_needs_at_least_one_item() {
    let mut doc = nfe();
    doc.det.clear();
    let errors = findings(validate_nfe(&doc, &config()));
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "det");
    assert_eq!(errors[0].kind, ConstraintKind::Structural);
}

#[test]
fn benefit_state_message_names_the_state() {
    let doc = nfe();
    let errors = findings(validate_nfe(
        &doc,
        &ValidationConfig {
            uf_emitente: Uf::Sc,
        },
    ));
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "det[0].cBenef");
    assert_eq!(
        errors[0].message,
        "Para UF do Emitente='SC', cBenef é obrigatório"
    );

    // Outside the fixed state set the same document passes untouched.
    assert!(validate_nfe(&doc, &config()).is_ok());
}

#[test]
fn unresolvable_icms_payload_is_one_domain_finding() {
    let mut doc = nfe();
    doc.det[0].imposto.icms = IcmsPayload {
        orig: Some("0".into()),
        v_bc: Some(dec!(250.00)),
        v_bc_st_ret: Some(dec!(10.00)),
        p_cred_sn: Some(dec!(2)),
        ..Default::default()
    };
    let errors = findings(validate_nfe(&doc, &config()));
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "det[0].imposto.ICMS");
    assert_eq!(errors[0].kind, ConstraintKind::DomainEnum);
}

#[test]
fn all_findings_surface_in_one_pass() {
    let mut doc = nfe();
    doc.emit.cnpj = "11222333000199".into(); // checksum
    doc.ide.tp_nf = "7".into(); // domain
    doc.det[0].v_prod = dec!(250.001); // precision
    doc.dest.ind_ie_dest = "2".into();
    doc.dest.ie = Some("123456789".into()); // cross-field

    let errors = findings(validate_nfe(&doc, &config()));
    assert_eq!(errors.len(), 4);
    let kinds: Vec<ConstraintKind> = errors.iter().map(|e| e.kind).collect();
    assert!(kinds.contains(&ConstraintKind::Checksum));
    assert!(kinds.contains(&ConstraintKind::DomainEnum));
    assert!(kinds.contains(&ConstraintKind::Precision));
    assert!(kinds.contains(&ConstraintKind::CrossField));
}

#[test]
fn delivery_party_is_validated() {
    let mut doc = nfe();
    doc.entrega = Some(Entrega {
        cpf_cnpj: Some("123".into()),
        x_nome: Some("Depósito Central".into()),
        endereco: endereco(),
        fone: None,
        email: None,
        ie: None,
    });
    let errors = findings(validate_nfe(&doc, &config()));
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "entrega.cpfCnpj");
}

#[test]
fn medicine_item_requires_registry_or_justification() {
    let mut doc = nfe();
    doc.det[0].produto_especifico = Some(ProdutoEspecifico::Medicamento(Med {
        c_prod_anvisa: None,
        x_motivo_isencao: None,
        v_pmc: dec!(19.90),
    }));
    let errors = findings(validate_nfe(&doc, &config()));
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "det[0].med.xMotivoIsencao");

    doc.det[0].produto_especifico = Some(ProdutoEspecifico::Medicamento(Med {
        c_prod_anvisa: Some("1234567890123".into()),
        x_motivo_isencao: None,
        v_pmc: dec!(19.90),
    }));
    assert!(validate_nfe(&doc, &config()).is_ok());
}

#[test]
fn carrier_registration_requires_state() {
    let mut doc = nfe();
    doc.transp.transporta = Some(Transporta {
        cnpj: Some(CNPJ_EMITENTE.into()),
        cpf: None,
        x_nome: Some("Transportes Rapidos Ltda".into()),
        ie: Some("123456789".into()),
        x_ender: None,
        x_mun: None,
        uf: None,
    });
    let errors = findings(validate_nfe(&doc, &config()));
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "transp.transporta.UF");
}

#[test]
fn addenda_length_limits() {
    let mut doc = nfe();
    doc.inf_adic = Some(InfAdic {
        inf_ad_fisco: Some("x".repeat(2001)),
        inf_cpl: Some("Entrega no período da manhã".into()),
    });
    let errors = findings(validate_nfe(&doc, &config()));
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "infAdic.infAdFisco");
}

#[test]
fn input_document_is_not_mutated() {
    let doc = nfe();
    let mut com_acentos = doc.clone();
    com_acentos.dest.x_nome = "José".into();
    let validated = validate_nfe(&com_acentos, &config()).unwrap();
    assert_eq!(validated.dest.x_nome, "Jose");
    assert_eq!(com_acentos.dest.x_nome, "José");
}
