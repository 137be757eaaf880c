//! Line-item validation: product identity, import declarations,
//! traceability, product-specific attachments and the tax block.

use crate::core::constraint::*;
use crate::core::uf::{Uf, is_known_uf, is_known_uf_or_exterior};
use crate::core::{
    Adi, Arma, Comb, Det, DetExport, Di, Med, ProdutoEspecifico, ValidationError, VeicProd,
};

use super::rules::{DI_RULES, MED_RULES, apply_rules};
use super::tax::validate_imposto;

const IND_ESCALA: &[&str] = &["N", "S"];
const IND_TOT: &[&str] = &["0", "1"];
const EAN_LENGTHS: &[usize] = &[8, 12, 13, 14];

/// Validate one line item. `index` is the zero-based position used in the
/// reported field paths.
pub fn validate_det(
    det: &Det,
    index: usize,
    uf_emitente: Uf,
    errors: &mut Vec<ValidationError>,
) {
    let prefix = format!("det[{index}]");

    if let Some(c_prod) = &det.c_prod {
        check_text(c_prod, 1, 60, &format!("{prefix}.cProd"), errors);
    }
    if let Some(c_ean) = &det.c_ean {
        check_ean(c_ean, &format!("{prefix}.cEAN"), errors);
    }
    check_text(&det.x_prod, 1, 120, &format!("{prefix}.xProd"), errors);
    if let Some(ncm) = &det.ncm {
        check_text(ncm, 8, 8, &format!("{prefix}.NCM"), errors);
    }
    if det.nve.len() > 8 {
        errors.push(ValidationError::structural(
            format!("{prefix}.NVE"),
            "a lista NVE admite no máximo 8 códigos",
        ));
    }
    for (i, nve) in det.nve.iter().enumerate() {
        check_text(nve, 6, 6, &format!("{prefix}.NVE[{i}]"), errors);
    }
    if let Some(cest) = &det.cest {
        check_text(cest, 7, 7, &format!("{prefix}.CEST"), errors);
    }
    if let Some(ind_escala) = &det.ind_escala {
        check_code(ind_escala, IND_ESCALA, &format!("{prefix}.indEscala"), errors);
    }
    if let Some(cnpj_fab) = &det.cnpj_fab {
        check_cnpj(cnpj_fab, &format!("{prefix}.CNPJFab"), errors);
    }
    if let Some(c_benef) = &det.c_benef {
        if c_benef.len() != 8 && c_benef.len() != 10 {
            errors.push(ValidationError::format(
                format!("{prefix}.cBenef"),
                "o código de benefício fiscal deve ter 8 ou 10 caracteres",
            ));
        }
    }
    if let Some(ex_tipi) = det.ex_tipi {
        if !(10..=999).contains(&ex_tipi) {
            errors.push(ValidationError::format(
                format!("{prefix}.EXTIPI"),
                "EXTIPI deve estar entre 10 e 999",
            ));
        }
    }
    if !(1000..=9999).contains(&det.cfop) {
        errors.push(ValidationError::format(
            format!("{prefix}.CFOP"),
            "CFOP deve estar entre 1000 e 9999",
        ));
    }
    check_text(&det.u_com, 1, 6, &format!("{prefix}.uCom"), errors);
    check_precision(det.q_com, 4, &format!("{prefix}.qCom"), errors);
    check_precision(det.v_un_com, 10, &format!("{prefix}.vUnCom"), errors);
    check_precision(det.v_prod, 2, &format!("{prefix}.vProd"), errors);
    if let Some(c_ean_trib) = &det.c_ean_trib {
        check_ean(c_ean_trib, &format!("{prefix}.cEANTrib"), errors);
    }
    check_text(&det.u_trib, 1, 6, &format!("{prefix}.uTrib"), errors);
    check_precision(det.q_trib, 4, &format!("{prefix}.qTrib"), errors);
    check_precision(det.v_un_trib, 10, &format!("{prefix}.vUnTrib"), errors);
    for (value, tag) in [
        (det.v_frete, "vFrete"),
        (det.v_seg, "vSeg"),
        (det.v_desc, "vDesc"),
        (det.v_outro, "vOutro"),
    ] {
        if let Some(value) = value {
            check_precision(value, 2, &format!("{prefix}.{tag}"), errors);
        }
    }
    check_code(&det.ind_tot, IND_TOT, &format!("{prefix}.indTot"), errors);

    if det.di.len() > 100 {
        errors.push(ValidationError::structural(
            format!("{prefix}.DI"),
            "a lista de declarações de importação admite no máximo 100 entradas",
        ));
    }
    for (i, di) in det.di.iter().enumerate() {
        validate_di(di, &format!("{prefix}.DI[{i}]"), errors);
    }

    if det.det_export.len() > 500 {
        errors.push(ValidationError::structural(
            format!("{prefix}.detExport"),
            "a lista de exportação admite no máximo 500 entradas",
        ));
    }
    for (i, det_export) in det.det_export.iter().enumerate() {
        validate_det_export(det_export, &format!("{prefix}.detExport[{i}]"), errors);
    }

    if let Some(x_ped) = &det.x_ped {
        check_text(x_ped, 1, 15, &format!("{prefix}.xPed"), errors);
    }
    if let Some(n_item_ped) = &det.n_item_ped {
        check_digits(n_item_ped, 7, &format!("{prefix}.nItemPed"), errors);
    }
    if let Some(n_fci) = &det.n_fci {
        check_text(n_fci, 36, 36, &format!("{prefix}.nFCI"), errors);
    }

    if det.rastro.len() > 500 {
        errors.push(ValidationError::structural(
            format!("{prefix}.rastro"),
            "a lista de rastreabilidade admite no máximo 500 entradas",
        ));
    }
    for (i, rastro) in det.rastro.iter().enumerate() {
        let rastro_prefix = format!("{prefix}.rastro[{i}]");
        check_text(&rastro.n_lote, 1, 20, &format!("{rastro_prefix}.nLote"), errors);
        check_precision(rastro.q_lote, 3, &format!("{rastro_prefix}.qLote"), errors);
        check_digits_range(&rastro.c_agreg, 1, 20, &format!("{rastro_prefix}.cAgreg"), errors);
    }

    if let Some(produto_especifico) = &det.produto_especifico {
        validate_produto_especifico(produto_especifico, &prefix, errors);
    }

    validate_imposto(&det.imposto, &format!("{prefix}.imposto"), errors);

    // Cross-field rules of the item itself.
    if det.cest.is_some() && det.ind_escala.as_deref() == Some("N") && det.cnpj_fab.is_none() {
        errors.push(ValidationError::cross_field(
            format!("{prefix}.CNPJFab"),
            "Para indEscala='N', CNPJFab é obrigatório",
        ));
    }
    if uf_emitente.requires_cbenef() && det.c_benef.is_none() {
        errors.push(ValidationError::cross_field(
            format!("{prefix}.cBenef"),
            format!(
                "Para UF do Emitente='{}', cBenef é obrigatório",
                uf_emitente.code()
            ),
        ));
    }
}

fn check_ean(value: &str, field: &str, errors: &mut Vec<ValidationError>) {
    if !EAN_LENGTHS.contains(&value.len()) {
        errors.push(ValidationError::format(
            field,
            "o código de barras deve ter 8, 12, 13 ou 14 caracteres",
        ));
    }
}

fn check_n_draw(value: &str, field: &str, errors: &mut Vec<ValidationError>) {
    if value.len() != 9 && value.len() != 11 {
        errors.push(ValidationError::format(
            field,
            "o ato concessório de drawback deve ter 9 ou 11 caracteres",
        ));
    }
}

fn validate_di(di: &Di, prefix: &str, errors: &mut Vec<ValidationError>) {
    check_text(&di.n_di, 1, 12, &format!("{prefix}.nDI"), errors);
    check_text(&di.x_loc_desemb, 1, 60, &format!("{prefix}.xLocDesemb"), errors);
    if !is_known_uf(&di.uf_desemb) {
        errors.push(ValidationError::domain(
            format!("{prefix}.UFDesemb"),
            format!("UF '{}' desconhecida", di.uf_desemb),
        ));
    }
    check_code(
        &di.tp_via_transp,
        &["1", "2", "3", "4", "5", "6", "7"],
        &format!("{prefix}.tpViaTransp"),
        errors,
    );
    if let Some(v_afrmm) = di.v_afrmm {
        check_precision(v_afrmm, 2, &format!("{prefix}.vAFRMM"), errors);
    }
    check_code(
        &di.tp_intermedio,
        &["1", "2", "3"],
        &format!("{prefix}.tpIntermedio"),
        errors,
    );
    if let Some(cnpj) = &di.cnpj {
        check_cnpj(cnpj, &format!("{prefix}.CNPJ"), errors);
    }
    if let Some(uf_terceiro) = &di.uf_terceiro {
        if !is_known_uf(uf_terceiro) {
            errors.push(ValidationError::domain(
                format!("{prefix}.UFTerceiro"),
                format!("UF '{uf_terceiro}' desconhecida"),
            ));
        }
    }
    check_text(&di.c_exportador, 1, 60, &format!("{prefix}.cExportador"), errors);

    if di.adi.is_empty() || di.adi.len() > 100 {
        errors.push(ValidationError::structural(
            format!("{prefix}.adi"),
            "a declaração deve conter entre 1 e 100 adições",
        ));
    }
    for (i, adi) in di.adi.iter().enumerate() {
        validate_adi(adi, &format!("{prefix}.adi[{i}]"), errors);
    }

    apply_rules(di, DI_RULES, prefix, errors);
}

fn validate_adi(adi: &Adi, prefix: &str, errors: &mut Vec<ValidationError>) {
    if !(1..=999).contains(&adi.n_adicao) {
        errors.push(ValidationError::format(
            format!("{prefix}.nAdicao"),
            "o número da adição deve estar entre 1 e 999",
        ));
    }
    check_text(&adi.c_fabricante, 1, 60, &format!("{prefix}.cFabricante"), errors);
    if let Some(v_desc_di) = adi.v_desc_di {
        check_precision(v_desc_di, 2, &format!("{prefix}.vDescDI"), errors);
    }
    if let Some(n_draw) = &adi.n_draw {
        check_n_draw(n_draw, &format!("{prefix}.nDraw"), errors);
    }
}

fn validate_det_export(det_export: &DetExport, prefix: &str, errors: &mut Vec<ValidationError>) {
    if let Some(n_draw) = &det_export.n_draw {
        check_n_draw(n_draw, &format!("{prefix}.nDraw"), errors);
    }
    if let Some(export_ind) = &det_export.export_ind {
        check_digits(&export_ind.n_re, 12, &format!("{prefix}.exportInd.nRE"), errors);
        check_digits(&export_ind.ch_nfe, 44, &format!("{prefix}.exportInd.chNFe"), errors);
        check_precision(
            export_ind.q_export,
            4,
            &format!("{prefix}.exportInd.qExport"),
            errors,
        );
    }
}

fn validate_produto_especifico(
    produto: &ProdutoEspecifico,
    prefix: &str,
    errors: &mut Vec<ValidationError>,
) {
    match produto {
        ProdutoEspecifico::Veiculo(veic) => {
            validate_veic_prod(veic, &format!("{prefix}.veicProd"), errors)
        }
        ProdutoEspecifico::Medicamento(med) => validate_med(med, &format!("{prefix}.med"), errors),
        ProdutoEspecifico::Armamento(armas) => {
            if armas.is_empty() || armas.len() > 500 {
                errors.push(ValidationError::structural(
                    format!("{prefix}.arma"),
                    "o detalhamento de armamento deve conter entre 1 e 500 entradas",
                ));
            }
            for (i, arma) in armas.iter().enumerate() {
                validate_arma(arma, &format!("{prefix}.arma[{i}]"), errors);
            }
        }
        ProdutoEspecifico::Combustivel(comb) => {
            validate_comb(comb, &format!("{prefix}.comb"), errors)
        }
        ProdutoEspecifico::Recopi(n_recopi) => {
            check_digits(n_recopi, 20, &format!("{prefix}.nRECOPI"), errors);
        }
    }
}

const TP_COMB: &[&str] = &[
    "01", "02", "03", "04", "05", "06", "07", "08", "09", "10", "11", "12", "13", "14", "15",
    "16", "17", "18",
];
const TP_VEIC: &[&str] = &[
    "02", "03", "04", "05", "06", "07", "08", "10", "11", "13", "14", "17", "18", "19", "20",
    "21", "22", "23", "24", "25", "26",
];
const C_COR_DENATRAN: &[&str] = &[
    "01", "02", "03", "04", "05", "06", "07", "08", "09", "10", "11", "12", "13", "14", "15",
    "16",
];

fn validate_veic_prod(veic: &VeicProd, prefix: &str, errors: &mut Vec<ValidationError>) {
    check_code(&veic.tp_op, &["1", "2", "0"], &format!("{prefix}.tpOp"), errors);
    check_text(&veic.chassi, 17, 17, &format!("{prefix}.chassi"), errors);
    check_text(&veic.c_cor, 1, 4, &format!("{prefix}.cCor"), errors);
    check_text(&veic.x_cor, 1, 40, &format!("{prefix}.xCor"), errors);
    check_text(&veic.pot, 1, 4, &format!("{prefix}.pot"), errors);
    check_text(&veic.cilin, 1, 4, &format!("{prefix}.cilin"), errors);
    check_precision(veic.peso_l, 4, &format!("{prefix}.pesoL"), errors);
    check_precision(veic.peso_b, 4, &format!("{prefix}.pesoB"), errors);
    check_text(&veic.n_serie, 1, 9, &format!("{prefix}.nSerie"), errors);
    check_code(&veic.tp_comb, TP_COMB, &format!("{prefix}.tpComb"), errors);
    check_text(&veic.n_motor, 1, 21, &format!("{prefix}.nMotor"), errors);
    check_precision(veic.cmt, 4, &format!("{prefix}.CMT"), errors);
    check_text(&veic.dist, 1, 4, &format!("{prefix}.dist"), errors);
    if !(1000..10_000).contains(&veic.ano_mod) {
        errors.push(ValidationError::format(
            format!("{prefix}.anoMod"),
            "o ano do modelo deve ter 4 dígitos",
        ));
    }
    check_text(&veic.tp_pint, 1, 1, &format!("{prefix}.tpPint"), errors);
    check_code(&veic.tp_veic, TP_VEIC, &format!("{prefix}.tpVeic"), errors);
    check_code(
        &veic.esp_veic,
        &["1", "2", "3", "4", "5", "6"],
        &format!("{prefix}.espVeic"),
        errors,
    );
    check_code(&veic.vin, &["R", "N"], &format!("{prefix}.VIN"), errors);
    check_code(
        &veic.cond_veic,
        &["1", "2", "3"],
        &format!("{prefix}.condVeic"),
        errors,
    );
    check_digits_range(&veic.c_mod, 1, 6, &format!("{prefix}.cMod"), errors);
    check_code(
        &veic.c_cor_denatran,
        C_COR_DENATRAN,
        &format!("{prefix}.cCorDENATRAN"),
        errors,
    );
    if veic.lota >= 999 {
        errors.push(ValidationError::format(
            format!("{prefix}.lota"),
            "a lotação deve ser inferior a 999",
        ));
    }
    check_code(
        &veic.tp_rest,
        &["0", "1", "2", "3", "4", "9"],
        &format!("{prefix}.tpRest"),
        errors,
    );
}

fn validate_med(med: &Med, prefix: &str, errors: &mut Vec<ValidationError>) {
    if let Some(c_prod_anvisa) = &med.c_prod_anvisa {
        check_text(c_prod_anvisa, 13, 13, &format!("{prefix}.cProdANVISA"), errors);
    }
    if let Some(x_motivo_isencao) = &med.x_motivo_isencao {
        check_text(x_motivo_isencao, 1, 255, &format!("{prefix}.xMotivoIsencao"), errors);
    }
    check_precision(med.v_pmc, 2, &format!("{prefix}.vPMC"), errors);

    apply_rules(med, MED_RULES, prefix, errors);
}

fn validate_arma(arma: &Arma, prefix: &str, errors: &mut Vec<ValidationError>) {
    check_code(&arma.tp_arma, &["0", "1"], &format!("{prefix}.tpArma"), errors);
    check_text(&arma.n_serie, 1, 15, &format!("{prefix}.nSerie"), errors);
    check_text(&arma.n_cano, 1, 15, &format!("{prefix}.nCano"), errors);
    check_text(&arma.desc, 1, 256, &format!("{prefix}.descr"), errors);
}

fn validate_comb(comb: &Comb, prefix: &str, errors: &mut Vec<ValidationError>) {
    check_digits(&comb.c_prod_anp, 9, &format!("{prefix}.cProdANP"), errors);
    check_digits_range(&comb.desc_anp, 2, 95, &format!("{prefix}.descANP"), errors);
    for (value, tag) in [
        (comb.p_glp, "pGLP"),
        (comb.p_gn_n, "pGNn"),
        (comb.p_gn_i, "pGNi"),
        (comb.q_temp, "qTemp"),
    ] {
        if let Some(value) = value {
            check_precision(value, 4, &format!("{prefix}.{tag}"), errors);
        }
    }
    if let Some(v_part) = comb.v_part {
        check_precision(v_part, 2, &format!("{prefix}.vPart"), errors);
    }
    if let Some(codif) = &comb.codif {
        check_digits_range(codif, 1, 21, &format!("{prefix}.CODIF"), errors);
    }
    if !is_known_uf_or_exterior(&comb.uf_cons) {
        errors.push(ValidationError::domain(
            format!("{prefix}.UFCons"),
            format!("UF '{}' desconhecida", comb.uf_cons),
        ));
    }
    if let Some(cide) = &comb.cide {
        check_precision(cide.q_bc_prod, 4, &format!("{prefix}.CIDE.qBCProd"), errors);
        check_precision(cide.v_aliq_prod, 4, &format!("{prefix}.CIDE.vAliqProd"), errors);
        check_precision(cide.v_cide, 2, &format!("{prefix}.CIDE.vCIDE"), errors);
    }
    if let Some(encerrante) = &comb.encerrante {
        let enc = format!("{prefix}.encerrante");
        check_digits_range(&encerrante.n_bico, 1, 3, &format!("{enc}.nBico"), errors);
        if let Some(n_bomba) = &encerrante.n_bomba {
            check_digits_range(n_bomba, 1, 3, &format!("{enc}.nBomba"), errors);
        }
        check_digits_range(&encerrante.n_tanque, 1, 3, &format!("{enc}.nTanque"), errors);
        check_precision(encerrante.v_enc_ini, 3, &format!("{enc}.vEncIni"), errors);
        check_precision(encerrante.v_enc_fin, 3, &format!("{enc}.vEncFin"), errors);
    }
}
