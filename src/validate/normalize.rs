//! Normalization pass applied before validation.
//!
//! Free-text fields are trimmed and accent-stripped (the transmitted layout
//! only admits the restricted character set), code-like fields are trimmed,
//! and fields with declared defaults are filled in. The validated document
//! returned to the caller is this normalized form.

use chrono::Local;

use crate::core::{Nfe, NfRef, ProdutoEspecifico, RefNf, remove_accents};

/// Trim and strip accents in place.
fn norm(value: &mut String) {
    *value = remove_accents(value.trim());
}

fn norm_opt(value: &mut Option<String>) {
    if let Some(v) = value {
        norm(v);
    }
}

/// Trim only — for code fields where the layout trims surrounding space but
/// the content itself is not free text.
fn trim(value: &mut String) {
    *value = value.trim().to_string();
}

fn trim_opt(value: &mut Option<String>) {
    if let Some(v) = value {
        trim(v);
    }
}

fn norm_endereco(endereco: &mut crate::core::Endereco) {
    norm(&mut endereco.x_lgr);
    norm(&mut endereco.nro);
    norm_opt(&mut endereco.x_cpl);
    norm(&mut endereco.x_bairro);
    norm(&mut endereco.fone);
}

/// Normalize the whole document in place.
pub fn normalize(nfe: &mut Nfe) {
    let agora = Local::now().naive_local();

    // ide
    norm(&mut nfe.ide.nat_op);
    nfe.ide.serie.get_or_insert(0);
    nfe.ide.dh_emi.get_or_insert(agora);
    nfe.ide.dh_sai_ent.get_or_insert(agora);
    for nf_ref in &mut nfe.ide.nf_ref {
        if let NfRef::Nfe {
            ref_nf: RefNf::Produtor(produtor),
            ..
        } = nf_ref
        {
            produtor.ie.get_or_insert_with(|| "ISENTO".to_string());
        }
    }

    // emit
    norm(&mut nfe.emit.x_nome);
    norm_opt(&mut nfe.emit.x_fant);
    norm_endereco(&mut nfe.emit.ender_emit);
    if let Some(conjugada) = &mut nfe.emit.conjugada {
        norm(&mut conjugada.im);
    }

    // dest
    norm(&mut nfe.dest.x_nome);
    norm_endereco(&mut nfe.dest.ender_dest);
    norm_opt(&mut nfe.dest.isuf);
    norm_opt(&mut nfe.dest.im);

    // retirada / entrega
    if let Some(retirada) = &mut nfe.retirada {
        norm_opt(&mut retirada.x_nome);
        norm_endereco(&mut retirada.endereco);
    }
    if let Some(entrega) = &mut nfe.entrega {
        norm_opt(&mut entrega.x_nome);
        norm_endereco(&mut entrega.endereco);
        norm_opt(&mut entrega.fone);
    }

    // det
    for det in &mut nfe.det {
        norm_opt(&mut det.c_prod);
        trim_opt(&mut det.c_ean);
        norm(&mut det.x_prod);
        trim_opt(&mut det.ncm);
        trim_opt(&mut det.cest);
        norm(&mut det.u_com);
        norm(&mut det.u_trib);
        trim_opt(&mut det.c_ean_trib);
        norm_opt(&mut det.x_ped);

        for di in &mut det.di {
            norm(&mut di.n_di);
            norm(&mut di.x_loc_desemb);
            norm(&mut di.c_exportador);
            for adi in &mut di.adi {
                norm(&mut adi.c_fabricante);
            }
        }

        for rastro in &mut det.rastro {
            norm(&mut rastro.n_lote);
        }

        match &mut det.produto_especifico {
            Some(ProdutoEspecifico::Veiculo(veic)) => {
                trim(&mut veic.chassi);
                norm(&mut veic.c_cor);
                norm(&mut veic.x_cor);
                norm(&mut veic.pot);
                norm(&mut veic.cilin);
                norm(&mut veic.n_serie);
                norm(&mut veic.n_motor);
                norm(&mut veic.dist);
                trim(&mut veic.tp_pint);
            }
            Some(ProdutoEspecifico::Medicamento(med)) => {
                norm_opt(&mut med.x_motivo_isencao);
            }
            Some(ProdutoEspecifico::Armamento(armas)) => {
                for arma in armas {
                    norm(&mut arma.n_serie);
                    norm(&mut arma.n_cano);
                    norm(&mut arma.desc);
                }
            }
            Some(ProdutoEspecifico::Combustivel(_)) | Some(ProdutoEspecifico::Recopi(_)) | None => {}
        }
    }

    // transp
    if let Some(transporta) = &mut nfe.transp.transporta {
        norm_opt(&mut transporta.x_nome);
        norm_opt(&mut transporta.x_ender);
        norm_opt(&mut transporta.x_mun);
    }
    for vol in &mut nfe.transp.vol {
        norm_opt(&mut vol.esp);
        norm_opt(&mut vol.marca);
        norm_opt(&mut vol.n_vol);
    }

    // cobr / pag
    if let Some(cobr) = &mut nfe.cobr {
        if let Some(fat) = &mut cobr.fat {
            norm(&mut fat.n_fat);
        }
        for dup in &mut cobr.dup {
            norm(&mut dup.n_dup);
        }
    }
    for det_pag in &mut nfe.pag.det_pag {
        if let Some(card) = &mut det_pag.card {
            trim_opt(&mut card.c_aut);
        }
    }

    // infAdic
    if let Some(inf_adic) = &mut nfe.inf_adic {
        norm_opt(&mut inf_adic.inf_ad_fisco);
        norm_opt(&mut inf_adic.inf_cpl);
    }
}
