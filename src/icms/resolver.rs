//! Ordered resolution of the ICMS payload into one tax-situation shape.
//!
//! The payload carries no universal discriminator: some shapes embed a
//! CST/CSOSN sub-field, others are told apart by field set alone. Resolution
//! therefore attempts full structural validation of each candidate shape in a
//! fixed priority order and accepts the first that validates completely. A
//! matcher succeeds only when every present payload field belongs to the
//! candidate's layout, every required field is present, and every code and
//! decimal-place constraint holds.

use rust_decimal::Decimal;

use crate::core::{ValidationError, constraint::has_precision, uf::is_known_uf_or_exterior};

use super::types::*;

/// Resolve the ICMS shape of one line item.
///
/// `field` is the document path reported when no shape matches.
pub fn resolve(payload: &IcmsPayload, field: &str) -> Result<Icms, ValidationError> {
    CANDIDATOS
        .iter()
        .find_map(|matcher| matcher(payload))
        .ok_or_else(|| {
            ValidationError::domain(
                field,
                "nenhuma situação tributária do ICMS corresponde ao conteúdo informado",
            )
        })
}

/// Exemption motive codes admitted under each parent regime.
///
/// The legal set is conditioned on the regime carrying the exemption group;
/// there is no single global enumeration.
pub fn motivos_desoneracao(cst: &str) -> &'static [&'static str] {
    match cst {
        "20" | "70" => &["3", "9", "12"],
        "30" => &["6", "7", "9"],
        "40" => &["1", "3", "4", "5", "6", "7", "8", "9", "10", "11", "16"],
        "90" => &["9", "12"],
        _ => &[],
    }
}

type Matcher = fn(&IcmsPayload) -> Option<Icms>;

/// Candidate shapes in priority order. The order is a contract: shapes
/// overlap (a minimal `orig`-only payload satisfies more than one), and
/// ambiguous payloads must resolve to the earliest match.
const CANDIDATOS: [Matcher; 17] = [
    match_00,
    match_10,
    match_20,
    match_30,
    match_40,
    match_51,
    match_60,
    match_70,
    match_90,
    match_part,
    match_st,
    match_sn101,
    match_sn102,
    match_sn201,
    match_sn202,
    match_sn500,
    match_sn900,
];

impl IcmsPayload {
    fn present_fields(&self) -> Vec<&'static str> {
        let mut present = Vec::new();
        if self.orig.is_some() {
            present.push("orig");
        }
        if self.cst.is_some() {
            present.push("CST");
        }
        if self.csosn.is_some() {
            present.push("CSOSN");
        }
        if self.mod_bc.is_some() {
            present.push("modBC");
        }
        if self.p_red_bc.is_some() {
            present.push("pRedBC");
        }
        if self.v_bc.is_some() {
            present.push("vBC");
        }
        if self.p_icms.is_some() {
            present.push("pICMS");
        }
        if self.v_icms.is_some() {
            present.push("vICMS");
        }
        if self.v_icms_op.is_some() {
            present.push("vICMSOp");
        }
        if self.p_dif.is_some() {
            present.push("pDif");
        }
        if self.v_icms_dif.is_some() {
            present.push("vICMSDif");
        }
        if self.mod_bc_st.is_some() {
            present.push("modBCST");
        }
        if self.p_mva_st.is_some() {
            present.push("pMVAST");
        }
        if self.p_red_bc_st.is_some() {
            present.push("pRedBCST");
        }
        if self.v_bc_st.is_some() {
            present.push("vBCST");
        }
        if self.p_icms_st.is_some() {
            present.push("pICMSST");
        }
        if self.v_icms_st.is_some() {
            present.push("vICMSST");
        }
        if self.v_bc_st_ret.is_some() {
            present.push("vBCSTRet");
        }
        if self.p_st.is_some() {
            present.push("pST");
        }
        if self.v_icms_substituto.is_some() {
            present.push("vICMSSubstituto");
        }
        if self.v_icms_st_ret.is_some() {
            present.push("vICMSSTRet");
        }
        if self.v_bc_st_dest.is_some() {
            present.push("vBCSTDest");
        }
        if self.v_icms_st_dest.is_some() {
            present.push("vICMSSTDest");
        }
        if self.p_bc_op.is_some() {
            present.push("pBCOp");
        }
        if self.uf_st.is_some() {
            present.push("UFST");
        }
        if self.p_cred_sn.is_some() {
            present.push("pCredSN");
        }
        if self.v_cred_icms_sn.is_some() {
            present.push("vCredICMSSN");
        }
        if self.fcp.is_some() {
            present.push("fcp");
        }
        if self.fcp_st.is_some() {
            present.push("fcpST");
        }
        if self.fcp_ret.is_some() {
            present.push("fcpRet");
        }
        if self.icms_ret.is_some() {
            present.push("icmsRet");
        }
        if self.icms_efet.is_some() {
            present.push("icmsEfet");
        }
        if self.icms_des.is_some() {
            present.push("icmsDes");
        }
        if self.icms.is_some() {
            present.push("icms");
        }
        if self.icms_st.is_some() {
            present.push("icmsST");
        }
        if self.icms_sn.is_some() {
            present.push("icmsSN");
        }
        present
    }

    /// Whether every present field belongs to the candidate's layout.
    fn within(&self, allowed: &[&str]) -> bool {
        self.present_fields().iter().all(|f| allowed.contains(f))
    }
}

// ── Decode helpers ──────────────────────────────────────────────────────────

/// Required numeric field with a decimal-place budget.
fn num(value: Option<Decimal>, places: u32) -> Option<Decimal> {
    let value = value?;
    has_precision(value, places).then_some(value)
}

/// Optional numeric field; present values must respect the budget.
fn opt_num(value: Option<Decimal>, places: u32) -> Option<Option<Decimal>> {
    match value {
        None => Some(None),
        Some(v) => has_precision(v, places).then_some(Some(v)),
    }
}

/// Optional group; a present group must decode in full.
fn grupo<G, T>(group: &Option<G>, decode: impl Fn(&G) -> Option<T>) -> Option<Option<T>> {
    match group {
        None => Some(None),
        Some(inner) => decode(inner).map(Some),
    }
}

fn fcp_simples(g: &FcpPayload) -> Option<Fcp> {
    if g.v_bc_fcp.is_some() {
        return None;
    }
    Some(Fcp {
        p_fcp: num(g.p_fcp, 4)?,
        v_fcp: num(g.v_fcp, 2)?,
    })
}

fn fcp_com_base(g: &FcpPayload) -> Option<FcpBc> {
    Some(FcpBc {
        v_bc_fcp: num(g.v_bc_fcp, 2)?,
        p_fcp: num(g.p_fcp, 4)?,
        v_fcp: num(g.v_fcp, 2)?,
    })
}

fn fcp_st(g: &FcpStPayload) -> Option<FcpSt> {
    Some(FcpSt {
        v_bc_fcp_st: num(g.v_bc_fcp_st, 2)?,
        p_fcp_st: num(g.p_fcp_st, 4)?,
        v_fcp_st: num(g.v_fcp_st, 2)?,
    })
}

fn fcp_ret(g: &FcpRetPayload) -> Option<FcpRet> {
    Some(FcpRet {
        v_bc_fcp_st_ret: num(g.v_bc_fcp_st_ret, 2)?,
        p_fcp_st_ret: num(g.p_fcp_st_ret, 4)?,
        v_fcp_st_ret: num(g.v_fcp_st_ret, 2)?,
    })
}

fn ret(g: &IcmsRetPayload) -> Option<IcmsRet> {
    Some(IcmsRet {
        v_bc_st_ret: num(g.v_bc_st_ret, 2)?,
        p_st: num(g.p_st, 4)?,
        v_icms_substituto: opt_num(g.v_icms_substituto, 2)?,
        v_icms_st_ret: num(g.v_icms_st_ret, 2)?,
    })
}

fn efet(g: &IcmsEfetPayload) -> Option<IcmsEfet> {
    Some(IcmsEfet {
        p_red_bc_efet: opt_num(g.p_red_bc_efet, 4)?,
        v_bc_efet: opt_num(g.v_bc_efet, 2)?,
        p_icms_efet: opt_num(g.p_icms_efet, 4)?,
        v_icms_efet: opt_num(g.v_icms_efet, 2)?,
    })
}

fn deson(g: &IcmsDesPayload, regime: &str) -> Option<IcmsDeson> {
    let motivo = g.mot_des_icms.as_deref()?;
    if !motivos_desoneracao(regime).contains(&motivo) {
        return None;
    }
    Some(IcmsDeson {
        v_icms_deson: num(g.v_icms_deson, 2)?,
        mot_des_icms: motivo.to_string(),
    })
}

fn proprio(g: &IcmsProprioPayload) -> Option<IcmsProprio> {
    Some(IcmsProprio {
        mod_bc: ModBc::from_code(g.mod_bc.as_deref()?)?,
        p_red_bc: num(g.p_red_bc, 4)?,
        v_bc: num(g.v_bc, 2)?,
        p_icms: num(g.p_icms, 4)?,
        v_icms: num(g.v_icms, 2)?,
    })
}

fn substituicao(g: &IcmsSubstituicaoPayload) -> Option<IcmsSubstituicao> {
    Some(IcmsSubstituicao {
        mod_bc_st: ModBcSt::from_code(g.mod_bc_st.as_deref()?)?,
        p_mva_st: opt_num(g.p_mva_st, 4)?,
        p_red_bc_st: opt_num(g.p_red_bc_st, 4)?,
        v_bc_st: num(g.v_bc_st, 2)?,
        p_icms_st: num(g.p_icms_st, 4)?,
        v_icms_st: num(g.v_icms_st, 2)?,
    })
}

fn cred_sn(g: &IcmsCredSnPayload) -> Option<IcmsCredSn> {
    Some(IcmsCredSn {
        p_cred_sn: num(g.p_cred_sn, 4)?,
        v_cred_icms_sn: num(g.v_cred_icms_sn, 4)?,
    })
}

// ── Shape matchers ──────────────────────────────────────────────────────────

fn match_00(p: &IcmsPayload) -> Option<Icms> {
    if !p.within(&["orig", "modBC", "vBC", "pICMS", "vICMS", "fcp"]) {
        return None;
    }
    Some(Icms::Cst00(Icms00 {
        orig: Orig::from_code(p.orig.as_deref()?)?,
        mod_bc: ModBc::from_code(p.mod_bc.as_deref()?)?,
        v_bc: num(p.v_bc, 2)?,
        p_icms: num(p.p_icms, 4)?,
        v_icms: num(p.v_icms, 2)?,
        fcp: grupo(&p.fcp, fcp_simples)?,
    }))
}

fn match_10(p: &IcmsPayload) -> Option<Icms> {
    if !p.within(&[
        "orig", "modBC", "vBC", "pICMS", "vICMS", "fcp", "modBCST", "pMVAST", "pRedBCST", "vBCST",
        "pICMSST", "vICMSST", "fcpST",
    ]) {
        return None;
    }
    Some(Icms::Cst10(Icms10 {
        orig: Orig::from_code(p.orig.as_deref()?)?,
        mod_bc: ModBc::from_code(p.mod_bc.as_deref()?)?,
        v_bc: num(p.v_bc, 2)?,
        p_icms: num(p.p_icms, 4)?,
        v_icms: num(p.v_icms, 2)?,
        fcp: grupo(&p.fcp, fcp_com_base)?,
        mod_bc_st: ModBcSt::from_code(p.mod_bc_st.as_deref()?)?,
        p_mva_st: opt_num(p.p_mva_st, 4)?,
        p_red_bc_st: opt_num(p.p_red_bc_st, 4)?,
        v_bc_st: num(p.v_bc_st, 2)?,
        p_icms_st: num(p.p_icms_st, 4)?,
        v_icms_st: num(p.v_icms_st, 2)?,
        fcp_st: grupo(&p.fcp_st, fcp_st)?,
    }))
}

fn match_20(p: &IcmsPayload) -> Option<Icms> {
    if !p.within(&[
        "orig", "modBC", "pRedBC", "vBC", "pICMS", "vICMS", "fcp", "icmsDes",
    ]) {
        return None;
    }
    Some(Icms::Cst20(Icms20 {
        orig: Orig::from_code(p.orig.as_deref()?)?,
        mod_bc: ModBc::from_code(p.mod_bc.as_deref()?)?,
        p_red_bc: num(p.p_red_bc, 4)?,
        v_bc: num(p.v_bc, 2)?,
        p_icms: num(p.p_icms, 4)?,
        v_icms: num(p.v_icms, 2)?,
        fcp: grupo(&p.fcp, fcp_com_base)?,
        deson: grupo(&p.icms_des, |g| deson(g, "20"))?,
    }))
}

fn match_30(p: &IcmsPayload) -> Option<Icms> {
    if !p.within(&[
        "orig", "modBCST", "pMVAST", "pRedBCST", "vBCST", "pICMSST", "vICMSST", "fcpST", "icmsDes",
    ]) {
        return None;
    }
    Some(Icms::Cst30(Icms30 {
        orig: Orig::from_code(p.orig.as_deref()?)?,
        mod_bc_st: ModBcSt::from_code(p.mod_bc_st.as_deref()?)?,
        p_mva_st: opt_num(p.p_mva_st, 4)?,
        p_red_bc_st: opt_num(p.p_red_bc_st, 4)?,
        v_bc_st: num(p.v_bc_st, 2)?,
        p_icms_st: num(p.p_icms_st, 4)?,
        v_icms_st: num(p.v_icms_st, 2)?,
        fcp_st: grupo(&p.fcp_st, fcp_st)?,
        deson: grupo(&p.icms_des, |g| deson(g, "30"))?,
    }))
}

fn match_40(p: &IcmsPayload) -> Option<Icms> {
    if !p.within(&["orig", "CST", "icmsDes"]) {
        return None;
    }
    let cst = p.cst.as_deref()?;
    if !["40", "41", "50"].contains(&cst) {
        return None;
    }
    Some(Icms::Cst40(Icms40 {
        orig: Orig::from_code(p.orig.as_deref()?)?,
        cst: cst.to_string(),
        deson: grupo(&p.icms_des, |g| deson(g, "40"))?,
    }))
}

fn match_51(p: &IcmsPayload) -> Option<Icms> {
    if !p.within(&[
        "orig", "modBC", "pRedBC", "vBC", "pICMS", "vICMSOp", "pDif", "vICMSDif", "vICMS", "fcp",
    ]) {
        return None;
    }
    let mod_bc = match p.mod_bc.as_deref() {
        None => None,
        Some(code) => Some(ModBc::from_code(code)?),
    };
    Some(Icms::Cst51(Icms51 {
        orig: Orig::from_code(p.orig.as_deref()?)?,
        mod_bc,
        p_red_bc: opt_num(p.p_red_bc, 4)?,
        v_bc: opt_num(p.v_bc, 2)?,
        p_icms: opt_num(p.p_icms, 4)?,
        v_icms_op: opt_num(p.v_icms_op, 2)?,
        p_dif: opt_num(p.p_dif, 4)?,
        v_icms_dif: opt_num(p.v_icms_dif, 2)?,
        v_icms: opt_num(p.v_icms, 2)?,
        fcp: grupo(&p.fcp, fcp_com_base)?,
    }))
}

fn match_60(p: &IcmsPayload) -> Option<Icms> {
    if !p.within(&["orig", "icmsRet", "fcpRet", "icmsEfet"]) {
        return None;
    }
    Some(Icms::Cst60(Icms60 {
        orig: Orig::from_code(p.orig.as_deref()?)?,
        ret: grupo(&p.icms_ret, ret)?,
        fcp_ret: grupo(&p.fcp_ret, fcp_ret)?,
        efet: grupo(&p.icms_efet, efet)?,
    }))
}

fn match_70(p: &IcmsPayload) -> Option<Icms> {
    if !p.within(&[
        "orig", "modBC", "vBC", "pICMS", "vICMS", "fcp", "modBCST", "pMVAST", "pRedBCST", "vBCST",
        "pICMSST", "vICMSST", "fcpST", "icmsDes",
    ]) {
        return None;
    }
    Some(Icms::Cst70(Icms70 {
        orig: Orig::from_code(p.orig.as_deref()?)?,
        mod_bc: ModBc::from_code(p.mod_bc.as_deref()?)?,
        v_bc: num(p.v_bc, 2)?,
        p_icms: num(p.p_icms, 4)?,
        v_icms: num(p.v_icms, 2)?,
        fcp: grupo(&p.fcp, fcp_com_base)?,
        mod_bc_st: ModBcSt::from_code(p.mod_bc_st.as_deref()?)?,
        p_mva_st: opt_num(p.p_mva_st, 4)?,
        p_red_bc_st: opt_num(p.p_red_bc_st, 4)?,
        v_bc_st: num(p.v_bc_st, 2)?,
        p_icms_st: num(p.p_icms_st, 4)?,
        v_icms_st: num(p.v_icms_st, 2)?,
        fcp_st: grupo(&p.fcp_st, fcp_st)?,
        deson: grupo(&p.icms_des, |g| deson(g, "70"))?,
    }))
}

fn match_90(p: &IcmsPayload) -> Option<Icms> {
    if !p.within(&["orig", "icms", "fcp", "icmsST", "fcpST", "icmsDes"]) {
        return None;
    }
    Some(Icms::Cst90(Icms90 {
        orig: Orig::from_code(p.orig.as_deref()?)?,
        icms: grupo(&p.icms, proprio)?,
        fcp: grupo(&p.fcp, fcp_com_base)?,
        st: grupo(&p.icms_st, substituicao)?,
        fcp_st: grupo(&p.fcp_st, fcp_st)?,
        deson: grupo(&p.icms_des, |g| deson(g, "90"))?,
    }))
}

fn match_part(p: &IcmsPayload) -> Option<Icms> {
    if !p.within(&[
        "orig", "CST", "modBC", "vBC", "pRedBC", "pICMS", "vICMS", "modBCST", "pMVAST", "pRedBCST",
        "vBCST", "pICMSST", "vICMSST", "pBCOp", "UFST",
    ]) {
        return None;
    }
    let cst = p.cst.as_deref()?;
    if !["10", "90"].contains(&cst) {
        return None;
    }
    let uf_st = p.uf_st.as_deref()?;
    if !is_known_uf_or_exterior(uf_st) {
        return None;
    }
    Some(Icms::Partilha(IcmsPart {
        orig: Orig::from_code(p.orig.as_deref()?)?,
        cst: cst.to_string(),
        mod_bc: ModBc::from_code(p.mod_bc.as_deref()?)?,
        v_bc: num(p.v_bc, 2)?,
        p_red_bc: opt_num(p.p_red_bc, 4)?,
        p_icms: num(p.p_icms, 4)?,
        v_icms: num(p.v_icms, 2)?,
        mod_bc_st: ModBcSt::from_code(p.mod_bc_st.as_deref()?)?,
        p_mva_st: opt_num(p.p_mva_st, 4)?,
        p_red_bc_st: opt_num(p.p_red_bc_st, 4)?,
        v_bc_st: num(p.v_bc_st, 2)?,
        p_icms_st: num(p.p_icms_st, 4)?,
        v_icms_st: num(p.v_icms_st, 2)?,
        p_bc_op: num(p.p_bc_op, 4)?,
        uf_st: uf_st.to_string(),
    }))
}

fn match_st(p: &IcmsPayload) -> Option<Icms> {
    if !p.within(&[
        "orig",
        "CST",
        "vBCSTRet",
        "pST",
        "vICMSSubstituto",
        "vICMSSTRet",
        "fcpRet",
        "vBCSTDest",
        "vICMSSTDest",
        "icmsEfet",
    ]) {
        return None;
    }
    let cst = p.cst.as_deref()?;
    if !["41", "60"].contains(&cst) {
        return None;
    }
    Some(Icms::St(IcmsSt {
        orig: Orig::from_code(p.orig.as_deref()?)?,
        cst: cst.to_string(),
        v_bc_st_ret: num(p.v_bc_st_ret, 2)?,
        p_st: opt_num(p.p_st, 4)?,
        v_icms_substituto: opt_num(p.v_icms_substituto, 2)?,
        v_icms_st_ret: num(p.v_icms_st_ret, 2)?,
        fcp_ret: grupo(&p.fcp_ret, fcp_ret)?,
        v_bc_st_dest: num(p.v_bc_st_dest, 2)?,
        v_icms_st_dest: num(p.v_icms_st_dest, 2)?,
        efet: grupo(&p.icms_efet, efet)?,
    }))
}

fn match_sn101(p: &IcmsPayload) -> Option<Icms> {
    if !p.within(&["orig", "pCredSN", "vCredICMSSN"]) {
        return None;
    }
    Some(Icms::Sn101(IcmsSn101 {
        orig: Orig::from_code(p.orig.as_deref()?)?,
        p_cred_sn: num(p.p_cred_sn, 4)?,
        v_cred_icms_sn: num(p.v_cred_icms_sn, 2)?,
    }))
}

fn match_sn102(p: &IcmsPayload) -> Option<Icms> {
    if !p.within(&["orig", "CSOSN"]) {
        return None;
    }
    let csosn = p.csosn.as_deref()?;
    if !["102", "103", "300", "400"].contains(&csosn) {
        return None;
    }
    Some(Icms::Sn102(IcmsSn102 {
        orig: Orig::from_code(p.orig.as_deref()?)?,
        csosn: csosn.to_string(),
    }))
}

fn match_sn201(p: &IcmsPayload) -> Option<Icms> {
    if !p.within(&[
        "orig", "modBCST", "pMVAST", "pRedBCST", "vBCST", "pICMSST", "vICMSST", "fcpST", "pCredSN",
        "vCredICMSSN",
    ]) {
        return None;
    }
    Some(Icms::Sn201(IcmsSn201 {
        orig: Orig::from_code(p.orig.as_deref()?)?,
        mod_bc_st: ModBcStSn::from_code(p.mod_bc_st.as_deref()?)?,
        p_mva_st: opt_num(p.p_mva_st, 4)?,
        p_red_bc_st: opt_num(p.p_red_bc_st, 4)?,
        v_bc_st: num(p.v_bc_st, 2)?,
        p_icms_st: num(p.p_icms_st, 4)?,
        v_icms_st: num(p.v_icms_st, 2)?,
        fcp_st: grupo(&p.fcp_st, fcp_st)?,
        p_cred_sn: num(p.p_cred_sn, 4)?,
        v_cred_icms_sn: num(p.v_cred_icms_sn, 2)?,
    }))
}

fn match_sn202(p: &IcmsPayload) -> Option<Icms> {
    if !p.within(&[
        "orig", "CSOSN", "modBCST", "pMVAST", "pRedBCST", "vBCST", "pICMSST", "vICMSST", "fcpST",
    ]) {
        return None;
    }
    let csosn = p.csosn.as_deref()?;
    if !["202", "203"].contains(&csosn) {
        return None;
    }
    Some(Icms::Sn202(IcmsSn202 {
        orig: Orig::from_code(p.orig.as_deref()?)?,
        csosn: csosn.to_string(),
        mod_bc_st: ModBcStSn::from_code(p.mod_bc_st.as_deref()?)?,
        p_mva_st: opt_num(p.p_mva_st, 4)?,
        p_red_bc_st: opt_num(p.p_red_bc_st, 4)?,
        v_bc_st: num(p.v_bc_st, 2)?,
        p_icms_st: num(p.p_icms_st, 4)?,
        v_icms_st: num(p.v_icms_st, 2)?,
        fcp_st: grupo(&p.fcp_st, fcp_st)?,
    }))
}

fn match_sn500(p: &IcmsPayload) -> Option<Icms> {
    if !p.within(&["orig", "icmsRet", "fcpRet", "icmsEfet"]) {
        return None;
    }
    Some(Icms::Sn500(IcmsSn500 {
        orig: Orig::from_code(p.orig.as_deref()?)?,
        ret: grupo(&p.icms_ret, ret)?,
        fcp_ret: grupo(&p.fcp_ret, fcp_ret)?,
        efet: grupo(&p.icms_efet, efet)?,
    }))
}

fn match_sn900(p: &IcmsPayload) -> Option<Icms> {
    if !p.within(&["orig", "icms", "icmsST", "fcpST", "icmsSN"]) {
        return None;
    }
    Some(Icms::Sn900(IcmsSn900 {
        orig: Orig::from_code(p.orig.as_deref()?)?,
        icms: grupo(&p.icms, proprio)?,
        st: grupo(&p.icms_st, substituicao)?,
        fcp_st: grupo(&p.fcp_st, fcp_st)?,
        sn: grupo(&p.icms_sn, cred_sn)?,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn payload_00() -> IcmsPayload {
        IcmsPayload {
            orig: Some("0".into()),
            mod_bc: Some("3".into()),
            v_bc: Some(dec!(1000.00)),
            p_icms: Some(dec!(18)),
            v_icms: Some(dec!(180.00)),
            ..Default::default()
        }
    }

    #[test]
    fn full_00_payload_resolves_to_00() {
        let icms = resolve(&payload_00(), "icms").unwrap();
        assert_eq!(icms.situacao(), "00");
    }

    #[test]
    fn matcher_00_requires_base_and_rate() {
        let sem_base = IcmsPayload {
            v_bc: None,
            ..payload_00()
        };
        assert!(match_00(&sem_base).is_none());

        let sem_aliquota = IcmsPayload {
            p_icms: None,
            ..payload_00()
        };
        assert!(match_00(&sem_aliquota).is_none());
    }

    #[test]
    fn incomplete_00_payload_falls_through_to_51() {
        // Without vBC the payload no longer satisfies 00, but every remaining
        // field is admitted by the all-optional deferral shape.
        let sem_base = IcmsPayload {
            v_bc: None,
            ..payload_00()
        };
        assert_eq!(resolve(&sem_base, "icms").unwrap().situacao(), "51");
    }

    #[test]
    fn st_fields_push_resolution_past_00() {
        let p = IcmsPayload {
            mod_bc_st: Some("4".into()),
            v_bc_st: Some(dec!(1300.00)),
            p_icms_st: Some(dec!(18)),
            v_icms_st: Some(dec!(54.00)),
            ..payload_00()
        };
        assert_eq!(resolve(&p, "icms").unwrap().situacao(), "10");
    }

    #[test]
    fn orig_only_payload_is_deferral() {
        // 51, 60 and SN500 all admit a bare orig; declared order picks 51.
        let p = IcmsPayload {
            orig: Some("0".into()),
            ..Default::default()
        };
        assert_eq!(resolve(&p, "icms").unwrap().situacao(), "51");
    }

    #[test]
    fn retained_group_selects_60_over_sn500() {
        let p = IcmsPayload {
            orig: Some("0".into()),
            icms_ret: Some(IcmsRetPayload {
                v_bc_st_ret: Some(dec!(100.00)),
                p_st: Some(dec!(18)),
                v_icms_substituto: None,
                v_icms_st_ret: Some(dec!(18.00)),
            }),
            ..Default::default()
        };
        assert_eq!(resolve(&p, "icms").unwrap().situacao(), "60");
    }

    #[test]
    fn cst_40_family_accepts_embedded_codes() {
        for cst in ["40", "41", "50"] {
            let p = IcmsPayload {
                orig: Some("0".into()),
                cst: Some(cst.into()),
                ..Default::default()
            };
            assert_eq!(resolve(&p, "icms").unwrap().situacao(), "40", "CST {cst}");
        }
    }

    #[test]
    fn cst_41_with_retained_fields_is_st() {
        let p = IcmsPayload {
            orig: Some("0".into()),
            cst: Some("41".into()),
            v_bc_st_ret: Some(dec!(100.00)),
            v_icms_st_ret: Some(dec!(18.00)),
            v_bc_st_dest: Some(dec!(100.00)),
            v_icms_st_dest: Some(dec!(18.00)),
            ..Default::default()
        };
        assert_eq!(resolve(&p, "icms").unwrap().situacao(), "ST");
    }

    #[test]
    fn simples_credit_payload_is_sn101() {
        let p = IcmsPayload {
            orig: Some("0".into()),
            p_cred_sn: Some(dec!(2.5)),
            v_cred_icms_sn: Some(dec!(25.00)),
            ..Default::default()
        };
        assert_eq!(resolve(&p, "icms").unwrap().situacao(), "SN101");
    }

    #[test]
    fn csosn_codes_route_to_sn102() {
        for csosn in ["102", "103", "300", "400"] {
            let p = IcmsPayload {
                orig: Some("0".into()),
                csosn: Some(csosn.into()),
                ..Default::default()
            };
            assert_eq!(resolve(&p, "icms").unwrap().situacao(), "SN102");
        }
    }

    #[test]
    fn sn900_nested_groups() {
        let p = IcmsPayload {
            orig: Some("0".into()),
            icms: Some(IcmsProprioPayload {
                mod_bc: Some("3".into()),
                p_red_bc: Some(dec!(10)),
                v_bc: Some(dec!(900.00)),
                p_icms: Some(dec!(18)),
                v_icms: Some(dec!(162.00)),
            }),
            icms_sn: Some(IcmsCredSnPayload {
                p_cred_sn: Some(dec!(2.5)),
                v_cred_icms_sn: Some(dec!(22.5)),
            }),
            ..Default::default()
        };
        assert_eq!(resolve(&p, "icms").unwrap().situacao(), "SN900");
    }

    #[test]
    fn invalid_orig_matches_nothing() {
        let p = IcmsPayload {
            orig: Some("1".into()),
            ..payload_00()
        };
        let err = resolve(&p, "det[0].imposto.icms").unwrap_err();
        assert_eq!(err.field, "det[0].imposto.icms");
        assert_eq!(err.kind, crate::core::ConstraintKind::DomainEnum);
    }

    #[test]
    fn precision_overflow_fails_candidate() {
        // vICMS with 3 decimal places breaks the 2-place budget of shape 00,
        // and of the deferral fallback as well.
        let p = IcmsPayload {
            v_icms: Some(dec!(180.123)),
            ..payload_00()
        };
        assert!(resolve(&p, "icms").is_err());
    }

    #[test]
    fn exemption_motive_depends_on_regime() {
        let base_20 = IcmsPayload {
            orig: Some("0".into()),
            mod_bc: Some("3".into()),
            p_red_bc: Some(dec!(20)),
            v_bc: Some(dec!(800.00)),
            p_icms: Some(dec!(18)),
            v_icms: Some(dec!(144.00)),
            icms_des: Some(IcmsDesPayload {
                v_icms_deson: Some(dec!(36.00)),
                mot_des_icms: Some("3".into()),
            }),
            ..Default::default()
        };
        assert_eq!(resolve(&base_20, "icms").unwrap().situacao(), "20");

        // Motive 6 belongs to regime 30, not 20; the payload matches nothing.
        let motivo_errado = IcmsPayload {
            icms_des: Some(IcmsDesPayload {
                v_icms_deson: Some(dec!(36.00)),
                mot_des_icms: Some("6".into()),
            }),
            ..base_20
        };
        assert!(resolve(&motivo_errado, "icms").is_err());
    }

    #[test]
    fn fcp_without_base_only_fits_plain_form() {
        // fcp {pFCP, vFCP} satisfies shape 00; adding vBCFCP moves the
        // payload out of 00 into the deferral shape, whose FCP group carries
        // a base.
        let plain = IcmsPayload {
            fcp: Some(FcpPayload {
                p_fcp: Some(dec!(2)),
                v_fcp: Some(dec!(20.00)),
                v_bc_fcp: None,
            }),
            ..payload_00()
        };
        assert_eq!(resolve(&plain, "icms").unwrap().situacao(), "00");

        let com_base = IcmsPayload {
            fcp: Some(FcpPayload {
                p_fcp: Some(dec!(2)),
                v_fcp: Some(dec!(20.00)),
                v_bc_fcp: Some(dec!(1000.00)),
            }),
            ..payload_00()
        };
        assert_eq!(resolve(&com_base, "icms").unwrap().situacao(), "51");
    }

    #[test]
    fn motive_sets_per_regime() {
        assert_eq!(motivos_desoneracao("20"), &["3", "9", "12"]);
        assert_eq!(motivos_desoneracao("70"), &["3", "9", "12"]);
        assert_eq!(motivos_desoneracao("30"), &["6", "7", "9"]);
        assert_eq!(motivos_desoneracao("90"), &["9", "12"]);
        assert_eq!(motivos_desoneracao("40").len(), 11);
        assert!(motivos_desoneracao("00").is_empty());
    }
}
