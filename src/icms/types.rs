use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// orig — merchandise origin (national, imported, national with imported
/// content bands).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orig {
    /// 0 — national.
    Nacional,
    /// 2 — foreign, acquired on the internal market.
    EstrangeiraMercadoInterno,
    /// 3 — national, imported content between 40% and 70%.
    NacionalImportacao40a70,
    /// 4 — national, produced under basic productive processes.
    NacionalProcessoBasico,
    /// 5 — national, imported content up to 40%.
    NacionalImportacaoAte40,
    /// 6 — foreign, direct import, no national equivalent.
    EstrangeiraImportacaoDireta,
    /// 7 — foreign, internal market, no national equivalent.
    EstrangeiraSemSimilar,
    /// 8 — national, imported content above 70%.
    NacionalImportacaoAcima70,
}

impl Orig {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Nacional => "0",
            Self::EstrangeiraMercadoInterno => "2",
            Self::NacionalImportacao40a70 => "3",
            Self::NacionalProcessoBasico => "4",
            Self::NacionalImportacaoAte40 => "5",
            Self::EstrangeiraImportacaoDireta => "6",
            Self::EstrangeiraSemSimilar => "7",
            Self::NacionalImportacaoAcima70 => "8",
        }
    }

    /// Parse from the transmitted code. "1" is not assigned.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "0" => Some(Self::Nacional),
            "2" => Some(Self::EstrangeiraMercadoInterno),
            "3" => Some(Self::NacionalImportacao40a70),
            "4" => Some(Self::NacionalProcessoBasico),
            "5" => Some(Self::NacionalImportacaoAte40),
            "6" => Some(Self::EstrangeiraImportacaoDireta),
            "7" => Some(Self::EstrangeiraSemSimilar),
            "8" => Some(Self::NacionalImportacaoAcima70),
            _ => None,
        }
    }
}

/// modBC — base determination modality for own ICMS (codes 0-3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModBc {
    /// 0 — added margin.
    MargemValorAgregado,
    /// 1 — reference list (pauta).
    Pauta,
    /// 2 — maximum tabled price.
    PrecoTabelado,
    /// 3 — operation value.
    ValorOperacao,
}

impl ModBc {
    pub fn code(&self) -> &'static str {
        match self {
            Self::MargemValorAgregado => "0",
            Self::Pauta => "1",
            Self::PrecoTabelado => "2",
            Self::ValorOperacao => "3",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "0" => Some(Self::MargemValorAgregado),
            "1" => Some(Self::Pauta),
            "2" => Some(Self::PrecoTabelado),
            "3" => Some(Self::ValorOperacao),
            _ => None,
        }
    }
}

/// modBCST — base determination modality for the substitution regime
/// (codes 0-6).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModBcSt(pub u8);

impl ModBcSt {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "0" | "1" | "2" | "3" | "4" | "5" | "6" => {
                Some(Self(code.as_bytes()[0] - b'0'))
            }
            _ => None,
        }
    }
}

/// modBCST under Simples Nacional (codes 0-5).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModBcStSn(pub u8);

impl ModBcStSn {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "0" | "1" | "2" | "3" | "4" | "5" => Some(Self(code.as_bytes()[0] - b'0')),
            _ => None,
        }
    }
}

// ── Shared sub-blocks ───────────────────────────────────────────────────────

/// FCP over the own-tax base, without a dedicated base field (CST 00).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fcp {
    /// pFCP — rate, 4 decimal places.
    pub p_fcp: Decimal,
    /// vFCP — amount, 2 decimal places.
    pub v_fcp: Decimal,
}

/// FCP with its own calculation base.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FcpBc {
    /// vBCFCP — base, 2 decimal places.
    pub v_bc_fcp: Decimal,
    /// pFCP — rate, 4 decimal places.
    pub p_fcp: Decimal,
    /// vFCP — amount, 2 decimal places.
    pub v_fcp: Decimal,
}

/// FCP charged through tax substitution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FcpSt {
    /// vBCFCPST — base, 2 decimal places.
    pub v_bc_fcp_st: Decimal,
    /// pFCPST — rate, 4 decimal places.
    pub p_fcp_st: Decimal,
    /// vFCPST — amount, 2 decimal places.
    pub v_fcp_st: Decimal,
}

/// FCP previously retained through substitution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FcpRet {
    /// vBCFCPSTRet — base, 2 decimal places.
    pub v_bc_fcp_st_ret: Decimal,
    /// pFCPSTRet — rate, 4 decimal places.
    pub p_fcp_st_ret: Decimal,
    /// vFCPSTRet — amount, 2 decimal places.
    pub v_fcp_st_ret: Decimal,
}

/// ICMS previously retained through substitution (CST 60 / CSOSN 500).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IcmsRet {
    /// vBCSTRet — retained base, 2 decimal places.
    pub v_bc_st_ret: Decimal,
    /// pST — final consumer rate, 4 decimal places.
    pub p_st: Decimal,
    /// vICMSSubstituto — substitute's own tax, 2 decimal places.
    pub v_icms_substituto: Option<Decimal>,
    /// vICMSSTRet — retained amount, 2 decimal places.
    pub v_icms_st_ret: Decimal,
}

/// Effective-tax group under reduced base (all fields optional).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IcmsEfet {
    /// pRedBCEfet — base reduction, 4 decimal places.
    pub p_red_bc_efet: Option<Decimal>,
    /// vBCEfet — effective base, 2 decimal places.
    pub v_bc_efet: Option<Decimal>,
    /// pICMSEfet — effective rate, 4 decimal places.
    pub p_icms_efet: Option<Decimal>,
    /// vICMSEfet — effective amount, 2 decimal places.
    pub v_icms_efet: Option<Decimal>,
}

/// Exemption group; the admitted motive codes depend on the parent regime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IcmsDeson {
    /// vICMSDeson — exempted amount, 2 decimal places.
    pub v_icms_deson: Decimal,
    /// motDesICMS — exemption motive code.
    pub mot_des_icms: String,
}

/// Own-tax group nested inside CST 90 / CSOSN 900.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IcmsProprio {
    pub mod_bc: ModBc,
    /// pRedBC — base reduction, 4 decimal places.
    pub p_red_bc: Decimal,
    /// vBC — base, 2 decimal places.
    pub v_bc: Decimal,
    /// pICMS — rate, 4 decimal places.
    pub p_icms: Decimal,
    /// vICMS — amount, 2 decimal places.
    pub v_icms: Decimal,
}

/// Substitution group nested inside CST 90 / CSOSN 900.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IcmsSubstituicao {
    pub mod_bc_st: ModBcSt,
    /// pMVAST — added margin, 4 decimal places.
    pub p_mva_st: Option<Decimal>,
    /// pRedBCST — base reduction, 4 decimal places.
    pub p_red_bc_st: Option<Decimal>,
    /// vBCST — base, 2 decimal places.
    pub v_bc_st: Decimal,
    /// pICMSST — rate, 4 decimal places.
    pub p_icms_st: Decimal,
    /// vICMSST — amount, 2 decimal places.
    pub v_icms_st: Decimal,
}

/// Simples Nacional credit group (CSOSN 900).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IcmsCredSn {
    /// pCredSN — credit rate, 4 decimal places.
    pub p_cred_sn: Decimal,
    /// vCredICMSSN — creditable amount, 4 decimal places.
    pub v_cred_icms_sn: Decimal,
}

// ── Resolved variants ───────────────────────────────────────────────────────

/// CST 00 — fully taxed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Icms00 {
    pub orig: Orig,
    pub mod_bc: ModBc,
    pub v_bc: Decimal,
    pub p_icms: Decimal,
    pub v_icms: Decimal,
    pub fcp: Option<Fcp>,
}

/// CST 10 — taxed with substitution charge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Icms10 {
    pub orig: Orig,
    pub mod_bc: ModBc,
    pub v_bc: Decimal,
    pub p_icms: Decimal,
    pub v_icms: Decimal,
    pub fcp: Option<FcpBc>,
    pub mod_bc_st: ModBcSt,
    pub p_mva_st: Option<Decimal>,
    pub p_red_bc_st: Option<Decimal>,
    pub v_bc_st: Decimal,
    pub p_icms_st: Decimal,
    pub v_icms_st: Decimal,
    pub fcp_st: Option<FcpSt>,
}

/// CST 20 — reduced base.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Icms20 {
    pub orig: Orig,
    pub mod_bc: ModBc,
    pub p_red_bc: Decimal,
    pub v_bc: Decimal,
    pub p_icms: Decimal,
    pub v_icms: Decimal,
    pub fcp: Option<FcpBc>,
    pub deson: Option<IcmsDeson>,
}

/// CST 30 — exempt with substitution charge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Icms30 {
    pub orig: Orig,
    pub mod_bc_st: ModBcSt,
    pub p_mva_st: Option<Decimal>,
    pub p_red_bc_st: Option<Decimal>,
    pub v_bc_st: Decimal,
    pub p_icms_st: Decimal,
    pub v_icms_st: Decimal,
    pub fcp_st: Option<FcpSt>,
    pub deson: Option<IcmsDeson>,
}

/// CST 40/41/50 — exempt, not taxed, or suspended; discriminated by the
/// embedded situation code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Icms40 {
    pub orig: Orig,
    /// CST — 40, 41 or 50.
    pub cst: String,
    pub deson: Option<IcmsDeson>,
}

/// CST 51 — deferral. Every calculation field is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Icms51 {
    pub orig: Orig,
    pub mod_bc: Option<ModBc>,
    pub p_red_bc: Option<Decimal>,
    pub v_bc: Option<Decimal>,
    pub p_icms: Option<Decimal>,
    pub v_icms_op: Option<Decimal>,
    pub p_dif: Option<Decimal>,
    pub v_icms_dif: Option<Decimal>,
    pub v_icms: Option<Decimal>,
    pub fcp: Option<FcpBc>,
}

/// CST 60 — previously charged through substitution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Icms60 {
    pub orig: Orig,
    pub ret: Option<IcmsRet>,
    pub fcp_ret: Option<FcpRet>,
    pub efet: Option<IcmsEfet>,
}

/// CST 70 — reduced base with substitution charge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Icms70 {
    pub orig: Orig,
    pub mod_bc: ModBc,
    pub v_bc: Decimal,
    pub p_icms: Decimal,
    pub v_icms: Decimal,
    pub fcp: Option<FcpBc>,
    pub mod_bc_st: ModBcSt,
    pub p_mva_st: Option<Decimal>,
    pub p_red_bc_st: Option<Decimal>,
    pub v_bc_st: Decimal,
    pub p_icms_st: Decimal,
    pub v_icms_st: Decimal,
    pub fcp_st: Option<FcpSt>,
    pub deson: Option<IcmsDeson>,
}

/// CST 90 — other operations; own and substitution groups both optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Icms90 {
    pub orig: Orig,
    pub icms: Option<IcmsProprio>,
    pub fcp: Option<FcpBc>,
    pub st: Option<IcmsSubstituicao>,
    pub fcp_st: Option<FcpSt>,
    pub deson: Option<IcmsDeson>,
}

/// ICMSPart — partitioned responsibility between origin and destination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IcmsPart {
    pub orig: Orig,
    /// CST — 10 or 90.
    pub cst: String,
    pub mod_bc: ModBc,
    pub v_bc: Decimal,
    pub p_red_bc: Option<Decimal>,
    pub p_icms: Decimal,
    pub v_icms: Decimal,
    pub mod_bc_st: ModBcSt,
    pub p_mva_st: Option<Decimal>,
    pub p_red_bc_st: Option<Decimal>,
    pub v_bc_st: Decimal,
    pub p_icms_st: Decimal,
    pub v_icms_st: Decimal,
    /// pBCOp — own-operation base percentage, 4 decimal places.
    pub p_bc_op: Decimal,
    /// UFST — state owed the retained tax (a UF or "EX").
    pub uf_st: String,
}

/// ICMSST — substitute document repassing previously retained tax.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IcmsSt {
    pub orig: Orig,
    /// CST — 41 or 60.
    pub cst: String,
    pub v_bc_st_ret: Decimal,
    pub p_st: Option<Decimal>,
    pub v_icms_substituto: Option<Decimal>,
    pub v_icms_st_ret: Decimal,
    pub fcp_ret: Option<FcpRet>,
    pub v_bc_st_dest: Decimal,
    pub v_icms_st_dest: Decimal,
    pub efet: Option<IcmsEfet>,
}

/// CSOSN 101 — Simples Nacional with credit allowance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IcmsSn101 {
    pub orig: Orig,
    pub p_cred_sn: Decimal,
    pub v_cred_icms_sn: Decimal,
}

/// CSOSN 102/103/300/400 — Simples Nacional without credit allowance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IcmsSn102 {
    pub orig: Orig,
    pub csosn: String,
}

/// CSOSN 201 — Simples Nacional with credit and substitution charge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IcmsSn201 {
    pub orig: Orig,
    pub mod_bc_st: ModBcStSn,
    pub p_mva_st: Option<Decimal>,
    pub p_red_bc_st: Option<Decimal>,
    pub v_bc_st: Decimal,
    pub p_icms_st: Decimal,
    pub v_icms_st: Decimal,
    pub fcp_st: Option<FcpSt>,
    pub p_cred_sn: Decimal,
    pub v_cred_icms_sn: Decimal,
}

/// CSOSN 202/203 — Simples Nacional without credit, with substitution charge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IcmsSn202 {
    pub orig: Orig,
    pub csosn: String,
    pub mod_bc_st: ModBcStSn,
    pub p_mva_st: Option<Decimal>,
    pub p_red_bc_st: Option<Decimal>,
    pub v_bc_st: Decimal,
    pub p_icms_st: Decimal,
    pub v_icms_st: Decimal,
    pub fcp_st: Option<FcpSt>,
}

/// CSOSN 500 — previously charged through substitution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IcmsSn500 {
    pub orig: Orig,
    pub ret: Option<IcmsRet>,
    pub fcp_ret: Option<FcpRet>,
    pub efet: Option<IcmsEfet>,
}

/// CSOSN 900 — other Simples Nacional operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IcmsSn900 {
    pub orig: Orig,
    pub icms: Option<IcmsProprio>,
    pub st: Option<IcmsSubstituicao>,
    pub fcp_st: Option<FcpSt>,
    pub sn: Option<IcmsCredSn>,
}

/// The resolved ICMS shape of one line item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Icms {
    Cst00(Icms00),
    Cst10(Icms10),
    Cst20(Icms20),
    Cst30(Icms30),
    Cst40(Icms40),
    Cst51(Icms51),
    Cst60(Icms60),
    Cst70(Icms70),
    Cst90(Icms90),
    Partilha(IcmsPart),
    St(IcmsSt),
    Sn101(IcmsSn101),
    Sn102(IcmsSn102),
    Sn201(IcmsSn201),
    Sn202(IcmsSn202),
    Sn500(IcmsSn500),
    Sn900(IcmsSn900),
}

impl Icms {
    /// Label of the resolved tax situation, for reports and tests.
    pub fn situacao(&self) -> &'static str {
        match self {
            Self::Cst00(_) => "00",
            Self::Cst10(_) => "10",
            Self::Cst20(_) => "20",
            Self::Cst30(_) => "30",
            Self::Cst40(_) => "40",
            Self::Cst51(_) => "51",
            Self::Cst60(_) => "60",
            Self::Cst70(_) => "70",
            Self::Cst90(_) => "90",
            Self::Partilha(_) => "Part",
            Self::St(_) => "ST",
            Self::Sn101(_) => "SN101",
            Self::Sn102(_) => "SN102",
            Self::Sn201(_) => "SN201",
            Self::Sn202(_) => "SN202",
            Self::Sn500(_) => "SN500",
            Self::Sn900(_) => "SN900",
        }
    }
}

// ── Untyped payload ─────────────────────────────────────────────────────────

/// Raw ICMS content of a line item, before shape resolution.
///
/// There is no single discriminator field shared by every shape, so the
/// payload carries the union of all fields; [`crate::icms::resolve`] decodes
/// it into the first [`Icms`] variant it satisfies in full.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IcmsPayload {
    pub orig: Option<String>,
    /// CST — only present in the shapes that discriminate through it.
    pub cst: Option<String>,
    /// CSOSN — Simples Nacional situation code, where applicable.
    pub csosn: Option<String>,
    pub mod_bc: Option<String>,
    pub p_red_bc: Option<Decimal>,
    pub v_bc: Option<Decimal>,
    pub p_icms: Option<Decimal>,
    pub v_icms: Option<Decimal>,
    pub v_icms_op: Option<Decimal>,
    pub p_dif: Option<Decimal>,
    pub v_icms_dif: Option<Decimal>,
    pub mod_bc_st: Option<String>,
    pub p_mva_st: Option<Decimal>,
    pub p_red_bc_st: Option<Decimal>,
    pub v_bc_st: Option<Decimal>,
    pub p_icms_st: Option<Decimal>,
    pub v_icms_st: Option<Decimal>,
    pub v_bc_st_ret: Option<Decimal>,
    pub p_st: Option<Decimal>,
    pub v_icms_substituto: Option<Decimal>,
    pub v_icms_st_ret: Option<Decimal>,
    pub v_bc_st_dest: Option<Decimal>,
    pub v_icms_st_dest: Option<Decimal>,
    pub p_bc_op: Option<Decimal>,
    pub uf_st: Option<String>,
    pub p_cred_sn: Option<Decimal>,
    pub v_cred_icms_sn: Option<Decimal>,
    pub fcp: Option<FcpPayload>,
    pub fcp_st: Option<FcpStPayload>,
    pub fcp_ret: Option<FcpRetPayload>,
    pub icms_ret: Option<IcmsRetPayload>,
    pub icms_efet: Option<IcmsEfetPayload>,
    pub icms_des: Option<IcmsDesPayload>,
    /// Nested own-tax group (CST 90 / CSOSN 900 layouts).
    pub icms: Option<IcmsProprioPayload>,
    /// Nested substitution group (CST 90 / CSOSN 900 layouts).
    pub icms_st: Option<IcmsSubstituicaoPayload>,
    /// Nested Simples Nacional credit group (CSOSN 900 layout).
    pub icms_sn: Option<IcmsCredSnPayload>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FcpPayload {
    pub p_fcp: Option<Decimal>,
    pub v_fcp: Option<Decimal>,
    /// vBCFCP — only admitted where the regime carries a dedicated FCP base.
    pub v_bc_fcp: Option<Decimal>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FcpStPayload {
    pub v_bc_fcp_st: Option<Decimal>,
    pub p_fcp_st: Option<Decimal>,
    pub v_fcp_st: Option<Decimal>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FcpRetPayload {
    pub v_bc_fcp_st_ret: Option<Decimal>,
    pub p_fcp_st_ret: Option<Decimal>,
    pub v_fcp_st_ret: Option<Decimal>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IcmsRetPayload {
    pub v_bc_st_ret: Option<Decimal>,
    pub p_st: Option<Decimal>,
    pub v_icms_substituto: Option<Decimal>,
    pub v_icms_st_ret: Option<Decimal>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IcmsEfetPayload {
    pub p_red_bc_efet: Option<Decimal>,
    pub v_bc_efet: Option<Decimal>,
    pub p_icms_efet: Option<Decimal>,
    pub v_icms_efet: Option<Decimal>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IcmsDesPayload {
    pub v_icms_deson: Option<Decimal>,
    pub mot_des_icms: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IcmsProprioPayload {
    pub mod_bc: Option<String>,
    pub p_red_bc: Option<Decimal>,
    pub v_bc: Option<Decimal>,
    pub p_icms: Option<Decimal>,
    pub v_icms: Option<Decimal>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IcmsSubstituicaoPayload {
    pub mod_bc_st: Option<String>,
    pub p_mva_st: Option<Decimal>,
    pub p_red_bc_st: Option<Decimal>,
    pub v_bc_st: Option<Decimal>,
    pub p_icms_st: Option<Decimal>,
    pub v_icms_st: Option<Decimal>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IcmsCredSnPayload {
    pub p_cred_sn: Option<Decimal>,
    pub v_cred_icms_sn: Option<Decimal>,
}

/// ICMSUFDest — interstate consumer-destination apportionment, orthogonal to
/// the regime shape (all amounts 2 decimal places).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IcmsUfDest {
    pub v_bc_uf_dest: Decimal,
    pub v_bc_fcp_uf_dest: Decimal,
    pub p_fcp_uf_dest: Option<Decimal>,
    pub p_icms_uf_dest: Decimal,
    pub p_icms_inter: Decimal,
    pub p_icms_inter_part: Decimal,
    pub v_fcp_uf_dest: Option<Decimal>,
    pub v_icms_uf_dest: Decimal,
    pub v_icms_uf_remet: Decimal,
}
