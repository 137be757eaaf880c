use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::icms::{IcmsPayload, IcmsUfDest};

/// Root of the fiscal document graph (NF-e, modelo 55).
///
/// Built in one shot by the deserialization collaborator and handed to
/// [`crate::validate::validate_nfe`]; never mutated after validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Nfe {
    /// ide — identification block.
    pub ide: Ide,
    /// emit — issuing party.
    pub emit: Emit,
    /// dest — receiving party.
    pub dest: Dest,
    /// retirada — optional pickup location/party.
    pub retirada: Option<Retirada>,
    /// entrega — optional delivery location/party.
    pub entrega: Option<Entrega>,
    /// autXML — identifiers authorized to download the document (max 10).
    #[serde(default)]
    pub aut_xml: Vec<String>,
    /// det — line items, 1 to 990.
    pub det: Vec<Det>,
    /// total — document totals block.
    pub total: Total,
    /// transp — transport block.
    pub transp: Transp,
    /// cobr — billing/installments block.
    pub cobr: Option<Cobr>,
    /// pag — payment block.
    pub pag: Pag,
    /// infAdic — free-text addenda.
    pub inf_adic: Option<InfAdic>,
}

/// ide — document identification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ide {
    /// natOp — nature of the operation (free text, 1-60).
    pub nat_op: String,
    /// serie — document series, 0-969. Defaults to 0 when absent.
    pub serie: Option<u16>,
    /// nNF — document number, 1 to 999 999 999.
    pub n_nf: u32,
    /// dhEmi — emission timestamp. Defaults to the validation instant.
    pub dh_emi: Option<NaiveDateTime>,
    /// dhSaiEnt — dispatch/receipt timestamp. Defaults to the validation instant.
    pub dh_sai_ent: Option<NaiveDateTime>,
    /// tpNF — 0 entry, 1 exit.
    pub tp_nf: String,
    /// idDest — 1 internal, 2 interstate, 3 abroad.
    pub id_dest: String,
    /// tpImp — DANFE print format, 0-3.
    pub tp_imp: String,
    /// finNFe — issuance purpose, 1-4.
    pub fin_nfe: String,
    /// indFinal — 0 regular, 1 final consumer.
    pub ind_final: String,
    /// indPres — buyer presence indicator, 0-5 or 9.
    pub ind_pres: String,
    /// indIntermed — intermediary indicator, 0 or 1.
    pub ind_intermed: Option<String>,
    /// NFref — references to prior fiscal documents, max 500.
    #[serde(default)]
    pub nf_ref: Vec<NfRef>,
}

/// NFref — reference to a prior fiscal document, one of two shapes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum NfRef {
    /// refNFe — 44-digit access key plus the paper-model reference block.
    Nfe { ref_nfe: String, ref_nf: RefNf },
    /// refCTe — 44-digit transport-document key plus an ECF coupon reference.
    Ecf { ref_cte: String, ref_ecf: RefEcf },
}

/// Paper-model document reference, keyed by who issued it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum RefNf {
    /// Model 01/02 document issued under a CNPJ.
    Modelo(RefNfModelo),
    /// Rural-producer document (model 01/04) issued under a CPF or CNPJ.
    Produtor(RefNfProdutor),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefNfModelo {
    /// cUF — IBGE numeric code of the issuing state.
    pub c_uf: u8,
    /// AAMM — year/month of emission.
    pub aamm: String,
    /// CNPJ of the issuer.
    pub cnpj: String,
    /// mod — 01 or 02.
    pub modelo: String,
    /// serie — 0-969, default 0.
    pub serie: Option<u16>,
    /// nNF — 1 to 999 999 999.
    pub n_nf: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefNfProdutor {
    /// cUF — IBGE numeric code of the issuing state.
    pub c_uf: u8,
    /// AAMM — year/month of emission.
    pub aamm: String,
    /// CNPJ or CPF of the producer.
    pub cpf_cnpj: String,
    /// IE of the producer. Defaults to "ISENTO".
    pub ie: Option<String>,
    /// mod — 01 or 04.
    pub modelo: String,
    /// serie — 0-969, default 0.
    pub serie: Option<u16>,
    /// nNF — 1 to 999 999 999.
    pub n_nf: u32,
}

/// ECF fiscal-coupon reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefEcf {
    /// mod — 2B, 2C or 2D.
    pub modelo: String,
    /// nECF — equipment number, 100-999.
    pub n_ecf: u16,
    /// nCOO — coupon sequence, 100000-999999.
    pub n_coo: u32,
}

/// emit — issuing party.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Emit {
    /// CNPJ of the emitter.
    pub cnpj: String,
    /// xNome — corporate name, 2-60.
    pub x_nome: String,
    /// xFant — trade name, 1-60.
    pub x_fant: Option<String>,
    /// enderEmit — address.
    pub ender_emit: Endereco,
    /// IE — state registration (digits, or "ISENTO").
    pub ie: String,
    /// IEST — substitute-taxpayer registration in the destination state.
    pub iest: Option<String>,
    /// Municipal-service data for mixed (conjugada) documents.
    pub conjugada: Option<EmitConjugada>,
    /// CRT — tax regime code: 1 Simples, 2 Simples over sublimit, 3 normal.
    pub crt: String,
}

/// IM/CNAE pair present when the document also carries service lines.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmitConjugada {
    /// IM — municipal registration, 1-15.
    pub im: String,
    /// CNAE — 7-digit activity code.
    pub cnae: Option<String>,
}

/// dest — receiving party.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dest {
    /// CNPJ (14 digits), CPF (11 digits) or foreign identifier (5 or 20
    /// characters). Absent counts as a foreign identification.
    pub cpf_cnpj: Option<String>,
    /// xNome — name, 2-60.
    pub x_nome: String,
    /// enderDest — address.
    pub ender_dest: Endereco,
    /// indIEDest — 1 registered, 2 exempt, 9 not applicable.
    pub ind_ie_dest: String,
    /// IE — state registration of the recipient.
    pub ie: Option<String>,
    /// ISUF — SUFRAMA registration, 8-9.
    pub isuf: Option<String>,
    /// IM — municipal registration, 1-15.
    pub im: Option<String>,
    /// email of the recipient.
    pub email: Option<String>,
}

/// Address block shared by every party.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Endereco {
    /// xLgr — street, 2-60.
    pub x_lgr: String,
    /// nro — number, 1-60.
    pub nro: String,
    /// xCpl — complement, 1-60.
    pub x_cpl: Option<String>,
    /// xBairro — district, 2-60.
    pub x_bairro: String,
    /// cMun — 7-digit IBGE municipality code.
    pub c_mun: String,
    /// UF — state abbreviation.
    pub uf: String,
    /// CEP — 8-digit postal code.
    pub cep: Option<String>,
    /// cPais — BACEN country code.
    pub c_pais: Option<i32>,
    /// fone — phone, 6-14.
    pub fone: String,
}

/// retirada — pickup party/location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Retirada {
    /// CNPJ or CPF of the dispatcher.
    pub cpf_cnpj: Option<String>,
    /// xNome — name, 2-60.
    pub x_nome: Option<String>,
    /// Address of the pickup location.
    pub endereco: Endereco,
    /// email of the dispatcher.
    pub email: Option<String>,
    /// IE of the dispatcher.
    pub ie: Option<String>,
}

/// entrega — delivery party/location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entrega {
    /// CNPJ or CPF of the receiver.
    pub cpf_cnpj: Option<String>,
    /// xNome — name, 2-60.
    pub x_nome: Option<String>,
    /// Address of the delivery location.
    pub endereco: Endereco,
    /// fone — phone, 6-14.
    pub fone: Option<String>,
    /// email of the receiver.
    pub email: Option<String>,
    /// IE of the receiver.
    pub ie: Option<String>,
}

/// det — one line item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Det {
    /// cProd — internal product code, 1-60.
    pub c_prod: Option<String>,
    /// cEAN — barcode, length 8, 12, 13 or 14.
    pub c_ean: Option<String>,
    /// xProd — description, 1-120.
    pub x_prod: String,
    /// NCM — 8-character fiscal classification.
    pub ncm: Option<String>,
    /// NVE — up to 8 six-character codes.
    #[serde(default)]
    pub nve: Vec<String>,
    /// CEST — 7-character substitution classification.
    pub cest: Option<String>,
    /// indEscala — S produced at relevant scale, N otherwise.
    pub ind_escala: Option<String>,
    /// CNPJFab — manufacturer CNPJ.
    pub cnpj_fab: Option<String>,
    /// cBenef — fiscal-benefit code, length 8 or 10.
    pub c_benef: Option<String>,
    /// EXTIPI — TIPI exception, 10-999.
    pub ex_tipi: Option<u16>,
    /// CFOP — operation code, 1000-9999.
    pub cfop: u16,
    /// uCom — commercial unit, 1-6.
    pub u_com: String,
    /// qCom — commercial quantity, 4 decimal places.
    pub q_com: Decimal,
    /// vUnCom — commercial unit value, 10 decimal places.
    pub v_un_com: Decimal,
    /// vProd — gross product amount, 2 decimal places.
    pub v_prod: Decimal,
    /// cEANTrib — taxable-unit barcode.
    pub c_ean_trib: Option<String>,
    /// uTrib — taxable unit, 1-6.
    pub u_trib: String,
    /// qTrib — taxable quantity, 4 decimal places.
    pub q_trib: Decimal,
    /// vUnTrib — taxable unit value, 10 decimal places.
    pub v_un_trib: Decimal,
    /// vFrete — freight share, 2 decimal places.
    pub v_frete: Option<Decimal>,
    /// vSeg — insurance share, 2 decimal places.
    pub v_seg: Option<Decimal>,
    /// vDesc — discount, 2 decimal places.
    pub v_desc: Option<Decimal>,
    /// vOutro — other incidental amounts, 2 decimal places.
    pub v_outro: Option<Decimal>,
    /// indTot — 0 does not compose the document total, 1 composes.
    pub ind_tot: String,
    /// DI — import declarations, 1-100 when present.
    #[serde(default)]
    pub di: Vec<Di>,
    /// detExport — export detail, 1-500 when present.
    #[serde(default)]
    pub det_export: Vec<DetExport>,
    /// xPed — purchase order, 1-15.
    pub x_ped: Option<String>,
    /// nItemPed — purchase-order item, 7 digits.
    pub n_item_ped: Option<String>,
    /// nFCI — import-content form number, 36 characters.
    pub n_fci: Option<String>,
    /// rastro — traceability batches, 1-500 when present.
    #[serde(default)]
    pub rastro: Vec<Rastro>,
    /// Product-specific attachment; at most one applies.
    pub produto_especifico: Option<ProdutoEspecifico>,
    /// imposto — tax block.
    pub imposto: Imposto,
}

/// DI — import (customs) declaration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Di {
    /// nDI — declaration number, 1-12.
    pub n_di: String,
    /// dDI — registration date.
    pub d_di: NaiveDate,
    /// xLocDesemb — customs clearance site, 1-60.
    pub x_loc_desemb: String,
    /// UFDesemb — clearance state.
    pub uf_desemb: String,
    /// dDesemb — clearance date.
    pub d_desemb: NaiveDate,
    /// tpViaTransp — international transport modality, 1-7.
    pub tp_via_transp: String,
    /// vAFRMM — merchant-marine freight surcharge, 2 decimal places.
    pub v_afrmm: Option<Decimal>,
    /// tpIntermedio — import intermediary type, 1-3.
    pub tp_intermedio: String,
    /// CNPJ of the orderer or intermediary.
    pub cnpj: Option<String>,
    /// UFTerceiro — third-party state.
    pub uf_terceiro: Option<String>,
    /// cExportador — exporter code, 1-60.
    pub c_exportador: String,
    /// adi — additions, 1-100.
    pub adi: Vec<Adi>,
}

/// adi — one addition inside an import declaration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Adi {
    /// nAdicao — addition number, 1-999.
    pub n_adicao: u16,
    /// cFabricante — foreign manufacturer code, 1-60.
    pub c_fabricante: String,
    /// vDescDI — addition discount, 2 decimal places.
    pub v_desc_di: Option<Decimal>,
    /// nDraw — drawback act, 9 or 11 digits.
    pub n_draw: Option<String>,
}

/// detExport — export operation detail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetExport {
    /// nDraw — drawback act, 9 or 11 digits.
    pub n_draw: Option<String>,
    /// exportInd — indirect-export group.
    pub export_ind: Option<ExportInd>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportInd {
    /// nRE — export registry, 12 digits.
    pub n_re: String,
    /// chNFe — access key of the received document, 44 digits.
    pub ch_nfe: String,
    /// qExport — exported quantity, 4 decimal places.
    pub q_export: Decimal,
}

/// rastro — traceability batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rastro {
    /// nLote — batch number, 1-20.
    pub n_lote: String,
    /// qLote — batch quantity, 3 decimal places.
    pub q_lote: Decimal,
    /// dFab — manufacture date.
    pub d_fab: NaiveDate,
    /// dVal — expiry date.
    pub d_val: NaiveDate,
    /// cAgreg — aggregation code, 1-20 digits.
    pub c_agreg: String,
}

/// Product-specific attachment — the variants are mutually exclusive by
/// construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ProdutoEspecifico {
    /// veicProd — new vehicle data.
    Veiculo(VeicProd),
    /// med — medicine data.
    Medicamento(Med),
    /// arma — firearms, 1-500 entries.
    Armamento(Vec<Arma>),
    /// comb — fuel data.
    Combustivel(Comb),
    /// nRECOPI — 20-digit RECOPI registration code.
    Recopi(String),
}

/// veicProd — vehicle detail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VeicProd {
    /// tpOp — operation type: 1 dealership sale, 2 direct invoicing, 0 other.
    pub tp_op: String,
    /// chassi — 17-character VIN.
    pub chassi: String,
    /// cCor — maker color code, 1-4.
    pub c_cor: String,
    /// xCor — color name, 1-40.
    pub x_cor: String,
    /// pot — engine power, 1-4.
    pub pot: String,
    /// cilin — displacement, 1-4.
    pub cilin: String,
    /// pesoL — net weight, 4 decimal places.
    pub peso_l: Decimal,
    /// pesoB — gross weight, 4 decimal places.
    pub peso_b: Decimal,
    /// nSerie — serial number, 1-9.
    pub n_serie: String,
    /// tpComb — fuel type, table 01-18.
    pub tp_comb: String,
    /// nMotor — engine number, 1-21.
    pub n_motor: String,
    /// CMT — maximum traction capacity, 4 decimal places.
    pub cmt: Decimal,
    /// dist — axle distance, 1-4.
    pub dist: String,
    /// anoMod — model year (4 digits).
    pub ano_mod: u16,
    /// tpPint — paint type, 1 character.
    pub tp_pint: String,
    /// tpVeic — DENATRAN vehicle type.
    pub tp_veic: String,
    /// espVeic — vehicle species, 1-6.
    pub esp_veic: String,
    /// VIN — R remarked, N normal.
    pub vin: String,
    /// condVeic — 1 finished, 2 unfinished, 3 semi-finished.
    pub cond_veic: String,
    /// cMod — marketing model code, 1-6 digits.
    pub c_mod: String,
    /// cCorDENATRAN — DENATRAN color, table 01-16.
    pub c_cor_denatran: String,
    /// lota — seating capacity, 0-999.
    pub lota: u16,
    /// tpRest — restriction, 0-4 or 9.
    pub tp_rest: String,
}

/// med — medicine detail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Med {
    /// cProdANVISA — 13-character ANVISA registry code.
    pub c_prod_anvisa: Option<String>,
    /// xMotivoIsencao — exemption justification, 1-255.
    pub x_motivo_isencao: Option<String>,
    /// vPMC — maximum consumer price, 2 decimal places.
    pub v_pmc: Decimal,
}

/// arma — one firearm entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Arma {
    /// tpArma — 0 permitted use, 1 restricted use.
    pub tp_arma: String,
    /// nSerie — weapon serial, 1-15.
    pub n_serie: String,
    /// nCano — barrel serial, 1-15.
    pub n_cano: String,
    /// descr — full description, 1-256.
    pub desc: String,
}

/// comb — fuel detail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comb {
    /// cProdANP — 9-digit ANP product code.
    pub c_prod_anp: String,
    /// descANP — ANP description field, 2-95 digits.
    pub desc_anp: String,
    /// pGLP — LPG share, 4 decimal places.
    pub p_glp: Option<Decimal>,
    /// pGNn — national natural-gas share, 4 decimal places.
    pub p_gn_n: Option<Decimal>,
    /// pGNi — imported natural-gas share, 4 decimal places.
    pub p_gn_i: Option<Decimal>,
    /// vPart — starting value, 2 decimal places.
    pub v_part: Option<Decimal>,
    /// CODIF — authorization code, 1-21 digits.
    pub codif: Option<String>,
    /// qTemp — ambient-temperature quantity, 4 decimal places.
    pub q_temp: Option<Decimal>,
    /// UFCons — consumption state, or EX.
    pub uf_cons: String,
    /// CIDE group.
    pub cide: Option<Cide>,
    /// encerrante — pump totalizer group.
    pub encerrante: Option<Encerrante>,
}

/// CIDE — fuel-contribution group.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cide {
    /// qBCProd — base quantity, 4 decimal places.
    pub q_bc_prod: Decimal,
    /// vAliqProd — rate per unit, 4 decimal places.
    pub v_aliq_prod: Decimal,
    /// vCIDE — contribution amount, 2 decimal places.
    pub v_cide: Decimal,
}

/// encerrante — pump totalizer readings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Encerrante {
    /// nBico — nozzle number, 1-3 digits.
    pub n_bico: String,
    /// nBomba — pump number, 1-3 digits.
    pub n_bomba: Option<String>,
    /// nTanque — tank number, 1-3 digits.
    pub n_tanque: String,
    /// vEncIni — opening reading, 3 decimal places.
    pub v_enc_ini: Decimal,
    /// vEncFin — closing reading, 3 decimal places.
    pub v_enc_fin: Decimal,
}

/// imposto — per-item tax block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Imposto {
    /// vTotTrib — approximate total tax burden, 2 decimal places.
    pub v_tot_trib: Option<Decimal>,
    /// ICMS — raw payload resolved against the situation-code shapes.
    pub icms: IcmsPayload,
    /// ICMSUFDest — interstate consumer-destination apportionment.
    pub icms_uf_dest: Option<IcmsUfDest>,
    /// IPI block.
    pub ipi: Option<Ipi>,
    /// II — import tax block.
    pub ii: Option<Ii>,
    /// PIS block.
    pub pis: Option<Pis>,
    /// PISST block.
    pub pis_st: Option<PisSt>,
    /// COFINS block.
    pub cofins: Option<Cofins>,
    /// COFINSST block.
    pub cofins_st: Option<CofinsSt>,
    /// ISSQN block (service items).
    pub issqn: Option<Issqn>,
}

/// IPI — excise tax.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ipi {
    /// CNPJProd — producer CNPJ when different from the emitter.
    pub cnpj_prod: Option<String>,
    /// cSelo — tax-stamp code, 1-60.
    pub c_selo: Option<String>,
    /// qSelo — stamp quantity.
    pub q_selo: Option<u32>,
    /// cEnq — legal framing code, 1-3 digits.
    pub c_enq: String,
    /// CST — tax-situation code.
    pub cst: String,
    /// IPITrib — calculation group, mandatory for taxed situation codes.
    pub trib: Option<IpiTrib>,
}

/// IPITrib — taxed-calculation group (by rate or by unit).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IpiTrib {
    /// vBC — calculation base, 2 decimal places.
    pub v_bc: Option<Decimal>,
    /// pIPI — rate, 4 decimal places.
    pub p_ipi: Option<Decimal>,
    /// qUnid — taxable quantity, 4 decimal places.
    pub q_unid: Option<Decimal>,
    /// vUnid — value per unit, 4 decimal places.
    pub v_unid: Option<Decimal>,
    /// vIPI — tax amount, 2 decimal places.
    pub v_ipi: Decimal,
}

/// II — import tax.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ii {
    /// vBC — customs base, 2 decimal places.
    pub v_bc: Decimal,
    /// vDespAdu — customs expenses, 2 decimal places.
    pub v_desp_adu: Decimal,
    /// vII — tax amount, 2 decimal places.
    pub v_ii: Decimal,
    /// vIOF — financial-operations tax, 2 decimal places.
    pub v_iof: Decimal,
}

/// PIS contribution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pis {
    /// CST — tax-situation code.
    pub cst: String,
    /// PISAliq — rate-based group (CST 01/02).
    pub aliq: Option<PisAliq>,
    /// PISQtde — quantity-based group (CST 03).
    pub qtde: Option<PisQtde>,
    /// PISOutr — other-operations group (CST 49-99).
    pub outr: Option<PisOutr>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PisAliq {
    /// vBC — base, 2 decimal places.
    pub v_bc: Decimal,
    /// pPIS — rate, 4 decimal places.
    pub p_pis: Decimal,
    /// vPIS — amount, 2 decimal places.
    pub v_pis: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PisQtde {
    /// qBCProd — sold quantity, 4 decimal places.
    pub q_bc_prod: Decimal,
    /// vAliqProd — rate per unit, 4 decimal places.
    pub v_aliq_prod: Decimal,
    /// vPIS — amount, 2 decimal places.
    pub v_pis: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PisOutr {
    /// vBC — base, 2 decimal places.
    pub v_bc: Option<Decimal>,
    /// pPIS — rate, 4 decimal places.
    pub p_pis: Option<Decimal>,
    /// qBCProd — sold quantity, 4 decimal places.
    pub q_bc_prod: Option<Decimal>,
    /// vAliqProd — rate per unit, 4 decimal places.
    pub v_aliq_prod: Option<Decimal>,
    /// vPIS — amount, 2 decimal places.
    pub v_pis: Decimal,
}

/// PISST — PIS under tax substitution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PisSt {
    /// vBC — base, 2 decimal places.
    pub v_bc: Option<Decimal>,
    /// pPIS — rate, 4 decimal places.
    pub p_pis: Option<Decimal>,
    /// qBCProd — sold quantity, 4 decimal places.
    pub q_bc_prod: Option<Decimal>,
    /// vAliqProd — rate per unit, 4 decimal places.
    pub v_aliq_prod: Option<Decimal>,
    /// vPIS — amount, 2 decimal places.
    pub v_pis: Decimal,
}

/// COFINS contribution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cofins {
    /// CST — tax-situation code.
    pub cst: String,
    /// COFINSAliq — rate-based group (CST 01/02).
    pub aliq: Option<CofinsAliq>,
    /// COFINSQtde — quantity-based group (CST 03).
    pub qtde: Option<CofinsQtde>,
    /// COFINSOutr — catch-all group for the remaining code set.
    pub outr: Option<CofinsOutr>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CofinsAliq {
    /// vBC — base, 2 decimal places.
    pub v_bc: Decimal,
    /// pCOFINS — rate, 4 decimal places.
    pub p_cofins: Decimal,
    /// vCOFINS — amount, 2 decimal places.
    pub v_cofins: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CofinsQtde {
    /// qBCProd — sold quantity, 4 decimal places.
    pub q_bc_prod: Decimal,
    /// vAliqProd — rate per unit, 4 decimal places.
    pub v_aliq_prod: Decimal,
    /// vCOFINS — amount, 2 decimal places.
    pub v_cofins: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CofinsOutr {
    /// vBC — base, 2 decimal places.
    pub v_bc: Option<Decimal>,
    /// pCOFINS — rate, 4 decimal places.
    pub p_cofins: Option<Decimal>,
    /// qBCProd — sold quantity, 4 decimal places.
    pub q_bc_prod: Option<Decimal>,
    /// vAliqProd — rate per unit, 4 decimal places.
    pub v_aliq_prod: Option<Decimal>,
    /// vCOFINS — amount, 2 decimal places.
    pub v_cofins: Decimal,
}

/// COFINSST — COFINS under tax substitution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CofinsSt {
    /// vBC — base, 2 decimal places.
    pub v_bc: Option<Decimal>,
    /// pCOFINS — rate, 4 decimal places.
    pub p_cofins: Option<Decimal>,
    /// qBCProd — sold quantity, 4 decimal places.
    pub q_bc_prod: Option<Decimal>,
    /// vAliqProd — rate per unit, 4 decimal places.
    pub v_aliq_prod: Option<Decimal>,
    /// vCOFINS — amount, 2 decimal places.
    pub v_cofins: Decimal,
}

/// ISSQN — municipal service tax, for service line items.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Issqn {
    /// vBC — base, 2 decimal places.
    pub v_bc: Decimal,
    /// vAliq — rate, 4 decimal places.
    pub v_aliq: Decimal,
    /// vISSQN — amount, 2 decimal places.
    pub v_issqn: Decimal,
    /// cMunFG — 7-digit municipality of taxable event.
    pub c_mun_fg: String,
    /// cListServ — service-list item (LC 116), e.g. "14.01".
    pub c_list_serv: String,
}

/// total — document totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Total {
    /// ICMSTot — goods totals.
    pub icms_tot: IcmsTot,
    /// ISSQNtot — service totals.
    pub issqn_tot: Option<IssqnTot>,
    /// retTrib — withheld federal taxes.
    pub ret_trib: Option<RetTrib>,
}

/// ICMSTot — aggregate amounts (all 2 decimal places). Declared values are
/// accepted as-is; reconciling them against line items is the authority's
/// concern, not this validator's.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IcmsTot {
    pub v_bc: Decimal,
    pub v_icms: Decimal,
    pub v_icms_deson: Decimal,
    pub v_fcp: Decimal,
    pub v_bc_st: Decimal,
    pub v_st: Decimal,
    pub v_fcp_st: Decimal,
    pub v_fcp_st_ret: Decimal,
    pub v_prod: Decimal,
    pub v_frete: Decimal,
    pub v_seg: Decimal,
    pub v_desc: Decimal,
    pub v_ii: Decimal,
    pub v_ipi: Decimal,
    pub v_ipi_devol: Decimal,
    pub v_pis: Decimal,
    pub v_cofins: Decimal,
    pub v_outro: Decimal,
    /// vNF — document total.
    pub v_nf: Decimal,
    /// vTotTrib — approximate tax burden.
    pub v_tot_trib: Option<Decimal>,
}

/// ISSQNtot — service totals (all 2 decimal places).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssqnTot {
    pub v_serv: Option<Decimal>,
    pub v_bc: Option<Decimal>,
    pub v_iss: Option<Decimal>,
    pub v_pis: Option<Decimal>,
    pub v_cofins: Option<Decimal>,
}

/// retTrib — withheld taxes (all 2 decimal places).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetTrib {
    pub v_ret_pis: Option<Decimal>,
    pub v_ret_cofins: Option<Decimal>,
    pub v_ret_csll: Option<Decimal>,
    pub v_bc_irrf: Option<Decimal>,
    pub v_irrf: Option<Decimal>,
    pub v_bc_ret_prev: Option<Decimal>,
    pub v_ret_prev: Option<Decimal>,
}

/// transp — transport block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transp {
    /// modFrete — freight responsibility, 0-4 or 9.
    pub mod_frete: String,
    /// transporta — carrier.
    pub transporta: Option<Transporta>,
    /// veicTransp — road vehicle.
    pub veic_transp: Option<VeicTransp>,
    /// vol — transported volumes.
    #[serde(default)]
    pub vol: Vec<Vol>,
}

/// transporta — carrier party.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transporta {
    /// CNPJ of the carrier.
    pub cnpj: Option<String>,
    /// CPF of the carrier.
    pub cpf: Option<String>,
    /// xNome — name, 2-60.
    pub x_nome: Option<String>,
    /// IE — state registration of the carrier.
    pub ie: Option<String>,
    /// xEnder — full address, 1-60.
    pub x_ender: Option<String>,
    /// xMun — municipality, 1-60.
    pub x_mun: Option<String>,
    /// UF — carrier state.
    pub uf: Option<String>,
}

/// veicTransp — road-vehicle identification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VeicTransp {
    /// placa — license plate.
    pub placa: String,
    /// UF of registration.
    pub uf: Option<String>,
    /// RNTC — national carrier registry.
    pub rntc: Option<String>,
}

/// vol — one transported volume.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vol {
    /// qVol — quantity of volumes.
    pub q_vol: Option<u32>,
    /// esp — species, 1-60.
    pub esp: Option<String>,
    /// marca — brand, 1-60.
    pub marca: Option<String>,
    /// nVol — numbering, 1-60.
    pub n_vol: Option<String>,
    /// pesoL — net weight, 3 decimal places.
    pub peso_l: Option<Decimal>,
    /// pesoB — gross weight, 3 decimal places.
    pub peso_b: Option<Decimal>,
}

/// cobr — billing block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cobr {
    /// fat — invoice summary.
    pub fat: Option<Fat>,
    /// dup — installments, max 120.
    #[serde(default)]
    pub dup: Vec<Dup>,
}

/// fat — invoice summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fat {
    /// nFat — invoice number, 1-60.
    pub n_fat: String,
    /// vOrig — original amount, 2 decimal places.
    pub v_orig: Decimal,
    /// vDesc — discount, 2 decimal places.
    pub v_desc: Option<Decimal>,
    /// vLiq — net amount, 2 decimal places.
    pub v_liq: Decimal,
}

/// dup — one installment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dup {
    /// nDup — installment number, 1-60.
    pub n_dup: String,
    /// dVenc — due date.
    pub d_venc: Option<NaiveDate>,
    /// vDup — installment amount, 2 decimal places.
    pub v_dup: Decimal,
}

/// pag — payment block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pag {
    /// detPag — payment entries, 1-100.
    pub det_pag: Vec<DetPag>,
    /// vTroco — change amount, 2 decimal places.
    pub v_troco: Option<Decimal>,
}

/// detPag — one payment entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetPag {
    /// indPag — 0 on sight, 1 deferred.
    pub ind_pag: Option<String>,
    /// tPag — payment-method code (SEFAZ table).
    pub t_pag: String,
    /// vPag — paid amount, 2 decimal places.
    pub v_pag: Decimal,
    /// card — card-operator group.
    pub card: Option<Card>,
}

/// card — card payment detail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    /// tpIntegra — 1 integrated, 2 not integrated.
    pub tp_integra: String,
    /// CNPJ of the acquirer.
    pub cnpj: Option<String>,
    /// tBand — card brand (SEFAZ table).
    pub t_band: Option<String>,
    /// cAut — authorization code, 1-20.
    pub c_aut: Option<String>,
}

/// infAdic — free-text addenda.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InfAdic {
    /// infAdFisco — remarks for the tax authority, 1-2000.
    pub inf_ad_fisco: Option<String>,
    /// infCpl — remarks for the recipient, 1-5000.
    pub inf_cpl: Option<String>,
}
