//! Brazilian state (UF) code tables.

use serde::{Deserialize, Serialize};

/// The 27 federative units, identified by their two-letter abbreviation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Uf {
    Ac,
    Al,
    Ap,
    Am,
    Ba,
    Ce,
    Df,
    Es,
    Go,
    Ma,
    Mt,
    Ms,
    Mg,
    Pa,
    Pb,
    Pr,
    Pe,
    Pi,
    Rj,
    Rn,
    Rs,
    Ro,
    Rr,
    Sc,
    Sp,
    Se,
    To,
}

impl Uf {
    /// Two-letter abbreviation as it appears in the document.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Ac => "AC",
            Self::Al => "AL",
            Self::Ap => "AP",
            Self::Am => "AM",
            Self::Ba => "BA",
            Self::Ce => "CE",
            Self::Df => "DF",
            Self::Es => "ES",
            Self::Go => "GO",
            Self::Ma => "MA",
            Self::Mt => "MT",
            Self::Ms => "MS",
            Self::Mg => "MG",
            Self::Pa => "PA",
            Self::Pb => "PB",
            Self::Pr => "PR",
            Self::Pe => "PE",
            Self::Pi => "PI",
            Self::Rj => "RJ",
            Self::Rn => "RN",
            Self::Rs => "RS",
            Self::Ro => "RO",
            Self::Rr => "RR",
            Self::Sc => "SC",
            Self::Sp => "SP",
            Self::Se => "SE",
            Self::To => "TO",
        }
    }

    /// Parse a two-letter abbreviation.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "AC" => Some(Self::Ac),
            "AL" => Some(Self::Al),
            "AP" => Some(Self::Ap),
            "AM" => Some(Self::Am),
            "BA" => Some(Self::Ba),
            "CE" => Some(Self::Ce),
            "DF" => Some(Self::Df),
            "ES" => Some(Self::Es),
            "GO" => Some(Self::Go),
            "MA" => Some(Self::Ma),
            "MT" => Some(Self::Mt),
            "MS" => Some(Self::Ms),
            "MG" => Some(Self::Mg),
            "PA" => Some(Self::Pa),
            "PB" => Some(Self::Pb),
            "PR" => Some(Self::Pr),
            "PE" => Some(Self::Pe),
            "PI" => Some(Self::Pi),
            "RJ" => Some(Self::Rj),
            "RN" => Some(Self::Rn),
            "RS" => Some(Self::Rs),
            "RO" => Some(Self::Ro),
            "RR" => Some(Self::Rr),
            "SC" => Some(Self::Sc),
            "SP" => Some(Self::Sp),
            "SE" => Some(Self::Se),
            "TO" => Some(Self::To),
            _ => None,
        }
    }

    /// IBGE numeric code used in the access key and document references.
    pub fn codigo(&self) -> u8 {
        match self {
            Self::Ac => 12,
            Self::Al => 27,
            Self::Ap => 16,
            Self::Am => 13,
            Self::Ba => 29,
            Self::Ce => 23,
            Self::Df => 53,
            Self::Es => 32,
            Self::Go => 52,
            Self::Ma => 21,
            Self::Mt => 51,
            Self::Ms => 50,
            Self::Mg => 31,
            Self::Pa => 15,
            Self::Pb => 25,
            Self::Pr => 41,
            Self::Pe => 26,
            Self::Pi => 22,
            Self::Rj => 33,
            Self::Rn => 24,
            Self::Rs => 43,
            Self::Ro => 11,
            Self::Rr => 14,
            Self::Sc => 42,
            Self::Sp => 35,
            Self::Se => 28,
            Self::To => 17,
        }
    }

    /// Parse an IBGE numeric state code.
    pub fn from_codigo(codigo: u8) -> Option<Self> {
        match codigo {
            12 => Some(Self::Ac),
            27 => Some(Self::Al),
            16 => Some(Self::Ap),
            13 => Some(Self::Am),
            29 => Some(Self::Ba),
            23 => Some(Self::Ce),
            53 => Some(Self::Df),
            32 => Some(Self::Es),
            52 => Some(Self::Go),
            21 => Some(Self::Ma),
            51 => Some(Self::Mt),
            50 => Some(Self::Ms),
            31 => Some(Self::Mg),
            15 => Some(Self::Pa),
            25 => Some(Self::Pb),
            41 => Some(Self::Pr),
            26 => Some(Self::Pe),
            22 => Some(Self::Pi),
            33 => Some(Self::Rj),
            24 => Some(Self::Rn),
            43 => Some(Self::Rs),
            11 => Some(Self::Ro),
            14 => Some(Self::Rr),
            42 => Some(Self::Sc),
            35 => Some(Self::Sp),
            28 => Some(Self::Se),
            17 => Some(Self::To),
            _ => None,
        }
    }

    /// States whose emitters must inform a fiscal-benefit code (cBenef)
    /// on every line item.
    pub fn requires_cbenef(&self) -> bool {
        matches!(
            self,
            Self::Df | Self::Es | Self::Go | Self::Pr | Self::Rs | Self::Rj | Self::Sc
        )
    }
}

/// Check whether `code` is one of the 27 state abbreviations.
pub fn is_known_uf(code: &str) -> bool {
    Uf::from_code(code).is_some()
}

/// Check a state field that also admits `"EX"` (operations abroad), as in
/// `UFST` and `UFCons`.
pub fn is_known_uf_or_exterior(code: &str) -> bool {
    code == "EX" || is_known_uf(code)
}
