//! # notafiscal
//!
//! Validation core for Brazilian NF-e (modelo 55) fiscal documents: checks an
//! in-memory document graph against the structural, domain, checksum,
//! precision and conditional business-rule catalogue before serialization
//! and transmission — which remain the caller's concern.
//!
//! All monetary and percentage values use [`rust_decimal::Decimal`] — never
//! floating point. Validation is a pure function: it either returns the
//! normalized document or the complete list of findings, never a partial
//! report.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use notafiscal::core::Uf;
//! use notafiscal::validate::{ValidationConfig, validate_nfe};
//!
//! let config = ValidationConfig { uf_emitente: Uf::Sp };
//! match validate_nfe(&nfe, &config) {
//!     Ok(normalizada) => enviar(normalizada),
//!     Err(erro) => exibir_pendencias(erro),
//! }
//! ```

pub mod core;
pub mod icms;
pub mod validate;

// Re-export core types at crate root for convenience
pub use crate::core::*;
