//! Core document model, error types and primitive field constraints.
//!
//! Everything here is shared by the ICMS resolver and the block validators:
//! the in-memory NF-e graph, the finding taxonomy, and the reusable
//! text/code/digit/precision/checksum checks.

pub mod constraint;
mod error;
pub mod ident;
pub mod text;
mod types;
pub mod uf;

pub use constraint::has_precision;
pub use error::*;
pub use ident::{is_valid_cnpj, is_valid_cpf};
pub use text::remove_accents;
pub use types::*;
pub use uf::{Uf, is_known_uf, is_known_uf_or_exterior};
