//! ICMS tax-situation shapes and their resolution.
//!
//! A line item's ICMS content is one of seventeen mutually exclusive
//! calculation shapes (normal-regime CST codes plus the Simples Nacional
//! CSOSN codes). [`resolve`] picks the shape; the types here are the decoded
//! results.

mod resolver;
mod types;

pub use resolver::{motivos_desoneracao, resolve};
pub use types::*;
