//! Deterministic generative engine for fully on-chain NFT artwork.
//!
//! Everything an owning contract needs to synthesize unique artwork and
//! metadata at mint or render time with no off-chain storage: a seeded
//! pseudo-random chain with weighted bucket selection ([`seed`],
//! [`random`]), an integer-only color algebra ([`color`]), fixed-point
//! decimal rendering ([`decimal`]), and string templating with base64
//! `data:` URIs ([`svg`], [`onchain`], [`base64`]).
//!
//! The four components are siblings, not a pipeline: a caller draws
//! randomness from the seed chain, feeds it to the color algebra to pick
//! colors, renders numeric traits as decimal strings, and assembles the
//! final SVG and JSON through the templater.
//!
//! The whole engine is stateless pure functions over integer arithmetic:
//! identical inputs give identical outputs, nothing survives between
//! calls, and each operation's cost is bounded and at worst linear in its
//! input length.

pub mod base64;
pub mod color;
pub mod decimal;
pub mod error;
pub mod onchain;
pub mod random;
pub mod seed;
pub mod svg;

pub use color::Color;
pub use decimal::to_decimal_string;
pub use error::SeedbrushError;
pub use random::{bucket_index, select_bucket};
pub use seed::Seed;
pub use svg::ColorAttribute;
