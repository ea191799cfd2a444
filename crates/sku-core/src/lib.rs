//! Combination generation and variation matching for product SKUs.
//!
//! The crate is a set of pure functions over an immutable [`sku_model::Product`]
//! snapshot:
//!
//! - [`generate_combinations`] builds the Cartesian product of ordered axes;
//! - [`find_best_match`] picks the most specific variation for a slug
//!   combination;
//! - [`synthesize_sku`] suppresses pinned suffix tokens, applies merge rules
//!   and formats the final SKU;
//! - [`resolve_sku`] chains the two for one combination;
//! - [`generate_table`] runs the whole thing for a product.

#![deny(unsafe_code)]

pub mod combinations;
pub mod error;
pub mod matcher;
pub mod pipeline;
pub mod projection;
pub mod resolve;
pub mod synth;

pub use combinations::{combination_count, generate_combinations};
pub use error::{CoreError, Result};
pub use matcher::{MatchResult, find_best_match, match_specificity};
pub use pipeline::{audit_variations, generate_table};
pub use projection::{AxisProjection, ProjectedAxis, duplicate_axis_ids};
pub use resolve::{Resolution, resolve_sku, resolve_sku_with_rules};
pub use synth::{join_tokens, surviving_tokens, synthesize_sku};
