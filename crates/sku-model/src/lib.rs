pub mod error;
pub mod ids;
pub mod options;
pub mod product;
pub mod table;

pub use error::{ModelError, Result};
pub use ids::{ATTRIBUTE_KEY_PREFIX, AxisId, slugify};
pub use options::{
    DEFAULT_MAX_COMBINATIONS, GeneratorOptions, LAMINATE_COLOR_AXIS, LAMINATE_SIDE_B_AXIS,
    MergeRule, TermFilter,
};
pub use product::{Axis, Product, Term, VariationRecord};
pub use table::{Issue, IssueKind, SkuRow, SkuTable};
