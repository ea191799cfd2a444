//! Aligned name, slug, and suffix views of the eligible axes.
//!
//! The three views share axis order and term order, so combination `i` of
//! each generated product refers to the same logical combination.

use sku_model::{Axis, AxisId, TermFilter};

use crate::combinations::combination_count;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectedAxis {
    pub id: AxisId,
    pub label: String,
    pub names: Vec<String>,
    pub slugs: Vec<String>,
    pub suffixes: Vec<String>,
}

impl ProjectedAxis {
    pub fn len(&self) -> usize {
        self.slugs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slugs.is_empty()
    }

    pub fn has_slug(&self, slug: &str) -> bool {
        self.slugs.iter().any(|candidate| candidate == slug)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AxisProjection {
    pub axes: Vec<ProjectedAxis>,
}

impl AxisProjection {
    /// Projects variation axes, keeping terms allowed by `filter`. Axes
    /// without any remaining term are left out.
    ///
    /// A repeated axis id keeps the position of its first occurrence and the
    /// definition of its last.
    pub fn from_axes(axes: &[Axis], filter: TermFilter) -> Self {
        let mut projected = Vec::new();
        for axis in unique_axes(axes).into_iter().filter(|axis| axis.variation) {
            let mut names = Vec::new();
            let mut slugs = Vec::new();
            let mut suffixes = Vec::new();
            for term in &axis.terms {
                if filter == TermFilter::WithSuffix && !term.has_suffix() {
                    continue;
                }
                names.push(term.name.clone());
                slugs.push(term.slug.clone());
                suffixes.push(term.suffix_token().to_string());
            }
            if slugs.is_empty() {
                continue;
            }
            projected.push(ProjectedAxis {
                id: axis.id.clone(),
                label: axis.label.clone(),
                names,
                slugs,
                suffixes,
            });
        }
        Self { axes: projected }
    }

    pub fn is_empty(&self) -> bool {
        self.axes.is_empty()
    }

    pub fn get(&self, id: &AxisId) -> Option<&ProjectedAxis> {
        self.axes.iter().find(|axis| &axis.id == id)
    }

    pub fn ids(&self) -> Vec<AxisId> {
        self.axes.iter().map(|axis| axis.id.clone()).collect()
    }

    pub fn labels(&self) -> Vec<String> {
        self.axes.iter().map(|axis| axis.label.clone()).collect()
    }

    pub fn names(&self) -> Vec<(AxisId, Vec<String>)> {
        self.view(|axis| &axis.names)
    }

    pub fn slugs(&self) -> Vec<(AxisId, Vec<String>)> {
        self.view(|axis| &axis.slugs)
    }

    pub fn suffixes(&self) -> Vec<(AxisId, Vec<String>)> {
        self.view(|axis| &axis.suffixes)
    }

    pub fn combination_count(&self) -> Option<usize> {
        combination_count(&self.slugs())
    }

    fn view(&self, pick: impl Fn(&ProjectedAxis) -> &Vec<String>) -> Vec<(AxisId, Vec<String>)> {
        self.axes
            .iter()
            .map(|axis| (axis.id.clone(), pick(axis).clone()))
            .collect()
    }
}

fn unique_axes(axes: &[Axis]) -> Vec<&Axis> {
    let mut unique: Vec<&Axis> = Vec::with_capacity(axes.len());
    for axis in axes {
        match unique.iter().position(|kept| kept.id == axis.id) {
            Some(position) => unique[position] = axis,
            None => unique.push(axis),
        }
    }
    unique
}

/// Axis ids defined more than once, in order of first repetition.
pub fn duplicate_axis_ids(axes: &[Axis]) -> Vec<AxisId> {
    let mut duplicates: Vec<AxisId> = Vec::new();
    for (index, axis) in axes.iter().enumerate() {
        let repeated = axes[..index].iter().any(|earlier| earlier.id == axis.id);
        if repeated && !duplicates.contains(&axis.id) {
            duplicates.push(axis.id.clone());
        }
    }
    duplicates
}
