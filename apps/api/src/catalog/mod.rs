//! Static Field Catalog: curated career fields, built once at startup.
//!
//! Read-only: lookup by id, substring search, and side-by-side comparison.

use serde::Serialize;
use thiserror::Error;

mod data;
pub mod handlers;
pub mod models;

pub use models::{CareerField, GrowthOutlook, SalaryRange, Trend};

/// Fewest fields a comparison is meaningful for.
pub const MIN_COMPARE: usize = 2;
/// Most fields shown side by side; extra ids are ignored.
pub const MAX_COMPARE: usize = 3;
/// Skills shown per category in a comparison row.
const COMPARE_SKILLS: usize = 3;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CompareError {
    #[error("Select at least 2 fields to compare (found {found})")]
    TooFew { found: usize },
}

/// One column of a side-by-side comparison.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonRow<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub growth_outlook: &'a GrowthOutlook,
    pub salary_ranges: &'a SalaryRange,
    pub top_technical_skills: &'a [&'static str],
    pub top_soft_skills: &'a [&'static str],
}

#[derive(Debug)]
pub struct FieldCatalog {
    fields: Vec<CareerField>,
}

impl FieldCatalog {
    pub fn builtin() -> Self {
        Self::from_fields(data::builtin_fields())
    }

    pub fn from_fields(fields: Vec<CareerField>) -> Self {
        Self { fields }
    }

    pub fn all(&self) -> &[CareerField] {
        &self.fields
    }

    pub fn get(&self, id: &str) -> Option<&CareerField> {
        self.fields.iter().find(|f| f.id == id)
    }

    /// Case-insensitive substring match on name or description.
    /// A blank query matches everything.
    pub fn search(&self, query: &str) -> Vec<&CareerField> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.fields.iter().collect();
        }
        self.fields
            .iter()
            .filter(|f| {
                f.name.to_lowercase().contains(&needle)
                    || f.description.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Resolves ids in the given order, skipping unknown ones.
    pub fn resolve<'a, S: AsRef<str>>(&'a self, ids: &[S]) -> Vec<&'a CareerField> {
        ids.iter().filter_map(|id| self.get(id.as_ref())).collect()
    }

    /// Builds comparison rows for up to three distinct known fields.
    pub fn compare<S: AsRef<str>>(&self, ids: &[S]) -> Result<Vec<ComparisonRow<'_>>, CompareError> {
        let mut selected: Vec<&CareerField> = Vec::with_capacity(MAX_COMPARE);
        for field in self.resolve(ids) {
            if selected.len() == MAX_COMPARE {
                break;
            }
            if !selected.iter().any(|f| f.id == field.id) {
                selected.push(field);
            }
        }

        if selected.len() < MIN_COMPARE {
            return Err(CompareError::TooFew {
                found: selected.len(),
            });
        }

        Ok(selected
            .into_iter()
            .map(|f| ComparisonRow {
                id: f.id,
                name: f.name,
                growth_outlook: &f.growth_outlook,
                salary_ranges: &f.salary_ranges,
                top_technical_skills: head(&f.skills.technical, COMPARE_SKILLS),
                top_soft_skills: head(&f.skills.soft, COMPARE_SKILLS),
            })
            .collect())
    }
}

fn head<T>(items: &[T], n: usize) -> &[T] {
    &items[..items.len().min(n)]
}
