//! Dimension Resolver - The language switcher of the archive
//!
//! The switcher lists every language except the one being shown. Which one
//! is being shown is either what the editor asked for or the default.

use serde::Serialize;

use crate::model::dimension::LanguageDimension;

/// The language the archive is currently showing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum DimensionSelection {
    /// Editor picked a language; `label` is what the switcher displays
    Requested {
        dimension: LanguageDimension,
        label: String,
    },
    /// Nothing requested, the default dimension applies
    Default { dimension: LanguageDimension },
}

impl DimensionSelection {
    pub fn dimension(&self) -> &LanguageDimension {
        match self {
            DimensionSelection::Requested { dimension, .. } => dimension,
            DimensionSelection::Default { dimension } => dimension,
        }
    }
}

/// Result of resolving the switcher
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedDimensions {
    /// Languages the editor can switch to
    pub selectable: Vec<LanguageDimension>,
    /// The language being shown
    pub active: DimensionSelection,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DimensionResolver;

impl DimensionResolver {
    pub fn new() -> Self {
        Self
    }

    /// Split known dimensions into the active one and the rest
    ///
    /// `requested_label` overrides the label shown for a requested
    /// dimension; without one the dimension's own label is used.
    pub fn resolve(
        &self,
        known: Vec<LanguageDimension>,
        default: LanguageDimension,
        requested: Option<&LanguageDimension>,
        requested_label: Option<&str>,
    ) -> ResolvedDimensions {
        let active = match requested {
            Some(dimension) => DimensionSelection::Requested {
                dimension: dimension.clone(),
                label: requested_label
                    .filter(|l| !l.is_empty())
                    .unwrap_or_else(|| dimension.label())
                    .to_string(),
            },
            None => DimensionSelection::Default { dimension: default },
        };

        let active_key = active.dimension().key().to_string();
        let selectable = known.into_iter().filter(|d| d.key() != active_key).collect();

        ResolvedDimensions { selectable, active }
    }
}
