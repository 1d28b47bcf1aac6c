//! House → colour assignment for edge labels and legends.
//!
//! Houses receive colours in first-mention order. When there are more houses
//! than colours, the extras stay unassigned and consumers decide how to draw
//! them; an unassigned house is never an error.

use std::collections::HashMap;

use serde::Serialize;
use tracing::warn;

/// Colours used when the config does not override them.
pub const DEFAULT_COLORS: [&str; 13] = [
    "#003f5c", "#2f4b7c", "#665191", "#a05195", "#d45087", "#f95d6a", "#ff7c43", "#ffa600",
    "#7f95d1", "#ffc0be", "#488f31", "#2ca25f", "#fdbb84",
];

/// One legend row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaletteEntry {
    pub house: String,
    pub color: Option<String>,
}

/// A fixed mapping from house names to colours.
#[derive(Debug, Clone, Default)]
pub struct Palette {
    entries: Vec<PaletteEntry>,
    index: HashMap<String, usize>,
}

impl Palette {
    /// Assign `colors` to `houses` in order.
    pub fn assign<S: AsRef<str>>(houses: &[String], colors: &[S]) -> Self {
        if houses.len() > colors.len() {
            warn!(
                houses = houses.len(),
                colors = colors.len(),
                "more houses than palette colours; extra houses left uncoloured"
            );
        }

        let mut entries = Vec::with_capacity(houses.len());
        let mut index = HashMap::with_capacity(houses.len());
        for (i, house) in houses.iter().enumerate() {
            index.insert(house.clone(), i);
            entries.push(PaletteEntry {
                house: house.clone(),
                color: colors.get(i).map(|c| c.as_ref().to_string()),
            });
        }
        Self { entries, index }
    }

    /// Assign the [`DEFAULT_COLORS`].
    #[must_use]
    pub fn with_defaults(houses: &[String]) -> Self {
        Self::assign(houses, &DEFAULT_COLORS)
    }

    /// Colour for `house`, or `None` if the house is unknown or the palette
    /// ran out.
    #[must_use]
    pub fn color_for(&self, house: &str) -> Option<&str> {
        self.index
            .get(house)
            .and_then(|&i| self.entries[i].color.as_deref())
    }

    /// Legend rows in first-mention order.
    #[must_use]
    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    /// Houses that did not get a colour.
    pub fn unassigned(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|e| e.color.is_none())
            .map(|e| e.house.as_str())
    }
}
