//! Palette — a keyed collection of colors with an optional selection.
//!
//! When nothing is selected, edits go to the palette's default color, so a
//! picker always has a current color to show.

use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::color::ColorModel;
use crate::error::Result;
use crate::hex::parse_hex;

#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Palette {
    colors: HashMap<Uuid, ColorModel>,
    selected: Option<Uuid>,
    default_color: ColorModel,
}

impl Palette {
    pub fn new(colors: impl IntoIterator<Item = ColorModel>) -> Self {
        Self {
            colors: colors.into_iter().map(|c| (c.id(), c)).collect(),
            ..Self::default()
        }
    }

    pub fn with_default_color(mut self, color: ColorModel) -> Self {
        self.default_color = color;
        self
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn get(&self, id: Uuid) -> Option<&ColorModel> {
        self.colors.get(&id)
    }

    pub fn contains(&self, id: Uuid) -> bool {
        self.colors.contains_key(&id)
    }

    pub fn selected(&self) -> Option<Uuid> {
        self.selected
    }

    pub fn default_color(&self) -> &ColorModel {
        &self.default_color
    }

    /// Colors ordered newest first, ties broken by id.
    pub fn sorted(&self) -> Vec<&ColorModel> {
        let mut colors: Vec<_> = self.colors.values().collect();
        colors.sort_by(|a, b| {
            b.date_created()
                .cmp(&a.date_created())
                .then_with(|| a.id().cmp(&b.id()))
        });
        colors
    }

    /// The selected color, or the default color when nothing is selected.
    pub fn current(&self) -> &ColorModel {
        self.selected
            .and_then(|id| self.colors.get(&id))
            .unwrap_or(&self.default_color)
    }

    /// Write `color` back to wherever [`Palette::current`] reads from.
    ///
    /// The slot keeps its key even if `color` carries another identity.
    pub fn set_current(&mut self, color: ColorModel) {
        match self.selected.and_then(|id| self.colors.get_mut(&id)) {
            Some(slot) => *slot = color,
            None => self.default_color = color,
        }
    }

    /// Insert `color` under its own id, replacing any color with that id.
    pub fn insert(&mut self, color: ColorModel) -> Uuid {
        let id = color.id();
        tracing::debug!(%id, name = color.name(), "palette insert");
        self.colors.insert(id, color);
        id
    }

    /// Add a copy of the current color under a fresh identity and select it.
    pub fn add(&mut self) -> Uuid {
        let id = self.insert(ColorModel::copy_of(self.current()));
        self.selected = Some(id);
        id
    }

    /// Decode `hex` and insert the result without changing the selection.
    pub fn add_hex(&mut self, hex: &str) -> Result<Uuid> {
        let color = parse_hex(hex)?;
        Ok(self.insert(color))
    }

    /// Remove the selected color and clear the selection.
    pub fn delete(&mut self) -> Option<ColorModel> {
        let id = self.selected.take()?;
        tracing::debug!(%id, "palette delete selected");
        self.colors.remove(&id)
    }

    /// Remove a color by id, clearing the selection if it pointed there.
    pub fn remove(&mut self, id: Uuid) -> Option<ColorModel> {
        if self.selected == Some(id) {
            self.selected = None;
        }
        self.colors.remove(&id)
    }

    /// Select `id`, or clear the selection with `None`. Unknown ids are
    /// ignored and return `false`.
    pub fn select(&mut self, id: Option<Uuid>) -> bool {
        match id {
            Some(id) if !self.colors.contains_key(&id) => false,
            _ => {
                self.selected = id;
                true
            }
        }
    }

    /// Select `id`, or deselect it if it is already selected.
    pub fn toggle_select(&mut self, id: Uuid) -> bool {
        if self.selected == Some(id) {
            self.selected = None;
            true
        } else {
            self.select(Some(id))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, HexError};

    fn palette() -> (Palette, Uuid, Uuid) {
        let a = ColorModel::from_hsb(0.3, 0.5, 0.5);
        let b = ColorModel::from_hsb(0.6, 0.5, 0.5);
        let (ida, idb) = (a.id(), b.id());
        (Palette::new([a, b]), ida, idb)
    }

    #[test]
    fn current_falls_back_to_default() {
        let (palette, _, _) = palette();
        assert_eq!(palette.selected(), None);
        assert_eq!(palette.current(), palette.default_color());
    }

    #[test]
    fn toggle_selection() {
        let (mut palette, a, _) = palette();
        assert!(palette.toggle_select(a));
        assert_eq!(palette.selected(), Some(a));
        assert_eq!(palette.current().id(), a);
        assert!(palette.toggle_select(a));
        assert_eq!(palette.selected(), None);
    }

    #[test]
    fn unknown_id_is_not_selected() {
        let (mut palette, _, _) = palette();
        assert!(!palette.select(Some(Uuid::new_v4())));
        assert_eq!(palette.selected(), None);
    }

    #[test]
    fn set_current_writes_selected_slot() {
        let (mut palette, a, _) = palette();
        palette.select(Some(a));
        let edited = palette.current().update_hue(0.9);
        palette.set_current(edited);
        assert!((palette.get(a).unwrap().hue() - 0.9).abs() < 1e-12);
    }

    #[test]
    fn set_current_without_selection_writes_default() {
        let (mut palette, _, _) = palette();
        palette.set_current(ColorModel::from_gray(0.1));
        assert_eq!(palette.default_color().white(), 0.1);
        assert_eq!(palette.len(), 2);
    }

    #[test]
    fn add_copies_current_and_selects() {
        let (mut palette, a, _) = palette();
        palette.select(Some(a));
        let id = palette.add();
        assert_ne!(id, a);
        assert_eq!(palette.len(), 3);
        assert_eq!(palette.selected(), Some(id));
        assert_eq!(palette.current().hsb(), palette.get(a).unwrap().hsb());
    }

    #[test]
    fn delete_removes_selected() {
        let (mut palette, a, b) = palette();
        assert!(palette.delete().is_none());
        palette.select(Some(a));
        assert_eq!(palette.delete().map(|c| c.id()), Some(a));
        assert_eq!(palette.selected(), None);
        assert!(!palette.contains(a));
        assert!(palette.contains(b));
    }

    #[test]
    fn remove_clears_selection() {
        let (mut palette, a, _) = palette();
        palette.select(Some(a));
        assert!(palette.remove(a).is_some());
        assert_eq!(palette.selected(), None);
    }

    #[test]
    fn sorted_newest_first() {
        let (palette, _, _) = palette();
        let sorted = palette.sorted();
        assert_eq!(sorted.len(), 2);
        assert!(sorted[0].date_created() >= sorted[1].date_created());
    }

    #[test]
    fn sorted_breaks_timestamp_ties_by_id() {
        let when = chrono::Utc::now();
        let colors: Vec<ColorModel> = (0..6)
            .map(|i| ColorModel::from_gray(f64::from(i) / 10.0).created_at(when))
            .collect();
        let forward = Palette::new(colors.clone());
        let backward = Palette::new(colors.into_iter().rev());

        let ids = |p: &Palette| p.sorted().iter().map(|c| c.id()).collect::<Vec<_>>();
        let sorted = ids(&forward);
        assert_eq!(sorted, ids(&backward));
        assert!(sorted.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn add_hex() {
        let mut palette = Palette::default();
        let id = palette.add_hex("#336699").unwrap();
        assert_eq!(palette.get(id).unwrap().to_rgb8(), (0x33, 0x66, 0x99));
        assert_eq!(
            palette.add_hex("#12345").unwrap_err(),
            Error::Hex(HexError::UnsupportedLength(5))
        );
    }
}
