use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable handle into a [`ThemeStore`]. Handles are assigned from a
/// monotonic counter and never reused, even after removal.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ThemeId(pub u32);

impl fmt::Display for ThemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Display color of a theme, straight RGBA channels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RgbaColor {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl RgbaColor {
    #[inline]
    pub const fn new(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[inline]
    pub const fn opaque(red: f64, green: f64, blue: f64) -> Self {
        Self::new(red, green, blue, 1.0)
    }
}

/// A named deck description: the content pool cards are dealt from, how many
/// pairs a round uses, and the display color.
///
/// Contents are kept as one token per glyph so multi-scalar glyphs (flags,
/// keycaps) survive editing intact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub contents: Vec<String>,
    pub removed_contents: Vec<String>,
    pub number_of_pairs: usize,
    pub color: RgbaColor,
    id: ThemeId,
}

impl Theme {
    fn new(
        name: String,
        contents: Vec<String>,
        number_of_pairs: usize,
        color: RgbaColor,
        id: ThemeId,
    ) -> Self {
        let mut theme = Self {
            name,
            contents,
            removed_contents: Vec::new(),
            number_of_pairs,
            color,
            id,
        };
        theme.clamp_pairs();
        theme
    }

    #[inline]
    pub fn id(&self) -> ThemeId {
        self.id
    }

    /// A round can only be dealt from at least two distinct contents.
    #[inline]
    pub fn is_playable(&self) -> bool {
        self.contents.len() >= 2
    }

    /// Clamp the pair count to `max(2, min(requested, pool size))`.
    #[inline]
    pub fn clamp_pairs(&mut self) {
        self.number_of_pairs = self.number_of_pairs.min(self.contents.len()).max(2);
    }

    /// Add a content token unless it is already in the pool.
    pub fn add_content(&mut self, token: &str) {
        if !self.contents.iter().any(|c| c == token) {
            self.contents.push(token.to_string());
            self.removed_contents.retain(|c| c != token);
        }
    }

    /// Move a token to the removed pool. Refused when it would leave fewer
    /// than two contents behind.
    pub fn remove_content(&mut self, token: &str) -> bool {
        if self.contents.len() <= 2 {
            return false;
        }
        let Some(pos) = self.contents.iter().position(|c| c == token) else {
            return false;
        };
        let removed = self.contents.remove(pos);
        if !self.removed_contents.contains(&removed) {
            self.removed_contents.push(removed);
        }
        self.clamp_pairs();
        true
    }

    /// Bring a previously removed token back into the pool.
    pub fn restore_content(&mut self, token: &str) -> bool {
        let Some(pos) = self.removed_contents.iter().position(|c| c == token) else {
            return false;
        };
        let restored = self.removed_contents.remove(pos);
        if !self.contents.contains(&restored) {
            self.contents.push(restored);
        }
        true
    }
}

/// Ordered theme catalog. Themes are addressed by display index for list
/// operations and by [`ThemeId`] handle for everything that must survive
/// reordering.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeStore {
    name: String,
    themes: Vec<Theme>,
    next_id: u32,
}

impl ThemeStore {
    /// A catalog seeded with the built-in themes.
    pub fn new(name: &str) -> Self {
        let mut store = Self::empty(name);
        store.seed_defaults();
        store
    }

    /// A catalog with no themes at all.
    pub fn empty(name: &str) -> Self {
        Self {
            name: name.to_string(),
            themes: Vec::new(),
            next_id: 1,
        }
    }

    fn seed_defaults(&mut self) {
        let defaults: [(&str, &[&str], usize, RgbaColor); 6] = [
            (
                "Vehicles",
                &[
                    "🚲", "🚂", "🚁", "🚜", "🚕", "🏎", "🚑", "🚓", "🚒", "✈️", "🚀",
                    "⛵️", "🛸", "🛶", "🚌", "🏍", "🛺", "🚠", "🛵", "🚗", "🚚", "🚇",
                    "🛻", "🚝",
                ],
                7,
                RgbaColor::opaque(175.0, 67.0, 235.0),
            ),
            (
                "Flags",
                &[
                    "🇺🇸", "🇩🇪", "🇬🇧", "🇦🇺", "🇯🇵", "🇹🇭", "🇵🇸", "🇧🇷", "🇦🇫", "🇨🇳",
                    "🇫🇷", "🇮🇷", "🇳🇬", "🇹🇷", "🇵🇹", "🇨🇷", "🇪🇹", "🇪🇪",
                ],
                8,
                RgbaColor::opaque(38.0, 78.0, 245.0),
            ),
            (
                "Animals",
                &[
                    "🐆", "🐗", "🦓", "🐫", "🦌", "🦥", "🦏", "🦒", "🐺", "🦘", "🐘",
                    "🦬", "🐅", "🦛",
                ],
                7,
                RgbaColor::opaque(139.0, 69.0, 5.0),
            ),
            (
                "Plants",
                &["☘️", "🌵", "🌳", "🌿", "🌷", "🌹", "🌲", "🌴"],
                5,
                RgbaColor::opaque(0.0, 190.0, 0.0),
            ),
            (
                "USA",
                &["🔫", "🇺🇸", "🤠", "💵", "📱", "🏈", "🍩", "🦅"],
                8,
                RgbaColor::opaque(250.0, 0.0, 0.0),
            ),
            (
                "Fruits",
                &["🍊", "🍒", "🥝", "🍇", "🍏", "🍌", "🫐", "🥥", "🍍", "🥭"],
                7,
                RgbaColor::opaque(255.0, 115.0, 0.0),
            ),
        ];
        for (name, contents, pairs, color) in defaults {
            let contents = contents.iter().map(|s| (*s).to_string()).collect();
            self.insert(name, contents, pairs, color);
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.themes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }

    #[inline]
    pub fn themes(&self) -> &[Theme] {
        &self.themes
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Theme> {
        self.themes.iter()
    }

    /// Themes with enough contents to deal a round.
    #[inline]
    pub fn playable(&self) -> impl Iterator<Item = &Theme> {
        self.themes.iter().filter(|t| t.is_playable())
    }

    #[inline]
    pub fn get(&self, id: ThemeId) -> Option<&Theme> {
        self.themes.iter().find(|t| t.id == id)
    }

    /// Theme at a display index, clamped into range. None only on an empty
    /// catalog.
    pub fn theme_at(&self, index: usize) -> Option<&Theme> {
        if self.themes.is_empty() {
            return None;
        }
        let safe = index.min(self.themes.len() - 1);
        Some(&self.themes[safe])
    }

    /// Insert a new theme at the front of the catalog.
    pub fn insert(
        &mut self,
        name: &str,
        contents: Vec<String>,
        number_of_pairs: usize,
        color: RgbaColor,
    ) -> ThemeId {
        self.insert_at(name, contents, number_of_pairs, color, 0)
    }

    /// Insert a new theme at a display index (clamped into range).
    pub fn insert_at(
        &mut self,
        name: &str,
        contents: Vec<String>,
        number_of_pairs: usize,
        color: RgbaColor,
        index: usize,
    ) -> ThemeId {
        let id = ThemeId(self.next_id);
        self.next_id += 1;
        let theme = Theme::new(name.to_string(), contents, number_of_pairs, color, id);
        let safe = index.min(self.themes.len());
        self.themes.insert(safe, theme);
        id
    }

    /// Remove the theme at a display index. The last remaining theme cannot
    /// be removed.
    pub fn remove_at(&mut self, index: usize) -> Option<Theme> {
        if self.themes.len() > 1 && index < self.themes.len() {
            Some(self.themes.remove(index))
        } else {
            None
        }
    }

    /// Remove a theme by handle, with the same last-theme guard.
    pub fn remove(&mut self, id: ThemeId) -> Option<Theme> {
        let index = self.themes.iter().position(|t| t.id == id)?;
        self.remove_at(index)
    }

    /// Apply an edit to a theme, re-clamping its pair count afterwards.
    /// Returns false if the handle is stale.
    pub fn edit<F>(&mut self, id: ThemeId, f: F) -> bool
    where
        F: FnOnce(&mut Theme),
    {
        let Some(theme) = self.themes.iter_mut().find(|t| t.id == id) else {
            return false;
        };
        f(theme);
        theme.clamp_pairs();
        true
    }

    /// Move a theme from one display index to another.
    pub fn move_theme(&mut self, from: usize, to: usize) -> bool {
        if from >= self.themes.len() || to >= self.themes.len() {
            return false;
        }
        let theme = self.themes.remove(from);
        self.themes.insert(to, theme);
        true
    }

    pub(crate) fn snapshot_parts(&self) -> (&str, u32, &[Theme]) {
        (&self.name, self.next_id, &self.themes)
    }

    pub(crate) fn from_parts(name: String, next_id: u32, themes: Vec<Theme>) -> Self {
        Self {
            name,
            themes,
            next_id,
        }
    }
}
