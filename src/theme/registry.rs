use serde::{Deserialize, Serialize};

use super::types::Theme;

/// Ordered, read-only collection of themes built from a themes document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThemeRegistry {
	themes: Vec<Theme>,
}

impl ThemeRegistry {
	pub fn new(themes: Vec<Theme>) -> Self {
		Self { themes }
	}

	/// Returns the first theme whose name matches exactly.
	///
	/// Names are compared case-sensitively. When a document repeats a name the
	/// earliest entry wins and later ones are unreachable.
	#[must_use]
	pub fn find_by_name(&self, name: &str) -> Option<&Theme> {
		self.themes.iter().find(|theme| theme.name() == name)
	}

	/// Theme names in document order.
	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.themes.iter().map(Theme::name)
	}

	pub fn iter(&self) -> impl Iterator<Item = &Theme> {
		self.themes.iter()
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.themes.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.themes.is_empty()
	}

	/// Names that occur more than once, each reported once in order of first
	/// repetition.
	pub(crate) fn duplicate_names(&self) -> Vec<&str> {
		let mut duplicates: Vec<&str> = Vec::new();
		for (index, theme) in self.themes.iter().enumerate() {
			let name = theme.name();
			let seen_before = self.themes[..index].iter().any(|other| other.name() == name);
			if seen_before && !duplicates.contains(&name) {
				duplicates.push(name);
			}
		}
		duplicates
	}
}

impl<'a> IntoIterator for &'a ThemeRegistry {
	type Item = &'a Theme;
	type IntoIter = std::slice::Iter<'a, Theme>;

	fn into_iter(self) -> Self::IntoIter {
		self.themes.iter()
	}
}
