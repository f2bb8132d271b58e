//! `data-*` attributes attached to rendered elements.
//!
//! Every element Strata emits is tagged with its role and position in the
//! diagram (`data-role="cell" data-band="2" data-cell="0"`), so the output can
//! be inspected structurally without parsing geometry.

/// An ordered list of `data-*` attributes.
///
/// # Examples
///
/// ```
/// # use strata_core::draw::DataAttributes;
/// let data = DataAttributes::role("cell").with("data-band", 2).with("data-cell", 0);
/// let names: Vec<&str> = data.iter().map(|(name, _)| name).collect();
/// assert_eq!(names, ["data-role", "data-band", "data-cell"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataAttributes {
    entries: Vec<(&'static str, String)>,
}

impl DataAttributes {
    /// Creates an attribute list holding only `data-role`.
    pub fn role(role: &str) -> Self {
        Self::default().with("data-role", role)
    }

    /// Appends an attribute (builder style).
    pub fn with(mut self, name: &'static str, value: impl ToString) -> Self {
        self.entries.push((name, value.to_string()));
        self
    }

    /// Iterates over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.entries
            .iter()
            .map(|(name, value)| (*name, value.as_str()))
    }
}

/// Sets every attribute of a [`DataAttributes`] on an SVG element.
///
/// ```
/// use strata_core::draw::DataAttributes;
/// use svg::node::element as svg_element;
///
/// let data = DataAttributes::role("band").with("data-band", 0);
/// let rect = strata_core::apply_data!(svg_element::Rectangle::new(), &data);
/// assert!(rect.to_string().contains("data-role=\"band\""));
/// ```
#[macro_export]
macro_rules! apply_data {
    ($element:expr, $data:expr) => {{
        let mut elem = $element;
        for (name, value) in $data.iter() {
            elem = elem.set(name, value);
        }
        elem
    }};
}
