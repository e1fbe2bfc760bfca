//! Detected VLAN definitions

use crate::scanner::slugify;

static HEADER: [&str; 3] = ["id", "name", "slug"];

/// Column names in output order
pub fn header(with_slug: bool) -> &'static [&'static str] {
    if with_slug { &HEADER } else { &HEADER[..2] }
}

/// A VLAN definition found in a worksheet row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VlanRecord {
    /// Raw identifier cell, not validated as a number
    pub id: String,
    /// Raw description cell
    pub name: String,
    /// Normalized form of `name`, when slugs are enabled
    pub slug: Option<String>,
}

impl VlanRecord {
    pub fn new(id: impl Into<String>, name: impl Into<String>, with_slug: bool) -> Self {
        let name = name.into();
        let slug = with_slug.then(|| slugify(&name));
        Self {
            id: id.into(),
            name,
            slug,
        }
    }

    /// Field values in the same order as [`header`]
    pub fn fields(&self, with_slug: bool) -> Vec<&str> {
        let mut fields = vec![self.id.as_str(), self.name.as_str()];
        if with_slug {
            fields.push(self.slug.as_deref().unwrap_or(""));
        }
        fields
    }
}
