//! Typed records decoded from the two input collections.
//!
//! These are transient: companies are consumed by the hierarchy builder,
//! travels by the cost aggregator.

/// One organisational unit as it appears in the companies source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyRecord {
    /// Company id (empty when missing in the source)
    pub id: String,

    /// Display name (empty when missing in the source)
    pub name: String,

    /// Parent company id, `None` for the root
    pub parent_id: Option<String>,
}

impl CompanyRecord {
    /// Create a record; an empty `parent_id` is normalised to `None`
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        parent_id: Option<impl Into<String>>,
    ) -> Self {
        let parent_id: Option<String> = parent_id.map(Into::into).filter(|p| !p.is_empty());

        Self {
            id: id.into(),
            name: name.into(),
            parent_id,
        }
    }

    /// Whether this record marks the root of the hierarchy
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}

/// One expense attributed to a single company
#[derive(Debug, Clone, PartialEq)]
pub struct TravelRecord {
    pub id: String,
    pub price: f64,
    pub company_id: String,
}

impl TravelRecord {
    pub fn new(id: impl Into<String>, price: f64, company_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            price,
            company_id: company_id.into(),
        }
    }
}
