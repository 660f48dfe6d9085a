//! Industry - A sector startups are tagged with

entity_id!(
    /// Unique identifier for an Industry (its document id)
    IndustryId
);

/// Industry with the number of startups tagged with it
///
/// The count is maintained upstream and is not recomputed here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Industry {
    pub id: IndustryId,
    pub name: String,
    pub count: u64,
}

impl Industry {
    pub fn new(id: IndustryId, name: impl Into<String>, count: u64) -> Self {
        Self {
            id,
            name: name.into(),
            count,
        }
    }
}
