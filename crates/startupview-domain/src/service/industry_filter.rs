//! Industry Filter - The selected industry of a browsing session
//!
//! One value per session, handed explicitly to whoever reads or changes
//! it. The selection is not validated against the known industries; an
//! unknown id simply lists nothing.

use crate::model::industry::{Industry, IndustryId};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndustryFilter {
    selected: Option<IndustryId>,
}

impl IndustryFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter with an initial selection
    pub fn selecting(id: IndustryId) -> Self {
        Self { selected: Some(id) }
    }

    pub fn selected(&self) -> Option<&IndustryId> {
        self.selected.as_ref()
    }

    pub fn is_selected(&self, id: &IndustryId) -> bool {
        self.selected.as_ref() == Some(id)
    }

    /// Select `id`, or deselect when it is already selected
    ///
    /// Returns the selection after the toggle.
    pub fn toggle(&mut self, id: IndustryId) -> Option<&IndustryId> {
        if self.is_selected(&id) {
            self.selected = None;
        } else {
            self.selected = Some(id);
        }
        self.selected.as_ref()
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// Display name of the selection, looked up in a fetched industry list
    pub fn selected_name<'a>(&self, industries: &'a [Industry]) -> Option<&'a str> {
        let selected = self.selected.as_ref()?;
        industries
            .iter()
            .find(|industry| &industry.id == selected)
            .map(|industry| industry.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_same_value_deselects() {
        let mut filter = IndustryFilter::new();

        filter.toggle(IndustryId::new("ind-1"));
        assert!(filter.is_selected(&IndustryId::new("ind-1")));

        let after = filter.toggle(IndustryId::new("ind-1"));
        assert!(after.is_none());
        assert!(filter.selected().is_none());
    }

    #[test]
    fn test_toggle_other_value_replaces() {
        let mut filter = IndustryFilter::selecting(IndustryId::new("ind-1"));

        filter.toggle(IndustryId::new("ind-2"));

        assert_eq!(filter.selected().map(IndustryId::as_str), Some("ind-2"));
    }

    #[test]
    fn test_clear() {
        let mut filter = IndustryFilter::selecting(IndustryId::new("ind-1"));
        filter.clear();
        assert_eq!(filter, IndustryFilter::new());
    }

    #[test]
    fn test_selected_name() {
        let industries = vec![
            Industry::new(IndustryId::new("ind-1"), "Fintech", 4),
            Industry::new(IndustryId::new("ind-2"), "Health", 2),
        ];

        let filter = IndustryFilter::selecting(IndustryId::new("ind-2"));
        assert_eq!(filter.selected_name(&industries), Some("Health"));

        let unknown = IndustryFilter::selecting(IndustryId::new("ind-9"));
        assert_eq!(unknown.selected_name(&industries), None);
        assert_eq!(IndustryFilter::new().selected_name(&industries), None);
    }
}
