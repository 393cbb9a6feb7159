// Category filter and free-text search resolution
use serde::Serialize;
use thiserror::Error;

/// Sentinel option that applies no filter.
pub const ALL: &str = "all";

/// Selectable diet types in display order. Search ties resolve to the
/// earliest entry, so the order here is part of the behaviour.
pub const DIET_TYPES: [&str; 6] = [ALL, "vegan", "keto", "paleo", "dash", "mediterranean"];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterError {
    #[error("unknown diet type '{0}'")]
    UnknownOption(String),
}

/// Result of resolving search text against the option list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// An option matched; `changed` is false if it was already selected.
    Matched { value: String, changed: bool },
    /// Empty search text reset the selection to the sentinel.
    Reset { changed: bool },
    /// Nothing matched; the selection is left as it was.
    NoMatch,
}

impl SearchOutcome {
    pub fn changed(&self) -> bool {
        match self {
            SearchOutcome::Matched { changed, .. } | SearchOutcome::Reset { changed } => *changed,
            SearchOutcome::NoMatch => false,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FilterController {
    options: Vec<String>,
    selected: String,
    search_text: String,
}

impl Default for FilterController {
    fn default() -> Self {
        Self::new(DIET_TYPES.iter().map(|o| o.to_string()).collect())
    }
}

impl FilterController {
    /// `options` must contain the [`ALL`] sentinel; it is prepended if missing.
    pub fn new(mut options: Vec<String>) -> Self {
        if !options.iter().any(|o| o == ALL) {
            options.insert(0, ALL.to_string());
        }
        Self {
            options,
            selected: ALL.to_string(),
            search_text: String::new(),
        }
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn selected(&self) -> &str {
        &self.selected
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    /// The value to send as `diet_type`, or `None` when unfiltered.
    pub fn active_filter(&self) -> Option<&str> {
        (self.selected != ALL).then_some(self.selected.as_str())
    }

    /// Dropdown selection. Returns whether the selection changed.
    pub fn select(&mut self, value: &str) -> Result<bool, FilterError> {
        let wanted = value.trim().to_lowercase();
        let option = self
            .options
            .iter()
            .find(|o| o.to_lowercase() == wanted)
            .ok_or_else(|| FilterError::UnknownOption(value.to_string()))?;

        let changed = *option != self.selected;
        self.selected = option.clone();
        Ok(changed)
    }

    /// Resolve free text to the first option containing it as a substring.
    pub fn resolve_search(&mut self, text: &str) -> SearchOutcome {
        let needle = text.to_lowercase();
        self.search_text = text.to_string();

        if needle.is_empty() {
            let changed = self.selected != ALL;
            self.selected = ALL.to_string();
            return SearchOutcome::Reset { changed };
        }

        let matched = self
            .options
            .iter()
            .filter(|o| o.as_str() != ALL)
            .find(|o| o.to_lowercase().contains(&needle));

        match matched {
            Some(option) => {
                let changed = *option != self.selected;
                self.selected = option.clone();
                SearchOutcome::Matched {
                    value: option.clone(),
                    changed,
                }
            }
            None => SearchOutcome::NoMatch,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_matches_substring() {
        let mut filter = FilterController::default();
        let outcome = filter.resolve_search("veg");
        assert_eq!(
            outcome,
            SearchOutcome::Matched {
                value: "vegan".to_string(),
                changed: true
            }
        );
        assert_eq!(filter.selected(), "vegan");
        assert_eq!(filter.active_filter(), Some("vegan"));
    }

    #[test]
    fn test_search_is_case_insensitive_and_not_prefix_only() {
        let mut filter = FilterController::default();
        filter.resolve_search("TERRA");
        assert_eq!(filter.selected(), "mediterranean");
    }

    #[test]
    fn test_search_tie_goes_to_first_option_in_list() {
        // "a" occurs in vegan, paleo, dash and mediterranean
        let mut filter = FilterController::default();
        filter.resolve_search("a");
        assert_eq!(filter.selected(), "vegan");
    }

    #[test]
    fn test_search_never_matches_sentinel() {
        let mut filter = FilterController::default();
        filter.select("keto").unwrap();
        assert_eq!(filter.resolve_search("all"), SearchOutcome::NoMatch);
        assert_eq!(filter.selected(), "keto");
    }

    #[test]
    fn test_empty_search_resets_to_all() {
        let mut filter = FilterController::default();
        filter.select("paleo").unwrap();
        assert_eq!(filter.resolve_search(""), SearchOutcome::Reset { changed: true });
        assert_eq!(filter.selected(), ALL);
        assert_eq!(filter.active_filter(), None);
    }

    #[test]
    fn test_unmatched_search_keeps_selection() {
        let mut filter = FilterController::default();
        filter.select("dash").unwrap();
        let outcome = filter.resolve_search("zzz");
        assert_eq!(outcome, SearchOutcome::NoMatch);
        assert!(!outcome.changed());
        assert_eq!(filter.selected(), "dash");
        assert_eq!(filter.search_text(), "zzz");
    }

    #[test]
    fn test_select_rejects_unknown_values() {
        let mut filter = FilterController::default();
        assert_eq!(
            filter.select("carnivore"),
            Err(FilterError::UnknownOption("carnivore".to_string()))
        );
        assert_eq!(filter.selected(), ALL);
    }

    #[test]
    fn test_select_reports_change() {
        let mut filter = FilterController::default();
        assert_eq!(filter.select("Keto"), Ok(true));
        assert_eq!(filter.select("keto"), Ok(false));
        assert_eq!(filter.selected(), "keto");
    }

    #[test]
    fn test_custom_options_gain_sentinel() {
        let filter = FilterController::new(vec!["vegan".to_string()]);
        assert_eq!(filter.options(), &["all".to_string(), "vegan".to_string()]);
    }
}
