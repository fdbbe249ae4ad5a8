//! Method selector model
//!
//! A fixed, ordered list of HTTP method names and the index of the selected
//! one. Movement stops at both ends; there is no wraparound.

use anyhow::{bail, Result};

use crate::config::DEFAULT_METHODS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodSelector {
    methods: Vec<String>,
    selected: usize,
}

impl MethodSelector {
    /// Selector over GET, POST, PUT, DELETE
    pub fn with_default_methods() -> Self {
        Self {
            methods: DEFAULT_METHODS.iter().map(|m| m.to_string()).collect(),
            selected: 0,
        }
    }

    /// Move the selection one step up; no-op at the top
    pub fn move_up(&mut self) -> bool {
        if self.selected > 0 {
            self.selected -= 1;
            true
        } else {
            false
        }
    }

    /// Move the selection one step down; no-op at the bottom
    pub fn move_down(&mut self) -> bool {
        if self.selected + 1 < self.methods.len() {
            self.selected += 1;
            true
        } else {
            false
        }
    }

    /// Select a method by name, ignoring case
    pub fn select(&mut self, name: &str) -> Result<()> {
        match self
            .methods
            .iter()
            .position(|m| m.eq_ignore_ascii_case(name))
        {
            Some(index) => {
                self.selected = index;
                Ok(())
            }
            None => bail!(
                "Unknown method '{}'. Expected one of: {}",
                name,
                self.methods.join(", ")
            ),
        }
    }

    pub fn current(&self) -> &str {
        &self.methods[self.selected]
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn methods(&self) -> &[String] {
        &self.methods
    }

    pub fn len(&self) -> usize {
        self.methods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }
}

impl Default for MethodSelector {
    fn default() -> Self {
        Self::with_default_methods()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selector_should_start_at_get() {
        let selector = MethodSelector::default();
        assert_eq!(selector.selected_index(), 0);
        assert_eq!(selector.current(), "GET");
        assert_eq!(selector.len(), 4);
    }

    #[test]
    fn move_down_should_advance_until_last() {
        let mut selector = MethodSelector::default();
        assert!(selector.move_down());
        assert_eq!(selector.current(), "POST");
        assert!(selector.move_down());
        assert!(selector.move_down());
        assert_eq!(selector.current(), "DELETE");
        assert!(!selector.move_down());
        assert_eq!(selector.current(), "DELETE");
    }

    #[test]
    fn move_up_at_top_should_be_noop() {
        let mut selector = MethodSelector::default();
        assert!(!selector.move_up());
        assert_eq!(selector.selected_index(), 0);
    }

    #[test]
    fn index_should_stay_in_range_for_any_sequence() {
        let mut selector = MethodSelector::default();
        let moves = [true, true, true, true, true, false, false, true, false, false, false, false];
        for down in moves {
            if down {
                selector.move_down();
            } else {
                selector.move_up();
            }
            assert!(selector.selected_index() < selector.len());
        }
        assert_eq!(selector.selected_index(), 0);
    }

    #[test]
    fn select_should_match_case_insensitively() {
        let mut selector = MethodSelector::default();
        selector.select("put").unwrap();
        assert_eq!(selector.current(), "PUT");
    }

    #[test]
    fn select_unknown_method_should_fail() {
        let mut selector = MethodSelector::default();
        let err = selector.select("PATCH").unwrap_err();
        assert!(err.to_string().contains("Unknown method 'PATCH'"));
        assert_eq!(selector.current(), "GET");
    }
}
