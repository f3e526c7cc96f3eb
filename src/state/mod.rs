use std::fmt;

use serde::Serialize;
use serde::Serializer;

/// Number of cards revealed per page and per "load more".
pub const PAGE_SIZE: usize = 9;

const ALL: &str = "all";

/// Active category filter. The literal `all` is reserved for [`Filter::All`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Filter {
    #[default]
    All,
    Category(String),
}

impl Filter {
    pub fn parse(value: &str) -> Self {
        if value == ALL {
            Filter::All
        } else {
            Filter::Category(value.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Filter::All => ALL,
            Filter::Category(name) => name.as_str(),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Filter::All)
    }

    pub fn admits(&self, category: &str) -> bool {
        match self {
            Filter::All => true,
            Filter::Category(name) => name == category,
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Filter {
    fn from(value: &str) -> Self {
        Filter::parse(value)
    }
}

impl Serialize for Filter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Filter, search and paging state of one catalog view.
///
/// Transitions never mutate in place; each returns the next state so the
/// owner decides when it takes effect.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ViewState {
    filter: Filter,
    search: String,
    visible_count: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            filter: Filter::All,
            search: String::new(),
            visible_count: PAGE_SIZE,
        }
    }
}

impl ViewState {
    /// Starting state built from whatever the location carried. Paging always
    /// starts at one page.
    pub fn from_partial(partial: PartialViewState) -> Self {
        Self {
            filter: partial.filter.unwrap_or_default(),
            search: partial.search.unwrap_or_default(),
            visible_count: PAGE_SIZE,
        }
    }

    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn visible_count(&self) -> usize {
        self.visible_count
    }

    pub fn on_search_changed(&self, text: impl Into<String>) -> Self {
        Self {
            filter: self.filter.clone(),
            search: text.into(),
            visible_count: PAGE_SIZE,
        }
    }

    pub fn on_filter_changed(&self, filter: impl Into<Filter>) -> Self {
        Self {
            filter: filter.into(),
            search: self.search.clone(),
            visible_count: PAGE_SIZE,
        }
    }

    pub fn on_reveal_more(&self) -> Self {
        let ceiling = usize::MAX - usize::MAX % PAGE_SIZE;
        Self {
            filter: self.filter.clone(),
            search: self.search.clone(),
            visible_count: self.visible_count.saturating_add(PAGE_SIZE).min(ceiling),
        }
    }
}

/// The part of a [`ViewState`] that survives in a URL.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PartialViewState {
    pub filter: Option<Filter>,
    pub search: Option<String>,
}
