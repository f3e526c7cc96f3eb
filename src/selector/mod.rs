use serde::Serialize;

use crate::catalog::{Catalog, CourseRecord};
use crate::state::{Filter, ViewState};

pub fn matches(record: &CourseRecord, state: &ViewState) -> bool {
    if !state.filter().admits(&record.category) {
        return false;
    }
    let query = state.search();
    query.is_empty() || record.title.to_lowercase().contains(&query.to_lowercase())
}

/// Matching records in catalog order.
pub fn filtered_list<'a>(catalog: &'a Catalog, state: &ViewState) -> Vec<&'a CourseRecord> {
    catalog.iter().filter(|r| matches(r, state)).collect()
}

pub fn visible_slice<'a>(catalog: &'a Catalog, state: &ViewState) -> Vec<&'a CourseRecord> {
    catalog
        .iter()
        .filter(|r| matches(r, state))
        .take(state.visible_count())
        .collect()
}

pub fn has_more(catalog: &Catalog, state: &ViewState) -> bool {
    catalog.iter().filter(|r| matches(r, state)).count() > state.visible_count()
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CountEntry {
    pub filter: Filter,
    pub count: usize,
}

/// Per-category inventory: `all` first, then categories by first appearance.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CategoryCounts {
    entries: Vec<CountEntry>,
}

impl CategoryCounts {
    pub fn entries(&self) -> &[CountEntry] {
        &self.entries
    }

    pub fn get(&self, filter: &Filter) -> usize {
        self.entries
            .iter()
            .find(|e| &e.filter == filter)
            .map(|e| e.count)
            .unwrap_or(0)
    }
}

/// Counts over the whole catalog; the active filter and search never affect them.
pub fn category_counts(catalog: &Catalog) -> CategoryCounts {
    let mut entries = vec![CountEntry {
        filter: Filter::All,
        count: catalog.len(),
    }];
    for category in catalog.categories() {
        let count = catalog.iter().filter(|r| r.category == category).count();
        entries.push(CountEntry {
            filter: Filter::Category(category.to_string()),
            count,
        });
    }
    CategoryCounts { entries }
}

/// Everything a presenter needs for one render.
#[derive(Clone, Debug)]
pub struct Selection<'a> {
    pub visible: Vec<&'a CourseRecord>,
    pub total: usize,
    pub has_more: bool,
    pub counts: CategoryCounts,
    pub filter: &'a Filter,
    pub search: &'a str,
    pub visible_count: usize,
}

impl Selection<'_> {
    pub fn shown(&self) -> usize {
        self.visible.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

pub fn select<'a>(catalog: &'a Catalog, state: &'a ViewState) -> Selection<'a> {
    let filtered = filtered_list(catalog, state);
    let total = filtered.len();
    let visible: Vec<&CourseRecord> = filtered.into_iter().take(state.visible_count()).collect();
    Selection {
        visible,
        total,
        has_more: total > state.visible_count(),
        counts: category_counts(catalog),
        filter: state.filter(),
        search: state.search(),
        visible_count: state.visible_count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::PAGE_SIZE;

    #[test]
    fn search_ignores_case() {
        let catalog = Catalog::builtin();
        let upper = ViewState::default().on_search_changed("GOOGLE");
        let lower = ViewState::default().on_search_changed("google");
        for r in catalog.iter() {
            assert_eq!(matches(r, &upper), matches(r, &lower));
        }
        assert_eq!(filtered_list(&catalog, &upper).len(), 1);
    }

    #[test]
    fn empty_query_keeps_full_catalog_order() {
        let catalog = Catalog::builtin();
        let all: Vec<u32> = filtered_list(&catalog, &ViewState::default())
            .iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(all, (1..=12).collect::<Vec<u32>>());
    }

    #[test]
    fn filtered_list_ignores_visible_count() {
        let catalog = Catalog::builtin();
        let base = ViewState::default().on_search_changed("a");
        let grown = base.on_reveal_more().on_reveal_more();
        assert_eq!(filtered_list(&catalog, &base), filtered_list(&catalog, &grown));
    }

    #[test]
    fn filter_and_search_combine() {
        let catalog = Catalog::builtin();
        let state = ViewState::default()
            .on_filter_changed("Management")
            .on_search_changed("management");
        let ids: Vec<u32> = filtered_list(&catalog, &state).iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 6, 11]);
    }

    #[test]
    fn visible_slice_clamps_to_matches() {
        let catalog = Catalog::builtin();
        let state = ViewState::default();
        assert_eq!(visible_slice(&catalog, &state).len(), PAGE_SIZE);
        assert!(has_more(&catalog, &state));

        let more = state.on_reveal_more();
        assert_eq!(visible_slice(&catalog, &more).len(), 12);
        assert!(!has_more(&catalog, &more));

        let overshoot = more.on_reveal_more();
        assert_eq!(visible_slice(&catalog, &overshoot).len(), 12);
        assert!(!has_more(&catalog, &overshoot));
    }

    #[test]
    fn counts_cover_whole_catalog() {
        let catalog = Catalog::builtin();
        let counts = category_counts(&catalog);
        assert_eq!(counts.get(&Filter::All), 12);
        assert_eq!(counts.get(&Filter::parse("Marketing")), 3);
        assert_eq!(counts.get(&Filter::parse("Management")), 3);
        assert_eq!(counts.get(&Filter::parse("HR & Recruiting")), 2);
        assert_eq!(counts.get(&Filter::parse("Design")), 2);
        assert_eq!(counts.get(&Filter::parse("Development")), 2);
        assert_eq!(counts.get(&Filter::parse("Finance")), 0);
        assert_eq!(counts.entries()[0].filter, Filter::All);
    }

    #[test]
    fn select_agrees_with_individual_queries() {
        let catalog = Catalog::builtin();
        let state = ViewState::default().on_search_changed("de");
        let selection = select(&catalog, &state);
        assert_eq!(selection.visible, visible_slice(&catalog, &state));
        assert_eq!(selection.total, filtered_list(&catalog, &state).len());
        assert_eq!(selection.has_more, has_more(&catalog, &state));
        assert_eq!(selection.counts, category_counts(&catalog));
    }

    #[test]
    fn unknown_category_selects_nothing() {
        let catalog = Catalog::builtin();
        let state = ViewState::default().on_filter_changed("Cooking");
        let selection = select(&catalog, &state);
        assert!(selection.is_empty());
        assert!(!selection.has_more);
        assert_eq!(selection.shown(), 0);
    }
}
