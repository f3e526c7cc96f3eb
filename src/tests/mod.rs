use crate::catalog::Catalog;
use crate::selector::{category_counts, filtered_list, has_more, matches, select, visible_slice};
use crate::state::{Filter, ViewState, PAGE_SIZE};
use crate::urlcodec;

fn ids(records: &[&crate::catalog::CourseRecord]) -> Vec<u32> {
    records.iter().map(|r| r.id).collect()
}

#[test]
fn marketing_filter_fits_on_one_page() {
    let catalog = Catalog::builtin();
    let state = ViewState::default().on_filter_changed("Marketing");
    assert_eq!(filtered_list(&catalog, &state).len(), 3);
    assert_eq!(visible_slice(&catalog, &state).len(), 3);
    assert!(!has_more(&catalog, &state));
    assert_eq!(ids(&visible_slice(&catalog, &state)), vec![1, 4, 12]);
}

#[test]
fn management_search_matches_titles_case_insensitively() {
    let catalog = Catalog::builtin();
    let state = ViewState::default().on_search_changed("management");
    // "HR Management and Analytics" and "Brand Management & PR Communications"
    // match too, alongside the three Management-category titles.
    let found = filtered_list(&catalog, &state);
    assert!(found
        .iter()
        .all(|r| r.title.to_lowercase().contains("management")));
    assert_eq!(ids(&found), vec![2, 3, 4, 6, 11]);

    let in_category = state.on_filter_changed("Management");
    let titles: Vec<&str> = filtered_list(&catalog, &in_category)
        .iter()
        .map(|r| r.title.as_str())
        .collect();
    assert_eq!(
        titles,
        vec![
            "Product Management Fundamentals",
            "Business Development Management",
            "Strategic Management Essentials"
        ]
    );
}

#[test]
fn default_view_pages_through_catalog() {
    let catalog = Catalog::builtin();
    let state = ViewState::default();
    assert_eq!(visible_slice(&catalog, &state).len(), PAGE_SIZE);
    assert!(has_more(&catalog, &state));

    let more = state.on_reveal_more();
    assert_eq!(visible_slice(&catalog, &more).len(), 12);
    assert!(!has_more(&catalog, &more));
}

#[test]
fn has_more_is_false_once_everything_is_visible() {
    let catalog = Catalog::builtin();
    let filters = ["all", "Marketing", "Design", "Nope"];
    let searches = ["", "a", "de", "GOOGLE", "zzz"];
    for f in filters {
        for q in searches {
            let mut state = ViewState::default().on_filter_changed(f).on_search_changed(q);
            for _ in 0..3 {
                let visible = visible_slice(&catalog, &state).len();
                let filtered = filtered_list(&catalog, &state).len();
                if visible == filtered {
                    assert!(!has_more(&catalog, &state), "{f}/{q}");
                } else {
                    assert!(has_more(&catalog, &state), "{f}/{q}");
                }
                state = state.on_reveal_more();
            }
        }
    }
}

#[test]
fn upper_and_lower_case_queries_match_alike() {
    let catalog = Catalog::builtin();
    for (upper, lower) in [("GOOGLE", "google"), ("DESIGN", "design"), ("HR", "hr")] {
        let a = ViewState::default().on_search_changed(upper);
        let b = ViewState::default().on_search_changed(lower);
        for r in catalog.iter() {
            assert_eq!(matches(r, &a), matches(r, &b));
        }
    }
}

#[test]
fn counts_do_not_follow_the_view() {
    let catalog = Catalog::builtin();
    let baseline = category_counts(&catalog);
    for state in [
        ViewState::default(),
        ViewState::default().on_filter_changed("Design"),
        ViewState::default().on_search_changed("strategy"),
        ViewState::default().on_filter_changed("Nope").on_search_changed("x"),
    ] {
        assert_eq!(select(&catalog, &state).counts, baseline);
    }
}

#[test]
fn url_round_trip_and_omission() {
    let state = ViewState::default()
        .on_filter_changed("Marketing")
        .on_search_changed("ads");
    let restored = ViewState::from_partial(urlcodec::decode(&urlcodec::encode(&state)));
    assert_eq!(restored.filter(), &Filter::parse("Marketing"));
    assert_eq!(restored.search(), "ads");
    assert_eq!(urlcodec::encode(&ViewState::default()), "");
}

#[test]
fn every_category_survives_the_url() {
    let catalog = Catalog::builtin();
    for category in catalog.categories() {
        let state = ViewState::default()
            .on_filter_changed(category)
            .on_search_changed("a & b = c");
        let restored = ViewState::from_partial(urlcodec::decode(&urlcodec::location("/x", &state)));
        assert_eq!(restored, state);
    }
}

#[test]
fn unknown_url_category_degrades_to_empty_view() {
    let catalog = Catalog::builtin();
    let state = ViewState::from_partial(urlcodec::decode("?category=Astrology"));
    let selection = select(&catalog, &state);
    assert!(selection.is_empty());
    assert!(!selection.has_more);
    assert_eq!(selection.counts.get(&Filter::All), 12);
}
