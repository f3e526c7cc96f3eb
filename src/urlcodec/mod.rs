//! Mapping between view state and the location's query string.
//!
//! Only `category` and `search` are ever written or read. Paging is not part
//! of the address.

use url::form_urlencoded;

use crate::state::{Filter, PartialViewState, ViewState};

pub const CATEGORY_KEY: &str = "category";
pub const SEARCH_KEY: &str = "search";

/// Form-encoded query without the leading `?`. Empty for the default state.
pub fn encode(state: &ViewState) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    if !state.filter().is_all() {
        query.append_pair(CATEGORY_KEY, state.filter().as_str());
    }
    if !state.search().is_empty() {
        query.append_pair(SEARCH_KEY, state.search());
    }
    query.finish()
}

/// Reads `category` and `search` out of a query string, a `?query`, or a full
/// location. The first occurrence of a key wins and empty values count as
/// absent.
pub fn decode(input: &str) -> PartialViewState {
    let query = query_part(input);
    let mut partial = PartialViewState::default();
    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        if value.is_empty() {
            continue;
        }
        match key.as_ref() {
            CATEGORY_KEY if partial.filter.is_none() => {
                partial.filter = Some(Filter::parse(&value));
            }
            SEARCH_KEY if partial.search.is_none() => {
                partial.search = Some(value.into_owned());
            }
            _ => {}
        }
    }
    partial
}

/// `base_path` with the encoded query appended when there is one.
pub fn location(base_path: &str, state: &ViewState) -> String {
    let query = encode(state);
    if query.is_empty() {
        base_path.to_string()
    } else {
        format!("{base_path}?{query}")
    }
}

fn query_part(input: &str) -> &str {
    let without_fragment = input.split_once('#').map(|(head, _)| head).unwrap_or(input);
    match without_fragment.split_once('?') {
        Some((_, query)) => query,
        None if without_fragment.contains('=') => without_fragment,
        None => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(filter: &str, search: &str) -> ViewState {
        ViewState::default()
            .on_filter_changed(filter)
            .on_search_changed(search)
    }

    #[test]
    fn default_state_encodes_to_nothing() {
        assert_eq!(encode(&ViewState::default()), "");
        assert_eq!(location("/courses", &ViewState::default()), "/courses");
    }

    #[test]
    fn encodes_category_before_search() {
        assert_eq!(encode(&state("Marketing", "ads")), "category=Marketing&search=ads");
        assert_eq!(encode(&state("all", "ads")), "search=ads");
        assert_eq!(encode(&state("Design", "")), "category=Design");
    }

    #[test]
    fn round_trips_reserved_characters() {
        let original = state("HR & Recruiting", "a+b = c/d?");
        let encoded = encode(&original);
        assert_eq!(
            encoded,
            "category=HR+%26+Recruiting&search=a%2Bb+%3D+c%2Fd%3F"
        );
        let decoded = ViewState::from_partial(decode(&encoded));
        assert_eq!(decoded, original);
    }

    #[test]
    fn round_trips_unicode_search() {
        let original = state("Design", "дизайн интерфейсов");
        let decoded = ViewState::from_partial(decode(&location("/", &original)));
        assert_eq!(decoded.search(), "дизайн интерфейсов");
        assert_eq!(decoded.filter().as_str(), "Design");
    }

    #[test]
    fn decode_accepts_full_locations() {
        let partial = decode("https://example.com/courses/?search=ux&category=Design#top");
        assert_eq!(partial.filter, Some(Filter::parse("Design")));
        assert_eq!(partial.search.as_deref(), Some("ux"));

        let partial = decode("?category=Marketing");
        assert_eq!(partial.filter, Some(Filter::parse("Marketing")));
        assert_eq!(partial.search, None);
    }

    #[test]
    fn decode_ignores_empty_unknown_and_repeated_keys() {
        let partial = decode("category=&search=first&search=second&page=3");
        assert_eq!(partial.filter, None);
        assert_eq!(partial.search.as_deref(), Some("first"));
        assert_eq!(decode("/courses"), PartialViewState::default());
        assert_eq!(decode(""), PartialViewState::default());
    }

    #[test]
    fn decode_keeps_unrecognized_categories() {
        let partial = decode("category=Underwater+Basket+Weaving");
        assert_eq!(
            partial.filter,
            Some(Filter::Category("Underwater Basket Weaving".to_string()))
        );
    }

    #[test]
    fn paging_never_comes_from_the_url() {
        let grown = state("Marketing", "").on_reveal_more();
        let restored = ViewState::from_partial(decode(&encode(&grown)));
        assert_eq!(restored.visible_count(), crate::state::PAGE_SIZE);
    }
}
