//! Search query construction.
//!
//! Filters are encoded in the order they are given. Parameter names come
//! from [`QueryKeys`] so another deployment of the backend can rename them
//! without code changes.

use url::form_urlencoded;
use url::Url;

use manhwaweb_core::config::QueryKeys;
use manhwaweb_core::filters::{FilterSelection, GENRES};

/// Separator between genre ids in the `generes` parameter. The backend
/// expects the literal letter, e.g. `3a18a29`.
const GENRE_SEPARATOR: &str = "a";

/// An ordered list of query parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    pairs: Vec<(String, String)>,
}

impl SearchQuery {
    fn push(&mut self, key: &str, value: impl Into<String>) {
        self.pairs.push((key.to_string(), value.into()));
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Render as an `application/x-www-form-urlencoded` query string.
    pub fn to_query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(&self.pairs)
            .finish()
    }

    /// Append every parameter to `url`'s query.
    pub fn apply_to(&self, url: &mut Url) {
        url.query_pairs_mut().extend_pairs(&self.pairs);
    }
}

/// Build the search query for a 1-based `page`.
///
/// Filters at their `Any` value, empty genre selections, sorts without a
/// property and unknown filter kinds add nothing. The page parameter is
/// always last and zero-based.
pub fn build_search_query(
    keys: &QueryKeys,
    search_text: &str,
    filters: &[FilterSelection],
    page: u32,
) -> SearchQuery {
    let mut query = SearchQuery::default();
    query.push(&keys.search, search_text);

    for filter in filters {
        match filter {
            FilterSelection::Type { value } => {
                if let Some(v) = value.wire_value() {
                    query.push(&keys.content_type, v);
                }
            }
            FilterSelection::Demography { value } => {
                if let Some(v) = value.wire_value() {
                    query.push(&keys.demography, v);
                }
            }
            FilterSelection::Status { value } => {
                if let Some(v) = value.wire_value() {
                    query.push(&keys.status, v);
                }
            }
            FilterSelection::Erotic { value } => {
                if let Some(v) = value.wire_value() {
                    query.push(&keys.erotic, v);
                }
            }
            FilterSelection::Genres { ids } => {
                // Domain order, so toggling order never changes the output.
                let selected: Vec<String> = GENRES
                    .iter()
                    .filter(|g| ids.contains(&g.id))
                    .map(|g| g.id.to_string())
                    .collect();
                if !selected.is_empty() {
                    query.push(&keys.genres, selected.join(GENRE_SEPARATOR));
                }
            }
            FilterSelection::Sort(selection) => {
                if let Some(property) = selection.property {
                    query.push(&keys.order_dir, selection.direction());
                    query.push(&keys.order_item, property.wire_value());
                }
            }
            FilterSelection::Other => {}
        }
    }

    query.push(&keys.page, page.saturating_sub(1).to_string());
    query
}

#[cfg(test)]
mod tests {
    use manhwaweb_core::filters::{
        default_filters, ContentType, Demography, Erotic, PublishingState, SortProperty,
        SortSelection,
    };

    use super::*;

    fn keys() -> QueryKeys {
        QueryKeys::default()
    }

    fn pair_keys(query: &SearchQuery) -> Vec<&str> {
        query.pairs().iter().map(|(k, _)| k.as_str()).collect()
    }

    #[test]
    fn neutral_filters_only_emit_search_and_page() {
        let query = build_search_query(&keys(), "", &default_filters(), 1);
        assert_eq!(
            query.pairs(),
            &[
                ("buscar".to_string(), String::new()),
                ("page".to_string(), "0".to_string()),
            ]
        );
    }

    #[test]
    fn no_filters_at_all() {
        let query = build_search_query(&keys(), "solo leveling", &[], 3);
        assert_eq!(query.to_query_string(), "buscar=solo+leveling&page=2");
    }

    #[test]
    fn filters_follow_input_order() {
        let filters = vec![
            FilterSelection::Erotic { value: Erotic::No },
            FilterSelection::Type {
                value: ContentType::Manhwa,
            },
            FilterSelection::Status {
                value: PublishingState::Finished,
            },
            FilterSelection::Demography {
                value: Demography::Seinen,
            },
        ];
        let query = build_search_query(&keys(), "x", &filters, 1);
        assert_eq!(
            pair_keys(&query),
            ["buscar", "erotico", "tipo", "estado", "demografia", "page"]
        );
        assert_eq!(query.get("tipo"), Some("manhwa"));
        assert_eq!(query.get("estado"), Some("finalizado"));
    }

    #[test]
    fn genres_join_with_letter_a_in_domain_order() {
        // Acción (3) precedes Comedia (18) and Drama (1) in the genre list.
        let a = build_search_query(&keys(), "", &[FilterSelection::genres([1, 18, 3])], 1);
        let b = build_search_query(&keys(), "", &[FilterSelection::genres([3, 1, 18])], 1);
        assert_eq!(a.get("generes"), Some("3a18a1"));
        assert_eq!(a, b);
    }

    #[test]
    fn unknown_genre_ids_are_dropped() {
        let query = build_search_query(&keys(), "", &[FilterSelection::genres([9999])], 1);
        assert_eq!(query.get("generes"), None);
    }

    #[test]
    fn sort_emits_direction_then_item() {
        let filters = [FilterSelection::Sort(SortSelection::by(
            SortProperty::ChapterCount,
            true,
        ))];
        let query = build_search_query(&keys(), "", &filters, 2);
        assert_eq!(pair_keys(&query), ["buscar", "order_dir", "order_item", "page"]);
        assert_eq!(query.get("order_dir"), Some("asc"));
        assert_eq!(query.get("order_item"), Some("num_chapter"));
        assert_eq!(query.get("page"), Some("1"));

        let desc = [FilterSelection::Sort(SortSelection::by(SortProperty::Created, false))];
        let query = build_search_query(&keys(), "", &desc, 1);
        assert_eq!(query.get("order_dir"), Some("desc"));
    }

    #[test]
    fn null_sort_emits_nothing() {
        let query = build_search_query(&keys(), "", &[FilterSelection::Sort(SortSelection::default())], 1);
        assert_eq!(pair_keys(&query), ["buscar", "page"]);
    }

    #[test]
    fn unknown_filters_are_ignored() {
        let filters = [
            FilterSelection::Other,
            FilterSelection::Type {
                value: ContentType::Manga,
            },
        ];
        let query = build_search_query(&keys(), "", &filters, 1);
        assert_eq!(pair_keys(&query), ["buscar", "tipo", "page"]);
    }

    #[test]
    fn custom_keys() {
        let keys = QueryKeys {
            search: "q".into(),
            page: "p".into(),
            ..QueryKeys::default()
        };
        let query = build_search_query(&keys, "abc", &[], 1);
        assert_eq!(query.to_query_string(), "q=abc&p=0");
    }

    #[test]
    fn page_zero_does_not_underflow() {
        let query = build_search_query(&keys(), "", &[], 0);
        assert_eq!(query.get("page"), Some("0"));
    }

    #[test]
    fn apply_to_url() {
        let mut url = Url::parse("https://api.example/manhwa/library").unwrap();
        let query = build_search_query(&keys(), "tower of god", &[FilterSelection::genres([23])], 1);
        query.apply_to(&mut url);
        assert_eq!(
            url.as_str(),
            "https://api.example/manhwa/library?buscar=tower+of+god&generes=23&page=0"
        );
    }
}
