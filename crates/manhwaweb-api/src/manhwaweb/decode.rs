//! One decoder per endpoint shape.
//!
//! Decoding is all-or-nothing: a body that does not match the expected
//! shape yields a [`DecodeError`] and no partial result. Unknown fields are
//! ignored.

use serde::de::DeserializeOwned;

use manhwaweb_core::models::{CatalogEntry, Chapter, ChapterTrack, MangaDetails, Page, TrackedEntry};
use manhwaweb_core::pagination::PageResult;

use super::error::{DecodeError, Endpoint};
use super::types::{
    ChaptersPayload, DetailsPayload, LatestPayload, PagesPayload, PopularPayload, SearchPayload,
};

/// Translated and raw chapters as listed by the upstream, not yet reconciled.
#[derive(Debug, Clone, PartialEq)]
pub struct ChapterTracks {
    pub translated: Vec<Chapter>,
    pub raw: Vec<Chapter>,
}

fn parse<T: DeserializeOwned>(endpoint: Endpoint, body: &[u8]) -> Result<T, DecodeError> {
    serde_json::from_slice(body).map_err(|e| DecodeError::from_json(endpoint, e))
}

/// Popular buckets in merge priority order: weekly, then all-time.
pub fn decode_popular(body: &[u8]) -> Result<Vec<Vec<CatalogEntry>>, DecodeError> {
    let payload: PopularPayload = parse(Endpoint::Popular, body)?;
    let top = payload.top;
    Ok([top.weekly, top.total]
        .into_iter()
        .map(|bucket| bucket.into_iter().map(|n| n.into_entry()).collect::<Vec<_>>())
        .collect())
}

/// Latest buckets in merge priority order: Spanish, raw mature, Spanish mature.
pub fn decode_latest(body: &[u8]) -> Result<Vec<Vec<TrackedEntry>>, DecodeError> {
    let payload: LatestPayload = parse(Endpoint::Latest, body)?;
    let data = payload.data;
    Ok([data.esp, data.raw18, data.esp18]
        .into_iter()
        .map(|bucket| bucket.into_iter().map(|n| n.into_tracked()).collect::<Vec<_>>())
        .collect())
}

pub fn decode_search(body: &[u8]) -> Result<PageResult<CatalogEntry>, DecodeError> {
    let payload: SearchPayload = parse(Endpoint::Search, body)?;
    let entries = payload.data.into_iter().map(|n| n.into_entry()).collect();
    Ok(PageResult::from_upstream(entries, payload.has_next_page))
}

pub fn decode_details(body: &[u8]) -> Result<MangaDetails, DecodeError> {
    let payload: DetailsPayload = parse(Endpoint::Details, body)?;
    Ok(payload.into_details())
}

pub fn decode_chapters(body: &[u8]) -> Result<ChapterTracks, DecodeError> {
    let payload: ChaptersPayload = parse(Endpoint::Chapters, body)?;
    Ok(ChapterTracks {
        translated: payload
            .translated
            .into_iter()
            .map(|n| n.into_chapter(ChapterTrack::Translated))
            .collect(),
        raw: payload
            .raw
            .into_iter()
            .map(|n| n.into_chapter(ChapterTrack::Raw))
            .collect(),
    })
}

pub fn decode_pages(body: &[u8]) -> Result<Vec<Page>, DecodeError> {
    let payload: PagesPayload = parse(Endpoint::Pages, body)?;
    Ok(payload.into_pages())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manhwaweb::error::DecodeErrorKind;

    #[test]
    fn popular_keeps_weekly_then_total() {
        let body = br#"{"top": {
            "diario": [{"_id": "ignored", "the_real_name": "I", "_imagen": ""}],
            "semanal": [{"_id": "a", "the_real_name": "A", "_imagen": "", "_visitas": 10}],
            "mensual": [],
            "total": [
                {"_id": "b", "the_real_name": "B", "_imagen": "", "_visitas": 30},
                {"_id": "a", "the_real_name": "A total", "_imagen": "", "_visitas": 99}
            ]
        }}"#;
        let buckets = decode_popular(body).unwrap();
        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets[0][0].slug, "a");
        assert_eq!(buckets[1].len(), 2);
    }

    #[test]
    fn latest_has_three_tracks() {
        let body = br#"{"data": {
            "_esp": [{"id_manhwa": "a", "name_manhwa": "A", "img": "", "create": 5000, "type": "manhwa"}],
            "_raw18": [],
            "_esp18": [{"id_manhwa": "a", "name_manhwa": "A", "img": "", "create": 9000, "type": "manhwa18"}]
        }}"#;
        let buckets = decode_latest(body).unwrap();
        assert_eq!(buckets.len(), 3);
        assert!(buckets[1].is_empty());
        assert_eq!(buckets[2][0].entry.latest_update, Some(9000));
    }

    #[test]
    fn latest_orders_updates_within_the_same_second() {
        let body = br#"{"data": {
            "_esp": [{"id_manhwa": "older", "name_manhwa": "O", "img": "", "create": 1000, "type": "manhwa"}],
            "_raw18": [{"id_manhwa": "newer", "name_manhwa": "N", "img": "", "create": 1999, "type": "manhwa18"}],
            "_esp18": []
        }}"#;
        let merged = manhwaweb_core::merge::merge_latest(decode_latest(body).unwrap());
        let order: Vec<&str> = merged.iter().map(|e| e.slug.as_str()).collect();
        assert_eq!(order, ["newer", "older"]);
    }

    #[test]
    fn search_passes_next_flag_through() {
        let more = decode_search(br#"{"data": [], "next": true}"#).unwrap();
        assert!(more.has_more);
        let done = decode_search(
            br#"{"data": [{"_id": "a", "the_real_name": "A", "_imagen": "c"}], "next": false}"#,
        )
        .unwrap();
        assert!(!done.has_more);
        assert_eq!(done.entries.len(), 1);
    }

    #[test]
    fn chapters_are_tagged_by_track() {
        let body = br#"{
            "chapters": [{"chapter": 1, "create": 1000, "link": "https://manhwaweb.com/leer/a-1"}],
            "chapters_raw": [{"chapter": 2, "create": null, "link": "https://manhwaweb.com/leer/a-2-raw"}]
        }"#;
        let tracks = decode_chapters(body).unwrap();
        assert_eq!(tracks.translated[0].track, ChapterTrack::Translated);
        assert_eq!(tracks.translated[0].uploaded_at, 1);
        assert_eq!(tracks.raw[0].track, ChapterTrack::Raw);
        assert_eq!(tracks.raw[0].url, "/leer/a-2-raw");
    }

    #[test]
    fn pages_drop_blank_images() {
        let body = br#"{"chapter": {"img": ["", "http://a", "", "http://b"]}}"#;
        let pages = decode_pages(body).unwrap();
        assert_eq!(
            pages,
            vec![
                Page { index: 0, image_url: "http://a".into() },
                Page { index: 1, image_url: "http://b".into() },
            ]
        );
    }

    #[test]
    fn malformed_json_is_reported() {
        let err = decode_search(b"{\"data\": [").unwrap_err();
        assert_eq!(err.kind, DecodeErrorKind::MalformedJson);
        assert_eq!(err.endpoint, Endpoint::Search);

        let err = decode_pages(b"<html>blocked</html>").unwrap_err();
        assert_eq!(err.kind, DecodeErrorKind::MalformedJson);
    }

    #[test]
    fn missing_field_is_reported() {
        let err = decode_search(br#"{"data": []}"#).unwrap_err();
        assert_eq!(err.kind, DecodeErrorKind::MissingField);
        assert!(err.message.contains("next"));

        let err = decode_latest(br#"{"data": {"_esp": [], "_raw18": []}}"#).unwrap_err();
        assert_eq!(err.kind, DecodeErrorKind::MissingField);
        assert_eq!(err.endpoint, Endpoint::Latest);
    }

    #[test]
    fn one_bad_node_fails_the_whole_payload() {
        let body = br#"{"data": [
            {"_id": "a", "the_real_name": "A", "_imagen": ""},
            {"_id": "b", "_imagen": ""}
        ], "next": false}"#;
        assert!(decode_search(body).is_err());
    }
}
