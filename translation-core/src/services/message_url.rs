//! Query string and message URL form of an encoded translation.

use tracing::debug;
use url::form_urlencoded;
use url::Url;

use crate::model::query::QueryItem;
use crate::model::translation::Translation;
use crate::services::query_codec;

/// Form-urlencodes the items in order. A valueless item is written as its
/// bare name.
pub fn to_query_string(items: &[QueryItem]) -> String {
    items
        .iter()
        .map(|item| {
            let name: String = form_urlencoded::byte_serialize(item.name.as_bytes()).collect();
            match &item.value {
                Some(value) => {
                    let value: String =
                        form_urlencoded::byte_serialize(value.as_bytes()).collect();
                    format!("{name}={value}")
                }
                None => name,
            }
        })
        .collect::<Vec<_>>()
        .join("&")
}

pub fn parse_query_string(query: &str) -> Vec<QueryItem> {
    let query = query.strip_prefix('?').unwrap_or(query);

    query
        .split('&')
        .filter(|segment| !segment.is_empty())
        .filter_map(|segment| {
            let (name, value) = form_urlencoded::parse(segment.as_bytes()).next()?;
            if segment.contains('=') {
                Some(QueryItem::new(name, value))
            } else {
                Some(QueryItem::valueless(name))
            }
        })
        .collect()
}

/// `base` with its query replaced by the encoded translation.
pub fn message_url(base: &Url, translation: &Translation) -> Url {
    let items = query_codec::encode(translation);
    let mut url = base.clone();

    if items.is_empty() {
        url.set_query(None);
    } else {
        url.set_query(Some(&to_query_string(&items)));
    }

    debug!(%url, "built message url");
    url
}

pub fn translation_from_url(url: &Url) -> Translation {
    let items = url.query().map(parse_query_string).unwrap_or_default();
    query_codec::decode(&items)
}
