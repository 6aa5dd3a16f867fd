//! Reference targets for the catalog and detail views

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

use crate::escape::escape_html;

/// Characters `encodeURIComponent` leaves alone
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Where the catalog and detail views live
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Links {
    /// Catalog (summary) view
    pub index_page: String,
    /// Detail view; the tool id is passed as the `id` query parameter
    pub detail_page: String,
}

impl Default for Links {
    fn default() -> Self {
        Self {
            index_page: "./index.html".to_string(),
            detail_page: "./tool.html".to_string(),
        }
    }
}

impl Links {
    pub fn new(index_page: impl Into<String>, detail_page: impl Into<String>) -> Self {
        Self {
            index_page: index_page.into(),
            detail_page: detail_page.into(),
        }
    }

    /// Detail reference for `id`, percent-encoded but not yet markup-escaped
    pub fn detail_href(&self, id: &str) -> String {
        format!("{}?id={}", self.detail_page, encode_component(id))
    }

    /// Detail reference ready to place in an attribute value
    pub fn detail_href_attr(&self, id: &str) -> String {
        escape_html(self.detail_href(id).as_str())
    }

    /// Catalog reference ready to place in an attribute value
    pub fn index_href_attr(&self) -> String {
        escape_html(self.index_page.as_str())
    }
}

/// Percent-encode a value for use inside a query string
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}
