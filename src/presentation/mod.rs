//! Terminal rendering of platform listings.
//!
//! Helpers take the raw response body, decode it, optionally sort and
//! filter, and write an aligned table or header-less CSV to any
//! [`std::io::Write`]. The `output_*` variants write to stdout.

use std::io;

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::error::ClientError;

pub mod elements;
pub mod formulas;
pub mod instances;
pub mod metadata;
pub mod resources;
pub mod table;

pub use table::Table;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    Decode(#[from] ClientError),
    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
    #[error("failed to write csv: {0}")]
    Csv(#[from] csv::Error),
}

/// Column a listing is ordered by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Keep the order the platform returned.
    #[default]
    Unsorted,
    Id,
    Name,
    Hub,
    Api,
    Authn,
    Traffic,
    Customers,
    Instances,
}

impl SortKey {
    /// Empty or unrecognised values keep the response order.
    pub fn from_param(param: &str) -> Self {
        match param.trim().to_ascii_lowercase().as_str() {
            "id" => Self::Id,
            "name" => Self::Name,
            "hub" => Self::Hub,
            "api" => Self::Api,
            "authn" => Self::Authn,
            "traffic" => Self::Traffic,
            "customers" => Self::Customers,
            "instances" => Self::Instances,
            _ => Self::Unsorted,
        }
    }
}

/// Which elements of a listing to keep.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ElementFilter {
    #[default]
    All,
    /// Private (customer-built) elements only.
    Custom,
    Key(String),
}

impl ElementFilter {
    pub fn from_param(param: &str) -> Self {
        match param.trim() {
            "" => Self::All,
            "custom" | "private" => Self::Custom,
            key => Self::Key(key.to_string()),
        }
    }
}

/// Sort values a row type exposes. `None` means the key does not apply and
/// the row keeps its place.
pub(crate) trait Sortable {
    fn id(&self) -> i64;

    fn text(&self, _key: SortKey) -> Option<&str> {
        None
    }

    fn count(&self, _key: SortKey) -> Option<i64> {
        None
    }
}

/// Reorder by `key`. Ids and text keys ascend (text compared
/// case-insensitively), usage counts descend. The sort is stable, so equal
/// keys keep their response order.
pub(crate) fn sort_rows<T: Sortable>(rows: &mut [T], key: SortKey) {
    match key {
        SortKey::Unsorted => {}
        SortKey::Id => rows.sort_by_key(Sortable::id),
        SortKey::Name | SortKey::Hub | SortKey::Api | SortKey::Authn => {
            rows.sort_by_cached_key(|row| row.text(key).map(str::to_lowercase));
        }
        SortKey::Traffic | SortKey::Customers | SortKey::Instances => {
            rows.sort_by(|a, b| b.count(key).cmp(&a.count(key)));
        }
    }
}

pub(crate) fn decode_list<T: DeserializeOwned>(body: &[u8]) -> Result<Vec<T>, ClientError> {
    serde_json::from_slice(body).map_err(|source| ClientError::Decode {
        body: body.to_vec(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Row {
        id: i64,
        name: &'static str,
        traffic: i64,
    }

    impl Sortable for Row {
        fn id(&self) -> i64 {
            self.id
        }

        fn text(&self, key: SortKey) -> Option<&str> {
            (key == SortKey::Name).then_some(self.name)
        }

        fn count(&self, key: SortKey) -> Option<i64> {
            (key == SortKey::Traffic).then_some(self.traffic)
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { id: 3, name: "beta", traffic: 10 },
            Row { id: 1, name: "Alpha", traffic: 10 },
            Row { id: 2, name: "BETA", traffic: 50 },
        ]
    }

    fn ids(rows: &[Row]) -> Vec<i64> {
        rows.iter().map(|r| r.id).collect()
    }

    #[test]
    fn no_key_keeps_response_order() {
        let mut rows = rows();
        sort_rows(&mut rows, SortKey::from_param(""));
        assert_eq!(ids(&rows), vec![3, 1, 2]);
    }

    #[test]
    fn explicit_id_key_sorts_ascending() {
        let mut rows = rows();
        sort_rows(&mut rows, SortKey::from_param("id"));
        assert_eq!(ids(&rows), vec![1, 2, 3]);
    }

    #[test]
    fn name_sort_is_case_insensitive_and_stable() {
        let mut rows = rows();
        sort_rows(&mut rows, SortKey::Name);
        assert_eq!(ids(&rows), vec![1, 3, 2]);
    }

    #[test]
    fn counts_sort_descending_with_ties_in_response_order() {
        let mut rows = rows();
        sort_rows(&mut rows, SortKey::Traffic);
        assert_eq!(ids(&rows), vec![2, 3, 1]);
    }

    #[test]
    fn inapplicable_key_keeps_response_order() {
        let mut rows = rows();
        sort_rows(&mut rows, SortKey::Hub);
        assert_eq!(ids(&rows), vec![3, 1, 2]);
    }

    #[test]
    fn params_parse_leniently() {
        assert_eq!(SortKey::from_param(""), SortKey::Unsorted);
        assert_eq!(SortKey::from_param("ID"), SortKey::Id);
        assert_eq!(SortKey::from_param("Customers"), SortKey::Customers);
        assert_eq!(SortKey::from_param("colour"), SortKey::Unsorted);
        assert_eq!(ElementFilter::from_param("private"), ElementFilter::Custom);
        assert_eq!(
            ElementFilter::from_param("sfdc"),
            ElementFilter::Key("sfdc".to_string())
        );
    }
}
