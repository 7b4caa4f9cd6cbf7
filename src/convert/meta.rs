// Copyright (c) 2025 - Cowboy AI, Inc.
//! Response meta conversion

use crate::domain::{Meta, Pagination};
use crate::schema;

impl From<schema::MetaPagination> for Pagination {
    fn from(s: schema::MetaPagination) -> Self {
        Pagination {
            page: s.page,
            per_page: s.per_page,
            previous_page: s.previous_page.unwrap_or_default(),
            next_page: s.next_page.unwrap_or_default(),
            last_page: s.last_page.unwrap_or_default(),
            total_entries: s.total_entries.unwrap_or_default(),
        }
    }
}

impl From<schema::Meta> for Meta {
    fn from(s: schema::Meta) -> Self {
        Meta {
            pagination: s.pagination.map(Pagination::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn copies_six_counters_verbatim() {
        let wire: schema::MetaPagination = serde_json::from_str(
            r#"{
                "page": 2,
                "per_page": 25,
                "previous_page": 1,
                "next_page": 3,
                "last_page": 13,
                "total_entries": 322
            }"#,
        )
        .unwrap();

        let p = Pagination::from(wire);
        assert_eq!(p.page, 2);
        assert_eq!(p.per_page, 25);
        assert_eq!(p.previous_page, 1);
        assert_eq!(p.next_page, 3);
        assert_eq!(p.last_page, 13);
        assert_eq!(p.total_entries, 322);
    }

    #[test]
    fn boundary_page_nulls_become_zero() {
        let wire: schema::MetaPagination = serde_json::from_str(
            r#"{"page": 1, "per_page": 25, "previous_page": null, "next_page": null}"#,
        )
        .unwrap();

        let p = Pagination::from(wire);
        assert_eq!(p.previous_page, 0);
        assert_eq!(p.next_page, 0);
    }
}
