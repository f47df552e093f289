//! QueryEngine - search / filter / newest-first / paginate
//!
//! Every listing endpoint runs its rows through the same pipeline:
//!
//! ```text
//! rows ─▶ search ─▶ filter_eq ... ─▶ newest_first ─▶ paginate ─▶ Page<T>
//! ```
//!
//! Rows arrive in table iteration order (ascending id). The newest-first sort
//! is stable, so rows with equal `createdAt` keep that order and pagination
//! stays deterministic for a fixed dataset.

use shared::query::{Page, PageParams};

/// A filter/sort/paginate pipeline over one listing
pub struct Query<T> {
    rows: Vec<T>,
}

impl<T> Query<T> {
    pub fn new(rows: impl IntoIterator<Item = T>) -> Self {
        Self {
            rows: rows.into_iter().collect(),
        }
    }

    /// Case-insensitive substring match against any of `fields`
    ///
    /// An absent or blank term keeps every row.
    pub fn search<F>(mut self, term: Option<&str>, fields: F) -> Self
    where
        F: Fn(&T) -> Vec<&str>,
    {
        let needle = match term.map(str::trim) {
            Some(t) if !t.is_empty() => t.to_lowercase(),
            _ => return self,
        };
        self.rows.retain(|row| {
            fields(row)
                .into_iter()
                .any(|value| value.to_lowercase().contains(&needle))
        });
        self
    }

    /// Exact equality filter; `None` keeps every row
    pub fn filter_eq<V, F>(mut self, wanted: Option<&V>, field: F) -> Self
    where
        V: PartialEq + ?Sized,
        F: Fn(&T) -> &V,
    {
        if let Some(wanted) = wanted {
            self.rows.retain(|row| field(row) == wanted);
        }
        self
    }

    /// Arbitrary predicate, applied only when `enabled`
    pub fn filter<F>(mut self, enabled: bool, predicate: F) -> Self
    where
        F: Fn(&T) -> bool,
    {
        if enabled {
            self.rows.retain(|row| predicate(row));
        }
        self
    }

    /// Stable sort by `createdAt` descending
    pub fn newest_first<F>(mut self, created_at: F) -> Self
    where
        F: Fn(&T) -> i64,
    {
        self.rows.sort_by_key(|row| std::cmp::Reverse(created_at(row)));
        self
    }

    /// Post-filter row count
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Slice out one page
    ///
    /// `total` is the post-filter count; a page past the end is empty.
    pub fn paginate(self, params: PageParams, default_limit: u32) -> Page<T> {
        let (page, limit) = params.resolve(default_limit);
        let total = self.rows.len() as u64;
        let skip = (page as usize - 1).saturating_mul(limit as usize);
        let list = self
            .rows
            .into_iter()
            .skip(skip)
            .take(limit as usize)
            .collect();
        Page::new(list, total, page, limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: u32,
        name: &'static str,
        city: &'static str,
        created_at: i64,
    }

    fn rows() -> Vec<Row> {
        let names = [
            ("IKEA", "Madrid"),
            ("Lidl", "Valencia"),
            ("Mercadona", "Valencia"),
            ("Decathlon", "Madrid"),
            ("Zara Home", "Madrid"),
            ("Carrefour", "Sevilla"),
            ("Primark", "Madrid"),
            ("MediaMarkt", "Valencia"),
            ("Leroy Merlin", "Madrid"),
            ("Aldi", "Sevilla"),
            ("Dia", "Madrid"),
            ("El Corte Ingles", "Madrid"),
        ];
        names
            .iter()
            .enumerate()
            .map(|(i, (name, city))| Row {
                id: i as u32,
                name,
                city,
                // pairs of rows share a timestamp to exercise the tie order
                created_at: (i as i64 / 2) * 1_000,
            })
            .collect()
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let page = Query::new(rows())
            .search(Some("  mer "), |r| vec![r.name])
            .paginate(PageParams::default(), 10);
        let names: Vec<_> = page.list.iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["Mercadona", "Leroy Merlin"]);
    }

    #[test]
    fn test_blank_search_keeps_everything() {
        let q = Query::new(rows()).search(Some("   "), |r| vec![r.name]);
        assert_eq!(q.len(), 12);
    }

    #[test]
    fn test_filter_eq_is_exact() {
        let q = Query::new(rows()).filter_eq(Some("Madrid"), |r| r.city);
        assert_eq!(q.len(), 7);
        let q = Query::new(rows()).filter_eq(Some("madrid"), |r| r.city);
        assert!(q.is_empty());
        let q = Query::new(rows()).filter_eq(None::<&str>, |r| r.city);
        assert_eq!(q.len(), 12);
    }

    #[test]
    fn test_newest_first_ties_keep_input_order() {
        let page = Query::new(rows())
            .newest_first(|r| r.created_at)
            .paginate(PageParams::new(1, 4), 10);
        let ids: Vec<_> = page.list.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![10, 11, 8, 9]);
    }

    #[test]
    fn test_pages_are_disjoint_and_contiguous() {
        let full: Vec<Row> = Query::new(rows())
            .filter_eq(Some("Madrid"), |r| r.city)
            .newest_first(|r| r.created_at)
            .paginate(PageParams::new(1, 100), 10)
            .list;

        let page = |n| {
            Query::new(rows())
                .filter_eq(Some("Madrid"), |r| r.city)
                .newest_first(|r| r.created_at)
                .paginate(PageParams::new(n, 5), 10)
        };
        let first = page(1);
        let second = page(2);

        assert_eq!(first.total, 7);
        assert_eq!(first.total_pages, 2);
        assert_eq!(second.total, first.total);
        assert_eq!(first.list.len(), 5);
        assert_eq!(second.list.len(), 2);

        let joined: Vec<Row> = first.list.into_iter().chain(second.list).collect();
        assert_eq!(joined, full);
    }

    #[test]
    fn test_out_of_range_page_is_empty() {
        let page = Query::new(rows()).paginate(PageParams::new(9, 5), 10);
        assert!(page.list.is_empty());
        assert_eq!(page.total, 12);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.page, 9);
    }

    #[test]
    fn test_limit_defaults_and_clamps() {
        let page = Query::new(rows()).paginate(PageParams::default(), 10);
        assert_eq!(page.limit, 10);
        assert_eq!(page.list.len(), 10);

        let page = Query::new(rows()).paginate(PageParams::new(1, 0), 10);
        assert_eq!(page.limit, 1);
        assert_eq!(page.total_pages, 12);
    }
}
