use crate::columns::{render_cells, COLUMN_COUNT};
use crate::pagination::{self, PageItem, Pagination, PAGE_SIZE};
use crate::{SubmissionId, SubmissionRecord};

/// A rendered body row.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub key: SubmissionId,
    /// Position within the current page, starting at 1 on every page.
    pub task_id: usize,
    pub cells: [String; COLUMN_COUNT],
}

/// Pagination control state for a non-empty source.
#[derive(Debug, Clone, PartialEq)]
pub struct PagerView {
    pub current: usize,
    pub page_size: usize,
    pub total: usize,
    pub page_count: usize,
    pub items: Vec<PageItem>,
}

impl PagerView {
    pub fn has_prev(&self) -> bool {
        self.current > 1
    }

    pub fn has_next(&self) -> bool {
        self.current < self.page_count
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableView {
    pub rows: Vec<TableRow>,
    pub pager: Option<PagerView>,
}

/// Records of `page` paired with their Task ID.
pub fn page_entries(
    source: Option<&[SubmissionRecord]>,
    page: usize,
) -> Vec<(usize, &SubmissionRecord)> {
    let Some(records) = source else {
        return Vec::new();
    };
    if !records.is_empty() && !pagination::in_range(page, records.len()) {
        tracing::warn!(
            page,
            page_count = pagination::page_count(records.len()),
            "page out of range, showing no rows"
        );
    }

    records[pagination::page_range(page, records.len())]
        .iter()
        .enumerate()
        .map(|(index, record)| (index + 1, record))
        .collect()
}

/// Build the rows shown for `page` of `source`.
pub fn page_rows(source: Option<&[SubmissionRecord]>, page: usize) -> Vec<TableRow> {
    page_entries(source, page)
        .into_iter()
        .map(|(task_id, record)| TableRow {
            key: record.id.clone(),
            task_id,
            cells: render_cells(record, task_id - 1),
        })
        .collect()
}

/// Pager for `page` of `source`, or `None` when there is nothing to page.
pub fn pager(source: Option<&[SubmissionRecord]>, page: usize) -> Option<PagerView> {
    if !pagination::is_visible(source) {
        return None;
    }
    let total = source.map_or(0, <[SubmissionRecord]>::len);
    let page_count = pagination::page_count(total);

    Some(PagerView {
        current: page,
        page_size: PAGE_SIZE,
        total,
        page_count,
        items: pagination::pager_items(page, page_count),
    })
}

/// Paginated submissions table. Owns only the current page; the records are
/// always borrowed from the caller.
#[derive(Debug, Clone, Default)]
pub struct SubmissionsTable {
    pagination: Pagination,
}

impl SubmissionsTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(&self) -> usize {
        self.pagination.page()
    }

    /// Change handler for the pagination control.
    pub fn on_page_change(&mut self, page: usize) {
        self.pagination.set_page(page);
    }

    pub fn entries<'a>(
        &self,
        source: Option<&'a [SubmissionRecord]>,
    ) -> Vec<(usize, &'a SubmissionRecord)> {
        page_entries(source, self.page())
    }

    pub fn rows(&self, source: Option<&[SubmissionRecord]>) -> Vec<TableRow> {
        page_rows(source, self.page())
    }

    pub fn pager(&self, source: Option<&[SubmissionRecord]>) -> Option<PagerView> {
        pager(source, self.page())
    }

    pub fn view(&self, source: Option<&[SubmissionRecord]>) -> TableView {
        TableView {
            rows: self.rows(source),
            pager: self.pager(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(n: u64) -> Vec<SubmissionRecord> {
        (1..=n)
            .map(|i| SubmissionRecord {
                id: SubmissionId::Number(i),
                prover_name: format!("prover-{i}"),
                proof_system: "Plonky2".to_string(),
                algorithm: "sha256".to_string(),
                setup_time: 0.5,
                witness_generation_time: 1.0,
                proof_generation_time: i as f64,
                verify_time: 0.01,
                peak_memory: 256.0,
                proof_size: 45.0,
            })
            .collect()
    }

    fn keys(rows: &[TableRow]) -> Vec<SubmissionId> {
        rows.iter().map(|r| r.key.clone()).collect()
    }

    #[test]
    fn test_twelve_records_two_pages() {
        let data = records(12);
        let mut table = SubmissionsTable::new();

        let view = table.view(Some(data.as_slice()));
        assert_eq!(
            keys(&view.rows),
            (1..=10).map(SubmissionId::Number).collect::<Vec<_>>()
        );
        let task_ids: Vec<usize> = view.rows.iter().map(|r| r.task_id).collect();
        assert_eq!(task_ids, (1..=10).collect::<Vec<_>>());

        let pager = view.pager.unwrap();
        assert_eq!(pager.total, 12);
        assert_eq!(pager.page_size, 10);
        assert_eq!(pager.page_count, 2);
        assert_eq!(pager.current, 1);
        assert!(!pager.has_prev());
        assert!(pager.has_next());

        table.on_page_change(2);
        let view = table.view(Some(data.as_slice()));
        assert_eq!(
            keys(&view.rows),
            vec![SubmissionId::Number(11), SubmissionId::Number(12)]
        );
        assert_eq!(view.rows[0].task_id, 1);
        assert_eq!(view.rows[1].task_id, 2);
        assert_eq!(view.rows[1].cells[0], "2");
        assert_eq!(view.rows[1].cells[1], "prover-12");
        assert!(!view.pager.unwrap().has_next());

        assert_eq!(data, records(12));
    }

    #[test]
    fn test_absent_source() {
        let table = SubmissionsTable::new();
        let view = table.view(None);
        assert!(view.rows.is_empty());
        assert!(view.pager.is_none());
    }

    #[test]
    fn test_empty_source() {
        let table = SubmissionsTable::new();
        let view = table.view(Some(&[][..]));
        assert!(view.rows.is_empty());
        assert!(view.pager.is_none());
    }

    #[test]
    fn test_out_of_range_page_keeps_pager() {
        let data = records(5);
        let mut table = SubmissionsTable::new();
        table.on_page_change(3);

        let view = table.view(Some(data.as_slice()));
        assert!(view.rows.is_empty());
        let pager = view.pager.unwrap();
        assert_eq!(pager.total, 5);
        assert_eq!(pager.items, vec![PageItem::Page(1)]);
    }

    #[test]
    fn test_entries_match_rows() {
        let data = records(12);
        let mut table = SubmissionsTable::new();
        table.on_page_change(2);

        let entries = table.entries(Some(data.as_slice()));
        let rows = table.rows(Some(data.as_slice()));
        assert_eq!(entries.len(), rows.len());
        for ((task_id, record), row) in entries.iter().zip(&rows) {
            assert_eq!(*task_id, row.task_id);
            assert_eq!(record.id, row.key);
        }
        assert_eq!(entries[0].1.prover_name, "prover-11");
        assert!(table.entries(None).is_empty());
    }

    #[test]
    fn test_row_count_matches_formula() {
        let data = records(23);
        let mut table = SubmissionsTable::new();
        for (page, expected) in [(1, 10), (2, 10), (3, 3), (4, 0)] {
            table.on_page_change(page);
            assert_eq!(table.rows(Some(data.as_slice())).len(), expected, "page {page}");
        }
    }
}
