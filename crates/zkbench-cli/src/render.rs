use serde::Serialize;
use zkbench_core::{
    Header, PagerView, SubmissionRecord, SubmissionsTable, TableView, COLUMN_COUNT, PAGE_SIZE,
    SUBMISSION_COLUMNS,
};

/// Footer line under a table page. `None` when there is no pager.
pub fn footer(pager: Option<&PagerView>) -> Option<String> {
    pager.map(|p| {
        format!(
            "Page {}/{} · {} per page · Total {}",
            p.current, p.page_count, p.page_size, p.total
        )
    })
}

/// Plain-text table with aligned columns. Two-line headers take two header rows.
pub fn render_table(view: &TableView) -> String {
    let header_rows = SUBMISSION_COLUMNS
        .iter()
        .map(|c| c.header.lines().len())
        .max()
        .unwrap_or(1);

    let mut widths = [0usize; COLUMN_COUNT];
    for (i, column) in SUBMISSION_COLUMNS.iter().enumerate() {
        widths[i] = column
            .header
            .lines()
            .iter()
            .map(|l| l.chars().count())
            .max()
            .unwrap_or(0);
        for row in &view.rows {
            widths[i] = widths[i].max(row.cells[i].chars().count());
        }
    }

    let mut out = String::new();
    for line in 0..header_rows {
        let cells: Vec<&str> = SUBMISSION_COLUMNS
            .iter()
            .map(|c| header_line(c.header, line))
            .collect();
        push_row(&mut out, &cells, &widths);
    }

    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&rule.join("-+-"));
    out.push('\n');

    if view.rows.is_empty() {
        out.push_str("  No data\n");
    }
    for row in &view.rows {
        let cells: Vec<&str> = row.cells.iter().map(String::as_str).collect();
        push_row(&mut out, &cells, &widths);
    }

    if let Some(footer) = footer(view.pager.as_ref()) {
        out.push('\n');
        out.push_str(&footer);
        out.push('\n');
    }
    out
}

fn header_line(header: Header, line: usize) -> &'static str {
    header.lines().get(line).copied().unwrap_or("")
}

fn push_row(out: &mut String, cells: &[&str], widths: &[usize; COLUMN_COUNT]) {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, w)| format!("{:<width$}", cell, width = *w))
        .collect();
    out.push_str(padded.join(" | ").trim_end());
    out.push('\n');
}

pub fn render_csv(view: &TableView) -> String {
    let mut out = String::new();
    let headers: Vec<String> = SUBMISSION_COLUMNS
        .iter()
        .map(|c| csv_field(&c.header.text()))
        .collect();
    out.push_str(&headers.join(","));
    out.push('\n');

    for row in &view.rows {
        let cells: Vec<String> = row.cells.iter().map(|c| csv_field(c)).collect();
        out.push_str(&cells.join(","));
        out.push('\n');
    }
    out
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[derive(Serialize)]
struct JsonRow<'a> {
    task_id: usize,
    #[serde(flatten)]
    record: &'a SubmissionRecord,
}

#[derive(Serialize)]
struct JsonPage<'a> {
    page: usize,
    page_size: usize,
    total: usize,
    page_count: usize,
    submissions: Vec<JsonRow<'a>>,
}

pub fn render_json(
    records: &[SubmissionRecord],
    table: &SubmissionsTable,
) -> serde_json::Result<String> {
    let submissions = table
        .entries(Some(records))
        .into_iter()
        .map(|(task_id, record)| JsonRow { task_id, record })
        .collect();

    serde_json::to_string_pretty(&JsonPage {
        page: table.page(),
        page_size: PAGE_SIZE,
        total: records.len(),
        page_count: zkbench_core::page_count(records.len()),
        submissions,
    })
}
