use leptos::prelude::*;
use zkbench_core::{
    Header, SubmissionRecord, SubmissionsTable as TableState, TableTheme, SUBMISSION_COLUMNS,
};

use crate::components::pagination::Pagination;
use crate::style;

fn header_view(header: Header) -> AnyView {
    match header {
        Header::Single(title) => view! { <div class=style::TITLE_SPAN>{title}</div> }.into_any(),
        Header::TwoLine(first, second) => view! {
            <div class=style::TABLE_TITLE>
                <div>{first}</div>
                <div>{second}</div>
            </div>
        }
        .into_any(),
    }
}

/// Paginated table of benchmark submissions.
///
/// `data_source` is `None` until the caller has records. The table always
/// renders exactly the current page's slice; the pager is left out entirely
/// when there is nothing to page.
#[component]
pub fn SubmissionsTable(
    #[prop(into)] data_source: Signal<Option<Vec<SubmissionRecord>>>,
    #[prop(optional)] theme: Option<TableTheme>,
) -> impl IntoView {
    let state = RwSignal::new(TableState::new());

    let rows = move || data_source.with(|source| state.with(|table| table.rows(source.as_deref())));
    let pager = move || data_source.with(|source| state.with(|table| table.pager(source.as_deref())));
    let on_change =
        Callback::new(move |page: usize| state.update(|table| table.on_page_change(page)));

    let theme = theme.unwrap_or_default();

    view! {
        <div class=style::TABLE_BOX style=theme.css_vars()>
            <div class="table-scroll">
                <table class=style::TABLE>
                    <colgroup>
                        {SUBMISSION_COLUMNS
                            .iter()
                            .map(|column| {
                                let width = column.width.map(|w| format!("width: {w}px;"));
                                view! { <col style=width /> }
                            })
                            .collect_view()}
                    </colgroup>
                    <thead>
                        <tr>
                            {SUBMISSION_COLUMNS
                                .iter()
                                .map(|column| view! {
                                    <th data-field=column.key.field()>{header_view(column.header)}</th>
                                })
                                .collect_view()}
                        </tr>
                    </thead>
                    // Unkeyed: every change re-renders the whole slice.
                    <tbody>
                        {move || {
                            rows()
                                .into_iter()
                                .map(|row| view! {
                                    <tr data-row-key=row.key.to_string()>
                                        {row
                                            .cells
                                            .into_iter()
                                            .map(|cell| view! { <td>{cell}</td> })
                                            .collect_view()}
                                    </tr>
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
            </div>
            {move || rows().is_empty().then(|| view! { <div class=style::TABLE_EMPTY>"No data"</div> })}
        </div>
        {move || pager().map(|pager| view! { <Pagination pager=pager on_change=on_change /> })}
    }
}
