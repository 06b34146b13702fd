use leptos::callback::Callable;
use leptos::prelude::*;
use zkbench_core::{PageItem, PagerView};

use crate::style;

/// Page switcher drawn from a [`PagerView`]. Emits the chosen page through
/// `on_change`; it keeps no page state of its own.
#[component]
pub fn Pagination(pager: PagerView, #[prop(into)] on_change: Callback<usize>) -> impl IntoView {
    let has_prev = pager.has_prev();
    let has_next = pager.has_next();
    let PagerView {
        current,
        page_size,
        total,
        items,
        ..
    } = pager;

    let go = move |target: usize| {
        if target != current {
            on_change.run(target);
        }
    };

    view! {
        <ul class=style::PAGINATION data-page-size=page_size.to_string()>
            <li class=style::PAGINATION_TOTAL>{format!("Total {} items", total)}</li>
            <li class=style::PAGINATION_PREV>
                <button
                    title="Previous Page"
                    disabled=!has_prev
                    on:click=move |_| go(current.saturating_sub(1).max(1))
                >
                    "‹"
                </button>
            </li>
            {items
                .into_iter()
                .map(|item| {
                    let target = item.target();
                    match item {
                        PageItem::Page(p) => {
                            let class = if p == current {
                                style::PAGINATION_ITEM_ACTIVE
                            } else {
                                style::PAGINATION_ITEM
                            };
                            view! {
                                <li class=class>
                                    <button data-page=p.to_string() on:click=move |_| go(target)>
                                        {p.to_string()}
                                    </button>
                                </li>
                            }
                            .into_any()
                        }
                        PageItem::JumpPrev(_) => view! {
                            <li class=style::PAGINATION_JUMP>
                                <button title="Previous 5 Pages" on:click=move |_| go(target)>
                                    "•••"
                                </button>
                            </li>
                        }
                        .into_any(),
                        PageItem::JumpNext(_) => view! {
                            <li class=style::PAGINATION_JUMP>
                                <button title="Next 5 Pages" on:click=move |_| go(target)>
                                    "•••"
                                </button>
                            </li>
                        }
                        .into_any(),
                    }
                })
                .collect_view()}
            <li class=style::PAGINATION_NEXT>
                <button title="Next Page" disabled=!has_next on:click=move |_| go(current + 1)>
                    "›"
                </button>
            </li>
        </ul>
    }
}
