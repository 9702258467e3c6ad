//! Pagination controls shared by the holdings, transaction, and wallet lists.
//!
//! The component is stateless: the parent view owns `current_page` and the
//! page size, and receives mutations through callbacks. Button generation is
//! a pure function so the ellipsis policy is unit-testable.

use leptos::prelude::*;

use crate::utils::constants::{DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS};

/// One entry in the rendered page-button row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    /// A clickable page number.
    Page(usize),
    /// A non-interactive "…" separator.
    Gap,
}

/// Number of pages needed for `total_items` at `per_page` items each.
/// `per_page` must be non-zero.
pub fn total_pages(total_items: usize, per_page: usize) -> usize {
    total_items.div_ceil(per_page)
}

/// Page-button row for `current` out of `total` pages.
///
/// Up to five numbered buttons are shown; long ranges compress the middle
/// with gaps. The first and last page are always reachable, and every
/// generated page number lies in `[1, total]`.
pub fn page_items(current: usize, total: usize) -> Vec<PageItem> {
    use PageItem::{Gap, Page};

    if total <= 5 {
        return (1..=total).map(Page).collect();
    }
    if current <= 3 {
        vec![Page(1), Page(2), Page(3), Page(4), Gap, Page(total)]
    } else if current >= total - 2 {
        vec![
            Page(1),
            Gap,
            Page(total - 3),
            Page(total - 2),
            Page(total - 1),
            Page(total),
        ]
    } else {
        vec![
            Page(1),
            Gap,
            Page(current - 1),
            Page(current),
            Page(current + 1),
            Gap,
            Page(total),
        ]
    }
}

/// Half-open index range of the items on `page` (1-based), clamped to `len`.
pub fn page_bounds(page: usize, per_page: usize, len: usize) -> (usize, usize) {
    let start = page.saturating_sub(1).saturating_mul(per_page).min(len);
    let end = (start + per_page).min(len);
    (start, end)
}

/// The slice of `items` visible on `page` (1-based).
pub fn page_slice<T>(items: &[T], page: usize, per_page: usize) -> &[T] {
    let (start, end) = page_bounds(page, per_page, items.len());
    &items[start..end]
}

#[component]
pub fn Pagination(
    #[prop(into)] current_page: Signal<usize>,
    #[prop(into)] total_items: Signal<usize>,
    set_page: Callback<usize>,
    #[prop(optional)] items_per_page: Option<Signal<usize>>,
    #[prop(optional)] set_items_per_page: Option<Callback<usize>>,
) -> impl IntoView {
    let per_page = move || {
        items_per_page
            .map(|s| s.get())
            .unwrap_or(DEFAULT_PAGE_SIZE)
    };

    view! {
        {move || {
            let per = per_page();
            let total = total_pages(total_items.get(), per);
            // One page or less: no controls at all.
            if total <= 1 {
                return ().into_any();
            }
            let current = current_page.get();

            view! {
                <div class="pagination">
                    {set_items_per_page.map(|change_size| view! {
                        <label class="pagination-size">
                            <span>"Show:"</span>
                            <select on:change=move |ev| {
                                if let Ok(n) = event_target_value(&ev).parse::<usize>() {
                                    // Size change first, then reset to page 1, so
                                    // the displayed slice is never out of range.
                                    change_size.run(n);
                                    set_page.run(1);
                                }
                            }>
                                {PAGE_SIZE_OPTIONS.iter().map(|&n| view! {
                                    <option value=n.to_string() selected=(n == per)>
                                        {n}
                                    </option>
                                }).collect::<Vec<_>>()}
                            </select>
                        </label>
                    })}

                    <button
                        class="page-btn"
                        disabled=(current == 1)
                        on:click=move |_| set_page.run(current - 1)
                    >
                        "Prev"
                    </button>

                    {page_items(current, total).into_iter().map(|item| match item {
                        PageItem::Page(n) => {
                            let class = if n == current { "page-btn page-current" } else { "page-btn" };
                            view! {
                                <button class=class on:click=move |_| set_page.run(n)>
                                    {n}
                                </button>
                            }.into_any()
                        }
                        PageItem::Gap => view! {
                            <span class="page-gap">"…"</span>
                        }.into_any(),
                    }).collect::<Vec<_>>()}

                    <button
                        class="page-btn"
                        disabled=(current == total)
                        on:click=move |_| set_page.run(current + 1)
                    >
                        "Next"
                    </button>
                </div>
            }.into_any()
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::PageItem::{Gap, Page};
    use super::*;

    #[test]
    fn short_ranges_list_every_page() {
        assert_eq!(page_items(1, 1), vec![Page(1)]);
        assert_eq!(
            page_items(3, 5),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5)]
        );
    }

    #[test]
    fn leading_pages_compress_the_tail() {
        for current in 1..=3 {
            assert_eq!(
                page_items(current, 7),
                vec![Page(1), Page(2), Page(3), Page(4), Gap, Page(7)],
                "current = {current}"
            );
        }
    }

    #[test]
    fn trailing_pages_compress_the_head() {
        for current in 5..=7 {
            assert_eq!(
                page_items(current, 7),
                vec![Page(1), Gap, Page(4), Page(5), Page(6), Page(7)],
                "current = {current}"
            );
        }
    }

    #[test]
    fn middle_pages_compress_both_sides() {
        assert_eq!(
            page_items(4, 7),
            vec![Page(1), Gap, Page(3), Page(4), Page(5), Gap, Page(7)]
        );
    }

    #[test]
    fn generated_pages_stay_in_range() {
        for total in 1..=30 {
            for current in 1..=total {
                for item in page_items(current, total) {
                    if let Page(n) = item {
                        assert!((1..=total).contains(&n));
                    }
                }
            }
        }
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(25, 10), 3);
    }

    #[test]
    fn page_slices_cover_a_25_item_list() {
        let items: Vec<usize> = (0..25).collect();

        let first = page_slice(&items, 1, 10);
        assert_eq!(first, &items[0..10]);

        let last = page_slice(&items, 3, 10);
        assert_eq!(last, &items[20..25]);
        assert_eq!(last.len(), 5);

        // Page 3 is the last page: Next would be disabled.
        assert_eq!(total_pages(items.len(), 10), 3);
    }

    #[test]
    fn out_of_range_pages_yield_empty_slices() {
        let items: Vec<usize> = (0..4).collect();
        assert!(page_slice(&items, 2, 10).is_empty());
        assert_eq!(page_bounds(3, 10, 4), (4, 4));
    }
}
