use dioxus::prelude::*;

use crate::client::constant::MAX_RESULT_WINDOW;

use super::Modal;

#[derive(Clone, PartialEq)]
pub struct PaginationData {
    /// Zero-indexed.
    pub page: u64,
    pub per_page: u64,
    pub total: u64,
    pub total_pages: u64,
}

impl PaginationData {
    /// Number of pages that can actually be requested.
    ///
    /// Results past the cluster's result window cannot be paged to even though they
    /// count towards `total`.
    pub fn reachable_pages(&self) -> u64 {
        let per_page = self.per_page.max(1);
        self.total_pages.min(MAX_RESULT_WINDOW / per_page).max(1)
    }

    pub fn first_shown(&self) -> u64 {
        if self.total == 0 {
            0
        } else {
            self.page * self.per_page + 1
        }
    }

    pub fn last_shown(&self) -> u64 {
        ((self.page + 1) * self.per_page).min(self.total)
    }
}

#[component]
pub fn Pagination(
    data: PaginationData,
    on_page_change: EventHandler<u64>,
    on_per_page_change: EventHandler<u64>,
) -> Element {
    let mut show_page_jump = use_signal(|| false);
    let mut jump_page_input = use_signal(String::new);

    let pages = data.reachable_pages();
    let page = data.page;

    rsx!(
        div {
            class: "flex flex-col sm:flex-row justify-between items-center mt-4 gap-4",
            div {
                class: "flex items-center gap-2 text-sm",
                span { "Show" }
                select {
                    class: "select select-bordered select-sm",
                    value: "{data.per_page}",
                    onchange: move |evt| {
                        if let Ok(value) = evt.value().parse::<u64>() {
                            on_per_page_change.call(value);
                        }
                    },
                    for size in [10u64, 20, 50, 100] {
                        option { value: "{size}", selected: size == data.per_page, "{size}" }
                    }
                }
                span { "results" }
            }

            div {
                class: "flex flex-col sm:flex-row items-center gap-2 sm:gap-4",
                span {
                    class: "text-xs sm:text-sm opacity-70 whitespace-nowrap",
                    "Showing {data.first_shown()} to {data.last_shown()} of {data.total}"
                }
                div {
                    class: "join",
                    button {
                        class: "join-item btn btn-xs sm:btn-sm",
                        disabled: page == 0,
                        onclick: move |_| {
                            if page > 0 {
                                on_page_change.call(page - 1);
                            }
                        },
                        "«"
                    }
                    button {
                        class: "join-item btn btn-xs sm:btn-sm",
                        onclick: move |_| {
                            jump_page_input.set((page + 1).to_string());
                            show_page_jump.set(true);
                        },
                        "Page {page + 1} of {pages}"
                    }
                    button {
                        class: "join-item btn btn-xs sm:btn-sm",
                        disabled: page + 1 >= pages,
                        onclick: move |_| {
                            if page + 1 < pages {
                                on_page_change.call(page + 1);
                            }
                        },
                        "»"
                    }
                }
            }
        }

        Modal {
            show: show_page_jump,
            title: "Jump to Page".to_string(),
            prevent_close: false,
            form {
                onsubmit: move |evt| {
                    evt.prevent_default();
                    if let Ok(target_page) = jump_page_input().parse::<u64>() {
                        if target_page > 0 && target_page <= pages {
                            on_page_change.call(target_page - 1);
                            show_page_jump.set(false);
                        }
                    }
                },
                div {
                    class: "form-control w-full flex flex-col gap-3",
                    label {
                        class: "label",
                        span {
                            class: "label-text",
                            "Page number (1-{pages})"
                        }
                    }
                    input {
                        r#type: "number",
                        class: "input input-bordered w-full",
                        min: "1",
                        max: "{pages}",
                        value: "{jump_page_input()}",
                        oninput: move |evt| jump_page_input.set(evt.value()),
                        autofocus: true,
                    }
                }
                div {
                    class: "modal-action",
                    button {
                        r#type: "button",
                        class: "btn",
                        onclick: move |_| show_page_jump.set(false),
                        "Cancel"
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-primary",
                        "Jump"
                    }
                }
            }
        }
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data(page: u64, per_page: u64, total: u64) -> PaginationData {
        PaginationData {
            page,
            per_page,
            total,
            total_pages: total.div_ceil(per_page),
        }
    }

    #[test]
    fn pages_stop_at_result_window() {
        assert_eq!(data(0, 20, 250_000).reachable_pages(), 500);
        assert_eq!(data(0, 100, 250_000).reachable_pages(), 100);
    }

    #[test]
    fn small_result_sets_keep_their_page_count() {
        assert_eq!(data(0, 20, 45).reachable_pages(), 3);
    }

    #[test]
    fn empty_results_show_zero_range() {
        let empty = data(0, 20, 0);

        assert_eq!(empty.reachable_pages(), 1);
        assert_eq!(empty.first_shown(), 0);
        assert_eq!(empty.last_shown(), 0);
    }

    #[test]
    fn last_page_range_is_clamped_to_total() {
        let last = data(2, 20, 45);

        assert_eq!(last.first_shown(), 41);
        assert_eq!(last.last_shown(), 45);
    }
}
