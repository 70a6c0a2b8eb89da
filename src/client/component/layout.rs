use dioxus::prelude::*;

use crate::client::{component::Header, router::Route};

#[component]
pub fn Layout() -> Element {
    rsx!(div {
        Header {  }
        Outlet::<Route> {}
    })
}

/// Link to a canonical path, localized to the current page's locale.
#[component]
pub fn LocalLink(#[props(into)] to: String, class: Option<String>, children: Element) -> Element {
    let locale = crate::client::model::locale::use_locale();
    let href = crate::i18n::localize(&to, locale);

    rsx!(
        Link {
            to: href,
            class,
            {children}
        }
    )
}
