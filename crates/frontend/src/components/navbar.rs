use dioxus::prelude::*;

use crate::content;
use crate::scroll;

#[component]
pub fn NavBar() -> Element {
    let mut menu_open = use_signal(|| false);
    let open = *menu_open.read();

    rsx! {
        nav { class: "navbar",
            a {
                class: "nav-brand",
                href: "#home",
                onclick: move |evt: Event<MouseData>| {
                    evt.prevent_default();
                    scroll::scroll_to_section("#home");
                },
                "Meridian Studio"
            }

            button {
                class: if open { "nav-toggle active" } else { "nav-toggle" },
                "aria-label": "Toggle navigation",
                onclick: move |_| {
                    let was_open = *menu_open.peek();
                    menu_open.set(!was_open);
                },
                span { class: "bar" }
                span { class: "bar" }
                span { class: "bar" }
            }

            ul { class: if open { "nav-menu active" } else { "nav-menu" },
                for link in content::NAV_LINKS {
                    li {
                        a {
                            class: "nav-link",
                            href: "{link.anchor}",
                            // Navigating always closes the mobile menu.
                            onclick: move |evt: Event<MouseData>| {
                                evt.prevent_default();
                                menu_open.set(false);
                                scroll::scroll_to_section(link.anchor);
                            },
                            "{link.label}"
                        }
                    }
                }
            }
        }
    }
}
