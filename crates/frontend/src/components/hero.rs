use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use crate::content;
use crate::scroll;

/// Delay between background slide changes.
const SLIDE_INTERVAL_MS: u32 = 4000;

#[component]
pub fn Hero() -> Element {
    let mut current_slide = use_signal(|| 0usize);

    use_future(move || async move {
        // Nothing to rotate with a single slide.
        if content::HERO_SLIDES.len() <= 1 {
            return;
        }
        loop {
            TimeoutFuture::new(SLIDE_INTERVAL_MS).await;
            let next = (*current_slide.peek() + 1) % content::HERO_SLIDES.len();
            current_slide.set(next);
        }
    });

    let active = *current_slide.read();

    rsx! {
        section { id: "home", class: "hero",
            div { class: "hero-slideshow",
                for (i, image) in content::HERO_SLIDES.iter().enumerate() {
                    div {
                        class: if i == active { "hero-slide active" } else { "hero-slide" },
                        style: "background-image: url('{image}');",
                    }
                }
            }
            div { class: "hero-content",
                h1 { "Spaces that tell your story" }
                p { "Interior design and turnkey builds, delivered across India." }
                a {
                    class: "cta-button",
                    href: "#contact",
                    onclick: move |evt: Event<MouseData>| {
                        evt.prevent_default();
                        scroll::scroll_to_section("#contact");
                    },
                    "Start a Project"
                }
            }
        }
    }
}
