use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use meridian_shared::carousel::{self, CarouselState, Direction};

use crate::content;

/// The first match is measured for the track offset.
const CARD_SELECTOR: &str = ".testimonial-card";

/// Viewport width, with a desktop fallback when the DOM is unavailable.
fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(1280.0)
}

/// Rendered width of the first card, if one is in the DOM yet.
fn measure_card_width() -> Option<f64> {
    let document = web_sys::window()?.document()?;
    let card = document.query_selector(CARD_SELECTOR).ok()??;
    Some(card.get_bounding_client_rect().width())
}

/// Apply a manual transition and restart autoplay. Bumping the epoch drops
/// the running autoplay future and starts a fresh one, so every manual
/// navigation buys a full interval (cancel-then-reschedule, not pause).
fn navigate(
    mut state: Signal<CarouselState>,
    mut autoplay_epoch: Signal<u64>,
    transition: impl FnOnce(CarouselState) -> CarouselState,
) {
    let next = transition(*state.peek());
    state.set(next);
    let epoch = *autoplay_epoch.peek();
    autoplay_epoch.set(epoch + 1);
}

#[component]
pub fn Testimonials() -> Element {
    let card_count = content::TESTIMONIALS.len();

    let mut state = use_signal(|| CarouselState::new(card_count, viewport_width()));
    let mut card_width = use_signal(|| 0.0f64);
    let autoplay_epoch = use_signal(|| 0u64);
    let mut hovered = use_signal(|| false);
    let mut touch_start_x = use_signal(|| None::<f64>);
    let mut resize_epoch = use_signal(|| 0u64);

    // One window-level resize listener for the page lifetime.
    use_hook(move || {
        let Some(window) = web_sys::window() else {
            return;
        };
        let on_resize = Closure::<dyn FnMut()>::new(move || {
            let epoch = *resize_epoch.peek();
            resize_epoch.set(epoch + 1);
        });
        if window
            .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())
            .is_ok()
        {
            on_resize.forget();
        }
    });

    // Re-derive the layout (back to page 0) and re-measure the card after
    // the first render and after every window resize.
    use_effect(move || {
        let _ = *resize_epoch.read();
        let resized = state.peek().resize(card_count, viewport_width());
        state.set(resized);
        if let Some(width) = measure_card_width() {
            card_width.set(width);
        }
    });

    // Autoplay. Hovering the wrapper suspends ticks without restarting the
    // schedule; manual navigation restarts it via the epoch.
    let _autoplay = use_resource(move || {
        let _epoch = *autoplay_epoch.read();
        async move {
            if card_count <= 1 {
                return;
            }
            loop {
                TimeoutFuture::new(carousel::AUTOPLAY_INTERVAL_MS).await;
                if *hovered.peek() {
                    continue;
                }
                let next = state.peek().advance(Direction::Next);
                state.set(next);
            }
        }
    });

    let cur = *state.read();
    let offset = cur.offset_px(*card_width.read());
    let track_style = format!("transform: translateX(-{offset}px);");

    rsx! {
        section { id: "testimonials", class: "testimonials",
            h2 { class: "section-title", "What Clients Say" }

            div {
                class: "testimonials-wrapper",
                onmouseenter: move |_| hovered.set(true),
                onmouseleave: move |_| hovered.set(false),

                button {
                    class: "carousel-arrow testimonial-prev",
                    "aria-label": "Previous testimonials",
                    onclick: move |_| navigate(state, autoplay_epoch, |s| s.advance(Direction::Prev)),
                    "\u{2039}"
                }

                div { class: "testimonial-viewport",
                    ontouchstart: move |evt: Event<TouchData>| {
                        let touches = evt.data().touches();
                        if let Some(touch) = touches.first() {
                            touch_start_x.set(Some(touch.client_coordinates().x));
                        }
                    },
                    ontouchend: move |evt: Event<TouchData>| {
                        let Some(start_x) = *touch_start_x.peek() else {
                            return;
                        };
                        touch_start_x.set(None);
                        let changed = evt.data().touches_changed();
                        let Some(touch) = changed.first() else {
                            return;
                        };
                        // Horizontal delta only; vertical travel is ignored.
                        let delta = start_x - touch.client_coordinates().x;
                        if let Some(direction) = carousel::swipe_direction(delta) {
                            navigate(state, autoplay_epoch, move |s| s.advance(direction));
                        }
                    },

                    div {
                        id: "testimonial-track",
                        class: "testimonial-track",
                        style: "{track_style}",
                        for testimonial in content::TESTIMONIALS {
                            figure { class: "testimonial-card",
                                blockquote { "\u{201c}{testimonial.quote}\u{201d}" }
                                figcaption {
                                    span { class: "testimonial-author", "{testimonial.author}" }
                                    span { class: "testimonial-role", "{testimonial.role}" }
                                }
                            }
                        }
                    }
                }

                button {
                    class: "carousel-arrow testimonial-next",
                    "aria-label": "Next testimonials",
                    onclick: move |_| navigate(state, autoplay_epoch, |s| s.advance(Direction::Next)),
                    "\u{203a}"
                }
            }

            div { class: "testimonial-dots",
                for page in 0..cur.total_pages {
                    button {
                        class: if page == cur.current_page { "testimonial-dot active" } else { "testimonial-dot" },
                        "aria-label": "Go to page {page + 1}",
                        onclick: move |_| navigate(state, autoplay_epoch, move |s| s.go_to(page)),
                    }
                }
            }
        }
    }
}
