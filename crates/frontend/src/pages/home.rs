use dioxus::prelude::*;

use crate::components::hero::Hero;
use crate::components::navbar::NavBar;
use crate::components::region_map::RegionMap;
use crate::components::sections::{About, Contact, Portfolio, Services};
use crate::components::testimonials::Testimonials;
use crate::observer;

/// Everything that slides in the first time it scrolls into view.
const REVEAL_SELECTOR: &str =
    ".section-title, .about-text, .service-card, .portfolio-item, .contact-item";

#[component]
pub fn HomePage() -> Element {
    // Reveal targets exist only after the first render has committed.
    use_effect(|| observer::observe_reveals(REVEAL_SELECTOR));

    rsx! {
        NavBar {}
        main {
            Hero {}
            About {}
            Services {}
            Portfolio {}
            Testimonials {}
            RegionMap {}
            Contact {}
        }
        footer { class: "footer",
            p { "\u{00a9} 2025 Meridian Studio. All rights reserved." }
        }
    }
}
