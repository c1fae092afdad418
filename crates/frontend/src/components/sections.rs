use dioxus::prelude::*;

use crate::content;

#[component]
pub fn About() -> Element {
    rsx! {
        section { id: "about", class: "about",
            h2 { class: "section-title", "About Us" }
            div { class: "about-text",
                p {
                    "Meridian Studio is a design-and-build practice working out of Delhi "
                    "since 2013. We take projects from the first sketch to the last "
                    "coat of paint, with our own site teams in eleven cities."
                }
                p {
                    "Residences, cafes, offices, showrooms \u{2014} if people spend their "
                    "day in it, we have probably built one."
                }
            }
        }
    }
}

#[component]
pub fn Services() -> Element {
    rsx! {
        section { id: "services", class: "services",
            h2 { class: "section-title", "Services" }
            div { class: "services-grid",
                for service in content::SERVICES {
                    div { class: "service-card",
                        h3 { "{service.title}" }
                        p { "{service.blurb}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Portfolio() -> Element {
    rsx! {
        section { id: "portfolio", class: "portfolio",
            h2 { class: "section-title", "Selected Work" }
            div { class: "portfolio-grid",
                for item in content::PORTFOLIO {
                    figure { class: "portfolio-item",
                        img { src: "{item.image}", alt: "{item.title}", loading: "lazy" }
                        figcaption { "{item.title}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Contact() -> Element {
    rsx! {
        section { id: "contact", class: "contact",
            h2 { class: "section-title", "Get in Touch" }
            div { class: "contact-items",
                div { class: "contact-item",
                    h3 { "Studio" }
                    p { "14 Hauz Khas Village, New Delhi 110016" }
                }
                div { class: "contact-item",
                    h3 { "Email" }
                    p { "hello@meridianstudio.in" }
                }
                div { class: "contact-item",
                    h3 { "Phone" }
                    p { "+91 11 4100 2200" }
                }
            }
        }
    }
}
