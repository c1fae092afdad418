use dioxus::prelude::*;

use meridian_shared::geo::{self, MarkerPos};
use meridian_shared::models::{self, City};

use crate::components::stats::StatsRow;
use crate::content;

const MAP_CONTAINER_ID: &str = "region-map-container";

/// Tooltip offset from the cursor, in container pixels.
const TOOLTIP_OFFSET_X: f64 = 15.0;
const TOOLTIP_OFFSET_Y: f64 = -10.0;

const CITY_DATA: &str = include_str!("../../data/cities.json");

/// Bounding client rect of the map container element.
fn container_rect() -> Option<web_sys::DomRect> {
    let document = web_sys::window()?.document()?;
    let element = document.get_element_by_id(MAP_CONTAINER_ID)?;
    Some(element.get_bounding_client_rect())
}

/// Container-relative tooltip position for a client-space cursor.
fn tooltip_position(client_x: f64, client_y: f64, rect_left: f64, rect_top: f64) -> (f64, f64) {
    (
        client_x - rect_left + TOOLTIP_OFFSET_X,
        client_y - rect_top + TOOLTIP_OFFSET_Y,
    )
}

fn load_cities() -> Vec<City> {
    match models::parse_cities(CITY_DATA) {
        Ok(cities) => cities,
        Err(err) => {
            log::warn!("city table unreadable, map disabled: {err}");
            Vec::new()
        }
    }
}

#[component]
pub fn RegionMap() -> Element {
    let cities = use_hook(load_cities);
    let mut tooltip = use_signal(|| None::<(String, String)>);
    let mut tooltip_pos = use_signal(|| (0.0f64, 0.0f64));
    let mut highlighted = use_signal(|| None::<usize>);

    // An unreadable table or miscalibrated bounds disable the whole section.
    if cities.is_empty() || !geo::INDIA_BOUNDS.is_valid() {
        return rsx! {};
    }

    let markers: Vec<MarkerPos> = geo::project_all(&cities, &geo::INDIA_BOUNDS);

    let tip = tooltip.read().clone();
    let (tip_x, tip_y) = *tooltip_pos.read();
    let highlight = *highlighted.read();

    rsx! {
        section { id: content::PRESENCE_SECTION_ID, class: "presence",
            h2 { class: "section-title", "Our Presence" }

            StatsRow {}

            div { class: "presence-grid",
                div { id: MAP_CONTAINER_ID, class: "india-map-container",
                    div { class: "map-image-wrapper",
                        img {
                            src: "/images/india-map.svg",
                            alt: "Map of India",
                            draggable: "false",
                        }
                        for (i, city) in cities.iter().enumerate() {
                            div {
                                class: if highlight == Some(i) { "city-marker highlighted" } else { "city-marker" },
                                style: "top: {markers[i].top_pct}%; left: {markers[i].left_pct}%; --delay: {city.delay_s}s;",
                                onmouseenter: {
                                    let name = city.name.clone();
                                    let projects = city.projects.clone();
                                    move |_| tooltip.set(Some((name.clone(), projects.clone())))
                                },
                                onmousemove: move |evt: Event<MouseData>| {
                                    let Some(rect) = container_rect() else {
                                        return;
                                    };
                                    let client = evt.client_coordinates();
                                    tooltip_pos.set(tooltip_position(
                                        client.x,
                                        client.y,
                                        rect.left(),
                                        rect.top(),
                                    ));
                                },
                                onmouseleave: move |_| tooltip.set(None),

                                span { class: "marker-ring" }
                                span { class: "marker-ring ring-2" }
                                span { class: "marker-center" }
                                span { class: "marker-label", "{city.name}" }
                            }
                        }
                    }

                    if let Some((name, projects)) = tip {
                        div {
                            class: "map-tooltip visible",
                            style: "left: {tip_x}px; top: {tip_y}px;",
                            span { class: "tooltip-city", "{name}" }
                            span { class: "tooltip-projects", "{projects} Projects" }
                        }
                    }
                }

                ul { class: "city-list",
                    for (i, city) in cities.iter().enumerate() {
                        li {
                            onmouseenter: move |_| highlighted.set(Some(i)),
                            onmouseleave: move |_| highlighted.set(None),
                            "{city.name}"
                            if city.hq {
                                span { class: "hq-badge", "HQ" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tooltip_position_applies_offsets() {
        // Cursor at (400, 300) over a container whose rect starts at (100, 200).
        let (x, y) = tooltip_position(400.0, 300.0, 100.0, 200.0);
        assert!((x - 315.0).abs() < 1e-9);
        assert!((y - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_tooltip_position_at_container_origin() {
        let (x, y) = tooltip_position(100.0, 200.0, 100.0, 200.0);
        assert!((x - TOOLTIP_OFFSET_X).abs() < 1e-9);
        assert!((y - TOOLTIP_OFFSET_Y).abs() < 1e-9);
    }

    #[test]
    fn test_embedded_city_table_parses() {
        let cities = models::parse_cities(CITY_DATA).unwrap();
        assert_eq!(cities.len(), 11);
        assert!(cities.iter().any(|c| c.hq));
        for city in &cities {
            let pos = geo::project(city.lat, city.lon, &geo::INDIA_BOUNDS);
            assert!(pos.top_pct > 0.0 && pos.top_pct < 100.0, "{}", city.name);
            assert!(pos.left_pct > 0.0 && pos.left_pct < 100.0, "{}", city.name);
        }
    }
}
