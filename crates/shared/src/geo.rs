use serde::{Deserialize, Serialize};

use crate::models::City;

/// Calibration for projecting lat/lon onto a rectangular map image.
///
/// The lat/lon extents describe the geography covered by the artwork; the
/// paddings (percent of the image edge) describe how far the artwork is
/// inset from the image borders.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapBounds {
    pub top_lat: f64,
    pub bottom_lat: f64,
    pub left_lon: f64,
    pub right_lon: f64,
    pub pad_top: f64,
    pub pad_bottom: f64,
    pub pad_left: f64,
    pub pad_right: f64,
}

impl MapBounds {
    pub fn is_valid(&self) -> bool {
        self.top_lat > self.bottom_lat
            && self.right_lon > self.left_lon
            && self.pad_top + self.pad_bottom < 100.0
            && self.pad_left + self.pad_right < 100.0
    }
}

/// Calibrated against the India artwork shipped with the site.
pub const INDIA_BOUNDS: MapBounds = MapBounds {
    top_lat: 37.0,    // Kashmir
    bottom_lat: 6.9,  // Kanyakumari
    left_lon: 67.0,   // west Gujarat
    right_lon: 98.0,  // northeast
    pad_top: 8.5,
    pad_bottom: 5.0,
    pad_left: 12.0,
    pad_right: 7.0,
};

/// Percentage-based position within the map image.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerPos {
    pub top_pct: f64,
    pub left_pct: f64,
}

/// Project a geographic point into image percentages.
///
/// `top` is inverted: latitude decreases downward on screen. Points outside
/// the bound rectangle project outside [0, 100]% and render off-image; no
/// clamping is applied.
pub fn project(lat: f64, lon: f64, bounds: &MapBounds) -> MarkerPos {
    let usable_width = 100.0 - bounds.pad_left - bounds.pad_right;
    let usable_height = 100.0 - bounds.pad_top - bounds.pad_bottom;
    let left_pct =
        bounds.pad_left + (lon - bounds.left_lon) / (bounds.right_lon - bounds.left_lon) * usable_width;
    let top_pct =
        bounds.pad_top + (bounds.top_lat - lat) / (bounds.top_lat - bounds.bottom_lat) * usable_height;
    MarkerPos { top_pct, left_pct }
}

/// Project every city, preserving input order. Recomputed in full whenever
/// the bounds change; there is no incremental update.
pub fn project_all(cities: &[City], bounds: &MapBounds) -> Vec<MarkerPos> {
    cities
        .iter()
        .map(|city| project(city.lat, city.lon, bounds))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_india_bounds_valid() {
        assert!(INDIA_BOUNDS.is_valid());
    }

    #[test]
    fn test_invalid_bounds_rejected() {
        let mut b = INDIA_BOUNDS;
        b.top_lat = b.bottom_lat;
        assert!(!b.is_valid());

        let mut b = INDIA_BOUNDS;
        b.right_lon = b.left_lon - 1.0;
        assert!(!b.is_valid());

        let mut b = INDIA_BOUNDS;
        b.pad_left = 60.0;
        b.pad_right = 45.0;
        assert!(!b.is_valid());
    }

    #[test]
    fn test_project_delhi() {
        // Delhi: 28.7041 N, 77.1025 E
        let pos = project(28.7041, 77.1025, &INDIA_BOUNDS);
        assert!((pos.left_pct - 38.4).abs() < 0.1, "left = {}", pos.left_pct);
        assert!((pos.top_pct - 32.3).abs() < 0.1, "top = {}", pos.top_pct);
    }

    #[test]
    fn test_project_corners() {
        let top_left = project(INDIA_BOUNDS.top_lat, INDIA_BOUNDS.left_lon, &INDIA_BOUNDS);
        assert!((top_left.left_pct - INDIA_BOUNDS.pad_left).abs() < 1e-9);
        assert!((top_left.top_pct - INDIA_BOUNDS.pad_top).abs() < 1e-9);

        let bottom_right = project(INDIA_BOUNDS.bottom_lat, INDIA_BOUNDS.right_lon, &INDIA_BOUNDS);
        assert!((bottom_right.left_pct - (100.0 - INDIA_BOUNDS.pad_right)).abs() < 1e-9);
        assert!((bottom_right.top_pct - (100.0 - INDIA_BOUNDS.pad_bottom)).abs() < 1e-9);
    }

    #[test]
    fn test_projection_order_preserving() {
        // Eastward movement increases left%, northward movement decreases top%.
        let west = project(20.0, 70.0, &INDIA_BOUNDS);
        let east = project(20.0, 90.0, &INDIA_BOUNDS);
        assert!(east.left_pct > west.left_pct);

        let south = project(10.0, 78.0, &INDIA_BOUNDS);
        let north = project(30.0, 78.0, &INDIA_BOUNDS);
        assert!(north.top_pct < south.top_pct);
    }

    #[test]
    fn test_out_of_bounds_projects_off_image() {
        // Colombo sits south of the calibrated extent; it must project below
        // 100% rather than clamp.
        let pos = project(6.0, 79.9, &INDIA_BOUNDS);
        assert!(pos.top_pct > 100.0 - INDIA_BOUNDS.pad_bottom);

        let west_of_map = project(25.0, 60.0, &INDIA_BOUNDS);
        assert!(west_of_map.left_pct < INDIA_BOUNDS.pad_left);
    }

    #[test]
    fn test_project_all_preserves_order() {
        let cities = vec![
            City::sample("Delhi", 28.7041, 77.1025),
            City::sample("Mumbai", 19.0760, 72.8777),
            City::sample("Chennai", 13.0827, 80.2707),
        ];
        let markers = project_all(&cities, &INDIA_BOUNDS);
        assert_eq!(markers.len(), 3);
        for (city, marker) in cities.iter().zip(&markers) {
            let expected = project(city.lat, city.lon, &INDIA_BOUNDS);
            assert_eq!(*marker, expected);
        }
        // Mumbai is west of Chennai and north of it.
        assert!(markers[1].left_pct < markers[2].left_pct);
    }
}
