use serde::{Deserialize, Serialize};

/// A city the studio operates in, with its map coordinates and the project
/// count shown in the hover tooltip. `delay` staggers the marker entrance
/// animation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct City {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub projects: String,
    #[serde(default)]
    pub hq: bool,
    #[serde(default, rename = "delay")]
    pub delay_s: f64,
}

impl City {
    #[cfg(test)]
    pub fn sample(name: &str, lat: f64, lon: f64) -> Self {
        Self {
            name: name.to_string(),
            lat,
            lon,
            projects: "1+".to_string(),
            hq: false,
            delay_s: 0.0,
        }
    }
}

/// Parse the embedded city table. A parse failure disables the map feature
/// at the call site rather than aborting the page.
pub fn parse_cities(json: &str) -> Result<Vec<City>, serde_json::Error> {
    serde_json::from_str(json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cities() {
        let json = r#"[
            {"name": "Delhi", "lat": 28.7041, "lon": 77.1025, "projects": "25+", "hq": true},
            {"name": "Mumbai", "lat": 19.076, "lon": 72.8777, "projects": "20+", "delay": 0.9}
        ]"#;
        let cities = parse_cities(json).unwrap();
        assert_eq!(cities.len(), 2);
        assert_eq!(cities[0].name, "Delhi");
        assert!(cities[0].hq);
        assert!((cities[0].delay_s - 0.0).abs() < 1e-9);
        assert!(!cities[1].hq);
        assert!((cities[1].delay_s - 0.9).abs() < 1e-9);
    }

    #[test]
    fn test_parse_cities_rejects_malformed() {
        assert!(parse_cities("{not json").is_err());
        assert!(parse_cities(r#"[{"name": "Delhi"}]"#).is_err());
    }
}
