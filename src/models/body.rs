use serde::{Deserialize, Serialize};

/// One celestial body as returned by the bodies endpoint.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Body {
    pub name: String,
    #[serde(rename = "latinName")]
    pub latin_name: String,
    pub desc: String,
    #[serde(rename = "type")]
    pub body_type: String,
    /// Rotation period in Earth days
    pub rotation: f64,
    /// Orbital period in Earth days
    #[serde(rename = "orbitalPeriod")]
    pub orbital_period: f64,
    /// Distance from the sun in km
    pub distance: f64,
    pub temp: Temperature,
    pub moons: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
pub struct Temperature {
    pub day: f64,
    pub night: f64,
}

impl Body {
    /// Class list carried by the rendered button, e.g. `planet earth`
    pub fn css_class(&self) -> String {
        format!("planet {}", self.name.to_lowercase())
    }

    pub fn has_moons(&self) -> bool {
        !self.moons.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn earth_json() -> serde_json::Value {
        serde_json::json!({
            "id": 3,
            "type": "planet",
            "name": "Jorden",
            "latinName": "Tellus",
            "rotation": 1,
            "circumference": 40075,
            "temp": { "day": 20, "night": 10 },
            "distance": 149600000,
            "orbitalPeriod": 365,
            "desc": "Our home.",
            "moons": ["Månen"]
        })
    }

    #[test]
    fn decodes_api_shape_and_ignores_extra_fields() {
        let body: Body = serde_json::from_value(earth_json()).unwrap();
        assert_eq!(body.name, "Jorden");
        assert_eq!(body.latin_name, "Tellus");
        assert_eq!(body.body_type, "planet");
        assert_eq!(body.orbital_period, 365.0);
        assert_eq!(body.temp, Temperature { day: 20.0, night: 10.0 });
        assert_eq!(body.moons, vec!["Månen".to_string()]);
    }

    #[test]
    fn rejects_record_with_missing_temperature() {
        let mut value = earth_json();
        value.as_object_mut().unwrap().remove("temp");
        assert!(serde_json::from_value::<Body>(value).is_err());
    }

    #[test]
    fn css_class_lowercases_name() {
        let body: Body = serde_json::from_value(earth_json()).unwrap();
        assert_eq!(body.css_class(), "planet jorden");
        assert!(body.has_moons());
    }
}
