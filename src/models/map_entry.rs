use serde::{Deserialize, Serialize};

/// A location row from `GET /getMaps`. Coordinates arrive as strings.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct MapEntry {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub latitude: Option<String>,
    #[serde(default)]
    pub longitude: Option<String>,
}

impl MapEntry {
    /// `(latitude, longitude)` when both parse as numbers.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        let lat = self.latitude.as_deref()?.trim().parse::<f64>().ok()?;
        let lng = self.longitude.as_deref()?.trim().parse::<f64>().ok()?;
        Some((lat, lng))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinates() {
        let entry = MapEntry {
            latitude: Some("11.5564".into()),
            longitude: Some(" 104.9282".into()),
            ..MapEntry::default()
        };
        assert_eq!(entry.coordinates(), Some((11.5564, 104.9282)));

        let missing = MapEntry { latitude: Some("11.5".into()), ..MapEntry::default() };
        assert_eq!(missing.coordinates(), None);

        let garbage = MapEntry {
            latitude: Some("north".into()),
            longitude: Some("104.9".into()),
            ..MapEntry::default()
        };
        assert_eq!(garbage.coordinates(), None);
    }
}
