use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A plant as returned inside indoor detail, creation and watering responses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plant {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub species: Option<String>,
    #[serde(default)]
    pub last_watered_at: Option<NaiveDate>,
    #[serde(default)]
    pub next_water_at: Option<NaiveDate>,
    pub watering_interval_days: u32,
    #[serde(default)]
    pub default_liters: Option<f64>,
    /// Only present in indoor detail responses
    #[serde(default)]
    pub days_since_planted: Option<i64>,
}

/// Append-only watering record, owned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WateringHistory {
    pub id: String,
    #[serde(with = "super::timestamp")]
    pub event_ts: DateTime<Utc>,
    pub liters: f64,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub ferts: Option<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fertilizer {
    pub name: String,
    pub amount: String,
}

/// Body of `POST /api/plants/{id}/water`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlantWaterRequest {
    pub liters: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ferts: Option<Vec<Fertilizer>>,
}

/// Response of `POST /api/plants/{id}/water`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterPlantResponse {
    pub plant: Plant,
    pub watering_history: WateringHistory,
}

/// Body of `POST /api/plants`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlantCreateRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub species: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indoor_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub planted_at: Option<NaiveDate>,
    pub watering_interval_days: u32,
    pub default_liters: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_water_response_parsing() {
        let json = r#"{
            "plant": {
                "id": "p1",
                "name": "Fern",
                "species": null,
                "last_watered_at": "2024-01-10",
                "next_water_at": "2024-01-17",
                "watering_interval_days": 7,
                "default_liters": 1.0
            },
            "watering_history": {
                "id": "w1",
                "event_ts": "2024-01-10T09:15:00",
                "liters": 1.5,
                "note": null,
                "ferts": null
            }
        }"#;

        let response: WaterPlantResponse = serde_json::from_str(json).unwrap();
        assert_eq!(
            response.plant.next_water_at,
            NaiveDate::from_ymd_opt(2024, 1, 17)
        );
        assert_eq!(response.plant.days_since_planted, None);
        assert_eq!(response.watering_history.liters, 1.5);
        assert_eq!(
            response.watering_history.event_ts.format("%H:%M").to_string(),
            "09:15"
        );
    }

    #[test]
    fn test_water_request_omits_empty_fields() {
        let request = PlantWaterRequest {
            liters: 1.5,
            date: None,
            note: None,
            ferts: None,
        };
        assert_eq!(serde_json::to_value(&request).unwrap(), json!({ "liters": 1.5 }));
    }
}
