use super::plant::Plant;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Row of `GET /api/indoors`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndoorListItem {
    pub id: String,
    pub name: String,
    pub plants_count: u32,
}

impl IndoorListItem {
    pub fn plants_label(&self) -> String {
        if self.plants_count == 1 {
            "1 planta".to_string()
        } else {
            format!("{} plantas", self.plants_count)
        }
    }
}

/// Environmental settings of a growing space
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndoorDetail {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub temp_c: Option<f64>,
    #[serde(default)]
    pub humidity: Option<f64>,
    #[serde(default)]
    pub fan_location: Option<String>,
    #[serde(default)]
    pub extractor_top: bool,
    #[serde(default)]
    pub extractor_bottom: bool,
    #[serde(default)]
    pub fan: bool,
    #[serde(default)]
    pub light_height_cm: Option<f64>,
    #[serde(default)]
    pub light_power_pct: Option<u32>,
    #[serde(default)]
    pub light_schedule: Option<String>,
}

/// Free-text log line attached to an indoor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndoorHistoryEvent {
    #[serde(with = "super::timestamp")]
    pub event_ts: DateTime<Utc>,
    pub message: String,
}

/// Response of `GET /api/indoors/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndoorDetailResponse {
    pub indoor: IndoorDetail,
    #[serde(default)]
    pub plants: Vec<Plant>,
    #[serde(default)]
    pub history: Vec<IndoorHistoryEvent>,
}

/// Response of `PATCH /api/indoors/{id}`: either the full detail payload or the bare indoor.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum IndoorUpdateResponse {
    Full(IndoorDetailResponse),
    Indoor(IndoorDetail),
}

impl IndoorUpdateResponse {
    /// The updated indoor, whichever shape the backend sent
    pub fn indoor(&self) -> &IndoorDetail {
        match self {
            Self::Full(detail) => &detail.indoor,
            Self::Indoor(indoor) => indoor,
        }
    }
}

/// Body of `POST /api/indoors`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndoorCreateRequest {
    pub name: String,
}

/// Body of `PATCH /api/indoors/{id}`.
///
/// Absent fields are left untouched by the backend. For nullable settings the inner `None`
/// is sent as an explicit `null`, clearing the value.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct IndoorUpdateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temp_c: Option<Option<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub humidity: Option<Option<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fan_location: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extractor_top: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extractor_bottom: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fan: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub light_height_cm: Option<Option<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub light_power_pct: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub light_schedule: Option<Option<String>>,
}

impl IndoorUpdateRequest {
    /// True when no field would be sent
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_plants_label() {
        let mut item = IndoorListItem {
            id: "i1".to_string(),
            name: "Carpa".to_string(),
            plants_count: 1,
        };
        assert_eq!(item.plants_label(), "1 planta");
        item.plants_count = 0;
        assert_eq!(item.plants_label(), "0 plantas");
    }

    #[test]
    fn test_update_request_distinguishes_clear_from_unchanged() {
        let request = IndoorUpdateRequest {
            temp_c: Some(None),
            humidity: Some(Some(55.5)),
            fan: Some(true),
            ..Default::default()
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({ "temp_c": null, "humidity": 55.5, "fan": true })
        );
        assert!(IndoorUpdateRequest::default().is_empty());
        assert!(!request.is_empty());
    }

    #[test]
    fn test_indoor_detail_with_nulls() {
        let json = r#"{
            "id": "3f1c",
            "name": "Carpa 80x80",
            "temp_c": null,
            "humidity": 60.0,
            "fan_location": null,
            "extractor_top": true,
            "extractor_bottom": false,
            "fan": true,
            "light_height_cm": null,
            "light_power_pct": null,
            "light_schedule": "18/6"
        }"#;

        let indoor: IndoorDetail = serde_json::from_str(json).unwrap();
        assert_eq!(indoor.temp_c, None);
        assert_eq!(indoor.humidity, Some(60.0));
        assert!(indoor.extractor_top);
        assert_eq!(indoor.light_power_pct, None);
        assert_eq!(indoor.light_schedule.as_deref(), Some("18/6"));
    }

    #[test]
    fn test_update_response_accepts_bare_indoor() {
        let json = r#"{
            "id": "i1",
            "name": "Carpa",
            "temp_c": 22.0,
            "fan": true,
            "light_power_pct": 80
        }"#;

        let response: IndoorUpdateResponse = serde_json::from_str(json).unwrap();
        assert!(matches!(response, IndoorUpdateResponse::Indoor(_)));
        assert_eq!(response.indoor().name, "Carpa");
        assert_eq!(response.indoor().light_power_pct, Some(80));
        assert!(response.indoor().fan);
    }

    #[test]
    fn test_update_response_accepts_full_detail() {
        let json = r#"{
            "indoor": { "id": "i1", "name": "Carpa", "humidity": 58.5 },
            "plants": [],
            "history": [
                { "event_ts": "2025-03-01T08:00:00", "message": "Humedad actualizada" }
            ]
        }"#;

        let response: IndoorUpdateResponse = serde_json::from_str(json).unwrap();
        let IndoorUpdateResponse::Full(detail) = &response else {
            panic!("expected the full detail payload");
        };
        assert_eq!(detail.history.len(), 1);
        assert_eq!(response.indoor().humidity, Some(58.5));
    }
}
