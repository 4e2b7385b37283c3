use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Watering status as classified by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WateringStatus {
    Overdue,
    DueSoon,
    Ok,
}

impl WateringStatus {
    /// Returns CSS class name for color coding
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Overdue => "status-overdue",
            Self::DueSoon => "status-due-soon",
            Self::Ok => "status-ok",
        }
    }

    /// Returns the badge text, matching the wire value
    pub fn label(&self) -> &'static str {
        match self {
            Self::Overdue => "OVERDUE",
            Self::DueSoon => "DUE_SOON",
            Self::Ok => "OK",
        }
    }
}

/// A plant in the dashboard's upcoming waterings list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlantUpcoming {
    pub plant_id: String,
    pub name: String,
    #[serde(default)]
    pub next_water_at: Option<NaiveDate>,
    /// Signed day count to the next watering, negative when overdue
    #[serde(default)]
    pub due_in_days: Option<i64>,
    pub status: WateringStatus,
}

impl PlantUpcoming {
    /// Human-readable due text shown under the plant name
    pub fn due_label(&self) -> String {
        match self.due_in_days {
            Some(days) if days < 0 => format!("Vencido hace {} días", days.unsigned_abs()),
            Some(0) => "Hoy".to_string(),
            Some(days) => format!("Vence en {days} días"),
            None => "Sin fecha".to_string(),
        }
    }
}

/// Response of `GET /api/dashboard`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub indoors_total: u32,
    pub plants_total: u32,
    pub need_water_count: u32,
    #[serde(default)]
    pub upcoming: Vec<PlantUpcoming>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upcoming(due_in_days: Option<i64>) -> PlantUpcoming {
        PlantUpcoming {
            plant_id: "p1".to_string(),
            name: "Fern".to_string(),
            next_water_at: None,
            due_in_days,
            status: WateringStatus::Ok,
        }
    }

    #[test]
    fn test_due_label() {
        assert_eq!(upcoming(Some(-2)).due_label(), "Vencido hace 2 días");
        assert_eq!(upcoming(Some(0)).due_label(), "Hoy");
        assert_eq!(upcoming(Some(3)).due_label(), "Vence en 3 días");
        assert_eq!(upcoming(None).due_label(), "Sin fecha");
    }

    #[test]
    fn test_status_wire_format() {
        let status: WateringStatus = serde_json::from_str("\"DUE_SOON\"").unwrap();
        assert_eq!(status, WateringStatus::DueSoon);
        assert_eq!(
            serde_json::to_string(&WateringStatus::Overdue).unwrap(),
            "\"OVERDUE\""
        );
        assert!(serde_json::from_str::<WateringStatus>("\"LATE\"").is_err());
    }
}
