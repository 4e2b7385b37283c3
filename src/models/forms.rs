//! Client-side validation of modal and edit-form input.
//!
//! Each form holds the raw strings typed by the user and turns them into a request body, or an
//! `AppError::Validation` that blocks submission before any network call.

use super::{
    error::AppError,
    indoor::{IndoorCreateRequest, IndoorDetail, IndoorUpdateRequest},
    plant::{PlantCreateRequest, PlantWaterRequest},
};
use std::collections::BTreeMap;

const DEFAULT_LITERS: &str = "1";
const DEFAULT_INTERVAL_DAYS: &str = "7";

fn parse_positive(input: &str) -> Option<f64> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v > 0.0)
}

fn non_blank(input: &str) -> Option<String> {
    let trimmed = input.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn required_name(input: &str) -> Result<String, AppError> {
    non_blank(input).ok_or_else(|| AppError::Validation("El nombre es obligatorio".to_string()))
}

/// Water-plant modal fields
#[derive(Clone, Debug, PartialEq)]
pub struct WaterForm {
    pub liters: String,
    pub note: String,
}

impl Default for WaterForm {
    fn default() -> Self {
        Self {
            liters: DEFAULT_LITERS.to_string(),
            note: String::new(),
        }
    }
}

impl WaterForm {
    pub fn validate(&self) -> Result<PlantWaterRequest, AppError> {
        let liters = parse_positive(&self.liters).ok_or_else(|| {
            AppError::Validation("Por favor ingresa una cantidad válida de litros".to_string())
        })?;

        Ok(PlantWaterRequest {
            liters,
            date: None,
            note: non_blank(&self.note),
            ferts: None,
        })
    }
}

/// Create-indoor modal fields
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CreateIndoorForm {
    pub name: String,
}

impl CreateIndoorForm {
    pub fn validate(&self) -> Result<IndoorCreateRequest, AppError> {
        Ok(IndoorCreateRequest {
            name: required_name(&self.name)?,
        })
    }
}

/// Create-plant modal fields. Blank interval and liters fall back to the backend defaults.
#[derive(Clone, Debug, PartialEq)]
pub struct CreatePlantForm {
    pub name: String,
    pub species: String,
    pub watering_interval_days: String,
    pub default_liters: String,
    pub indoor_id: Option<String>,
}

impl CreatePlantForm {
    pub fn for_indoor(indoor_id: Option<String>) -> Self {
        Self {
            name: String::new(),
            species: String::new(),
            watering_interval_days: DEFAULT_INTERVAL_DAYS.to_string(),
            default_liters: DEFAULT_LITERS.to_string(),
            indoor_id,
        }
    }

    pub fn validate(&self) -> Result<PlantCreateRequest, AppError> {
        let name = required_name(&self.name)?;

        let interval = non_blank(&self.watering_interval_days)
            .unwrap_or_else(|| DEFAULT_INTERVAL_DAYS.to_string());
        let watering_interval_days = interval
            .parse::<u32>()
            .ok()
            .filter(|days| *days > 0)
            .ok_or_else(|| {
                AppError::Validation(
                    "El intervalo de riego debe ser un número entero de días mayor que 0"
                        .to_string(),
                )
            })?;

        let liters =
            non_blank(&self.default_liters).unwrap_or_else(|| DEFAULT_LITERS.to_string());
        let default_liters = parse_positive(&liters).ok_or_else(|| {
            AppError::Validation("Por favor ingresa una cantidad válida de litros".to_string())
        })?;

        Ok(PlantCreateRequest {
            name,
            species: non_blank(&self.species),
            indoor_id: self.indoor_id.as_deref().and_then(non_blank),
            planted_at: None,
            watering_interval_days,
            default_liters,
            notes: None,
        })
    }
}

impl Default for CreatePlantForm {
    fn default() -> Self {
        Self::for_indoor(None)
    }
}

/// Free-form settings of an indoor edited through text inputs
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum IndoorField {
    Name,
    TempC,
    Humidity,
    FanLocation,
    LightHeightCm,
    LightPowerPct,
    LightSchedule,
}

impl IndoorField {
    pub const ENVIRONMENT: [Self; 3] = [Self::TempC, Self::Humidity, Self::FanLocation];
    pub const LIGHT: [Self; 3] = [Self::LightHeightCm, Self::LightPowerPct, Self::LightSchedule];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Nombre",
            Self::TempC => "Temperatura (°C)",
            Self::Humidity => "Humedad (%)",
            Self::FanLocation => "Ubicación Ventilador",
            Self::LightHeightCm => "Altura Luz (cm)",
            Self::LightPowerPct => "Potencia Luz (%)",
            Self::LightSchedule => "Horario Luz",
        }
    }

    /// HTML input type
    pub fn input_type(&self) -> &'static str {
        match self {
            Self::TempC | Self::Humidity | Self::LightHeightCm | Self::LightPowerPct => "number",
            Self::Name | Self::FanLocation | Self::LightSchedule => "text",
        }
    }

    /// Current value as shown in an input, empty when unset
    pub fn current(&self, indoor: &IndoorDetail) -> String {
        let number = |v: Option<f64>| v.map(|v| v.to_string()).unwrap_or_default();
        match self {
            Self::Name => indoor.name.clone(),
            Self::TempC => number(indoor.temp_c),
            Self::Humidity => number(indoor.humidity),
            Self::FanLocation => indoor.fan_location.clone().unwrap_or_default(),
            Self::LightHeightCm => number(indoor.light_height_cm),
            Self::LightPowerPct => indoor
                .light_power_pct
                .map(|v| v.to_string())
                .unwrap_or_default(),
            Self::LightSchedule => indoor.light_schedule.clone().unwrap_or_default(),
        }
    }

    /// Current value for read-only display
    pub fn display(&self, indoor: &IndoorDetail) -> String {
        let value = self.current(indoor);
        if value.is_empty() {
            "—".to_string()
        } else if *self == Self::LightPowerPct {
            format!("{value}%")
        } else {
            value
        }
    }
}

/// On/off settings of an indoor
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum IndoorToggle {
    ExtractorTop,
    ExtractorBottom,
    Fan,
}

impl IndoorToggle {
    pub const ALL: [Self; 3] = [Self::ExtractorTop, Self::ExtractorBottom, Self::Fan];

    pub fn label(&self) -> &'static str {
        match self {
            Self::ExtractorTop => "Extractor Arriba",
            Self::ExtractorBottom => "Extractor Abajo",
            Self::Fan => "Ventilador",
        }
    }

    pub fn current(&self, indoor: &IndoorDetail) -> bool {
        match self {
            Self::ExtractorTop => indoor.extractor_top,
            Self::ExtractorBottom => indoor.extractor_bottom,
            Self::Fan => indoor.fan,
        }
    }
}

/// Pending edits over an `IndoorDetail`. Only touched fields end up in the update request.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IndoorDraft {
    fields: BTreeMap<IndoorField, String>,
    toggles: BTreeMap<IndoorToggle, bool>,
}

impl IndoorDraft {
    pub fn set_field(&mut self, field: IndoorField, value: impl Into<String>) {
        self.fields.insert(field, value.into());
    }

    pub fn set_toggle(&mut self, toggle: IndoorToggle, value: bool) {
        self.toggles.insert(toggle, value);
    }

    /// Edited value, or the indoor's current one
    pub fn field_value(&self, field: IndoorField, indoor: &IndoorDetail) -> String {
        self.fields
            .get(&field)
            .cloned()
            .unwrap_or_else(|| field.current(indoor))
    }

    pub fn toggle_value(&self, toggle: IndoorToggle, indoor: &IndoorDetail) -> bool {
        self.toggles
            .get(&toggle)
            .copied()
            .unwrap_or_else(|| toggle.current(indoor))
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.toggles.is_empty()
    }

    pub fn to_request(&self) -> Result<IndoorUpdateRequest, AppError> {
        let mut request = IndoorUpdateRequest::default();

        for (field, raw) in &self.fields {
            match field {
                IndoorField::Name => request.name = Some(required_name(raw)?),
                IndoorField::TempC => request.temp_c = Some(parse_nullable_number(*field, raw)?),
                IndoorField::Humidity => {
                    request.humidity = Some(parse_nullable_number(*field, raw)?);
                }
                IndoorField::LightHeightCm => {
                    request.light_height_cm = Some(parse_nullable_number(*field, raw)?);
                }
                IndoorField::FanLocation => request.fan_location = Some(non_blank(raw)),
                IndoorField::LightSchedule => request.light_schedule = Some(non_blank(raw)),
                IndoorField::LightPowerPct => {
                    if non_blank(raw).is_some() {
                        request.light_power_pct = Some(parse_percentage(*field, raw)?);
                    }
                }
            }
        }

        for (toggle, value) in &self.toggles {
            let value = Some(*value);
            match toggle {
                IndoorToggle::ExtractorTop => request.extractor_top = value,
                IndoorToggle::ExtractorBottom => request.extractor_bottom = value,
                IndoorToggle::Fan => request.fan = value,
            }
        }

        Ok(request)
    }
}

/// Blank clears the value; anything else must be a finite number.
fn parse_nullable_number(field: IndoorField, raw: &str) -> Result<Option<f64>, AppError> {
    match non_blank(raw) {
        None => Ok(None),
        Some(value) => value
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .map(Some)
            .ok_or_else(|| AppError::Validation(format!("{}: número inválido", field.label()))),
    }
}

fn parse_percentage(field: IndoorField, raw: &str) -> Result<u32, AppError> {
    raw.trim()
        .parse::<u32>()
        .ok()
        .filter(|pct| *pct <= 100)
        .ok_or_else(|| {
            AppError::Validation(format!("{} debe estar entre 0 y 100", field.label()))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indoor() -> IndoorDetail {
        IndoorDetail {
            id: "i1".to_string(),
            name: "Carpa".to_string(),
            temp_c: Some(24.5),
            humidity: None,
            fan_location: Some("arriba".to_string()),
            extractor_top: true,
            extractor_bottom: false,
            fan: false,
            light_height_cm: None,
            light_power_pct: Some(80),
            light_schedule: None,
        }
    }

    #[test]
    fn test_water_form_rejects_zero_and_blank() {
        for liters in ["0", "", "  ", "-1", "abc", "NaN"] {
            let form = WaterForm {
                liters: liters.to_string(),
                note: String::new(),
            };
            assert!(
                matches!(form.validate(), Err(AppError::Validation(_))),
                "liters {liters:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_water_form_builds_request() {
        let form = WaterForm {
            liters: " 1.5 ".to_string(),
            note: "  con fertilizante ".to_string(),
        };
        let request = form.validate().unwrap();
        assert_eq!(request.liters, 1.5);
        assert_eq!(request.note.as_deref(), Some("con fertilizante"));

        let request = WaterForm::default().validate().unwrap();
        assert_eq!(request.liters, 1.0);
        assert_eq!(request.note, None);
    }

    #[test]
    fn test_create_indoor_requires_name() {
        assert!(CreateIndoorForm::default().validate().is_err());
        let request = CreateIndoorForm {
            name: " Armario ".to_string(),
        }
        .validate()
        .unwrap();
        assert_eq!(request.name, "Armario");
    }

    #[test]
    fn test_create_plant_defaults_and_validation() {
        let mut form = CreatePlantForm::for_indoor(Some("i1".to_string()));
        assert!(form.validate().is_err());

        form.name = "Monstera".to_string();
        form.watering_interval_days = String::new();
        form.default_liters = String::new();
        let request = form.validate().unwrap();
        assert_eq!(request.watering_interval_days, 7);
        assert_eq!(request.default_liters, 1.0);
        assert_eq!(request.indoor_id.as_deref(), Some("i1"));
        assert_eq!(request.species, None);

        form.watering_interval_days = "0".to_string();
        assert!(form.validate().is_err());

        form.watering_interval_days = "3".to_string();
        form.default_liters = "0".to_string();
        assert!(form.validate().is_err());
    }

    #[test]
    fn test_draft_only_sends_touched_fields() {
        let indoor = indoor();
        let mut draft = IndoorDraft::default();
        assert!(draft.is_empty());
        assert!(draft.to_request().unwrap().is_empty());

        draft.set_field(IndoorField::TempC, "");
        draft.set_field(IndoorField::Humidity, "55");
        draft.set_toggle(IndoorToggle::Fan, true);

        let request = draft.to_request().unwrap();
        assert_eq!(request.temp_c, Some(None));
        assert_eq!(request.humidity, Some(Some(55.0)));
        assert_eq!(request.fan, Some(true));
        assert_eq!(request.extractor_top, None);
        assert_eq!(request.light_power_pct, None);

        assert_eq!(draft.field_value(IndoorField::Humidity, &indoor), "55");
        assert_eq!(draft.field_value(IndoorField::FanLocation, &indoor), "arriba");
        assert!(draft.toggle_value(IndoorToggle::ExtractorTop, &indoor));
        assert!(draft.toggle_value(IndoorToggle::Fan, &indoor));
    }

    #[test]
    fn test_draft_validates_numbers() {
        let mut draft = IndoorDraft::default();
        draft.set_field(IndoorField::LightPowerPct, "120");
        assert!(matches!(draft.to_request(), Err(AppError::Validation(_))));

        draft.set_field(IndoorField::LightPowerPct, "100");
        draft.set_field(IndoorField::LightHeightCm, "treinta");
        let err = draft.to_request().unwrap_err();
        assert_eq!(err.to_string(), "Altura Luz (cm): número inválido");
    }

    #[test]
    fn test_field_display() {
        let indoor = indoor();
        assert_eq!(IndoorField::TempC.display(&indoor), "24.5");
        assert_eq!(IndoorField::Humidity.display(&indoor), "—");
        assert_eq!(IndoorField::LightPowerPct.display(&indoor), "80%");
    }
}
