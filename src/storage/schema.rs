//! Persisted document shapes and their load-time validation.
//!
//! ```text
//! carDatabase: [{ "identifier": "1234AB-1", "records": [{ "date": "01.01.2024", "hours": 2.5 }] }]
//! savedHours:  [{ "date": "01.01.2024", "totalHours": 4.0 }]
//! ```

use super::LoadReport;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An element type that can be checked field by field when loading.
pub trait Document: Serialize + Sized {
    /// Validate one array element. `None` drops the element.
    fn from_json(value: &Value, report: &mut LoadReport) -> Option<Self>;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredHourEntry {
    pub date: String,
    pub hours: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredVehicle {
    pub identifier: String,
    pub records: Vec<StoredHourEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredSavedDay {
    pub date: String,
    #[serde(rename = "totalHours")]
    pub total_hours: f64,
}

/// Numbers are accepted as JSON numbers or numeric strings.
fn number_field(obj: &serde_json::Map<String, Value>, name: &str) -> Option<f64> {
    let n = match obj.get(name)? {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    n.is_finite().then_some(n)
}

fn string_field(obj: &serde_json::Map<String, Value>, name: &str) -> Option<String> {
    let s = obj.get(name)?.as_str()?.trim();
    (!s.is_empty()).then(|| s.to_string())
}

impl Document for StoredHourEntry {
    fn from_json(value: &Value, _report: &mut LoadReport) -> Option<Self> {
        let obj = value.as_object()?;
        let date = string_field(obj, "date")?;
        let hours = number_field(obj, "hours").filter(|h| *h > 0.0)?;
        Some(Self { date, hours })
    }
}

impl Document for StoredVehicle {
    fn from_json(value: &Value, report: &mut LoadReport) -> Option<Self> {
        let obj = value.as_object()?;
        let identifier = string_field(obj, "identifier")?;
        let raw_records = obj.get("records")?.as_array()?;

        let mut records = Vec::with_capacity(raw_records.len());
        for raw in raw_records {
            match StoredHourEntry::from_json(raw, report) {
                Some(r) => records.push(r),
                None => report.dropped += 1,
            }
        }

        // a vehicle without entries is never kept
        if records.is_empty() {
            return None;
        }

        Some(Self {
            identifier,
            records,
        })
    }
}

impl Document for StoredSavedDay {
    fn from_json(value: &Value, _report: &mut LoadReport) -> Option<Self> {
        let obj = value.as_object()?;
        let date = string_field(obj, "date")?;
        let total_hours = number_field(obj, "totalHours").filter(|t| *t >= 0.0)?;
        Some(Self { date, total_hours })
    }
}
