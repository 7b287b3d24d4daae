// farmkit/src/export.rs
//
// JSON export of the current session. The document has no schema version;
// it is a one-way dump and is never read back.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use tracing::info;

use crate::errors::{FarmError, Result};
use crate::shell::Dashboard;
use crate::types::{Crop, IoTReading, RiskAssessment, Role, WeatherSnapshot};

/// Number of most recent IoT readings included in an export
pub const EXPORT_READINGS: usize = 10;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument<'a> {
    pub weather: &'a WeatherSnapshot,
    pub crops: &'a [Crop],
    pub risk_assessment: &'a RiskAssessment,
    pub iot_data: &'a [IoTReading],
    pub timestamp: String,
    pub farm_id: &'a str,
    pub exported_by: Role,
}

pub fn build_export(dashboard: &Dashboard, now: DateTime<Utc>) -> ExportDocument<'_> {
    let readings = &dashboard.iot_readings;
    let start = readings.len().saturating_sub(EXPORT_READINGS);

    ExportDocument {
        weather: &dashboard.weather,
        crops: &dashboard.crops,
        risk_assessment: &dashboard.risk,
        iot_data: &readings[start..],
        timestamp: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        farm_id: &dashboard.farm.farm_id,
        exported_by: dashboard.profile.role,
    }
}

/// `farm-data-export-YYYY-MM-DD.json`
pub fn export_filename(now: DateTime<Utc>) -> String {
    format!("farm-data-export-{}.json", now.format("%Y-%m-%d"))
}

pub fn render_export(document: &ExportDocument<'_>) -> Result<String> {
    Ok(serde_json::to_string_pretty(document)?)
}

/// Write the export into `directory`, returning the file's path
pub fn write_export(dashboard: &Dashboard, directory: &Path, now: DateTime<Utc>) -> Result<PathBuf> {
    let document = build_export(dashboard, now);
    let body = render_export(&document)?;
    let path = directory.join(export_filename(now));

    fs::write(&path, body).map_err(|source| FarmError::ExportError {
        path: path.clone(),
        source,
    })?;

    info!(
        "Exported farm data to {} ({} crops, {} readings)",
        path.display(),
        document.crops.len(),
        document.iot_data.len()
    );
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FarmConfig;
    use crate::mock::MockDataGenerator;
    use chrono::TimeZone;
    use serde_json::Value;

    fn dashboard() -> Dashboard {
        Dashboard::new(&mut MockDataGenerator::seeded(5), FarmConfig::default())
    }

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 9, 18, 10, 30, 0).unwrap()
    }

    #[test]
    fn test_document_keys() {
        let d = dashboard();
        let json: Value = serde_json::from_str(&render_export(&build_export(&d, fixed_now())).unwrap()).unwrap();

        let object = json.as_object().unwrap();
        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort();
        assert_eq!(
            keys,
            vec!["crops", "exportedBy", "farmId", "iotData", "riskAssessment", "timestamp", "weather"]
        );
        assert_eq!(json["farmId"], "FARM_001");
        assert_eq!(json["exportedBy"], "Farmer");
        assert_eq!(json["timestamp"], "2024-09-18T10:30:00.000Z");
        assert_eq!(json["crops"][0]["healthScore"], 92);
        assert_eq!(json["riskAssessment"]["overallRisk"], "Medium");
        assert!(json["iotData"][0].get("pH").is_some());
    }

    #[test]
    fn test_iot_data_is_last_ten() {
        let d = dashboard();
        let document = build_export(&d, fixed_now());

        assert_eq!(document.iot_data.len(), EXPORT_READINGS);
        assert_eq!(document.iot_data.last(), d.iot_readings.last());
        assert_eq!(document.iot_data[0], d.iot_readings[d.iot_readings.len() - EXPORT_READINGS]);
    }

    #[test]
    fn test_iot_data_with_few_readings() {
        let mut d = dashboard();
        let all = d.iot_readings.clone();
        for available in [0, 1, 7, 10, 20] {
            d.iot_readings = all[..available].to_vec();
            assert_eq!(build_export(&d, fixed_now()).iot_data.len(), available.min(EXPORT_READINGS));
        }
    }

    #[test]
    fn test_exported_by_follows_profile_role() {
        let mut d = dashboard();
        d.update_profile("Mary", Role::Agronomist);

        assert_eq!(build_export(&d, fixed_now()).exported_by, Role::Agronomist);
    }

    #[test]
    fn test_filename() {
        assert_eq!(export_filename(fixed_now()), "farm-data-export-2024-09-18.json");
    }

    #[test]
    fn test_write_export() {
        let dir = tempfile::tempdir().unwrap();
        let d = dashboard();

        let path = write_export(&d, dir.path(), fixed_now()).unwrap();

        assert_eq!(path, dir.path().join("farm-data-export-2024-09-18.json"));
        let written: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written["crops"].as_array().unwrap().len(), d.crops.len());
    }

    #[test]
    fn test_write_export_to_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");

        let err = write_export(&dashboard(), &missing, fixed_now()).unwrap_err();
        assert!(matches!(err, FarmError::ExportError { .. }));
    }
}
