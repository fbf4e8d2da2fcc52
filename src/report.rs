//! Machine-readable snapshot reports (`--json` output)

use polar_dash_core::EngineSnapshot;
use polar_dash_displayers::stats::{histogram, TrendLine, DEFAULT_HISTOGRAM_BINS};
use polar_dash_types::{HUMIDITY_COLUMN, TEMPERATURE_COLUMN};
use serde_json::{json, Value};

/// Snapshot mapping extended with the derived trend lines and the
/// temperature distribution
pub fn snapshot_report(snapshot: &EngineSnapshot) -> Value {
    let table = snapshot.table();
    let temperatures = table.column_values(TEMPERATURE_COLUMN).unwrap_or_default();
    let humidities = table.column_values(HUMIDITY_COLUMN).unwrap_or_default();

    let mut report = snapshot.to_json();
    report["trend"] = json!({
        "temperature": TrendLine::fit(&temperatures),
        "humidity": TrendLine::fit(&humidities),
    });
    report["distribution"] = json!(histogram(&temperatures, DEFAULT_HISTOGRAM_BINS));
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use polar_dash_core::Reading;

    #[test]
    fn test_report_before_first_tick() {
        let report = snapshot_report(&EngineSnapshot::empty());
        assert_eq!(report["latest"], Value::Null);
        assert_eq!(report["trend"]["temperature"], Value::Null);
        assert_eq!(report["distribution"], json!([]));
    }

    #[test]
    fn test_report_includes_trend() {
        let history = vec![
            Reading::parse(-27.0, 80.0, "2024-01-01 00:00:00").unwrap(),
            Reading::parse(-26.0, 82.0, "2024-01-01 00:00:10").unwrap(),
        ];
        let report = snapshot_report(&EngineSnapshot::from_history(2, history));
        assert_eq!(report["trend"]["temperature"]["slope"], 1.0);
        assert_eq!(report["trend"]["humidity"]["intercept"], 80.0);
        assert_eq!(report["history"][1]["timestamp"], "2024-01-01 00:00:10");
    }
}
