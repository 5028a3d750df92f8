//! Alert evaluation over the next few hours of an hourly forecast.

use crate::openmeteo::forecast::Hourly;

/// How many hours past the reference hour are scanned (and shown).
pub const LOOKAHEAD_HOURS: usize = 4;

/// WMO codes that count as rain: drizzle, rain, freezing rain,
/// rain showers and thunderstorms.
pub const RAIN_CODES: [u8; 16] = [
    51, 53, 55, 56, 57, 61, 63, 65, 66, 67, 80, 81, 82, 95, 96, 99,
];

/// Celsius reading above which the hour counts as mild.
pub const TEMP_THRESHOLD: f32 = 10.0;

#[derive(Debug, Clone)]
pub struct Thresholds {
    pub rain_codes: Vec<u8>,
    pub temp_threshold: f32,
}

impl Default for Thresholds {
    fn default() -> Self {
        Thresholds {
            rain_codes: RAIN_CODES.to_vec(),
            temp_threshold: TEMP_THRESHOLD,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Rain,
    Temp,
}

impl AlertKind {
    /// Stable identifier used to coalesce notifications of the same kind.
    pub fn tag(self) -> &'static str {
        match self {
            AlertKind::Rain => "rain",
            AlertKind::Temp => "temp",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    pub kind: AlertKind,
    pub hours_ahead: usize,
    pub message: String,
}

/// Scans the `LOOKAHEAD_HOURS` slots after `reference_hour` and returns at
/// most one alert per kind, each reporting its earliest matching hour. The
/// slot at `reference_hour` itself is never inspected. A series too short to
/// cover the window simply ends the scan.
pub fn evaluate(hourly: &Hourly, reference_hour: usize, thresholds: &Thresholds) -> Vec<Alert> {
    let mut alerts = Vec::new();
    let mut rain_pending = true;
    let mut temp_pending = true;

    for offset in 1..=LOOKAHEAD_HOURS {
        let idx = reference_hour + offset;
        if idx >= hourly.time.len() {
            break;
        }
        let (Some(&code), Some(&temp)) =
            (hourly.weather_code.get(idx), hourly.temperature_2m.get(idx))
        else {
            break;
        };

        if rain_pending && thresholds.rain_codes.contains(&code) {
            rain_pending = false;
            alerts.push(Alert {
                kind: AlertKind::Rain,
                hours_ahead: offset,
                message: format!("Rain expected in {} {}", offset, hour_unit(offset)),
            });
        }

        if temp_pending && temp > thresholds.temp_threshold {
            temp_pending = false;
            alerts.push(Alert {
                kind: AlertKind::Temp,
                hours_ahead: offset,
                message: format!(
                    "Mild {}°C expected in {} {}",
                    temp.round() as i32,
                    offset,
                    hour_unit(offset)
                ),
            });
        }

        if !rain_pending && !temp_pending {
            break;
        }
    }

    alerts
}

fn hour_unit(hours: usize) -> &'static str {
    if hours > 1 {
        "hours"
    } else {
        "hour"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Builds an hourly series from (weather_code, temperature) pairs,
    /// one slot per hour starting at midnight.
    fn hourly(slots: &[(u8, f32)]) -> Hourly {
        Hourly {
            time: (0..slots.len())
                .map(|h| format!("2026-08-21T{h:02}:00"))
                .collect(),
            weather_code: slots.iter().map(|s| s.0).collect(),
            temperature_2m: slots.iter().map(|s| s.1).collect(),
        }
    }

    fn find(alerts: &[Alert], kind: AlertKind) -> Option<&Alert> {
        alerts.iter().find(|a| a.kind == kind)
    }

    #[test]
    fn test_quiet_forecast_yields_no_alerts() {
        let series = hourly(&[(0, 8.0), (1, 9.0), (2, 7.5), (3, 6.0), (0, 5.0)]);
        let alerts = evaluate(&series, 0, &Thresholds::default());
        assert!(alerts.is_empty(), "clear skies below threshold should stay quiet");
    }

    #[test]
    fn test_rain_and_temp_found_independently() {
        let series = hourly(&[(0, 5.0), (0, 5.0), (61, 5.0), (0, 15.0), (0, 5.0)]);
        let alerts = evaluate(&series, 0, &Thresholds::default());

        assert_eq!(alerts.len(), 2);
        assert_eq!(find(&alerts, AlertKind::Rain).map(|a| a.hours_ahead), Some(2));
        assert_eq!(find(&alerts, AlertKind::Temp).map(|a| a.hours_ahead), Some(3));
    }

    #[test]
    fn test_earliest_rain_wins() {
        let series = hourly(&[(0, 5.0), (61, 5.0), (0, 5.0), (80, 5.0), (0, 5.0)]);
        let alerts = evaluate(&series, 0, &Thresholds::default());

        assert_eq!(alerts.len(), 1, "a second rainy hour must not add an alert");
        assert_eq!(alerts[0].hours_ahead, 1);
    }

    #[test]
    fn test_rain_match_does_not_stop_temp_scan() {
        let series = hourly(&[(0, 5.0), (61, 5.0), (0, 5.0), (0, 5.0), (0, 16.0)]);
        let alerts = evaluate(&series, 0, &Thresholds::default());

        assert_eq!(find(&alerts, AlertKind::Rain).map(|a| a.hours_ahead), Some(1));
        assert_eq!(find(&alerts, AlertKind::Temp).map(|a| a.hours_ahead), Some(4));
    }

    #[test]
    fn test_offsets_are_relative_to_reference_hour() {
        let series = hourly(&[(0, 5.0), (0, 5.0), (0, 5.0), (61, 5.0), (0, 5.0)]);
        let alerts = evaluate(&series, 2, &Thresholds::default());

        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].hours_ahead, 1, "hours count from the reference hour");
    }

    #[test]
    fn test_reference_slot_is_ignored() {
        let series = hourly(&[(95, 25.0), (0, 5.0), (0, 5.0), (0, 5.0), (0, 5.0)]);
        let alerts = evaluate(&series, 0, &Thresholds::default());
        assert!(alerts.is_empty(), "conditions at the reference hour are current, not upcoming");
    }

    #[test]
    fn test_matches_past_the_window_are_ignored() {
        let mut slots = vec![(0u8, 5.0f32); 8];
        slots[5] = (61, 15.0);
        let alerts = evaluate(&hourly(&slots), 0, &Thresholds::default());
        assert!(alerts.is_empty(), "slot 5 is outside the four hour window");
    }

    #[test]
    fn test_short_series_ends_the_scan() {
        let series = hourly(&[(0, 5.0), (0, 5.0), (0, 5.0)]);
        let alerts = evaluate(&series, 2, &Thresholds::default());
        assert!(alerts.is_empty());

        let alerts = evaluate(&series, 10, &Thresholds::default());
        assert!(alerts.is_empty(), "a reference past the series end is not an error");
    }

    #[test]
    fn test_mismatched_series_lengths_degrade_quietly() {
        let series = Hourly {
            time: (0..6).map(|h| format!("2026-08-21T{h:02}:00")).collect(),
            weather_code: vec![0, 0],
            temperature_2m: vec![5.0, 5.0, 5.0, 5.0, 5.0, 5.0],
        };
        let alerts = evaluate(&series, 0, &Thresholds::default());
        assert!(alerts.is_empty(), "truncated series must not panic or alert");
    }

    #[test]
    fn test_unlisted_code_is_not_rain() {
        let series = hourly(&[(0, 5.0), (42, 5.0), (3, 5.0), (0, 5.0), (0, 5.0)]);
        let alerts = evaluate(&series, 0, &Thresholds::default());
        assert!(alerts.is_empty());
    }

    #[test]
    fn test_threshold_is_exclusive_and_configurable() {
        let series = hourly(&[(0, 5.0), (0, 10.0), (0, 15.0), (0, 5.0), (0, 5.0)]);

        let alerts = evaluate(&series, 0, &Thresholds::default());
        assert_eq!(
            find(&alerts, AlertKind::Temp).map(|a| a.hours_ahead),
            Some(2),
            "a reading equal to the threshold does not fire"
        );

        let strict = Thresholds {
            temp_threshold: 20.0,
            ..Thresholds::default()
        };
        assert!(evaluate(&series, 0, &strict).is_empty());
    }

    #[test]
    fn test_messages_pluralize_hours() {
        let series = hourly(&[(0, 5.0), (61, 5.0), (0, 15.4), (0, 5.0), (0, 5.0)]);
        let alerts = evaluate(&series, 0, &Thresholds::default());

        let rain = find(&alerts, AlertKind::Rain).unwrap();
        assert_eq!(rain.message, "Rain expected in 1 hour");

        let temp = find(&alerts, AlertKind::Temp).unwrap();
        assert_eq!(temp.message, "Mild 15°C expected in 2 hours");
    }

    #[test]
    fn test_evaluation_is_idempotent() {
        let series = hourly(&[(0, 5.0), (61, 12.0), (0, 5.0), (0, 5.0), (0, 5.0)]);
        let thresholds = Thresholds::default();

        let first = evaluate(&series, 0, &thresholds);
        let second = evaluate(&series, 0, &thresholds);
        assert_eq!(first, second);
    }
}
