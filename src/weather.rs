use chrono::{DateTime, Local, NaiveDateTime, Timelike};
use log::{debug, info};

use crate::alerts::{self, Alert, Thresholds, LOOKAHEAD_HOURS};
use crate::errors::SearchError;
use crate::openmeteo::{forecast, geocoding};

pub struct CurrentConditions {
    pub temperature: f32,
    pub apparent: f32,
    pub humidity: f32,
    pub wind_speed: f32,
    pub weather_code: u8,
}

pub struct UpcomingHour {
    pub hour: u32,
    pub weather_code: u8,
    pub temperature: f32,
}

/// Everything one successful lookup produced.
pub struct WeatherReport {
    pub city: String,
    pub fetched_at: DateTime<Local>,
    pub current: CurrentConditions,
    pub upcoming: Vec<UpcomingHour>,
    pub alerts: Vec<Alert>,
}

/// Resolves `query` to coordinates, fetches today's forecast there and
/// evaluates alerts against the hours after the current local hour. The
/// forecast is requested in the city's own timezone, so its hourly series
/// starts at that city's midnight and the local hour indexes into it.
pub fn search(query: &str, thresholds: &Thresholds) -> Result<WeatherReport, SearchError> {
    info!("looking up \"{}\"", query);
    let matches = geocoding::Search::from_query(query)?;
    let location = matches
        .best_match()
        .ok_or_else(|| SearchError::CityNotFound(query.to_string()))?;
    debug!(
        "\"{}\" resolved to {} ({}, {})",
        query,
        location.label(),
        location.latitude,
        location.longitude
    );

    let forecast = forecast::Forecast::from_coords(location.latitude, location.longitude)?;
    let reference_hour = Local::now().hour() as usize;
    let alerts = alerts::evaluate(&forecast.hourly, reference_hour, thresholds);
    info!(
        "{}: {} alert(s) within the next {} hours",
        location.label(),
        alerts.len(),
        LOOKAHEAD_HOURS
    );
    for alert in &alerts {
        debug!("{:?} alert {} hour(s) ahead", alert.kind, alert.hours_ahead);
    }

    Ok(WeatherReport {
        city: location.label(),
        fetched_at: Local::now(),
        current: CurrentConditions {
            temperature: forecast.current.temperature_2m,
            apparent: forecast.current.apparent_temperature,
            humidity: forecast.current.relative_humidity_2m,
            wind_speed: forecast.current.wind_speed_10m,
            weather_code: forecast.current.weather_code,
        },
        upcoming: upcoming_hours(&forecast.hourly, reference_hour),
        alerts,
    })
}

fn upcoming_hours(hourly: &forecast::Hourly, reference_hour: usize) -> Vec<UpcomingHour> {
    let mut upcoming = Vec::new();
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
        upcoming.push(UpcomingHour {
            hour: hour_of_day(&hourly.time[idx], idx),
            weather_code: code,
            temperature: temp,
        });
    }
    upcoming
}

fn hour_of_day(time: &str, idx: usize) -> u32 {
    NaiveDateTime::parse_from_str(time, "%Y-%m-%dT%H:%M")
        .map(|t| t.hour())
        .unwrap_or(idx as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::openmeteo::forecast::Hourly;

    fn series(len: usize) -> Hourly {
        Hourly {
            time: (0..len).map(|h| format!("2026-08-21T{h:02}:00")).collect(),
            weather_code: vec![1; len],
            temperature_2m: (0..len).map(|h| h as f32).collect(),
        }
    }

    #[test]
    fn test_upcoming_covers_the_lookahead_window() {
        let upcoming = upcoming_hours(&series(24), 14);
        let hours: Vec<u32> = upcoming.iter().map(|u| u.hour).collect();
        assert_eq!(hours, vec![15, 16, 17, 18]);
        assert!((upcoming[0].temperature - 15.0).abs() < 1e-6);
    }

    #[test]
    fn test_upcoming_stops_at_the_series_end() {
        let upcoming = upcoming_hours(&series(24), 22);
        let hours: Vec<u32> = upcoming.iter().map(|u| u.hour).collect();
        assert_eq!(hours, vec![23]);

        assert!(upcoming_hours(&series(24), 23).is_empty());
        assert!(upcoming_hours(&series(0), 0).is_empty());
    }

    #[test]
    fn test_hour_of_day_parses_minute_precision_stamps() {
        assert_eq!(hour_of_day("2026-08-21T15:00", 3), 15);
        assert_eq!(hour_of_day("not a timestamp", 3), 3);
    }
}
