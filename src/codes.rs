//! WMO weather interpretation codes as reported by Open-Meteo.

pub fn glyph(code: u8) -> &'static str {
    match code {
        0 => "☀",
        1 => "🌤",
        2 => "⛅",
        3 => "☁",
        45 | 48 => "🌫",
        51 | 53 | 80 => "🌦",
        55 | 56 | 57 | 61 | 63 | 65 | 66 | 67 | 81 => "🌧",
        71 | 73 | 77 | 85 | 86 => "🌨",
        75 => "❄",
        82 | 95 | 96 | 99 => "⛈",
        _ => "❓",
    }
}

pub fn description(code: u8) -> &'static str {
    match code {
        0 => "Clear sky",
        1 => "Mainly clear",
        2 => "Partly cloudy",
        3 => "Overcast",
        45 => "Fog",
        48 => "Depositing rime fog",
        51 => "Light drizzle",
        53 => "Moderate drizzle",
        55 => "Dense drizzle",
        56 => "Light freezing drizzle",
        57 => "Dense freezing drizzle",
        61 => "Slight rain",
        63 => "Moderate rain",
        65 => "Heavy rain",
        66 => "Light freezing rain",
        67 => "Heavy freezing rain",
        71 => "Slight snowfall",
        73 => "Moderate snowfall",
        75 => "Heavy snowfall",
        77 => "Snow grains",
        80 => "Slight rain showers",
        81 => "Moderate rain showers",
        82 => "Violent rain showers",
        85 => "Slight snow showers",
        86 => "Heavy snow showers",
        95 => "Thunderstorm",
        96 => "Thunderstorm with slight hail",
        99 => "Thunderstorm with heavy hail",
        _ => "Unknown conditions",
    }
}

#[test]
fn test_glyph_known_codes() {
    assert_eq!(glyph(0), "☀");
    assert_eq!(glyph(3), "☁");
    assert_eq!(glyph(63), "🌧");
    assert_eq!(glyph(95), "⛈");
}

#[test]
fn test_glyph_unknown_code() {
    assert_eq!(glyph(42), "❓");
    assert_eq!(glyph(255), "❓");
}

#[test]
fn test_description_known_codes() {
    assert_eq!(description(0), "Clear sky");
    assert_eq!(description(48), "Depositing rime fog");
    assert_eq!(description(99), "Thunderstorm with heavy hail");
}

#[test]
fn test_description_unknown_code() {
    assert_eq!(description(42), "Unknown conditions");
}

#[test]
fn test_rainy_codes_have_wet_glyphs() {
    for code in crate::alerts::RAIN_CODES {
        assert_ne!(glyph(code), "❓", "code {code} should map to a glyph");
    }
}
