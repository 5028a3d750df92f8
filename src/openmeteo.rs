use reqwest::blocking::{Client, Response};
use serde::Serialize;

const GEOCODING_URL: &str = "https://geocoding-api.open-meteo.com/v1/search";
const FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";

fn get_web_json<T>(url: &str, query: &T) -> Result<Response, reqwest::Error>
where
    T: Serialize + ?Sized,
{
    let client = Client::builder().user_agent("meteo").build()?;
    client.get(url).query(query).send()
}

pub mod geocoding {
    use serde::Deserialize;

    use super::{get_web_json, GEOCODING_URL};

    #[derive(Deserialize, Debug)]
    pub struct Search {
        // The key is absent entirely when nothing matched.
        #[serde(default)]
        pub results: Vec<Location>,
    }

    #[derive(Deserialize, Debug)]
    pub struct Location {
        pub name: String,
        pub latitude: f64,
        pub longitude: f64,
        pub country: Option<String>,
    }

    impl Search {
        pub fn from_query(query: &str) -> Result<Search, reqwest::Error> {
            let params = [
                ("name", query),
                ("count", "1"),
                ("language", "en"),
                ("format", "json"),
            ];
            get_web_json(GEOCODING_URL, &params)?
                .error_for_status()?
                .json()
        }

        pub fn best_match(&self) -> Option<&Location> {
            self.results.first()
        }
    }

    impl Location {
        pub fn label(&self) -> String {
            match &self.country {
                Some(country) => format!("{}, {}", self.name, country),
                None => self.name.clone(),
            }
        }
    }
}

pub mod forecast {
    use serde::Deserialize;

    use super::{get_web_json, FORECAST_URL};

    #[derive(Deserialize, Debug)]
    pub struct Forecast {
        pub current: Current,
        pub hourly: Hourly,
    }

    #[derive(Deserialize, Debug)]
    pub struct Current {
        pub temperature_2m: f32,
        pub relative_humidity_2m: f32,
        pub apparent_temperature: f32,
        pub weather_code: u8,
        pub wind_speed_10m: f32,
    }

    /// Parallel series indexed by hour of the forecast day.
    #[derive(Deserialize, Debug)]
    pub struct Hourly {
        pub time: Vec<String>,
        pub weather_code: Vec<u8>,
        pub temperature_2m: Vec<f32>,
    }

    impl Forecast {
        pub fn from_coords(latitude: f64, longitude: f64) -> Result<Forecast, reqwest::Error> {
            let params = [
                ("latitude", latitude.to_string()),
                ("longitude", longitude.to_string()),
                (
                    "current",
                    "temperature_2m,relative_humidity_2m,apparent_temperature,\
                     weather_code,wind_speed_10m"
                        .to_string(),
                ),
                ("hourly", "temperature_2m,weather_code".to_string()),
                ("timezone", "auto".to_string()),
                ("forecast_days", "1".to_string()),
            ];
            get_web_json(FORECAST_URL, &params)?
                .error_for_status()?
                .json()
        }
    }
}
