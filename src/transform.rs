use std::collections::HashMap;

use serde::Serialize;

use crate::fetcher::{Parameter, RawLocation};

/// Flattened weather for one city, built fresh per request.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CityWeather {
    pub name: String,
    pub condition: String,
    pub pop: String,
    pub min_temp: String,
    pub max_temp: String,
}

/// Reshape the raw location list into one `CityWeather` per location,
/// preserving input order. Pure: no I/O, no shared state.
pub fn to_city_weather(locations: Vec<RawLocation>) -> Vec<CityWeather> {
    locations.into_iter().map(project_location).collect()
}

fn project_location(location: RawLocation) -> CityWeather {
    // Only the first time entry of each element is authoritative; later
    // entries cover subsequent 12-hour windows and are ignored here.
    let elements: HashMap<String, Parameter> = location
        .weather_element
        .into_iter()
        .filter_map(|element| {
            element
                .time
                .into_iter()
                .next()
                .map(|entry| (element.element_name, entry.parameter))
        })
        .collect();

    let condition = elements
        .get("Wx")
        .map(|p| match p.unit.as_deref() {
            Some(unit) => format!("{}{}", p.name, unit),
            None => p.name.clone(),
        })
        .unwrap_or_else(|| "N/A".to_string());

    let pop = elements
        .get("PoP")
        .map(|p| format!("{}%", p.name))
        .unwrap_or_else(|| "0%".to_string());

    let min_temp = elements
        .get("MinT")
        .map(|p| format!("{}°C", p.name))
        .unwrap_or_default();

    let max_temp = elements
        .get("MaxT")
        .map(|p| format!("{}°C", p.name))
        .unwrap_or_default();

    CityWeather {
        name: location.location_name,
        condition,
        pop,
        min_temp,
        max_temp,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetcher::{TimeEntry, WeatherElement};

    fn element(name: &str, value: &str, unit: Option<&str>) -> WeatherElement {
        WeatherElement {
            element_name: name.to_string(),
            time: vec![TimeEntry {
                parameter: Parameter {
                    name: value.to_string(),
                    unit: unit.map(str::to_string),
                },
            }],
        }
    }

    fn location(name: &str, elements: Vec<WeatherElement>) -> RawLocation {
        RawLocation {
            location_name: name.to_string(),
            weather_element: elements,
        }
    }

    #[test]
    fn test_full_element_set() {
        let input = vec![location(
            "臺北市",
            vec![
                element("Wx", "晴", None),
                element("PoP", "20", Some("百分比")),
                element("MinT", "18", Some("C")),
                element("MaxT", "25", Some("C")),
            ],
        )];

        let cities = to_city_weather(input);
        assert_eq!(cities.len(), 1);
        assert_eq!(cities[0].name, "臺北市");
        assert_eq!(cities[0].condition, "晴");
        assert_eq!(cities[0].pop, "20%");
        assert_eq!(cities[0].min_temp, "18°C");
        assert_eq!(cities[0].max_temp, "25°C");
    }

    #[test]
    fn test_missing_pop_defaults_to_zero_percent() {
        let input = vec![location(
            "新北市",
            vec![
                element("Wx", "多雲", None),
                element("MinT", "17", Some("C")),
                element("MaxT", "22", Some("C")),
            ],
        )];

        let cities = to_city_weather(input);
        assert_eq!(cities[0].pop, "0%");
    }

    #[test]
    fn test_missing_temps_yield_empty_strings() {
        let input = vec![location("桃園市", vec![element("Wx", "陰", None)])];

        let cities = to_city_weather(input);
        assert_eq!(cities[0].min_temp, "");
        assert_eq!(cities[0].max_temp, "");
    }

    #[test]
    fn test_missing_wx_defaults_to_na() {
        let input = vec![location("臺中市", vec![element("PoP", "40", None)])];

        let cities = to_city_weather(input);
        assert_eq!(cities[0].condition, "N/A");
        assert_eq!(cities[0].pop, "40%");
    }

    #[test]
    fn test_empty_element_list_uses_all_defaults() {
        let input = vec![location("連江縣", vec![])];

        let cities = to_city_weather(input);
        assert_eq!(
            cities[0],
            CityWeather {
                name: "連江縣".to_string(),
                condition: "N/A".to_string(),
                pop: "0%".to_string(),
                min_temp: "".to_string(),
                max_temp: "".to_string(),
            }
        );
    }

    #[test]
    fn test_empty_time_list_treated_as_absent_element() {
        let input = vec![location(
            "金門縣",
            vec![WeatherElement {
                element_name: "Wx".to_string(),
                time: vec![],
            }],
        )];

        let cities = to_city_weather(input);
        assert_eq!(cities[0].condition, "N/A");
    }

    #[test]
    fn test_only_first_time_entry_is_used() {
        let input = vec![location(
            "高雄市",
            vec![WeatherElement {
                element_name: "Wx".to_string(),
                time: vec![
                    TimeEntry {
                        parameter: Parameter {
                            name: "晴".to_string(),
                            unit: None,
                        },
                    },
                    TimeEntry {
                        parameter: Parameter {
                            name: "陰短暫雨".to_string(),
                            unit: None,
                        },
                    },
                ],
            }],
        )];

        let cities = to_city_weather(input);
        assert_eq!(cities[0].condition, "晴");
    }

    #[test]
    fn test_output_order_matches_input_order() {
        let names = ["宜蘭縣", "花蓮縣", "臺東縣", "澎湖縣", "基隆市"];
        let input: Vec<RawLocation> = names
            .iter()
            .map(|name| location(name, vec![element("Wx", "晴", None)]))
            .collect();

        let cities = to_city_weather(input);
        let output_names: Vec<&str> = cities.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(output_names, names);

        // Reversed input must come out reversed too.
        let reversed: Vec<RawLocation> = names
            .iter()
            .rev()
            .map(|name| location(name, vec![element("Wx", "晴", None)]))
            .collect();
        let cities = to_city_weather(reversed);
        let output_names: Vec<&str> = cities.iter().map(|c| c.name.as_str()).collect();
        let expected: Vec<&str> = names.iter().rev().copied().collect();
        assert_eq!(output_names, expected);
    }

    #[test]
    fn test_serializes_with_camel_case_keys() {
        let city = CityWeather {
            name: "臺北市".to_string(),
            condition: "晴".to_string(),
            pop: "20%".to_string(),
            min_temp: "18°C".to_string(),
            max_temp: "25°C".to_string(),
        };

        let json = serde_json::to_value(&city).unwrap();
        assert_eq!(json["minTemp"], "18°C");
        assert_eq!(json["maxTemp"], "25°C");
        assert_eq!(json["pop"], "20%");
    }
}
