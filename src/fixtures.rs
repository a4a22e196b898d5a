#[cfg(test)]
pub mod test {
    use std::time::Duration;

    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Serialize};

    /// Durations as text such as `1s`, `250ms` or `5m`.
    pub mod duration_text {
        use serde::de::Error as _;
        use serde::{Deserialize, Deserializer, Serializer};
        use std::time::Duration;

        pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            let text = if duration.subsec_nanos() == 0 {
                format!("{}s", duration.as_secs())
            } else if duration.subsec_nanos() % 1_000_000 == 0 {
                format!("{}ms", duration.as_millis())
            } else {
                format!("{}ns", duration.as_nanos())
            };
            serializer.serialize_str(&text)
        }

        pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
        where
            D: Deserializer<'de>,
        {
            let text = String::deserialize(deserializer)?;
            parse(text.trim()).ok_or_else(|| D::Error::custom(format!("invalid duration `{text}`")))
        }

        pub fn parse(text: &str) -> Option<Duration> {
            let split = text.find(|c: char| !c.is_ascii_digit())?;
            let (number, unit) = text.split_at(split);
            let n: u64 = number.parse().ok()?;
            match unit {
                "ns" => Some(Duration::from_nanos(n)),
                "us" => Some(Duration::from_micros(n)),
                "ms" => Some(Duration::from_millis(n)),
                "s" => Some(Duration::from_secs(n)),
                "m" => Some(Duration::from_secs(n.checked_mul(60)?)),
                "h" => Some(Duration::from_secs(n.checked_mul(3600)?)),
                _ => None,
            }
        }
    }

    /// One field of every primitive kind the cascade must carry through.
    #[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
    pub struct AppConfig {
        pub count: i64,
        pub name: String,
        pub enabled: bool,
        pub ratio: f64,
        pub started_at: DateTime<Utc>,
        #[serde(with = "duration_text")]
        pub timeout: Duration,
        pub items: Vec<i64>,
    }

    impl AppConfig {
        pub fn sample() -> Self {
            AppConfig {
                count: 1,
                name: "Hello".into(),
                enabled: true,
                ratio: 10.10,
                started_at: DateTime::from_timestamp(1000, 0).unwrap(),
                timeout: Duration::from_secs(1),
                items: vec![],
            }
        }
    }

    /// The subset of [`AppConfig`] that custom files typically touch.
    #[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
    pub struct PartialAppConfig {
        pub count: i64,
        pub name: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub items: Option<Vec<i64>>,
    }

    /// A config type carrying state that never serializes.
    #[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
    pub struct WithRuntimeState {
        pub name: String,
        #[serde(skip)]
        pub runtime: u32,
    }

    #[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
    pub struct ServerConfig {
        pub host: String,
        pub port: u16,
        pub debug: bool,
        pub tags: Vec<String>,
        pub database: DbConfig,
    }

    #[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
    pub struct DbConfig {
        pub url: Option<String>,
        pub pool_size: usize,
    }

    #[test]
    fn sample_round_trips_through_json() {
        let sample = AppConfig::sample();
        let text = serde_json::to_string(&sample).unwrap();
        let back: AppConfig = serde_json::from_str(&text).unwrap();
        assert_eq!(back, sample);
    }

    #[test]
    fn duration_text_units() {
        assert_eq!(duration_text::parse("1s"), Some(Duration::from_secs(1)));
        assert_eq!(duration_text::parse("250ms"), Some(Duration::from_millis(250)));
        assert_eq!(duration_text::parse("5m"), Some(Duration::from_secs(300)));
        assert_eq!(duration_text::parse("2h"), Some(Duration::from_secs(7200)));
        assert_eq!(duration_text::parse("7ns"), Some(Duration::from_nanos(7)));
        assert_eq!(duration_text::parse("10"), None);
        assert_eq!(duration_text::parse("s"), None);
        assert_eq!(duration_text::parse("3 days"), None);
    }

    #[test]
    fn duration_serializes_as_text() {
        let sample = AppConfig {
            timeout: Duration::from_millis(1500),
            ..AppConfig::sample()
        };
        let text = serde_json::to_string(&sample).unwrap();
        assert!(text.contains(r#""timeout":"1500ms""#));
        assert!(serde_json::to_string(&AppConfig::sample()).unwrap().contains(r#""timeout":"1s""#));
    }
}
