use serde::{de, Deserialize, Deserializer, Serialize};

/// Coarse polarity of a piece of review text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        }
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SentimentLabel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "positive" => Ok(Self::Positive),
            "negative" => Ok(Self::Negative),
            "neutral" => Ok(Self::Neutral),
            other => Err(format!("unknown sentiment label '{other}'")),
        }
    }
}

/// A customer review of a dealership, as exchanged with the review backend.
///
/// Every field except `review` tolerates being absent in incoming JSON.
/// `dealership` and `car_year` also accept numeric strings, and `""` as
/// their empty value.
/// `sentiment` is filled in by the analyzer before the record is returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DealerReview {
    #[serde(default, alias = "_id")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub dealership: i64,
    #[serde(default = "anonymous")]
    pub name: String,
    #[serde(default)]
    pub purchase: bool,
    pub review: String,
    #[serde(default)]
    pub purchase_date: String,
    #[serde(default)]
    pub car_make: String,
    #[serde(default)]
    pub car_model: String,
    #[serde(default, deserialize_with = "lenient_year")]
    pub car_year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<SentimentLabel>,
}

fn anonymous() -> String {
    "Anonymous".to_string()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(i64),
    Text(String),
}

/// Parse an optional integer that may arrive as a number, a numeric string,
/// an empty string, or `null`.
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<NumberOrText>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumberOrText::Number(n)) => Ok(Some(n)),
        Some(NumberOrText::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(NumberOrText::Text(s)) => s
            .trim()
            .parse::<i64>()
            .map(Some)
            .map_err(|_| de::Error::custom(format!("expected an integer, got '{s}'"))),
    }
}

fn lenient_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_number(deserializer)?.unwrap_or_default())
}

fn lenient_year<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    lenient_number(deserializer)?
        .map(|n| {
            i32::try_from(n).map_err(|_| de::Error::custom(format!("car_year {n} out of range")))
        })
        .transpose()
}
