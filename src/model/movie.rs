use serde::{Deserialize, Deserializer, Serialize};

/// One movie/filming-location occurrence of the SF film locations dataset.
///
/// Every attribute is textual and may be missing. An empty string is treated
/// the same as a missing value everywhere in the crate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(
        default,
        deserialize_with = "text_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub release_year: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locations: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actor_1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actor_2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actor_3: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub director: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distributor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub production_company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub writer: Option<String>,
    #[serde(
        default,
        deserialize_with = "text_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub lat: Option<String>,
    #[serde(
        default,
        deserialize_with = "text_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub lng: Option<String>,
}

impl Movie {
    pub fn title(&self) -> Option<&str> {
        present(&self.title)
    }

    pub fn release_year(&self) -> Option<&str> {
        present(&self.release_year)
    }

    pub fn locations(&self) -> Option<&str> {
        present(&self.locations)
    }

    /// Parses `lat`/`lng` into a `(lat, lng)` pair. Missing, unparseable and
    /// non-finite values yield `None`.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        let lat = present(&self.lat)?.trim().parse::<f64>().ok()?;
        let lng = present(&self.lng)?.trim().parse::<f64>().ok()?;

        if !lat.is_finite() || !lng.is_finite() {
            return None;
        }

        Some((lat, lng))
    }

    pub fn to_csvable_array(&self) -> Vec<String> {
        return vec![
            &self.title,
            &self.release_year,
            &self.locations,
            &self.director,
            &self.writer,
            &self.actor_1,
            &self.actor_2,
            &self.actor_3,
            &self.distributor,
            &self.production_company,
            &self.lat,
            &self.lng,
        ]
        .into_iter()
        .map(|value| value.clone().unwrap_or_default())
        .collect();
    }

    pub fn csv_titles() -> Vec<&'static str> {
        return vec![
            "Title",
            "Release Year",
            "Locations",
            "Director",
            "Writer",
            "Actor 1",
            "Actor 2",
            "Actor 3",
            "Distributor",
            "Production Company",
            "Latitude",
            "Longitude",
        ];
    }
}

pub(crate) fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrNumber {
    Text(String),
    Number(serde_json::Number),
}

// The upstream API has served years and coordinates both as strings and as
// bare numbers. Both are kept in their text form.
fn text_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<TextOrNumber>::deserialize(deserializer)?;
    Ok(value.map(|v| match v {
        TextOrNumber::Text(text) => text,
        TextOrNumber::Number(number) => number.to_string(),
    }))
}
