use serde::Deserialize;

/// A single advisory, as found in the `vulnerabilities` folder of the database.
///
/// Field values are taken as they are. Dates stay in the upstream format and the severity is not
/// checked against any known set of values.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Vulnerability {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub severity: String,
    /// Identifiers of the affected cloud service providers.
    #[serde(deserialize_with = "null_as_default")]
    pub affected_platforms: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub published_at: String,
    #[serde(deserialize_with = "null_as_default")]
    pub disclosed_at: String,

    /// Human facing page of the advisory, derived from the file name.
    #[serde(skip)]
    pub display_url: String,
    /// Raw advisory document in the origin repository, derived from the file name.
    #[serde(skip)]
    pub source_url: String,
}

impl Vulnerability {
    pub fn with_links(mut self, display_url: String, source_url: String) -> Self {
        self.display_url = display_url;
        self.source_url = source_url;
        self
    }
}

/// An explicit null (`~`, `null`) counts the same as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: serde::Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
