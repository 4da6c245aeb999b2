use serde::{Deserialize, Serialize};

/// One page of a user's collection folder
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CollectionPage {
    pub pagination: Pagination,
    pub releases: Vec<Release>,
}

/// Pagination block returned with every collection page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Pagination {
    pub per_page: u32,
    pub pages: u32,
    pub page: u32,
    pub items: u64,
    #[serde(default)]
    pub urls: PaginationUrls,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PaginationUrls {
    pub next: Option<String>,
    pub last: Option<String>,
}

/// A release instance in the user's collection
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Release {
    pub id: u64,
    pub instance_id: u64,
    pub folder_id: u64,
    pub rating: u8,
    pub basic_information: BasicInformation,
    /// Only returned to the collection owner (authenticated requests).
    #[serde(default)]
    pub notes: Option<Vec<Note>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BasicInformation {
    pub id: u64,
    pub title: String,
    /// 0 when the release date is unknown
    pub year: u32,
    pub resource_url: String,
    #[serde(default)]
    pub thumb: String,
    #[serde(default)]
    pub cover_image: String,
    #[serde(default)]
    pub formats: Vec<Format>,
    #[serde(default)]
    pub labels: Vec<Label>,
    #[serde(default)]
    pub artists: Vec<Artist>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub styles: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Format {
    pub name: String,
    pub qty: String,
    #[serde(default)]
    pub descriptions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Label {
    pub id: u64,
    pub name: String,
    pub catno: String,
    pub entity_type: String,
    pub resource_url: String,
}

/// Artist credit on a release
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Artist {
    pub id: u64,
    /// Discogs appends " (N)" to disambiguate artists sharing a name
    pub name: String,
    /// Artist name variation as credited on this release
    #[serde(default)]
    pub anv: String,
    #[serde(default)]
    pub join: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub tracks: String,
    pub resource_url: String,
}

/// Free-text collection note (media condition, sleeve condition, ...)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Note {
    pub field_id: Option<u64>,
    pub value: Option<String>,
}
