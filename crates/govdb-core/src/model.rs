// crates/govdb-core/src/model.rs
use serde::{Deserialize, Serialize};

/// File holding the governorate records, relative to the data directory.
pub const GOVERNMENTS_FILE: &str = "governments.json";
/// File holding the city records, relative to the data directory.
pub const CITIES_FILE: &str = "cities.json";

/// A governorate (first-level administrative region).
///
/// The JSON field names differ from the Rust ones; the mapping is fixed by
/// the serde attributes below and used for both reading and writing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Government {
    pub id: i32,
    #[serde(rename = "governorate_name_ar")]
    pub name_ar: String,
    #[serde(rename = "governorate_name_en")]
    pub name_en: String,
}

/// A city, pointing at its parent [`Government`] through `government_id`.
///
/// `government` is not part of the data files. It stays `None` until
/// [`enrich`](crate::enrich::enrich) resolves the foreign key, and stays `None` for good if
/// no governorate carries that id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct City {
    pub id: i32,
    #[serde(rename = "city_name_ar")]
    pub name_ar: String,
    #[serde(rename = "city_name_en")]
    pub name_en: String,
    #[serde(rename = "governorate_id")]
    pub government_id: i32,
    #[serde(default)]
    pub government: Option<Government>,
}

impl Government {
    pub fn name_ar(&self) -> &str {
        &self.name_ar
    }

    pub fn name_en(&self) -> &str {
        &self.name_en
    }
}

impl City {
    pub fn name_ar(&self) -> &str {
        &self.name_ar
    }

    pub fn name_en(&self) -> &str {
        &self.name_en
    }

    /// The resolved parent, if enrichment found one.
    pub fn government(&self) -> Option<&Government> {
        self.government.as_ref()
    }

    /// Copy of this city with `government` replaced.
    pub fn with_government(&self, government: Option<Government>) -> Self {
        City {
            government,
            ..self.clone()
        }
    }
}
