mod builtin;

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

pub use builtin::builtin_courses;

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct CourseRecord {
    pub id: u32,
    pub title: String,
    pub category: String,
    pub price: f64,
    pub author: String,
    /// Opaque asset reference, only meaningful to presenters.
    #[serde(default)]
    pub image: String,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("course id must be positive (record #{position})")]
    ZeroId { position: usize },

    #[error("duplicate course id {id}")]
    DuplicateId { id: u32 },

    #[error("course {id} has an empty {field}")]
    EmptyField { id: u32, field: &'static str },

    #[error("course {id} has an invalid price {price}")]
    InvalidPrice { id: u32, price: f64 },

    #[error("failed to read catalog file: {path}: {source}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog file: {path}: {message}")]
    Parse { path: String, message: String },
}

/// The fixed, ordered course list for a session.
///
/// There are no mutating methods: once built, the record order and contents
/// stay the same for the lifetime of the value.
#[derive(Clone, Debug, PartialEq)]
pub struct Catalog {
    records: Vec<CourseRecord>,
}

impl Catalog {
    pub fn new(records: Vec<CourseRecord>) -> Result<Self, CatalogError> {
        let mut seen: HashSet<u32> = HashSet::new();
        for (position, r) in records.iter().enumerate() {
            if r.id == 0 {
                return Err(CatalogError::ZeroId { position });
            }
            if !seen.insert(r.id) {
                return Err(CatalogError::DuplicateId { id: r.id });
            }
            if r.title.trim().is_empty() {
                return Err(CatalogError::EmptyField {
                    id: r.id,
                    field: "title",
                });
            }
            if r.author.trim().is_empty() {
                return Err(CatalogError::EmptyField {
                    id: r.id,
                    field: "author",
                });
            }
            if r.category.trim().is_empty() {
                return Err(CatalogError::EmptyField {
                    id: r.id,
                    field: "category",
                });
            }
            if !r.price.is_finite() || r.price < 0.0 {
                return Err(CatalogError::InvalidPrice {
                    id: r.id,
                    price: r.price,
                });
            }
        }
        Ok(Self { records })
    }

    /// The 12-course dataset shipped with the widget.
    pub fn builtin() -> Self {
        Self {
            records: builtin_courses(),
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CourseRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct categories in order of first appearance.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: HashSet<&str> = HashSet::new();
        self.records
            .iter()
            .map(|r| r.category.as_str())
            .filter(|c| seen.insert(c))
            .collect()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a CourseRecord;
    type IntoIter = std::slice::Iter<'a, CourseRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogFile {
    List(Vec<CourseRecord>),
    Document { courses: Vec<CourseRecord> },
}

impl CatalogFile {
    fn into_records(self) -> Vec<CourseRecord> {
        match self {
            CatalogFile::List(records) => records,
            CatalogFile::Document { courses } => courses,
        }
    }
}

pub fn parse_catalog(contents: &str, json: bool, path: &str) -> Result<Catalog, CatalogError> {
    let parsed = if json {
        serde_json::from_str::<CatalogFile>(contents).map_err(|e| e.to_string())
    } else {
        serde_yaml::from_str::<CatalogFile>(contents).map_err(|e| e.to_string())
    };
    let file = parsed.map_err(|message| CatalogError::Parse {
        path: path.to_string(),
        message,
    })?;
    Catalog::new(file.into_records())
}

/// Loads a catalog from disk. `.json` files go through serde_json, anything
/// else is read as YAML.
pub fn load_catalog(path: &Path) -> Result<Catalog, CatalogError> {
    let display = path.display().to_string();
    let contents = std::fs::read_to_string(path).map_err(|source| CatalogError::FileRead {
        path: display.clone(),
        source,
    })?;
    let json = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("json"))
        .unwrap_or(false);
    parse_catalog(&contents, json, &display)
}
