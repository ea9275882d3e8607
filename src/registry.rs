// 🗂️ Dataset Registry - City → CSV file
// Built once at startup and handed to the loader; never mutated afterwards.

use crate::filters::City;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// DatasetRegistry - Where each city's trip log lives
///
/// Adding a city means adding a `City` variant and a file name here.
#[derive(Debug, Clone)]
pub struct DatasetRegistry {
    base_dir: PathBuf,
    files: HashMap<City, PathBuf>,
}

impl DatasetRegistry {
    /// Registry with the standard file names, resolved against `base_dir`
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        let base_dir = base_dir.into();
        let files = City::ALL
            .into_iter()
            .map(|city| (city, base_dir.join(Self::file_name(city))))
            .collect();

        DatasetRegistry { base_dir, files }
    }

    fn file_name(city: City) -> &'static str {
        match city {
            City::Chicago => "chicago.csv",
            City::NewYorkCity => "new_york_city.csv",
            City::Washington => "washington.csv",
        }
    }

    /// Path of the dataset for `city`, if one is registered
    pub fn path(&self, city: City) -> Option<&Path> {
        self.files.get(&city).map(PathBuf::as_path)
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }
}

impl Default for DatasetRegistry {
    /// Files are looked up relative to the working directory
    fn default() -> Self {
        DatasetRegistry::new(".")
    }
}
