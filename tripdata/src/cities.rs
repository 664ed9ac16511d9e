use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::Result;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    pub fn all() -> Vec<Self> {
        vec![City::Chicago, City::NewYorkCity, City::Washington]
    }

    /// The lower-case name a user types in
    pub fn name(self) -> &'static str {
        match self {
            City::Chicago => "chicago",
            City::NewYorkCity => "new york city",
            City::Washington => "washington",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            City::Chicago => "Chicago",
            City::NewYorkCity => "New York City",
            City::Washington => "Washington",
        }
    }

    pub fn default_filename(self) -> &'static str {
        match self {
            City::Chicago => "chicago.csv",
            City::NewYorkCity => "new_york_city.csv",
            City::Washington => "washington.csv",
        }
    }

    pub fn parse(x: &str) -> Option<Self> {
        Self::all().into_iter().find(|city| city.name() == x)
    }
}

/// Where each city's trips live. Resolved once at startup.
#[derive(Clone, Debug)]
pub struct DataSources {
    files: BTreeMap<City, PathBuf>,
}

impl DataSources {
    /// Every city's default filename, underneath `dir`
    pub fn in_dir<P: AsRef<Path>>(dir: P) -> Self {
        let files = City::all()
            .into_iter()
            .map(|city| (city, dir.as_ref().join(city.default_filename())))
            .collect();
        Self { files }
    }

    pub fn with_file<P: Into<PathBuf>>(mut self, city: City, path: P) -> Self {
        self.files.insert(city, path.into());
        self
    }

    pub fn path(&self, city: City) -> Result<&Path> {
        match self.files.get(&city) {
            Some(path) => Ok(path),
            None => bail!("No data source configured for {}", city.title()),
        }
    }
}

impl Default for DataSources {
    fn default() -> Self {
        Self::in_dir(".")
    }
}
