// Copyright 2026 the Carta Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Carta Data: loads the on-disk map schema into the region tree.
//!
//! The schema is a JSON object with a `map_data` array of nested region
//! objects. Each region has a `name` plus optional `prefix`, `suffix`,
//! `color` (an `[r, g, b]` byte triple), `government`, and `leader`, and
//! exactly one of:
//! - `coordinates`: an array of `[x, y]` points forming a closed loop, or
//! - `constituencies`: an array of nested region objects.
//!
//! Unknown keys are ignored. Regions without a `color` get one from the
//! [`ColorSource`] the caller supplies, so loading is deterministic under a
//! seeded source.
//!
//! ```rust
//! use carta_region::SequenceColors;
//!
//! let json = r#"{ "map_data": [
//!     { "name": "Atria",
//!       "coordinates": [[0, 0], [1, 0], [1, 1], [0, 1]] }
//! ] }"#;
//!
//! let mut colors = SequenceColors::default();
//! let map = carta_data::parse_map(json, &mut colors).unwrap();
//! assert_eq!(map.countries()[0].name(), "Atria");
//! ```

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use kurbo::Point;
use peniko::Color;
use serde::Deserialize;

use carta_region::{ColorSource, MapData, Region, RegionError, RegionInfo};

/// Raw file root.
#[derive(Debug, Deserialize)]
struct MapFile {
    map_data: Vec<RegionNode>,
}

/// Raw nested region object, before validation.
#[derive(Debug, Deserialize)]
struct RegionNode {
    name: String,
    #[serde(default)]
    prefix: Option<String>,
    #[serde(default)]
    suffix: Option<String>,
    #[serde(default)]
    color: Option<[u8; 3]>,
    #[serde(default)]
    government: Option<String>,
    #[serde(default)]
    leader: Option<String>,
    #[serde(default)]
    coordinates: Option<Vec<[f64; 2]>>,
    #[serde(default)]
    constituencies: Option<Vec<RegionNode>>,
}

/// Error loading or validating a map file.
#[derive(Debug)]
pub enum LoadError {
    /// The file could not be read.
    Io(io::Error),
    /// The file is not valid JSON or does not match the schema.
    Json(serde_json::Error),
    /// A region supplied both `coordinates` and `constituencies`, or neither.
    AmbiguousBody {
        /// The offending region's name.
        name: String,
        /// `true` when both keys were present, `false` when neither was.
        both: bool,
    },
    /// A region's payload failed validation.
    Region(RegionError),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "cannot read map file: {err}"),
            Self::Json(err) => write!(f, "cannot parse map file: {err}"),
            Self::AmbiguousBody { name, both } => {
                if *both {
                    write!(
                        f,
                        "region {name:?} has both coordinates and constituencies"
                    )
                } else {
                    write!(
                        f,
                        "region {name:?} has neither coordinates nor constituencies"
                    )
                }
            }
            Self::Region(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Json(err) => Some(err),
            Self::AmbiguousBody { .. } => None,
            Self::Region(err) => Some(err),
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

impl From<RegionError> for LoadError {
    fn from(err: RegionError) -> Self {
        Self::Region(err)
    }
}

/// Reads and parses a map file from disk.
///
/// # Errors
///
/// Fails on I/O errors, malformed JSON, and regions violating the
/// leaf-XOR-composite invariant.
pub fn load_map(path: &Path, colors: &mut dyn ColorSource) -> Result<MapData, LoadError> {
    let text = fs::read_to_string(path)?;
    let map = parse_map(&text, colors)?;
    tracing::info!(
        path = %path.display(),
        countries = map.countries().len(),
        "map loaded"
    );
    Ok(map)
}

/// Parses map JSON into a validated region tree.
///
/// # Errors
///
/// Fails on malformed JSON and on regions violating the leaf-XOR-composite
/// invariant.
pub fn parse_map(text: &str, colors: &mut dyn ColorSource) -> Result<MapData, LoadError> {
    let file: MapFile = serde_json::from_str(text)?;
    let countries = file
        .map_data
        .into_iter()
        .map(|node| build_region(node, colors))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(MapData::new(countries))
}

fn build_region(node: RegionNode, colors: &mut dyn ColorSource) -> Result<Region, LoadError> {
    let mut info = RegionInfo::named(node.name);
    info.prefix = node.prefix;
    info.suffix = node.suffix;
    info.color = node.color.map(|[r, g, b]| Color::from_rgb8(r, g, b));
    info.government = node.government;
    info.leader = node.leader;

    match (node.coordinates, node.constituencies) {
        (Some(coordinates), None) => {
            let boundary = coordinates
                .into_iter()
                .map(|[x, y]| Point::new(x, y))
                .collect();
            Ok(Region::leaf(info, boundary, colors)?)
        }
        (None, Some(constituencies)) => {
            let children = constituencies
                .into_iter()
                .map(|child| build_region(child, colors))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Region::composite(info, children, colors)?)
        }
        (coords, _) => Err(LoadError::AmbiguousBody {
            name: info.name,
            both: coords.is_some(),
        }),
    }
}
