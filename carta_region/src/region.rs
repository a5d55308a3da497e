// Copyright 2026 the Carta Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Region and map-data types.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use kurbo::Point;
use peniko::Color;

use carta_outline::BoundaryError;

use crate::color::ColorSource;

/// Descriptive attributes of a region, separate from its geometry.
///
/// `color` is optional here; when absent, [`Region::leaf`] and
/// [`Region::composite`] draw one from the supplied [`ColorSource`].
#[derive(Clone, Debug, Default)]
pub struct RegionInfo {
    /// Base name, for example `"Westhaven"`.
    pub name: String,
    /// Optional display prefix, for example `"Duchy of "`.
    pub prefix: Option<String>,
    /// Optional display suffix.
    pub suffix: Option<String>,
    /// Display color, if the source data specifies one.
    pub color: Option<Color>,
    /// Government label.
    pub government: Option<String>,
    /// Leader label.
    pub leader: Option<String>,
}

impl RegionInfo {
    /// Creates an info block with just a name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Sets the display prefix.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Sets the display suffix.
    #[must_use]
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }

    /// Sets an explicit display color.
    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }
}

/// Geometry payload of a region: exactly one of the two cases.
#[derive(Clone, Debug)]
pub enum RegionBody {
    /// Leaf region: an ordered closed coordinate loop (closing edge implied).
    Boundary(Vec<Point>),
    /// Composite region: subdivided into constituencies, no loop of its own.
    Constituencies(Vec<Region>),
}

/// Error rejecting a malformed region at construction time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RegionError {
    /// A leaf's coordinate loop had fewer than three vertices.
    DegenerateBoundary {
        /// The region's base name.
        name: String,
        /// Vertex count supplied.
        vertices: usize,
    },
    /// A composite had no constituencies.
    NoConstituencies {
        /// The region's base name.
        name: String,
    },
}

impl fmt::Display for RegionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateBoundary { name, vertices } => {
                write!(f, "region {name:?} has a {vertices}-vertex boundary loop")
            }
            Self::NoConstituencies { name } => {
                write!(f, "composite region {name:?} has no constituencies")
            }
        }
    }
}

impl core::error::Error for RegionError {}

/// Boundary synthesis failed for a specific region.
///
/// Synthesis errors are local: siblings of the failing region resolve
/// normally, and the failure recurs on every access until the source data is
/// corrected.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolveError {
    /// Base name of the region whose boundary could not be synthesized.
    pub region: String,
    /// The underlying synthesis failure.
    pub source: BoundaryError,
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cannot synthesize boundary of region {:?}: {}",
            self.region, self.source
        )
    }
}

impl core::error::Error for ResolveError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// A named map region: a leaf with its own boundary loop, or a composite of
/// child regions.
#[derive(Clone, Debug)]
pub struct Region {
    info: RegionInfo,
    color: Color,
    body: RegionBody,
}

impl Region {
    /// Creates a leaf region from an ordered closed coordinate loop.
    ///
    /// When `info.color` is `None`, a color is drawn once from `colors` and
    /// retained for the region's lifetime.
    ///
    /// # Errors
    ///
    /// Rejects loops with fewer than three vertices.
    pub fn leaf(
        info: RegionInfo,
        boundary: Vec<Point>,
        colors: &mut dyn ColorSource,
    ) -> Result<Self, RegionError> {
        if boundary.len() < 3 {
            return Err(RegionError::DegenerateBoundary {
                name: info.name,
                vertices: boundary.len(),
            });
        }
        Ok(Self::with_body(info, RegionBody::Boundary(boundary), colors))
    }

    /// Creates a composite region from its constituencies.
    ///
    /// # Errors
    ///
    /// Rejects an empty child list.
    pub fn composite(
        info: RegionInfo,
        children: Vec<Self>,
        colors: &mut dyn ColorSource,
    ) -> Result<Self, RegionError> {
        if children.is_empty() {
            return Err(RegionError::NoConstituencies { name: info.name });
        }
        Ok(Self::with_body(
            info,
            RegionBody::Constituencies(children),
            colors,
        ))
    }

    fn with_body(mut info: RegionInfo, body: RegionBody, colors: &mut dyn ColorSource) -> Self {
        let color = info.color.take().unwrap_or_else(|| colors.next_color());
        Self { info, color, body }
    }

    /// Returns the region's base name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.info.name
    }

    /// Returns the composed display name: prefix + name + suffix, with absent
    /// components omitted.
    #[must_use]
    pub fn display_name(&self) -> String {
        let mut full = String::new();
        if let Some(prefix) = &self.info.prefix {
            full.push_str(prefix);
        }
        full.push_str(&self.info.name);
        if let Some(suffix) = &self.info.suffix {
            full.push_str(suffix);
        }
        full
    }

    /// Returns the government label, if any.
    #[must_use]
    pub fn government(&self) -> Option<&str> {
        self.info.government.as_deref()
    }

    /// Returns the leader label, if any.
    #[must_use]
    pub fn leader(&self) -> Option<&str> {
        self.info.leader.as_deref()
    }

    /// Returns the region's display color.
    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Returns the geometry payload.
    #[must_use]
    pub fn body(&self) -> &RegionBody {
        &self.body
    }

    /// Returns the child regions, or an empty slice for a leaf.
    #[must_use]
    pub fn children(&self) -> &[Self] {
        match &self.body {
            RegionBody::Boundary(_) => &[],
            RegionBody::Constituencies(children) => children,
        }
    }

    /// Returns `true` if this region carries its own coordinate loop.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        matches!(self.body, RegionBody::Boundary(_))
    }

    /// Resolves the region's closed boundary loop.
    ///
    /// A leaf returns a fresh copy of its stored loop; mutating the result
    /// never affects the model. A composite recursively resolves its children
    /// and synthesizes their outer boundary on every call; nothing is cached,
    /// so the result is a pure function of the tree.
    ///
    /// # Errors
    ///
    /// Returns a [`ResolveError`] naming the (possibly nested) region whose
    /// constituencies do not synthesize into one closed loop.
    pub fn resolve_boundary(&self) -> Result<Vec<Point>, ResolveError> {
        match &self.body {
            RegionBody::Boundary(boundary) => Ok(boundary.clone()),
            RegionBody::Constituencies(children) => {
                let loops = children
                    .iter()
                    .map(Self::resolve_boundary)
                    .collect::<Result<Vec<_>, _>>()?;
                carta_outline::outer_boundary(&loops).map_err(|source| ResolveError {
                    region: self.info.name.clone(),
                    source,
                })
            }
        }
    }
}

/// The loaded map: an ordered sequence of top-level regions (countries).
///
/// Owns the whole region tree and is immutable after load.
#[derive(Clone, Debug, Default)]
pub struct MapData {
    countries: Vec<Region>,
}

impl MapData {
    /// Wraps an ordered country list.
    #[must_use]
    pub fn new(countries: Vec<Region>) -> Self {
        Self { countries }
    }

    /// Returns the top-level countries in load order.
    #[must_use]
    pub fn countries(&self) -> &[Region] {
        &self.countries
    }
}
