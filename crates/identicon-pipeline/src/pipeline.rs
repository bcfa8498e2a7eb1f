//! Incremental pipeline: advance stage-by-stage, inspecting each
//! intermediate result before continuing.
//!
//! Unlike [`crate::process`] which runs every stage in one call,
//! [`Pipeline`] lets the caller drive execution one step at a time:
//!
//! ```rust
//! # use identicon_pipeline::Pipeline;
//! let state = Pipeline::new("asdf")
//!     .hash()
//!     .build_grid()
//!     .filter()
//!     .map_pixels()
//!     .rasterize()
//!     .into_result();
//!
//! assert_eq!(state.filtered.len(), 12);
//! ```
//!
//! Each stage method consumes `self` and returns the next state,
//! carrying every previously computed field unchanged. No stage can
//! fail.

use log::debug;

use crate::types::{Color, Digest, Grid, IdenticonState, PixelMap, RgbImage};

/// Entry point for stage-by-stage execution.
pub struct Pipeline;

impl Pipeline {
    /// Start a pipeline run for `input`.
    ///
    /// Any string is accepted, including the empty string.
    #[allow(clippy::new_ret_no_self)]
    pub fn new(input: impl Into<String>) -> Pending {
        Pending {
            input: input.into(),
        }
    }
}

// ───────────────────────── Stage 0: Pending ──────────────────────────

/// Pipeline state before any processing has occurred.
#[must_use = "pipeline stages are consumed by advancing; call .hash() to continue"]
pub struct Pending {
    input: String,
}

impl Pending {
    /// The raw input string.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Hash the input and derive the fill color.
    pub fn hash(self) -> Hashed {
        let digest = crate::hash::hash_input(&self.input);
        let color = Color::from_digest(&digest);
        debug!("hashed {} input bytes -> {}", self.input.len(), digest.to_hex());
        Hashed { digest, color }
    }
}

// ───────────────────────── Stage 1: Hashed ───────────────────────────

/// Pipeline state after hashing.
///
/// The input string is dropped here; nothing downstream depends on it.
#[must_use = "pipeline stages are consumed by advancing; call .build_grid() to continue"]
pub struct Hashed {
    digest: Digest,
    color: Color,
}

impl Hashed {
    /// The input digest.
    #[must_use]
    pub const fn digest(&self) -> &Digest {
        &self.digest
    }

    /// The fill color, taken from the first three digest bytes.
    #[must_use]
    pub const fn color(&self) -> Color {
        self.color
    }

    /// Build the mirrored 25-cell grid.
    pub fn build_grid(self) -> GridBuilt {
        let grid = crate::grid::build_grid(&self.digest);
        GridBuilt {
            digest: self.digest,
            color: self.color,
            grid,
        }
    }
}

// ───────────────────────── Stage 2: GridBuilt ────────────────────────

/// Pipeline state after grid construction.
#[must_use = "pipeline stages are consumed by advancing; call .filter() to continue"]
pub struct GridBuilt {
    digest: Digest,
    color: Color,
    grid: Grid,
}

impl GridBuilt {
    /// The full, unfiltered grid.
    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Drop odd-valued cells.
    pub fn filter(self) -> Filtered {
        let filtered = crate::filter::filter_even(&self.grid);
        debug!("kept {} of {} cells", filtered.len(), self.grid.len());
        Filtered {
            digest: self.digest,
            color: self.color,
            grid: self.grid,
            filtered,
        }
    }
}

// ───────────────────────── Stage 3: Filtered ─────────────────────────

/// Pipeline state after the parity filter.
#[must_use = "pipeline stages are consumed by advancing; call .map_pixels() to continue"]
pub struct Filtered {
    digest: Digest,
    color: Color,
    grid: Grid,
    filtered: Grid,
}

impl Filtered {
    /// The cells that will be drawn.
    #[must_use]
    pub const fn filtered(&self) -> &Grid {
        &self.filtered
    }

    /// Map each surviving cell to its canvas rectangle.
    pub fn map_pixels(self) -> Mapped {
        let pixel_map = crate::pixel_map::build_pixel_map(&self.filtered);
        Mapped {
            digest: self.digest,
            color: self.color,
            grid: self.grid,
            filtered: self.filtered,
            pixel_map,
        }
    }
}

// ───────────────────────── Stage 4: Mapped ───────────────────────────

/// Pipeline state after pixel mapping.
#[must_use = "pipeline stages are consumed by advancing; call .rasterize() to continue"]
pub struct Mapped {
    digest: Digest,
    color: Color,
    grid: Grid,
    filtered: Grid,
    pixel_map: PixelMap,
}

impl Mapped {
    /// The rectangles to fill, in draw order.
    #[must_use]
    pub const fn pixel_map(&self) -> &PixelMap {
        &self.pixel_map
    }

    /// Draw the pixel map onto a fresh canvas.
    pub fn rasterize(self) -> Rasterized {
        let image = crate::raster::rasterize(self.color, &self.pixel_map);
        debug!(
            "rasterized {} rectangles onto {}x{} canvas",
            self.pixel_map.len(),
            image.width(),
            image.height(),
        );
        Rasterized {
            state: IdenticonState {
                digest: self.digest,
                color: self.color,
                grid: self.grid,
                filtered: self.filtered,
                pixel_map: self.pixel_map,
                image,
            },
        }
    }
}

// ───────────────────────── Stage 5: Rasterized ───────────────────────

/// Final pipeline state.
///
/// Call [`into_result`](Self::into_result) to take ownership of every
/// intermediate.
#[must_use = "call .into_result() to take the pipeline output"]
pub struct Rasterized {
    state: IdenticonState,
}

impl Rasterized {
    /// The rendered canvas.
    #[must_use]
    pub const fn image(&self) -> &RgbImage {
        &self.state.image
    }

    /// Consume the pipeline and return every intermediate.
    #[must_use]
    pub fn into_result(self) -> IdenticonState {
        self.state
    }
}
