//! Deterministic test-pattern generation.
//!
//! The placeholder is a gray test card: a background with an origin-aligned
//! grid, a centered framed panel with its own center-aligned grid, and four
//! corner markers. Every pixel is gray (r = g = b).
//!
//! ## Compositing
//!
//! Rules are evaluated in a fixed order and later rules override earlier
//! ones:
//!
//! ```text
//! Background      240   everywhere
//! FineGrid        200   x % 50 == 0  || y % 50 == 0
//! CoarseGrid      150   x % 100 == 0 || y % 100 == 0
//! BorderRing      100   inside the panel, within 30px of its edge
//! BorderInterior  255   inside the panel, more than 60px from its edge
//! InteriorGrid    245   interior pixels with (x-cx) or (y-cy) divisible by 50
//! Corner          120   the four 150x150 corner squares
//! ```
//!
//! The outer grid is measured from the canvas origin while the interior grid
//! is measured from the canvas center. Both are kept as-is so the output
//! stays byte-identical with existing placeholder files.

use placard_core::{ColorType, Dimensions, Error, Result};

/// Pixel buffer laid out as PNG scanlines.
///
/// One flat allocation of `height` rows; each row is a filter byte (always
/// 0, "None") followed by `width * channels` samples.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    dims: Dimensions,
    color: ColorType,
    stride: usize,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Image dimensions.
    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    /// Color type of the samples.
    pub fn color_type(&self) -> ColorType {
        self.color
    }

    /// Bytes per row including the filter byte.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// One scanline, filter byte first.
    pub fn row(&self, y: u32) -> &[u8] {
        let start = y as usize * self.stride;
        &self.data[start..start + self.stride]
    }

    /// Samples of a single pixel.
    pub fn pixel(&self, x: u32, y: u32) -> &[u8] {
        let channels = self.color.channels();
        let start = y as usize * self.stride + 1 + x as usize * channels;
        &self.data[start..start + channels]
    }

    /// All scanlines, concatenated.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Consume the buffer and return the raw scanline bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }
}

/// A single override rule in the compositing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// Flat light gray.
    Background,
    /// Light lines every `fine_grid` pixels from the origin.
    FineGrid,
    /// Dark lines every `coarse_grid` pixels from the origin.
    CoarseGrid,
    /// Outer frame of the centered panel.
    BorderRing,
    /// White content area of the panel.
    BorderInterior,
    /// Near-white lines inside the content area, measured from the center.
    InteriorGrid,
    /// Square markers in the four canvas corners.
    Corner,
}

impl Rule {
    /// All rules, lowest precedence first.
    pub const ORDER: [Rule; 7] = [
        Rule::Background,
        Rule::FineGrid,
        Rule::CoarseGrid,
        Rule::BorderRing,
        Rule::BorderInterior,
        Rule::InteriorGrid,
        Rule::Corner,
    ];

    /// Gray level this rule paints.
    pub fn shade(self) -> u8 {
        match self {
            Rule::Background => 240,
            Rule::FineGrid => 200,
            Rule::CoarseGrid => 150,
            Rule::BorderRing => 100,
            Rule::BorderInterior => 255,
            Rule::InteriorGrid => 245,
            Rule::Corner => 120,
        }
    }

    /// Whether this rule covers pixel `(x, y)` on `canvas`.
    pub fn matches(self, pattern: &Pattern, canvas: &Canvas, x: i64, y: i64) -> bool {
        let dx = x - canvas.cx;
        let dy = y - canvas.cy;
        match self {
            Rule::Background => true,
            Rule::FineGrid => x % pattern.fine_grid == 0 || y % pattern.fine_grid == 0,
            Rule::CoarseGrid => x % pattern.coarse_grid == 0 || y % pattern.coarse_grid == 0,
            Rule::BorderRing => {
                pattern.in_panel(dx, dy)
                    && (dx.abs() > pattern.border_half_width - pattern.ring_width
                        || dy.abs() > pattern.border_half_height - pattern.ring_width)
            }
            Rule::BorderInterior => pattern.in_interior(dx, dy),
            Rule::InteriorGrid => {
                pattern.in_interior(dx, dy)
                    && (dx % pattern.interior_grid == 0 || dy % pattern.interior_grid == 0)
            }
            Rule::Corner => {
                let c = pattern.corner_size;
                let left = x < c;
                let right = x >= canvas.width - c;
                let top = y < c;
                let bottom = y >= canvas.height - c;
                (left || right) && (top || bottom)
            }
        }
    }
}

/// Canvas geometry shared by every rule evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Canvas {
    width: i64,
    height: i64,
    cx: i64,
    cy: i64,
}

impl Canvas {
    /// Canvas for the given dimensions; the center uses integer division.
    pub fn new(dims: Dimensions) -> Self {
        let width = i64::from(dims.width());
        let height = i64::from(dims.height());
        Canvas {
            width,
            height,
            cx: width / 2,
            cy: height / 2,
        }
    }

    /// Canvas center.
    pub fn center(&self) -> (i64, i64) {
        (self.cx, self.cy)
    }
}

/// Test-card geometry.
///
/// `Default` is the layout every existing placeholder uses; changing any
/// field changes the output bytes. Grid spacings must be positive;
/// [`Pattern::render`] rejects a geometry that breaks this.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pattern {
    /// Spacing of the dark outer grid.
    pub coarse_grid: i64,
    /// Spacing of the light outer grid.
    pub fine_grid: i64,
    /// Half-width of the centered panel.
    pub border_half_width: i64,
    /// Half-height of the centered panel.
    pub border_half_height: i64,
    /// Thickness of the panel frame.
    pub ring_width: i64,
    /// Inset of the white content area from the panel edge.
    pub interior_inset: i64,
    /// Spacing of the interior grid, measured from the center.
    pub interior_grid: i64,
    /// Side of each corner marker.
    pub corner_size: i64,
}

impl Default for Pattern {
    fn default() -> Self {
        Pattern {
            coarse_grid: 100,
            fine_grid: 50,
            border_half_width: 800,
            border_half_height: 600,
            ring_width: 30,
            interior_inset: 60,
            interior_grid: 50,
            corner_size: 150,
        }
    }
}

impl Pattern {
    fn in_panel(&self, dx: i64, dy: i64) -> bool {
        dx.abs() < self.border_half_width && dy.abs() < self.border_half_height
    }

    fn in_interior(&self, dx: i64, dy: i64) -> bool {
        dx.abs() < self.border_half_width - self.interior_inset
            && dy.abs() < self.border_half_height - self.interior_inset
    }

    /// Check the grid spacings are usable as divisors.
    pub fn validate(&self) -> Result<()> {
        let spacings = [
            ("coarse_grid", self.coarse_grid),
            ("fine_grid", self.fine_grid),
            ("interior_grid", self.interior_grid),
        ];
        for (name, spacing) in spacings {
            if spacing <= 0 {
                return Err(Error::Config(format!(
                    "{} must be positive, got {}",
                    name, spacing
                )));
            }
        }
        Ok(())
    }

    /// The rule that decides pixel `(x, y)`: the last matching one in [`Rule::ORDER`].
    pub fn winning_rule(&self, canvas: &Canvas, x: i64, y: i64) -> Rule {
        Rule::ORDER
            .iter()
            .rev()
            .copied()
            .find(|rule| rule.matches(self, canvas, x, y))
            .unwrap_or(Rule::Background)
    }

    /// Gray level of pixel `(x, y)`.
    pub fn shade_at(&self, canvas: &Canvas, x: i64, y: i64) -> u8 {
        self.winning_rule(canvas, x, y).shade()
    }

    /// Render the pattern into a scanline buffer.
    ///
    /// Fails with `Config` if a grid spacing is not positive.
    pub fn render(&self, dims: Dimensions, color: ColorType) -> Result<PixelBuffer> {
        self.validate()?;
        let canvas = Canvas::new(dims);
        let channels = color.channels();
        let (stride, len) = match (dims.stride(color), dims.raw_len(color)) {
            (Some(stride), Some(len)) => (stride, len),
            _ => {
                return Err(Error::invalid_dimension(
                    dims.width(),
                    dims.height(),
                    "pixel buffer size overflows",
                ))
            }
        };

        let mut data = vec![0u8; len];
        for (y, row) in data.chunks_exact_mut(stride).enumerate() {
            // row[0] stays 0: filter type None.
            for (x, px) in row[1..].chunks_exact_mut(channels).enumerate() {
                let shade = self.shade_at(&canvas, x as i64, y as i64);
                px[..3].fill(shade);
                if channels == 4 {
                    px[3] = u8::MAX;
                }
            }
        }

        Ok(PixelBuffer {
            dims,
            color,
            stride,
            data,
        })
    }
}

/// Generate the default RGB placeholder pattern.
///
/// Fails with `InvalidDimension` if either side is zero.
pub fn generate(width: u32, height: u32) -> Result<PixelBuffer> {
    generate_with(Dimensions::new(width, height)?, ColorType::Rgb)
}

/// Generate the default pattern in the given color type.
///
/// RGBA output is fully opaque.
pub fn generate_with(dims: Dimensions, color: ColorType) -> Result<PixelBuffer> {
    Pattern::default().render(dims, color)
}
