//! Trellis Core Layout and Composition Engine
//!
//! This crate provides the grid-based composition engine behind Trellis
//! diagrams. It includes:
//!
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Geometry**: Points, sizes, bounds and lattice coordinates ([`geometry`] module)
//! - **Draw**: The composition tree of [`draw::TextBox`], [`draw::Grid`] and
//!   [`draw::Stage`] plus the [`draw::Drawable`] traversal ([`draw`] module)
//! - **Surface**: Drawing targets that receive absolute-position commands
//!   ([`surface`] module)
//! - **Errors**: Placement and rendering failures ([`error`] module)
//!
//! # Quick Start
//!
//! ```
//! # use trellis_core::draw::{Grid, GridConfig, Stage, TextBox};
//! # use trellis_core::geometry::{CellCoord, Dimensions, Point, Size};
//! # use trellis_core::surface::SvgSurface;
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = GridConfig::new(
//!     Point::new(10.0, 10.0),
//!     Size::new(100.0, 50.0),
//!     Dimensions::new(2, 3),
//! );
//! let mut grid = Grid::new(config)?;
//! grid.place(CellCoord::new(1, 2), TextBox::new("A"))?;
//!
//! let mut stage = Stage::new();
//! stage.add(grid);
//!
//! let mut surface = SvgSurface::new();
//! stage.render(&mut surface)?;
//! assert_eq!(surface.commands()[0].position(), Point::new(110.0, 110.0));
//! # Ok(())
//! # }
//! ```

pub mod color;
pub mod draw;
pub mod error;
pub mod geometry;
pub mod surface;
