//! Fixed-dimension lattice containers.
//!
//! A [`Grid`] maps integer [`CellCoord`]s to child [`Node`]s and translates
//! lattice coordinates into pixel coordinates:
//!
//! ```text
//! cell_origin(coord) = origin + coord ⊙ cell_size
//! ```
//!
//! The mapping is sparse. Unplaced cells draw nothing, and children are not
//! clipped to their cell, so content larger than `cell_size` overlaps its
//! neighbours.
//!
//! # Example
//!
//! ```
//! # use trellis_core::draw::{Grid, GridConfig, TextBox};
//! # use trellis_core::geometry::{CellCoord, Dimensions, Point, Size};
//! # fn main() -> Result<(), trellis_core::error::GridError> {
//! let mut grid = Grid::new(GridConfig::new(
//!     Point::new(10.0, 10.0),
//!     Size::new(100.0, 50.0),
//!     Dimensions::new(2, 3),
//! ))?;
//! grid.place(CellCoord::new(1, 2), TextBox::new("A"))?;
//!
//! assert_eq!(grid.cell_origin(CellCoord::new(1, 2)), Point::new(110.0, 110.0));
//! assert!(grid.place(CellCoord::new(2, 0), TextBox::new("B")).is_err());
//! # Ok(())
//! # }
//! ```

use std::collections::BTreeMap;

use log::{debug, trace};

use crate::{
    draw::{Drawable, Node},
    error::{GridError, RenderError},
    geometry::{Bounds, CellCoord, Dimensions, Point, Size},
    surface::Surface,
};

/// Placement parameters of a [`Grid`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridConfig {
    origin: Point,
    cell_size: Size,
    dimensions: Dimensions,
}

impl GridConfig {
    /// Creates a new grid configuration.
    ///
    /// # Arguments
    ///
    /// * `origin` - Pixel offset of cell `(0, 0)` relative to the parent offset.
    /// * `cell_size` - Pixel size of every cell.
    /// * `dimensions` - Column and row count.
    pub fn new(origin: Point, cell_size: Size, dimensions: Dimensions) -> Self {
        Self {
            origin,
            cell_size,
            dimensions,
        }
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn cell_size(&self) -> Size {
        self.cell_size
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    fn validate(&self) -> Result<(), GridError> {
        if !self.dimensions.is_positive() {
            return Err(GridError::Dimension(format!(
                "dimensions must be positive, got {}",
                self.dimensions
            )));
        }
        if !self.cell_size.is_positive() {
            return Err(GridError::Dimension(format!(
                "cell size must be positive, got {}x{}",
                self.cell_size.width(),
                self.cell_size.height()
            )));
        }
        Ok(())
    }
}

/// A container arranging child nodes on an integer lattice.
#[derive(Debug, Clone)]
pub struct Grid {
    config: GridConfig,
    cells: BTreeMap<CellCoord, Node>,
}

impl Grid {
    /// Creates an empty grid.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::Dimension`] if a dimension is zero or a cell size
    /// component is not a positive finite number.
    pub fn new(config: GridConfig) -> Result<Self, GridError> {
        config.validate()?;
        Ok(Self {
            config,
            cells: BTreeMap::new(),
        })
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Places `node` at `coord`.
    ///
    /// If the cell is already occupied the new node replaces the old one,
    /// which is handed back to the caller and never drawn.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] if `coord` lies outside the grid.
    pub fn place(
        &mut self,
        coord: CellCoord,
        node: impl Into<Node>,
    ) -> Result<Option<Node>, GridError> {
        self.check_bounds(coord)?;
        let displaced = self.cells.insert(coord, node.into());
        if displaced.is_some() {
            debug!(coord:%; "Replaced node in occupied cell");
        } else {
            trace!(coord:%; "Placed node");
        }
        Ok(displaced)
    }

    /// Places `node` at `coord` only if the cell is empty.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] if `coord` lies outside the grid and
    /// [`GridError::CellOccupied`] if another node is already there.
    pub fn place_vacant(
        &mut self,
        coord: CellCoord,
        node: impl Into<Node>,
    ) -> Result<(), GridError> {
        self.check_bounds(coord)?;
        if self.cells.contains_key(&coord) {
            return Err(GridError::CellOccupied(coord));
        }
        self.cells.insert(coord, node.into());
        Ok(())
    }

    /// Returns the node at `coord`, if any.
    pub fn get(&self, coord: CellCoord) -> Option<&Node> {
        self.cells.get(&coord)
    }

    /// Returns the top-left pixel corner of `coord` relative to the parent offset.
    pub fn cell_origin(&self, coord: CellCoord) -> Point {
        self.config
            .origin
            .add_point(coord.scale(self.config.cell_size))
    }

    /// Returns the number of occupied cells.
    pub fn occupied(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterates occupied cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (CellCoord, &Node)> {
        self.cells.iter().map(|(coord, node)| (*coord, node))
    }

    fn check_bounds(&self, coord: CellCoord) -> Result<(), GridError> {
        if self.config.dimensions.contains(coord) {
            Ok(())
        } else {
            Err(GridError::OutOfBounds {
                coord,
                dimensions: self.config.dimensions,
            })
        }
    }
}

impl Drawable for Grid {
    fn draw(&self, offset: Point, surface: &mut dyn Surface) -> Result<(), RenderError> {
        trace!(
            x = offset.x(),
            y = offset.y(),
            occupied = self.cells.len();
            "Drawing grid"
        );
        for (coord, node) in self.iter() {
            node.draw(offset.add_point(self.cell_origin(coord)), surface)?;
        }
        Ok(())
    }

    fn extent(&self, offset: Point) -> Bounds {
        let lattice = offset
            .add_point(self.config.origin)
            .to_bounds(self.config.dimensions.span(self.config.cell_size));

        self.iter().fold(lattice, |acc, (coord, node)| {
            acc.merge(&node.extent(offset.add_point(self.cell_origin(coord))))
        })
    }
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;
    use crate::{draw::TextBox, surface::SvgSurface};

    // Integer-valued components keep f32 sums exact.
    fn point_strategy() -> impl Strategy<Value = Point> {
        (-500i32..500, -500i32..500).prop_map(|(x, y)| Point::new(x as f32, y as f32))
    }

    fn cell_size_strategy() -> impl Strategy<Value = Size> {
        (1i32..200, 1i32..200).prop_map(|(w, h)| Size::new(w as f32, h as f32))
    }

    fn coord_strategy() -> impl Strategy<Value = CellCoord> {
        (0usize..8, 0usize..8).prop_map(|(x, y)| CellCoord::new(x, y))
    }

    fn level_strategy() -> impl Strategy<Value = (Point, Size, CellCoord)> {
        (point_strategy(), cell_size_strategy(), coord_strategy())
    }

    /// Builds a chain of grids, one per level, with the leaf in the innermost
    /// grid, and returns the root together with the expected leaf position.
    fn build_chain(levels: &[(Point, Size, CellCoord)], leaf_offset: Point) -> (Node, Point) {
        let mut expected = leaf_offset;
        let mut node: Node = TextBox::new("leaf").with_offset(leaf_offset).into();

        for (origin, cell_size, coord) in levels.iter().rev() {
            let dims = Dimensions::new(coord.x() + 1, coord.y() + 1);
            let mut grid = Grid::new(GridConfig::new(*origin, *cell_size, dims))
                .expect("strategy produces valid configs");
            expected = expected
                .add_point(*origin)
                .add_point(coord.scale(*cell_size));
            grid.place(*coord, node).expect("coord is inside dims");
            node = grid.into();
        }

        (node, expected)
    }

    /// `cell_origin` is exactly `origin + coord ⊙ cell_size`.
    fn check_cell_origin_formula(
        origin: Point,
        cell_size: Size,
        coord: CellCoord,
    ) -> Result<(), TestCaseError> {
        let grid = Grid::new(GridConfig::new(origin, cell_size, Dimensions::new(8, 8)))
            .expect("valid config");
        let cell_origin = grid.cell_origin(coord);

        prop_assert_eq!(
            cell_origin.x(),
            origin.x() + coord.x() as f32 * cell_size.width()
        );
        prop_assert_eq!(
            cell_origin.y(),
            origin.y() + coord.y() as f32 * cell_size.height()
        );
        Ok(())
    }

    /// A leaf lands at the sum of every ancestor contribution plus its own offset.
    fn check_offsets_accumulate(
        levels: Vec<(Point, Size, CellCoord)>,
        leaf_offset: Point,
    ) -> Result<(), TestCaseError> {
        let (root, expected) = build_chain(&levels, leaf_offset);

        let mut surface = SvgSurface::new();
        root.draw(Point::default(), &mut surface)
            .expect("svg surface accepts commands");

        prop_assert_eq!(surface.commands().len(), 1);
        prop_assert_eq!(surface.commands()[0].position(), expected);
        Ok(())
    }

    /// Drawing at a shifted offset shifts every command by the same amount.
    fn check_draw_is_translation_invariant(
        levels: Vec<(Point, Size, CellCoord)>,
        shift: Point,
    ) -> Result<(), TestCaseError> {
        let (root, expected) = build_chain(&levels, Point::default());

        let mut surface = SvgSurface::new();
        root.draw(shift, &mut surface)
            .expect("svg surface accepts commands");

        prop_assert_eq!(surface.commands()[0].position(), expected.add_point(shift));
        Ok(())
    }

    proptest! {
        #[test]
        fn cell_origin_formula(
            origin in point_strategy(),
            cell_size in cell_size_strategy(),
            coord in coord_strategy(),
        ) {
            check_cell_origin_formula(origin, cell_size, coord)?;
        }

        #[test]
        fn offsets_accumulate(
            levels in prop::collection::vec(level_strategy(), 1..5),
            leaf_offset in point_strategy(),
        ) {
            check_offsets_accumulate(levels, leaf_offset)?;
        }

        #[test]
        fn draw_is_translation_invariant(
            levels in prop::collection::vec(level_strategy(), 1..4),
            shift in point_strategy(),
        ) {
            check_draw_is_translation_invariant(levels, shift)?;
        }
    }
}
