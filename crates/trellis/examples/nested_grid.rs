//! Build a composition tree by hand and print it as SVG.
//!
//! This example skips trace parsing entirely: it places text boxes into a
//! nested grid with the core API, the same way the trace composer does.
//!
//! Run with:
//!
//! ```sh
//! cargo run --example nested_grid -p trellis > nested.svg
//! ```

use trellis::{
    color::Color,
    draw::{Grid, GridConfig, Stage, TextBox},
    geometry::{CellCoord, Dimensions, Point, Size},
    surface::SvgSurface,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut inner = Grid::new(GridConfig::new(
        Point::new(10.0, 10.0),
        Size::new(120.0, 40.0),
        Dimensions::new(3, 2),
    ))?;
    for (row, (id, role)) in [("Server0", "Leader"), ("Server1", "Follower")]
        .into_iter()
        .enumerate()
    {
        inner.place(CellCoord::new(0, row), TextBox::new(id))?;
        inner.place(
            CellCoord::new(1, row),
            TextBox::new(format!("role:{role}")).with_color(Color::new("steelblue")?),
        )?;
    }
    // Resolves to absolute (650, 50) once nested below.
    inner.place(CellCoord::new(2, 1), TextBox::new("voted:Server0"))?;

    let mut outer = Grid::new(GridConfig::new(
        Point::new(0.0, 0.0),
        Size::new(400.0, 300.0),
        Dimensions::new(2, 1),
    ))?;
    outer.place(
        CellCoord::new(0, 0),
        TextBox::new("State:0").with_font_size(18),
    )?;
    outer.place(CellCoord::new(1, 0), inner)?;

    let mut stage = Stage::new();
    stage.add(outer);

    let mut surface = SvgSurface::new().with_background(Color::new("white")?);
    stage.render(&mut surface)?;

    println!("{}", surface.to_svg_string());
    Ok(())
}
