use ggez::graphics::{Mesh, MeshBuilder};
use ggez::Context;

use crate::basic::{GridDim, Point};
use crate::error::{Error, ErrorConversion, Result};
use crate::rendering::palette;

const GRID_THICKNESS: f32 = 1.;

// built once, the grid never changes
pub fn grid_mesh(grid: GridDim, ctx: &Context) -> Result<Mesh> {
    let (width, height) = (grid.width as f32, grid.height as f32);
    let mut builder = MeshBuilder::new();

    let res: Result<()> = (0..grid.columns())
        .map(|col| {
            let x = (col * grid.step) as f32;
            [Point { x, y: 0. }, Point { x, y: height }]
        })
        .chain((0..grid.rows()).map(|row| {
            let y = (row * grid.step) as f32;
            [Point { x: 0., y }, Point { x: width, y }]
        }))
        .try_for_each(|line| {
            builder
                .line(&line, GRID_THICKNESS, *palette::GRID_LINE)
                .map(|_| ())
                .map_err(Error::from)
        });

    res.map(|()| Mesh::from_data(ctx, builder.build()))
        .with_trace_step("grid_mesh")
}
