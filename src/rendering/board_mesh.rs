use ggez::graphics::{DrawMode, Mesh, MeshBuilder, Rect};
use ggez::{Context, GameResult};

use crate::app::prefs::GameMode;
use crate::app::session::Session;
use crate::basic::{Cell, GridDim, Point};
use crate::error::{Error, ErrorConversion, Result};
use crate::flashlight;
use crate::game::Game;
use crate::rendering::palette;

const SPARKLE_SIZE: f32 = 5.;

fn cell_rect(cell: Cell, grid: GridDim) -> Rect {
    let step = grid.step as f32;
    Rect::new(cell.x as f32, cell.y as f32, step, step)
}

/// Everything on the playing field above the grid: overlay, obstacles,
/// snake, food, the flashlight fog and sparkles, in that order
pub fn board_mesh(game: &Game, session: &Session, ctx: &Context) -> Result<Mesh> {
    let grid = session.grid;
    let fill = DrawMode::fill();
    let mut builder = MeshBuilder::new();

    let res: Result<()> = (|| -> GameResult {
        let screen = Rect::new(0., 0., grid.width as f32, grid.height as f32);
        builder.rectangle(fill, screen, *palette::OVERLAY)?;

        for cell in game.obstacles() {
            builder.rectangle(fill, cell_rect(*cell, grid), *palette::OBSTACLE)?;
        }
        for cell in game.snake().cells() {
            builder.rectangle(fill, cell_rect(cell, grid), *palette::SNAKE)?;
        }
        for cell in game.food() {
            builder.rectangle(fill, cell_rect(*cell, grid), *palette::FOOD)?;
        }

        if session.prefs.mode == GameMode::Flashlight {
            for cell in flashlight::occluded_cells(game.snake().head(), grid) {
                builder.rectangle(fill, cell_rect(cell, grid), *palette::FOG)?;
            }
        }

        for sparkle in session.sparkles.iter() {
            let size = SPARKLE_SIZE * sparkle.life;
            let corner = sparkle.pos - Point::square(size / 2.);
            let rect = Rect::new(corner.x, corner.y, size, size);
            let mut color = *palette::SPARKLE;
            color.a = ezing::quad_out(sparkle.life);
            builder.rectangle(fill, rect, color)?;
        }
        Ok(())
    })()
    .map_err(Error::from);

    res.map(|()| Mesh::from_data(ctx, builder.build()))
        .with_trace_step("board_mesh")
}
