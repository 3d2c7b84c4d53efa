use ggez::graphics::{Mesh, MeshBuilder};
use ggez::Context;

use crate::app::session::Session;
use crate::error::{Error, ErrorConversion, Result};
use crate::grass::GrassField;
use crate::rendering::palette;

const BLADE_THICKNESS: f32 = 1.;

/// Rebuilt every frame, each blade is a line from its base to its
/// swaying tip
pub fn grass_mesh(session: &Session, ctx: &Context) -> Result<Mesh> {
    let time = session.clock.time();
    let mut builder = MeshBuilder::new();

    let res: Result<()> = session.grass.blades().iter().try_for_each(|blade| {
        let tip = GrassField::tip(blade, time, &session.prefs);
        builder
            .line(&[blade.base, tip], BLADE_THICKNESS, *palette::GRASS)
            .map(|_| ())
            .map_err(Error::from)
    });

    res.map(|()| Mesh::from_data(ctx, builder.build()))
        .with_trace_step("grass_mesh")
}
