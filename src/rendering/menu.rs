//! Text and buttons for the menus and the score display

use std::path::Path;

use ggez::graphics::{
    Canvas, Color, DrawParam, FontData, Quad, Rect, Text, TextFragment, TextLayout,
};
use ggez::Context;
use log::info;

use crate::app::menu::{ConfigItem, MainItem, MenuItem, PauseItem, Selection};
use crate::app::prefs::{GameMode, Prefs};
use crate::basic::{Point, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::error::{Error, ErrorConversion, Result};
use crate::rendering::palette;

const CENTER_X: f32 = SCREEN_WIDTH as f32 / 2.;
const CENTER_Y: f32 = SCREEN_HEIGHT as f32 / 2.;

const ITEM_FONT_SIZE: f32 = 24.;
const SCORE_FONT_SIZE: f32 = 28.;
const TITLE_FONT_SIZE: f32 = 28.;
const HINT_FONT_SIZE: f32 = 16.;

/// Optional custom font, `None` uses ggez's built-in font
#[derive(Clone, Debug, Default)]
pub struct Typeface(pub Option<String>);

impl Typeface {
    const CUSTOM: &'static str = "custom";

    /// Register the font at `path` (relative to the resource directory)
    pub fn load(ctx: &mut Context, path: &Path) -> Result<Self> {
        let res: Result<Self> = FontData::from_path(&*ctx, path)
            .map(|data| {
                ctx.gfx.add_font(Self::CUSTOM, data);
                info!("using font {}", path.display());
                Self(Some(Self::CUSTOM.to_string()))
            })
            .map_err(Error::from);
        res.with_trace_step(format!("Typeface::load({})", path.display()))
    }

    fn text(&self, s: &str, size: f32, color: Color) -> Text {
        let mut fragment = TextFragment::new(s).color(color).scale(size);
        if let Some(font) = &self.0 {
            fragment = fragment.font(font.as_str());
        }
        Text::new(fragment)
    }

    /// `pos` is the center of the text
    fn centered(&self, canvas: &mut Canvas, s: &str, pos: Point, size: f32, color: Color) {
        let mut text = self.text(s, size, color);
        text.set_layout(TextLayout::center());
        canvas.draw(&text, DrawParam::default().dest(pos));
    }

    /// `pos` is the top left corner of the text
    fn top_left(&self, canvas: &mut Canvas, s: &str, pos: Point, size: f32, color: Color) {
        let text = self.text(s, size, color);
        canvas.draw(&text, DrawParam::default().dest(pos));
    }

    fn button(&self, canvas: &mut Canvas, label: &str, rect: Rect, highlighted: bool) {
        let fill = palette::item_color(highlighted);
        canvas.draw(&Quad, DrawParam::default().dest_rect(rect).color(fill));
        let center = Point {
            x: rect.x + rect.w / 2.,
            y: rect.y + rect.h / 2.,
        };
        self.centered(canvas, label, center, ITEM_FONT_SIZE, *palette::BUTTON_TEXT);
    }
}

fn button_rect(width: f32, top: f32) -> Rect {
    Rect::new(CENTER_X - width / 2., top, width, 40.)
}

pub fn main_menu(canvas: &mut Canvas, typeface: &Typeface, selection: &Selection<MainItem>) {
    for (i, (item, highlighted)) in selection.items().enumerate() {
        let rect = button_rect(220., 200. + i as f32 * 60.);
        typeface.button(canvas, item.label(), rect, highlighted);
    }
    typeface.centered(
        canvas,
        "Use UP/DOWN to select, ENTER to confirm. ESC to pause/return",
        Point { x: CENTER_X, y: CENTER_Y + 150. },
        HINT_FONT_SIZE,
        *palette::HINT,
    );
}

pub fn pause_menu(canvas: &mut Canvas, typeface: &Typeface, selection: &Selection<PauseItem>) {
    typeface.centered(
        canvas,
        "Game Paused",
        Point { x: CENTER_X, y: CENTER_Y - 80. },
        32.,
        *palette::HIGHLIGHT,
    );
    for (i, (item, highlighted)) in selection.items().enumerate() {
        let rect = button_rect(200., CENTER_Y - 20. + i as f32 * 60.);
        typeface.button(canvas, item.label(), rect, highlighted);
    }
    typeface.centered(
        canvas,
        "Use ENTER to select, ESC to resume",
        Point { x: CENTER_X, y: CENTER_Y + 90. },
        HINT_FONT_SIZE,
        *palette::HINT,
    );
}

// rows are centered horizontally, `top` is the top edge of the first row
fn rows<T: MenuItem>(
    canvas: &mut Canvas,
    typeface: &Typeface,
    selection: &Selection<T>,
    top: f32,
    spacing: f32,
    line: impl Fn(T) -> String,
) {
    for (i, (item, highlighted)) in selection.items().enumerate() {
        let y = top + i as f32 * spacing + ITEM_FONT_SIZE / 2.;
        typeface.centered(
            canvas,
            &line(item),
            Point { x: CENTER_X, y },
            ITEM_FONT_SIZE,
            palette::item_color(highlighted),
        );
    }
}

pub fn config_menu(
    canvas: &mut Canvas,
    typeface: &Typeface,
    selection: &Selection<ConfigItem>,
    prefs: &Prefs,
) {
    typeface.centered(
        canvas,
        "CONFIG MENU",
        Point { x: CENTER_X, y: 50. },
        TITLE_FONT_SIZE,
        *palette::HIGHLIGHT,
    );
    rows(canvas, typeface, selection, 150., 50., |item| item.line(prefs));
    typeface.centered(
        canvas,
        "Use UP/DOWN to select, LEFT/RIGHT to adjust. ESC = back",
        Point { x: CENTER_X, y: SCREEN_HEIGHT as f32 - 40. },
        HINT_FONT_SIZE,
        *palette::HINT,
    );
}

pub fn mode_menu(canvas: &mut Canvas, typeface: &Typeface, selection: &Selection<GameMode>) {
    typeface.centered(
        canvas,
        "CHOOSE GAME MODE",
        Point { x: CENTER_X, y: 60. },
        TITLE_FONT_SIZE,
        *palette::HIGHLIGHT,
    );
    rows(canvas, typeface, selection, 200., 60., |mode| mode.label().to_string());
    typeface.centered(
        canvas,
        "Use UP/DOWN to highlight, ENTER to confirm. ESC to return",
        Point { x: CENTER_X, y: SCREEN_HEIGHT as f32 - 40. },
        HINT_FONT_SIZE,
        *palette::HINT,
    );
}

pub fn score(canvas: &mut Canvas, typeface: &Typeface, score: u32, high_score: u32) {
    typeface.top_left(
        canvas,
        &format!("Score: {}", score),
        Point { x: 10., y: 10. },
        SCORE_FONT_SIZE,
        *palette::TEXT,
    );
    typeface.top_left(
        canvas,
        &format!("High: {}", high_score),
        Point { x: 10., y: 40. },
        SCORE_FONT_SIZE,
        *palette::HIGHLIGHT,
    );
}
