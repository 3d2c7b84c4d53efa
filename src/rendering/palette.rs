use ggez::graphics::Color;
use lazy_static::lazy_static;

lazy_static! {
    pub static ref GRID_LINE: Color = Color::from_rgb(50, 50, 50);
    /// Darkens the grass behind the board
    pub static ref OVERLAY: Color = Color::from_rgba(30, 30, 30, 128);
    pub static ref GRASS: Color = Color::from_rgb(34, 139, 34);
    pub static ref OBSTACLE: Color = Color::from_rgb(38, 143, 185);
    pub static ref SNAKE: Color = Color::from_rgb(0, 255, 0);
    pub static ref FOOD: Color = Color::from_rgb(255, 0, 0);
    pub static ref FOG: Color = Color::from_rgb(0, 0, 0);
    pub static ref SPARKLE: Color = Color::from_rgb(255, 255, 255);

    pub static ref TEXT: Color = Color::from_rgb(255, 255, 255);
    pub static ref HIGHLIGHT: Color = Color::from_rgb(255, 255, 0);
    pub static ref HINT: Color = Color::from_rgb(200, 200, 200);
    pub static ref BUTTON_TEXT: Color = Color::from_rgb(0, 0, 0);
}

pub fn item_color(highlighted: bool) -> Color {
    if highlighted {
        *HIGHLIGHT
    } else {
        *TEXT
    }
}
