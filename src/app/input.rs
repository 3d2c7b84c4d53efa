use ggez::input::keyboard::KeyCode::{self, *};

use crate::basic::Dir;

/// Abstract input, the same keys drive menus and the snake
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Input {
    Dir(Dir),
    Confirm,
    Cancel,
}

impl Input {
    pub fn from_keycode(key: KeyCode) -> Option<Self> {
        #[rustfmt::skip]
        let input = match key {
            Up | W => Self::Dir(Dir::U),
            Down | S => Self::Dir(Dir::D),
            Left | A => Self::Dir(Dir::L),
            Right | D => Self::Dir(Dir::R),
            Return | NumpadEnter => Self::Confirm,
            Escape => Self::Cancel,
            _ => return None,
        };
        Some(input)
    }
}

#[test]
fn test_key_mapping() {
    assert_eq!(Input::from_keycode(W), Some(Input::Dir(Dir::U)));
    assert_eq!(Input::from_keycode(Left), Some(Input::Dir(Dir::L)));
    assert_eq!(Input::from_keycode(D), Some(Input::Dir(Dir::R)));
    assert_eq!(Input::from_keycode(Return), Some(Input::Confirm));
    assert_eq!(Input::from_keycode(Escape), Some(Input::Cancel));
    assert_eq!(Input::from_keycode(Space), None);
}
