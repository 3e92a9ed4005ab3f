use bevy::prelude::*;

use crate::plugins::Screen;

/// Root of the UI tree belonging to one screen, despawned when it is left.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenRoot(pub Screen);

/// Clickable menu entries and the screen each one leads to.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuButton {
    Start,
    Instructions,
    Quit,
    Back,
    Restart,
}

impl MenuButton {
    pub fn label(&self) -> &'static str {
        match self {
            MenuButton::Start => "Start",
            MenuButton::Instructions => "Instructions",
            MenuButton::Quit => "Quit",
            MenuButton::Back => "Back",
            MenuButton::Restart => "Restart",
        }
    }

    pub fn target(&self) -> Screen {
        match self {
            MenuButton::Start => Screen::Flying,
            MenuButton::Instructions => Screen::Instructions,
            MenuButton::Quit => Screen::Quit,
            MenuButton::Back | MenuButton::Restart => Screen::Menu,
        }
    }
}

/// Text node showing the last setup failure on the menu.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct AlertText;
