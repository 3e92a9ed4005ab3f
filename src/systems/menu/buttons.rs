use bevy::prelude::*;

use crate::components::MenuButton;
use crate::plugins::Screen;

pub const NORMAL_BUTTON: Color = Color::srgb(0.15, 0.15, 0.15);
pub const HOVERED_BUTTON: Color = Color::srgb(0.25, 0.25, 0.25);
pub const PRESSED_BUTTON: Color = Color::srgb(0.35, 0.55, 0.35);

/// Moves to the screen a pressed menu button leads to.
pub fn menu_button_system(
    query: Query<(&Interaction, &MenuButton), Changed<Interaction>>,
    mut next_screen: ResMut<NextState<Screen>>,
) {
    for (interaction, button) in query.iter() {
        if *interaction == Interaction::Pressed {
            info!("{} pressed", button.label());
            next_screen.set(button.target());
        }
    }
}

pub fn button_highlight_system(
    mut query: Query<(&Interaction, &mut BackgroundColor), (Changed<Interaction>, With<Button>)>,
) {
    for (interaction, mut background) in query.iter_mut() {
        *background = match *interaction {
            Interaction::Pressed => PRESSED_BUTTON.into(),
            Interaction::Hovered => HOVERED_BUTTON.into(),
            Interaction::None => NORMAL_BUTTON.into(),
        };
    }
}
