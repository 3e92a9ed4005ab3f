use bevy::prelude::*;

use crate::resources::SetupAlert;
use crate::systems::{
    button_highlight_system, clear_alert_system, despawn_screen_system, menu_button_system,
    spawn_instructions_screen, spawn_menu_screen, spawn_quit_screen,
};

/// Top level screens of the game.
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum Screen {
    #[default]
    Menu,
    Instructions,
    Flying,
    Quit,
}

/// Screen state machine and the menu UI.
pub struct ScreenPlugin;

impl Plugin for ScreenPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<Screen>()
            .init_resource::<SetupAlert>()
            .add_systems(OnEnter(Screen::Menu), spawn_menu_screen)
            .add_systems(
                OnExit(Screen::Menu),
                (despawn_screen_system, clear_alert_system),
            )
            .add_systems(OnEnter(Screen::Instructions), spawn_instructions_screen)
            .add_systems(OnExit(Screen::Instructions), despawn_screen_system)
            .add_systems(OnEnter(Screen::Quit), spawn_quit_screen)
            .add_systems(OnExit(Screen::Quit), despawn_screen_system)
            .add_systems(
                Update,
                (
                    log_screen_changes,
                    menu_button_system,
                    button_highlight_system,
                ),
            );
    }
}

fn log_screen_changes(mut transitions: EventReader<StateTransitionEvent<Screen>>) {
    for transition in transitions.read() {
        info!(
            "Screen changed from {:?} to {:?}",
            transition.exited, transition.entered
        );
    }
}
