use bevy::prelude::*;

use super::buttons::NORMAL_BUTTON;
use crate::components::{AlertText, MenuButton, ScreenRoot};
use crate::plugins::Screen;
use crate::resources::SetupAlert;

const TITLE_SIZE: f32 = 48.0;
const BODY_SIZE: f32 = 22.0;
const BUTTON_SIZE: f32 = 28.0;
const BACKDROP: Color = Color::srgb(0.05, 0.1, 0.2);
const ALERT_COLOR: Color = Color::srgb(0.9, 0.25, 0.2);

/// Key reference shown on the instructions screen.
pub const INSTRUCTIONS: [&str; 6] = [
    "Up / W: throttle and climb",
    "Down / S: dive",
    "Left / A: turn left",
    "Right / D: turn right",
    "P: pause",
    "Escape: back to the menu",
];

pub fn spawn_menu_screen(mut commands: Commands, alert: Res<SetupAlert>) {
    let root = spawn_screen_root(&mut commands, Screen::Menu);
    commands.entity(root).with_children(|parent| {
        spawn_title(parent, "Flight Sim");
        if let Some(message) = alert.message() {
            parent.spawn((
                Text::new(message),
                TextFont {
                    font_size: BODY_SIZE,
                    ..default()
                },
                TextColor(ALERT_COLOR),
                AlertText,
            ));
        }
        spawn_button(parent, MenuButton::Start);
        spawn_button(parent, MenuButton::Instructions);
        spawn_button(parent, MenuButton::Quit);
    });
}

pub fn spawn_instructions_screen(mut commands: Commands) {
    let root = spawn_screen_root(&mut commands, Screen::Instructions);
    commands.entity(root).with_children(|parent| {
        spawn_title(parent, "Instructions");
        for line in INSTRUCTIONS {
            spawn_body(parent, line);
        }
        spawn_button(parent, MenuButton::Back);
    });
}

pub fn spawn_quit_screen(mut commands: Commands) {
    let root = spawn_screen_root(&mut commands, Screen::Quit);
    commands.entity(root).with_children(|parent| {
        spawn_title(parent, "Thanks for flying");
        spawn_body(parent, "You can close this window now.");
        spawn_button(parent, MenuButton::Restart);
    });
}

/// Removes the UI and camera of whichever screen is being left.
pub fn despawn_screen_system(mut commands: Commands, query: Query<Entity, With<ScreenRoot>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}

/// Full window column plus the 2D camera that draws it.
fn spawn_screen_root(commands: &mut Commands, screen: Screen) -> Entity {
    debug!("Spawning {:?} screen", screen);
    commands.spawn((
        Camera2d,
        Camera {
            order: 1,
            ..default()
        },
        ScreenRoot(screen),
    ));
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Center,
                justify_content: JustifyContent::Center,
                row_gap: Val::Px(16.0),
                ..default()
            },
            BackgroundColor(BACKDROP),
            ScreenRoot(screen),
        ))
        .id()
}

fn spawn_title(parent: &mut ChildBuilder, title: &str) {
    parent.spawn((
        Text::new(title),
        TextFont {
            font_size: TITLE_SIZE,
            ..default()
        },
        TextColor(Color::WHITE),
    ));
}

fn spawn_body(parent: &mut ChildBuilder, line: &str) {
    parent.spawn((
        Text::new(line),
        TextFont {
            font_size: BODY_SIZE,
            ..default()
        },
        TextColor(Color::srgb(0.85, 0.85, 0.85)),
    ));
}

fn spawn_button(parent: &mut ChildBuilder, button: MenuButton) {
    parent
        .spawn((
            Button,
            Node {
                width: Val::Px(240.0),
                height: Val::Px(56.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(NORMAL_BUTTON),
            button,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(button.label()),
                TextFont {
                    font_size: BUTTON_SIZE,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
        });
}
