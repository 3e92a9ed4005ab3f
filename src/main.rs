use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy::window::PresentMode;
use std::{env, path::PathBuf};

use flightsim::{
    plugins::{FlightPlugin, SceneryPlugin, ScreenPlugin},
    resources::SimConfig,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let explicit = env::args_os().nth(1).map(PathBuf::from);
    let (config, source) = SimConfig::discover(explicit)?;
    // The window and logger exist before any screen can show an alert
    config.validate_startup()?;
    let level = config.log.level()?;
    let render = &config.render;

    let [r, g, b] = render.clear_color;
    let mut app = App::new();
    app.add_plugins(
        DefaultPlugins
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: render.window_title.clone(),
                    resolution: (render.screen_width as f32, render.screen_height as f32).into(),
                    present_mode: if render.vsync {
                        PresentMode::AutoVsync
                    } else {
                        PresentMode::AutoNoVsync
                    },
                    ..default()
                }),
                ..default()
            })
            .set(LogPlugin {
                level,
                filter: config.log.filter.clone(),
                ..default()
            }),
    )
    .insert_resource(ClearColor(Color::srgb_u8(r, g, b)))
    .add_plugins((
        ScreenPlugin,
        FlightPlugin::new(config.clone()),
        SceneryPlugin,
    ));

    match source {
        Some(path) => info!("Loaded config from {}", path.display()),
        None => info!("No config file found, using defaults"),
    }

    app.run();
    Ok(())
}
