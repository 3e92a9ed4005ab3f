use flightsim::resources::SimConfig;

/// Default config with a coarse terrain and small textures, quick to build.
pub fn light_scenery_config() -> SimConfig {
    let mut config = SimConfig::default();
    config.terrain.subdivisions = 16;
    config.terrain.texture_size = 32;
    config.terrain.speckle_count = 50;
    config.sky.dome_segments = 8;
    config
}

/// A config that fails validation when the flight starts.
pub fn broken_aircraft_config() -> SimConfig {
    let mut config = SimConfig::default();
    config.aircraft.max_speed = 0.0;
    config
}

/// A config whose terrain cannot be generated.
pub fn broken_terrain_config() -> SimConfig {
    let mut config = light_scenery_config();
    config.terrain.texture_size = 0;
    config
}
