use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use flightsim::{
    plugins::{FlightPlugin, SceneryPlugin, Screen, ScreenPlugin},
    resources::{FlightLoop, SimConfig},
};

// Builder for creating a headless test application with customizable configuration
pub struct TestAppBuilder {
    config: SimConfig,
    scenery: bool,
}

impl Default for TestAppBuilder {
    fn default() -> Self {
        Self {
            config: SimConfig::default(),
            scenery: false,
        }
    }
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: SimConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_tick_rate(mut self, hz: f64) -> Self {
        self.config.tick_rate_hz = Some(hz);
        self
    }

    /// Adds the scenery plugin with bare asset storages instead of a renderer.
    pub fn with_scenery(mut self) -> Self {
        self.scenery = true;
        self
    }

    pub fn build(self) -> TestApp {
        let mut app = App::new();

        app.add_plugins((MinimalPlugins, StatesPlugin))
            .init_resource::<ButtonInput<KeyCode>>()
            .add_plugins(ScreenPlugin)
            .add_plugins(FlightPlugin::new(self.config));

        if self.scenery {
            app.init_resource::<Assets<Mesh>>()
                .init_resource::<Assets<StandardMaterial>>()
                .init_resource::<Assets<Image>>()
                .add_plugins(SceneryPlugin);
        }

        // Run an initial update to enter the menu
        app.update();

        TestApp { app }
    }
}

/// Main test application wrapper
pub struct TestApp {
    pub app: App,
}

impl TestApp {
    pub fn run_steps(&mut self, steps: usize) {
        for _ in 0..steps {
            self.app.update();
        }
    }

    pub fn run_frame(&mut self) {
        self.app.update();
    }

    pub fn screen(&self) -> Screen {
        *self.app.world().resource::<State<Screen>>().get()
    }

    /// Requests a screen change; it applies on the next frame.
    pub fn set_screen(&mut self, screen: Screen) {
        self.app
            .world_mut()
            .resource_mut::<NextState<Screen>>()
            .set(screen);
    }

    /// Enters the flight screen and runs its first frame.
    pub fn start_flight(&mut self) {
        self.set_screen(Screen::Flying);
        self.run_frame();
    }

    pub fn press(&mut self, key: KeyCode) {
        self.app
            .world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(key);
    }

    pub fn release(&mut self, key: KeyCode) {
        self.app
            .world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .release(key);
    }

    /// Forgets this frame's just pressed keys, as the input plugin would.
    pub fn clear_input(&mut self) {
        self.app
            .world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .clear();
    }

    /// Presses a key for one frame and releases it.
    pub fn tap(&mut self, key: KeyCode) {
        self.press(key);
        self.run_frame();
        self.release(key);
        self.clear_input();
    }

    pub fn flight_loop(&self) -> &FlightLoop {
        self.app.world().resource::<FlightLoop>()
    }

    pub fn get_state<T: Resource>(&self) -> Option<&T> {
        self.app.world().get_resource::<T>()
    }

    pub fn get_state_mut<T: Resource>(&mut self) -> Option<Mut<T>> {
        self.app.world_mut().get_resource_mut::<T>()
    }

    pub fn query_single<T: Component>(&mut self) -> Option<&T> {
        let world = self.app.world_mut();
        let mut query = world.query::<&T>();
        query.get_single(world).ok()
    }

    pub fn query_single_mut<T: Component>(&mut self) -> Option<Mut<T>> {
        let world = self.app.world_mut();
        let mut query = world.query::<&mut T>();
        query.get_single_mut(world).ok()
    }

    pub fn count<T: Component>(&mut self) -> usize {
        let world = self.app.world_mut();
        let mut query = world.query_filtered::<Entity, With<T>>();
        query.iter(world).count()
    }
}
