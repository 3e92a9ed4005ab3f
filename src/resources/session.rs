use bevy::prelude::*;

/// Explicit run flag of the per-frame flight loop.
///
/// The flight systems only run while the loop is running and not paused.
/// Entering the flight screen starts it, leaving the screen stops it.
#[derive(Resource, Debug, Default, Clone, PartialEq, Eq)]
pub struct FlightLoop {
    running: bool,
    paused: bool,
    frames: u64,
}

impl FlightLoop {
    pub fn start(&mut self) {
        self.running = true;
        self.paused = false;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        self.paused
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// True when the flight systems should advance this frame.
    pub fn is_active(&self) -> bool {
        self.running && !self.paused
    }

    pub fn tick(&mut self) {
        self.frames += 1;
    }

    /// Flight frames simulated since the process started.
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

/// Run condition for the flight systems.
pub fn flight_loop_active(flight_loop: Res<FlightLoop>) -> bool {
    flight_loop.is_active()
}

/// Whether the aircraft and chase camera have been spawned.
#[derive(Resource, Debug, Default)]
pub struct FlightSession {
    pub initialized: bool,
}

/// Whether the static scenery (lights, terrain, sky) exists.
#[derive(Resource, Debug, Default)]
pub struct SceneryState {
    pub built: bool,
}

/// Message from the last failed scene setup, shown on the menu.
#[derive(Resource, Debug, Default, Clone)]
pub struct SetupAlert(pub Option<String>);

impl SetupAlert {
    pub fn raise(&mut self, message: impl Into<String>) {
        self.0 = Some(message.into());
    }

    pub fn message(&self) -> Option<&str> {
        self.0.as_deref()
    }

    pub fn clear(&mut self) {
        self.0 = None;
    }
}

/// Run condition: no setup step of the current flight entry has failed.
pub fn setup_succeeded(alert: Res<SetupAlert>) -> bool {
    alert.message().is_none()
}
