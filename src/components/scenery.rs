use bevy::prelude::*;

/// Everything spawned as part of the flight scenery (lights, ground, sky).
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct SceneryEntity;

#[derive(Component, Debug, Default, Clone, Copy)]
pub struct Terrain;

#[derive(Component, Debug, Default, Clone, Copy)]
pub struct SkyDome;

#[derive(Component, Debug, Default, Clone, Copy)]
pub struct Cloud;
