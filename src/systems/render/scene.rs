use bevy::pbr::{DirectionalLightShadowMap, NotShadowCaster};
use bevy::prelude::*;
use bevy::render::render_resource::Face;

use super::sky::{scatter_clouds, CloudPuff};
use super::textures::{grass_texture, pixmap_to_image, sky_gradient};
use crate::components::{ChaseCamera, Cloud, SceneryEntity, SkyDome, Terrain};
use crate::resources::{RenderConfig, SceneryState, SetupError, SimConfig, SkyConfig};
use crate::systems::terrain::{TerrainGenerator, TerrainGrid};
use crate::utils::RngManager;

const CLOUD_SEGMENTS: u32 = 8;

/// Builds lights, terrain, sky dome and clouds the first time it runs.
///
/// Everything fallible is generated before anything is spawned, so a failure
/// leaves no partial scene behind.
pub fn build_scenery_system(
    mut commands: Commands,
    mut scenery: ResMut<SceneryState>,
    config: Res<SimConfig>,
    rng_manager: Res<RngManager>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut images: ResMut<Assets<Image>>,
) -> Result<(), SetupError> {
    if scenery.built {
        return Ok(());
    }

    let grid = TerrainGenerator::new(&config.terrain, rng_manager.master_seed()).grid()?;
    let grass = grass_texture(&config.terrain, &mut rng_manager.stream("grass"))?;
    let gradient = sky_gradient(&config.sky)?;
    let clouds = scatter_clouds(&config.sky, &mut rng_manager.stream("clouds"));
    debug!(
        "Generated terrain with {} vertices peaking at {:.1}, and {} clouds",
        grid.vertex_count(),
        grid.max_height(),
        clouds.len()
    );

    spawn_lights(&mut commands, &config.render);

    let grass = images.add(pixmap_to_image(grass, true));
    spawn_terrain(&mut commands, grid, grass, &mut meshes, &mut materials);

    let gradient = images.add(pixmap_to_image(gradient, false));
    spawn_sky(&mut commands, &config.sky, gradient, &mut meshes, &mut materials);
    spawn_clouds(&mut commands, &config.sky, &clouds, &mut meshes, &mut materials);

    scenery.built = true;
    info!("Scenery built");
    Ok(())
}

fn spawn_lights(commands: &mut Commands, config: &RenderConfig) {
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: config.ambient_brightness,
    });
    commands.insert_resource(DirectionalLightShadowMap {
        size: config.shadow_map_size,
    });

    let [x, y, z] = config.sun_position;
    commands.spawn((
        DirectionalLight {
            color: Color::WHITE,
            illuminance: config.sun_illuminance,
            shadows_enabled: config.shadows,
            ..default()
        },
        Transform::from_xyz(x, y, z).looking_at(Vec3::ZERO, Vec3::Y),
        SceneryEntity,
        Name::new("sun"),
    ));
}

fn spawn_terrain(
    commands: &mut Commands,
    grid: TerrainGrid,
    texture: Handle<Image>,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) {
    commands.spawn((
        Mesh3d(meshes.add(grid.into_mesh())),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color_texture: Some(texture),
            perceptual_roughness: 0.95,
            double_sided: true,
            cull_mode: None,
            ..default()
        })),
        Transform::default(),
        Terrain,
        SceneryEntity,
        Name::new("terrain"),
    ));
}

fn spawn_sky(
    commands: &mut Commands,
    config: &SkyConfig,
    texture: Handle<Image>,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) {
    let dome = Sphere::new(config.dome_radius)
        .mesh()
        .uv(config.dome_segments, config.dome_segments);

    // Seen from inside, so only back faces are drawn.
    commands.spawn((
        Mesh3d(meshes.add(dome)),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color_texture: Some(texture),
            unlit: true,
            cull_mode: Some(Face::Front),
            ..default()
        })),
        Transform::default(),
        NotShadowCaster,
        SkyDome,
        SceneryEntity,
        Name::new("sky"),
    ));
}

fn spawn_clouds(
    commands: &mut Commands,
    config: &SkyConfig,
    clouds: &[CloudPuff],
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) {
    let mesh = meshes.add(Sphere::new(1.0).mesh().uv(CLOUD_SEGMENTS, CLOUD_SEGMENTS));
    let material = materials.add(StandardMaterial {
        base_color: Color::WHITE.with_alpha(config.cloud_opacity),
        alpha_mode: AlphaMode::Blend,
        perceptual_roughness: 1.0,
        ..default()
    });

    for (i, cloud) in clouds.iter().enumerate() {
        commands.spawn((
            Mesh3d(mesh.clone()),
            MeshMaterial3d(material.clone()),
            Transform::from_translation(cloud.center).with_scale(Vec3::splat(cloud.radius)),
            NotShadowCaster,
            Cloud,
            SceneryEntity,
            Name::new(format!("cloud_{i}")),
        ));
    }
}

/// Turns a logical chase camera into a rendering 3D camera.
pub fn attach_chase_camera_system(
    mut commands: Commands,
    query: Query<(Entity, &ChaseCamera), Added<ChaseCamera>>,
) {
    for (entity, chase) in query.iter() {
        debug!("Attaching 3D camera to {:?}", entity);
        commands.entity(entity).insert((
            Camera3d::default(),
            Projection::Perspective(PerspectiveProjection {
                fov: chase.fov_degrees.to_radians(),
                near: chase.near,
                far: chase.far,
                ..default()
            }),
        ));
    }
}

pub fn activate_chase_camera_system(mut query: Query<&mut Camera, With<ChaseCamera>>) {
    for mut camera in query.iter_mut() {
        camera.is_active = true;
    }
}

pub fn deactivate_chase_camera_system(mut query: Query<&mut Camera, With<ChaseCamera>>) {
    for mut camera in query.iter_mut() {
        camera.is_active = false;
    }
}
