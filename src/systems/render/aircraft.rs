use bevy::prelude::*;
use bevy::render::render_resource::Face;

use crate::components::{
    AircraftBlueprint, AircraftModel, Finish, ModelPart, PartShape, PropellerBlades,
};

/// Builds the child meshes of every newly spawned aircraft model.
pub fn attach_aircraft_meshes_system(
    mut commands: Commands,
    query: Query<Entity, Added<AircraftModel>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for entity in query.iter() {
        let blueprint = AircraftBlueprint::cessna_172();
        info!(
            "Building {} model from {} parts",
            blueprint.name,
            blueprint.part_count()
        );

        commands.entity(entity).with_children(|parent| {
            for part in &blueprint.parts {
                spawn_part(parent, part, &mut meshes, &mut materials);
            }

            parent
                .spawn((
                    PropellerBlades,
                    Transform::from_translation(blueprint.propeller.translation),
                    Visibility::default(),
                    Name::new("propeller"),
                ))
                .with_children(|propeller| {
                    for blade in &blueprint.propeller.blades {
                        spawn_part(propeller, blade, &mut meshes, &mut materials);
                    }
                });
        });
    }
}

fn spawn_part(
    parent: &mut ChildBuilder,
    part: &ModelPart,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) {
    parent.spawn((
        Mesh3d(meshes.add(part_mesh(&part.shape))),
        MeshMaterial3d(materials.add(part_material(&part.finish))),
        part.transform(),
        Name::new(part.name),
    ));
}

pub fn part_mesh(shape: &PartShape) -> Mesh {
    match *shape {
        PartShape::Box { size } => Cuboid::from_size(size).into(),
        PartShape::Frustum {
            radius_top,
            radius_bottom,
            height,
            resolution,
        } => {
            if radius_top == radius_bottom {
                Cylinder::new(radius_top, height)
                    .mesh()
                    .resolution(resolution)
                    .into()
            } else {
                ConicalFrustum {
                    radius_top,
                    radius_bottom,
                    height,
                }
                .mesh()
                .resolution(resolution)
                .into()
            }
        }
        PartShape::Sphere {
            radius,
            sectors,
            stacks,
        } => Sphere::new(radius).mesh().uv(sectors, stacks),
        PartShape::Torus {
            ring_radius,
            tube_radius,
        } => Torus {
            minor_radius: tube_radius,
            major_radius: ring_radius,
        }
        .into(),
    }
}

pub fn part_material(finish: &Finish) -> StandardMaterial {
    StandardMaterial {
        base_color: finish.color.with_alpha(finish.opacity),
        emissive: finish.emissive.to_linear(),
        perceptual_roughness: finish.roughness(),
        alpha_mode: if finish.is_transparent() {
            AlphaMode::Blend
        } else {
            AlphaMode::Opaque
        },
        double_sided: finish.double_sided,
        cull_mode: if finish.double_sided {
            None
        } else {
            Some(Face::Back)
        },
        ..default()
    }
}
