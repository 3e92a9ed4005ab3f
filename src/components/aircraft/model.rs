use bevy::prelude::*;
use std::f32::consts::{FRAC_PI_2, PI};

/// Primitive geometry a model part is built from.
///
/// Cylinders and frustums stand along their local Y axis, tori lie in the XZ plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PartShape {
    Box {
        size: Vec3,
    },
    Frustum {
        radius_top: f32,
        radius_bottom: f32,
        height: f32,
        resolution: u32,
    },
    Sphere {
        radius: f32,
        sectors: u32,
        stacks: u32,
    },
    Torus {
        ring_radius: f32,
        tube_radius: f32,
    },
}

impl PartShape {
    pub fn cuboid(x: f32, y: f32, z: f32) -> Self {
        PartShape::Box {
            size: Vec3::new(x, y, z),
        }
    }

    pub fn cylinder(radius: f32, height: f32, resolution: u32) -> Self {
        PartShape::Frustum {
            radius_top: radius,
            radius_bottom: radius,
            height,
            resolution,
        }
    }

    pub fn frustum(radius_top: f32, radius_bottom: f32, height: f32, resolution: u32) -> Self {
        PartShape::Frustum {
            radius_top,
            radius_bottom,
            height,
            resolution,
        }
    }

    pub fn sphere(radius: f32, segments: u32) -> Self {
        PartShape::Sphere {
            radius,
            sectors: segments,
            stacks: segments,
        }
    }
}

/// Surface look of a part, mapped onto a PBR material by the renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Finish {
    pub color: Color,
    pub emissive: Color,
    /// 1.0 is fully opaque.
    pub opacity: f32,
    /// 0-100, higher is glossier.
    pub shininess: f32,
    pub double_sided: bool,
}

impl Finish {
    pub fn new(color: Color) -> Self {
        Self {
            color,
            emissive: Color::BLACK,
            opacity: 1.0,
            shininess: 30.0,
            double_sided: false,
        }
    }

    pub fn shininess(mut self, shininess: f32) -> Self {
        self.shininess = shininess;
        self
    }

    pub fn emissive(mut self, emissive: Color) -> Self {
        self.emissive = emissive;
        self
    }

    pub fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn double_sided(mut self) -> Self {
        self.double_sided = true;
        self
    }

    pub fn is_transparent(&self) -> bool {
        self.opacity < 1.0
    }

    /// Perceptual roughness equivalent of the shininess value.
    pub fn roughness(&self) -> f32 {
        (1.0 - self.shininess / 100.0).clamp(0.089, 1.0)
    }
}

/// A single named primitive placed in the model's local frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelPart {
    pub name: &'static str,
    pub shape: PartShape,
    pub finish: Finish,
    pub translation: Vec3,
    /// Euler angles applied in X, Y, Z order.
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl ModelPart {
    pub fn new(name: &'static str, shape: PartShape, finish: Finish) -> Self {
        Self {
            name,
            shape,
            finish,
            translation: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }

    pub fn at(mut self, x: f32, y: f32, z: f32) -> Self {
        self.translation = Vec3::new(x, y, z);
        self
    }

    pub fn rotated(mut self, x: f32, y: f32, z: f32) -> Self {
        self.rotation = Vec3::new(x, y, z);
        self
    }

    pub fn scaled(mut self, x: f32, y: f32, z: f32) -> Self {
        self.scale = Vec3::new(x, y, z);
        self
    }

    pub fn transform(&self) -> Transform {
        Transform {
            translation: self.translation,
            rotation: Quat::from_euler(
                EulerRot::XYZ,
                self.rotation.x,
                self.rotation.y,
                self.rotation.z,
            ),
            scale: self.scale,
        }
    }
}

/// The spinning propeller group, animated separately from the airframe.
#[derive(Debug, Clone, PartialEq)]
pub struct PropellerBlueprint {
    pub translation: Vec3,
    pub blades: Vec<ModelPart>,
}

/// A complete aircraft model as a flat list of parts plus its propeller.
#[derive(Debug, Clone, PartialEq)]
pub struct AircraftBlueprint {
    pub name: &'static str,
    pub parts: Vec<ModelPart>,
    pub propeller: PropellerBlueprint,
}

const WHITE: Color = Color::srgb(1.0, 1.0, 1.0);
const DARK_GREY: Color = Color::srgb(0.2, 0.2, 0.2);

impl AircraftBlueprint {
    pub fn part(&self, name: &str) -> Option<&ModelPart> {
        self.parts.iter().find(|part| part.name == name)
    }

    /// Parts plus blades.
    pub fn part_count(&self) -> usize {
        self.parts.len() + self.propeller.blades.len()
    }

    /// High wing single engine trainer, nose along +Z, wings along X.
    pub fn cessna_172() -> Self {
        let mut parts = Vec::new();
        parts.extend(fuselage());
        parts.extend(wings());
        parts.extend(tail());
        parts.extend(cockpit());
        parts.extend(landing_gear());
        parts.extend(details());

        Self {
            name: "Cessna 172",
            parts,
            propeller: propeller(),
        }
    }
}

fn fuselage() -> Vec<ModelPart> {
    let body = Finish::new(WHITE).shininess(60.0);
    let stripe = Finish::new(Color::srgb_u8(0x33, 0x66, 0xFF));

    vec![
        ModelPart::new("fuselage", PartShape::frustum(1.0, 0.8, 6.0, 12), body)
            .rotated(FRAC_PI_2, 0.0, 0.0),
        ModelPart::new("nose", PartShape::sphere(0.8, 12), body).at(0.0, 0.0, 3.0),
        ModelPart::new("stripe", PartShape::frustum(1.01, 0.81, 6.0, 12), stripe)
            .rotated(FRAC_PI_2, 0.0, 0.0)
            .scaled(1.0, 1.0, 0.05),
    ]
}

fn wings() -> Vec<ModelPart> {
    let wing = Finish::new(WHITE).shininess(40.0);
    let strut = Finish::new(Color::srgb_u8(0xCC, 0xCC, 0xCC)).shininess(20.0);
    let red_light = Finish::new(Color::srgb(1.0, 0.0, 0.0))
        .emissive(Color::srgb_u8(0x33, 0x00, 0x00))
        .shininess(100.0);
    let green_light = Finish::new(Color::srgb(0.0, 1.0, 0.0))
        .emissive(Color::srgb_u8(0x00, 0x33, 0x00))
        .shininess(100.0);

    vec![
        ModelPart::new("main_wing", PartShape::cuboid(10.0, 0.3, 2.0), wing).at(0.0, -0.2, 0.0),
        ModelPart::new("left_wing_strut", PartShape::cuboid(0.1, 1.5, 0.1), strut)
            .at(-2.0, 0.5, 0.0),
        ModelPart::new("right_wing_strut", PartShape::cuboid(0.1, 1.5, 0.1), strut)
            .at(2.0, 0.5, 0.0),
        ModelPart::new("left_nav_light", PartShape::cuboid(0.4, 0.4, 0.3), red_light)
            .at(-5.0, -0.2, 1.0),
        ModelPart::new("right_nav_light", PartShape::cuboid(0.4, 0.4, 0.3), green_light)
            .at(5.0, -0.2, 1.0),
    ]
}

fn tail() -> Vec<ModelPart> {
    let skin = Finish::new(WHITE).shininess(40.0);
    let beacon = Finish::new(Color::srgb(1.0, 0.0, 0.0))
        .emissive(Color::srgb_u8(0x33, 0x00, 0x00))
        .shininess(100.0);

    vec![
        ModelPart::new("horizontal_stabilizer", PartShape::cuboid(4.0, 0.2, 1.0), skin)
            .at(0.0, 0.5, -3.0),
        ModelPart::new("vertical_stabilizer", PartShape::cuboid(0.2, 1.5, 1.5), skin)
            .at(0.0, 1.2, -3.0),
        ModelPart::new("tail_beacon", PartShape::sphere(0.15, 8), beacon).at(0.0, 2.0, -3.0),
    ]
}

fn cockpit() -> Vec<ModelPart> {
    let glass = Finish::new(Color::srgb_u8(0x88, 0xCC, 0xFF))
        .opacity(0.5)
        .shininess(100.0);
    let frame = Finish::new(DARK_GREY);

    vec![
        ModelPart::new("windshield", PartShape::sphere(1.0, 12), glass)
            .at(0.0, 0.7, 1.5)
            .rotated(FRAC_PI_2, 0.0, 0.0)
            .scaled(0.7, 1.0, 0.7),
        // Ring already lies in the XZ plane.
        ModelPart::new(
            "windshield_frame",
            PartShape::Torus {
                ring_radius: 0.7,
                tube_radius: 0.05,
            },
            frame,
        )
        .at(0.0, 0.7, 1.5),
    ]
}

fn landing_gear() -> Vec<ModelPart> {
    let tyre = Finish::new(DARK_GREY);
    let leg = Finish::new(Color::srgb_u8(0x88, 0x88, 0x88)).shininess(20.0);

    vec![
        ModelPart::new("left_wheel", PartShape::cylinder(0.4, 0.2, 12), tyre)
            .at(-1.5, -1.2, 0.0)
            .rotated(0.0, 0.0, FRAC_PI_2),
        ModelPart::new("left_gear_strut", PartShape::cuboid(0.1, 1.0, 0.1), leg)
            .at(-1.5, -0.7, 0.0),
        ModelPart::new("right_wheel", PartShape::cylinder(0.4, 0.2, 12), tyre)
            .at(1.5, -1.2, 0.0)
            .rotated(0.0, 0.0, FRAC_PI_2),
        ModelPart::new("right_gear_strut", PartShape::cuboid(0.1, 1.0, 0.1), leg)
            .at(1.5, -0.7, 0.0),
        ModelPart::new("nose_wheel", PartShape::cylinder(0.3, 0.2, 12), tyre)
            .at(0.0, -1.0, 2.5)
            .rotated(0.0, 0.0, FRAC_PI_2),
        ModelPart::new("nose_gear_strut", PartShape::cuboid(0.1, 0.7, 0.1), leg)
            .at(0.0, -0.7, 2.5),
    ]
}

fn details() -> Vec<ModelPart> {
    let outline = Finish::new(DARK_GREY).shininess(20.0);

    vec![
        ModelPart::new("left_door", PartShape::cuboid(0.1, 0.8, 1.2), outline)
            .at(-0.95, 0.2, 0.5),
        ModelPart::new("right_door", PartShape::cuboid(0.1, 0.8, 1.2), outline)
            .at(0.95, 0.2, 0.5),
        ModelPart::new("propeller_hub", PartShape::cylinder(0.2, 0.3, 12), outline)
            .at(0.0, 0.0, 3.2)
            .rotated(FRAC_PI_2, 0.0, 0.0),
        ModelPart::new("antenna", PartShape::cylinder(0.02, 0.4, 4), Finish::new(WHITE))
            .at(0.0, 1.0, -1.0),
    ]
}

fn propeller() -> PropellerBlueprint {
    let blade = Finish::new(DARK_GREY).shininess(60.0).double_sided();
    let names = ["propeller_blade_a", "propeller_blade_b"];

    let blades = names
        .iter()
        .enumerate()
        .map(|(i, &name)| {
            let angle = i as f32 * PI;
            let offset = Quat::from_rotation_z(angle) * Vec3::new(0.0, 0.8, 0.0);
            ModelPart::new(name, PartShape::cuboid(0.1, 1.5, 0.2), blade)
                .at(offset.x, offset.y, offset.z)
                .rotated(0.0, 0.0, angle)
        })
        .collect();

    PropellerBlueprint {
        translation: Vec3::new(0.0, 0.0, 3.2),
        blades,
    }
}
