mod aircraft;
mod scene;
pub mod sky;
pub mod textures;

pub use aircraft::{attach_aircraft_meshes_system, part_material, part_mesh};
pub use scene::{
    activate_chase_camera_system, attach_chase_camera_system, build_scenery_system,
    deactivate_chase_camera_system,
};
pub use sky::{scatter_clouds, CloudPuff};
pub use textures::{grass_texture, pixmap_to_image, sky_gradient};
