mod aircraft;
mod propeller;
mod session;

pub use aircraft::{flight_update_system, sync_model_transform_system, update_aircraft};
pub use propeller::{propeller_spin_system, propeller_step};
pub use session::{begin_flight_system, end_flight_system, validate_setup_system};
