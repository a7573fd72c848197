//! Locomotion domain: system modules for input, spatial queries and the fixed-step drive.

pub(crate) mod drive;
pub(crate) mod input;
pub(crate) mod physics;
pub(crate) mod surfaces;

pub(crate) use drive::drive_player_locomotion;
pub(crate) use input::read_input;
pub(crate) use surfaces::update_gust_flag;
