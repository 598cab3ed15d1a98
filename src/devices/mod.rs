//! vexide and evian implementations of the robot's external pieces.

pub mod clock;
pub mod hardware;
pub mod odom_chassis;
pub mod sd_card;
