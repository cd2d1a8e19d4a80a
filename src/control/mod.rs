//! Control module: trajectory generation for motion planning
pub mod trajectory;
