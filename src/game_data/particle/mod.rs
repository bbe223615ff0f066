pub mod particle;
pub mod particle_field;
pub mod particle_drawer;
