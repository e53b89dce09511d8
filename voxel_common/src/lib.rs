pub mod camera;
pub mod camera_controller;
pub mod frames_per_second;
pub mod gpu_buffer;
pub mod gpu_structs;
pub mod parameters;
pub mod ray;
pub mod rotation_matrix;
pub mod traversal;
pub mod util_funcs;
pub mod volume;
pub mod voxel;
pub mod wgpu_state;
