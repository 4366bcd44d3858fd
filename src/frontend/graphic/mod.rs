pub mod constants;
pub mod data_type;
pub mod hal;
pub mod mesh;
pub mod renderer;
pub mod window;
