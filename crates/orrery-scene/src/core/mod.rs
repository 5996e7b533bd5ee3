pub mod frame;
pub mod hover;
pub mod scene;
