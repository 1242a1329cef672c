pub mod background;
pub mod composite;
pub mod raster;
