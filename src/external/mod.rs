pub mod google_maps;
pub mod loader;
pub mod polyline;
