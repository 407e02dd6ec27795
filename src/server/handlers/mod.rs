pub mod inputs;
pub mod map;
pub mod route;
pub mod view;
