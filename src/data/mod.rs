pub mod curve;
pub mod payload;
pub mod series_look;
pub mod state;
