mod controller;
mod root;
mod state;

pub use controller::{ChartController, ChartEvent};
pub use root::App;
