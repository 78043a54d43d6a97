pub mod blocking;
pub mod boundary;
pub mod clock;
pub mod input;
pub mod input_adapter;
pub mod motion;
pub mod orbit;
pub mod pan;
pub mod zoom;
