pub mod vitals;

pub use vitals::VitalsReadout;
