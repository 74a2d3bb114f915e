pub mod booking;
pub mod slot;
pub mod space;
pub mod status;
