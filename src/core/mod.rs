pub mod availability;
pub mod book;
pub mod day;
pub mod del;
pub mod slots;
pub mod status;
