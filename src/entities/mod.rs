pub mod category;
pub mod director;
pub mod movie;
