pub mod dates;
pub mod text;
