pub mod collection;
pub mod track;
