pub mod front_matter;
pub mod tag_field;
