pub mod header;
pub mod species_row;
pub mod summary;
