pub mod draft;
pub mod maps;
pub mod status;
