pub mod location;
pub mod pagination;
pub mod pokedex;
pub mod pokemon;
