pub mod generate;
pub mod schema_loader;
pub mod signatures;

#[cfg(test)]
mod fixtures;
