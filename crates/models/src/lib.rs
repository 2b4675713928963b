pub mod errors;
pub mod db;
pub mod dates;
pub mod coerce;
pub mod employee;
pub mod salary;
pub mod pond;
pub mod pond_entry;
pub mod product;

#[cfg(test)]
mod tests;
