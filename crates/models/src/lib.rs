pub mod company;
pub mod contact;
pub mod db;
pub mod errors;
pub mod ids;
pub mod property;
pub mod seed;
