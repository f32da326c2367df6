pub mod address;
pub mod dadata;
pub mod dto;
