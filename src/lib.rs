pub mod api;
pub mod clients;
pub mod dadata;
pub mod debounce;
pub mod map;
pub mod net;
pub mod suggest;
pub mod types;
