pub mod request_counter;

pub use request_counter::RequestCounter;
