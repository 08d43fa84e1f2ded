pub mod alloc;
pub mod error;
pub mod fmt;
pub mod option;
pub mod panic;
pub mod quick;
pub mod result;
