pub mod common;
pub mod inspect;
pub mod locate;
pub mod schema;
