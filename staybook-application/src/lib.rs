#[macro_use]
extern crate log;

mod create_booking;
mod create_review;
mod delete_spot;
mod spot_images;

pub mod prelude {
    pub use super::{create_booking::*, create_review::*, delete_spot::*, spot_images::*};
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use staybook_core::{entities::*, usecases};

#[cfg(test)]
pub(crate) mod tests;

pub(crate) mod sqlite {
    pub use staybook_db_sqlite::Connections;
}
