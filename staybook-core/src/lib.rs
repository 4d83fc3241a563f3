pub mod availability;
pub mod rating;
pub mod repositories;
pub mod spot_query;
pub mod usecases;
pub mod util;

pub mod entities {
    pub use staybook_entities::{
        address::*, booking::*, date::*, geo::*, id::*, image::*, review::*, spot::*, time::*,
        user::*,
    };
}

pub use self::repositories::Error as RepoError;
