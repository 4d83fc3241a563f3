pub use staybook_core::{spot_query, usecases};

pub mod entities {
    pub use staybook_core::entities::*;
}
