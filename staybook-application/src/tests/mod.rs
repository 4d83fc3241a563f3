pub mod prelude {
    pub use staybook_core::{entities::*, usecases};

    pub mod sqlite {
        pub use super::super::super::sqlite::*;
    }

    pub use crate::{
        error::{AppError, BError},
        prelude as flows,
    };

    pub struct BackendFixture {
        pub db_connections: sqlite::Connections,
    }

    impl BackendFixture {
        pub fn new() -> Self {
            let _ = env_logger::builder().is_test(true).try_init();
            let db_connections = sqlite::Connections::init(":memory:", 1).unwrap();
            staybook_db_sqlite::run_embedded_database_migrations(
                db_connections.exclusive().unwrap(),
            )
            .unwrap();
            Self { db_connections }
        }

        pub fn create_user(&self, name: &str) -> User {
            usecases::create_user(
                &self.db_connections.exclusive().unwrap(),
                usecases::UserParams {
                    email: format!("{name}@example.com"),
                    username: name.into(),
                    first_name: name.into(),
                    last_name: "Tester".into(),
                },
            )
            .unwrap()
        }

        pub fn create_spot(&self, owner: &User) -> Spot {
            usecases::create_spot(
                &self.db_connections.exclusive().unwrap(),
                owner,
                usecases::SpotParams {
                    address: Some("123 Disney Lane".into()),
                    city: Some("San Francisco".into()),
                    state: Some("California".into()),
                    country: Some("United States of America".into()),
                    lat: Some(37.7645358),
                    lng: Some(-122.4730327),
                    name: Some("App Academy".into()),
                    description: Some("Place where web developers are created".into()),
                    price: Some(123.0),
                },
            )
            .unwrap()
        }
    }
}
