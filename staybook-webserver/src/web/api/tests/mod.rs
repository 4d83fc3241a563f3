pub mod prelude {

    use crate::web::{self, api, sqlite, DEFAULT_IDENTITY_HEADER};

    pub use crate::web::tests::prelude::{LocalResponse as Response, *};
    pub use serde_json::{json, Value};
    pub use time::macros::date;

    pub fn setup() -> (Client, sqlite::Connections) {
        web::tests::rocket_test_setup(vec![("/", api::routes())])
    }

    pub fn identity(user: &User) -> Header<'static> {
        Header::new(DEFAULT_IDENTITY_HEADER, user.id.to_string())
    }

    pub fn test_json(r: &Response) {
        assert_eq!(
            r.headers().get("Content-Type").collect::<Vec<_>>()[0],
            "application/json"
        );
    }

    pub fn body_json(r: Response) -> Value {
        test_json(&r);
        serde_json::from_str(&r.into_string().unwrap()).unwrap()
    }
}

mod spots;
