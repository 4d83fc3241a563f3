///////////////////////////////////////////////////////////////////////
// Users
///////////////////////////////////////////////////////////////////////

table! {
    users (id) {
        id -> BigInt,
        email -> Text,
        username -> Text,
        first_name -> Text,
        last_name -> Text,
        created_at -> BigInt,
    }
}

///////////////////////////////////////////////////////////////////////
// Spots
///////////////////////////////////////////////////////////////////////

table! {
    spots (id) {
        id -> BigInt,
        owner_id -> BigInt,
        address -> Text,
        city -> Text,
        state -> Text,
        country -> Text,
        lat -> Double,
        lng -> Double,
        name -> Text,
        description -> Text,
        price -> Double,
        created_at -> BigInt,
        updated_at -> BigInt,
    }
}

joinable!(spots -> users (owner_id));

table! {
    spot_images (id) {
        id -> BigInt,
        spot_id -> BigInt,
        url -> Text,
        preview -> Bool,
    }
}

joinable!(spot_images -> spots (spot_id));

///////////////////////////////////////////////////////////////////////
// Bookings
///////////////////////////////////////////////////////////////////////

table! {
    bookings (id) {
        id -> BigInt,
        spot_id -> BigInt,
        user_id -> BigInt,
        // ISO 8601, i.e. lexicographically ordered
        start_date -> Text,
        end_date -> Text,
        created_at -> BigInt,
        updated_at -> BigInt,
    }
}

joinable!(bookings -> spots (spot_id));
joinable!(bookings -> users (user_id));

///////////////////////////////////////////////////////////////////////
// Reviews
///////////////////////////////////////////////////////////////////////

table! {
    reviews (id) {
        id -> BigInt,
        spot_id -> BigInt,
        user_id -> BigInt,
        review -> Text,
        stars -> SmallInt,
        created_at -> BigInt,
        updated_at -> BigInt,
    }
}

joinable!(reviews -> spots (spot_id));
joinable!(reviews -> users (user_id));

table! {
    review_images (id) {
        id -> BigInt,
        review_id -> BigInt,
        url -> Text,
    }
}

joinable!(review_images -> reviews (review_id));

allow_tables_to_appear_in_same_query!(
    users,
    spots,
    spot_images,
    bookings,
    reviews,
    review_images,
);
