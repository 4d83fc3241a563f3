use super::prelude::*;

const NEW_SPOT: &str = r#"{
    "address": "123 Disney Lane",
    "city": "San Francisco",
    "state": "California",
    "country": "United States of America",
    "lat": 37.7645358,
    "lng": -122.4730327,
    "name": "App Academy",
    "description": "Place where web developers are created",
    "price": 123
}"#;

#[test]
fn create_new_spot() {
    let (client, db) = setup();
    let owner = register_user(&db, "owner");
    let res = client
        .post("/spots")
        .header(ContentType::JSON)
        .header(identity(&owner))
        .body(NEW_SPOT)
        .dispatch();
    assert_eq!(res.status(), Status::Created);
    let spot = body_json(res);
    assert_eq!(spot["ownerId"], json!(i64::from(owner.id)));
    assert_eq!(spot["name"], "App Academy");
    assert_eq!(spot["price"], 123.0);
    assert!(spot["createdAt"].is_string());
}

#[test]
fn create_spot_requires_authentication() {
    let (client, _) = setup();
    let res = client
        .post("/spots")
        .header(ContentType::JSON)
        .body(NEW_SPOT)
        .dispatch();
    assert_eq!(res.status(), Status::Unauthorized);
    let body = body_json(res);
    assert_eq!(body["message"], "Authentication required");
}

#[test]
fn unknown_user_is_anonymous() {
    let (client, _) = setup();
    let res = client
        .post("/spots")
        .header(ContentType::JSON)
        .header(Header::new("X-User-Id", "99"))
        .body(NEW_SPOT)
        .dispatch();
    assert_eq!(res.status(), Status::Unauthorized);
}

#[test]
fn create_spot_with_invalid_fields() {
    let (client, db) = setup();
    let owner = register_user(&db, "owner");
    let res = client
        .post("/spots")
        .header(ContentType::JSON)
        .header(identity(&owner))
        .body(r#"{"address":"","lat":100,"lng":0,"name":"x","description":"y","price":-1}"#)
        .dispatch();
    assert_eq!(res.status(), Status::BadRequest);
    let body = body_json(res);
    assert_eq!(body["message"], "Bad Request");
    assert_eq!(body["errors"]["lat"], "Latitude is not valid");
    assert_eq!(body["errors"]["price"], "Price per day must be a positive number");
    assert!(body["errors"]["address"].is_string());
    assert!(body["errors"]["lng"].is_null());
}

#[test]
fn create_spot_with_malformed_json() {
    let (client, db) = setup();
    let owner = register_user(&db, "owner");
    let res = client
        .post("/spots")
        .header(ContentType::JSON)
        .header(identity(&owner))
        .body(r#"{"address": "#)
        .dispatch();
    assert_eq!(res.status(), Status::UnprocessableEntity);
    test_json(&res);
}

#[test]
fn search_spots_by_price() {
    let (client, db) = setup();
    let owner = register_user(&db, "owner");
    for price in [20.0, 50.0, 75.0, 100.0, 150.0] {
        create_spot(&db, &owner, 10.0, 10.0, price);
    }
    let res = client.get("/spots?minPrice=50&maxPrice=100").dispatch();
    assert_eq!(res.status(), Status::Ok);
    let body = body_json(res);
    let spots = body["Spots"].as_array().unwrap();
    assert_eq!(spots.len(), 3);
    for spot in spots {
        let price = spot["price"].as_f64().unwrap();
        assert!((50.0..=100.0).contains(&price));
    }
    assert_eq!(body["page"], 1);
    assert_eq!(body["size"], 20);
}

#[test]
fn reject_inverted_latitude_bounds() {
    let (client, db) = setup();
    let owner = register_user(&db, "owner");
    create_spot(&db, &owner, 10.0, 10.0, 80.0);
    let res = client.get("/spots?minLat=20&maxLat=10").dispatch();
    assert_eq!(res.status(), Status::BadRequest);
    let body = body_json(res);
    assert!(body["errors"]["maxLat"].is_string());
    assert!(body.get("Spots").is_none());
}

#[test]
fn paginate_spots() {
    let (client, db) = setup();
    let owner = register_user(&db, "owner");
    let spots: Vec<_> = (0..25)
        .map(|i| create_spot(&db, &owner, 10.0, 10.0, 10.0 + f64::from(i)))
        .collect();
    let res = client.get("/spots?page=2&size=10").dispatch();
    let body = body_json(res);
    let page = body["Spots"].as_array().unwrap();
    assert_eq!(page.len(), 10);
    assert_eq!(page[0]["id"], json!(i64::from(spots[10].id)));
    assert_eq!(body["page"], 2);
    assert_eq!(body["size"], 10);

    let res = client.get("/spots?page=3&size=10").dispatch();
    let body = body_json(res);
    assert_eq!(body["Spots"].as_array().unwrap().len(), 5);
}

#[test]
fn limit_page_size() {
    let (client, _) = setup();
    let res = client.get("/spots?size=1000").dispatch();
    assert_eq!(res.status(), Status::Ok);
    let body = body_json(res);
    assert_eq!(body["size"], 100);
}

#[test]
fn reject_invalid_page_number() {
    let (client, _) = setup();
    let res = client.get("/spots?page=0").dispatch();
    assert_eq!(res.status(), Status::BadRequest);
    let body = body_json(res);
    assert_eq!(body["errors"]["page"], "Page must be an integer greater than 0");
}

#[test]
fn average_rating_and_preview_image_in_listing() {
    let (client, db) = setup();
    let owner = register_user(&db, "owner");
    let rated = create_spot(&db, &owner, 10.0, 10.0, 80.0);
    let unrated = create_spot(&db, &owner, 10.0, 10.0, 90.0);
    for (name, stars) in [("a", Stars::Three), ("b", Stars::Four), ("c", Stars::Five)] {
        let guest = register_user(&db, name);
        db.exclusive()
            .unwrap()
            .create_review(NewReview {
                spot_id: rated.id,
                user_id: guest.id,
                text: "Nice".into(),
                stars,
                created_at: Timestamp::now(),
            })
            .unwrap();
    }
    db.exclusive()
        .unwrap()
        .create_spot_image(NewSpotImage {
            spot_id: rated.id,
            url: "https://example.com/preview.png".parse().unwrap(),
            preview: true,
        })
        .unwrap();

    let body = body_json(client.get("/spots").dispatch());
    let spots = body["Spots"].as_array().unwrap();
    let rated_json = spots
        .iter()
        .find(|s| s["id"] == json!(i64::from(rated.id)))
        .unwrap();
    assert_eq!(rated_json["avgRating"], 4.0);
    assert_eq!(rated_json["previewImage"], "https://example.com/preview.png");
    let unrated_json = spots
        .iter()
        .find(|s| s["id"] == json!(i64::from(unrated.id)))
        .unwrap();
    assert!(unrated_json["avgRating"].is_null());
    assert!(unrated_json["previewImage"].is_null());
}

#[test]
fn spots_of_current_user() {
    let (client, db) = setup();
    let owner = register_user(&db, "owner");
    let other = register_user(&db, "other");
    create_spot(&db, &owner, 10.0, 10.0, 80.0);
    create_spot(&db, &other, 10.0, 10.0, 80.0);
    let res = client.get("/spots/current").header(identity(&owner)).dispatch();
    assert_eq!(res.status(), Status::Ok);
    let body = body_json(res);
    let spots = body["Spots"].as_array().unwrap();
    assert_eq!(spots.len(), 1);
    assert_eq!(spots[0]["ownerId"], json!(i64::from(owner.id)));
    assert!(body.get("page").is_none());
}

#[test]
fn spot_details() {
    let (client, db) = setup();
    let owner = register_user(&db, "owner");
    let spot = create_spot(&db, &owner, 10.0, 10.0, 80.0);
    let res = client.get(format!("/spots/{}", spot.id)).dispatch();
    assert_eq!(res.status(), Status::Ok);
    let body = body_json(res);
    assert_eq!(body["numReviews"], 0);
    assert!(body["avgStarRating"].is_null());
    assert_eq!(body["SpotImages"], json!([]));
    assert_eq!(body["Owner"]["firstName"], "owner");
}

#[test]
fn missing_spot() {
    let (client, _) = setup();
    let res = client.get("/spots/42").dispatch();
    assert_eq!(res.status(), Status::NotFound);
    let body = body_json(res);
    assert_eq!(body["message"], "Spot couldn't be found");
}

#[test]
fn update_spot_of_other_user() {
    let (client, db) = setup();
    let owner = register_user(&db, "owner");
    let other = register_user(&db, "other");
    let spot = create_spot(&db, &owner, 10.0, 10.0, 80.0);
    let res = client
        .put(format!("/spots/{}", spot.id))
        .header(ContentType::JSON)
        .header(identity(&other))
        .body(NEW_SPOT)
        .dispatch();
    assert_eq!(res.status(), Status::Forbidden);
    let body = body_json(res);
    assert_eq!(body["message"], "Spot must belong to the current user");
}

#[test]
fn update_own_spot() {
    let (client, db) = setup();
    let owner = register_user(&db, "owner");
    let spot = create_spot(&db, &owner, 10.0, 10.0, 80.0);
    let res = client
        .put(format!("/spots/{}", spot.id))
        .header(ContentType::JSON)
        .header(identity(&owner))
        .body(NEW_SPOT)
        .dispatch();
    assert_eq!(res.status(), Status::Ok);
    let body = body_json(res);
    assert_eq!(body["price"], 123.0);
    assert_eq!(body["lat"], 37.7645358);
}

#[test]
fn delete_spot() {
    let (client, db) = setup();
    let owner = register_user(&db, "owner");
    let spot = create_spot(&db, &owner, 10.0, 10.0, 80.0);
    let res = client
        .delete(format!("/spots/{}", spot.id))
        .header(identity(&owner))
        .dispatch();
    assert_eq!(res.status(), Status::Ok);
    let body = body_json(res);
    assert_eq!(body["message"], "Successfully deleted");
    assert!(db.shared().unwrap().get_spot(spot.id).is_err());
}
