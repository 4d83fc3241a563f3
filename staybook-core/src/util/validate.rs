use std::{collections::BTreeMap, fmt};

use url::Url;

use crate::entities::*;

pub trait Validate {
    type Error;
    fn validate(&self) -> Result<(), Self::Error>;
}

/// Validation messages keyed by the name of the offending field.
///
/// Multiple violations are collected instead of failing
/// on the first one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Only the first message per field is kept.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_insert_with(|| message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                f.write_str(", ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

impl From<FieldErrors> for BTreeMap<String, String> {
    fn from(from: FieldErrors) -> Self {
        from.0
    }
}

/// Absolute web URL
pub fn parse_web_url(s: &str) -> Option<Url> {
    let url = s.trim().parse::<Url>().ok()?;
    if !matches!(url.scheme(), "http" | "https") {
        return None;
    }
    url.host_str().filter(|host| !host.is_empty())?;
    Some(url)
}

pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

impl Validate for NewSpot {
    type Error = FieldErrors;
    fn validate(&self) -> Result<(), Self::Error> {
        let mut errors = FieldErrors::new();
        let Address {
            street,
            city,
            state,
            country,
        } = &self.address;
        if is_blank(street) {
            errors.add("address", "Street address is required");
        }
        if is_blank(city) {
            errors.add("city", "City is required");
        }
        if is_blank(state) {
            errors.add("state", "State is required");
        }
        if is_blank(country) {
            errors.add("country", "Country is required");
        }
        if is_blank(&self.name) || self.name.chars().count() > MAX_NAME_LEN {
            errors.add("name", "Name must be less than 50 characters");
        }
        if is_blank(&self.description) {
            errors.add("description", "Description is required");
        }
        if !(self.price.is_finite() && self.price > 0.0) {
            errors.add("price", "Price per day must be a positive number");
        }
        errors.into_result(())
    }
}

impl Validate for NewReview {
    type Error = FieldErrors;
    fn validate(&self) -> Result<(), Self::Error> {
        let mut errors = FieldErrors::new();
        if is_blank(&self.text) {
            errors.add("review", "Review text is required");
        } else if self.text.chars().count() > MAX_REVIEW_LEN {
            errors.add(
                "review",
                "Review must not exceed the length of a verified user's tweet",
            );
        }
        errors.into_result(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_spot() -> NewSpot {
        NewSpot {
            owner_id: Id::new(1),
            address: Address {
                street: "12 Harbour Road".into(),
                city: "Portsmouth".into(),
                state: "Hampshire".into(),
                country: "United Kingdom".into(),
            },
            pos: MapPoint::try_from_lat_lng_deg(50.8, -1.09).unwrap(),
            name: "Harbour view".into(),
            description: "Sea views".into(),
            price: 89.5,
            created_at: Timestamp::now(),
        }
    }

    #[test]
    fn collect_multiple_field_errors() {
        let mut errors = FieldErrors::new();
        errors.add("a", "first");
        errors.add("b", "second");
        errors.add("a", "ignored");
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get("a"), Some("first"));
        assert_eq!(errors.to_string(), "a: first, b: second");
        assert!(errors.into_result(()).is_err());
        assert!(FieldErrors::new().into_result(()).is_ok());
    }

    #[test]
    fn web_urls() {
        assert!(parse_web_url("https://example.com/a.png").is_some());
        assert!(parse_web_url(" http://example.com ").is_some());
        assert!(parse_web_url("ftp://example.com/a.png").is_none());
        assert!(parse_web_url("not a url").is_none());
        assert!(parse_web_url("/relative/path.png").is_none());
        assert!(parse_web_url("mailto:someone@example.com").is_none());
    }

    #[test]
    fn valid_spot() {
        assert!(new_spot().validate().is_ok());
    }

    #[test]
    fn invalid_spot() {
        let mut spot = new_spot();
        spot.address.city = " ".into();
        spot.name = "x".repeat(51);
        spot.price = 0.0;
        let errors = spot.validate().unwrap_err();
        assert_eq!(errors.len(), 3);
        assert_eq!(errors.get("city"), Some("City is required"));
        assert_eq!(
            errors.get("name"),
            Some("Name must be less than 50 characters")
        );
        assert_eq!(
            errors.get("price"),
            Some("Price per day must be a positive number")
        );
    }

    #[test]
    fn invalid_review_text() {
        let mut review = NewReview {
            spot_id: Id::new(1),
            user_id: Id::new(2),
            text: "".into(),
            stars: Stars::Four,
            created_at: Timestamp::now(),
        };
        assert!(review.validate().unwrap_err().contains("review"));
        review.text = "x".repeat(MAX_REVIEW_LEN + 1);
        assert!(review.validate().is_err());
        review.text = "x".repeat(MAX_REVIEW_LEN);
        assert!(review.validate().is_ok());
    }
}
