// src/common/json.rs

use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::{DeserializeOwned, IntoDeserializer};

use crate::common::error::AppError;

/// `axum::Json` with the rejection remapped onto our envelope, so malformed
/// bodies and unknown enum variants come back as a 400 instead of axum's
/// plain-text default.
pub struct AppJson<T>(pub T);

impl<T, S> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(AppJson(value)),
            Err(rejection) => Err(AppError::BadRequest(rejection.body_text())),
        }
    }
}

/// `axum::extract::Path` with the rejection remapped the same way, covering
/// malformed UUIDs and out-of-range enum segments.
pub struct AppPath<T>(pub T);

impl<T, S> FromRequestParts<S> for AppPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(AppPath(value)),
            Err(rejection) => Err(AppError::BadRequest(rejection.body_text())),
        }
    }
}

/// Parses an optional boolean query parameter. Empty strings count as absent,
/// which is how the site's frontend submits unused filters.
pub fn bool_param(name: &str, raw: Option<&str>) -> Result<Option<bool>, AppError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse::<bool>().map(Some).map_err(|_| {
            AppError::BadRequest(format!("Invalid value '{value}' for '{name}'"))
        }),
    }
}

/// Parses an optional enum query parameter against the enum's serde names.
pub fn enum_param<T>(name: &str, raw: Option<&str>) -> Result<Option<T>, AppError>
where
    T: DeserializeOwned,
{
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => T::deserialize(value.into_deserializer())
            .map(Some)
            .map_err(|_: serde::de::value::Error| {
                AppError::BadRequest(format!("Invalid value '{value}' for '{name}'"))
            }),
    }
}

#[cfg(test)]
mod tests {
    use super::{bool_param, enum_param};
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Deserialize)]
    #[serde(rename_all = "lowercase")]
    enum Fruit {
        Durian,
        Mango,
    }

    #[test]
    fn empty_and_missing_params_are_absent() {
        assert_eq!(bool_param("isActive", None).unwrap(), None);
        assert_eq!(bool_param("isActive", Some("")).unwrap(), None);
        assert_eq!(enum_param::<Fruit>("type", Some("  ")).unwrap(), None);
    }

    #[test]
    fn valid_values_parse() {
        assert_eq!(bool_param("isActive", Some("true")).unwrap(), Some(true));
        assert_eq!(enum_param("type", Some("durian")).unwrap(), Some(Fruit::Durian));
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(bool_param("isActive", Some("yes")).is_err());
        assert!(enum_param::<Fruit>("type", Some("apple")).is_err());
    }
}
