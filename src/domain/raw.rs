//! Field extraction from raw JSON objects.
//!
//! Applies the same policy to every entity:
//! - required field absent or `null`: `MalformedPayload` naming entity and field
//! - optional field absent: `None`, never a zero value
//! - optional field of the wrong type: `None`, logged at debug
//! - timestamp that does not parse: `None`, logged at debug
//! - empty arrays stay `Some(vec![])`

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::asset::Asset;
use crate::error::{ApiError, ApiResult};
use crate::proxy::TransformerList;
use crate::reconstruct::Reconstruct;
use crate::shared::parse_time;

/// Borrowed view of one JSON object being parsed as `entity`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RawObject<'a> {
    entity: &'static str,
    map: &'a Map<String, Value>,
}

impl<'a> RawObject<'a> {
    pub fn new(entity: &'static str, raw: &'a Value) -> ApiResult<Self> {
        match raw.as_object() {
            Some(map) => Ok(Self { entity, map }),
            None => Err(ApiError::malformed(
                entity,
                "<root>",
                format!("expected a JSON object, got {}", kind(raw)),
            )),
        }
    }

    fn present(&self, field: &str) -> Option<&'a Value> {
        self.map.get(field).filter(|value| !value.is_null())
    }

    fn missing(&self, field: &'static str) -> ApiError {
        ApiError::malformed(self.entity, field, "missing required field")
    }

    fn ignore(&self, field: &str, reason: &dyn std::fmt::Display) {
        tracing::debug!(entity = self.entity, field, %reason, "Treating optional field as absent");
    }

    pub fn required<T: DeserializeOwned>(&self, field: &'static str) -> ApiResult<T> {
        let value = self.present(field).ok_or_else(|| self.missing(field))?;
        T::deserialize(value).map_err(|e| ApiError::malformed(self.entity, field, e.to_string()))
    }

    pub fn optional<T: DeserializeOwned>(&self, field: &'static str) -> Option<T> {
        let value = self.present(field)?;
        match T::deserialize(value) {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                self.ignore(field, &e);
                None
            }
        }
    }

    /// Integer sent either as a number or as a numeric string.
    pub fn integer(&self, field: &'static str) -> ApiResult<i64> {
        match self.required::<IntegerLike>(field)? {
            IntegerLike::Number(n) => Ok(n),
            IntegerLike::Text(text) => text.trim().parse().map_err(|_| {
                ApiError::malformed(self.entity, field, format!("expected an integer, got {:?}", text))
            }),
        }
    }

    /// Nested object read in place, for fields that are not entities of their own.
    pub fn nested(&self, field: &'static str) -> ApiResult<RawObject<'a>> {
        let value = self.present(field).ok_or_else(|| self.missing(field))?;
        RawObject::new(self.entity, value)
            .map_err(|_| ApiError::malformed(self.entity, field, format!("expected an object, got {}", kind(value))))
    }

    /// Required timestamp field; present but unparseable degrades to `None`.
    pub fn timestamp(&self, field: &'static str) -> ApiResult<Option<DateTime<Utc>>> {
        let value = self.present(field).ok_or_else(|| self.missing(field))?;
        Ok(self.parse_timestamp(field, value))
    }

    pub fn optional_timestamp(&self, field: &'static str) -> Option<DateTime<Utc>> {
        self.present(field)
            .and_then(|value| self.parse_timestamp(field, value))
    }

    /// Timestamp list such as `shopHistory`; unparseable entries are skipped.
    pub fn timestamps(&self, field: &'static str) -> Option<Vec<DateTime<Utc>>> {
        let values = self.optional::<Vec<Value>>(field)?;
        Some(
            values
                .iter()
                .filter_map(|value| self.parse_timestamp(field, value))
                .collect(),
        )
    }

    fn parse_timestamp(&self, field: &str, value: &Value) -> Option<DateTime<Utc>> {
        let parsed = value.as_str().and_then(parse_time);
        if parsed.is_none() {
            self.ignore(field, &format!("unparseable timestamp {}", value));
        }
        parsed
    }

    pub fn object<T, H>(&self, field: &'static str, http: &H) -> ApiResult<T>
    where
        T: Reconstruct<H>,
    {
        let value = self.present(field).ok_or_else(|| self.missing(field))?;
        T::from_raw(value.clone(), http)
    }

    /// Optional nested entity; when present it must parse.
    pub fn optional_object<T, H>(&self, field: &'static str, http: &H) -> ApiResult<Option<T>>
    where
        T: Reconstruct<H>,
    {
        self.present(field)
            .map(|value| T::from_raw(value.clone(), http))
            .transpose()
    }

    fn array(&self, field: &'static str, value: &'a Value) -> ApiResult<&'a Vec<Value>> {
        value.as_array().ok_or_else(|| {
            ApiError::malformed(self.entity, field, format!("expected an array, got {}", kind(value)))
        })
    }

    pub fn objects<T, H>(&self, field: &'static str, http: &H) -> ApiResult<Vec<T>>
    where
        T: Reconstruct<H>,
    {
        let value = self.present(field).ok_or_else(|| self.missing(field))?;
        self.array(field, value)?
            .iter()
            .map(|item| T::from_raw(item.clone(), http))
            .collect()
    }

    pub fn optional_objects<T, H>(&self, field: &'static str, http: &H) -> ApiResult<Option<Vec<T>>>
    where
        T: Reconstruct<H>,
    {
        match self.present(field) {
            Some(_) => self.objects(field, http).map(Some),
            None => Ok(None),
        }
    }

    /// Array of entities built lazily on access.
    pub fn lazy_objects<T, H>(&self, field: &'static str, http: &H) -> ApiResult<TransformerList<T>>
    where
        T: Reconstruct<H> + 'static,
        H: Clone + Send + Sync + 'static,
    {
        let value = self.present(field).ok_or_else(|| self.missing(field))?;
        let items = self.array(field, value)?.clone();
        let http = http.clone();
        Ok(TransformerList::new(items, move |item: &Value| {
            T::from_raw(item.clone(), &http)
        }))
    }

    pub fn optional_lazy_objects<T, H>(
        &self,
        field: &'static str,
        http: &H,
    ) -> ApiResult<Option<TransformerList<T>>>
    where
        T: Reconstruct<H> + 'static,
        H: Clone + Send + Sync + 'static,
    {
        match self.present(field) {
            Some(_) => self.lazy_objects(field, http).map(Some),
            None => Ok(None),
        }
    }

    pub fn asset<H: Clone>(&self, field: &'static str, http: &H) -> ApiResult<Asset<H>> {
        let url: String = self.required(field)?;
        Ok(Asset::new(http.clone(), url))
    }

    /// Optional image URL; an empty string counts as absent.
    pub fn optional_asset<H: Clone>(&self, field: &'static str, http: &H) -> Option<Asset<H>> {
        self.optional::<String>(field)
            .filter(|url| !url.is_empty())
            .map(|url| Asset::new(http.clone(), url))
    }

    /// Keys of this object not in `known`, in their raw form.
    pub fn extra(&self, known: &[&str]) -> impl Iterator<Item = (&'a String, &'a Value)> + '_ {
        let known: Vec<String> = known.iter().map(|key| key.to_string()).collect();
        self.map
            .iter()
            .filter(move |(key, value)| !known.iter().any(|k| k == *key) && !value.is_null())
    }
}

/// Top-level array payload built eagerly.
pub(crate) fn list<T, H>(entity: &'static str, raw: Value, http: &H) -> ApiResult<Vec<T>>
where
    T: Reconstruct<H>,
{
    match raw {
        Value::Array(items) => items.into_iter().map(|item| T::from_raw(item, http)).collect(),
        other => Err(ApiError::malformed(
            entity,
            "<root>",
            format!("expected an array, got {}", kind(&other)),
        )),
    }
}

/// Top-level array payload built lazily.
pub(crate) fn lazy_list<T, H>(entity: &'static str, raw: Value, http: &H) -> ApiResult<TransformerList<T>>
where
    T: Reconstruct<H> + 'static,
    H: Clone + Send + Sync + 'static,
{
    match raw {
        Value::Array(items) => {
            let http = http.clone();
            Ok(TransformerList::new(items, move |item: &Value| {
                T::from_raw(item.clone(), &http)
            }))
        }
        other => Err(ApiError::malformed(
            entity,
            "<root>",
            format!("expected an array, got {}", kind(&other)),
        )),
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IntegerLike {
    Number(i64),
    Text(String),
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
