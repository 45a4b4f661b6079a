use serde::Deserialize;

/// A payload that may or may not be wrapped as `{ "data": ... }`.
///
/// Some endpoints answer with the record itself, others wrap it. Decode into
/// `Enveloped<T>` and call [`Enveloped::into_inner`] to get `T` either way.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Enveloped<T> {
    Wrapped { data: T },
    Bare(T),
}

impl<T> Enveloped<T> {
    pub fn into_inner(self) -> T {
        match self {
            Enveloped::Wrapped { data } => data,
            Enveloped::Bare(inner) => inner,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Record {
        id: String,
    }

    #[test]
    fn unwraps_data_envelope() {
        let wrapped: Enveloped<Record> =
            serde_json::from_value(json!({ "success": true, "data": { "id": "e1" } })).unwrap();
        let bare: Enveloped<Record> = serde_json::from_value(json!({ "id": "e1" })).unwrap();

        assert_eq!(wrapped.into_inner(), bare.into_inner());
    }
}
