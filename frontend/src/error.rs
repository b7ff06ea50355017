use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("window is not available")]
    MissingWindow,
    #[error("document is not available")]
    MissingDocument,
    #[error("element not found: {0}")]
    MissingElement(&'static str),
    #[error("javascript error: {0}")]
    Js(String),
    #[error("failed to serialize value for javascript: {0}")]
    Serialize(String),
}

impl From<JsValue> for SiteError {
    fn from(value: JsValue) -> Self {
        let message = value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value));
        SiteError::Js(message)
    }
}

impl From<serde_wasm_bindgen::Error> for SiteError {
    fn from(err: serde_wasm_bindgen::Error) -> Self {
        SiteError::Serialize(err.to_string())
    }
}

pub type SiteResult<T> = Result<T, SiteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_element_names_the_id() {
        let err = SiteError::MissingElement("leadForm");
        assert_eq!(err.to_string(), "element not found: leadForm");
    }
}
