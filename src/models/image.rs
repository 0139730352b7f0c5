//! Gallery images held by the media host.

use serde::Deserialize;

/// An uploaded image: the media host identifier and its public URL.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ImageAsset {
    #[serde(alias = "public_id")]
    pub id: String,

    #[serde(alias = "secure_url")]
    pub url: String,
}

/// Body returned by `POST /subir-imagen`.
#[derive(Debug, Deserialize)]
pub(crate) struct UploadResponse {
    pub success: bool,

    #[serde(default)]
    pub url: Option<String>,

    #[serde(default)]
    pub id: Option<String>,

    #[serde(default)]
    pub message: Option<String>,
}

impl UploadResponse {
    /// The uploaded asset, when the server reported success with both fields.
    pub fn into_asset(self) -> Result<ImageAsset, String> {
        match (self.success, self.id, self.url) {
            (true, Some(id), Some(url)) => Ok(ImageAsset { id, url }),
            (true, _, _) => Err("Upload response is missing id or url".to_string()),
            (false, _, _) => Err(self.message.unwrap_or_else(|| "Upload failed".to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_asset_accepts_media_host_names() {
        let json = r#"{"public_id": "gallery/abc", "secure_url": "https://cdn.example/abc.png"}"#;
        let asset: ImageAsset = serde_json::from_str(json).unwrap();
        assert_eq!(asset.id, "gallery/abc");
        assert_eq!(asset.url, "https://cdn.example/abc.png");
    }

    #[test]
    fn test_upload_response_success() {
        let json = r#"{"success": true, "url": "https://cdn.example/a.png", "id": "gallery/a"}"#;
        let response: UploadResponse = serde_json::from_str(json).unwrap();
        let asset = response.into_asset().unwrap();
        assert_eq!(asset.id, "gallery/a");
    }

    #[test]
    fn test_upload_response_failure_keeps_message() {
        let json = r#"{"success": false, "message": "No hay archivo"}"#;
        let response: UploadResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.into_asset().unwrap_err(), "No hay archivo");
    }
}
