//! Blob URLs for synthesized speech.

use crate::net::error::ApiError;
use crate::net::types::SpeechAudio;

/// Wrap `audio` in a `Blob` and return an object URL the `<audio>` element
/// can play.
pub fn object_url(audio: &SpeechAudio) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let bytes = js_sys::Uint8Array::from(audio.bytes.as_slice());
        let parts = js_sys::Array::of1(&bytes);
        let options = web_sys::BlobPropertyBag::new();
        if let Some(content_type) = &audio.content_type {
            options.set_type(content_type);
        }
        let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
            .map_err(|e| ApiError::Decode(format!("{e:?}")))?;
        web_sys::Url::create_object_url_with_blob(&blob).map_err(|e| ApiError::Decode(format!("{e:?}")))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = audio;
        Err(ApiError::Unavailable)
    }
}

/// Release a URL returned by [`object_url`].
pub fn revoke(url: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Err(e) = web_sys::Url::revoke_object_url(url) {
            log::warn!("audio url revoke failed: {e:?}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
    }
}
