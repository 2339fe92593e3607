use serde::{Deserialize, Serialize};

use crate::http::FetchOutcome;
use crate::views::Projection;

/// One saved camera frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Photo {
    pub path: String,

    /// Capture time. The device sends a number, or the raw filename token
    /// when it could not parse one.
    #[serde(default)]
    pub ts: serde_json::Value,
}

impl Photo {
    pub fn timestamp(&self) -> Option<f64> {
        self.ts.as_f64()
    }
}

/// Photos in the order the device lists them (newest first).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhotoCollection(Vec<Photo>);

impl PhotoCollection {
    pub fn new(photos: Vec<Photo>) -> Self {
        Self(photos)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Photo> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Photo] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a PhotoCollection {
    type Item = &'a Photo;
    type IntoIter = std::slice::Iter<'a, Photo>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// State of one photos view instance.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct PhotosState {
    pub photos: PhotoCollection,
}

impl Projection for PhotosState {
    type Document = PhotoCollection;

    /// Success replaces the collection wholesale; failure keeps what is shown.
    fn apply(&mut self, outcome: FetchOutcome<PhotoCollection>) {
        if let FetchOutcome::Success(photos) = outcome {
            self.photos = photos;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collection(json: serde_json::Value) -> PhotoCollection {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_parse_device_listing() {
        let photos = collection(serde_json::json!([
            {"path": "/photos/camera-1510000060.jpg", "ts": 1510000060.0},
            {"path": "/photos/camera-1510000000.jpg", "ts": 1510000000.0},
            {"path": "/photos/camera-abc.jpg", "ts": "abc"}
        ]));

        assert_eq!(photos.len(), 3);
        assert_eq!(photos.as_slice()[0].path, "/photos/camera-1510000060.jpg");
        assert_eq!(photos.as_slice()[0].timestamp(), Some(1510000060.0));
        assert_eq!(photos.as_slice()[2].timestamp(), None);
    }

    #[test]
    fn test_success_replaces_wholesale() {
        let mut state = PhotosState {
            photos: collection(serde_json::json!([
                {"path": "/photos/a.jpg", "ts": 1},
                {"path": "/photos/b.jpg", "ts": 2}
            ])),
        };
        let fresh = collection(serde_json::json!([{"path": "/photos/c.jpg", "ts": 3}]));

        state.apply(FetchOutcome::Success(fresh.clone()));
        assert_eq!(state.photos, fresh);
    }

    #[test]
    fn test_failure_keeps_previous() {
        let previous = collection(serde_json::json!([{"path": "/photos/a.jpg", "ts": 1}]));
        let mut state = PhotosState {
            photos: previous.clone(),
        };

        state.apply(FetchOutcome::Failure);
        assert_eq!(state.photos, previous);
    }

    #[test]
    fn test_empty_listing_clears() {
        let mut state = PhotosState {
            photos: collection(serde_json::json!([{"path": "/photos/a.jpg", "ts": 1}])),
        };

        state.apply(FetchOutcome::Success(PhotoCollection::default()));
        assert!(state.photos.is_empty());
    }
}
