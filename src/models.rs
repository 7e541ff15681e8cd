use serde::{Deserialize, Serialize};

/// A single activity entry as captured from the entry form.
///
/// Ids are assigned by [`Repository::create`](crate::Repository::create) and
/// stay unique for the lifetime of the owning repository. Serialization uses
/// camelCase field names, so the wire shape is
/// `{"id", "title", "description", "imageUrl"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub image_url: String,
}

impl Activity {
    pub fn new(id: u64, title: String, description: String, image_url: String) -> Self {
        Self {
            id,
            title,
            description,
            image_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn activity_holds_the_four_record_fields() {
        let activity = Activity::new(
            7,
            "Hike".to_string(),
            "Morning trail".to_string(),
            "a.png".to_string(),
        );

        assert_eq!(activity.id, 7);
        assert_eq!(activity.title, "Hike");
        assert_eq!(activity.description, "Morning trail");
        assert_eq!(activity.image_url, "a.png");
    }

    #[test]
    fn activity_serializes_with_camel_case_image_url() {
        let activity = Activity::new(
            0,
            "Hike".to_string(),
            "Morning trail".to_string(),
            "a.png".to_string(),
        );

        let json = serde_json::to_value(&activity).expect("serialize activity");
        assert_eq!(
            json,
            serde_json::json!({
                "id": 0,
                "title": "Hike",
                "description": "Morning trail",
                "imageUrl": "a.png",
            })
        );
    }

    #[test]
    fn activity_deserializes_from_camel_case_json() {
        let json = r#"{"id":3,"title":"Picnic","description":"By the lake","imageUrl":"lake.jpg"}"#;

        let activity: Activity = serde_json::from_str(json).expect("deserialize activity");
        assert_eq!(activity.id, 3);
        assert_eq!(activity.image_url, "lake.jpg");
    }
}
