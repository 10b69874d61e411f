use crate::{GalleryDocument, ImageRecord};
use serde_json::Map;

fn sample_record(
    id: i64,
    name: &str,
    tags: &str,
    category: &str,
    description: &str,
    url: &str,
) -> ImageRecord {
    ImageRecord {
        id,
        name: name.to_string(),
        tags: tags.to_string(),
        category: category.to_string(),
        description: Some(description.to_string()),
        url: url.to_string(),
        public_id: None,
        uploaded_at: None,
        extra: Map::new(),
    }
}

/// Built-in gallery shown when the service cannot be reached, and restored by a reset.
#[must_use]
pub fn sample_gallery() -> GalleryDocument {
    GalleryDocument::new(vec![
        sample_record(
            1,
            "Chrome Saddle Stay",
            "saddle, stay, chrome, motorcycle, custom",
            "saddle-stay",
            "High-quality chrome plated saddle stay for classic motorcycles",
            "https://images.unsplash.com/photo-1558618047-3c8c76ca7d13?ixlib=rb-4.0.3&auto=format&fit=crop&w=1000&q=80",
        ),
        sample_record(
            2,
            "Heavy Duty Crash Guard",
            "crash, guard, protection, steel, heavy-duty",
            "crash-guard",
            "Robust steel crash guard for maximum motorcycle protection",
            "https://images.unsplash.com/photo-1558618666-fcd25856cd63?ixlib=rb-4.0.3&auto=format&fit=crop&w=1000&q=80",
        ),
        sample_record(
            3,
            "Aluminum Carrier Rack",
            "carrier, rack, aluminum, luggage, storage",
            "carrier-rack",
            "Lightweight aluminum carrier rack for extra storage capacity",
            "https://images.unsplash.com/photo-1558618667-d72d6bb0233a?ixlib=rb-4.0.3&auto=format&fit=crop&w=1000&q=80",
        ),
        sample_record(
            4,
            "Performance Exhaust System",
            "exhaust, performance, stainless steel, racing",
            "exhaust",
            "High-performance exhaust system for enhanced motorcycle sound and power",
            "https://images.unsplash.com/photo-1558618666-7a5d0b6d47c5?ixlib=rb-4.0.3&auto=format&fit=crop&w=1000&q=80",
        ),
    ])
}
