//! Response-shape hints sent alongside each prompt, in the provider's
//! OpenAPI-subset schema format.

use serde_json::{json, Value};

pub fn coordinates() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "lat": { "type": "NUMBER", "description": "Vĩ độ của địa điểm" },
            "lng": { "type": "NUMBER", "description": "Kinh độ của địa điểm" }
        },
        "required": ["lat", "lng"]
    })
}

pub fn point_list() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "name": { "type": "STRING", "description": "Tên của địa điểm ưa thích." },
                "description": { "type": "STRING", "description": "Mô tả ngắn gọn trong một câu." },
                "coordinates": {
                    "type": "OBJECT",
                    "properties": {
                        "lat": { "type": "NUMBER" },
                        "lng": { "type": "NUMBER" }
                    },
                    "required": ["lat", "lng"]
                }
            },
            "required": ["name", "description", "coordinates"]
        }
    })
}
