use crate::completion::{CompletionRequest, CompletionService};
use crate::explorer::classify::POI_DETAILS;
use crate::explorer::{payload, schema, Explorer, ExplorerError, Shape};
use crate::utils::maptypes::{Coordinates, PointOfInterest};
use serde_json::Value;

fn point_list_prompt(coords: Coordinates) -> String {
    format!(
        "Liệt kê chính xác 5 điểm ưa thích phổ biến và thú vị gần vĩ độ {}, kinh độ {} ở Việt Nam. \
         Cung cấp một danh sách đa dạng (ví dụ: di tích lịch sử, kỳ quan thiên nhiên, điểm văn hóa). \
         Đối với mỗi điểm, bao gồm tên, mô tả ngắn gọn trong một câu, và vĩ độ và kinh độ chính xác của nó. \
         Phản hồi bằng một mảng JSON gồm các đối tượng.",
        coords.latitude, coords.longitude
    )
}

fn point_of_interest(value: &Value) -> Option<PointOfInterest> {
    let object = value.as_object()?;
    let name = object.get("name")?.as_str()?;
    if name.trim().is_empty() {
        return None;
    }
    let description = object.get("description")?.as_str()?;
    let coordinates = payload::coordinates(object.get("coordinates")?)?;

    Some(PointOfInterest {
        name: name.to_string(),
        description: description.to_string(),
        coordinates,
    })
}

impl<T> Explorer<T>
where
    T: CompletionService,
{
    /// Asks the model for points of interest near `coords`. Malformed
    /// entries are dropped; an empty answer is an empty list.
    #[tracing::instrument(skip(self))]
    pub async fn list(&self, coords: Coordinates) -> Result<Vec<PointOfInterest>, ExplorerError> {
        let request = CompletionRequest {
            model: self.model.clone(),
            prompt: point_list_prompt(coords),
            schema: schema::point_list(),
        };

        let raw = self.provider.complete(&request).await.map_err(|e| {
            tracing::error!(error = %e, "point of interest request failed");
            ExplorerError::transport(e, &POI_DETAILS, None)
        })?;

        let Some(value) = payload::parse(&raw)? else {
            tracing::warn!("model returned an empty answer for points of interest");
            return Ok(vec![]);
        };

        let entries = match value {
            Value::Array(entries) => entries,
            other => {
                tracing::error!(value = %other, "model answer is not an array");
                return Err(ExplorerError::InvalidShape(Shape::PointList));
            }
        };

        let pois = entries
            .iter()
            .filter_map(|entry| {
                let poi = point_of_interest(entry);
                if poi.is_none() {
                    tracing::warn!(%entry, "dropping malformed point of interest");
                }
                poi
            })
            .collect::<Vec<_>>();

        tracing::info!(received = entries.len(), kept = pois.len(), "listed points of interest");
        Ok(pois)
    }
}
