use crate::completion::{CompletionRequest, CompletionService};
use crate::explorer::classify::COORDINATE_DETAILS;
use crate::explorer::{payload, schema, Explorer, ExplorerError, Shape};
use crate::utils::maptypes::Coordinates;

fn coordinates_prompt(location_name: &str) -> String {
    format!(
        "Cung cấp tọa độ địa lý (vĩ độ và kinh độ) cho địa điểm: \"{location_name}, Việt Nam\". \
         Vui lòng chỉ trả về một đối tượng JSON với các khóa \"lat\" và \"lng\"."
    )
}

impl<T> Explorer<T>
where
    T: CompletionService,
{
    /// Asks the model where `location_name` is. Transport failures are
    /// rewritten into a message naming the location; data problems are
    /// returned as they are.
    #[tracing::instrument(skip(self))]
    pub async fn resolve(&self, location_name: &str) -> Result<Coordinates, ExplorerError> {
        let request = CompletionRequest {
            model: self.model.clone(),
            prompt: coordinates_prompt(location_name),
            schema: schema::coordinates(),
        };

        let raw = self.provider.complete(&request).await.map_err(|e| {
            tracing::error!(error = %e, "coordinate request failed");
            ExplorerError::transport(e, &COORDINATE_DETAILS, Some(location_name))
        })?;

        let value = payload::parse(&raw)?.ok_or(ExplorerError::EmptyResponse)?;

        payload::coordinates(&value).ok_or_else(|| {
            tracing::error!(%value, "model answer is not a coordinate pair");
            ExplorerError::InvalidShape(Shape::Coordinates)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::completion::mock::MockCompletion;
    use crate::completion::TransportError;

    fn explorer(mock: MockCompletion) -> Explorer<MockCompletion> {
        Explorer::new(mock, "test-model")
    }

    #[tokio::test]
    async fn test_resolve_plain_json() {
        let explorer = explorer(MockCompletion::new().with_response(r#"{"lat": 10.5, "lng": 106.7}"#));

        let coords = explorer.resolve("Vũng Tàu").await.unwrap();
        assert_eq!(coords, Coordinates::new(10.5, 106.7));

        let requests = explorer.provider.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].model, "test-model");
        assert!(requests[0].prompt.contains("\"Vũng Tàu, Việt Nam\""));
        assert_eq!(requests[0].schema, schema::coordinates());
    }

    #[tokio::test]
    async fn test_resolve_fenced_json() {
        let explorer = explorer(
            MockCompletion::new().with_response("```json\n{\"lat\": 10.5, \"lng\": 106.7}\n```"),
        );

        let coords = explorer.resolve("Vũng Tàu").await.unwrap();
        assert_eq!(coords, Coordinates::new(10.5, 106.7));
    }

    #[tokio::test]
    async fn test_resolve_whitespace_is_empty_response() {
        let explorer = explorer(MockCompletion::new().with_response("   \n  "));

        let err = explorer.resolve("Huế").await.unwrap_err();
        assert!(matches!(err, ExplorerError::EmptyResponse));
        assert_eq!(err.to_string(), "Mô hình AI đã trả về một phản hồi trống.");
    }

    #[tokio::test]
    async fn test_resolve_not_json() {
        let explorer = explorer(MockCompletion::new().with_response("not json"));

        let err = explorer.resolve("Huế").await.unwrap_err();
        assert!(matches!(err, ExplorerError::MalformedJson(_)));
    }

    #[tokio::test]
    async fn test_resolve_wrong_types() {
        let explorer = explorer(MockCompletion::new().with_response(r#"{"lat": "x", "lng": 5}"#));

        let err = explorer.resolve("Huế").await.unwrap_err();
        assert!(matches!(err, ExplorerError::InvalidShape(Shape::Coordinates)));
    }

    #[tokio::test]
    async fn test_resolve_out_of_range_number_is_invalid_shape() {
        let explorer = explorer(MockCompletion::new().with_response(r#"{"lat": 1e400, "lng": 5}"#));

        let err = explorer.resolve("Huế").await.unwrap_err();
        assert!(matches!(err, ExplorerError::InvalidShape(Shape::Coordinates)));
    }

    #[tokio::test]
    async fn test_resolve_array_is_invalid_shape() {
        let explorer = explorer(MockCompletion::new().with_response("[10.5, 106.7]"));

        let err = explorer.resolve("Huế").await.unwrap_err();
        assert!(matches!(err, ExplorerError::InvalidShape(Shape::Coordinates)));
    }

    #[tokio::test]
    async fn test_resolve_forbidden_names_location() {
        let explorer = explorer(MockCompletion::new().with_failure(TransportError::Status {
            status: 403,
            body: "PERMISSION_DENIED".to_string(),
        }));

        let err = explorer.resolve("Sa Pa").await.unwrap_err();
        assert!(matches!(err, ExplorerError::Transport { .. }));
        assert!(err
            .to_string()
            .starts_with("Không thể lấy tọa độ cho Sa Pa. Lỗi xác thực (lỗi 403)."));
    }

    #[tokio::test]
    async fn test_resolve_network_failure() {
        let explorer = explorer(
            MockCompletion::new().with_failure(TransportError::Network("dns error".to_string())),
        );

        let err = explorer.resolve("Sa Pa").await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "Không thể lấy tọa độ cho Sa Pa. Lỗi mạng. Vui lòng kiểm tra kết nối internet của bạn."
        );
    }
}
