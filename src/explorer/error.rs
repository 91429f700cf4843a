use crate::completion::TransportError;
use crate::explorer::classify::DetailTable;
use std::fmt;
use std::fmt::{Display, Formatter};

/// Which structure the model failed to produce.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
    Coordinates,
    PointList,
}

impl Display for Shape {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Coordinates => {
                write!(f, "Nhận được định dạng tọa độ không hợp lệ từ mô hình AI.")
            }
            Shape::PointList => write!(
                f,
                "Nhận được định dạng POI không hợp lệ từ mô hình AI (dự kiến là một mảng)."
            ),
        }
    }
}

/// Everything a search can fail with. The display text is the message shown
/// to the user.
#[derive(Debug, thiserror::Error)]
pub enum ExplorerError {
    #[error("Mô hình AI đã trả về một phản hồi trống.")]
    EmptyResponse,
    #[error("Mô hình AI đã trả về phản hồi JSON không hợp lệ.")]
    MalformedJson(#[source] serde_json::Error),
    #[error("{0}")]
    InvalidShape(Shape),
    #[error("{message}")]
    Transport {
        message: String,
        #[source]
        source: TransportError,
    },
}

impl ExplorerError {
    /// Rewrites a failed remote call into a user-facing message. With a
    /// location the message names it; otherwise it is the detail alone.
    pub fn transport(source: TransportError, table: &DetailTable, location: Option<&str>) -> Self {
        let detail = table.classify(&source.to_string());
        let message = match location {
            Some(location) => format!("Không thể lấy tọa độ cho {location}. {detail}"),
            None => detail.to_string(),
        };
        ExplorerError::Transport { message, source }
    }
}
