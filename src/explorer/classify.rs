/// Ordered `(needle, message)` rules matched against the lower-cased text of
/// a transport failure. The first rule whose needle occurs wins; needles
/// must be lower-case.
#[derive(Debug)]
pub struct DetailTable {
    rules: &'static [(&'static str, &'static str)],
    fallback: &'static str,
}

impl DetailTable {
    pub const fn new(rules: &'static [(&'static str, &'static str)], fallback: &'static str) -> Self {
        Self { rules, fallback }
    }

    pub fn classify(&self, failure: &str) -> &'static str {
        let failure = failure.to_lowercase();
        self.rules
            .iter()
            .find(|(needle, _)| failure.contains(needle))
            .map(|(_, message)| *message)
            .unwrap_or(self.fallback)
    }
}

const INVALID_KEY: &str =
    "API key không hợp lệ. Vui lòng đảm bảo biến môi trường GEMINI_API_KEY được đặt chính xác.";
const SERVER_ERROR: &str = "Lỗi máy chủ từ dịch vụ AI (lỗi 500). Vui lòng thử lại sau.";
const NETWORK_ERROR: &str = "Lỗi mạng. Vui lòng kiểm tra kết nối internet của bạn.";

pub const COORDINATE_DETAILS: DetailTable = DetailTable::new(
    &[
        ("api key not valid", INVALID_KEY),
        (
            "403",
            "Lỗi xác thực (lỗi 403). Vui lòng kiểm tra API key và các quyền truy cập của nó (ví dụ: giới hạn IP hoặc referrer).",
        ),
        (
            "400",
            "Yêu cầu không hợp lệ (lỗi 400). Tên địa điểm có thể không được chấp nhận.",
        ),
        ("500", SERVER_ERROR),
        ("fetch", NETWORK_ERROR),
    ],
    "Địa điểm có thể không hợp lệ hoặc đã xảy ra lỗi kết nối.",
);

pub const POI_DETAILS: DetailTable = DetailTable::new(
    &[
        ("api key not valid", INVALID_KEY),
        (
            "403",
            "Lỗi xác thực (lỗi 403). Vui lòng kiểm tra API key và các quyền truy cập của nó.",
        ),
        ("400", "Yêu cầu không hợp lệ (lỗi 400)."),
        ("500", SERVER_ERROR),
        ("fetch", NETWORK_ERROR),
    ],
    "Đã xảy ra lỗi khi truy xuất các điểm ưa thích.",
);
