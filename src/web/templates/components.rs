use crate::explorer::SearchResult;
use maud::{html, Markup};

pub fn header_section() -> Markup {
    html! {
        header {
            span.heading {
                "Khám Phá Địa Điểm Việt Nam"
            }
            span.subheading {
                "Khám phá các địa điểm thú vị trên khắp Việt Nam."
            }
        }
    }
}

pub fn search_form(query: &str) -> Markup {
    html! {
        form #search action="/" method="get" {
            input #query type="text" name="q" value=(query)
                placeholder="Ví dụ: Hội An, Đà Lạt, Vịnh Hạ Long"
                autocomplete="off";
            button #submit type="submit" { "Tìm kiếm" }
        }
    }
}

/// Contents of `#status`: the spinner while a search is running.
pub fn status_section(result: &SearchResult) -> Markup {
    html! {
        @if result.loading {
            div.loading {
                div.spinner {}
                p.searching { "Đang tìm kiếm \"" (result.query) "\"..." }
                p.hint { "Gemini đang tìm tọa độ và các địa điểm thú vị." }
            }
        }
    }
}

/// Contents of `#error`.
pub fn error_section(result: &SearchResult) -> Markup {
    html! {
        @if let Some(message) = &result.error {
            div.alert role="alert" {
                p.title { "Lỗi" }
                p { (message) }
            }
        }
    }
}

/// Contents of `#results`: the numbered list, in the order the model gave.
pub fn results_section(result: &SearchResult) -> Markup {
    html! {
        @if !result.loading && !result.pois.is_empty() {
            h2 {
                "5 địa điểm hàng đầu cho "
                span.place { (result.query) }
            }
            ul #list {
                @for (index, poi) in result.pois.iter().enumerate() {
                    li {
                        p.name { (index + 1) ". " (poi.name) }
                        p.description { (poi.description) }
                    }
                }
            }
        }
    }
}

pub fn sidebar_section(result: &SearchResult) -> Markup {
    html! {
        aside.open #sidebar {
            div.content {
                (header_section())
                (search_form(&result.query))
                div #status { (status_section(result)) }
                div #error { (error_section(result)) }
                div #results { (results_section(result)) }
            }
        }
    }
}

pub fn map_section() -> Markup {
    html! {
        main {
            button #toggle type="button" aria-label="Thu gọn thanh bên" {
                "‹"
            }
            div #map {}
        }
    }
}
