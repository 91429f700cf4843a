use maud::{html, Markup, PreEscaped, DOCTYPE};

const TITLE: &str = "Khám Phá Địa Điểm Việt Nam";

const LEAFLET_DIST: &str = "https://unpkg.com/leaflet@1.9.4/dist";
const LEAFLET_CSS_SRI: &str = "sha256-p4NxAoJBhIIN+hmNHrzRCf9tD/miZyoHS5obTRR9BMY=";
const LEAFLET_JS_SRI: &str = "sha256-20nQCchB9co0qIjJZRGuk2/Z9VM+kNiyxNV1lvTlZBo=";

/// Full page around `content`, with Leaflet and the app stylesheet loaded.
pub fn base_template(content: &Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="vi" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (TITLE) }
                link rel="stylesheet"
                    href={ (LEAFLET_DIST) "/leaflet.css" }
                    integrity=(LEAFLET_CSS_SRI)
                    crossorigin="";
                script src={ (LEAFLET_DIST) "/leaflet.js" }
                    integrity=(LEAFLET_JS_SRI)
                    crossorigin="" {}
                style { (PreEscaped(include_str!("../styles/main.css"))) }
            }
            body {
                (content)
            }
        }
    }
}
