use crate::endp::newsapi::Article;

const UP: &str = "🔺";
const DOWN: &str = "🔻";

/// Body of a single alert SMS: direction and rounded move, then the
/// article's headline and brief. A flat move carries the down arrow.
pub fn format_alert(ticker: &str, change: f64, article: &Article) -> String {
    let arrow = if change > 0.0 { UP } else { DOWN };
    let brief = article.description.as_deref().unwrap_or("");
    format!(
        "{ticker}: {arrow}{change:.2}%\nHeadline: {}\nBrief: {}",
        article.title, brief
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(title: &str, description: Option<&str>) -> Article {
        Article {
            title: title.to_string(),
            description: description.map(str::to_string),
        }
    }

    #[test]
    fn positive_change_points_up() {
        let body = format_alert("TSLA", 5.2, &article("Tesla surges", Some("Shares jumped.")));

        assert!(body.contains("🔺"));
        assert!(body.contains("5.20%"));
        assert!(body.contains("Headline: Tesla surges"));
        assert!(body.contains("Brief: Shares jumped."));
    }

    #[test]
    fn negative_change_points_down() {
        let body = format_alert("TSLA", -5.2, &article("Tesla slides", Some("Shares fell.")));

        assert!(body.contains("🔻"));
        assert!(!body.contains("🔺"));
    }

    #[test]
    fn flat_change_points_down() {
        let body = format_alert("TSLA", 0.0, &article("Tesla flat", None));
        assert!(body.contains("🔻"));
    }

    #[test]
    fn missing_brief_formats_empty() {
        let body = format_alert("TSLA", -6.0, &article("Tesla slides", None));
        assert!(body.ends_with("Brief: "));
    }
}
