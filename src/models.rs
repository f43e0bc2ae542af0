use serde::Serialize;

/// Which stage of the quote fallback chain produced the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QuoteSource {
    Primary,
    Backup,
    Local,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GifSource {
    Api,
    Fallback,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MemeSource {
    Remote,
}

#[derive(Debug, Clone, Serialize)]
pub struct Quote {
    pub text: String,
    pub author: String,
    pub source: QuoteSource,
}

#[derive(Debug, Clone, Serialize)]
pub struct Gif {
    pub url: String,
    pub source: GifSource,
}

#[derive(Debug, Clone, Serialize)]
pub struct Meme {
    pub url: String,
    pub title: String,
    pub source: MemeSource,
}

/// The meme endpoint deliberately answers with the gif shape (no `title`)
/// when its own upstream fails; callers have always seen both shapes.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum MemeResponse {
    Meme(Meme),
    Gif(Gif),
}

#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
    pub timestamp: String,
    pub version: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_tags_serialize_lowercase() {
        assert_eq!(
            serde_json::to_string(&QuoteSource::Primary).unwrap(),
            "\"primary\""
        );
        assert_eq!(
            serde_json::to_string(&QuoteSource::Backup).unwrap(),
            "\"backup\""
        );
        assert_eq!(
            serde_json::to_string(&QuoteSource::Local).unwrap(),
            "\"local\""
        );
        assert_eq!(serde_json::to_string(&GifSource::Api).unwrap(), "\"api\"");
        assert_eq!(
            serde_json::to_string(&GifSource::Fallback).unwrap(),
            "\"fallback\""
        );
        assert_eq!(
            serde_json::to_string(&MemeSource::Remote).unwrap(),
            "\"remote\""
        );
    }

    #[test]
    fn meme_fallback_has_no_title_field() {
        let fallback = MemeResponse::Gif(Gif {
            url: "https://example.com/a.gif".to_string(),
            source: GifSource::Fallback,
        });
        let value = serde_json::to_value(&fallback).unwrap();
        assert!(value.get("title").is_none());
        assert_eq!(value["source"], "fallback");
    }

    #[test]
    fn meme_success_keeps_title() {
        let meme = MemeResponse::Meme(Meme {
            url: "https://example.com/m.png".to_string(),
            title: "wholesome".to_string(),
            source: MemeSource::Remote,
        });
        let value = serde_json::to_value(&meme).unwrap();
        assert_eq!(value["title"], "wholesome");
        assert_eq!(value["source"], "remote");
    }
}
