use crate::fallback;
use crate::models::{Gif, GifSource, Meme, MemeResponse, MemeSource, Quote, QuoteSource};
use crate::state::AppState;
use serde::Deserialize;
use tracing::{info, warn};

/// Internal failure signal for a single upstream attempt. Never crosses the
/// HTTP boundary; every variant means "try the next source".
#[derive(Debug)]
enum FetchError {
    Http(reqwest::Error),
    Status(reqwest::StatusCode),
    EmptyPayload,
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Http(err) => write!(f, "{err}"),
            Self::Status(status) => write!(f, "unexpected status {status}"),
            Self::EmptyPayload => write!(f, "empty payload"),
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        Self::Http(err)
    }
}

fn unknown_author() -> String {
    "Unknown".to_string()
}

#[derive(Debug, Deserialize)]
struct QuotableQuote {
    content: String,
    #[serde(default = "unknown_author")]
    author: String,
}

#[derive(Debug, Deserialize)]
struct ZenQuote {
    q: String,
    #[serde(default = "unknown_author")]
    a: String,
}

#[derive(Debug, Deserialize)]
struct GiphyEnvelope {
    data: GiphyData,
}

#[derive(Debug, Deserialize)]
struct GiphyData {
    images: GiphyImages,
}

#[derive(Debug, Deserialize)]
struct GiphyImages {
    downsized_medium: GiphyRendition,
}

#[derive(Debug, Deserialize)]
struct GiphyRendition {
    url: String,
}

#[derive(Debug, Deserialize)]
struct MemeApiPost {
    url: String,
    #[serde(default)]
    title: String,
}

/// Random inspirational quote: primary upstream, then backup upstream, then
/// the local pool. Never fails.
pub async fn fetch_quote(state: &AppState) -> Quote {
    match quote_from_primary(state).await {
        Ok(quote) => {
            if state.config.verbose {
                info!("quote from primary API: \"{}\" - {}", quote.text, quote.author);
            }
            return quote;
        }
        Err(err) => warn!("primary quote API failed: {err}"),
    }

    match quote_from_backup(state).await {
        Ok(quote) => {
            if state.config.verbose {
                info!("quote from backup API: \"{}\" - {}", quote.text, quote.author);
            }
            return quote;
        }
        Err(err) => warn!("backup quote API failed: {err}"),
    }

    let text = fallback::random_quote();
    if state.config.verbose {
        info!("using fallback quote: \"{text}\" - Anonymous");
    }
    Quote {
        text: text.to_string(),
        author: "Anonymous".to_string(),
        source: QuoteSource::Local,
    }
}

async fn quote_from_primary(state: &AppState) -> Result<Quote, FetchError> {
    let response = state.http.get(&state.config.quote_primary_url).send().await?;
    if !response.status().is_success() {
        return Err(FetchError::Status(response.status()));
    }

    let quote: QuotableQuote = response.json().await?;
    Ok(Quote {
        text: quote.content,
        author: quote.author,
        source: QuoteSource::Primary,
    })
}

async fn quote_from_backup(state: &AppState) -> Result<Quote, FetchError> {
    let response = state.http.get(&state.config.quote_backup_url).send().await?;
    if !response.status().is_success() {
        return Err(FetchError::Status(response.status()));
    }

    // ZenQuotes answers with a one-element array.
    let quotes: Vec<ZenQuote> = response.json().await?;
    let quote = quotes.into_iter().next().ok_or(FetchError::EmptyPayload)?;
    Ok(Quote {
        text: quote.q,
        author: quote.a,
        source: QuoteSource::Backup,
    })
}

/// Random calming GIF from Giphy when a key is configured, otherwise (or on
/// any failure) a URL from the local pool. Never fails.
pub async fn fetch_gif(state: &AppState) -> Gif {
    if let Some(key) = state.config.giphy_api_key.as_deref() {
        match gif_from_giphy(state, key).await {
            Ok(gif) => {
                if state.config.verbose {
                    info!("GIF from Giphy API: {}", gif.url);
                }
                return gif;
            }
            Err(err) => warn!("Giphy API failed: {err}"),
        }
    }

    let url = fallback::random_gif();
    if state.config.verbose {
        info!("using fallback GIF: {url}");
    }
    Gif {
        url: url.to_string(),
        source: GifSource::Fallback,
    }
}

async fn gif_from_giphy(state: &AppState, key: &str) -> Result<Gif, FetchError> {
    let response = state
        .http
        .get(&state.config.giphy_url)
        .query(&[
            ("api_key", key),
            ("tag", fallback::random_gif_tag()),
            ("rating", "g"),
        ])
        .send()
        .await?;
    if !response.status().is_success() {
        return Err(FetchError::Status(response.status()));
    }

    let envelope: GiphyEnvelope = response.json().await?;
    Ok(Gif {
        url: envelope.data.images.downsized_medium.url,
        source: GifSource::Api,
    })
}

/// Random wholesome meme. On upstream failure the result is the gif
/// fetcher's, shape and all.
pub async fn fetch_meme(state: &AppState) -> MemeResponse {
    match meme_from_api(state).await {
        Ok(meme) => {
            if state.config.verbose {
                info!("meme from API: {} ({})", meme.url, meme.title);
            }
            MemeResponse::Meme(meme)
        }
        Err(err) => {
            warn!("meme API failed: {err}");
            MemeResponse::Gif(fetch_gif(state).await)
        }
    }
}

async fn meme_from_api(state: &AppState) -> Result<Meme, FetchError> {
    let response = state.http.get(&state.config.meme_url).send().await?;
    if !response.status().is_success() {
        return Err(FetchError::Status(response.status()));
    }

    let post: MemeApiPost = response.json().await?;
    Ok(Meme {
        url: post.url,
        title: post.title,
        source: MemeSource::Remote,
    })
}
