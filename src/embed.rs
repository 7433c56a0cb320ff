//! Structured description of a third-party video embed.
//!
//! The embed script scans the page for `blockquote.tiktok-embed` elements and
//! replaces them with players. [`EmbedCard`] carries exactly the pieces that
//! markup needs; the DOM layer turns it into elements without ever parsing
//! text as HTML.

use thiserror::Error;
use url::Url;

use crate::content::Video;

pub const EMBED_SCRIPT_SRC: &str = "https://www.tiktok.com/embed.js";
pub const EMBED_CLASS: &str = "tiktok-embed";
pub const EMBED_STYLE: &str = "max-width: 605px;min-width: 325px;";
const REFER_QUERY: &str = "refer=embed";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EmbedError {
    #[error("invalid video url {0:?}")]
    InvalidUrl(String),
    #[error("no numeric video id in {0:?}")]
    MissingVideoId(String),
    #[error("no @username in {0:?}")]
    MissingUsername(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub text: String,
    pub title: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedCard {
    pub cite: String,
    pub video_id: String,
    pub author: Link,
    pub caption: String,
    pub tags: Vec<Link>,
    pub music: Option<Link>,
    pub title: String,
    pub channel: String,
}

impl EmbedCard {
    pub fn from_video(video: &Video) -> Result<Self, EmbedError> {
        let parsed =
            Url::parse(video.url).map_err(|_| EmbedError::InvalidUrl(video.url.to_owned()))?;
        let video_id = video_id(&parsed)
            .ok_or_else(|| EmbedError::MissingVideoId(video.url.to_owned()))?;
        let username = username(&parsed)
            .ok_or_else(|| EmbedError::MissingUsername(video.url.to_owned()))?;

        let handle = format!("@{username}");
        let author = Link {
            text: handle.clone(),
            title: handle.clone(),
            href: site_link(&parsed, &[&handle]),
        };

        let tags = video
            .hashtags
            .unwrap_or_default()
            .split_whitespace()
            .filter_map(|tag| {
                let name = tag.strip_prefix('#').unwrap_or(tag);
                (!name.is_empty()).then(|| Link {
                    text: tag.to_owned(),
                    title: name.to_owned(),
                    href: site_link(&parsed, &["tag", name]),
                })
            })
            .collect();

        let music = video.music.filter(|m| !m.is_empty()).map(|music| {
            let label = format!("♬ {music}");
            Link {
                text: label.clone(),
                title: label,
                href: site_link(&parsed, &["music", music]),
            }
        });

        Ok(Self {
            cite: video.url.to_owned(),
            video_id,
            author,
            caption: video.caption.unwrap_or_default().to_owned(),
            tags,
            music,
            title: video.title.to_owned(),
            channel: video.channel.to_owned(),
        })
    }
}

/// Builds every card that can be built, reporting the rest.
pub fn cards(videos: &[Video]) -> (Vec<EmbedCard>, Vec<EmbedError>) {
    let mut ok = Vec::with_capacity(videos.len());
    let mut failed = Vec::new();
    for video in videos {
        match EmbedCard::from_video(video) {
            Ok(card) => ok.push(card),
            Err(err) => failed.push(err),
        }
    }
    (ok, failed)
}

/// The all-digit path segment following `video`.
fn video_id(url: &Url) -> Option<String> {
    let mut segments = url.path_segments()?;
    segments.by_ref().find(|s| *s == "video")?;
    segments
        .next()
        .filter(|id| !id.is_empty() && id.bytes().all(|b| b.is_ascii_digit()))
        .map(str::to_owned)
}

fn username(url: &Url) -> Option<String> {
    url.path_segments()?
        .find_map(|s| s.strip_prefix('@'))
        .filter(|name| !name.is_empty())
        .map(str::to_owned)
}

/// `<origin of video>/<segments...>?refer=embed` with each segment
/// percent-encoded.
fn site_link(video: &Url, segments: &[&str]) -> String {
    let mut url = video.clone();
    url.set_fragment(None);
    if let Ok(mut path) = url.path_segments_mut() {
        path.clear().extend(segments);
    }
    url.set_query(Some(REFER_QUERY));
    url.into()
}
