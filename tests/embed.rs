use portfolio_site::content::{Video, VIDEOS};
use portfolio_site::embed::{cards, EmbedCard, EmbedError};

fn video(url: &'static str) -> Video {
    Video {
        title: "Speaker how-to",
        url,
        channel: "E&P AUDIO",
        caption: Some("charge it <b>first</b>"),
        hashtags: Some("#howto  #ลําโพง #"),
        music: Some("original sound - E&P Audio"),
    }
}

#[test]
fn card_carries_id_author_and_cite() {
    let url = "https://www.tiktok.com/@easyandperfectaudio/video/7452660308424019207";
    let card = EmbedCard::from_video(&video(url)).unwrap();
    assert_eq!(card.cite, url);
    assert_eq!(card.video_id, "7452660308424019207");
    assert_eq!(card.author.text, "@easyandperfectaudio");
    assert_eq!(
        card.author.href,
        "https://www.tiktok.com/@easyandperfectaudio?refer=embed"
    );
    assert_eq!(card.title, "Speaker how-to");
    assert_eq!(card.channel, "E&P AUDIO");
}

#[test]
fn caption_is_kept_verbatim() {
    let card = EmbedCard::from_video(&video(
        "https://www.tiktok.com/@a/video/1",
    ))
    .unwrap();
    // Escaping is the renderer's job: it only ever sets this as text.
    assert_eq!(card.caption, "charge it <b>first</b>");
}

#[test]
fn tags_are_percent_encoded_and_empty_ones_dropped() {
    let card = EmbedCard::from_video(&video("https://www.tiktok.com/@a/video/1")).unwrap();
    assert_eq!(card.tags.len(), 2);

    assert_eq!(card.tags[0].text, "#howto");
    assert_eq!(card.tags[0].title, "howto");
    assert_eq!(card.tags[0].href, "https://www.tiktok.com/tag/howto?refer=embed");

    assert_eq!(card.tags[1].text, "#ลําโพง");
    assert!(card.tags[1].href.starts_with("https://www.tiktok.com/tag/%E0%B8%A5"));
    assert!(card.tags[1].href.ends_with("?refer=embed"));
    assert!(card.tags[1].href.is_ascii());
}

#[test]
fn music_link_is_labelled_and_encoded() {
    let card = EmbedCard::from_video(&video("https://www.tiktok.com/@a/video/1")).unwrap();
    let music = card.music.unwrap();
    assert_eq!(music.text, "♬ original sound - E&P Audio");
    assert_eq!(music.title, music.text);
    assert_eq!(
        music.href,
        "https://www.tiktok.com/music/original%20sound%20-%20E&P%20Audio?refer=embed"
    );
}

#[test]
fn optional_fields_may_be_absent() {
    let bare = Video {
        caption: None,
        hashtags: None,
        music: None,
        ..video("https://www.tiktok.com/@a/video/42")
    };
    let card = EmbedCard::from_video(&bare).unwrap();
    assert_eq!(card.caption, "");
    assert!(card.tags.is_empty());
    assert!(card.music.is_none());
}

#[test]
fn malformed_urls_are_rejected() {
    assert!(matches!(
        EmbedCard::from_video(&video("not a url")),
        Err(EmbedError::InvalidUrl(_))
    ));
    assert!(matches!(
        EmbedCard::from_video(&video("https://www.tiktok.com/@a/photo/123")),
        Err(EmbedError::MissingVideoId(_))
    ));
    assert!(matches!(
        EmbedCard::from_video(&video("https://www.tiktok.com/@a/video/12ab")),
        Err(EmbedError::MissingVideoId(_))
    ));
    assert!(matches!(
        EmbedCard::from_video(&video("https://www.tiktok.com/user/video/123")),
        Err(EmbedError::MissingUsername(_))
    ));
}

#[test]
fn every_bundled_video_builds_a_card() {
    let (ok, failed) = cards(VIDEOS);
    assert!(failed.is_empty(), "{failed:?}");
    assert_eq!(ok.len(), VIDEOS.len());
    assert!(ok.iter().all(|c| c.video_id.len() == 19));
}
