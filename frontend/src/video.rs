pub const PLAYER_ORIGIN: &str = "https://www.youtube-nocookie.com";
const THUMBNAIL_ORIGIN: &str = "https://i.ytimg.com";

/// Player URL for a video id. The id is passed through untouched.
pub fn embed_url(video_id: &str) -> String {
    format!("{}/embed/{}?autoplay=1&rel=0", PLAYER_ORIGIN, video_id)
}

pub fn thumbnail_url(video_id: &str) -> String {
    format!("{}/vi/{}/hqdefault.jpg", THUMBNAIL_ORIGIN, video_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embed_url_autoplays_without_related_videos() {
        assert_eq!(
            embed_url("89oIQkmxe3w"),
            "https://www.youtube-nocookie.com/embed/89oIQkmxe3w?autoplay=1&rel=0"
        );
    }

    #[test]
    fn ids_are_not_rewritten() {
        assert!(embed_url("z-snSx1SnOs").contains("/embed/z-snSx1SnOs?"));
        assert_eq!(
            thumbnail_url("ysz5S6PUM-U"),
            "https://i.ytimg.com/vi/ysz5S6PUM-U/hqdefault.jpg"
        );
    }
}
