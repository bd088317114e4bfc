/// How long the chat frame may stay silent before we show the error screen.
pub const CHAT_LOAD_TIMEOUT_MS: u32 = 30_000;

pub const LANGUAGE_STORAGE_KEY: &str = "language";

const DEFAULT_CHAT_BASE_URL: &str = "https://cloud.fastgpt.cn";
const DEFAULT_CHAT_SHARE_ID: &str = "vFX7r3XJIUD215GORKgPMPpB";

/// Both halves can be swapped at build time with `CHAT_BASE_URL` and
/// `CHAT_SHARE_ID`.
pub fn chat_share_url() -> String {
    share_url(
        option_env!("CHAT_BASE_URL").unwrap_or(DEFAULT_CHAT_BASE_URL),
        option_env!("CHAT_SHARE_ID").unwrap_or(DEFAULT_CHAT_SHARE_ID),
    )
}

fn share_url(base: &str, share_id: &str) -> String {
    format!(
        "{}/chat/share?shareId={}",
        base.trim_end_matches('/'),
        urlencoding::encode(share_id)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn share_url_encodes_id_and_trims_slash() {
        assert_eq!(
            share_url("https://chat.example.com/", "a b&c"),
            "https://chat.example.com/chat/share?shareId=a%20b%26c"
        );
    }

    #[test]
    fn default_share_url_points_at_share_page() {
        assert!(chat_share_url().contains("/chat/share?shareId="));
    }
}
