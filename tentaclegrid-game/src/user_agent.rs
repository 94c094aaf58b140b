//! User-agent sniffing rules.
//!
//! Classification is plain substring matching over a lowercased copy of the
//! user-agent string. Precedence for the engine check: any Chrome or Android
//! token vetoes a Safari match, since Chrome on Android and Android WebViews
//! both carry a `Safari/` product token in their signature.
use serde::{Deserialize, Serialize};

use crate::constants::{MOBILE_UA_TOKENS, SAFARI_UA_TOKEN, SAFARI_VETO_TOKENS};

/// Facts derived from a user-agent string alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct UserAgentTraits {
    pub is_mobile: bool,
    pub is_safari: bool,
}

impl UserAgentTraits {
    /// Classify a raw user-agent string.
    #[must_use]
    pub fn classify(user_agent: &str) -> Self {
        let lowered = user_agent.to_ascii_lowercase();
        Self {
            is_mobile: contains_any(&lowered, &MOBILE_UA_TOKENS),
            is_safari: safari_in_lowered(&lowered),
        }
    }
}

/// True when the user-agent names an iPhone, iPad, iPod or Android device.
#[must_use]
pub fn is_mobile_user_agent(user_agent: &str) -> bool {
    contains_any(&user_agent.to_ascii_lowercase(), &MOBILE_UA_TOKENS)
}

/// True for genuine Safari; Chrome and Android signatures never qualify.
#[must_use]
pub fn is_safari_engine(user_agent: &str) -> bool {
    safari_in_lowered(&user_agent.to_ascii_lowercase())
}

fn safari_in_lowered(lowered: &str) -> bool {
    lowered.contains(SAFARI_UA_TOKEN) && !contains_any(lowered, &SAFARI_VETO_TOKENS)
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    const IPHONE_SAFARI: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_4 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.4 Mobile/15E148 Safari/604.1";
    const ANDROID_CHROME: &str = "Mozilla/5.0 (Linux; Android 14; Pixel 8) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Mobile Safari/537.36";
    const DESKTOP_CHROME: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";
    const DESKTOP_SAFARI: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 14_4) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.4 Safari/605.1.15";
    const DESKTOP_FIREFOX: &str =
        "Mozilla/5.0 (X11; Linux x86_64; rv:125.0) Gecko/20100101 Firefox/125.0";

    #[test]
    fn mobile_tokens_match_case_insensitively() {
        assert!(is_mobile_user_agent(IPHONE_SAFARI));
        assert!(is_mobile_user_agent(ANDROID_CHROME));
        assert!(is_mobile_user_agent("something IPAD something"));
        assert!(is_mobile_user_agent("ipod touch"));
        assert!(!is_mobile_user_agent(DESKTOP_CHROME));
        assert!(!is_mobile_user_agent(DESKTOP_FIREFOX));
        assert!(!is_mobile_user_agent(""));
    }

    #[test]
    fn chrome_and_android_veto_safari() {
        assert!(!is_safari_engine(ANDROID_CHROME));
        assert!(!is_safari_engine(DESKTOP_CHROME));
        assert!(!is_safari_engine("Android WebView Safari/537.36"));
    }

    #[test]
    fn plain_safari_is_detected() {
        assert!(is_safari_engine(IPHONE_SAFARI));
        assert!(is_safari_engine(DESKTOP_SAFARI));
        assert!(is_safari_engine("SAFARI"));
        assert!(!is_safari_engine(DESKTOP_FIREFOX));
    }

    #[test]
    fn classify_agrees_with_free_functions() {
        for ua in [
            IPHONE_SAFARI,
            ANDROID_CHROME,
            DESKTOP_CHROME,
            DESKTOP_SAFARI,
            DESKTOP_FIREFOX,
        ] {
            let traits = UserAgentTraits::classify(ua);
            assert_eq!(traits.is_mobile, is_mobile_user_agent(ua), "{ua}");
            assert_eq!(traits.is_safari, is_safari_engine(ua), "{ua}");
        }
    }
}
