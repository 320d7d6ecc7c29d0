//! Flag image URLs

/// Flag of the reference region (Wikimedia, public domain)
pub const REFERENCE_FLAG_URL: &str = "https://upload.wikimedia.org/wikipedia/commons/thumb/0/01/Flag_of_California.svg/40px-Flag_of_California.svg.png";

/// Flag image for a two-letter country code at the given pixel width
pub fn flag_url(code: &str, width: u32) -> String {
    format!("https://flagcdn.com/w{}/{}.png", width, code.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_url_lowercases_code() {
        assert_eq!(flag_url("KR", 80), "https://flagcdn.com/w80/kr.png");
        assert_eq!(flag_url("gb", 20), "https://flagcdn.com/w20/gb.png");
    }
}
