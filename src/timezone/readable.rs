use once_cell::sync::Lazy;
use regex::Regex;

/// 嚴格的可讀偏移格式: "+HH:MM" / "-HH:MM"
static READABLE_OFFSET_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([+-])(\d{2}):(\d{2})$").expect("readable offset pattern is valid")
});

/// 寬鬆的偏移格式，用於外部解析服務的回應（例如 "+2"、"-9:30"）
static LENIENT_OFFSET_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([+-])(\d{1,2}):?(\d{1,2})?").expect("lenient offset pattern is valid")
});

/// 可接受的偏移小時數上限
const MAX_OFFSET_HOURS: i32 = 16;

/// 將偏移秒數格式化為 "+HH:MM"/"-HH:MM"
///
/// 符號取整體數值的數學符號（零為 "+00:00"），
/// 時/分由絕對值截斷至整分鐘計算。
pub fn format_offset(offset_seconds: i32) -> String {
    let sign = if offset_seconds >= 0 { '+' } else { '-' };
    let abs = offset_seconds.unsigned_abs();
    format!("{}{:02}:{:02}", sign, abs / 3600, (abs % 3600) / 60)
}

/// 解析 "+HH:MM"/"-HH:MM" 為偏移秒數
///
/// [`format_offset`] 的精確反函數。小時絕對值限制在 0..=16、
/// 分鐘在 0..=59；格式不符時回傳 `None`，不會失敗中斷。
pub fn parse_offset(s: &str) -> Option<i32> {
    let caps = READABLE_OFFSET_PATTERN.captures(s)?;

    let hours: i32 = caps[2].parse().ok()?;
    let minutes: i32 = caps[3].parse().ok()?;
    if hours > MAX_OFFSET_HOURS || minutes > 59 {
        return None;
    }

    let magnitude = hours * 3600 + minutes * 60;
    Some(if &caps[1] == "-" { -magnitude } else { magnitude })
}

/// 寬鬆解析外部服務回應中的偏移字串，回傳分鐘數
///
/// 接受 "+2"、"-09"、"+5:45"、"-9:3" 等形式；
/// 無法解析時回傳 `None`。
pub fn parse_lenient_offset_minutes(s: &str) -> Option<i32> {
    let caps = LENIENT_OFFSET_PATTERN.captures(s)?;

    let hours: i32 = caps.get(2)?.as_str().parse().ok()?;
    let mut minutes = hours * 60;
    if let Some(m) = caps.get(3) {
        minutes += m.as_str().parse::<i32>().ok()?;
    }

    Some(if &caps[1] == "-" { -minutes } else { minutes })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, "+00:00")]
    #[case(7200, "+02:00")]
    #[case(-18000, "-05:00")]
    #[case(19800, "+05:30")]
    #[case(-34200, "-09:30")]
    #[case(57600, "+16:00")]
    #[case(-57600, "-16:00")]
    fn test_format_offset(#[case] seconds: i32, #[case] expected: &str) {
        assert_eq!(format_offset(seconds), expected);
    }

    #[test]
    fn test_format_truncates_to_whole_minutes() {
        // 不足一分鐘的秒數被截斷
        assert_eq!(format_offset(3661), "+01:01");
        assert_eq!(format_offset(-3661), "-01:01");
        assert_eq!(format_offset(59), "+00:00");
    }

    #[rstest]
    #[case("+00:00", 0)]
    #[case("+02:00", 7200)]
    #[case("-05:00", -18000)]
    #[case("+05:30", 19800)]
    #[case("-16:00", -57600)]
    fn test_parse_offset(#[case] input: &str, #[case] expected: i32) {
        assert_eq!(parse_offset(input), Some(expected));
    }

    #[rstest]
    #[case("")]
    #[case("02:00")]
    #[case("+2:00")]
    #[case("+02:0")]
    #[case("+02-00")]
    #[case("+17:00")]
    #[case("+02:60")]
    #[case(" +02:00")]
    #[case("+02:00 ")]
    fn test_parse_offset_rejects_malformed(#[case] input: &str) {
        assert_eq!(parse_offset(input), None);
    }

    #[rstest]
    #[case("+2", 120)]
    #[case("-09", -540)]
    #[case("+5:45", 345)]
    #[case("-9:30", -570)]
    #[case("UTC+02:00", 120)]
    fn test_parse_lenient_offset(#[case] input: &str, #[case] expected: i32) {
        assert_eq!(parse_lenient_offset_minutes(input), Some(expected));
    }

    #[test]
    fn test_parse_lenient_offset_rejects_garbage() {
        assert_eq!(parse_lenient_offset_minutes("noon"), None);
        assert_eq!(parse_lenient_offset_minutes(""), None);
    }
}
