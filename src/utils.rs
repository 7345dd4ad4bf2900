use encoding_rs::WINDOWS_1252;

const SNIFF_LEN: usize = 4096;

pub fn parse_size(s: &str) -> Option<u64> {
    let s = s.trim().to_lowercase();
    // Longest suffixes first so "kib" is not read as "b".
    let units = [
        ("gib", 1024u64.pow(3)),
        ("mib", 1024u64.pow(2)),
        ("kib", 1024),
        ("gb", 1000u64.pow(3)),
        ("mb", 1000u64.pow(2)),
        ("kb", 1000),
        ("g", 1000u64.pow(3)),
        ("m", 1000u64.pow(2)),
        ("k", 1000),
        ("b", 1),
    ];

    for (unit, mult) in units {
        if let Some(number) = s.strip_suffix(unit) {
            let value = number.trim().parse::<f64>().ok()?;
            if !value.is_finite() || value < 0.0 {
                return None;
            }
            return Some((value * mult as f64) as u64);
        }
    }
    s.parse().ok()
}

// Invalid UTF-8 alone is not binary; it gets decoded as Windows-1252.
pub fn looks_binary(bytes: &[u8]) -> bool {
    bytes[..bytes.len().min(SNIFF_LEN)].contains(&0)
}

pub fn decode_text(bytes: Vec<u8>, normalize_eol: bool) -> String {
    let content = match String::from_utf8(bytes) {
        Ok(s) => s,
        Err(err) => {
            log::debug!("input is not UTF-8, decoding as Windows-1252");
            let (res, _, _) = WINDOWS_1252.decode(err.as_bytes());
            res.into_owned()
        }
    };

    if normalize_eol {
        content.replace("\r\n", "\n").replace('\r', "\n")
    } else {
        content
    }
}
