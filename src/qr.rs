//! QR code content-pattern analyzer
//!
//! Works purely on the payload string: classifies the well-known QR content
//! patterns (URL, Wi-Fi config, vCard, ...), determines the densest encoding
//! mode the characters allow, and estimates the smallest QR version that
//! holds the payload at error correction level M. No image decoding.

use serde::Serialize;

use crate::error::{CipherError, Result};

/// Character set of QR alphanumeric mode
const ALPHANUMERIC_CHARSET: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ $%*+-./:";

/// Character capacities per version at error correction level M:
/// (numeric, alphanumeric, byte), versions 1-40.
const CAPACITY_M: [(usize, usize, usize); 40] = [
    (34, 20, 14),
    (63, 38, 26),
    (101, 61, 42),
    (149, 90, 62),
    (202, 122, 84),
    (255, 154, 106),
    (293, 178, 122),
    (365, 221, 152),
    (432, 262, 180),
    (513, 311, 213),
    (604, 366, 251),
    (691, 419, 287),
    (796, 483, 331),
    (871, 528, 362),
    (991, 600, 412),
    (1082, 656, 450),
    (1212, 734, 504),
    (1346, 816, 560),
    (1500, 909, 624),
    (1600, 970, 666),
    (1708, 1035, 711),
    (1872, 1134, 779),
    (2059, 1248, 857),
    (2188, 1326, 911),
    (2395, 1451, 997),
    (2544, 1542, 1059),
    (2701, 1637, 1125),
    (2857, 1732, 1190),
    (3035, 1839, 1264),
    (3289, 1994, 1370),
    (3486, 2113, 1452),
    (3693, 2238, 1538),
    (3909, 2369, 1628),
    (4134, 2506, 1722),
    (4343, 2632, 1809),
    (4588, 2780, 1911),
    (4775, 2894, 1989),
    (5039, 3054, 2099),
    (5313, 3220, 2213),
    (5596, 3391, 2331),
];

/// Recognized content patterns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum QrContentKind {
    /// http:// or https:// link
    Url,
    /// mailto: link or bare address
    Email,
    /// tel: link
    Phone,
    /// sms: or smsto: link
    Sms,
    /// WIFI: network config
    Wifi,
    /// geo: coordinates
    Geo,
    /// vCard contact
    VCard,
    /// MeCard contact
    MeCard,
    /// iCalendar event
    CalendarEvent,
    /// Anything else
    Text,
}

/// QR data encoding modes, densest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum QrMode {
    /// Digits only, 10 bits per 3 characters
    Numeric,
    /// Digits, uppercase letters and ` $%*+-./:`
    Alphanumeric,
    /// Arbitrary bytes
    Byte,
}

/// Result of analyzing a QR payload string
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QrAnalysis {
    /// Detected content pattern
    pub kind: QrContentKind,
    /// Densest encoding mode the characters allow
    pub mode: QrMode,
    /// Payload length in mode units (characters, or bytes for byte mode)
    pub length: usize,
    /// Smallest version that fits the payload at level M
    pub version: u32,
    /// Character capacity of that version in the detected mode
    pub capacity: usize,
    /// `length / capacity` of the chosen version
    pub utilization: f64,
}

fn starts_with_ignore_case(content: &str, prefix: &str) -> bool {
    content
        .get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

/// Classify a payload by its well-known prefix patterns.
fn classify(content: &str) -> QrContentKind {
    if starts_with_ignore_case(content, "http://") || starts_with_ignore_case(content, "https://") {
        QrContentKind::Url
    } else if starts_with_ignore_case(content, "mailto:") {
        QrContentKind::Email
    } else if starts_with_ignore_case(content, "tel:") {
        QrContentKind::Phone
    } else if starts_with_ignore_case(content, "smsto:") || starts_with_ignore_case(content, "sms:")
    {
        QrContentKind::Sms
    } else if starts_with_ignore_case(content, "WIFI:") {
        QrContentKind::Wifi
    } else if starts_with_ignore_case(content, "geo:") {
        QrContentKind::Geo
    } else if starts_with_ignore_case(content, "BEGIN:VCARD") {
        QrContentKind::VCard
    } else if starts_with_ignore_case(content, "MECARD:") {
        QrContentKind::MeCard
    } else if starts_with_ignore_case(content, "BEGIN:VEVENT")
        || starts_with_ignore_case(content, "BEGIN:VCALENDAR")
    {
        QrContentKind::CalendarEvent
    } else if is_bare_email(content) {
        QrContentKind::Email
    } else {
        QrContentKind::Text
    }
}

/// Single token of the form local@domain.tld, no spaces.
fn is_bare_email(content: &str) -> bool {
    let Some((local, domain)) = content.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && domain.contains('.')
        && !domain.ends_with('.')
        && !content.contains(char::is_whitespace)
        && content.matches('@').count() == 1
}

/// Densest mode whose character set covers the payload.
fn detect_mode(content: &str) -> QrMode {
    if content.chars().all(|c| c.is_ascii_digit()) {
        QrMode::Numeric
    } else if content.chars().all(|c| ALPHANUMERIC_CHARSET.contains(c)) {
        QrMode::Alphanumeric
    } else {
        QrMode::Byte
    }
}

fn capacity_for(version_index: usize, mode: QrMode) -> usize {
    let (numeric, alphanumeric, byte) = CAPACITY_M[version_index];
    match mode {
        QrMode::Numeric => numeric,
        QrMode::Alphanumeric => alphanumeric,
        QrMode::Byte => byte,
    }
}

/// Analyze a QR payload string.
///
/// # Errors
///
/// Fails on empty content, or content that exceeds the version 40 capacity
/// of its mode.
///
/// # Example
///
/// ```
/// use cipherlab::qr::{analyze, QrContentKind, QrMode};
///
/// let analysis = analyze("HELLO WORLD").unwrap();
/// assert_eq!(analysis.kind, QrContentKind::Text);
/// assert_eq!(analysis.mode, QrMode::Alphanumeric);
/// assert_eq!(analysis.version, 1);
/// ```
pub fn analyze(content: &str) -> Result<QrAnalysis> {
    if content.is_empty() {
        return Err(CipherError::EmptyInput);
    }

    let kind = classify(content);
    let mode = detect_mode(content);
    let length = match mode {
        QrMode::Byte => content.len(),
        _ => content.chars().count(),
    };

    let Some(version_index) = (0..CAPACITY_M.len()).find(|&i| capacity_for(i, mode) >= length)
    else {
        return Err(CipherError::ContentTooLarge {
            size: length,
            max: capacity_for(CAPACITY_M.len() - 1, mode),
        });
    };

    let capacity = capacity_for(version_index, mode);
    Ok(QrAnalysis {
        kind,
        mode,
        length,
        version: version_index as u32 + 1,
        capacity,
        utilization: length as f64 / capacity as f64,
    })
}
