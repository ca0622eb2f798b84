pub use crate::domain::model::Codec;
use crate::utils::error::{BotError, Result};
use encoding_rs::SHIFT_JIS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Endian {
    Little,
    Big,
}

const UTF16_LE_BOM: [u8; 2] = [0xFF, 0xFE];
const UTF16_BE_BOM: [u8; 2] = [0xFE, 0xFF];
const UTF32_LE_BOM: [u8; 4] = [0xFF, 0xFE, 0x00, 0x00];
const UTF32_BE_BOM: [u8; 4] = [0x00, 0x00, 0xFE, 0xFF];

#[derive(Debug, Clone, Copy)]
pub struct RegistryEntry {
    pub id: &'static str,
    pub codec: Codec,
}

/// 固定順序：同分時排在前面的編碼勝出
pub static REGISTRY: [RegistryEntry; 8] = [
    RegistryEntry { id: "8", codec: Codec::Utf8 },
    RegistryEntry { id: "16", codec: Codec::Utf16 },
    RegistryEntry { id: "16l", codec: Codec::Utf16Le },
    RegistryEntry { id: "16b", codec: Codec::Utf16Be },
    RegistryEntry { id: "32", codec: Codec::Utf32 },
    RegistryEntry { id: "32l", codec: Codec::Utf32Le },
    RegistryEntry { id: "32b", codec: Codec::Utf32Be },
    RegistryEntry { id: "s", codec: Codec::ShiftJis },
];

impl Codec {
    pub fn encode(self, text: &str) -> Result<Vec<u8>> {
        match self {
            Codec::Utf8 => Ok(text.as_bytes().to_vec()),
            Codec::Utf16 => {
                let mut out = UTF16_LE_BOM.to_vec();
                out.extend(encode_utf16(text, Endian::Little));
                Ok(out)
            }
            Codec::Utf16Le => Ok(encode_utf16(text, Endian::Little)),
            Codec::Utf16Be => Ok(encode_utf16(text, Endian::Big)),
            Codec::Utf32 => {
                let mut out = UTF32_LE_BOM.to_vec();
                out.extend(encode_utf32(text, Endian::Little));
                Ok(out)
            }
            Codec::Utf32Le => Ok(encode_utf32(text, Endian::Little)),
            Codec::Utf32Be => Ok(encode_utf32(text, Endian::Big)),
            Codec::ShiftJis => {
                let (bytes, _, had_errors) = SHIFT_JIS.encode(text);
                if had_errors || first_non_jis_offset(&bytes).is_some() {
                    let offending = text
                        .chars()
                        .find(|c| !encodes_as_jis_x0208(*c))
                        .map(|c| format!("U+{:04X}", c as u32))
                        .unwrap_or_else(|| "unknown".to_string());
                    return Err(BotError::EncodeFailure {
                        encoding: self.name().to_string(),
                        message: format!("character {} is not representable", offending),
                    });
                }
                Ok(bytes.into_owned())
            }
        }
    }

    pub fn decode(self, bytes: &[u8]) -> Result<String> {
        match self {
            Codec::Utf8 => std::str::from_utf8(bytes)
                .map(str::to_string)
                .map_err(|e| self.decode_error(e.to_string())),
            Codec::Utf16 => {
                let (endian, body) = if let Some(rest) = bytes.strip_prefix(&UTF16_LE_BOM) {
                    (Endian::Little, rest)
                } else if let Some(rest) = bytes.strip_prefix(&UTF16_BE_BOM) {
                    (Endian::Big, rest)
                } else {
                    (Endian::Little, bytes)
                };
                decode_utf16(body, endian).map_err(|reason| self.decode_error(reason))
            }
            Codec::Utf16Le => {
                decode_utf16(bytes, Endian::Little).map_err(|reason| self.decode_error(reason))
            }
            Codec::Utf16Be => {
                decode_utf16(bytes, Endian::Big).map_err(|reason| self.decode_error(reason))
            }
            Codec::Utf32 => {
                let (endian, body) = if let Some(rest) = bytes.strip_prefix(&UTF32_LE_BOM) {
                    (Endian::Little, rest)
                } else if let Some(rest) = bytes.strip_prefix(&UTF32_BE_BOM) {
                    (Endian::Big, rest)
                } else {
                    (Endian::Little, bytes)
                };
                decode_utf32(body, endian).map_err(|reason| self.decode_error(reason))
            }
            Codec::Utf32Le => {
                decode_utf32(bytes, Endian::Little).map_err(|reason| self.decode_error(reason))
            }
            Codec::Utf32Be => {
                decode_utf32(bytes, Endian::Big).map_err(|reason| self.decode_error(reason))
            }
            Codec::ShiftJis => {
                if let Some(offset) = first_non_jis_offset(bytes) {
                    return Err(self.decode_error(format!(
                        "illegal multibyte sequence at offset {}",
                        offset
                    )));
                }
                let text = SHIFT_JIS
                    .decode_without_bom_handling_and_without_replacement(bytes)
                    .ok_or_else(|| {
                        self.decode_error("invalid Shift_JIS byte sequence".to_string())
                    })?;
                if let Some(c) = text.chars().find(|c| ('\u{E000}'..='\u{F8FF}').contains(c)) {
                    return Err(self.decode_error(format!(
                        "user-defined character U+{:04X}",
                        c as u32
                    )));
                }
                Ok(text.into_owned())
            }
        }
    }

    fn decode_error(self, reason: String) -> BotError {
        BotError::DecodeFailure {
            encoding: self.name().to_string(),
            reason,
        }
    }
}

/// 回傳第一個不屬於 JIS X 0208 的首位元組位置。
/// encoding_rs 的 Shift_JIS 是 WHATWG 版 (含 NEC/IBM 擴充與外字區)，這裡收斂成標準 shift_jis。
fn first_non_jis_offset(bytes: &[u8]) -> Option<usize> {
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            0x00..=0x7F | 0xA1..=0xDF => i += 1,
            0x81..=0x84 | 0x89..=0x9F | 0xE0..=0xEA => i += 2,
            // 0x88 只有第 16 區 (0x889F 起)
            0x88 if bytes.get(i + 1).is_some_and(|&trail| trail >= 0x9F) => i += 2,
            _ => return Some(i),
        }
    }
    None
}

fn encodes_as_jis_x0208(c: char) -> bool {
    let mut buf = [0u8; 4];
    let (bytes, _, had_errors) = SHIFT_JIS.encode(c.encode_utf8(&mut buf));
    !had_errors && first_non_jis_offset(&bytes).is_none()
}

fn encode_utf16(text: &str, endian: Endian) -> Vec<u8> {
    text.encode_utf16()
        .flat_map(|unit| match endian {
            Endian::Little => unit.to_le_bytes(),
            Endian::Big => unit.to_be_bytes(),
        })
        .collect()
}

fn encode_utf32(text: &str, endian: Endian) -> Vec<u8> {
    text.chars()
        .flat_map(|c| match endian {
            Endian::Little => (c as u32).to_le_bytes(),
            Endian::Big => (c as u32).to_be_bytes(),
        })
        .collect()
}

fn decode_utf16(bytes: &[u8], endian: Endian) -> std::result::Result<String, String> {
    if bytes.len() % 2 != 0 {
        return Err(format!("truncated data: {} bytes is not a multiple of 2", bytes.len()));
    }

    let units = bytes.chunks_exact(2).map(|pair| {
        let pair = [pair[0], pair[1]];
        match endian {
            Endian::Little => u16::from_le_bytes(pair),
            Endian::Big => u16::from_be_bytes(pair),
        }
    });

    char::decode_utf16(units)
        .collect::<std::result::Result<String, _>>()
        .map_err(|e| format!("unpaired surrogate 0x{:04X}", e.unpaired_surrogate()))
}

fn decode_utf32(bytes: &[u8], endian: Endian) -> std::result::Result<String, String> {
    if bytes.len() % 4 != 0 {
        return Err(format!("truncated data: {} bytes is not a multiple of 4", bytes.len()));
    }

    bytes
        .chunks_exact(4)
        .map(|quad| {
            let quad = [quad[0], quad[1], quad[2], quad[3]];
            let value = match endian {
                Endian::Little => u32::from_le_bytes(quad),
                Endian::Big => u32::from_be_bytes(quad),
            };
            char::from_u32(value).ok_or_else(|| format!("code point 0x{:X} not in range", value))
        })
        .collect()
}

/// 依 id 查詢編碼 (不分大小寫)
pub fn lookup_id(id: &str) -> Option<Codec> {
    REGISTRY
        .iter()
        .find(|entry| entry.id.eq_ignore_ascii_case(id))
        .map(|entry| entry.codec)
}

/// 依標準名稱查詢編碼 (不分大小寫)
pub fn lookup_name(name: &str) -> Option<Codec> {
    REGISTRY
        .iter()
        .find(|entry| entry.codec.name().eq_ignore_ascii_case(name))
        .map(|entry| entry.codec)
}

pub fn encoding_name(id: &str) -> Result<&'static str> {
    lookup_id(id)
        .map(Codec::name)
        .ok_or_else(|| BotError::UnsupportedEncodingId { id: id.to_string() })
}

pub fn supported_ids() -> Vec<&'static str> {
    REGISTRY.iter().map(|entry| entry.id).collect()
}

/// 例如 "8 (UTF-8), 16 (UTF-16), ..."
pub fn registry_listing() -> String {
    REGISTRY
        .iter()
        .map(|entry| format!("{} ({})", entry.id, entry.codec.label()))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn hex_encode(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

pub fn hex_decode(text: &str) -> Result<Vec<u8>> {
    Ok(hex::decode(text)?)
}
