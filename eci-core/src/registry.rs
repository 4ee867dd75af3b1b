//! Numeric ECI <-> charset name lookup table
//!
//! The registry is inert reference data: a fixed mapping between ECI values,
//! charset names (with their aliases), and human-readable descriptions. It is
//! built once, never mutated afterward, and may be shared freely across
//! threads. Components receive it by reference instead of reaching for a
//! process-wide static.

use crate::escape::eci_text;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Internal pseudo-ECI representing "no charset", the default for segments
/// that carry no ECI
const NO_CHARSET_ECI: i32 = -1;

/// One registered encoding: ECI value, charset aliases (canonical first),
/// display name
struct CharsetEntry {
    eci: u32,
    names: &'static [&'static str],
    display_name: &'static str,
}

/// Information about one supported encoding, as reported by
/// [`CharsetRegistry::supported_encodings`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EciInfo {
    /// The numeric ECI value
    pub eci_value: u32,
    /// Canonical six-digit zero-padded text form of the ECI value
    pub eci_text: String,
    /// Canonical charset name
    pub charset: String,
    /// Human-readable description of the encoding
    pub display_name: String,
}

/// Bidirectional mapping between ECI values and charset names
///
/// - ECI -> charset: the first-registered (canonical) alias wins.
/// - charset -> ECI: every alias maps to its ECI; lookup is exact-match,
///   the table carries the common case variants.
/// - charset -> display name: keyed by canonical name.
pub struct CharsetRegistry {
    eci_to_charset: HashMap<i32, &'static str>,
    charset_to_eci: HashMap<&'static str, i32>,
    display_names: HashMap<&'static str, &'static str>,
}

impl CharsetRegistry {
    /// Build the registry from the built-in encoding table
    pub fn new() -> Self {
        let mut eci_to_charset = HashMap::new();
        let mut charset_to_eci = HashMap::new();
        let mut display_names = HashMap::new();

        // The "no charset" default entry
        eci_to_charset.insert(NO_CHARSET_ECI, "");
        charset_to_eci.insert("", NO_CHARSET_ECI);

        for entry in CHARSET_TABLE {
            let eci = entry.eci as i32;
            eci_to_charset.entry(eci).or_insert(entry.names[0]);
            for name in entry.names {
                charset_to_eci.insert(name, eci);
            }
            display_names.insert(entry.names[0], entry.display_name);
        }

        Self {
            eci_to_charset,
            charset_to_eci,
            display_names,
        }
    }

    /// Look up the canonical charset name for an ECI value
    pub fn charset_for(&self, eci: u32) -> Option<&'static str> {
        self.eci_to_charset
            .get(&(eci as i32))
            .copied()
            .filter(|name| !name.is_empty())
    }

    /// Look up the ECI value for a charset name or alias
    pub fn eci_for(&self, charset: &str) -> Option<u32> {
        self.charset_to_eci
            .get(charset)
            .copied()
            .and_then(|eci| u32::try_from(eci).ok())
    }

    /// Look up the display name for a canonical charset name
    pub fn display_name(&self, charset: &str) -> Option<&'static str> {
        self.display_names.get(charset).copied()
    }

    /// List every supported encoding, sorted by ECI value
    ///
    /// The internal "no charset" default entry is excluded.
    pub fn supported_encodings(&self) -> Vec<EciInfo> {
        let mut infos: Vec<EciInfo> = self
            .eci_to_charset
            .iter()
            .filter(|(&eci, _)| eci >= 0)
            .map(|(&eci, &charset)| EciInfo {
                eci_value: eci as u32,
                eci_text: eci_text(eci as u32),
                charset: charset.to_string(),
                display_name: self
                    .display_name(charset)
                    .unwrap_or_default()
                    .to_string(),
            })
            .collect();
        infos.sort_by_key(|info| info.eci_value);
        infos
    }
}

impl Default for CharsetRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// The AIM ECI encoding assignments for character sets (ECIs 3 through 35),
/// with the charset aliases each assignment is known by
const CHARSET_TABLE: &[CharsetEntry] = &[
    CharsetEntry {
        eci: 3,
        names: &[
            "ISO-8859-1",
            "819",
            "8859_1",
            "cp819",
            "csISOLatin1",
            "ibm-819",
            "IBM819",
            "IBM-819",
            "ISO_8859_1",
            "ISO_8859-1",
            "ISO_8859-1:1987",
            "ISO8859_1",
            "ISO8859-1",
            "iso-ir-100",
            "l1",
            "latin1",
        ],
        display_name: "ISO/IEC 8859-1 Latin alphabet No. 1 (Western European)",
    },
    CharsetEntry {
        eci: 4,
        names: &[
            "ISO-8859-2",
            "8859_2",
            "912",
            "cp912",
            "csISOLatin2",
            "ibm912",
            "ibm-912",
            "ISO_8859-2",
            "ISO_8859-2:1987",
            "iso8859_2",
            "ISO8859-2",
            "iso-ir-101",
            "l2",
            "latin2",
            "windows-28592",
        ],
        display_name: "ISO/IEC 8859-2 Latin alphabet No. 2 (Central European)",
    },
    CharsetEntry {
        eci: 5,
        names: &[
            "ISO-8859-3",
            "8859_3",
            "913",
            "cp913",
            "csISOLatin3",
            "ibm913",
            "ibm-913",
            "ISO_8859-3",
            "ISO_8859-3:1988",
            "iso8859_3",
            "ISO8859-3",
            "iso-ir-109",
            "l3",
            "latin3",
            "windows-28593",
        ],
        display_name: "ISO/IEC 8859-3 Latin alphabet No. 3 (South European)",
    },
    CharsetEntry {
        eci: 6,
        names: &[
            "ISO-8859-4",
            "8859_4",
            "914",
            "cp914",
            "csISOLatin4",
            "ibm914",
            "ibm-914",
            "ISO_8859-4",
            "ISO_8859-4:1988",
            "iso8859_4",
            "iso8859-4",
            "iso-ir-110",
            "l4",
            "latin4",
            "windows-28594",
        ],
        display_name: "ISO/IEC 8859-4 Latin alphabet No. 4 (North European)",
    },
    CharsetEntry {
        eci: 7,
        names: &[
            "ISO-8859-5",
            "8859_5",
            "915",
            "cp915",
            "csISOLatinCyrillic",
            "cyrillic",
            "ibm915",
            "ibm-915",
            "ISO_8859-5",
            "ISO_8859-5:1988",
            "iso8859_5",
            "ISO8859-5",
            "iso-ir-144",
            "windows-28595",
        ],
        display_name: "ISO/IEC 8859-5 Latin/Cyrillic alphabet",
    },
    CharsetEntry {
        eci: 8,
        names: &[
            "ISO-8859-6",
            "1089",
            "8859_6",
            "arabic",
            "ASMO-708",
            "cp1089",
            "csISOLatinArabic",
            "ECMA-114",
            "ibm1089",
            "ibm-1089",
            "ISO_8859-6",
            "ISO_8859-6:1987",
            "iso8859_6",
            "ISO8859-6",
            "ISO-8859-6-E",
            "ISO-8859-6-I",
            "iso-ir-127",
            "windows-28596",
            "x-ISO-8859-6S",
        ],
        display_name: "ISO/IEC 8859-6 Latin/Arabic alphabet",
    },
    CharsetEntry {
        eci: 9,
        names: &[
            "ISO-8859-7",
            "813",
            "8859_7",
            "cp813",
            "csISOLatinGreek",
            "ECMA-118",
            "ELOT_928",
            "greek",
            "greek8",
            "ibm813",
            "ibm-813",
            "ISO_8859-7",
            "ISO_8859-7:1987",
            "iso8859_7",
            "iso8859-7",
            "iso-ir-126",
            "sun_eu_greek",
            "windows-28597",
        ],
        display_name: "ISO/IEC 8859-7 Latin/Greek alphabet",
    },
    CharsetEntry {
        eci: 10,
        names: &[
            "ISO-8859-8",
            "8859_8",
            "916",
            "cp916",
            "csISOLatinHebrew",
            "hebrew",
            "ibm916",
            "ibm-916",
            "ISO_8859-8",
            "ISO_8859-8:1988",
            "iso8859_8",
            "ISO8859-8",
            "ISO-8859-8-E",
            "ISO-8859-8-I",
            "iso-ir-138",
            "windows-28598",
        ],
        display_name: "ISO/IEC 8859-8 Latin/Hebrew alphabet",
    },
    CharsetEntry {
        eci: 11,
        names: &[
            "ISO-8859-9",
            "8859_9",
            "920",
            "cp920",
            "csISOLatin5",
            "ibm920",
            "ibm-920",
            "ISO_8859-9",
            "ISO_8859-9:1989",
            "iso8859_9",
            "ISO8859-9",
            "iso-ir-148",
            "l5",
            "latin5",
            "windows-28599",
        ],
        display_name: "ISO/IEC 8859-9 Latin alphabet No. 5 (Turkish)",
    },
    CharsetEntry {
        eci: 12,
        names: &[
            "ISO-8859-10",
            "csISOLatin6",
            "ISO_8859-10:1992",
            "iso-ir-157",
            "l6",
            "latin6",
        ],
        display_name: "ISO/IEC 8859-10 Latin alphabet No. 6 (Nordic)",
    },
    CharsetEntry {
        eci: 13,
        names: &["x-iso-8859-11", "iso8859_11", "iso-8859-11"],
        display_name: "ISO/IEC 8859-11 Latin/Thai alphabet",
    },
    CharsetEntry {
        eci: 15,
        names: &[
            "ISO-8859-13",
            "8859_13",
            "iso_8859-13",
            "iso8859_13",
            "ISO8859-13",
            "windows-28603",
            "x-IBM921",
        ],
        display_name: "ISO/IEC 8859-13 Latin alphabet No. 7 (Baltic Rim)",
    },
    CharsetEntry {
        eci: 16,
        names: &[
            "ISO-8859-14",
            "ISO_8859-14:1998",
            "iso-celtic",
            "iso-ir-199",
            "l8",
            "latin8",
        ],
        display_name: "ISO/IEC 8859-14 Latin alphabet No. 8 (Celtic)",
    },
    CharsetEntry {
        eci: 17,
        names: &[
            "ISO-8859-15",
            "8859_15",
            "923",
            "cp923",
            "csISO885915",
            "csisolatin0",
            "csISOlatin0",
            "csisolatin9",
            "csISOlatin9",
            "ibm-923",
            "IBM923",
            "IBM-923",
            "ISO_8859-15",
            "ISO8859_15",
            "iso8859_15_fdis",
            "ISO8859_15_FDIS",
            "ISO8859-15",
            "l9",
            "L9",
            "latin0",
            "LATIN0",
            "Latin-9",
            "LATIN9",
            "windows-28605",
        ],
        display_name: "ISO/IEC 8859-15 Latin alphabet No. 9 ",
    },
    CharsetEntry {
        eci: 18,
        names: &[
            "ISO-8859-16",
            "csISO885916",
            "ISO_8859-16",
            "ISO_8859-16:2001",
            "iso-ir-226",
            "l10",
            "latin10",
        ],
        display_name: "ISO/IEC 8859-16 Latin alphabet No. 10 (South-Eastern European)",
    },
    CharsetEntry {
        eci: 20,
        names: &[
            "Shift_JIS",
            "cp932",
            "cp943c",
            "csShiftJIS",
            "csWindows31J",
            "ms_kanji",
            "MS_Kanji",
            "shift_jis",
            "shift-jis",
            "sjis",
            "windows-31j",
            "windows-932",
            "x-JISAutoDetect",
            "x-MS932_0213",
            "x-ms-cp932",
            "x-sjis",
        ],
        display_name: "Shift JIS (JIS X 0208 Annex 1 + JIS X 0201)",
    },
    CharsetEntry {
        eci: 21,
        names: &["windows-1250", "cp1250", "cp5346"],
        display_name: "Windows 1250 Latin 2 (Central Europe)",
    },
    CharsetEntry {
        eci: 22,
        names: &["windows-1251", "ansi-1251", "cp1251", "cp5347"],
        display_name: "Windows 1251 Cyrillic",
    },
    CharsetEntry {
        eci: 23,
        names: &["windows-1252", "cp1252", "cp5348", "ibm1252", "ibm-1252"],
        display_name: "Windows 1252 Latin 1",
    },
    CharsetEntry {
        eci: 24,
        names: &["windows-1256", "cp1256", "x-windows-1256S"],
        display_name: "Windows 1256 Arabic",
    },
    CharsetEntry {
        eci: 25,
        names: &[
            "UTF-16BE",
            "ISO-10646-UCS-2",
            "UnicodeBigUnmarked",
            "UTF_16BE",
            "windows-1201",
            "x-utf-16be",
            "X-UTF-16BE",
        ],
        display_name:
            "ISO/IEC 10646 Universal Coded Character Set (UCS), encoding scheme: UTF-16BE",
    },
    CharsetEntry {
        eci: 26,
        names: &["UTF-8", "unicode-1-1-utf-8", "UTF8", "windows-65001"],
        display_name: "ISO/IEC 10646 Universal Coded Character Set (UCS), encoding scheme: UTF-8",
    },
    CharsetEntry {
        eci: 27,
        names: &[
            "US-ASCII",
            "646",
            "ANSI_X3.4-1968",
            "ANSI_X3.4-1986",
            "ASCII",
            "ascii7",
            "cp367",
            "csASCII",
            "default",
            "IBM367",
            "iso_646.irv:1983",
            "ISO_646.irv:1991",
            "ISO646-US",
            "iso-ir-6",
            "us",
            "windows-20127",
        ],
        display_name:
            "ISO/IEC 646:1991 International Reference Version of ISO 7-bit coded character set ",
    },
    CharsetEntry {
        eci: 28,
        names: &["Big5", "csBig5", "windows-950", "x-windows-950"],
        display_name: "Big5 Chinese Character Set",
    },
    CharsetEntry {
        eci: 29,
        names: &[
            "GB2312",
            "csGB2312",
            "csISO58GB231280",
            "EUC_CN",
            "euccn",
            "euc-cn",
            "GB_2312-80",
            "gb2312",
            "gb2312-1980",
            "gb2312-80",
            "x-EUC-CN",
        ],
        display_name: "GB2312 Chinese Character Set",
    },
    CharsetEntry {
        eci: 30,
        names: &[
            "EUC-KR",
            "5601",
            "csEUCKR",
            "csKSC56011987",
            "euc_kr",
            "euckr",
            "iso-ir-149",
            "korean",
            "ks_c_5601-1987",
            "KS_C_5601-1987",
            "KS_C_5601-1989",
            "ksc_5601",
            "KSC_5601",
            "ksc5601",
            "ksc5601_1987",
            "ksc5601-1987",
            "ms949",
            "windows-949",
            "x-KSC5601",
        ],
        display_name: "KS X 1001 (formerly KS C 5601) Korean Character Set",
    },
    CharsetEntry {
        eci: 31,
        names: &["GBK", "chinese", "CP936", "iso-ir-58", "MS936", "windows-936"],
        display_name: "GBK (extension of GB2312 for Simplified Chinese)",
    },
    CharsetEntry {
        eci: 32,
        names: &["GB18030", "gb18030", "gb18030-2000", "windows-54936"],
        display_name: "GB18030 Chinese coded character set",
    },
    CharsetEntry {
        eci: 33,
        names: &[
            "UTF-16LE",
            "UnicodeLittleUnmarked",
            "UTF_16LE",
            "windows-1200",
            "x-utf-16le",
            "X-UTF-16LE",
        ],
        display_name:
            "ISO/IEC 10646 Universal Coded Character Set (UCS), encoding scheme: UTF-16LE",
    },
    CharsetEntry {
        eci: 34,
        names: &["UTF-32BE", "UTF_32BE", "X-UTF-32BE"],
        display_name:
            "ISO/IEC 10646 Universal Coded Character Set (UCS), encoding scheme: UTF-32BE",
    },
    CharsetEntry {
        eci: 35,
        names: &["UTF-32LE", "UTF_32LE", "X-UTF-32LE"],
        display_name:
            "ISO/IEC 10646 Universal Coded Character Set (UCS), encoding scheme: UTF-32LE",
    },
];
