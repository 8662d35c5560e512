//! Third-party license registry for Gridia.
//!
//! Backs the informational menu's license screen: a static table of the
//! open-source components the application links, with their license texts.

use serde::{Deserialize, Serialize};

/// License information for one third-party component.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LicenseInfo {
    pub name: String,
    pub version: String,
    pub license_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub license_text: String,
}

/// The standard MIT license text with the given copyright line.
fn mit_text(copyright: &str) -> String {
    format!(
        "MIT License\n\n\
         Copyright (c) {}\n\n\
         Permission is hereby granted, free of charge, to any person obtaining a copy \
         of this software and associated documentation files (the \"Software\"), to deal \
         in the Software without restriction, including without limitation the rights \
         to use, copy, modify, merge, publish, distribute, sublicense, and/or sell \
         copies of the Software, and to permit persons to whom the Software is \
         furnished to do so, subject to the following conditions:\n\n\
         The above copyright notice and this permission notice shall be included in all \
         copies or substantial portions of the Software.\n\n\
         THE SOFTWARE IS PROVIDED \"AS IS\", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR \
         IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, \
         FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE \
         AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER \
         LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, \
         OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE \
         SOFTWARE.",
        copyright
    )
}

/// Returns license information for every third-party component Gridia ships.
pub fn licenses() -> Vec<LicenseInfo> {
    vec![
        LicenseInfo {
            name: "rusqlite".to_string(),
            version: "0.32".to_string(),
            license_type: "MIT License".to_string(),
            url: Some("https://github.com/rusqlite/rusqlite".to_string()),
            license_text: mit_text("2014-2021 The rusqlite developers"),
        },
        LicenseInfo {
            name: "SQLite".to_string(),
            version: "3".to_string(),
            license_type: "Public Domain".to_string(),
            url: Some("https://sqlite.org/".to_string()),
            license_text: "The author disclaims copyright to this source code. In place of \
                           a legal notice, here is a blessing:\n\n\
                           May you do good and not evil.\n\
                           May you find forgiveness for yourself and forgive others.\n\
                           May you share freely, never taking more than you give."
                .to_string(),
        },
        LicenseInfo {
            name: "Serde".to_string(),
            version: "1".to_string(),
            license_type: "MIT License".to_string(),
            url: Some("https://serde.rs/".to_string()),
            license_text: mit_text("Erick Tryzelaar and David Tolnay"),
        },
        LicenseInfo {
            name: "serde_json".to_string(),
            version: "1".to_string(),
            license_type: "MIT License".to_string(),
            url: Some("https://github.com/serde-rs/json".to_string()),
            license_text: mit_text("Erick Tryzelaar and David Tolnay"),
        },
    ]
}
