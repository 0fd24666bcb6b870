// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Matter Labs

//! Applicability statements: which platforms a CVE affects.

use serde::{Deserialize, Serialize};

/// `configurations`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Configurations {
    /// Schema version, `4.0`.
    #[serde(rename = "CVE_data_version")]
    pub data_version: String,
    /// Top-level nodes, combined with OR.
    #[serde(default)]
    pub nodes: Vec<Node>,
}

impl Configurations {
    /// Every CPE match of every node, depth first.
    pub fn iter_cpe_matches(&self) -> impl Iterator<Item = &CpeMatch> + '_ {
        self.nodes.iter().flat_map(Node::iter_cpe_matches)
    }
}

/// A boolean node of the applicability tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// `AND` or `OR`.
    pub operator: String,
    /// Inverts the node.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub negate: Option<bool>,
    /// Nested nodes.
    #[serde(default)]
    pub children: Vec<Node>,
    /// CPE matches of this node.
    #[serde(default)]
    pub cpe_match: Vec<CpeMatch>,
}

impl Node {
    /// The matches of this node, then those of its children, depth first.
    pub fn iter_cpe_matches(&self) -> Box<dyn Iterator<Item = &CpeMatch> + '_> {
        Box::new(
            self.cpe_match
                .iter()
                .chain(self.children.iter().flat_map(Node::iter_cpe_matches)),
        )
    }
}

/// A CPE match expression, optionally bounded by a version range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CpeMatch {
    /// Whether the matched platform is vulnerable (as opposed to merely a precondition).
    pub vulnerable: bool,
    /// CPE 2.3 formatted string.
    #[serde(rename = "cpe23Uri")]
    pub cpe23_uri: String,
    /// CPE 2.2 URI.
    #[serde(rename = "cpe22Uri", default, skip_serializing_if = "Option::is_none")]
    pub cpe22_uri: Option<String>,
    /// Lower version bound, exclusive.
    #[serde(
        rename = "versionStartExcluding",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub version_start_excluding: Option<String>,
    /// Lower version bound, inclusive.
    #[serde(
        rename = "versionStartIncluding",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub version_start_including: Option<String>,
    /// Upper version bound, exclusive.
    #[serde(
        rename = "versionEndExcluding",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub version_end_excluding: Option<String>,
    /// Upper version bound, inclusive.
    #[serde(
        rename = "versionEndIncluding",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub version_end_including: Option<String>,
    /// Dictionary entries matching this expression, filled with `addOns=dictionaryCpes`.
    #[serde(default)]
    pub cpe_name: Vec<CpeName>,
}

/// An entry of the official CPE dictionary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CpeName {
    /// CPE 2.3 formatted string.
    #[serde(rename = "cpe23Uri")]
    pub cpe23_uri: String,
    /// CPE 2.2 URI.
    #[serde(rename = "cpe22Uri", default, skip_serializing_if = "Option::is_none")]
    pub cpe22_uri: Option<String>,
    /// Last change of the dictionary entry.
    #[serde(
        rename = "lastModifiedDate",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub last_modified_date: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cpe_match(uri: &str) -> CpeMatch {
        CpeMatch {
            vulnerable: true,
            cpe23_uri: uri.to_string(),
            cpe22_uri: None,
            version_start_excluding: None,
            version_start_including: None,
            version_end_excluding: None,
            version_end_including: None,
            cpe_name: Vec::new(),
        }
    }

    #[test]
    fn test_depth_first_cpe_matches() {
        let configurations = Configurations {
            data_version: "4.0".into(),
            nodes: vec![
                Node {
                    operator: "AND".into(),
                    negate: None,
                    children: vec![
                        Node {
                            operator: "OR".into(),
                            negate: None,
                            children: vec![],
                            cpe_match: vec![cpe_match("b")],
                        },
                        Node {
                            operator: "OR".into(),
                            negate: Some(false),
                            children: vec![],
                            cpe_match: vec![cpe_match("c")],
                        },
                    ],
                    cpe_match: vec![cpe_match("a")],
                },
                Node {
                    operator: "OR".into(),
                    negate: None,
                    children: vec![],
                    cpe_match: vec![cpe_match("d")],
                },
            ],
        };

        let uris: Vec<&str> = configurations
            .iter_cpe_matches()
            .map(|m| m.cpe23_uri.as_str())
            .collect();
        assert_eq!(uris, ["a", "b", "c", "d"]);
    }

    #[test]
    fn test_absent_range_stays_absent() {
        let json = r#"{"vulnerable":true,"cpe23Uri":"cpe:2.3:a:gitea:gitea:*:*:*:*:*:*:*:*","versionEndExcluding":"1.12.0","cpe_name":[]}"#;
        let decoded: CpeMatch = serde_json::from_str(json).unwrap();
        assert_eq!(decoded.version_end_excluding.as_deref(), Some("1.12.0"));
        assert_eq!(serde_json::to_string(&decoded).unwrap(), json);
    }
}
