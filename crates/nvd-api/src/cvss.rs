// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Matter Labs

//! CVSS v2 and v3 scoring attached to a CVE record.

use serde::{Deserialize, Serialize};

/// `impact`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Impact {
    /// CVSS v3.x scoring.
    #[serde(
        rename = "baseMetricV3",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub base_metric_v3: Option<BaseMetricV3>,
    /// CVSS v2 scoring.
    #[serde(
        rename = "baseMetricV2",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub base_metric_v2: Option<BaseMetricV2>,
}

impl Impact {
    /// The v3 base score, falling back to the v2 base score.
    pub fn best_base_score(&self) -> Option<f64> {
        self.base_metric_v3
            .as_ref()
            .map(|m| m.cvss_v3.base_score)
            .or_else(|| self.base_metric_v2.as_ref().map(|m| m.cvss_v2.base_score))
    }
}

/// `baseMetricV3`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseMetricV3 {
    /// The CVSS v3 vector and scores.
    #[serde(rename = "cvssV3")]
    pub cvss_v3: CvssV3,
    /// Exploitability sub score.
    #[serde(
        rename = "exploitabilityScore",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub exploitability_score: Option<f64>,
    /// Impact sub score.
    #[serde(rename = "impactScore", default, skip_serializing_if = "Option::is_none")]
    pub impact_score: Option<f64>,
}

/// CVSS v3.0 / v3.1 data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CvssV3 {
    /// `3.0` or `3.1`.
    pub version: String,
    /// e.g. `CVSS:3.1/AV:N/AC:L/PR:N/UI:N/S:U/C:H/I:N/A:N`
    pub vector_string: String,
    /// Attack vector (AV).
    pub attack_vector: AttackVector,
    /// Attack complexity (AC).
    pub attack_complexity: AttackComplexity,
    /// Privileges required (PR).
    pub privileges_required: PrivilegesRequired,
    /// User interaction (UI).
    pub user_interaction: UserInteraction,
    /// Scope (S).
    pub scope: Scope,
    /// Confidentiality impact (C).
    pub confidentiality_impact: CiaImpact,
    /// Integrity impact (I).
    pub integrity_impact: CiaImpact,
    /// Availability impact (A).
    pub availability_impact: CiaImpact,
    /// 0.0 - 10.0
    pub base_score: f64,
    /// Qualitative severity of the base score.
    pub base_severity: SeverityV3,

    /// Exploit code maturity (E).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exploit_code_maturity: Option<String>,
    /// Remediation level (RL).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remediation_level: Option<String>,
    /// Report confidence (RC).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report_confidence: Option<String>,
    /// Temporal score.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temporal_score: Option<f64>,
    /// Qualitative severity of the temporal score.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temporal_severity: Option<SeverityV3>,
    /// Confidentiality requirement (CR).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidentiality_requirement: Option<String>,
    /// Integrity requirement (IR).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub integrity_requirement: Option<String>,
    /// Availability requirement (AR).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability_requirement: Option<String>,
    /// Modified attack vector (MAV).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_attack_vector: Option<String>,
    /// Modified attack complexity (MAC).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_attack_complexity: Option<String>,
    /// Modified privileges required (MPR).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_privileges_required: Option<String>,
    /// Modified user interaction (MUI).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_user_interaction: Option<String>,
    /// Modified scope (MS).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_scope: Option<String>,
    /// Modified confidentiality impact (MC).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_confidentiality_impact: Option<String>,
    /// Modified integrity impact (MI).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_integrity_impact: Option<String>,
    /// Modified availability impact (MA).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_availability_impact: Option<String>,
    /// Environmental score.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environmental_score: Option<f64>,
    /// Qualitative severity of the environmental score.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environmental_severity: Option<SeverityV3>,
}

/// `baseMetricV2`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseMetricV2 {
    /// The CVSS v2 vector and scores.
    #[serde(rename = "cvssV2")]
    pub cvss_v2: CvssV2,
    /// Qualitative severity derived from the base score.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<SeverityV2>,
    /// Exploitability sub score.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exploitability_score: Option<f64>,
    /// Impact sub score.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impact_score: Option<f64>,
    /// NVD lacked the information to score the vulnerability completely.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ac_insuf_info: Option<bool>,
    /// Exploitation yields all privileges on the target.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub obtain_all_privilege: Option<bool>,
    /// Exploitation yields user privileges on the target.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub obtain_user_privilege: Option<bool>,
    /// Exploitation yields other privileges on the target.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub obtain_other_privilege: Option<bool>,
    /// Exploitation requires a user action.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_interaction_required: Option<bool>,
}

/// CVSS v2 data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CvssV2 {
    /// Always `2.0`.
    pub version: String,
    /// e.g. `AV:N/AC:L/Au:N/C:P/I:N/A:N`
    pub vector_string: String,
    /// Access vector (AV).
    pub access_vector: AccessVector,
    /// Access complexity (AC).
    pub access_complexity: AccessComplexity,
    /// Authentication (Au).
    pub authentication: Authentication,
    /// Confidentiality impact (C).
    pub confidentiality_impact: CiaImpactV2,
    /// Integrity impact (I).
    pub integrity_impact: CiaImpactV2,
    /// Availability impact (A).
    pub availability_impact: CiaImpactV2,
    /// 0.0 - 10.0
    pub base_score: f64,

    /// Exploitability (E).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exploitability: Option<String>,
    /// Remediation level (RL).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remediation_level: Option<String>,
    /// Report confidence (RC).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report_confidence: Option<String>,
    /// Temporal score.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temporal_score: Option<f64>,
    /// Collateral damage potential (CDP).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collateral_damage_potential: Option<String>,
    /// Target distribution (TD).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_distribution: Option<String>,
    /// Confidentiality requirement (CR).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidentiality_requirement: Option<String>,
    /// Integrity requirement (IR).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub integrity_requirement: Option<String>,
    /// Availability requirement (AR).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability_requirement: Option<String>,
    /// Environmental score.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environmental_score: Option<f64>,
}

macro_rules! wire_enum {
    ($(#[$meta:meta])* $name:ident { $($(#[$vmeta:meta])* $variant:ident),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
        pub enum $name {
            $($(#[$vmeta])* $variant),+
        }
    };
}

wire_enum! {
    /// CVSS v3 attack vector (AV).
    AttackVector {
        /// AV:N
        Network,
        /// AV:A
        AdjacentNetwork,
        /// AV:L
        Local,
        /// AV:P
        Physical,
    }
}

wire_enum! {
    /// CVSS v3 attack complexity (AC).
    AttackComplexity {
        /// AC:L
        Low,
        /// AC:H
        High,
    }
}

wire_enum! {
    /// CVSS v3 privileges required (PR).
    PrivilegesRequired {
        /// PR:N
        None,
        /// PR:L
        Low,
        /// PR:H
        High,
    }
}

wire_enum! {
    /// CVSS v3 user interaction (UI).
    UserInteraction {
        /// UI:N
        None,
        /// UI:R
        Required,
    }
}

wire_enum! {
    /// CVSS v3 scope (S).
    Scope {
        /// S:U
        Unchanged,
        /// S:C
        Changed,
    }
}

wire_enum! {
    /// CVSS v3 confidentiality, integrity and availability impact (C, I, A).
    CiaImpact {
        /// N
        None,
        /// L
        Low,
        /// H
        High,
    }
}

wire_enum! {
    /// CVSS v3 qualitative severity.
    SeverityV3 {
        /// 0.0
        None,
        /// 0.1 - 3.9
        Low,
        /// 4.0 - 6.9
        Medium,
        /// 7.0 - 8.9
        High,
        /// 9.0 - 10.0
        Critical,
    }
}

wire_enum! {
    /// CVSS v2 access vector (AV).
    AccessVector {
        /// AV:N
        Network,
        /// AV:A
        AdjacentNetwork,
        /// AV:L
        Local,
    }
}

wire_enum! {
    /// CVSS v2 access complexity (AC).
    AccessComplexity {
        /// AC:H
        High,
        /// AC:M
        Medium,
        /// AC:L
        Low,
    }
}

wire_enum! {
    /// CVSS v2 authentication (Au).
    Authentication {
        /// Au:M
        Multiple,
        /// Au:S
        Single,
        /// Au:N
        None,
    }
}

wire_enum! {
    /// CVSS v2 confidentiality, integrity and availability impact (C, I, A).
    CiaImpactV2 {
        /// N
        None,
        /// P
        Partial,
        /// C
        Complete,
    }
}

wire_enum! {
    /// CVSS v2 qualitative severity.
    SeverityV2 {
        /// 0.0 - 3.9
        Low,
        /// 4.0 - 6.9
        Medium,
        /// 7.0 - 10.0
        High,
    }
}
