//! Payer organizations and pending-task categories.

use serde::{Deserialize, Serialize};

/// Payer organization governing a referral's reauthorization timeline.
///
/// Parsed from the raw cell with trimming and uppercasing; only the
/// reauthorization rule uses this normalized form. Other rules compare the
/// raw cell text directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PayerOrg {
    /// Central California Health Plan: reauthorization due 11 weeks after start.
    Cchp,
    /// Central Coast Alliance for Health: due 15 weeks after start.
    Ccah,
    /// Partnership Health Plan: due 5 calendar months after start.
    Php,
    /// Any other payer; no reauthorization window is defined.
    Other,
}

impl PayerOrg {
    /// Parse a raw payer cell, trimming and uppercasing first.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_uppercase().as_str() {
            "CCHP" => Self::Cchp,
            "CCAH" => Self::Ccah,
            "PHP" => Self::Php,
            _ => Self::Other,
        }
    }
}

/// The seven pending-action categories, in summary order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskCategory {
    InitialMtgDelivery,
    OngoingMtgDelivery,
    NutritionalAssessment,
    SpeakToMember,
    TarApproval,
    NutritionCounseling,
    ReauthNotSubmitted,
}

impl TaskCategory {
    /// All categories in the fixed summary order.
    pub const ALL: [TaskCategory; 7] = [
        TaskCategory::InitialMtgDelivery,
        TaskCategory::OngoingMtgDelivery,
        TaskCategory::NutritionalAssessment,
        TaskCategory::SpeakToMember,
        TaskCategory::TarApproval,
        TaskCategory::NutritionCounseling,
        TaskCategory::ReauthNotSubmitted,
    ];

    /// Display name used in the summary sheet and terminal table.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::InitialMtgDelivery => "INITIAL MTG box delivery",
            Self::OngoingMtgDelivery => "ONGOING MTG box delivery",
            Self::NutritionalAssessment => "Nutritional assessment",
            Self::SpeakToMember => "Speak to member",
            Self::TarApproval => "TAR approval",
            Self::NutritionCounseling => "Nutritional counseling",
            Self::ReauthNotSubmitted => "Reauth not submitted",
        }
    }

    /// Fixed definition text shown next to the count.
    pub fn definition(self) -> &'static str {
        match self {
            Self::InitialMtgDelivery => "4 or more days pending delivery of initial box",
            Self::OngoingMtgDelivery => "8 or more days pending delivery of follow-up boxes",
            Self::NutritionalAssessment => "14 or more days pending nutritional assessment",
            Self::SpeakToMember => "14 or more days pending speak to member status",
            Self::TarApproval => "8 or more days pending TAR approval",
            Self::NutritionCounseling => "9 weeks from referral start date for CCHP",
            Self::ReauthNotSubmitted => {
                "CCHP - 11 weeks (out of 12)\nCCAH - 15 weeks (out of 17)\nPHP - 5 months (out of 6)"
            }
        }
    }

    /// Worksheet name for this category's subset sheet.
    ///
    /// Sheet names are capped at 31 characters by the XLSX format, hence the
    /// abbreviations carried over from the source report.
    pub fn sheet_name(self) -> &'static str {
        match self {
            Self::InitialMtgDelivery => "Pending Initial MTG Box",
            Self::OngoingMtgDelivery => "Pending Ongoing MTG Box",
            Self::NutritionalAssessment => "Pending Nutrition Assess",
            Self::SpeakToMember => "Pending Speak to Member",
            Self::TarApproval => "Pending TAR Approval",
            Self::NutritionCounseling => "Pending CCHP Nutrition",
            Self::ReauthNotSubmitted => "Pending Reauth NotSubm",
        }
    }
}
