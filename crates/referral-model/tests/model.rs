//! Tests for the referral data model.

use referral_model::columns::{
    DATE_COLUMNS, NUMERIC_COLUMNS, REQUIRED_COLUMNS, TEXT_COLUMNS,
};
use referral_model::{PayerOrg, ReferralError, SummaryRow, TaskCategory};

#[test]
fn required_columns_are_unique() {
    let mut seen = std::collections::BTreeSet::new();
    for name in REQUIRED_COLUMNS {
        assert!(seen.insert(name), "duplicate required column: {name}");
    }
}

#[test]
fn typed_columns_are_required() {
    for name in DATE_COLUMNS.iter().chain(&NUMERIC_COLUMNS).chain(&TEXT_COLUMNS) {
        assert!(
            REQUIRED_COLUMNS.contains(name),
            "typed column {name} missing from required list"
        );
    }
}

#[test]
fn payer_parse_trims_and_uppercases() {
    assert_eq!(PayerOrg::parse("CCHP"), PayerOrg::Cchp);
    assert_eq!(PayerOrg::parse("  cchp "), PayerOrg::Cchp);
    assert_eq!(PayerOrg::parse("ccah"), PayerOrg::Ccah);
    assert_eq!(PayerOrg::parse("Php"), PayerOrg::Php);
    assert_eq!(PayerOrg::parse("Kaiser"), PayerOrg::Other);
    assert_eq!(PayerOrg::parse(""), PayerOrg::Other);
}

#[test]
fn category_order_is_fixed() {
    let names: Vec<&str> = TaskCategory::ALL
        .iter()
        .map(|category| category.display_name())
        .collect();
    assert_eq!(
        names,
        [
            "INITIAL MTG box delivery",
            "ONGOING MTG box delivery",
            "Nutritional assessment",
            "Speak to member",
            "TAR approval",
            "Nutritional counseling",
            "Reauth not submitted",
        ]
    );
}

#[test]
fn sheet_names_fit_xlsx_limit() {
    for category in TaskCategory::ALL {
        assert!(category.sheet_name().len() <= 31);
    }
}

#[test]
fn schema_error_lists_every_missing_column() {
    let error = ReferralError::Schema {
        missing: vec!["Zip Code".to_string(), "County".to_string()],
    };
    let message = error.to_string();
    assert!(message.contains("missing required columns"));
    assert!(message.contains("\n  - Zip Code"));
    assert!(message.contains("\n  - County"));
}

#[test]
fn summary_row_serializes() {
    let row = SummaryRow::new(TaskCategory::TarApproval, 3);
    let json = serde_json::to_string(&row).unwrap();
    let back: SummaryRow = serde_json::from_str(&json).unwrap();
    assert_eq!(back, row);
    assert_eq!(back.display_name(), "TAR approval");
    assert!(back.definition().contains("TAR approval"));
}
