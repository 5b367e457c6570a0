use super::phase::Phase;
use serde::{Deserialize, Serialize};

// ============================================================================
// Field catalogue
// ============================================================================

/// Declares the form attributes once and derives from that list:
/// the `FieldId` enum, its key/label/phase lookups, and the `CardRecord`
/// struct with one `Option<String>` per attribute.
///
/// The declaration order is the CSV column order.
macro_rules! card_fields {
    ($( $variant:ident => $field:ident, $key:tt, $label:tt, $phase:ident; )*) => {
        /// Identifier of a single form attribute
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum FieldId {
            $( $variant, )*
        }

        impl FieldId {
            /// All attributes in declaration order
            pub const ALL: &'static [FieldId] = &[ $( FieldId::$variant, )* ];

            /// Wire key, as used in the CSV header and in JSON
            pub fn key(self) -> &'static str {
                match self {
                    $( FieldId::$variant => $key, )*
                }
            }

            /// Human-readable input label
            pub fn label(self) -> &'static str {
                match self {
                    $( FieldId::$variant => $label, )*
                }
            }

            /// Tab the attribute is rendered on
            pub fn phase(self) -> Phase {
                match self {
                    $( FieldId::$variant => Phase::$phase, )*
                }
            }
        }

        /// Credit card record as entered in the form.
        ///
        /// `None` means the attribute was never written; `Some("")` means it
        /// was written and then cleared. Absent attributes are skipped in JSON
        /// and in the CSV export.
        #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
        pub struct CardRecord {
            $(
                #[serde(rename = $key, default, skip_serializing_if = "Option::is_none")]
                pub $field: Option<String>,
            )*
        }

        impl CardRecord {
            /// Value of an attribute, `None` if it was never written
            pub fn get(&self, field: FieldId) -> Option<&str> {
                match field {
                    $( FieldId::$variant => self.$field.as_deref(), )*
                }
            }

            fn slot_mut(&mut self, field: FieldId) -> &mut Option<String> {
                match field {
                    $( FieldId::$variant => &mut self.$field, )*
                }
            }
        }
    };
}

card_fields! {
    // Phase1
    ImageName => image_name, "imageName", "Image Name", Phase1;
    RecordNo => record_no, "recordNo", "Record No.", Phase1;
    CustomerId => customer_id, "customerId", "Customer ID", Phase1;
    CardIssueType => card_issue_type, "cardIssueType", "Card Issue Type", Phase1;
    CardLimit => card_limit, "cardLimit", "Card Limit", Phase1;
    AverageMonthlyUsage => average_monthly_usage, "averageMonthlyUsage", "Average Monthly Usage", Phase1;
    CreditCardProvidence => credit_card_providence, "creditCardProvidence", "Does Credit card providence life insurance", Phase1;
    AverageMonthlyPayment => average_monthly_payment, "averageMonthlyPayment", "Average Monthly Payment", Phase1;
    CardIssuerDate => card_issuer_date, "cardIssuerDate", "Card Issuer Date", Phase1;
    CardHolderName => card_holder_name, "cardHolderName", "Card Holder Name", Phase1;
    CardHolderDob => card_holder_dob, "cardHolderDOB", "Card Holder DOB", Phase1;
    AttorneyDocketNo => attorney_docket_no, "attorneyDocketNo", "Attorney Docket No", Phase1;
    Remarks1 => remarks1, "remarks1", "Remarks1", Phase1;

    // Phase2
    Sex1 => sex1, "sex1", "Sex_1", Phase2;
    RegisterAddress => register_address, "registerAddress", "Register Address", Phase2;
    CardType => card_type, "cardType", "Card Type", Phase2;
    RateOfInterestType => rate_of_interest_type, "rateOfInterestType", "Rate of interest Type", Phase2;
    FicoCreditScore => fico_credit_score, "ficoCreditScore", "FICO Credit Score", Phase2;
    City1 => city1, "city1", "City_1", Phase2;
    Province1 => province1, "province1", "Province_1", Phase2;
    Zip1 => zip1, "zip1", "Zip_1", Phase2;
    Remarks2 => remarks2, "remarks2", "Remarks2", Phase2;

    // Phase3
    BeneficiaryName => beneficiary_name, "beneficiaryName", "Beneficiary Name", Phase3;
    AlternateAddress => alternate_address, "alternateAddress", "Alternate Address", Phase3;
    BeneficiaryDob => beneficiary_dob, "beneficiaryDOB", "Beneficiary D.O.B", Phase3;
    City2 => city2, "city2", "City_2", Phase3;
    Province2 => province2, "province2", "Province_2", Phase3;
    Zip2 => zip2, "zip2", "Zip_2", Phase3;
    Country => country, "country", "Country", Phase3;
    BloodGroup => blood_group, "bloodGroup", "Blood Group", Phase3;
    Sex2 => sex2, "sex2", "Sex_2", Phase3;
    CardExpiryDate => card_expiry_date, "cardExpiryDate", "Card Expiry Date", Phase3;
    CreditCardAccountNumber => credit_card_account_number, "creditCardAccountNumber", "Credit Card Account Number", Phase3;
    IdonCustomerNumber => idon_customer_number, "idonCustomerNumber", "IDON Customer Number", Phase3;
    Remarks3 => remarks3, "remarks3", "Remarks3", Phase3;
}

impl FieldId {
    /// Reverse lookup by wire key
    pub fn from_key(key: &str) -> Option<FieldId> {
        FieldId::ALL.iter().copied().find(|f| f.key() == key)
    }
}

// ============================================================================
// Record operations
// ============================================================================

impl CardRecord {
    /// Value for rendering: absent attributes read as empty string
    pub fn value(&self, field: FieldId) -> &str {
        self.get(field).unwrap_or_default()
    }

    /// Write one attribute, leaving every other attribute untouched
    pub fn set(&mut self, field: FieldId, value: impl Into<String>) {
        *self.slot_mut(field) = Some(value.into());
    }

    /// Builder form of [`CardRecord::set`]
    pub fn with(mut self, field: FieldId, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Reset every attribute to absent
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// True if no attribute was ever written
    pub fn is_empty(&self) -> bool {
        FieldId::ALL.iter().all(|f| self.get(*f).is_none())
    }

    /// Written attributes in declaration order
    pub fn present(&self) -> impl Iterator<Item = (FieldId, &str)> + '_ {
        FieldId::ALL
            .iter()
            .filter_map(move |f| self.get(*f).map(|v| (*f, v)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PHASE1_KEYS: [&str; 13] = [
        "imageName", "recordNo", "customerId", "cardIssueType", "cardLimit",
        "averageMonthlyUsage", "creditCardProvidence", "averageMonthlyPayment",
        "cardIssuerDate", "cardHolderName", "cardHolderDOB", "attorneyDocketNo", "remarks1",
    ];
    const PHASE2_KEYS: [&str; 9] = [
        "sex1", "registerAddress", "cardType", "rateOfInterestType", "ficoCreditScore",
        "city1", "province1", "zip1", "remarks2",
    ];
    const PHASE3_KEYS: [&str; 13] = [
        "beneficiaryName", "alternateAddress", "beneficiaryDOB", "city2", "province2", "zip2",
        "country", "bloodGroup", "sex2", "cardExpiryDate", "creditCardAccountNumber",
        "idonCustomerNumber", "remarks3",
    ];

    #[test]
    fn test_keys_are_unique() {
        let mut keys: Vec<&str> = FieldId::ALL.iter().map(|f| f.key()).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), FieldId::ALL.len());
        assert_eq!(FieldId::ALL.len(), 35);
    }

    #[test]
    fn test_catalogue_keys_and_phases() {
        let expected = [
            (Phase::Phase1, &PHASE1_KEYS[..]),
            (Phase::Phase2, &PHASE2_KEYS[..]),
            (Phase::Phase3, &PHASE3_KEYS[..]),
        ];
        for (phase, keys) in expected {
            for key in keys {
                let field = FieldId::from_key(key).unwrap_or_else(|| panic!("missing key {}", key));
                assert_eq!(field.phase(), phase, "{} is on the wrong tab", key);
            }
        }

        let declared: Vec<&str> = FieldId::ALL.iter().map(|f| f.key()).collect();
        let listed: Vec<&str> = PHASE1_KEYS
            .iter()
            .chain(PHASE2_KEYS.iter())
            .chain(PHASE3_KEYS.iter())
            .copied()
            .collect();
        assert_eq!(declared, listed);
    }

    #[test]
    fn test_labels() {
        assert_eq!(FieldId::RecordNo.label(), "Record No.");
        assert_eq!(
            FieldId::CreditCardProvidence.label(),
            "Does Credit card providence life insurance"
        );
        assert_eq!(FieldId::FicoCreditScore.label(), "FICO Credit Score");
        assert_eq!(FieldId::IdonCustomerNumber.label(), "IDON Customer Number");
        assert_eq!(FieldId::BeneficiaryDob.label(), "Beneficiary D.O.B");
        assert_eq!(FieldId::Sex1.label(), "Sex_1");
    }

    #[test]
    fn test_from_key() {
        assert_eq!(FieldId::from_key("recordNo"), Some(FieldId::RecordNo));
        assert_eq!(FieldId::from_key("cardHolderDOB"), Some(FieldId::CardHolderDob));
        assert_eq!(FieldId::from_key("cardHolderDob"), None);
        assert_eq!(FieldId::from_key("unknown"), None);
    }

    #[test]
    fn test_edits_keep_last_value_and_leave_others_absent() {
        let mut record = CardRecord::default();
        record.set(FieldId::CardHolderName, "A");
        record.set(FieldId::CardHolderName, "Al");
        record.set(FieldId::City1, "Paris");
        record.set(FieldId::CardHolderName, "Alice");

        assert_eq!(record.get(FieldId::CardHolderName), Some("Alice"));
        assert_eq!(record.get(FieldId::City1), Some("Paris"));

        let touched = [FieldId::CardHolderName, FieldId::City1];
        for field in FieldId::ALL.iter().filter(|f| !touched.contains(f)) {
            assert_eq!(record.get(*field), None, "{} should be absent", field.key());
        }
    }

    #[test]
    fn test_cleared_value_stays_present() {
        let mut record = CardRecord::default();
        record.set(FieldId::BloodGroup, "O+");
        record.set(FieldId::BloodGroup, "");

        assert_eq!(record.get(FieldId::BloodGroup), Some(""));
        assert_eq!(record.value(FieldId::Zip2), "");
        assert!(!record.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut record = CardRecord::default()
            .with(FieldId::RecordNo, "R1")
            .with(FieldId::Remarks3, "note");
        record.clear();

        assert!(record.is_empty());
        assert_eq!(record, CardRecord::default());
    }

    #[test]
    fn test_present_follows_declaration_order() {
        let record = CardRecord::default()
            .with(FieldId::Country, "Norway")
            .with(FieldId::RecordNo, "R7");

        let present: Vec<_> = record.present().collect();
        assert_eq!(present, vec![(FieldId::RecordNo, "R7"), (FieldId::Country, "Norway")]);
    }

    #[test]
    fn test_json_shape_matches_flat_map() {
        let record = CardRecord::default()
            .with(FieldId::RecordNo, "R1")
            .with(FieldId::CardHolderName, "Alice")
            .with(FieldId::CardHolderDob, "1990-01-01");

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "recordNo": "R1",
                "cardHolderName": "Alice",
                "cardHolderDOB": "1990-01-01"
            })
        );

        let back: CardRecord = serde_json::from_value(json).unwrap();
        assert_eq!(back, record);
    }
}
