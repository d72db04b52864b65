use std::fmt;

/// Substring Synthea puts in the name of the hospital (Organization/Location) bundle.
pub const HOSPITAL_MARKER: &str = "hospitalInformation";

/// Substring Synthea puts in the name of the practitioner bundle.
pub const PRACTITIONER_MARKER: &str = "practitionerInformation";

/// Category of a Synthea bundle, derived from its file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BundleKind {
    Hospital,
    Practitioner,
    Patient,
}

impl BundleKind {
    /// Whether `file_name` carries this category's marker.
    ///
    /// `Patient` matches names carrying neither marker. Unlike [`classify`],
    /// a name with both markers matches both `Hospital` and `Practitioner`.
    pub fn matches(self, file_name: &str) -> bool {
        match self {
            BundleKind::Hospital => file_name.contains(HOSPITAL_MARKER),
            BundleKind::Practitioner => file_name.contains(PRACTITIONER_MARKER),
            BundleKind::Patient => {
                !file_name.contains(HOSPITAL_MARKER) && !file_name.contains(PRACTITIONER_MARKER)
            }
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BundleKind::Hospital => "hospital",
            BundleKind::Practitioner => "practitioner",
            BundleKind::Patient => "patient",
        }
    }
}

impl fmt::Display for BundleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a file by literal, case-sensitive substring match on its name.
pub fn classify(file_name: &str) -> BundleKind {
    if BundleKind::Hospital.matches(file_name) {
        BundleKind::Hospital
    } else if BundleKind::Practitioner.matches(file_name) {
        BundleKind::Practitioner
    } else {
        BundleKind::Patient
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_synthea_file_names() {
        assert_eq!(
            classify("hospitalInformation1671030146537.json"),
            BundleKind::Hospital
        );
        assert_eq!(
            classify("practitionerInformation1671030146537.json"),
            BundleKind::Practitioner
        );
        assert_eq!(
            classify("Bob_Smith_0b3c8a4e-1f2d-4c5b-9a7e-6d8f0e1a2b3c.json"),
            BundleKind::Patient
        );
    }

    #[test]
    fn marker_may_appear_anywhere() {
        assert_eq!(classify("x_hospitalInformation_y"), BundleKind::Hospital);
        assert_eq!(classify("old-practitionerInformation.bak"), BundleKind::Practitioner);
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert_eq!(classify("HospitalInformation1.json"), BundleKind::Patient);
        assert_eq!(classify("hospitalinformation1.json"), BundleKind::Patient);
        assert_eq!(classify("PRACTITIONERINFORMATION.json"), BundleKind::Patient);
    }

    #[test]
    fn no_glob_or_regex_semantics() {
        assert_eq!(classify("hospital*Information.json"), BundleKind::Patient);
        assert_eq!(classify("hospital.Information.json"), BundleKind::Patient);
    }

    #[test]
    fn both_markers_classify_as_hospital_but_match_both() {
        let name = "hospitalInformation_practitionerInformation.json";
        assert_eq!(classify(name), BundleKind::Hospital);
        assert!(BundleKind::Hospital.matches(name));
        assert!(BundleKind::Practitioner.matches(name));
        assert!(!BundleKind::Patient.matches(name));
    }

    #[test]
    fn display_is_lowercase_category() {
        assert_eq!(BundleKind::Practitioner.to_string(), "practitioner");
    }
}
